use serde::{Deserialize, Serialize};

use crate::model::truth::Truth;

/// Outcome category of one graded attempt.
///
/// The four kinds are closed: every graded attempt lands in exactly one of
/// them, decided by [`Verdict::from_checks`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    /// Some sub-check is still unanswered.
    StillMissing,
    /// Every answered sub-check failed.
    KeepWorking,
    /// Some sub-checks pass, but not all of them.
    PartiallyCorrect,
    /// Every sub-check passes.
    Correct,
}

impl Verdict {
    /// Decides the outcome for an ordered sequence of sub-check results.
    ///
    /// Precedence, highest first:
    /// 1. the three-valued AND is `Unknown` → `StillMissing`
    /// 2. AND is `False` and at least one check is definitely true →
    ///    `PartiallyCorrect`
    /// 3. AND is `False` otherwise → `KeepWorking`
    /// 4. AND is `True` → `Correct`
    ///
    /// An empty slice is vacuously `Correct`; the grading service rejects
    /// empty input before calling this.
    #[must_use]
    pub fn from_checks(checks: &[Truth]) -> Self {
        match Truth::all(checks.iter().copied()) {
            Truth::Unknown => Verdict::StillMissing,
            Truth::True => Verdict::Correct,
            Truth::False => {
                if Truth::any_true(checks.iter().copied()) {
                    Verdict::PartiallyCorrect
                } else {
                    Verdict::KeepWorking
                }
            }
        }
    }

    /// Returns true only for the fully-correct outcome.
    #[must_use]
    pub fn is_correct(self) -> bool {
        matches!(self, Verdict::Correct)
    }
}
