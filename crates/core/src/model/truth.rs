use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

/// Errors that can occur when parsing truth values from external input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TruthError {
    #[error("invalid truth token: {0:?} (expected \"true\", \"false\" or \"unknown\")")]
    InvalidToken(String),
}

//
// ─── TRUTH ────────────────────────────────────────────────────────────────────
//

/// Three-valued result of a single sub-check of an exercise.
///
/// `Unknown` marks a sub-check the learner has not answered yet. It is
/// deliberately distinct from `False` (answered wrongly) so that "not yet
/// attempted" and "wrong" grade differently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Truth {
    True,
    False,
    Unknown,
}

impl Truth {
    /// Returns true only for `Truth::True`.
    #[must_use]
    pub fn is_true(self) -> bool {
        matches!(self, Truth::True)
    }

    /// Kleene conjunction: `False` dominates, then `Unknown`.
    #[must_use]
    pub fn and(self, other: Truth) -> Truth {
        match (self, other) {
            (Truth::False, _) | (_, Truth::False) => Truth::False,
            (Truth::Unknown, _) | (_, Truth::Unknown) => Truth::Unknown,
            (Truth::True, Truth::True) => Truth::True,
        }
    }

    /// Kleene disjunction: `True` dominates, then `Unknown`.
    #[must_use]
    pub fn or(self, other: Truth) -> Truth {
        match (self, other) {
            (Truth::True, _) | (_, Truth::True) => Truth::True,
            (Truth::Unknown, _) | (_, Truth::Unknown) => Truth::Unknown,
            (Truth::False, Truth::False) => Truth::False,
        }
    }

    /// Folds a sequence with [`Truth::and`]. The empty sequence is `True`
    /// (vacuous conjunction); callers grading answers reject empty input
    /// before reaching this point.
    #[must_use]
    pub fn all(values: impl IntoIterator<Item = Truth>) -> Truth {
        values.into_iter().fold(Truth::True, Truth::and)
    }

    /// Returns true when at least one value is definitely `True`.
    ///
    /// Unlike [`Truth::or`], `Unknown` counts as not-true here: this is the
    /// strict "did some check actually pass" test used for partial credit.
    #[must_use]
    pub fn any_true(values: impl IntoIterator<Item = Truth>) -> bool {
        values.into_iter().any(Truth::is_true)
    }
}

impl From<bool> for Truth {
    fn from(value: bool) -> Self {
        if value { Truth::True } else { Truth::False }
    }
}

/// `None` maps to `Unknown`, the unanswered sentinel.
impl From<Option<bool>> for Truth {
    fn from(value: Option<bool>) -> Self {
        match value {
            Some(b) => Truth::from(b),
            None => Truth::Unknown,
        }
    }
}

impl fmt::Display for Truth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Truth::True => "true",
            Truth::False => "false",
            Truth::Unknown => "unknown",
        };
        write!(f, "{s}")
    }
}

impl FromStr for Truth {
    type Err = TruthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "true" => Ok(Truth::True),
            "false" => Ok(Truth::False),
            "unknown" => Ok(Truth::Unknown),
            other => Err(TruthError::InvalidToken(other.to_string())),
        }
    }
}

//
// ─── TESTS ────────────────────────────────────────────────────────────────────
//
