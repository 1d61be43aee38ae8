use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::verdict::Verdict;

/// Record of a single graded attempt.
///
/// Stores which question was attempted (when known), when, and the verdict.
/// Used for per-session history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttemptLog {
    pub question: Option<String>,
    pub verdict: Verdict,
    pub recorded_at: DateTime<Utc>,
}

impl AttemptLog {
    #[must_use]
    pub fn new(question: Option<String>, verdict: Verdict, recorded_at: DateTime<Utc>) -> Self {
        Self {
            question,
            verdict,
            recorded_at,
        }
    }
}
