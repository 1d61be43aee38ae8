use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TrackerError {
    #[error("correct count ({correct}) exceeds total attempts ({total})")]
    CountMismatch { correct: u32, total: u32 },
}

//
// ─── PROGRESS TRACKER ─────────────────────────────────────────────────────────
//

/// Per-learner counters of attempted vs. correct exercises.
///
/// Created once per learner session; the invariant `total >= correct` holds
/// because `register_correct` is only called after the matching
/// `register_attempt` (the grading service upholds this ordering).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressTracker {
    id: Uuid,
    name: String,
    email: String,
    correct: u32,
    total: u32,
    started_at: DateTime<Utc>,
}

impl ProgressTracker {
    /// Starts a fresh tracker for a learner with zeroed counters.
    #[must_use]
    pub fn new(name: impl Into<String>, email: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            email: email.into(),
            correct: 0,
            total: 0,
            started_at: now,
        }
    }

    /// Rehydrates a tracker from previously recorded counters.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::CountMismatch` if `correct` exceeds `total`.
    pub fn from_persisted(
        id: Uuid,
        name: impl Into<String>,
        email: impl Into<String>,
        correct: u32,
        total: u32,
        started_at: DateTime<Utc>,
    ) -> Result<Self, TrackerError> {
        if correct > total {
            return Err(TrackerError::CountMismatch { correct, total });
        }
        Ok(Self {
            id,
            name: name.into(),
            email: email.into(),
            correct,
            total,
            started_at,
        })
    }

    /// Records one graded attempt, regardless of its outcome.
    pub fn register_attempt(&mut self) {
        self.total = self.total.saturating_add(1);
    }

    /// Records one fully-correct attempt. Callers must have registered the
    /// matching attempt first.
    pub fn register_correct(&mut self) {
        self.correct = self.correct.saturating_add(1);
    }

    /// One-line display summary with the learner name and both counters.
    #[must_use]
    pub fn describe(&self) -> String {
        self.to_string()
    }

    /// Fraction of attempts answered correctly; 0 before the first attempt.
    #[must_use]
    pub fn accuracy(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            f64::from(self.correct) / f64::from(self.total)
        }
    }

    #[must_use]
    pub fn id(&self) -> Uuid {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[must_use]
    pub fn correct(&self) -> u32 {
        self.correct
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.total
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }
}

impl fmt::Display for ProgressTracker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} of {} answered correctly",
            self.name, self.correct, self.total
        )
    }
}

//
// ─── TESTS ────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::fixed_now;

    #[test]
    fn new_tracker_starts_at_zero() {
        let tracker = ProgressTracker::new("Ada", "ada@example.org", fixed_now());
        assert_eq!(tracker.correct(), 0);
        assert_eq!(tracker.total(), 0);
        assert_eq!(tracker.name(), "Ada");
        assert_eq!(tracker.email(), "ada@example.org");
        assert_eq!(tracker.started_at(), fixed_now());
    }

    #[test]
    fn increments_keep_counters_in_step() {
        let mut tracker = ProgressTracker::new("Ada", "ada@example.org", fixed_now());
        tracker.register_attempt();
        tracker.register_correct();
        tracker.register_attempt();
        assert_eq!(tracker.correct(), 1);
        assert_eq!(tracker.total(), 2);
        assert!(tracker.total() >= tracker.correct());
    }

    #[test]
    fn describe_reflects_latest_counters() {
        let mut tracker = ProgressTracker::new("Ada", "ada@example.org", fixed_now());
        assert_eq!(tracker.describe(), "Ada: 0 of 0 answered correctly");
        tracker.register_attempt();
        tracker.register_correct();
        assert_eq!(tracker.describe(), "Ada: 1 of 1 answered correctly");
    }

    #[test]
    fn accuracy_handles_zero_attempts() {
        let mut tracker = ProgressTracker::new("Ada", "ada@example.org", fixed_now());
        assert_eq!(tracker.accuracy(), 0.0);
        tracker.register_attempt();
        tracker.register_attempt();
        tracker.register_correct();
        assert!((tracker.accuracy() - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn from_persisted_rejects_inverted_counts() {
        let err = ProgressTracker::from_persisted(
            Uuid::new_v4(),
            "Ada",
            "ada@example.org",
            3,
            2,
            fixed_now(),
        )
        .unwrap_err();
        assert_eq!(err, TrackerError::CountMismatch { correct: 3, total: 2 });

        let ok = ProgressTracker::from_persisted(
            Uuid::new_v4(),
            "Ada",
            "ada@example.org",
            2,
            5,
            fixed_now(),
        )
        .unwrap();
        assert_eq!(ok.correct(), 2);
        assert_eq!(ok.total(), 5);
    }
}
