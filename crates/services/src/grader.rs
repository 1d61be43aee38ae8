use chrono::{DateTime, Utc};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;

use course_core::model::{CORRECT_POOL, Feedback, ProgressTracker, Question, Truth, Verdict};
use course_core::time::Clock;

use crate::error::GradingError;

//
// ─── GRADE RESULT ─────────────────────────────────────────────────────────────
//

/// Result of grading one attempt: the decided verdict, the feedback block to
/// render, and when the attempt was recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradeResult {
    pub verdict: Verdict,
    pub feedback: Feedback,
    pub recorded_at: DateTime<Utc>,
}

//
// ─── GRADER ───────────────────────────────────────────────────────────────────
//

/// Coordinates grading an attempt against a learner's progress tracker.
///
/// Owns the clock used for timestamps and the rng used to pick encouragement
/// messages, so both can be pinned in tests.
pub struct Grader {
    clock: Clock,
    rng: StdRng,
}

impl Default for Grader {
    fn default() -> Self {
        Self::new()
    }
}

impl Grader {
    /// Creates a grader with a real-time clock and an entropy-seeded rng.
    #[must_use]
    pub fn new() -> Self {
        Self {
            clock: Clock::default(),
            rng: StdRng::from_rng(&mut rand::rng()),
        }
    }

    /// Override the clock (usually for deterministic testing).
    #[must_use]
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    /// Pin the rng to a seed so encouragement selection is deterministic.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Current time according to the grader's clock.
    #[must_use]
    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    /// Grades one attempt at an exercise.
    ///
    /// Exactly one attempt is registered on the tracker per successful call;
    /// the correct counter moves only when every check passes, in which case
    /// the feedback body is drawn at random from the encouragement pool.
    ///
    /// # Errors
    ///
    /// Returns `GradingError::NoChecks` for an empty check list. The tracker
    /// is untouched on that path.
    pub fn check_answer(
        &mut self,
        tracker: &mut ProgressTracker,
        checks: &[Truth],
    ) -> Result<GradeResult, GradingError> {
        if checks.is_empty() {
            return Err(GradingError::NoChecks);
        }

        tracker.register_attempt();

        let verdict = Verdict::from_checks(checks);
        let feedback = match verdict {
            Verdict::StillMissing => Feedback::still_missing(),
            Verdict::KeepWorking => Feedback::keep_working(),
            Verdict::PartiallyCorrect => Feedback::partially_correct(),
            Verdict::Correct => {
                tracker.register_correct();
                Feedback::correct_with(self.pick_encouragement())
            }
        };

        Ok(GradeResult {
            verdict,
            feedback,
            recorded_at: self.clock.now(),
        })
    }

    /// Grades one attempt at a specific question.
    ///
    /// Same algorithm as [`Grader::check_answer`]; additionally stores the
    /// resulting feedback on the question. The result is returned on every
    /// path, not just the fully-correct one.
    ///
    /// # Errors
    ///
    /// Returns `GradingError::NoChecks` for an empty check list. Neither the
    /// tracker nor the question status changes on that path.
    pub fn validate(
        &mut self,
        question: &mut Question,
        tracker: &mut ProgressTracker,
        checks: &[Truth],
    ) -> Result<GradeResult, GradingError> {
        let result = self.check_answer(tracker, checks)?;
        question.set_status(result.feedback.clone());
        Ok(result)
    }

    fn pick_encouragement(&mut self) -> &'static str {
        CORRECT_POOL
            .choose(&mut self.rng)
            .copied()
            .unwrap_or("Correct!")
    }
}

//
// ─── TESTS ────────────────────────────────────────────────────────────────────
//
