use chrono::{DateTime, Utc};

use course_core::model::{AttemptLog, ProgressTracker, Question, Truth};

use crate::error::GradingError;
use crate::grader::{GradeResult, Grader};
use crate::progress::ProgressView;

/// One learner's grading session: a tracker plus the history of graded
/// attempts, single-owner and sequential.
#[derive(Debug, Clone, PartialEq)]
pub struct GradingSession {
    tracker: ProgressTracker,
    log: Vec<AttemptLog>,
}

impl GradingSession {
    /// Starts a session for a learner with a fresh tracker.
    #[must_use]
    pub fn start(
        name: impl Into<String>,
        email: impl Into<String>,
        now: DateTime<Utc>,
    ) -> Self {
        Self::with_tracker(ProgressTracker::new(name, email, now))
    }

    /// Wraps an existing tracker, e.g. one rehydrated from earlier counters.
    #[must_use]
    pub fn with_tracker(tracker: ProgressTracker) -> Self {
        Self {
            tracker,
            log: Vec::new(),
        }
    }

    /// Grades an attempt at a question, records it in the session log, and
    /// updates the question's status.
    ///
    /// # Errors
    ///
    /// Returns `GradingError::NoChecks` for an empty check list; nothing is
    /// recorded on that path.
    pub fn submit(
        &mut self,
        grader: &mut Grader,
        question: &mut Question,
        checks: &[Truth],
    ) -> Result<GradeResult, GradingError> {
        let result = grader.validate(question, &mut self.tracker, checks)?;
        self.log.push(AttemptLog::new(
            Some(question.title().to_string()),
            result.verdict,
            result.recorded_at,
        ));
        Ok(result)
    }

    /// Grades a bare check list with no question record attached.
    ///
    /// # Errors
    ///
    /// Returns `GradingError::NoChecks` for an empty check list.
    pub fn submit_checks(
        &mut self,
        grader: &mut Grader,
        checks: &[Truth],
    ) -> Result<GradeResult, GradingError> {
        let result = grader.check_answer(&mut self.tracker, checks)?;
        self.log
            .push(AttemptLog::new(None, result.verdict, result.recorded_at));
        Ok(result)
    }

    #[must_use]
    pub fn tracker(&self) -> &ProgressTracker {
        &self.tracker
    }

    #[must_use]
    pub fn log(&self) -> &[AttemptLog] {
        &self.log
    }

    #[must_use]
    pub fn progress(&self) -> ProgressView {
        ProgressView::of(&self.tracker)
    }

    /// One-line summary of the session so far.
    #[must_use]
    pub fn describe(&self) -> String {
        self.tracker.describe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use course_core::Clock;
    use course_core::model::Truth::{False, True};
    use course_core::model::Verdict;
    use course_core::time::fixed_now;

    fn build_grader() -> Grader {
        Grader::new().with_clock(Clock::fixed(fixed_now())).with_seed(1)
    }

    #[test]
    fn session_log_tracks_every_graded_attempt() {
        let mut grader = build_grader();
        let mut session = GradingSession::start("Ada", "ada@example.org", fixed_now());
        let mut question = Question::new("Loops");

        session.submit(&mut grader, &mut question, &[True]).unwrap();
        session.submit_checks(&mut grader, &[True, False]).unwrap();

        assert_eq!(session.log().len(), 2);
        assert_eq!(session.log()[0].question.as_deref(), Some("Loops"));
        assert_eq!(session.log()[0].verdict, Verdict::Correct);
        assert_eq!(session.log()[1].question, None);
        assert_eq!(session.log()[1].verdict, Verdict::PartiallyCorrect);
        assert_eq!(session.log().len() as u32, session.tracker().total());
    }

    #[test]
    fn failed_submissions_leave_no_trace() {
        let mut grader = build_grader();
        let mut session = GradingSession::start("Ada", "ada@example.org", fixed_now());

        let err = session.submit_checks(&mut grader, &[]).unwrap_err();
        assert_eq!(err, GradingError::NoChecks);
        assert!(session.log().is_empty());
        assert_eq!(session.tracker().total(), 0);
    }

    #[test]
    fn progress_and_describe_follow_the_tracker() {
        let mut grader = build_grader();
        let mut session = GradingSession::start("Ada", "ada@example.org", fixed_now());

        session.submit_checks(&mut grader, &[True]).unwrap();
        session.submit_checks(&mut grader, &[False]).unwrap();

        let view = session.progress();
        assert_eq!((view.correct, view.total), (1, 2));
        assert_eq!(session.describe(), "Ada: 1 of 2 answered correctly");
    }
}
