use serde::Serialize;

use course_core::model::ProgressTracker;

/// Aggregated view of a learner's progress, useful for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressView {
    pub total: u32,
    pub correct: u32,
    pub missed: u32,
    pub accuracy: f64,
    pub is_perfect: bool,
}

impl ProgressView {
    /// Snapshot of the tracker's counters at the time of the call.
    #[must_use]
    pub fn of(tracker: &ProgressTracker) -> Self {
        let total = tracker.total();
        let correct = tracker.correct();
        Self {
            total,
            correct,
            missed: total.saturating_sub(correct),
            accuracy: tracker.accuracy(),
            is_perfect: total > 0 && correct == total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use course_core::time::fixed_now;

    #[test]
    fn view_mirrors_tracker_counters() {
        let mut tracker = ProgressTracker::new("Ada", "ada@example.org", fixed_now());
        tracker.register_attempt();
        tracker.register_correct();
        tracker.register_attempt();

        let view = ProgressView::of(&tracker);
        assert_eq!(view.total, 2);
        assert_eq!(view.correct, 1);
        assert_eq!(view.missed, 1);
        assert!(!view.is_perfect);
    }

    #[test]
    fn perfect_requires_at_least_one_attempt() {
        let tracker = ProgressTracker::new("Ada", "ada@example.org", fixed_now());
        assert!(!ProgressView::of(&tracker).is_perfect);

        let mut tracker = tracker;
        tracker.register_attempt();
        tracker.register_correct();
        assert!(ProgressView::of(&tracker).is_perfect);
    }
}
