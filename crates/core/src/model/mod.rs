mod attempt;
mod feedback;
mod question;
pub mod tracker;
pub mod truth;
mod verdict;

pub use attempt::AttemptLog;
pub use feedback::{CORRECT_POOL, Feedback, FeedbackKind, Severity};
pub use question::{Question, ValidatorSpec};
pub use tracker::{ProgressTracker, TrackerError};
pub use truth::{Truth, TruthError};
pub use verdict::Verdict;
