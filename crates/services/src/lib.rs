#![forbid(unsafe_code)]

pub mod error;
pub mod grader;
pub mod progress;
pub mod session;

pub use course_core::Clock;

pub use error::GradingError;
pub use grader::{GradeResult, Grader};
pub use progress::ProgressView;
pub use session::GradingSession;
