use serde::{Deserialize, Serialize};

use crate::model::feedback::Feedback;

/// Free-form description of how a question is meant to be checked.
///
/// Opaque to the grading logic itself; course tooling can use it to build or
/// document the sub-checks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatorSpec {
    #[serde(default)]
    pub expected_checks: Option<usize>,
    #[serde(default)]
    pub description: Option<String>,
}

/// One auto-graded exercise: prompt text, hints, and the feedback from the
/// most recent graded attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    title: String,
    description: String,
    validator: Option<ValidatorSpec>,
    hints: Vec<String>,
    status: Feedback,
}

impl Question {
    /// Creates a question with defaults for everything but the title. The
    /// initial status is "still missing": nothing has been graded yet.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            validator: None,
            hints: Vec::new(),
            status: Feedback::still_missing(),
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn with_validator(mut self, validator: ValidatorSpec) -> Self {
        self.validator = Some(validator);
        self
    }

    #[must_use]
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hints.push(hint.into());
        self
    }

    /// Stores the feedback from the latest graded attempt.
    pub fn set_status(&mut self, status: Feedback) {
        self.status = status;
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn validator(&self) -> Option<&ValidatorSpec> {
        self.validator.as_ref()
    }

    #[must_use]
    pub fn hints(&self) -> &[String] {
        &self.hints
    }

    #[must_use]
    pub fn status(&self) -> &Feedback {
        &self.status
    }
}
