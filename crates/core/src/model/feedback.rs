use serde::{Deserialize, Serialize};

/// Color/severity semantics of a feedback block, for the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Success,
    Info,
    Warning,
    Danger,
}

/// Closed set of feedback block kinds.
///
/// The first four mirror [`Verdict`](crate::model::Verdict); the rest are
/// informational blocks a course author can emit directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackKind {
    StillMissing,
    KeepWorking,
    PartiallyCorrect,
    Correct,
    NotDefined,
    Hint,
    Fyi,
    Bomb,
}

impl FeedbackKind {
    /// Fixed display title for this kind of block.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            FeedbackKind::StillMissing => "Still missing",
            FeedbackKind::KeepWorking => "Keep working",
            FeedbackKind::PartiallyCorrect => "Almost there",
            FeedbackKind::Correct => "Correct",
            FeedbackKind::NotDefined => "Not defined",
            FeedbackKind::Hint => "Hint",
            FeedbackKind::Fyi => "FYI",
            FeedbackKind::Bomb => "Warning",
        }
    }

    #[must_use]
    pub fn severity(self) -> Severity {
        match self {
            FeedbackKind::Correct => Severity::Success,
            FeedbackKind::Hint | FeedbackKind::Fyi => Severity::Info,
            FeedbackKind::StillMissing | FeedbackKind::PartiallyCorrect => Severity::Warning,
            FeedbackKind::KeepWorking | FeedbackKind::NotDefined | FeedbackKind::Bomb => {
                Severity::Danger
            }
        }
    }
}

/// Pool of encouragement bodies for fully-correct attempts. The grading
/// service picks one uniformly at random.
pub const CORRECT_POOL: &[&str] = &[
    "Well done, all checks pass!",
    "Exactly right. On to the next one!",
    "Nailed it!",
    "Great work, that is the correct answer.",
    "Spot on. Keep it up!",
    "Correct! You are making good progress.",
];

/// A styled, titled block of feedback text shown to the learner.
///
/// Tagged by [`FeedbackKind`]; title and severity derive from the kind, the
/// body is free text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feedback {
    kind: FeedbackKind,
    body: String,
}

impl Feedback {
    #[must_use]
    pub fn new(kind: FeedbackKind, body: impl Into<String>) -> Self {
        Self {
            kind,
            body: body.into(),
        }
    }

    /// Answer not yet provided.
    #[must_use]
    pub fn still_missing() -> Self {
        Self::new(
            FeedbackKind::StillMissing,
            "No answer yet. Fill in the missing pieces and run the checks again.",
        )
    }

    /// Fully incorrect attempt.
    #[must_use]
    pub fn keep_working() -> Self {
        Self::new(
            FeedbackKind::KeepWorking,
            "Not there yet. Have another look at the exercise and try again.",
        )
    }

    /// Some but not all checks pass.
    #[must_use]
    pub fn partially_correct() -> Self {
        Self::new(
            FeedbackKind::PartiallyCorrect,
            "Some checks pass, but not all of them. You are close, keep going!",
        )
    }

    /// Fully correct attempt carrying a chosen encouragement body.
    #[must_use]
    pub fn correct_with(body: impl Into<String>) -> Self {
        Self::new(FeedbackKind::Correct, body)
    }

    /// A named variable the exercise expects has not been defined yet.
    #[must_use]
    pub fn not_defined(variable: &str) -> Self {
        Self::new(
            FeedbackKind::NotDefined,
            format!("The variable `{variable}` is not defined. Run the cell that defines it first."),
        )
    }

    #[must_use]
    pub fn hint(body: impl Into<String>) -> Self {
        Self::new(FeedbackKind::Hint, body)
    }

    #[must_use]
    pub fn fyi(body: impl Into<String>) -> Self {
        Self::new(FeedbackKind::Fyi, body)
    }

    #[must_use]
    pub fn bomb(body: impl Into<String>) -> Self {
        Self::new(FeedbackKind::Bomb, body)
    }

    #[must_use]
    pub fn kind(&self) -> FeedbackKind {
        self.kind
    }

    #[must_use]
    pub fn title(&self) -> &'static str {
        self.kind.title()
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.kind.severity()
    }

    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }
}
