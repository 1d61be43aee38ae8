use course_core::model::Truth::{False, True, Unknown};
use course_core::model::{FeedbackKind, Question, ValidatorSpec, Verdict};
use course_core::time::fixed_now;
use services::{Clock, Grader, GradingSession};

#[test]
fn full_session_walks_every_outcome() {
    let mut grader = Grader::new()
        .with_clock(Clock::fixed(fixed_now()))
        .with_seed(99);
    let mut session = GradingSession::start("Ada Lovelace", "ada@example.org", fixed_now());

    let mut question = Question::new("Sum the numbers 1..=10")
        .with_description("Use a loop and a mutable accumulator.")
        .with_validator(ValidatorSpec {
            expected_checks: Some(2),
            description: Some("value and type of the result".into()),
        })
        .with_hint("The answer is a triangular number.");

    // Fully correct on the first try.
    let result = session
        .submit(&mut grader, &mut question, &[True, True])
        .unwrap();
    assert_eq!(result.verdict, Verdict::Correct);
    assert_eq!(question.status().kind(), FeedbackKind::Correct);
    let tracker = session.tracker();
    assert_eq!((tracker.correct(), tracker.total()), (1, 1));

    // One check fails: partial credit, correct counter stays put.
    let result = session
        .submit(&mut grader, &mut question, &[True, False])
        .unwrap();
    assert_eq!(result.verdict, Verdict::PartiallyCorrect);
    assert_eq!(question.status().kind(), FeedbackKind::PartiallyCorrect);
    let tracker = session.tracker();
    assert_eq!((tracker.correct(), tracker.total()), (1, 2));

    // Unanswered sub-check: still missing.
    let result = session
        .submit(&mut grader, &mut question, &[Unknown])
        .unwrap();
    assert_eq!(result.verdict, Verdict::StillMissing);
    let tracker = session.tracker();
    assert_eq!((tracker.correct(), tracker.total()), (1, 3));

    // Everything wrong: keep working.
    let result = session
        .submit(&mut grader, &mut question, &[False, False])
        .unwrap();
    assert_eq!(result.verdict, Verdict::KeepWorking);
    let tracker = session.tracker();
    assert_eq!((tracker.correct(), tracker.total()), (1, 4));

    // History and summary agree with the counters.
    assert_eq!(session.log().len(), 4);
    assert!(session.log().iter().all(|a| a.recorded_at == fixed_now()));
    assert_eq!(session.describe(), "Ada Lovelace: 1 of 4 answered correctly");

    let view = session.progress();
    assert_eq!(view.missed, 3);
    assert!(!view.is_perfect);
    assert!((view.accuracy - 0.25).abs() < f64::EPSILON);
}
