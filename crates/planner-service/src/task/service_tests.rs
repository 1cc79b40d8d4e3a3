use super::*;
use planner_rule::calendar::parse_date;
use planner_rule::{ComputationError, NextDateError};

fn date(text: &str) -> NaiveDate {
    parse_date(text).unwrap()
}

fn task(date_text: &str, repeat: &str) -> Task {
    Task {
        id: 1,
        date: date(date_text),
        title: "Water plants".to_string(),
        comment: String::new(),
        repeat: repeat.to_string(),
    }
}

#[test]
fn one_off_task_is_deleted() {
    assert_eq!(
        completion_outcome(&task("20240126", ""), date("20240126")).unwrap(),
        CompletionOutcome::Deleted
    );
}

#[test]
fn recurring_task_moves_to_next_occurrence_after_today() {
    let today = date("20240126");
    assert_eq!(
        completion_outcome(&task("20240113", "d 7"), today).unwrap(),
        CompletionOutcome::Rescheduled(date("20240127"))
    );
    // a future task still moves one step past its own date
    assert_eq!(
        completion_outcome(&task("20240409", "d 1"), today).unwrap(),
        CompletionOutcome::Rescheduled(date("20240410"))
    );
    assert_eq!(
        completion_outcome(&task("20240131", "m -1"), date("20240131")).unwrap(),
        CompletionOutcome::Rescheduled(date("20240229"))
    );
}

#[test]
fn exhausted_rule_is_rule_error() {
    assert!(matches!(
        completion_outcome(&task("20240101", "m -1 1"), date("20240201")),
        Err(ServiceError::RuleError(NextDateError::Computation(
            ComputationError::NoCandidate
        )))
    ));
}

#[test]
fn malformed_stored_rule_is_rule_error() {
    assert!(matches!(
        completion_outcome(&task("20240101", "x 5"), date("20240126")),
        Err(ServiceError::RuleError(NextDateError::Parse(_)))
    ));
}

#[test]
fn unknown_id_is_not_found() {
    assert!(matches!(not_found(42), ServiceError::NotFound(message) if message == "task 42"));
}
