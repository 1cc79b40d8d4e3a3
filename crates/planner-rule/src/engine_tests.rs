use super::*;
use crate::error::{ParseError, ParseErrorKind};

fn date(text: &str) -> NaiveDate {
    parse_date(text).unwrap()
}

fn next(now: &str, anchor: &str, rule: &str) -> Result<String, NextDateError> {
    next_date(date(now), anchor, rule)
}

#[test]
fn yearly_moves_past_reference() {
    assert_eq!(next("20240301", "20240101", "y").unwrap(), "20250101");
}

#[test]
fn every_n_days_counts_from_anchor() {
    assert_eq!(next("20240101", "20240101", "d 3").unwrap(), "20240104");
    assert_eq!(next("20240126", "20240113", "d 7").unwrap(), "20240127");
}

#[test]
fn weekly_skips_reference_day() {
    assert_eq!(next("20240101", "20240101", "w 1,3").unwrap(), "20240103");
}

#[test]
fn monthly_skips_months_without_day() {
    assert_eq!(next("20240201", "20240115", "m 31").unwrap(), "20240331");
}

#[test]
fn monthly_last_day_in_leap_february() {
    assert_eq!(next("20240201", "20240115", "m -1").unwrap(), "20240229");
}

#[test]
fn malformed_rule_is_parse_error() {
    assert_eq!(
        next("20240101", "20240101", "x 5"),
        Err(NextDateError::Parse(ParseError::new(ParseErrorKind::UnknownKind)))
    );
}

#[test]
fn invalid_anchor_is_computation_error() {
    for anchor in ["", "2024011", "20241301", "2024-01-01"] {
        assert!(
            matches!(
                next("20240101", anchor, "d 1"),
                Err(NextDateError::Computation(ComputationError::InvalidAnchorDate(_)))
            ),
            "{anchor:?}"
        );
    }
}

#[test]
fn empty_rule_is_computation_error() {
    assert_eq!(
        next("20240101", "20240101", ""),
        Err(NextDateError::Computation(ComputationError::EmptyRule))
    );
}

#[test]
fn anchor_check_precedes_rule_check() {
    assert!(matches!(
        next("20240101", "bad", ""),
        Err(NextDateError::Computation(ComputationError::InvalidAnchorDate(_)))
    ));
}

#[test]
fn future_anchor_still_advances_one_step() {
    assert_eq!(next("20240126", "20240409", "d 1").unwrap(), "20240410");
    assert_eq!(next("20240126", "20250701", "y").unwrap(), "20260701");
}

#[test]
fn yearly_leap_day_lands_on_march_first() {
    assert_eq!(next("20240126", "20240229", "y").unwrap(), "20250301");
    assert_eq!(next("20250301", "20240229", "y").unwrap(), "20260301");
    // leap years get February 29 back
    assert_eq!(next("20270401", "20240229", "y").unwrap(), "20280229");
}

#[test]
fn yearly_from_distant_anchor() {
    assert_eq!(next("20240126", "16890220", "y").unwrap(), "20240220");
    assert_eq!(next("20240126", "20231231", "y").unwrap(), "20241231");
}

#[test]
fn weekly_takes_earliest_candidate() {
    // 2024-01-26 is a Friday
    assert_eq!(next("20240126", "20240125", "w 1,4,5").unwrap(), "20240129");
    assert_eq!(next("20240126", "20240126", "w 7").unwrap(), "20240128");
    assert_eq!(next("20240128", "20240101", "w 7").unwrap(), "20240204");
}

#[test]
fn monthly_day_sets() {
    assert_eq!(next("20240126", "20231106", "m 13").unwrap(), "20240213");
    assert_eq!(next("20240126", "20240116", "m 16,5").unwrap(), "20240205");
    assert_eq!(next("20240126", "20240126", "m 25,26,7").unwrap(), "20240207");
    assert_eq!(next("20240126", "20240409", "m 31").unwrap(), "20240531");
    assert_eq!(next("20240126", "20240127", "m -1").unwrap(), "20240131");
    assert_eq!(next("20240126", "20240222", "m -2").unwrap(), "20240228");
    assert_eq!(next("20240126", "20240326", "m -1,-2").unwrap(), "20240330");
    assert_eq!(next("20240126", "20240201", "m -1,18").unwrap(), "20240218");
}

#[test]
fn monthly_last_day_not_equal_to_anchor() {
    assert_eq!(next("20240101", "20240131", "m -1").unwrap(), "20240229");
}

#[test]
fn monthly_day_and_month_sets() {
    assert_eq!(
        next("20240126", "20230311", "m 07,19 05,6").unwrap(),
        "20240507"
    );
    assert_eq!(next("20240126", "20230311", "m 1 1,2").unwrap(), "20240201");
    assert_eq!(
        next("20240126", "20240329", "m 10,17 12,8,1").unwrap(),
        "20240810"
    );
}

#[test]
fn monthly_leap_day_in_month_set_waits_for_leap_year() {
    assert_eq!(next("20240301", "20240101", "m 29 2").unwrap(), "20280229");
}

#[test]
fn monthly_impossible_day_and_month_has_no_candidate() {
    assert_eq!(
        next("20240101", "20240101", "m 30 2"),
        Err(NextDateError::Computation(ComputationError::NoCandidate))
    );
}

#[test]
fn monthly_negative_day_with_months_does_not_retry_later_years() {
    // the last day of January 2024 is already past and no later year is tried
    assert_eq!(
        next("20240201", "20240101", "m -1 1"),
        Err(NextDateError::Computation(ComputationError::NoCandidate))
    );
    assert_eq!(next("20240201", "20240101", "m -1 1,3").unwrap(), "20240331");
}

#[test]
fn empty_lists_have_no_candidate() {
    let anchor = date("20240101");
    assert_eq!(
        next_occurrence(anchor, anchor, &RecurrenceRule::Weekly(Vec::new())),
        Err(ComputationError::NoCandidate)
    );
    assert_eq!(
        next_occurrence(
            anchor,
            anchor,
            &RecurrenceRule::Monthly {
                days: Vec::new(),
                months: None
            }
        ),
        Err(ComputationError::NoCandidate)
    );
}

#[test]
fn repeated_completion_always_moves_forward() {
    let rules = ["y", "d 1", "d 45", "w 2,6", "m 31", "m -2,15", "m 5 3,9"];
    for text in rules {
        let rule = parse(text).unwrap();
        let anchor = date("20231130");
        let mut reference = date("20240115");
        for _ in 0..12 {
            let next = next_occurrence(reference, anchor, &rule).unwrap();
            assert!(next > reference, "{text}: {next} must follow {reference}");
            reference = next;
        }
    }
}

#[test]
fn every_n_days_is_smallest_multiple_after_reference() {
    let anchor = date("20240101");
    for n in [1_u16, 2, 7, 30, 400] {
        for reference in ["20231201", "20240101", "20240102", "20240615", "20260101"] {
            let reference = date(reference);
            let next = next_occurrence(reference, anchor, &RecurrenceRule::EveryNDays(n)).unwrap();
            let elapsed = next.signed_duration_since(anchor).num_days();
            let step = i64::from(n);
            assert!(next > reference);
            assert_eq!(elapsed % step, 0);
            assert!(elapsed >= step);
            // one step earlier would not be after both anchor and reference
            let previous = next - chrono::Duration::days(step);
            assert!(previous <= reference || previous <= anchor);
        }
    }
}

#[test]
fn yearly_keeps_month_and_day() {
    let anchor = date("20190817");
    let next = next_occurrence(date("20240901"), anchor, &RecurrenceRule::Yearly).unwrap();
    assert_eq!(next, date("20250817"));
    assert_eq!((next.month(), next.day()), (anchor.month(), anchor.day()));
}

#[test_log::test]
fn out_of_range_is_reported() {
    let anchor = NaiveDate::MAX;
    assert_eq!(
        next_occurrence(anchor, anchor, &RecurrenceRule::EveryNDays(1)),
        Err(ComputationError::DateOutOfRange)
    );
    assert_eq!(
        next_occurrence(anchor, anchor, &RecurrenceRule::Yearly),
        Err(ComputationError::DateOutOfRange)
    );
}

#[test]
fn results_past_year_9999_are_out_of_range() {
    for rule in ["y", "d 400", "d 1", "w 1", "m 5", "m 5 1", "m -1"] {
        assert_eq!(
            next("99991231", "99991231", rule),
            Err(NextDateError::Computation(ComputationError::DateOutOfRange)),
            "{rule}"
        );
    }
    assert_eq!(next("99991201", "99991201", "d 30").unwrap(), "99991231");
}
