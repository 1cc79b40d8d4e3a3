pub struct NextDateCase {
    pub name: &'static str,
    pub now: &'static str,
    pub date: &'static str,
    pub repeat: &'static str,
    /// `None` when the computation must fail.
    pub expected: Option<&'static str>,
}

const fn case(
    name: &'static str,
    now: &'static str,
    date: &'static str,
    repeat: &'static str,
    expected: Option<&'static str>,
) -> NextDateCase {
    NextDateCase {
        name,
        now,
        date,
        repeat,
        expected,
    }
}

pub fn next_date_cases() -> Vec<NextDateCase> {
    vec![
        // scenarios from the rule documentation
        case("yearly_basic", "20240301", "20240101", "y", Some("20250101")),
        case("days_basic", "20240101", "20240101", "d 3", Some("20240104")),
        case("weekly_basic", "20240101", "20240101", "w 1,3", Some("20240103")),
        case("monthly_skip_short_month", "20240201", "20240115", "m 31", Some("20240331")),
        case("monthly_last_day_leap", "20240201", "20240115", "m -1", Some("20240229")),
        case("unknown_kind", "20240101", "20240101", "x 5", None),
        // day intervals
        case("days_empty_interval", "20240126", "20240126", "d", None),
        case("days_too_large", "20240126", "20240126", "d 401", None),
        case("days_twenty", "20240126", "20240126", "d 20", Some("20240215")),
        case("days_seven_past", "20240126", "20240113", "d 7", Some("20240127")),
        case("days_thirty_past", "20240126", "20240120", "d 30", Some("20240219")),
        case("days_future_anchor", "20240126", "20240409", "d 1", Some("20240410")),
        case("days_one_past", "20240126", "20240202", "d 1", Some("20240203")),
        case("days_max_interval", "20240126", "20240101", "d 400", Some("20250204")),
        // yearly
        case("yearly_first", "20240126", "20231106", "y", Some("20241106")),
        case("yearly_distant", "20240126", "16890220", "y", Some("20240220")),
        case("yearly_future", "20240126", "20250701", "y", Some("20260701")),
        case("yearly_new_year_eve", "20240126", "20231231", "y", Some("20241231")),
        case("yearly_leap_day", "20240126", "20240229", "y", Some("20250301")),
        case("yearly_uppercase", "20240126", "20240229", "Y", None),
        // weekly
        case("weekly_sunday", "20240126", "20240126", "w 7", Some("20240128")),
        case("weekly_several", "20240126", "20240125", "w 1,4,5", Some("20240129")),
        case("weekly_every_day", "20240126", "20240126", "w 1,2,3,4,5,6,7", Some("20240127")),
        case("weekly_bad_day", "20240126", "20240126", "w 8,4,5", None),
        case("weekly_no_days", "20240126", "20240126", "w", None),
        // monthly, days only
        case("monthly_13th", "20240126", "20231106", "m 13", Some("20240213")),
        case("monthly_two_days", "20240126", "20240116", "m 16,5", Some("20240205")),
        case("monthly_three_days", "20240126", "20240126", "m 25,26,7", Some("20240207")),
        case("monthly_31st", "20240126", "20240409", "m 31", Some("20240531")),
        case("monthly_last", "20240126", "20240127", "m -1", Some("20240131")),
        case("monthly_second_last", "20240126", "20240222", "m -2", Some("20240228")),
        case("monthly_both_last", "20240126", "20240326", "m -1,-2", Some("20240330")),
        case("monthly_last_and_18th", "20240126", "20240201", "m -1,18", Some("20240218")),
        case("monthly_day_too_large", "20240126", "20240120", "m 40,11,19", None),
        case("monthly_bad_negative", "20240126", "20240222", "m -2,-3", None),
        // monthly, days and months
        case("monthly_months", "20240126", "20230311", "m 07,19 05,6", Some("20240507")),
        case("monthly_first_of_months", "20240126", "20230311", "m 1 1,2", Some("20240201")),
        case("monthly_future_anchor", "20240126", "20240329", "m 10,17 12,8,1", Some("20240810")),
        case("monthly_bad_month", "20240126", "20240329", "m 10 13", None),
        // anchor errors
        case("bad_anchor", "20240126", "2024012", "d 1", None),
        case("impossible_anchor", "20240126", "20230229", "d 1", None),
        case("empty_rule", "20240126", "20240126", "", None),
    ]
}
