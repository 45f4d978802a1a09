use super::common::*;
use crate::workflows::deposit::timeline::{parse_intake_date, Clock, FixedClock, Timeline};
use chrono::NaiveDate;

#[test]
fn counts_calendar_days_and_flags_deadline() {
    let timeline = Timeline::compute(&moved_out(45), today());

    assert_eq!(timeline.days_since_move_out, Some(45));
    assert_eq!(timeline.past_deadline, Some(true));
    assert_eq!(timeline.days_overdue(), Some(15));
    assert_eq!(timeline.days_until_deadline, Some(-15));
    assert_eq!(
        timeline.deadline_date,
        NaiveDate::from_ymd_opt(2025, 3, 16)
    );
}

#[test]
fn day_thirty_is_still_inside_the_window() {
    let on_deadline = Timeline::compute(&moved_out(30), today());
    let day_after = Timeline::compute(&moved_out(31), today());

    assert_eq!(on_deadline.past_deadline, Some(false));
    assert!(on_deadline.is_within_deadline());
    assert_eq!(day_after.past_deadline, Some(true));
    assert_eq!(day_after.days_overdue(), Some(1));
}

#[test]
fn unparsable_move_out_yields_unknown_timeline() {
    let timeline = Timeline::compute("sometime in March", today());

    assert_eq!(timeline, Timeline::unknown());
    assert!(!timeline.is_known());
    assert!(!timeline.is_past_deadline());
    assert!(!timeline.is_within_deadline());
    assert!(!timeline.days_at_least(0));
    assert_eq!(timeline.days_overdue(), None);
}

#[test]
fn empty_move_out_yields_unknown_timeline() {
    assert_eq!(Timeline::compute("   ", today()), Timeline::unknown());
}

#[test]
fn accepts_form_date_formats() {
    let expected = NaiveDate::from_ymd_opt(2025, 2, 14);

    assert_eq!(parse_intake_date("2025-02-14"), expected);
    assert_eq!(parse_intake_date("02/14/2025"), expected);
    assert_eq!(parse_intake_date("2025-02-14T23:30:00-06:00"), expected);
    assert_eq!(parse_intake_date("2025-02-14 08:00"), expected);
    assert_eq!(parse_intake_date("14.02.2025"), None);
}

#[test]
fn deadline_date_and_day_count_share_one_calendar() {
    // Late-evening timestamp: the date part is used as written, never shifted.
    let timeline = Timeline::compute("2025-02-14T23:30:00-06:00", today());

    assert_eq!(timeline.move_out_date, NaiveDate::from_ymd_opt(2025, 2, 14));
    let deadline = timeline.deadline_date.expect("deadline known");
    let elapsed = timeline.days_since_move_out.expect("days known");
    assert_eq!((today() - deadline).num_days(), elapsed - 30);
}

#[test]
fn fixed_clock_reports_its_date() {
    let clock = FixedClock(today());
    assert_eq!(clock.today(), today());
}
