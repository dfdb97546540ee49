use weekledger::core::calculator::{daily_minutes, recalc_week};
use weekledger::models::{DayEntry, WeekState};
use weekledger::utils::time::{format_hhmm, format_minutes, parse_time};

#[test]
fn parse_time_hh_mm() {
    assert_eq!(parse_time("09:30"), Some(570));
    assert_eq!(parse_time("00:00"), Some(0));
    assert_eq!(parse_time("23:59"), Some(1439));
}

#[test]
fn parse_time_bare_hour_defaults_minutes_to_zero() {
    assert_eq!(parse_time("9"), Some(540));
    assert_eq!(parse_time("9:"), Some(540));
}

#[test]
fn parse_time_is_not_range_validated() {
    // hours >= 24 and minutes >= 60 are accepted arithmetically
    assert_eq!(parse_time("25:00"), Some(1500));
    assert_eq!(parse_time("10:75"), Some(675));
}

#[test]
fn parse_time_ignores_parts_past_the_second_colon() {
    assert_eq!(parse_time("09:30:45"), Some(570));
}

#[test]
fn parse_time_rejects_garbage() {
    assert_eq!(parse_time(""), None);
    assert_eq!(parse_time("   "), None);
    assert_eq!(parse_time("abc"), None);
    assert_eq!(parse_time("09:xx"), None);
}

#[test]
fn daily_minutes_with_both_breaks() {
    // 540 - 60 - 30
    assert_eq!(daily_minutes("09:00", "18:00", true, true), 450);
}

#[test]
fn daily_minutes_crosses_midnight_once() {
    assert_eq!(daily_minutes("22:00", "06:00", false, false), 480);
}

#[test]
fn daily_minutes_clamps_to_zero() {
    // end before start minus breaks never goes negative
    assert_eq!(daily_minutes("09:00", "09:30", true, true), 0);
}

#[test]
fn daily_minutes_unparsable_time_yields_zero() {
    assert_eq!(daily_minutes("", "18:00", false, false), 0);
    assert_eq!(daily_minutes("09:00", "", true, true), 0);
    assert_eq!(daily_minutes("nine", "18:00", false, false), 0);
}

#[test]
fn format_hhmm_basics() {
    assert_eq!(format_hhmm(90.0), "1:30");
    assert_eq!(format_hhmm(-90.0), "-1:30");
    assert_eq!(format_hhmm(0.0), "0:00");
    assert_eq!(format_hhmm(f64::NAN), "0:00");
    assert_eq!(format_hhmm(f64::INFINITY), "0:00");
}

#[test]
fn format_hhmm_hours_are_unpadded_and_unbounded() {
    assert_eq!(format_minutes(5), "0:05");
    assert_eq!(format_minutes(2400), "40:00");
    assert_eq!(format_minutes(-2410), "-40:10");
}

#[test]
fn empty_week_keeps_full_target() {
    let week = WeekState::default();
    let report = recalc_week(40.0, &week);

    assert_eq!(report.target_minutes, 2400);
    for line in &report.days {
        assert_eq!(line.total, "0:00");
    }
    assert_eq!(report.days.last().unwrap().remaining, "40:00");
    assert_eq!(report.final_balance(), 2400);
}

#[test]
fn running_balance_subtracts_in_weekday_order() {
    let mut week = WeekState::default();
    week.mon = DayEntry {
        start: "09:00".into(),
        end: "18:00".into(),
        lunch: true,
        dinner: false,
    };
    week.wed = DayEntry {
        start: "10:00".into(),
        end: "20:00".into(),
        lunch: true,
        dinner: true,
    };

    let report = recalc_week(40.0, &week);

    // Monday: 8h worked, 32h left
    assert_eq!(report.days[0].total, "8:00");
    assert_eq!(report.days[0].remaining, "32:00");
    // Tuesday untouched
    assert_eq!(report.days[1].total, "0:00");
    assert_eq!(report.days[1].remaining, "32:00");
    // Wednesday: 8h30 worked
    assert_eq!(report.days[2].total, "8:30");
    assert_eq!(report.days[2].remaining, "23:30");
    // Thursday/Friday carry the balance unchanged
    assert_eq!(report.days[4].remaining, "23:30");
    assert_eq!(report.total_worked(), 990);
}

#[test]
fn balance_goes_negative_past_the_target() {
    let mut week = WeekState::default();
    week.mon = DayEntry {
        start: "08:00".into(),
        end: "18:00".into(),
        lunch: false,
        dinner: false,
    };

    let report = recalc_week(8.0, &week);

    assert_eq!(report.days[0].total, "10:00");
    assert_eq!(report.days[0].remaining, "-2:00");
    assert_eq!(report.final_balance(), -120);
}

#[test]
fn fractional_target_rounds_to_minutes() {
    let week = WeekState::default();
    let report = recalc_week(37.5, &week);
    assert_eq!(report.target_minutes, 2250);
    assert_eq!(report.days.last().unwrap().remaining, "37:30");
}
