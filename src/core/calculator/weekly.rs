use crate::core::calculator::daily::daily_minutes;
use crate::models::{DayLine, WeekReport, WeekState, Weekday};
use crate::utils::time::format_minutes;

/// Recompute the whole week against the target.
///
/// The running balance starts at the target and each day's worked minutes
/// are subtracted in Mon..Fri order; it may end up negative once the target
/// is exceeded.
pub fn recalc_week(target_hours: f64, week: &WeekState) -> WeekReport {
    let target_minutes = (target_hours * 60.0).round() as i64;
    let mut remaining = target_minutes;

    let mut days = Vec::with_capacity(Weekday::ALL.len());
    for day in Weekday::ALL {
        let entry = week.entry(day);
        let worked = daily_minutes(&entry.start, &entry.end, entry.lunch, entry.dinner);
        remaining -= worked;

        days.push(DayLine {
            day,
            worked,
            total: format_minutes(worked),
            balance: remaining,
            remaining: format_minutes(remaining),
        });
    }

    WeekReport {
        target_minutes,
        days,
    }
}
