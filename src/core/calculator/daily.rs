use crate::utils::time::parse_time;

/// Worked minutes for one day.
///
/// Either time failing to parse yields 0. An end time earlier than the start
/// is taken as a single midnight crossover (one day of wraparound at most).
/// Lunch deducts 60 minutes, dinner 30. The result never goes negative.
pub fn daily_minutes(start: &str, end: &str, lunch: bool, dinner: bool) -> i64 {
    let (Some(s), Some(e)) = (parse_time(start), parse_time(end)) else {
        return 0;
    };

    let mut diff = e - s;
    if diff < 0 {
        diff += 24 * 60;
    }

    if lunch {
        diff -= 60;
    }
    if dinner {
        diff -= 30;
    }

    diff.max(0)
}
