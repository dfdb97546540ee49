use crate::models::{DayLine, WeekState};
use serde::Serialize;

/// Flat per-day row for export, one per weekday Mon..Fri.
#[derive(Serialize, Clone, Debug)]
pub struct WeekRow {
    pub day: String,
    pub start: String,
    pub end: String,
    pub lunch: bool,
    pub dinner: bool,
    /// Worked time as `H:MM`.
    pub total: String,
    /// Running balance against the weekly target as `[-]H:MM`.
    pub remaining: String,
}

/// Join the raw entries with the computed day lines.
pub(crate) fn build_rows(week: &WeekState, days: &[DayLine]) -> Vec<WeekRow> {
    days.iter()
        .map(|line| {
            let entry = week.entry(line.day);
            WeekRow {
                day: line.day.key().to_string(),
                start: entry.start.clone(),
                end: entry.end.clone(),
                lunch: entry.lunch,
                dinner: entry.dinner,
                total: line.total.clone(),
                remaining: line.remaining.clone(),
            }
        })
        .collect()
}
