use super::weekday::Weekday;

/// One computed line of the weekly report.
#[derive(Debug, Clone)]
pub struct DayLine {
    pub day: Weekday,
    /// Worked minutes for the day, after break deductions (never negative).
    pub worked: i64,
    /// `worked` formatted as `H:MM`.
    pub total: String,
    /// Running balance in minutes after this day (may be negative).
    pub balance: i64,
    /// `balance` formatted as `[-]H:MM`.
    pub remaining: String,
}

/// The full recomputed week: five day lines in Mon..Fri order plus the
/// target the balance was measured against.
#[derive(Debug, Clone)]
pub struct WeekReport {
    pub target_minutes: i64,
    pub days: Vec<DayLine>,
}

impl WeekReport {
    pub fn total_worked(&self) -> i64 {
        self.days.iter().map(|d| d.worked).sum()
    }

    /// Remaining balance after Friday.
    pub fn final_balance(&self) -> i64 {
        self.days
            .last()
            .map(|d| d.balance)
            .unwrap_or(self.target_minutes)
    }

    pub fn line(&self, day: Weekday) -> Option<&DayLine> {
        self.days.iter().find(|d| d.day == day)
    }
}
