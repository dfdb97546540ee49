pub mod day_entry;
pub mod report;
pub mod week;
pub mod weekday;

pub use day_entry::DayEntry;
pub use report::{DayLine, WeekReport};
pub use week::WeekState;
pub use weekday::Weekday;
