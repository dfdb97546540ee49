pub mod daily;
pub mod weekly;

pub use daily::daily_minutes;
pub use weekly::recalc_week;
