use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::TimeLedger;
use crate::db::log::wllog;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::Weekday;
use crate::ui::messages::success;
use crate::utils::time::format_minutes;

/// Handle the `clear` subcommand: return one weekday to an empty entry.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Clear { day } = cmd {
        let weekday =
            Weekday::from_key(day).ok_or_else(|| AppError::InvalidDay(day.to_string()))?;

        let pool = DbPool::open(&cfg.store)?;
        let mut ledger = TimeLedger::open(pool);

        ledger.clear_day(weekday);
        let report = ledger.recalc();

        wllog(&ledger.store_mut().conn, "clear", weekday.key(), "")?;

        success(format!(
            "{} cleared (balance {})",
            weekday.label(),
            format_minutes(report.final_balance())
        ));
    }

    Ok(())
}
