use crate::config::Config;
use crate::core::TimeLedger;
use crate::core::calculator::recalc_week;
use crate::db::log::wllog;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::time::format_minutes;

/// Handle the `reset` subcommand: clear the whole week, keep the target.
///
/// No recalc-triggered save here: the week key stays removed from the store
/// until the next entry is recorded.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let pool = DbPool::open(&cfg.store)?;
    let mut ledger = TimeLedger::open(pool);

    ledger.reset_week();
    let report = recalc_week(ledger.target_hours, &ledger.week);

    wllog(&ledger.store_mut().conn, "reset", "", "week cleared")?;

    success(format!(
        "Week reset. Weekly target kept at {} h (balance {}).",
        ledger.target_hours,
        format_minutes(report.final_balance())
    ));

    Ok(())
}
