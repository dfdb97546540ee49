use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::TimeLedger;
use crate::db::log::wllog;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use crate::utils::time::format_minutes;

/// Handle the `target` subcommand: print or set the weekly target hours.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Target { hours } = cmd {
        let pool = DbPool::open(&cfg.store)?;
        let mut ledger = TimeLedger::open(pool);

        match hours {
            Some(h) => {
                if !h.is_finite() || *h < 0.0 {
                    return Err(AppError::InvalidTarget(h.to_string()));
                }
                ledger.set_target(*h);
                let report = ledger.recalc();

                wllog(
                    &ledger.store_mut().conn,
                    "target",
                    "",
                    &format!("weekly target set to {h} h"),
                )?;

                success(format!(
                    "Weekly target set to {} h (balance {})",
                    h,
                    format_minutes(report.final_balance())
                ));
            }
            None => {
                info(format!(
                    "Weekly target: {} h ({})",
                    ledger.target_hours,
                    format_minutes((ledger.target_hours * 60.0).round() as i64)
                ));
            }
        }
    }

    Ok(())
}
