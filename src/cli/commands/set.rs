use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::TimeLedger;
use crate::db::log::wllog;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::Weekday;
use crate::ui::messages::success;
use crate::utils::colors::{RESET, color_for_balance};
use crate::utils::time::parse_time;

/// Validate a CLI-supplied clock time. The ledger itself degrades silently,
/// but a typo on the command line deserves an error instead of a 0:00 day.
fn check_time(t: &Option<String>) -> AppResult<()> {
    if let Some(s) = t
        && parse_time(s).is_none()
    {
        return Err(AppError::InvalidTime(s.to_string()));
    }
    Ok(())
}

/// Handle the `set` subcommand: update one weekday's entry and recalc.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Set {
        day,
        start,
        end,
        lunch,
        no_lunch,
        dinner,
        no_dinner,
    } = cmd
    {
        let weekday =
            Weekday::from_key(day).ok_or_else(|| AppError::InvalidDay(day.to_string()))?;

        check_time(start)?;
        check_time(end)?;

        let lunch_flag = if *lunch {
            Some(true)
        } else if *no_lunch {
            Some(false)
        } else {
            None
        };
        let dinner_flag = if *dinner {
            Some(true)
        } else if *no_dinner {
            Some(false)
        } else {
            None
        };

        let pool = DbPool::open(&cfg.store)?;
        let mut ledger = TimeLedger::open(pool);

        ledger.set_day(weekday, start.clone(), end.clone(), lunch_flag, dinner_flag);
        let report = ledger.recalc();

        let logged = format!("entry updated: {:?}", ledger.entry(weekday));
        wllog(&ledger.store_mut().conn, "set", weekday.key(), &logged)?;

        if let Some(line) = report.line(weekday) {
            success(format!("{}: worked {}", weekday.label(), line.total));
        }
        let balance = report.final_balance();
        println!(
            "   Week balance: {}{}{}",
            color_for_balance(balance),
            crate::utils::time::format_minutes(balance),
            RESET
        );
    }

    Ok(())
}
