use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::TimeLedger;
use crate::db::log::wllog;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::ExportLogic;

/// Handle the `export` subcommand.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        output,
        force,
    } = cmd
    {
        let pool = DbPool::open(&cfg.store)?;
        let mut ledger = TimeLedger::open(pool);
        let report = ledger.recalc();

        ExportLogic::export(&ledger.week, &report, format, output, *force)?;

        wllog(
            &ledger.store_mut().conn,
            "export",
            &format!("{format:?}").to_lowercase(),
            output,
        )?;
    }

    Ok(())
}
