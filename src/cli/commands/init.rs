use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::log::wllog;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Handle the `init` subcommand: create config file and store schema.
pub fn handle(cli: &Cli) -> AppResult<()> {
    Config::init_all(cli.store.clone(), cli.test)?;

    // opening the pool creates the kv/log tables
    let store_path = match &cli.store {
        Some(p) => p.clone(),
        None => Config::store_file().to_string_lossy().to_string(),
    };
    let pool = DbPool::open(&store_path)?;
    wllog(&pool.conn, "init", "", "store initialized")?;

    success("weekledger initialized.");
    Ok(())
}
