use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::{RecordStore, SqliteStore};
use crate::ui::messages::{info, success, warning};

/// Handle the `init` command
///
/// Creates the config directory and file (unless `--test`), then opens
/// the database, which creates the schema and applies pending migrations.
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.db.clone(), cli.test)?;

    info("Initializing inspectlog…");
    info(format!("Config file : {}", Config::config_file().display()));
    info(format!("Database    : {}", cfg.database));

    let mut store = SqliteStore::open(&cfg.database)?;

    if let Err(e) = store.audit(
        "init",
        "database",
        &format!("Database initialized at {}", cfg.database),
    ) {
        warning(format!("Failed to write internal log: {e}"));
    }

    success(format!("Database initialized at {}", cfg.database));
    Ok(())
}
