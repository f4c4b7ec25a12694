use crate::cli::commands::open_repo;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::{ExportLogic, ExportOptions};
use crate::utils::date;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        dir,
        id,
        force,
    } = cmd
    {
        let repo = open_repo(cfg)?;
        let opts = ExportOptions {
            dir: dir
                .as_deref()
                .map(expand_tilde)
                .unwrap_or_else(|| cfg.export_path()),
            rate: cfg.rate(),
            company: cfg.company.clone(),
            only_id: id.clone(),
            force: *force,
            today: date::today(),
        };

        ExportLogic::export(&repo, *format, &opts)?;
    }
    Ok(())
}
