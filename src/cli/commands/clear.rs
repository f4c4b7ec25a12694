use crate::cli::commands::open_repo;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{confirm, info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Clear { yes } = cmd {
        if !*yes
            && !confirm(
                "This deletes ALL ongoing and completed inspections and the report notes. This action is irreversible.",
            )
        {
            info("Operation cancelled.");
            return Ok(());
        }

        let mut repo = open_repo(cfg)?;
        repo.clear_all()?;
        success("All report data has been cleared.");
    }
    Ok(())
}
