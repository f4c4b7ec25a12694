use crate::cli::commands::open_repo;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use crate::utils::date;

/// Empty clears that end; anything else must be a valid `YYYY-MM-DD`.
fn checked(raw: &str) -> AppResult<String> {
    let raw = raw.trim();
    if raw.is_empty() || date::parse_local_date(raw).is_some() {
        Ok(raw.to_string())
    } else {
        Err(AppError::InvalidDate(raw.to_string()))
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Range { start, end } = cmd {
        let mut repo = open_repo(cfg)?;
        let mut range = repo.effective_date_range(date::today())?;

        if start.is_none() && end.is_none() {
            info(range.display());
            info(format!("Report file: {}", range.pdf_file_name()));
            return Ok(());
        }

        if let Some(s) = start {
            range.start = checked(s)?;
        }
        if let Some(e) = end {
            range.end = checked(e)?;
        }

        repo.save_date_range(&range)?;
        success(range.display());
    }
    Ok(())
}
