use crate::cli::commands::open_repo;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{header, success};
use crate::utils::colors::colorize_optional;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Notes {
        trends,
        challenges,
        improvements,
    } = cmd
    {
        let mut repo = open_repo(cfg)?;
        let mut notes = repo.load_notes()?;

        if trends.is_none() && challenges.is_none() && improvements.is_none() {
            for (title, text) in [
                ("Trends Noticed", &notes.trends_noticed),
                ("Resource Challenges", &notes.resource_challenges),
                ("Suggested Improvements", &notes.suggested_improvements),
            ] {
                header(title);
                println!("{}", colorize_optional(text));
            }
            return Ok(());
        }

        if let Some(t) = trends {
            notes.trends_noticed = t.clone();
        }
        if let Some(c) = challenges {
            notes.resource_challenges = c.clone();
        }
        if let Some(i) = improvements {
            notes.suggested_improvements = i.clone();
        }

        repo.save_notes(&notes)?;
        success("Report notes saved.");
    }
    Ok(())
}
