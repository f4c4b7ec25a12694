use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::SqliteStore;
use crate::ui::messages::info;
use crate::utils::colors::{CYAN, GREEN, GREY, RED, RESET};
use crate::utils::table::Table;

/// Color per logged operation
fn color_for_operation(op: &str) -> &'static str {
    match op {
        "create" | "promote" => GREEN,
        "delete" | "clear" => RED,
        "migration_applied" | "init" | "update" => CYAN,
        _ => RESET,
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Log { print: true }) {
        let store = SqliteStore::open(&cfg.database)?;
        let rows = store.log_rows()?;

        if rows.is_empty() {
            info("The internal log is empty.");
            return Ok(());
        }

        println!("📜 Internal log:\n");

        let mut table = Table::new(&["Date", "Operation", "Target", "Message"]);
        for row in rows {
            let date = chrono::DateTime::parse_from_rfc3339(&row.date)
                .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
                .unwrap_or(row.date);
            let op = format!("{}{}{RESET}", color_for_operation(&row.operation), row.operation);
            let target = if row.target.is_empty() {
                format!("{GREY}-{RESET}")
            } else {
                row.target
            };
            table.add_row(vec![date, op, target, row.message]);
        }
        print!("{}", table.render());
    } else {
        info("Nothing to do: use --print.");
    }

    Ok(())
}
