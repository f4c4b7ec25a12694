use crate::cli::commands::open_repo;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::projection::{CompletedRow, OngoingRow};
use crate::errors::AppResult;
use crate::ui::messages::{header, info};
use crate::utils::colors::{colorize, colorize_optional};
use crate::utils::date;
use crate::utils::formatting::{bold, hours, money, or_none, percent, signed_hours, yes_no};
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        ongoing,
        completed,
        history,
    } = cmd
    {
        let repo = open_repo(cfg)?;
        let both = !*ongoing && !*completed;

        let range = repo.effective_date_range(date::today())?;
        println!("{}", bold(&format!("{} Weekly Report", cfg.company)));
        println!("{}", range.display());

        if *ongoing || both {
            print_ongoing(&repo.project_ongoing()?);
        }
        if *completed || both {
            print_completed(&repo.project_completed(cfg.rate())?, *history);
        }
    }
    Ok(())
}

fn print_ongoing(rows: &[OngoingRow]) {
    header("Ongoing Inspections");
    if rows.is_empty() {
        info("No ongoing inspections.");
        return;
    }

    let mut table = Table::new(&[
        "ID",
        "Site",
        "Project #",
        "Bid Hrs",
        "Worked",
        "Diff",
        "Est. Completion",
        "Notes",
    ]);
    for row in rows {
        let r = &row.record;
        table.add_row(vec![
            r.id.clone(),
            r.site_name.clone(),
            r.project_number.clone(),
            hours(r.bid_hours),
            hours(r.hours_worked),
            colorize(&signed_hours(row.hours_diff), row.hours_tone),
            colorize_optional(&row.est_completion_display()),
            r.notes.clone(),
        ]);
    }
    print!("{}", table.render());
}

fn print_completed(rows: &[CompletedRow], with_history: bool) {
    header("Completed Inspections");
    if rows.is_empty() {
        info("No completed inspections.");
        return;
    }

    let mut table = Table::new(&[
        "ID",
        "Site",
        "Project #",
        "Completed",
        "Bid Hrs",
        "Actual Hrs",
        "% Diff",
        "Bid $",
        "Actual $",
        "Gain/Loss",
        "Report Sent",
    ]);
    for row in rows {
        let r = &row.record;
        table.add_row(vec![
            r.id.clone(),
            r.site_name.clone(),
            r.project_number.clone(),
            colorize_optional(&row.date_completed_display()),
            hours(r.bid_hours),
            hours(r.actual_hours),
            colorize(&percent(row.variance.diff_percent), row.diff_tone),
            money(r.bid_price),
            money(row.price.actual_price),
            colorize(&money(row.price.gain_loss), row.gain_loss_tone),
            yes_no(r.report_sent).to_string(),
        ]);
    }
    print!("{}", table.render());

    if with_history {
        for row in rows {
            print_details(row);
        }
    }
}

fn print_details(row: &CompletedRow) {
    let r = &row.record;
    println!("\n{} ({})", bold(&r.site_name), r.id);
    println!("  Discrepancies: {}", colorize_optional(or_none(&r.discrepancies)));
    println!("  Deficiencies:  {}", colorize_optional(or_none(&r.deficiencies)));
    println!("  Notes:         {}", colorize_optional(or_none(&r.notes)));

    if row.history.is_empty() {
        println!("  No historical data entered.");
        return;
    }

    let mut table = Table::new(&[
        "Year",
        "Bid Hrs",
        "Actual Hrs",
        "% Diff",
        "Bid $",
        "Actual $",
        "Gain/Loss",
    ]);
    for h in &row.history {
        table.add_row(vec![
            h.entry.year.to_string(),
            hours(h.entry.bid),
            hours(h.entry.actual),
            colorize(&percent(h.variance.diff_percent), h.diff_tone),
            money(h.entry.bid_price),
            money(h.price.actual_price),
            colorize(&money(h.price.gain_loss), h.gain_loss_tone),
        ]);
    }
    for line in table.render().lines() {
        println!("  {line}");
    }
}
