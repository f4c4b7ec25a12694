// src/export/model.rs

use crate::core::projection::{CompletedRow, OngoingRow};
use crate::utils::formatting::{hours, money, or_none, percent, yes_no};
use serde::Serialize;

/// Flat view of one projected completed record, for CSV / JSON.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct CompletedExport {
    pub id: String,
    pub site_name: String,
    pub project_number: String,
    pub date_completed: String,
    pub bid_hours: f64,
    pub actual_hours: f64,
    pub hours_diff: f64,
    pub diff_percent: f64,
    pub bid_price: f64,
    pub actual_price: f64,
    pub gain_loss: f64,
    pub discrepancies: String,
    pub deficiencies: String,
    pub notes: String,
    pub report_sent: bool,
    pub history_years: usize,
}

impl From<&CompletedRow> for CompletedExport {
    fn from(row: &CompletedRow) -> Self {
        let r = &row.record;
        Self {
            id: r.id.clone(),
            site_name: r.site_name.clone(),
            project_number: r.project_number.clone(),
            date_completed: r.date_completed.clone(),
            bid_hours: r.bid_hours,
            actual_hours: r.actual_hours,
            hours_diff: row.variance.hours_diff,
            diff_percent: row.variance.diff_percent,
            bid_price: r.bid_price,
            actual_price: row.price.actual_price,
            gain_loss: row.price.gain_loss,
            discrepancies: r.discrepancies.clone(),
            deficiencies: r.deficiencies.clone(),
            notes: r.notes.clone(),
            report_sent: r.report_sent,
            history_years: r.hours_history.len(),
        }
    }
}

pub(crate) fn completed_exports(rows: &[CompletedRow]) -> Vec<CompletedExport> {
    rows.iter().map(CompletedExport::from).collect()
}

// ---------------------------
// Report tables (PDF)
// ---------------------------

pub(crate) const ONGOING_HEADERS: [&str; 6] = [
    "Site",
    "Project #",
    "Bid Hrs",
    "Hrs Worked",
    "Est. Completion",
    "Notes",
];

pub(crate) const COMPLETED_HEADERS: [&str; 9] = [
    "Site",
    "Project #",
    "Completed",
    "Bid Hrs",
    "Actual Hrs",
    "% Diff",
    "Bid $",
    "Actual $",
    "Gain/Loss",
];

pub(crate) const HISTORY_HEADERS: [&str; 7] = [
    "Year",
    "Bid Hrs",
    "Actual Hrs",
    "% Diff",
    "Bid $",
    "Actual $",
    "Gain/Loss",
];

pub(crate) fn ongoing_to_row(row: &OngoingRow) -> Vec<String> {
    let r = &row.record;
    vec![
        r.site_name.clone(),
        r.project_number.clone(),
        hours(r.bid_hours),
        hours(r.hours_worked),
        row.est_completion_display(),
        r.notes.clone(),
    ]
}

pub(crate) fn completed_to_row(row: &CompletedRow) -> Vec<String> {
    let r = &row.record;
    vec![
        r.site_name.clone(),
        r.project_number.clone(),
        row.date_completed_display(),
        hours(r.bid_hours),
        hours(r.actual_hours),
        percent(row.variance.diff_percent),
        money(r.bid_price),
        money(row.price.actual_price),
        money(row.price.gain_loss),
    ]
}

/// Text fields shown under a completed row.
pub(crate) fn completed_details(row: &CompletedRow) -> Vec<String> {
    let r = &row.record;
    vec![
        format!("Discrepancies: {}", or_none(&r.discrepancies)),
        format!("Deficiencies: {}", or_none(&r.deficiencies)),
        format!("Notes: {}", or_none(&r.notes)),
        format!("Report Sent: {}", yes_no(r.report_sent)),
    ]
}

pub(crate) fn history_to_table(row: &CompletedRow) -> Vec<Vec<String>> {
    row.history
        .iter()
        .map(|h| {
            vec![
                h.entry.year.to_string(),
                hours(h.entry.bid),
                hours(h.entry.actual),
                percent(h.variance.diff_percent),
                money(h.entry.bid_price),
                money(h.price.actual_price),
                money(h.price.gain_loss),
            ]
        })
        .collect()
}
