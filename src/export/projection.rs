//! Spreadsheet projection of one completed record: History, Summary and
//! Notes sheets.

use crate::core::calculator::{HourlyRate, diff_fraction, price_outcome};
use crate::export::filename::workbook_file_name;
use crate::export::sheet::{Cell, NumFormat, Sheet, WorkbookSpec};
use crate::models::{CompletedInspection, HistoryYearEntry};
use crate::utils::date::display_date;

pub const HISTORY_SHEET: &str = "History";
pub const SUMMARY_SHEET: &str = "Summary";
pub const NOTES_SHEET: &str = "Notes";

const HISTORY_HEADERS: [&str; 7] = [
    "Year",
    "Bid Hours",
    "Actual Hours",
    "% Diff",
    "Bid Price ($)",
    "Actual Price ($)",
    "Gain/Loss ($)",
];
const HISTORY_WIDTHS: [f64; 7] = [8.0, 12.0, 12.0, 10.0, 15.0, 15.0, 15.0];
const SUMMARY_WIDTHS: [f64; 2] = [35.0, 20.0];
const NOTES_WIDTHS: [f64; 1] = [80.0];

/// One exported history line. `percent_diff` is a fraction (0.2 = 20%).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistoryFigures {
    pub year: i32,
    pub bid: f64,
    pub actual: f64,
    pub percent_diff: f64,
    pub bid_price: f64,
    pub actual_price: f64,
    pub gain_loss: f64,
}

impl HistoryFigures {
    pub fn from_entry(entry: &HistoryYearEntry, rate: HourlyRate) -> Self {
        let price = price_outcome(entry.bid_price, entry.actual, rate);
        Self {
            year: entry.year,
            bid: entry.bid,
            actual: entry.actual,
            percent_diff: diff_fraction(entry.bid, entry.actual),
            bid_price: entry.bid_price,
            actual_price: price.actual_price,
            gain_loss: price.gain_loss,
        }
    }
}

/// Aggregates over the history series. All zero for an empty series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistorySummary {
    pub avg_bid: f64,
    pub avg_actual: f64,
    /// Mean fractional difference.
    pub avg_diff: f64,
    pub total_gain_loss: f64,
    /// `None` when there is no history or the latest year is 0.
    pub most_recent_year: Option<i32>,
}

pub fn summarize(figures: &[HistoryFigures]) -> HistorySummary {
    if figures.is_empty() {
        return HistorySummary {
            avg_bid: 0.0,
            avg_actual: 0.0,
            avg_diff: 0.0,
            total_gain_loss: 0.0,
            most_recent_year: None,
        };
    }

    let n = figures.len() as f64;
    HistorySummary {
        avg_bid: figures.iter().map(|f| f.bid).sum::<f64>() / n,
        avg_actual: figures.iter().map(|f| f.actual).sum::<f64>() / n,
        avg_diff: figures.iter().map(|f| f.percent_diff).sum::<f64>() / n,
        total_gain_loss: figures.iter().map(|f| f.gain_loss).sum(),
        most_recent_year: figures.iter().map(|f| f.year).max().filter(|&y| y != 0),
    }
}

pub fn history_sheet(figures: &[HistoryFigures]) -> Sheet {
    let mut sheet = Sheet::new(HISTORY_SHEET, &HISTORY_WIDTHS);
    sheet.header_row = true;
    sheet.push_row(HISTORY_HEADERS.iter().map(|h| Cell::text(*h)).collect());

    for f in figures {
        sheet.push_row(vec![
            Cell::number(f.year as f64),
            Cell::number(f.bid),
            Cell::number(f.actual),
            Cell::number(f.percent_diff).with_format(NumFormat::Percent),
            Cell::number(f.bid_price).with_format(NumFormat::Currency),
            Cell::number(f.actual_price).with_format(NumFormat::Currency),
            Cell::number(f.gain_loss).with_format(NumFormat::Currency),
        ]);
    }

    sheet
}

pub fn summary_sheet(site_name: &str, summary: &HistorySummary) -> Sheet {
    let mut sheet = Sheet::new(SUMMARY_SHEET, &SUMMARY_WIDTHS);
    let site = if site_name.is_empty() { "N/A" } else { site_name };

    sheet.push_row(vec![Cell::text("Company/Site:"), Cell::text(site)]);
    sheet.push_blank();
    sheet.push_row(vec![Cell::text("KPIs (auto-calculated from History)")]);
    sheet.push_blank();
    sheet.push_row(vec![
        Cell::text("Average Bid Hours"),
        Cell::number(summary.avg_bid).with_format(NumFormat::TwoDecimals),
    ]);
    sheet.push_row(vec![
        Cell::text("Average Actual Hours"),
        Cell::number(summary.avg_actual).with_format(NumFormat::TwoDecimals),
    ]);
    sheet.push_row(vec![
        Cell::text("Average % Difference"),
        Cell::number(summary.avg_diff).with_format(NumFormat::Percent),
    ]);
    sheet.push_row(vec![
        Cell::text("Total Gain/Loss ($)"),
        Cell::number(summary.total_gain_loss).with_format(NumFormat::Currency),
    ]);
    sheet.push_blank();

    let year = match summary.most_recent_year {
        Some(y) => Cell::number(y as f64),
        None => Cell::text("N/A"),
    };
    sheet.push_row(vec![Cell::text("Most Recent Year"), year]);

    sheet
}

pub fn notes_sheet(record: &CompletedInspection) -> Sheet {
    let mut sheet = Sheet::new(NOTES_SHEET, &NOTES_WIDTHS);
    let yes_no = if record.report_sent { "Yes" } else { "No" };

    sheet.push_row(vec![Cell::text("Inspector Notes (free text)")]);
    sheet.push_row(vec![Cell::text(
        "Use this sheet to capture context from each inspection (mirrors the PDF fields):",
    )]);
    sheet.push_blank();
    sheet.push_row(vec![
        Cell::text("- Date Completed:"),
        Cell::text(display_date(&record.date_completed)),
    ]);
    sheet.push_row(vec![
        Cell::text("- Deficiencies Found:"),
        Cell::text(record.deficiencies.as_str()),
    ]);
    sheet.push_row(vec![Cell::text("- Report Sent (Yes/No):"), Cell::text(yes_no)]);
    sheet.push_row(vec![Cell::text(
        "- Field Notes (access issues, special equipment, returns needed, etc.):",
    )]);
    sheet.push_row(vec![Cell::text(record.discrepancies.as_str())]);
    sheet.push_blank();
    sheet.push_row(vec![Cell::text("- Contract/Quote Notes for Marty:")]);
    sheet.push_row(vec![Cell::text(record.notes.as_str())]);

    sheet
}

/// The three sheets and the target filename for one record.
pub fn build_workbook(record: &CompletedInspection, rate: HourlyRate) -> WorkbookSpec {
    let figures: Vec<HistoryFigures> = record
        .hours_history
        .iter()
        .map(|h| HistoryFigures::from_entry(h, rate))
        .collect();
    let summary = summarize(&figures);

    WorkbookSpec {
        file_name: workbook_file_name(&record.site_name, &record.project_number),
        sheets: vec![
            history_sheet(&figures),
            summary_sheet(&record.site_name, &summary),
            notes_sheet(record),
        ],
    }
}
