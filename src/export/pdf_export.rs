// src/export/pdf_export.rs

use crate::core::projection::{CompletedRow, OngoingRow};
use crate::errors::{AppError, AppResult};
use crate::export::model::{
    COMPLETED_HEADERS, HISTORY_HEADERS, ONGOING_HEADERS, completed_details, completed_to_row,
    history_to_table, ongoing_to_row,
};
use crate::export::fs_utils::ensure_writable;
use crate::export::notify_export_success;
use crate::export::pdf::PdfManager;
use crate::models::{DateRange, ReportNotes};
use crate::ui::messages::info;
use std::path::{Path, PathBuf};

/// Everything the report document shows.
pub(crate) struct ReportView<'a> {
    pub company: &'a str,
    pub range: &'a DateRange,
    pub ongoing: &'a [OngoingRow],
    pub completed: &'a [CompletedRow],
    pub notes: &'a ReportNotes,
}

impl ReportView<'_> {
    pub fn title(&self) -> String {
        format!("{} Weekly Report - {}", self.company, self.range.display())
    }
}

/// Lay the report out page by page.
pub(crate) fn render_report(view: &ReportView<'_>) -> PdfManager {
    let mut pdf = PdfManager::new(&view.title());

    pdf.heading("Ongoing Inspections");
    if view.ongoing.is_empty() {
        pdf.paragraph("No ongoing inspections.");
    } else {
        let rows: Vec<Vec<String>> = view.ongoing.iter().map(ongoing_to_row).collect();
        pdf.table(&ONGOING_HEADERS, &rows);
    }

    pdf.heading("Completed Inspections");
    if view.completed.is_empty() {
        pdf.paragraph("No completed inspections.");
    }
    for row in view.completed {
        pdf.table(&COMPLETED_HEADERS, &[completed_to_row(row)]);
        for line in completed_details(row) {
            pdf.paragraph(&line);
        }
        if row.history.is_empty() {
            pdf.paragraph("No historical data entered.");
        } else {
            pdf.table(&HISTORY_HEADERS, &history_to_table(row));
        }
    }

    pdf.heading("Trends Noticed");
    pdf.paragraph(&view.notes.trends_noticed);
    pdf.heading("Resource Challenges");
    pdf.paragraph(&view.notes.resource_challenges);
    pdf.heading("Suggested Improvements");
    pdf.paragraph(&view.notes.suggested_improvements);

    pdf
}

/// Render the report into `dir` under the date-range filename.
pub(crate) fn export_pdf(view: &ReportView<'_>, dir: &Path, force: bool) -> AppResult<PathBuf> {
    let path = dir.join(view.range.pdf_file_name());
    ensure_writable(&path, force)?;
    info(format!("Exporting to PDF: {}", path.display()));

    render_report(view)
        .save(&path)
        .map_err(|e| AppError::Export(format!("PDF export error: {e}")))?;

    notify_export_success("PDF", &path);
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::calculator::HourlyRate;
    use crate::core::projection::{project_completed, project_ongoing};
    use crate::models::{CompletedInspection, OngoingInspection};

    fn ongoing(n: usize) -> Vec<OngoingRow> {
        project_ongoing(
            (0..n)
                .map(|i| OngoingInspection {
                    id: format!("ongo_{i}"),
                    site_name: format!("Site {i}"),
                    project_number: format!("P{i}"),
                    bid_hours: 10.0,
                    hours_worked: 4.0,
                    est_completion: "2024-06-01".into(),
                    notes: String::new(),
                })
                .collect(),
        )
    }

    #[test]
    fn title_uses_company_and_range() {
        let range = DateRange::new("2024-03-04", "2024-03-09");
        let notes = ReportNotes::default();
        let view = ReportView {
            company: "Omni IT",
            range: &range,
            ongoing: &[],
            completed: &[],
            notes: &notes,
        };
        assert_eq!(
            view.title(),
            "Omni IT Weekly Report - For the week of 03/04/2024 to 03/09/2024"
        );
    }

    #[test]
    fn long_reports_paginate() {
        let range = DateRange::default();
        let notes = ReportNotes {
            trends_noticed: "More sprinkler work".into(),
            ..ReportNotes::default()
        };
        let rows = ongoing(80);
        let completed = project_completed(
            vec![CompletedInspection {
                id: "comp_1".into(),
                site_name: "Depot".into(),
                project_number: "9".into(),
                date_completed: "2024-03-05".into(),
                bid_hours: 4.0,
                actual_hours: 5.0,
                bid_price: 200.0,
                discrepancies: String::new(),
                deficiencies: String::new(),
                notes: String::new(),
                report_sent: true,
                hours_history: Vec::new(),
            }],
            HourlyRate::DEFAULT,
        );
        let view = ReportView {
            company: "Omni IT",
            range: &range,
            ongoing: &rows,
            completed: &completed,
            notes: &notes,
        };

        let pdf = render_report(&view);
        assert!(pdf.page_count() >= 2);

        let bytes = pdf.finish();
        assert!(bytes.starts_with(b"%PDF"));
    }
}
