// src/export/mod.rs

pub mod filename;
mod fs_utils;
mod json_csv;
pub mod logic;
pub mod model;
pub mod pdf;
mod pdf_export;
pub mod projection;
pub mod sheet;
pub mod xlsx;

pub use logic::{ExportLogic, ExportOptions};
pub use model::CompletedExport;
pub use sheet::{Cell, CellValue, NumFormat, Sheet, WorkbookSpec};
pub use xlsx::{WorkbookWriter, XlsxWriter};

use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Shared completion message for every export.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// One workbook per completed inspection.
    Xlsx,
    /// The weekly report document.
    Pdf,
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Xlsx => "xlsx",
            ExportFormat::Pdf => "pdf",
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}
