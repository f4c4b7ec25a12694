// src/export/xlsx.rs

use crate::errors::AppResult;
use crate::export::fs_utils::ensure_writable;
use crate::export::notify_export_success;
use crate::export::sheet::{Cell, CellValue, Sheet, WorkbookSpec};
use crate::ui::messages::info;
use rust_xlsxwriter::{Color, Format, FormatBorder, FormatPattern, Workbook, Worksheet};
use std::path::{Path, PathBuf};

/// Delivers a projected workbook somewhere (a file, a test buffer, ...).
pub trait WorkbookWriter {
    /// Write `spec` into `dir` and return where it ended up.
    fn write(&mut self, spec: &WorkbookSpec, dir: &Path) -> AppResult<PathBuf>;
}

/// Writes real `.xlsx` files with rust_xlsxwriter.
pub struct XlsxWriter {
    pub force: bool,
}

impl XlsxWriter {
    pub fn new(force: bool) -> Self {
        Self { force }
    }
}

impl WorkbookWriter for XlsxWriter {
    fn write(&mut self, spec: &WorkbookSpec, dir: &Path) -> AppResult<PathBuf> {
        let path = dir.join(&spec.file_name);
        ensure_writable(&path, self.force)?;
        info(format!("Exporting to XLSX: {}", path.display()));

        let mut workbook = Workbook::new();
        for sheet in &spec.sheets {
            let worksheet = workbook.add_worksheet();
            write_sheet(worksheet, sheet)?;
        }

        workbook.save(&path)?;
        notify_export_success("XLSX", &path);
        Ok(path)
    }
}

fn write_sheet(worksheet: &mut Worksheet, sheet: &Sheet) -> AppResult<()> {
    worksheet.set_name(&sheet.name)?;

    // ---------------------------
    // Header
    // ---------------------------
    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    // ---------------------------
    // Rows
    // ---------------------------
    for (row_index, row) in sheet.rows.iter().enumerate() {
        let is_header = sheet.header_row && row_index == 0;

        for (col, cell) in row.iter().enumerate() {
            let format = if is_header {
                Some(header_format.clone())
            } else {
                cell.format.map(|f| Format::new().set_num_format(f.pattern()))
            };
            write_cell(worksheet, row_index as u32, col as u16, cell, format.as_ref())?;
        }
    }

    if sheet.header_row {
        worksheet.set_freeze_panes(1, 0)?;
    }

    // ---------------------------
    // Column widths
    // ---------------------------
    for (c, w) in sheet.col_widths.iter().enumerate() {
        worksheet.set_column_width(c as u16, *w)?;
    }

    Ok(())
}

fn write_cell(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    cell: &Cell,
    format: Option<&Format>,
) -> AppResult<()> {
    match (&cell.value, format) {
        (CellValue::Empty, _) => {}
        (CellValue::Number(n), Some(fmt)) => {
            worksheet.write_number_with_format(row, col, *n, fmt)?;
        }
        (CellValue::Number(n), None) => {
            worksheet.write_number(row, col, *n)?;
        }
        (CellValue::Text(s), Some(fmt)) => {
            worksheet.write_string_with_format(row, col, s, fmt)?;
        }
        (CellValue::Text(s), None) => {
            worksheet.write_string(row, col, s)?;
        }
    }
    Ok(())
}
