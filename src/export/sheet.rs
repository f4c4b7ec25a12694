//! Writer-independent workbook model: ordered rows of cells plus the
//! presentation metadata (column widths, number formats) of each sheet.

/// Underlying value of a cell. Formatting never changes it.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Empty,
    Number(f64),
    Text(String),
}

/// Display formats understood by spreadsheet applications.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumFormat {
    /// Fraction shown as a percentage, one decimal.
    Percent,
    Currency,
    TwoDecimals,
}

impl NumFormat {
    pub fn pattern(&self) -> &'static str {
        match self {
            NumFormat::Percent => "0.0%",
            NumFormat::Currency => "\"$\"#,##0.00",
            NumFormat::TwoDecimals => "0.00",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    pub value: CellValue,
    pub format: Option<NumFormat>,
}

impl Cell {
    pub fn empty() -> Self {
        Self {
            value: CellValue::Empty,
            format: None,
        }
    }

    pub fn text(s: impl Into<String>) -> Self {
        Self {
            value: CellValue::Text(s.into()),
            format: None,
        }
    }

    pub fn number(n: f64) -> Self {
        Self {
            value: CellValue::Number(n),
            format: None,
        }
    }

    pub fn with_format(mut self, format: NumFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn as_number(&self) -> Option<f64> {
        match self.value {
            CellValue::Number(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match &self.value {
            CellValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Sheet {
    pub name: String,
    pub rows: Vec<Vec<Cell>>,
    /// Width per column in characters.
    pub col_widths: Vec<f64>,
    /// Style the first row as a header.
    pub header_row: bool,
}

impl Sheet {
    pub fn new(name: &str, col_widths: &[f64]) -> Self {
        Self {
            name: name.to_string(),
            rows: Vec::new(),
            col_widths: col_widths.to_vec(),
            header_row: false,
        }
    }

    pub fn push_row(&mut self, row: Vec<Cell>) {
        self.rows.push(row);
    }

    pub fn push_blank(&mut self) {
        self.rows.push(Vec::new());
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        self.rows.get(row).and_then(|r| r.get(col))
    }
}

/// Everything needed to produce one workbook file.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkbookSpec {
    pub file_name: String,
    pub sheets: Vec<Sheet>,
}

impl WorkbookSpec {
    pub fn sheet(&self, name: &str) -> Option<&Sheet> {
        self.sheets.iter().find(|s| s.name == name)
    }
}
