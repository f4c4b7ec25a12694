use crate::core::numeric::{lenient_f64, lenient_i32, to_number};
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// One past year's performance for a site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryYearEntry {
    #[serde(default, deserialize_with = "lenient_i32")]
    pub year: i32,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub bid: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub actual: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub bid_price: f64,
}

/// Raw text of one history row on the editing surface.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryDraft {
    pub year: String,
    pub bid: String,
    pub actual: String,
    pub bid_price: String,
}

impl HistoryDraft {
    pub fn new(year: &str, bid: &str, actual: &str, bid_price: &str) -> Self {
        Self {
            year: year.to_string(),
            bid: bid.to_string(),
            actual: actual.to_string(),
            bid_price: bid_price.to_string(),
        }
    }

    /// Parse the CLI form `YEAR:BID:ACTUAL:PRICE`. Empty parts are allowed,
    /// the row is then dropped by [`collect_history`].
    pub fn parse_cli(raw: &str) -> AppResult<Self> {
        let parts: Vec<&str> = raw.split(':').map(str::trim).collect();
        match parts.as_slice() {
            [year, bid, actual, price] => Ok(Self::new(year, bid, actual, price)),
            _ => Err(AppError::InvalidHistory(raw.to_string())),
        }
    }

    pub fn is_complete(&self) -> bool {
        [&self.year, &self.bid, &self.actual, &self.bid_price]
            .iter()
            .all(|v| !v.trim().is_empty())
    }

    fn to_entry(&self) -> HistoryYearEntry {
        HistoryYearEntry {
            year: to_number(&self.year).trunc() as i32,
            bid: to_number(&self.bid),
            actual: to_number(&self.actual),
            bid_price: to_number(&self.bid_price),
        }
    }
}

/// Keep only the rows with all four values filled in, in entry order.
pub fn collect_history(drafts: &[HistoryDraft]) -> Vec<HistoryYearEntry> {
    drafts
        .iter()
        .filter(|d| d.is_complete())
        .map(HistoryDraft::to_entry)
        .collect()
}
