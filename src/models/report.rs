use crate::core::numeric::lenient_string;
use crate::utils::date::{display_date, iso, week_bounds};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Free-text notes attached to the weekly report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportNotes {
    #[serde(default, deserialize_with = "lenient_string")]
    pub trends_noticed: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub resource_challenges: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub suggested_improvements: String,
}

impl ReportNotes {
    pub fn is_empty(&self) -> bool {
        self.trends_noticed.is_empty()
            && self.resource_challenges.is_empty()
            && self.suggested_improvements.is_empty()
    }
}

/// Report period as raw `YYYY-MM-DD` strings (either end may be empty).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    #[serde(default, deserialize_with = "lenient_string")]
    pub start: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub end: String,
}

const UNSET_DATE: &str = "YYYY-MM-DD";

impl DateRange {
    pub fn new(start: &str, end: &str) -> Self {
        Self {
            start: start.to_string(),
            end: end.to_string(),
        }
    }

    /// Monday to Saturday around `today` (see [`week_bounds`]).
    pub fn default_week(today: NaiveDate) -> Self {
        let (monday, saturday) = week_bounds(today);
        Self {
            start: iso(monday),
            end: iso(saturday),
        }
    }

    pub fn is_set(&self) -> bool {
        !self.start.is_empty() && !self.end.is_empty()
    }

    /// Heading line of the report.
    pub fn display(&self) -> String {
        if self.is_set() {
            format!(
                "For the week of {} to {}",
                display_date(&self.start),
                display_date(&self.end)
            )
        } else {
            "Date range not set.".to_string()
        }
    }

    /// Filename of the rendered report, raw stored strings are used verbatim.
    pub fn pdf_file_name(&self) -> String {
        let start = if self.start.is_empty() { UNSET_DATE } else { &self.start };
        let end = if self.end.is_empty() { UNSET_DATE } else { &self.end };
        format!("Omni_IT_Report_{start}_to_{end}.pdf")
    }
}
