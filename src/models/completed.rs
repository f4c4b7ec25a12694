use super::collection::{Collection, InspectionRecord};
use super::history::HistoryYearEntry;
use crate::core::numeric::{lenient_bool, lenient_f64, lenient_string};
use serde::{Deserialize, Serialize};

/// A finished engagement with its financial outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletedInspection {
    #[serde(default, deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub site_name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub project_number: String,
    /// Raw `YYYY-MM-DD`, may be empty.
    #[serde(default, deserialize_with = "lenient_string")]
    pub date_completed: String,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub bid_hours: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub actual_hours: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub bid_price: f64,
    #[serde(default, deserialize_with = "lenient_string")]
    pub discrepancies: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub deficiencies: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub notes: String,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub report_sent: bool,
    #[serde(default)]
    pub hours_history: Vec<HistoryYearEntry>,
}

/// Form data for a completed upsert. Also the shape of the draft produced
/// by promoting an ongoing record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompletedPatch {
    /// Empty → create a new record.
    pub id: String,
    pub site_name: Option<String>,
    pub project_number: Option<String>,
    pub date_completed: Option<String>,
    pub bid_hours: Option<f64>,
    pub actual_hours: Option<f64>,
    pub bid_price: Option<f64>,
    pub discrepancies: Option<String>,
    pub deficiencies: Option<String>,
    pub notes: Option<String>,
    pub report_sent: Option<bool>,
    pub hours_history: Option<Vec<HistoryYearEntry>>,
}

impl CompletedPatch {
    pub fn for_id(id: &str) -> Self {
        Self {
            id: id.to_string(),
            ..Self::default()
        }
    }

    /// Lay `overrides` over this patch; fields set in `overrides` win.
    /// The id of `self` is kept.
    pub fn overlay(mut self, overrides: CompletedPatch) -> Self {
        fn pick<T>(base: &mut Option<T>, over: Option<T>) {
            if over.is_some() {
                *base = over;
            }
        }

        pick(&mut self.site_name, overrides.site_name);
        pick(&mut self.project_number, overrides.project_number);
        pick(&mut self.date_completed, overrides.date_completed);
        pick(&mut self.bid_hours, overrides.bid_hours);
        pick(&mut self.actual_hours, overrides.actual_hours);
        pick(&mut self.bid_price, overrides.bid_price);
        pick(&mut self.discrepancies, overrides.discrepancies);
        pick(&mut self.deficiencies, overrides.deficiencies);
        pick(&mut self.notes, overrides.notes);
        pick(&mut self.report_sent, overrides.report_sent);
        pick(&mut self.hours_history, overrides.hours_history);
        self
    }
}

impl InspectionRecord for CompletedInspection {
    type Patch = CompletedPatch;

    const COLLECTION: Collection = Collection::Completed;

    fn id(&self) -> &str {
        &self.id
    }

    fn patch_id(patch: &CompletedPatch) -> &str {
        &patch.id
    }

    fn create(id: String, patch: &CompletedPatch) -> Self {
        Self {
            id,
            site_name: patch.site_name.clone().unwrap_or_default(),
            project_number: patch.project_number.clone().unwrap_or_default(),
            date_completed: patch.date_completed.clone().unwrap_or_default(),
            bid_hours: patch.bid_hours.unwrap_or(0.0),
            actual_hours: patch.actual_hours.unwrap_or(0.0),
            bid_price: patch.bid_price.unwrap_or(0.0),
            discrepancies: patch.discrepancies.clone().unwrap_or_default(),
            deficiencies: patch.deficiencies.clone().unwrap_or_default(),
            notes: patch.notes.clone().unwrap_or_default(),
            report_sent: patch.report_sent.unwrap_or(false),
            hours_history: patch.hours_history.clone().unwrap_or_default(),
        }
    }

    fn merge(&mut self, patch: &CompletedPatch) {
        if let Some(v) = &patch.site_name {
            self.site_name = v.clone();
        }
        if let Some(v) = &patch.project_number {
            self.project_number = v.clone();
        }
        if let Some(v) = &patch.date_completed {
            self.date_completed = v.clone();
        }
        if let Some(v) = patch.bid_hours {
            self.bid_hours = v;
        }
        if let Some(v) = patch.actual_hours {
            self.actual_hours = v;
        }
        if let Some(v) = patch.bid_price {
            self.bid_price = v;
        }
        if let Some(v) = &patch.discrepancies {
            self.discrepancies = v.clone();
        }
        if let Some(v) = &patch.deficiencies {
            self.deficiencies = v.clone();
        }
        if let Some(v) = &patch.notes {
            self.notes = v.clone();
        }
        if let Some(v) = patch.report_sent {
            self.report_sent = v;
        }
        if let Some(v) = &patch.hours_history {
            self.hours_history = v.clone();
        }
    }
}
