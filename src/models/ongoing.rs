use super::collection::{Collection, InspectionRecord};
use crate::core::numeric::{lenient_f64, lenient_string};
use serde::{Deserialize, Serialize};

/// An engagement in progress.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OngoingInspection {
    #[serde(default, deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub site_name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub project_number: String,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub bid_hours: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub hours_worked: f64,
    /// Raw `YYYY-MM-DD`, may be empty.
    #[serde(default, deserialize_with = "lenient_string")]
    pub est_completion: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub notes: String,
}

/// Form data for an ongoing upsert.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OngoingPatch {
    /// Empty → create a new record.
    pub id: String,
    pub site_name: Option<String>,
    pub project_number: Option<String>,
    pub bid_hours: Option<f64>,
    pub hours_worked: Option<f64>,
    pub est_completion: Option<String>,
    pub notes: Option<String>,
}

impl OngoingPatch {
    pub fn for_id(id: &str) -> Self {
        Self {
            id: id.to_string(),
            ..Self::default()
        }
    }
}

impl InspectionRecord for OngoingInspection {
    type Patch = OngoingPatch;

    const COLLECTION: Collection = Collection::Ongoing;

    fn id(&self) -> &str {
        &self.id
    }

    fn patch_id(patch: &OngoingPatch) -> &str {
        &patch.id
    }

    fn create(id: String, patch: &OngoingPatch) -> Self {
        Self {
            id,
            site_name: patch.site_name.clone().unwrap_or_default(),
            project_number: patch.project_number.clone().unwrap_or_default(),
            bid_hours: patch.bid_hours.unwrap_or(0.0),
            hours_worked: patch.hours_worked.unwrap_or(0.0),
            est_completion: patch.est_completion.clone().unwrap_or_default(),
            notes: patch.notes.clone().unwrap_or_default(),
        }
    }

    fn merge(&mut self, patch: &OngoingPatch) {
        if let Some(v) = &patch.site_name {
            self.site_name = v.clone();
        }
        if let Some(v) = &patch.project_number {
            self.project_number = v.clone();
        }
        if let Some(v) = patch.bid_hours {
            self.bid_hours = v;
        }
        if let Some(v) = patch.hours_worked {
            self.hours_worked = v;
        }
        if let Some(v) = &patch.est_completion {
            self.est_completion = v.clone();
        }
        if let Some(v) = &patch.notes {
            self.notes = v.clone();
        }
    }
}
