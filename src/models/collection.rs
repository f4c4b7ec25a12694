use serde::Serialize;
use serde::de::DeserializeOwned;

/// The two record collections owned by the repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Ongoing,
    Completed,
}

impl Collection {
    /// Storage key of the collection.
    pub fn key(&self) -> &'static str {
        match self {
            Collection::Ongoing => "weekly_report_ongoing_v9",
            Collection::Completed => "weekly_report_completed_v9",
        }
    }

    /// Prefix of generated ids; ids are only unique within one collection.
    pub fn id_prefix(&self) -> &'static str {
        match self {
            Collection::Ongoing => "ongo_",
            Collection::Completed => "comp_",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Collection::Ongoing => "ongoing",
            Collection::Completed => "completed",
        }
    }
}

/// A record stored in one of the collections.
///
/// `Patch` carries the form data of an upsert: an empty id means "create",
/// and every `None` field keeps the value already stored.
pub trait InspectionRecord: Clone + Serialize + DeserializeOwned {
    type Patch;

    const COLLECTION: Collection;

    fn id(&self) -> &str;

    fn patch_id(patch: &Self::Patch) -> &str;

    /// Build a fresh record from a patch, absent fields take their defaults.
    fn create(id: String, patch: &Self::Patch) -> Self;

    /// Field-wise merge of a patch over an existing record.
    fn merge(&mut self, patch: &Self::Patch);
}
