pub mod collection;
pub mod completed;
pub mod history;
pub mod ongoing;
pub mod report;

pub use collection::{Collection, InspectionRecord};
pub use completed::{CompletedInspection, CompletedPatch};
pub use history::{HistoryDraft, HistoryYearEntry, collect_history};
pub use ongoing::{OngoingInspection, OngoingPatch};
pub use report::{DateRange, ReportNotes};
