//! Inspection record repository.
//!
//! Owns the ongoing and completed collections. Each call reads the
//! collection, applies one change and writes it back; nothing is cached
//! between calls.

use crate::errors::AppResult;
use crate::models::{
    Collection, CompletedPatch, DateRange, InspectionRecord, OngoingInspection, ReportNotes,
};
use crate::store::{
    DATE_RANGE_KEY, NOTES_KEY, RecordStore, read_document, read_records, write_document,
    write_records,
};
use crate::utils::date::{iso, today};
use chrono::{Local, NaiveDate};
use tracing::{debug, warn};

/// Result of an upsert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Upsert {
    Created(String),
    Updated(String),
    /// The patch named an id that is not in the collection; nothing changed.
    Ignored(String),
}

impl Upsert {
    pub fn id(&self) -> &str {
        match self {
            Upsert::Created(id) | Upsert::Updated(id) | Upsert::Ignored(id) => id,
        }
    }

    pub fn is_persisted(&self) -> bool {
        !matches!(self, Upsert::Ignored(_))
    }
}

pub struct Repository<S: RecordStore> {
    store: S,
}

impl<S: RecordStore> Repository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn into_inner(self) -> S {
        self.store
    }

    // ---------------------------
    // Collections
    // ---------------------------

    /// Records exactly as persisted, in stored order.
    pub fn list<R: InspectionRecord>(&self) -> AppResult<Vec<R>> {
        read_records(&self.store, R::COLLECTION.key())
    }

    pub fn find<R: InspectionRecord>(&self, id: &str) -> AppResult<Option<R>> {
        Ok(self.list::<R>()?.into_iter().find(|r| r.id() == id))
    }

    /// Create (empty patch id) or field-wise update (existing id).
    pub fn upsert<R: InspectionRecord>(&mut self, patch: &R::Patch) -> AppResult<Upsert> {
        let collection = R::COLLECTION;
        let mut records = self.list::<R>()?;
        let patch_id = R::patch_id(patch);

        let outcome = if patch_id.is_empty() {
            let id = generate_id(collection, &records);
            records.push(R::create(id.clone(), patch));
            Upsert::Created(id)
        } else {
            match records.iter_mut().find(|r| r.id() == patch_id) {
                Some(existing) => {
                    existing.merge(patch);
                    Upsert::Updated(patch_id.to_string())
                }
                None => {
                    warn!(collection = collection.label(), id = patch_id, "update for unknown id ignored");
                    return Ok(Upsert::Ignored(patch_id.to_string()));
                }
            }
        };

        write_records(&mut self.store, collection.key(), &records)?;
        debug!(collection = collection.label(), outcome = ?outcome, "record saved");

        let op = match outcome {
            Upsert::Created(_) => "create",
            _ => "update",
        };
        self.audit(op, outcome.id(), &format!("{} record saved", collection.label()));

        Ok(outcome)
    }

    /// Remove by id. Returns `false` (and writes nothing) when absent.
    pub fn remove<R: InspectionRecord>(&mut self, id: &str) -> AppResult<bool> {
        let collection = R::COLLECTION;
        let mut records = self.list::<R>()?;
        let before = records.len();
        records.retain(|r| r.id() != id);

        if records.len() == before {
            debug!(collection = collection.label(), id, "nothing to remove");
            return Ok(false);
        }

        write_records(&mut self.store, collection.key(), &records)?;
        self.audit("delete", id, &format!("{} record deleted", collection.label()));
        Ok(true)
    }

    /// Ongoing → completed, first phase.
    ///
    /// Removes the ongoing record and hands back a completed draft. The
    /// draft is not stored: the caller persists it with
    /// `upsert::<CompletedInspection>` once the final figures are known.
    /// If that never happens the ongoing record is gone regardless.
    pub fn promote(&mut self, id: &str) -> AppResult<Option<CompletedPatch>> {
        self.promote_on(id, today())
    }

    /// [`Repository::promote`] with an explicit completion date.
    pub fn promote_on(&mut self, id: &str, date: NaiveDate) -> AppResult<Option<CompletedPatch>> {
        let mut ongoing = self.list::<OngoingInspection>()?;
        let Some(pos) = ongoing.iter().position(|r| r.id == id) else {
            debug!(id, "promote: ongoing record not found");
            return Ok(None);
        };

        let source = ongoing.remove(pos);
        write_records(&mut self.store, Collection::Ongoing.key(), &ongoing)?;
        self.audit("promote", id, &format!("'{}' moved out of ongoing", source.site_name));

        Ok(Some(CompletedPatch {
            id: String::new(),
            site_name: Some(source.site_name),
            project_number: Some(source.project_number),
            date_completed: Some(iso(date)),
            bid_hours: Some(source.bid_hours),
            actual_hours: Some(source.hours_worked),
            notes: Some(source.notes),
            hours_history: Some(Vec::new()),
            ..CompletedPatch::default()
        }))
    }

    /// Empty both collections and the report notes in one store call.
    /// The saved date range is kept.
    pub fn clear_all(&mut self) -> AppResult<()> {
        self.store.remove_all(&[
            Collection::Completed.key(),
            Collection::Ongoing.key(),
            NOTES_KEY,
        ])?;
        debug!("all report data cleared");
        self.audit("clear", "all", "Completed, ongoing and notes cleared");
        Ok(())
    }

    // ---------------------------
    // Report notes & date range
    // ---------------------------

    pub fn load_notes(&self) -> AppResult<ReportNotes> {
        read_document(&self.store, NOTES_KEY)
    }

    pub fn save_notes(&mut self, notes: &ReportNotes) -> AppResult<()> {
        write_document(&mut self.store, NOTES_KEY, notes)?;
        self.audit("notes", "report", "Report notes saved");
        Ok(())
    }

    pub fn load_date_range(&self) -> AppResult<DateRange> {
        read_document(&self.store, DATE_RANGE_KEY)
    }

    /// Stored range, or the current Monday..Saturday week when nothing
    /// (or only part of a range) was saved.
    pub fn effective_date_range(&self, today: NaiveDate) -> AppResult<DateRange> {
        let saved = self.load_date_range()?;
        let mut range = DateRange::default_week(today);
        if !saved.start.is_empty() {
            range.start = saved.start;
        }
        if !saved.end.is_empty() {
            range.end = saved.end;
        }
        Ok(range)
    }

    pub fn save_date_range(&mut self, range: &DateRange) -> AppResult<()> {
        write_document(&mut self.store, DATE_RANGE_KEY, range)?;
        self.audit("range", "report", &range.display());
        Ok(())
    }

    fn audit(&mut self, operation: &str, target: &str, message: &str) {
        if let Err(e) = self.store.audit(operation, target, message) {
            warn!(operation, error = %e, "failed to write internal log");
        }
    }
}

/// Collection prefix + creation time in milliseconds, bumped until unique.
fn generate_id<R: InspectionRecord>(collection: Collection, existing: &[R]) -> String {
    let mut millis = Local::now().timestamp_millis();
    loop {
        let candidate = format!("{}{}", collection.id_prefix(), millis);
        if !existing.iter().any(|r| r.id() == candidate) {
            return candidate;
        }
        millis += 1;
    }
}
