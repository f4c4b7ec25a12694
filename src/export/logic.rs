// src/export/logic.rs

use crate::core::calculator::HourlyRate;
use crate::core::repository::Repository;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::filename::unique_file_name;
use crate::export::fs_utils::{ensure_dir, ensure_writable};
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::completed_exports;
use crate::export::pdf_export::{ReportView, export_pdf};
use crate::export::projection::build_workbook;
use crate::export::xlsx::{WorkbookWriter, XlsxWriter};
use crate::models::CompletedInspection;
use crate::store::RecordStore;
use crate::ui::messages::{info, warning};
use chrono::NaiveDate;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Base name of the tabular (CSV / JSON) export.
pub const TABLE_FILE_STEM: &str = "completed_inspections";

/// Settings shared by every export format.
#[derive(Debug, Clone)]
pub struct ExportOptions {
    pub dir: PathBuf,
    pub rate: HourlyRate,
    pub company: String,
    /// Restrict the workbook export to one record.
    pub only_id: Option<String>,
    pub force: bool,
    /// Used for the default report week.
    pub today: NaiveDate,
}

/// High level export entry points.
pub struct ExportLogic;

impl ExportLogic {
    /// Run one export and return the files written.
    pub fn export<S: RecordStore>(
        repo: &Repository<S>,
        format: ExportFormat,
        opts: &ExportOptions,
    ) -> AppResult<Vec<PathBuf>> {
        ensure_dir(&opts.dir)?;
        debug!(format = format.as_str(), dir = %opts.dir.display(), "export requested");

        match format {
            ExportFormat::Xlsx => {
                let mut writer = XlsxWriter::new(opts.force);
                Self::export_workbooks(
                    repo,
                    &mut writer,
                    opts.rate,
                    &opts.dir,
                    opts.only_id.as_deref(),
                )
            }
            ExportFormat::Pdf => Self::export_report(repo, opts).map(|p| vec![p]),
            ExportFormat::Csv | ExportFormat::Json => {
                Self::export_table(repo, format, opts).map(|p| vec![p])
            }
        }
    }

    /// One workbook per completed record, in stored order.
    ///
    /// An empty collection is not an error: a message is shown and no
    /// file is produced. Likewise for an `only_id` that matches nothing.
    /// Records whose names collide get a numeric suffix, and a declined
    /// overwrite skips that record only.
    pub fn export_workbooks<S: RecordStore, W: WorkbookWriter>(
        repo: &Repository<S>,
        writer: &mut W,
        rate: HourlyRate,
        dir: &Path,
        only_id: Option<&str>,
    ) -> AppResult<Vec<PathBuf>> {
        let records = repo.list::<CompletedInspection>()?;

        if records.is_empty() {
            info("There are no completed inspections to download.");
            return Ok(Vec::new());
        }

        let selected: Vec<&CompletedInspection> = records
            .iter()
            .filter(|r| only_id.is_none_or(|id| r.id == id))
            .collect();

        if selected.is_empty() {
            warning(format!(
                "No completed inspection with id '{}'.",
                only_id.unwrap_or_default()
            ));
            return Ok(Vec::new());
        }

        let mut written = Vec::with_capacity(selected.len());
        let mut taken = HashSet::new();
        for record in selected {
            let mut spec = build_workbook(record, rate);
            spec.file_name = unique_file_name(&spec.file_name, &mut taken);
            debug!(id = %record.id, file = %spec.file_name, "writing workbook");

            match writer.write(&spec, dir) {
                Ok(path) => written.push(path),
                Err(AppError::OverwriteDeclined(path)) => {
                    warning(format!("Skipped {}: existing file kept.", path.display()));
                }
                Err(e) => return Err(e),
            }
        }

        Ok(written)
    }

    /// The report document for the current view.
    pub fn export_report<S: RecordStore>(
        repo: &Repository<S>,
        opts: &ExportOptions,
    ) -> AppResult<PathBuf> {
        let range = repo.effective_date_range(opts.today)?;
        let ongoing = repo.project_ongoing()?;
        let completed = repo.project_completed(opts.rate)?;
        let notes = repo.load_notes()?;

        let view = ReportView {
            company: &opts.company,
            range: &range,
            ongoing: &ongoing,
            completed: &completed,
            notes: &notes,
        };

        export_pdf(&view, &opts.dir, opts.force)
    }

    /// The projected completed table as CSV or JSON.
    pub fn export_table<S: RecordStore>(
        repo: &Repository<S>,
        format: ExportFormat,
        opts: &ExportOptions,
    ) -> AppResult<PathBuf> {
        let rows = completed_exports(&repo.project_completed(opts.rate)?);
        let path = opts
            .dir
            .join(format!("{TABLE_FILE_STEM}.{}", format.as_str()));

        ensure_writable(&path, opts.force)?;

        if rows.is_empty() {
            warning("No completed inspections found; writing an empty table.");
        }

        match format {
            ExportFormat::Json => export_json(&rows, &path)?,
            _ => export_csv(&rows, &path)?,
        }

        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::sheet::WorkbookSpec;
    use crate::models::CompletedPatch;
    use crate::store::MemoryStore;

    /// Collects specs instead of writing files.
    #[derive(Default)]
    struct Recording {
        specs: Vec<WorkbookSpec>,
    }

    impl WorkbookWriter for Recording {
        fn write(&mut self, spec: &WorkbookSpec, dir: &Path) -> AppResult<PathBuf> {
            self.specs.push(spec.clone());
            Ok(dir.join(&spec.file_name))
        }
    }

    /// Behaves like a user answering "no" for one file name.
    struct Declining {
        refuse: &'static str,
        specs: Vec<WorkbookSpec>,
    }

    impl WorkbookWriter for Declining {
        fn write(&mut self, spec: &WorkbookSpec, dir: &Path) -> AppResult<PathBuf> {
            let path = dir.join(&spec.file_name);
            if spec.file_name == self.refuse {
                return Err(AppError::OverwriteDeclined(path));
            }
            self.specs.push(spec.clone());
            Ok(path)
        }
    }

    fn completed(site: &str, project: &str, date: &str) -> CompletedPatch {
        CompletedPatch {
            site_name: Some(site.into()),
            project_number: Some(project.into()),
            date_completed: Some(date.into()),
            bid_hours: Some(10.0),
            actual_hours: Some(12.0),
            bid_price: Some(500.0),
            ..CompletedPatch::default()
        }
    }

    #[test]
    fn empty_collection_produces_no_workbooks() {
        let repo = Repository::new(MemoryStore::new());
        let mut rec = Recording::default();

        let out = ExportLogic::export_workbooks(
            &repo,
            &mut rec,
            HourlyRate::DEFAULT,
            Path::new("/out"),
            None,
        )
        .unwrap();

        assert!(out.is_empty());
        assert!(rec.specs.is_empty());
    }

    #[test]
    fn one_workbook_per_record_in_stored_order() {
        let mut repo = Repository::new(MemoryStore::new());
        // stored order differs from date order
        repo.upsert::<CompletedInspection>(&completed("Zeta Mill", "1", "2024-01-01"))
            .unwrap();
        repo.upsert::<CompletedInspection>(&completed("Alpha & Co.", "2", "2024-06-01"))
            .unwrap();

        let mut rec = Recording::default();
        let out = ExportLogic::export_workbooks(
            &repo,
            &mut rec,
            HourlyRate::DEFAULT,
            Path::new("/out"),
            None,
        )
        .unwrap();

        let names: Vec<&str> = rec.specs.iter().map(|s| s.file_name.as_str()).collect();
        assert_eq!(names, ["zetamill_1.xlsx", "alphaco_2.xlsx"]);
        assert_eq!(out[0], Path::new("/out/zetamill_1.xlsx"));
    }

    #[test]
    fn single_record_selection() {
        let mut repo = Repository::new(MemoryStore::new());
        repo.upsert::<CompletedInspection>(&completed("A", "1", "")).unwrap();
        let id = repo
            .upsert::<CompletedInspection>(&completed("B", "2", ""))
            .unwrap()
            .id()
            .to_string();

        let mut rec = Recording::default();
        ExportLogic::export_workbooks(
            &repo,
            &mut rec,
            HourlyRate::DEFAULT,
            Path::new("."),
            Some(&id),
        )
        .unwrap();
        assert_eq!(rec.specs.len(), 1);
        assert_eq!(rec.specs[0].file_name, "b_2.xlsx");

        let mut rec = Recording::default();
        let out = ExportLogic::export_workbooks(
            &repo,
            &mut rec,
            HourlyRate::DEFAULT,
            Path::new("."),
            Some("comp_missing"),
        )
        .unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn colliding_names_get_distinct_files() {
        let mut repo = Repository::new(MemoryStore::new());
        repo.upsert::<CompletedInspection>(&completed("Depot", "1", "")).unwrap();
        repo.upsert::<CompletedInspection>(&completed("Depot!", "1", "")).unwrap();
        repo.upsert::<CompletedInspection>(&completed("depot", "1", "")).unwrap();

        let mut rec = Recording::default();
        let out = ExportLogic::export_workbooks(
            &repo,
            &mut rec,
            HourlyRate::DEFAULT,
            Path::new("/out"),
            None,
        )
        .unwrap();

        let names: Vec<&str> = rec.specs.iter().map(|s| s.file_name.as_str()).collect();
        assert_eq!(names, ["depot_1.xlsx", "depot_1_2.xlsx", "depot_1_3.xlsx"]);
        assert_eq!(out.len(), 3);
    }

    #[test]
    fn declined_overwrite_skips_only_that_record() {
        let mut repo = Repository::new(MemoryStore::new());
        repo.upsert::<CompletedInspection>(&completed("Mill", "1", "")).unwrap();
        repo.upsert::<CompletedInspection>(&completed("Yard", "2", "")).unwrap();

        let mut writer = Declining {
            refuse: "mill_1.xlsx",
            specs: Vec::new(),
        };
        let out = ExportLogic::export_workbooks(
            &repo,
            &mut writer,
            HourlyRate::DEFAULT,
            Path::new("/out"),
            None,
        )
        .unwrap();

        assert_eq!(out, [PathBuf::from("/out/yard_2.xlsx")]);
        assert_eq!(writer.specs.len(), 1);
    }

    #[test]
    fn project_numbers_with_separators_still_export_every_record() {
        let dir = std::env::temp_dir().join("inspectlog_logic_separator_test");
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();

        let mut repo = Repository::new(MemoryStore::new());
        repo.upsert::<CompletedInspection>(&completed("Mill", "P/42", "")).unwrap();
        repo.upsert::<CompletedInspection>(&completed("Yard", "7", "")).unwrap();

        let mut writer = XlsxWriter::new(true);
        let out = ExportLogic::export_workbooks(
            &repo,
            &mut writer,
            HourlyRate::DEFAULT,
            &dir,
            None,
        )
        .unwrap();

        assert_eq!(out, [dir.join("mill_P_42.xlsx"), dir.join("yard_7.xlsx")]);
        assert!(out.iter().all(|p| p.is_file()));
    }
}
