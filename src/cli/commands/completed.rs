use crate::cli::commands::{open_repo, report_upsert};
use crate::cli::parser::{Commands, CompletedAction, CompletedFields};
use crate::config::Config;
use crate::core::numeric::to_number;
use crate::errors::AppResult;
use crate::models::{CompletedInspection, CompletedPatch, HistoryDraft, collect_history};
use crate::ui::messages::{confirm, info, success, warning};

const LABEL: &str = "Completed inspection";

/// Form fields → patch for `id` (empty id creates).
///
/// History rows are only touched when some are given or `--clear-history`
/// is set; incomplete rows are dropped.
pub(crate) fn completed_patch(id: &str, f: &CompletedFields) -> AppResult<CompletedPatch> {
    let hours_history = if f.clear_history {
        Some(Vec::new())
    } else if f.history.is_empty() {
        None
    } else {
        let drafts = f
            .history
            .iter()
            .map(|raw| HistoryDraft::parse_cli(raw))
            .collect::<AppResult<Vec<_>>>()?;
        Some(collect_history(&drafts))
    };

    Ok(CompletedPatch {
        id: id.to_string(),
        site_name: f.site_name.clone(),
        project_number: f.project_number.clone(),
        date_completed: f.date_completed.clone(),
        bid_hours: f.bid_hours.as_deref().map(to_number),
        actual_hours: f.actual_hours.as_deref().map(to_number),
        bid_price: f.bid_price.as_deref().map(to_number),
        discrepancies: f.discrepancies.clone(),
        deficiencies: f.deficiencies.clone(),
        notes: f.notes.clone(),
        report_sent: f.report_sent,
        hours_history,
    })
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Completed { action } = cmd else {
        return Ok(());
    };
    let mut repo = open_repo(cfg)?;

    match action {
        CompletedAction::Add(fields) => {
            let outcome = repo.upsert::<CompletedInspection>(&completed_patch("", fields)?)?;
            report_upsert(LABEL, &outcome);
        }

        CompletedAction::Edit { id, fields } => {
            let outcome = repo.upsert::<CompletedInspection>(&completed_patch(id, fields)?)?;
            report_upsert(LABEL, &outcome);
        }

        CompletedAction::Del { id, yes } => {
            let Some(record) = repo.find::<CompletedInspection>(id)? else {
                warning(format!("{LABEL} '{id}' not found; nothing changed."));
                return Ok(());
            };

            if !*yes
                && !confirm(format!(
                    "Are you sure you want to delete '{}' ({id})?",
                    record.site_name
                ))
            {
                info("Operation cancelled.");
                return Ok(());
            }

            if repo.remove::<CompletedInspection>(id)? {
                success(format!("{LABEL} {id} deleted."));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::HistoryYearEntry;

    #[test]
    fn blank_numbers_coerce_and_partial_history_is_dropped() {
        let fields = CompletedFields {
            bid_hours: Some("".into()),
            actual_hours: Some("12.5".into()),
            history: vec!["2023:10:12:500".into(), "2022::9:300".into()],
            ..CompletedFields::default()
        };

        let patch = completed_patch("", &fields).unwrap();
        assert_eq!(patch.bid_hours, Some(0.0));
        assert_eq!(patch.actual_hours, Some(12.5));
        assert_eq!(patch.bid_price, None);
        assert_eq!(
            patch.hours_history,
            Some(vec![HistoryYearEntry {
                year: 2023,
                bid: 10.0,
                actual: 12.0,
                bid_price: 500.0,
            }])
        );
    }

    #[test]
    fn malformed_history_row_is_rejected() {
        let fields = CompletedFields {
            history: vec!["2023-10-12".into()],
            ..CompletedFields::default()
        };
        assert!(completed_patch("comp_1", &fields).is_err());
    }

    #[test]
    fn history_untouched_unless_given() {
        let patch = completed_patch("comp_1", &CompletedFields::default()).unwrap();
        assert_eq!(patch.hours_history, None);

        let cleared = CompletedFields {
            clear_history: true,
            ..CompletedFields::default()
        };
        assert_eq!(
            completed_patch("comp_1", &cleared).unwrap().hours_history,
            Some(Vec::new())
        );
    }
}
