use crate::cli::commands::completed::completed_patch;
use crate::cli::commands::{open_repo, report_upsert};
use crate::cli::parser::{Commands, OngoingAction, OngoingFields};
use crate::config::Config;
use crate::core::numeric::to_number;
use crate::errors::AppResult;
use crate::models::{CompletedInspection, OngoingInspection, OngoingPatch};
use crate::ui::messages::{confirm, info, success, warning};

const LABEL: &str = "Ongoing inspection";

/// Form fields → patch for `id` (empty id creates).
pub(crate) fn ongoing_patch(id: &str, f: &OngoingFields) -> OngoingPatch {
    OngoingPatch {
        id: id.to_string(),
        site_name: f.site_name.clone(),
        project_number: f.project_number.clone(),
        bid_hours: f.bid_hours.as_deref().map(to_number),
        hours_worked: f.hours_worked.as_deref().map(to_number),
        est_completion: f.est_completion.clone(),
        notes: f.notes.clone(),
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Ongoing { action } = cmd else {
        return Ok(());
    };
    let mut repo = open_repo(cfg)?;

    match action {
        OngoingAction::Add(fields) => {
            let outcome = repo.upsert::<OngoingInspection>(&ongoing_patch("", fields))?;
            report_upsert(LABEL, &outcome);
        }

        OngoingAction::Edit { id, fields } => {
            let outcome = repo.upsert::<OngoingInspection>(&ongoing_patch(id, fields))?;
            report_upsert(LABEL, &outcome);
        }

        OngoingAction::Del { id, yes } => {
            let Some(record) = repo.find::<OngoingInspection>(id)? else {
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

            if repo.remove::<OngoingInspection>(id)? {
                success(format!("{LABEL} {id} deleted."));
            }
        }

        OngoingAction::Complete { id, fields, yes } => {
            let Some(record) = repo.find::<OngoingInspection>(id)? else {
                warning(format!("{LABEL} '{id}' not found; nothing changed."));
                return Ok(());
            };

            if !*yes
                && !confirm(format!(
                    "Move '{}' ({id}) to completed inspections?",
                    record.site_name
                ))
            {
                info("Operation cancelled.");
                return Ok(());
            }

            // The ongoing record is gone from here on, even if the
            // completed upsert below fails.
            let Some(draft) = repo.promote(id)? else {
                return Ok(());
            };
            let patch = draft.overlay(completed_patch("", fields)?);
            let outcome = repo.upsert::<CompletedInspection>(&patch)?;
            success(format!(
                "'{}' moved to completed inspections (id {}).",
                record.site_name,
                outcome.id()
            ));
        }
    }

    Ok(())
}
