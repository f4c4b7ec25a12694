use inspectlog::core::calculator::HourlyRate;
use inspectlog::core::repository::{Repository, Upsert};
use inspectlog::models::{
    CompletedInspection, CompletedPatch, DateRange, OngoingInspection, OngoingPatch, ReportNotes,
};
use inspectlog::store::{RecordStore, SqliteStore};

mod common;
use common::setup_test_db;

fn ongoing(site: &str, est: &str) -> OngoingPatch {
    OngoingPatch {
        site_name: Some(site.into()),
        est_completion: Some(est.into()),
        bid_hours: Some(10.0),
        ..OngoingPatch::default()
    }
}

#[test]
fn test_records_survive_reopening() {
    let db_path = setup_test_db("lib_reopen");

    let id = {
        let mut repo = Repository::new(SqliteStore::open(&db_path).unwrap());
        repo.upsert::<OngoingInspection>(&ongoing("Alpha", "2024-05-01"))
            .unwrap();
        let out = repo
            .upsert::<OngoingInspection>(&ongoing("Beta", "2024-04-01"))
            .unwrap();
        out.id().to_string()
    };

    let repo = Repository::new(SqliteStore::open(&db_path).unwrap());
    let stored = repo.list::<OngoingInspection>().unwrap();
    assert_eq!(stored.len(), 2);
    assert_eq!(stored[1].id, id);

    // projection sorts by estimated completion, storage order is untouched
    let rows = repo.project_ongoing().unwrap();
    let sites: Vec<&str> = rows.iter().map(|r| r.record.site_name.as_str()).collect();
    assert_eq!(sites, ["Beta", "Alpha"]);
}

#[test]
fn test_legacy_text_numbers_are_coerced() {
    let db_path = setup_test_db("lib_legacy");
    let mut store = SqliteStore::open(&db_path).unwrap();

    store
        .set(
            "weekly_report_completed_v9",
            r#"[{"id":"comp_1","siteName":"Depot","projectNumber":"9",
                "dateCompleted":"2024-03-05","bidHours":"10","actualHours":"12",
                "bidPrice":"500","discrepancies":"","deficiencies":"","notes":"",
                "reportSent":true,
                "hoursHistory":[{"year":"2023","bid":"10","actual":"12","bidPrice":"500"}]}]"#,
        )
        .unwrap();

    let repo = Repository::new(store);
    let rows = repo.project_completed(HourlyRate::DEFAULT).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].variance.diff_percent, 20.0);
    assert_eq!(rows[0].price.gain_loss, 200.0);
    assert_eq!(rows[0].history[0].entry.year, 2023);
}

#[test]
fn test_corrupt_collection_reads_as_empty() {
    let db_path = setup_test_db("lib_corrupt");
    let mut store = SqliteStore::open(&db_path).unwrap();
    store.set("weekly_report_ongoing_v9", "{not json").unwrap();

    let mut repo = Repository::new(store);
    assert!(repo.list::<OngoingInspection>().unwrap().is_empty());

    // the next write replaces the corrupt value
    let out = repo
        .upsert::<OngoingInspection>(&ongoing("Fresh", ""))
        .unwrap();
    assert!(matches!(out, Upsert::Created(_)));
    assert_eq!(repo.list::<OngoingInspection>().unwrap().len(), 1);
}

#[test]
fn test_promote_then_upsert() {
    let db_path = setup_test_db("lib_promote");
    let mut repo = Repository::new(SqliteStore::open(&db_path).unwrap());

    let id = repo
        .upsert::<OngoingInspection>(&ongoing("Mill", "2024-05-01"))
        .unwrap()
        .id()
        .to_string();

    let draft = repo.promote(&id).unwrap().unwrap();
    assert!(repo.list::<OngoingInspection>().unwrap().is_empty());
    assert!(repo.list::<CompletedInspection>().unwrap().is_empty());

    let final_figures = CompletedPatch {
        actual_hours: Some(9.0),
        bid_price: Some(300.0),
        ..CompletedPatch::default()
    };
    let out = repo
        .upsert::<CompletedInspection>(&draft.overlay(final_figures))
        .unwrap();

    let saved = repo.find::<CompletedInspection>(out.id()).unwrap().unwrap();
    assert!(saved.id.starts_with("comp_"));
    assert_eq!(saved.site_name, "Mill");
    assert_eq!(saved.bid_hours, 10.0);
    assert_eq!(saved.actual_hours, 9.0);
    assert!(saved.hours_history.is_empty());
}

#[test]
fn test_clear_all_keeps_range_only() {
    let db_path = setup_test_db("lib_clear");
    let mut repo = Repository::new(SqliteStore::open(&db_path).unwrap());

    repo.upsert::<OngoingInspection>(&ongoing("A", "")).unwrap();
    repo.upsert::<CompletedInspection>(&CompletedPatch::default())
        .unwrap();
    repo.save_notes(&ReportNotes {
        trends_noticed: "t".into(),
        ..ReportNotes::default()
    })
    .unwrap();
    let range = DateRange::new("2024-03-04", "2024-03-09");
    repo.save_date_range(&range).unwrap();

    repo.clear_all().unwrap();

    assert!(repo.list::<OngoingInspection>().unwrap().is_empty());
    assert!(repo.list::<CompletedInspection>().unwrap().is_empty());
    assert!(repo.load_notes().unwrap().is_empty());
    assert_eq!(repo.load_date_range().unwrap(), range);
}
