use std::fs;
use tempfile::{TempDir, tempdir};
use timeportal::db::SqliteStore;
use timeportal::errors::AppError;
use timeportal::models::{DailyLog, TimeEntry};
use timeportal::store::{JsonFileStore, LogStore, StorageKind};

mod common;
use common::{at, d};

fn sqlite(dir: &TempDir, user: &str) -> Box<dyn LogStore> {
    Box::new(SqliteStore::open(&dir.path().join("tp.sqlite"), user).unwrap())
}

fn json(dir: &TempDir, user: &str) -> Box<dyn LogStore> {
    Box::new(JsonFileStore::open(&dir.path().join("data"), user).unwrap())
}

fn both(dir: &TempDir) -> Vec<Box<dyn LogStore>> {
    vec![sqlite(dir, "alice"), json(dir, "alice")]
}

fn sample(date: chrono::NaiveDate) -> DailyLog {
    DailyLog::with_entries(
        date,
        vec![
            TimeEntry::closed(at(date, 9, 0, 0), at(date, 12, 0, 0)),
            TimeEntry::open(at(date, 13, 0, 0)),
        ],
    )
}

#[test]
fn missing_day_reads_as_empty() {
    let dir = tempdir().unwrap();
    for mut store in both(&dir) {
        let log = store.read(d(2025, 7, 16)).unwrap();
        assert!(log.is_empty(), "{}", store.kind());
        assert_eq!(log.date, d(2025, 7, 16));
    }
}

#[test]
fn written_entries_read_back_in_order() {
    let dir = tempdir().unwrap();
    for mut store in both(&dir) {
        let log = sample(d(2025, 7, 16));
        store.write(&log).unwrap();

        let back = store.read(log.date).unwrap();
        assert_eq!(back.entries, log.entries, "{}", store.kind());
    }
}

#[test]
fn failed_modify_leaves_the_day_untouched() {
    let dir = tempdir().unwrap();
    for mut store in both(&dir) {
        let log = sample(d(2025, 7, 16));
        store.write(&log).unwrap();

        let result = store.modify(log.date, &mut |mut day| {
            day.entries.clear();
            Err(AppError::validation("nope"))
        });

        assert!(matches!(result, Err(AppError::Validation(_))));
        assert_eq!(store.read(log.date).unwrap().entries, log.entries, "{}", store.kind());
    }
}

#[test]
fn modify_persists_the_edited_day() {
    let dir = tempdir().unwrap();
    for mut store in both(&dir) {
        let date = d(2025, 7, 16);
        let extra = TimeEntry::closed(at(date, 14, 0, 0), at(date, 15, 0, 0));

        let updated = store
            .modify(date, &mut |mut day| {
                day.entries.push(extra);
                Ok(day)
            })
            .unwrap();

        assert_eq!(updated.entries, vec![extra]);
        assert_eq!(store.read(date).unwrap().entries, vec![extra], "{}", store.kind());
    }
}

#[test]
fn empty_log_removes_the_day() {
    let dir = tempdir().unwrap();
    for mut store in both(&dir) {
        store.write(&sample(d(2025, 7, 16))).unwrap();
        store.write(&sample(d(2025, 7, 14))).unwrap();
        store.write(&sample(d(2025, 8, 1))).unwrap();

        assert_eq!(
            store.available_dates().unwrap(),
            vec![d(2025, 7, 14), d(2025, 7, 16), d(2025, 8, 1)],
            "{}",
            store.kind()
        );

        store.write(&DailyLog::empty(d(2025, 7, 16))).unwrap();

        assert_eq!(
            store.available_dates().unwrap(),
            vec![d(2025, 7, 14), d(2025, 8, 1)],
            "{}",
            store.kind()
        );
        assert!(store.read(d(2025, 7, 16)).unwrap().is_empty());
    }
}

#[test]
fn audit_trail_keeps_insertion_order() {
    let dir = tempdir().unwrap();
    for mut store in both(&dir) {
        store.audit("add", "2025-07-16", "first").unwrap();
        store.audit("del", "2025-07-16", "second").unwrap();

        // the SQLite trail also holds migration bookkeeping
        let trail: Vec<_> = store
            .audit_trail()
            .unwrap()
            .into_iter()
            .filter(|r| r.operation != "migration_applied")
            .collect();

        assert_eq!(trail.len(), 2, "{}", store.kind());
        assert_eq!(trail[0].message, "first");
        assert_eq!(trail[1].operation, "del");
        assert!(trail[0].id < trail[1].id);
    }
}

#[test]
fn users_do_not_see_each_other() {
    let dir = tempdir().unwrap();
    for kind in [StorageKind::Sqlite, StorageKind::Json] {
        let open = |user| match kind {
            StorageKind::Sqlite => sqlite(&dir, user),
            StorageKind::Json => json(&dir, user),
        };

        let mut alice = open("alice");
        alice.write(&sample(d(2025, 7, 16))).unwrap();

        let mut bob = open("bob");
        assert!(bob.read(d(2025, 7, 16)).unwrap().is_empty(), "{}", kind);
        assert!(bob.available_dates().unwrap().is_empty());
    }
}

#[test]
fn sqlite_migrations_run_once() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("tp.sqlite");

    let mut store = SqliteStore::open(&path, "alice").unwrap();
    let pending = timeportal::db::migrate::pending_migrations(&store.pool().conn).unwrap();
    assert!(pending.is_empty());
    drop(store);

    let mut again = SqliteStore::open(&path, "alice").unwrap();
    let applied = timeportal::db::migrate::run_pending_migrations(&again.pool().conn).unwrap();
    assert_eq!(applied, 0);
}

#[test]
fn json_store_reads_documents_of_the_web_format() {
    let dir = tempdir().unwrap();
    let mut store = JsonFileStore::open(dir.path(), "alice").unwrap();

    fs::write(
        store.day_path(d(2025, 7, 16)),
        r#"{
  "date": "2025-07-16",
  "logs": [
    { "checkIn": "2025-07-16T09:00:00Z", "checkOut": "2025-07-16T09:10:00Z" },
    { "checkIn": "2025-07-16T09:20:00Z", "checkOut": null }
  ],
  "totalMinutes": 16,
  "sessions": 2,
  "missPunch": false
}"#,
    )
    .unwrap();

    let log = store.read(d(2025, 7, 16)).unwrap();

    assert_eq!(log.entries.len(), 2);
    assert!(log.entries[1].is_open());
    assert_eq!(log.entries[0].check_out, Some(at(d(2025, 7, 16), 9, 10, 0)));
}

#[test]
fn json_store_writes_camel_case_documents() {
    let dir = tempdir().unwrap();
    let mut store = JsonFileStore::open(dir.path(), "alice").unwrap();

    store.write(&sample(d(2025, 7, 16))).unwrap();

    let raw = fs::read_to_string(store.root().join("2025-07-16.json")).unwrap();
    assert!(raw.contains("\"logs\""));
    assert!(raw.contains("\"checkIn\""));
    assert!(raw.contains("\"missPunch\""));
}

#[test]
fn json_store_rejects_path_like_users() {
    let dir = tempdir().unwrap();
    for user in ["", "../bob", "a/b", ".hidden"] {
        assert!(
            matches!(JsonFileStore::open(dir.path(), user), Err(AppError::Config(_))),
            "{user:?}"
        );
    }
}

#[test]
fn json_audit_ids_stay_unique_across_handles() {
    let dir = tempdir().unwrap();
    let mut first = JsonFileStore::open(dir.path(), "alice").unwrap();
    let mut second = JsonFileStore::open(dir.path(), "alice").unwrap();

    first.audit("add", "2025-07-16", "a").unwrap();
    second.audit("edit", "2025-07-16", "b").unwrap();
    first.audit("del", "2025-07-16", "c").unwrap();

    let ids: Vec<i64> = second.audit_trail().unwrap().iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[test]
fn json_store_keeps_a_single_lock_file() {
    let dir = tempdir().unwrap();
    let mut store = JsonFileStore::open(dir.path(), "alice").unwrap();

    for day in [d(2025, 7, 14), d(2025, 7, 15), d(2025, 7, 16)] {
        store
            .modify(day, &mut |mut log| {
                log.entries.push(TimeEntry::closed(at(day, 9, 0, 0), at(day, 10, 0, 0)));
                Ok(log)
            })
            .unwrap();
    }

    let locks: Vec<String> = fs::read_dir(store.root())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
        .filter(|name| name.ends_with(".lock"))
        .collect();
    assert_eq!(locks, vec![".lock".to_string()]);
}
