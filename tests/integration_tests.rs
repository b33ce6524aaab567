use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::Sandbox;

const BACKENDS: [&str; 2] = ["sqlite", "json"];
const MORNING: &str = "2025-07-16T09:00:00Z";

#[test]
fn test_init_creates_storage() {
    for storage in BACKENDS {
        let sb = Sandbox::new();

        sb.tp(storage, MORNING)
            .args(["--test", "init"])
            .assert()
            .success()
            .stdout(contains("initialization completed"));

        match storage {
            "sqlite" => assert!(sb.db_path().exists()),
            _ => assert!(sb.data_dir().join("local").is_dir()),
        }
    }
}

#[test]
fn test_punch_and_add_total_26_minutes() {
    for storage in BACKENDS {
        let sb = Sandbox::new();

        sb.tp(storage, "2025-07-16T09:00:00Z")
            .arg("punch")
            .assert()
            .success()
            .stdout(contains("Checked in at 09:00"));

        sb.tp(storage, "2025-07-16T09:10:00Z")
            .arg("punch")
            .assert()
            .success()
            .stdout(contains("Checked out at 09:10"));

        sb.tp(storage, "2025-07-16T09:20:00Z")
            .arg("punch")
            .assert()
            .success()
            .stdout(contains("Checked in at 09:20"));

        sb.tp(storage, "2025-07-16T09:26:00Z")
            .args(["show", "--json"])
            .assert()
            .success()
            .stdout(contains("\"totalMinutes\": 26"))
            .stdout(contains("\"sessions\": 2"))
            .stdout(contains("\"status\": \"Working\""));

        sb.tp(storage, "2025-07-16T09:26:00Z")
            .arg("show")
            .assert()
            .success()
            .stdout(contains("0h 26m"))
            .stdout(contains("Check-out"));
    }
}

#[test]
fn test_open_entry_on_past_day_is_miss_punch() {
    for storage in BACKENDS {
        let sb = Sandbox::new();

        sb.tp(storage, MORNING)
            .args(["add", "2025-07-15", "--in", "08:00", "--out", "12:00"])
            .assert()
            .success();

        sb.tp(storage, MORNING)
            .args(["add", "2025-07-15", "--in", "13:00"])
            .assert()
            .success();

        sb.tp(storage, MORNING)
            .args(["show", "2025-07-15"])
            .assert()
            .success()
            .stdout(contains("Miss-Punch"))
            .stdout(contains("session #2 has no check-out"));

        sb.tp(storage, MORNING)
            .args(["show", "yesterday", "--json"])
            .assert()
            .success()
            .stdout(contains("\"missPunch\": true"))
            .stdout(contains("\"kind\": \"unresolved\""))
            .stdout(contains("\"status\": \"ViewingPast\""));
    }
}

#[test]
fn test_invalid_entries_are_rejected_and_not_stored() {
    for storage in BACKENDS {
        let sb = Sandbox::new();

        sb.tp(storage, MORNING)
            .args(["add", "2025-07-10", "--in", "10:00", "--out", "09:00"])
            .assert()
            .failure()
            .stderr(contains("Validation error"));

        sb.tp(storage, MORNING)
            .args(["add", "2025-07-10", "--out", "09:00"])
            .assert()
            .failure()
            .stderr(contains("check-in time is required"));

        sb.tp(storage, MORNING)
            .args(["add", "2025-07-10", "--in", "25:00"])
            .assert()
            .failure()
            .stderr(contains("Invalid time format"));

        sb.tp(storage, MORNING)
            .args(["show", "2025-07-10"])
            .assert()
            .success()
            .stdout(contains("No sessions recorded"));
    }
}

#[test]
fn test_edit_and_delete_by_index() {
    for storage in BACKENDS {
        let sb = Sandbox::new();

        sb.tp(storage, MORNING)
            .args(["add", "2025-07-14", "--in", "09:00", "--out", "12:00"])
            .assert()
            .success();
        sb.tp(storage, MORNING)
            .args(["add", "2025-07-14", "--in", "13:00", "--out", "17:00"])
            .assert()
            .success();

        // only the check-out changes
        sb.tp(storage, MORNING)
            .args(["edit", "2025-07-14", "--index", "2", "--out", "18:30"])
            .assert()
            .success()
            .stdout(contains("Session #2 of 2025-07-14 updated"))
            .stdout(contains("8h 30m"));

        sb.tp(storage, MORNING)
            .args(["edit", "2025-07-14", "--index", "5", "--out", "18:30"])
            .assert()
            .failure()
            .stderr(contains("Entry #5 not found"));

        sb.tp(storage, MORNING)
            .args(["edit", "2025-07-14", "--index", "0", "--out", "18:30"])
            .assert()
            .failure();

        sb.tp(storage, MORNING)
            .args(["del", "2025-07-14", "--index", "1", "--yes"])
            .assert()
            .success()
            .stdout(contains("1 left"));

        sb.tp(storage, MORNING)
            .args(["show", "2025-07-14", "--json"])
            .assert()
            .success()
            .stdout(contains("\"totalMinutes\": 330"))
            .stdout(contains("\"sessions\": 1"));
    }
}

#[test]
fn test_delete_without_confirmation_is_cancelled() {
    let sb = Sandbox::new();

    sb.tp("sqlite", MORNING)
        .args(["add", "2025-07-14", "--in", "09:00", "--out", "12:00"])
        .assert()
        .success();

    sb.tp("sqlite", MORNING)
        .args(["del", "2025-07-14", "--all"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("Operation cancelled"));

    sb.tp("sqlite", MORNING)
        .args(["del", "2025-07-14", "--all"])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(contains("All 1 sessions of 2025-07-14 have been deleted"));

    sb.tp("sqlite", MORNING)
        .args(["list", "--period", "2025-07"])
        .assert()
        .success()
        .stdout(contains("No sessions recorded in this period"));
}

#[test]
fn test_list_formats() {
    for storage in BACKENDS {
        let sb = Sandbox::new();

        for date in ["2025-07-01", "2025-07-15", "2025-08-04"] {
            sb.tp(storage, MORNING)
                .args(["add", date, "--in", "09:00", "--out", "17:00"])
                .assert()
                .success();
        }

        sb.tp(storage, MORNING)
            .args(["list", "--period", "2025-07"])
            .assert()
            .success()
            .stdout(contains("2025-07-01"))
            .stdout(contains("2025-07-15"))
            .stdout(contains("2025-08-04").not())
            .stdout(contains("16h 00m"));

        sb.tp(storage, MORNING)
            .args(["list", "--period", "2025-07:2025-08", "--format", "csv"])
            .assert()
            .success()
            .stdout(contains("date,sessions,total_minutes,total,miss_punch,status"))
            .stdout(contains("2025-08-04,1,480,8h 00m,false,ViewingPast"));

        sb.tp(storage, MORNING)
            .args(["list", "--period", "2025-08", "--format", "json"])
            .assert()
            .success()
            .stdout(contains("\"date\": \"2025-08-04\""))
            .stdout(contains("2025-07-01").not());

        sb.tp(storage, MORNING)
            .args(["list", "--period", "2025-13"])
            .assert()
            .failure()
            .stderr(contains("Invalid period"));
    }
}

#[test]
fn test_report_averages() {
    let sb = Sandbox::new();

    sb.tp("json", MORNING)
        .args(["add", "2025-07-14", "--in", "09:00", "--out", "17:00"])
        .assert()
        .success();
    sb.tp("json", MORNING)
        .args(["add", "2025-07-15", "--in", "08:00", "--out", "16:00"])
        .assert()
        .success();

    sb.tp("json", MORNING)
        .args(["report", "--date", "2025-07-15"])
        .assert()
        .success()
        .stdout(contains("Week 07-14..07-20"))
        .stdout(contains("8.00h over 2 worked day(s)"))
        .stdout(contains("Month 2025-07"));

    // an open session on a past day is not averaged
    sb.tp("json", MORNING)
        .args(["add", "2025-07-11", "--in", "09:00"])
        .assert()
        .success();

    sb.tp("json", MORNING)
        .args(["report", "--date", "2025-07-15"])
        .assert()
        .success()
        .stdout(contains("8.00h over 2 worked day(s)"))
        .stdout(contains("1 miss-punch day(s) left out"));

    sb.tp("json", MORNING)
        .args(["report", "--date", "2025-07-03"])
        .assert()
        .success()
        .stdout(contains("Monthly average is shown from day 8"));
}

#[test]
fn test_open_session_stays_last() {
    for storage in BACKENDS {
        let sb = Sandbox::new();

        sb.tp(storage, MORNING)
            .args(["add", "today", "--in", "07:00"])
            .assert()
            .success();

        sb.tp(storage, MORNING)
            .args(["add", "today", "--in", "07:10", "--out", "07:20"])
            .assert()
            .failure()
            .stderr(contains("entry #1 is still open"));

        // the open session can still be punched out
        sb.tp(storage, MORNING)
            .arg("punch")
            .assert()
            .success()
            .stdout(contains("Checked out at 09:00"))
            .stdout(contains("2h 00m"));
    }
}

#[test]
fn test_edit_cannot_reopen_an_earlier_session() {
    let sb = Sandbox::new();

    for (start, end) in [("07:00", "08:00"), ("08:30", "09:00")] {
        sb.tp("sqlite", MORNING)
            .args(["add", "today", "--in", start, "--out", end])
            .assert()
            .success();
    }

    sb.tp("sqlite", MORNING)
        .args(["edit", "today", "--index", "1", "--open"])
        .assert()
        .failure()
        .stderr(contains("only the last session of a day may be open"));

    sb.tp("sqlite", MORNING)
        .args(["edit", "today", "--index", "2", "--open"])
        .assert()
        .success()
        .stdout(contains("Check-out"));

    sb.tp("sqlite", "2025-07-16T09:15:00Z")
        .arg("punch")
        .assert()
        .success()
        .stdout(contains("Checked out at 09:15"))
        .stdout(contains("1h 45m"));
}

#[test]
fn test_audit_log_lists_mutations() {
    for storage in BACKENDS {
        let sb = Sandbox::new();

        sb.tp(storage, MORNING).arg("punch").assert().success();
        sb.tp(storage, MORNING)
            .args(["add", "2025-07-14", "--in", "09:00", "--out", "12:00"])
            .assert()
            .success();

        sb.tp(storage, MORNING)
            .args(["log", "--print"])
            .assert()
            .success()
            .stdout(contains("punch"))
            .stdout(contains("(2025-07-14)"));
    }
}

#[test]
fn test_db_maintenance_requires_sqlite() {
    let sb = Sandbox::new();

    sb.tp("json", MORNING)
        .args(["db", "--check"])
        .assert()
        .failure()
        .stderr(contains("SQLite backend"));

    sb.tp("sqlite", MORNING)
        .args(["--test", "init"])
        .assert()
        .success();

    sb.tp("sqlite", MORNING)
        .args(["db", "--check", "--vacuum", "--info"])
        .assert()
        .success()
        .stdout(contains("Integrity check passed"))
        .stdout(contains("Vacuum completed"));
}

#[test]
fn test_invalid_timezone_is_reported() {
    let sb = Sandbox::new();

    sb.tp("sqlite", MORNING)
        .args(["--tz", "Mars/Olympus", "show"])
        .assert()
        .failure()
        .stderr(contains("Invalid timezone"));
}

#[test]
fn test_fixed_offset_moves_today() {
    let sb = Sandbox::new();

    // 23:30 UTC is already the next day at +02:00
    sb.tp("sqlite", "2025-07-16T23:30:00Z")
        .args(["--tz", "+02:00", "punch"])
        .assert()
        .success()
        .stdout(contains("Checked in at 01:30"))
        .stdout(contains("2025-07-17"));
}
