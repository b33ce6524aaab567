#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};
use std::path::PathBuf;
use tempfile::TempDir;

/// Isolated HOME plus storage locations for one test.
pub struct Sandbox {
    pub dir: TempDir,
}

impl Sandbox {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("temp dir"),
        }
    }

    pub fn db_path(&self) -> PathBuf {
        self.dir.path().join("timeportal.sqlite")
    }

    pub fn data_dir(&self) -> PathBuf {
        self.dir.path().join("data")
    }

    /// Command pinned to UTC at `now` (RFC 3339) on the given backend.
    pub fn tp(&self, storage: &str, now: &str) -> Command {
        let db = self.db_path().to_string_lossy().to_string();
        let data = self.data_dir().to_string_lossy().to_string();

        let mut cmd = cargo_bin_cmd!("timeportal");
        cmd.env("HOME", self.dir.path())
            .env("APPDATA", self.dir.path())
            .env_remove("TIMEPORTAL_LOG")
            .args([
                "--storage",
                storage,
                "--db",
                db.as_str(),
                "--data-dir",
                data.as_str(),
                "--tz",
                "UTC",
                "--now",
                now,
            ]);
        cmd
    }
}

pub fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

/// UTC instant on `date` at `hh:mm:ss`.
pub fn at(date: NaiveDate, h: u32, m: u32, s: u32) -> DateTime<Utc> {
    let t = NaiveTime::from_hms_opt(h, m, s).unwrap();
    Utc.from_utc_datetime(&date.and_time(t))
}
