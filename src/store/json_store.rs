//! Flat-file backend: `<data_dir>/<user>/<YYYY-MM-DD>.json`, one document
//! per day, plus an `audit.jsonl` trail.
//!
//! Writes go to a temporary file that is renamed over the day document, so
//! readers never observe a half-written day. Writers hold an exclusive lock
//! on the user's `.lock` file: `modify` for the whole read-edit-write, `audit`
//! while it picks the next id and appends.

use crate::errors::{AppError, AppResult};
use crate::models::DailyLog;
use crate::models::audit::AuditRecord;
use crate::store::{DayEdit, LogStore, StorageKind};
use chrono::{NaiveDate, Utc};
use fs4::fs_std::FileExt;
use std::fs::{self, File, OpenOptions};
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

const AUDIT_FILE: &str = "audit.jsonl";
const LOCK_FILE: &str = ".lock";

pub struct JsonFileStore {
    root: PathBuf,
}

impl JsonFileStore {
    pub fn open(data_dir: &Path, user: &str) -> AppResult<Self> {
        validate_user_segment(user)?;

        let root = data_dir.join(user);
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn day_path(&self, date: NaiveDate) -> PathBuf {
        self.root.join(format!("{}.json", date.format("%Y-%m-%d")))
    }

    fn load(&self, date: NaiveDate) -> AppResult<DailyLog> {
        let path = self.day_path(date);

        let content = match fs::read_to_string(&path) {
            Ok(c) => c,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(DailyLog::empty(date)),
            Err(e) => return Err(e.into()),
        };

        let mut log: DailyLog = serde_json::from_str(&content)?;
        if log.date != date {
            tracing::warn!(
                file = %path.display(),
                stored = %log.date,
                "day document carries a different date; trusting the file name"
            );
            log.date = date;
        }
        Ok(log)
    }

    fn store(&self, log: &DailyLog) -> AppResult<()> {
        let path = self.day_path(log.date);

        if log.is_empty() {
            match fs::remove_file(&path) {
                Ok(()) => {}
                Err(e) if e.kind() == io::ErrorKind::NotFound => {}
                Err(e) => return Err(e.into()),
            }
            return Ok(());
        }

        let tmp = self
            .root
            .join(format!(".{}.json.tmp", log.date.format("%Y-%m-%d")));
        fs::write(&tmp, serde_json::to_string_pretty(log)?)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }

    /// Writer lock shared by every day of the user. The file is never removed.
    fn lock(&self) -> AppResult<File> {
        let file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(self.root.join(LOCK_FILE))?;
        FileExt::lock_exclusive(&file)?;
        Ok(file)
    }

    fn append_audit(&mut self, operation: &str, target: &str, message: &str) -> AppResult<()> {
        let next_id = self.audit_trail()?.last().map(|r| r.id + 1).unwrap_or(1);

        let record = AuditRecord {
            id: next_id,
            date: Utc::now().to_rfc3339(),
            operation: operation.to_string(),
            target: target.to_string(),
            message: message.to_string(),
        };

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(self.root.join(AUDIT_FILE))?;
        writeln!(file, "{}", serde_json::to_string(&record)?)?;
        Ok(())
    }
}

impl LogStore for JsonFileStore {
    fn kind(&self) -> StorageKind {
        StorageKind::Json
    }

    fn read(&mut self, date: NaiveDate) -> AppResult<DailyLog> {
        self.load(date)
    }

    fn write(&mut self, log: &DailyLog) -> AppResult<()> {
        let lock = self.lock()?;
        let result = self.store(log);
        FileExt::unlock(&lock)?;
        result
    }

    fn modify(&mut self, date: NaiveDate, edit: &mut DayEdit<'_>) -> AppResult<DailyLog> {
        let lock = self.lock()?;

        let result = self
            .load(date)
            .and_then(|current| edit(current))
            .and_then(|updated| self.store(&updated).map(|_| updated));

        FileExt::unlock(&lock)?;
        result
    }

    fn available_dates(&mut self) -> AppResult<Vec<NaiveDate>> {
        let mut dates = Vec::new();

        for entry in fs::read_dir(&self.root)? {
            let name = entry?.file_name();
            let name = name.to_string_lossy();

            if let Some(stem) = name.strip_suffix(".json")
                && let Ok(date) = NaiveDate::parse_from_str(stem, "%Y-%m-%d")
            {
                dates.push(date);
            }
        }

        dates.sort();
        Ok(dates)
    }

    fn audit(&mut self, operation: &str, target: &str, message: &str) -> AppResult<()> {
        let lock = self.lock()?;
        let result = self.append_audit(operation, target, message);
        FileExt::unlock(&lock)?;
        result
    }

    fn audit_trail(&mut self) -> AppResult<Vec<AuditRecord>> {
        let file = match File::open(self.root.join(AUDIT_FILE)) {
            Ok(f) => f,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut out = Vec::new();
        for line in BufReader::new(file).lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            out.push(serde_json::from_str(&line)?);
        }
        Ok(out)
    }
}

/// The user name becomes a directory name; keep it to one plain segment.
fn validate_user_segment(user: &str) -> AppResult<()> {
    let ok = !user.is_empty()
        && !user.starts_with('.')
        && user
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '@'));

    if ok {
        Ok(())
    } else {
        Err(AppError::Config(format!(
            "user '{}' cannot be used as a storage directory name",
            user
        )))
    }
}
