//! In-memory transformations of a `DailyLog`.
//!
//! Every operation takes the log by value and hands back a new one only on
//! success, so a failed mutation leaves the caller's copy untouched. Totals
//! are recomputed at the end of every successful operation. Nothing here
//! touches storage or reads the system clock.

use crate::core::calculator::{compute_total, current_status};
use crate::core::context::SessionContext;
use crate::errors::{AppError, AppResult};
use crate::models::{DailyLog, EntryDraft, EntryPatch, Status, TimeEntry};

pub struct DailyLogAggregator;

impl DailyLogAggregator {
    /// Recompute the derived fields of `log` against `ctx.now`.
    pub fn refresh(mut log: DailyLog, ctx: &SessionContext) -> DailyLog {
        let totals = compute_total(&log.entries, log.date, ctx.now, ctx.zone);
        log.apply_totals(totals);
        log
    }

    pub fn status(log: &DailyLog, ctx: &SessionContext) -> Status {
        current_status(log, ctx.is_today(log.date))
    }

    pub fn add_entry(
        mut log: DailyLog,
        draft: EntryDraft,
        ctx: &SessionContext,
    ) -> AppResult<DailyLog> {
        log.entries.push(draft.validate()?);
        Self::ensure_open_is_last(&log)?;
        Ok(Self::refresh(log, ctx))
    }

    /// Replace the entry at 0-based `index`.
    pub fn update_entry(
        mut log: DailyLog,
        index: usize,
        draft: EntryDraft,
        ctx: &SessionContext,
    ) -> AppResult<DailyLog> {
        if index >= log.entries.len() {
            return Err(AppError::NotFound(index));
        }

        log.entries[index] = draft.validate()?;
        Self::ensure_open_is_last(&log)?;
        Ok(Self::refresh(log, ctx))
    }

    /// Merge `patch` into the entry at 0-based `index`, then replace it.
    pub fn patch_entry(
        log: DailyLog,
        index: usize,
        patch: EntryPatch,
        ctx: &SessionContext,
    ) -> AppResult<DailyLog> {
        let current = log
            .entries
            .get(index)
            .copied()
            .ok_or(AppError::NotFound(index))?;

        Self::update_entry(log, index, patch.merge(current), ctx)
    }

    /// Remove the entry at 0-based `index`. Status follows the new last entry.
    pub fn delete_entry(
        mut log: DailyLog,
        index: usize,
        ctx: &SessionContext,
    ) -> AppResult<DailyLog> {
        if index >= log.entries.len() {
            return Err(AppError::NotFound(index));
        }

        log.entries.remove(index);
        Ok(Self::refresh(log, ctx))
    }

    /// Toggle between Available and Working at `ctx.now`.
    ///
    /// Available appends an open session, Working closes the last one. Only
    /// today's log can be punched.
    pub fn check_in_or_out(
        mut log: DailyLog,
        ctx: &SessionContext,
    ) -> AppResult<(DailyLog, Status)> {
        if !ctx.is_today(log.date) {
            return Err(AppError::NotToday(log.date));
        }

        match current_status(&log, true) {
            Status::Available => {
                log.entries.push(TimeEntry::open(ctx.now));
                Self::ensure_open_is_last(&log)?;
            }
            Status::Working => {
                if let Some(last) = log.entries.last_mut() {
                    // a check-out never lands before its own check-in
                    last.check_out = Some(ctx.now.max(last.check_in));
                }
            }
            Status::ViewingPast => return Err(AppError::NotToday(log.date)),
        }

        let log = Self::refresh(log, ctx);
        let status = current_status(&log, true);
        Ok((log, status))
    }

    /// Only the last session of a day may be open. This also bounds a day
    /// to one open session and keeps the status in step with the punch.
    fn ensure_open_is_last(log: &DailyLog) -> AppResult<()> {
        let last = log.entries.len().saturating_sub(1);

        match log.open_entry_index() {
            Some(i) if i != last => Err(AppError::validation(format!(
                "entry #{} is still open; only the last session of a day may be open",
                i + 1
            ))),
            _ => Ok(()),
        }
    }
}
