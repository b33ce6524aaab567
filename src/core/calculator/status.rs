use crate::models::{DailyLog, Status};

/// Status is never stored: it is read off the last entry every time.
pub fn current_status(log: &DailyLog, is_today: bool) -> Status {
    if !is_today {
        return Status::ViewingPast;
    }

    match log.last_entry() {
        Some(last) if last.is_open() => Status::Working,
        _ => Status::Available,
    }
}
