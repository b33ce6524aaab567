pub mod audit;
pub mod daily_log;
pub mod day_summary;
pub mod day_total;
pub mod status;
pub mod time_entry;

pub use daily_log::DailyLog;
pub use day_total::{DayTotal, DayTotals};
pub use status::Status;
pub use time_entry::{EntryDraft, EntryPatch, TimeEntry};
