pub mod average;
pub mod status;
pub mod total;

pub use average::{AverageHours, average_hours};
pub use status::current_status;
pub use total::compute_total;
