pub mod initialize;
pub mod log;
pub mod migrate;
pub mod pool;
pub mod queries;
pub mod sqlite_store;
pub mod stats;

pub use sqlite_store::SqliteStore;
