//! In-memory storage of the monthly hours table.
//!
//! The store is an owned value; callers hold it and pass it to the
//! calculator. Nothing is persisted between sessions.

mod record_store;

pub use record_store::{DEFAULT_BULK_FILL_LIMIT, RecordStore, RecordUpdate, SortDirection};
