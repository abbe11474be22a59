pub mod manager;
pub mod models;
pub mod store;

pub use manager::{connect, DatabaseError};
pub use models::{Activity, JournalEntry};
pub use store::{ActivityFilter, DataStore, JournalFilter, PgStore};
