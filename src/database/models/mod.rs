pub mod activity;
pub mod journal_entry;

pub use activity::Activity;
pub use journal_entry::JournalEntry;
