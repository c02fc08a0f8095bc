#![warn(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

mod json_file;

// Re-export the storage trait so `JsonFileStore` can be used without
// depending on acctbot_core directly.
pub use acctbot_core::{RecentRecords, RecordStore};

pub use json_file::JsonFileStore;
