#![deny(
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

pub mod classifier;
pub mod credentials;
mod error;
mod record;
pub mod service;
pub mod store;

pub use classifier::{Classified, classify};
pub use credentials::{CredentialGenerator, GeneratorConfig};
pub use error::ProcessError;
pub use record::{MISSING_FIELD, Record};
pub use service::AccountService;
pub use store::{MemoryRecordStore, RecentRecords, RecordStore};
