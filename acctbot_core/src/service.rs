//! Turns an inbound message into a persisted record.

use std::sync::Arc;

use chrono::Local;
use tracing::info;

use crate::{
    CredentialGenerator, MISSING_FIELD, ProcessError, RecentRecords, Record, RecordStore, classify,
    credentials,
};

pub struct AccountService<S = Arc<dyn RecordStore>>
where
    S: RecordStore,
{
    store: S,
    generator: CredentialGenerator,
}

impl<S> AccountService<S>
where
    S: RecordStore,
{
    pub const fn new(store: S, generator: CredentialGenerator) -> Self {
        Self { store, generator }
    }

    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Classify `text`, synthesize credentials for the name found and append
    /// the resulting record.
    pub async fn create_from_text(&self, text: &str) -> Result<Record, ProcessError> {
        let record = self.build_record(text, &mut rand::thread_rng())?;

        self.store
            .append(&record)
            .await
            .map_err(ProcessError::Store)?;

        info!("Created account {} for {}", record.username, record.full_name);
        Ok(record)
    }

    /// Classification and synthesis without persisting.
    pub fn build_record<R: rand::Rng + ?Sized>(
        &self,
        text: &str,
        rng: &mut R,
    ) -> Result<Record, ProcessError> {
        let classified = classify(text.trim());
        if classified.full_name.is_empty() {
            return Err(ProcessError::NameNotFound);
        }

        let full_name = classified.full_name;
        Ok(Record {
            username: credentials::username(rng, &full_name),
            password: self.generator.password(rng, &full_name),
            phone: classified
                .phone
                .unwrap_or_else(|| MISSING_FIELD.to_string()),
            account_number: classified
                .account_number
                .unwrap_or_else(|| MISSING_FIELD.to_string()),
            birthday: self.generator.birthday(rng),
            full_name,
            created_at: Local::now().naive_local(),
        })
    }

    pub async fn recent(&self, n: usize) -> Result<RecentRecords, ProcessError> {
        self.store.list_recent(n).await.map_err(ProcessError::Store)
    }
}
