use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::Record;

/// Tail of the store plus the number of records it holds overall.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecentRecords {
    /// Oldest first.
    pub records: Vec<Record>,
    pub total: usize,
}

impl RecentRecords {
    /// Keep the last `n` of `all`, preserving order.
    #[must_use]
    pub fn tail_of(mut all: Vec<Record>, n: usize) -> Self {
        let total = all.len();
        let records = all.split_off(total.saturating_sub(n));
        Self { records, total }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Append-only record storage.
#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn append(&self, record: &Record) -> anyhow::Result<()>;

    /// The last `n` records in insertion order, or all of them if fewer exist.
    async fn list_recent(&self, n: usize) -> anyhow::Result<RecentRecords>;
}

#[async_trait]
impl<T: RecordStore + ?Sized> RecordStore for std::sync::Arc<T> {
    async fn append(&self, record: &Record) -> anyhow::Result<()> {
        (**self).append(record).await
    }

    async fn list_recent(&self, n: usize) -> anyhow::Result<RecentRecords> {
        (**self).list_recent(n).await
    }
}

/// Process-local store, used in tests.
#[derive(Debug, Default)]
pub struct MemoryRecordStore {
    records: Mutex<Vec<Record>>,
}

impl MemoryRecordStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.records.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.lock().await.is_empty()
    }
}

#[async_trait]
impl RecordStore for MemoryRecordStore {
    async fn append(&self, record: &Record) -> anyhow::Result<()> {
        self.records.lock().await.push(record.clone());
        Ok(())
    }

    async fn list_recent(&self, n: usize) -> anyhow::Result<RecentRecords> {
        let all = self.records.lock().await.clone();
        Ok(RecentRecords::tail_of(all, n))
    }
}
