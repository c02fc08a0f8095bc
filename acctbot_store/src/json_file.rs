use acctbot_core::{RecentRecords, Record, RecordStore};
use async_trait::async_trait;
use serde_json::Value;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

/// Records kept as one pretty-printed JSON array.
///
/// Every append reads the whole file, pushes, and rewrites it. Appends from
/// this process are serialized; other processes writing the same file are not
/// coordinated with.
pub struct JsonFileStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        info!("Record store: {}", path.display());
        Self {
            path,
            write_lock: Mutex::new(()),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Raw entries of the stored array. A missing file, an unreadable file or
    /// content that is not a JSON array counts as empty.
    async fn load_entries(&self) -> Vec<Value> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("{} does not exist yet", self.path.display());
                return Vec::new();
            }
            Err(e) => {
                warn!("Failed to read {}: {e}. Treating as empty", self.path.display());
                return Vec::new();
            }
        };

        match serde_json::from_str(&content) {
            Ok(entries) => entries,
            Err(e) => {
                warn!(
                    "Failed to parse {}: {e}. Treating as empty",
                    self.path.display()
                );
                Vec::new()
            }
        }
    }

    /// Load every record that matches the record schema, in file order.
    ///
    /// Entries that do not match are skipped here but stay in the file.
    pub async fn load(&self) -> Vec<Record> {
        self.load_entries()
            .await
            .into_iter()
            .enumerate()
            .filter_map(|(i, entry)| match serde_json::from_value(entry) {
                Ok(record) => Some(record),
                Err(e) => {
                    warn!("Skipping entry #{i} in {}: {e}", self.path.display());
                    None
                }
            })
            .collect()
    }

    async fn save(&self, entries: &[Value]) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }

        let json = serde_json::to_string_pretty(entries)?;
        tokio::fs::write(&self.path, json).await?;
        Ok(())
    }
}

#[async_trait]
impl RecordStore for JsonFileStore {
    async fn append(&self, record: &Record) -> anyhow::Result<()> {
        let _guard = self.write_lock.lock().await;

        let mut entries = self.load_entries().await;
        entries.push(serde_json::to_value(record)?);
        self.save(&entries).await?;

        debug!("Stored record #{} in {}", entries.len(), self.path.display());
        Ok(())
    }

    async fn list_recent(&self, n: usize) -> anyhow::Result<RecentRecords> {
        Ok(RecentRecords::tail_of(self.load().await, n))
    }
}
