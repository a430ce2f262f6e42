use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tempfile::NamedTempFile;
use tracing::{debug, info};

use daybook_types::MovementEntry;

use crate::error::{StoreError, StoreResult};
use crate::naming;
use crate::traits::LedgerStore;

/// Flat-directory filesystem store: one pretty-printed JSON document per
/// calendar day.
///
/// Writes are atomic: the document is serialized to a temporary file in the
/// same directory and renamed over the target, so a crash mid-write never
/// leaves a truncated ledger behind. There is no file locking; concurrent
/// processes racing on the same date remain a documented limitation.
pub struct FsLedgerStore {
    root: PathBuf,
    prefix: String,
}

impl FsLedgerStore {
    /// Open a store rooted at `root` with the default `inventory` prefix.
    ///
    /// The directory is created transparently on first use; a creation
    /// failure (permissions, read-only mount) is fatal and propagated.
    pub fn new(root: impl Into<PathBuf>) -> StoreResult<Self> {
        Self::with_prefix(root, naming::DEFAULT_PREFIX)
    }

    /// Open a store with an explicit daily filename prefix, e.g. the early
    /// variant's `database`.
    pub fn with_prefix(root: impl Into<PathBuf>, prefix: impl Into<String>) -> StoreResult<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        info!(root = %root.display(), "ledger directory ready");
        Ok(Self {
            root,
            prefix: prefix.into(),
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    fn daily_path(&self, date: NaiveDate) -> PathBuf {
        self.root.join(naming::daily_filename(&self.prefix, date))
    }

    fn carry_path(&self, date: NaiveDate) -> PathBuf {
        self.root.join(naming::carry_forward_filename(date))
    }

    fn read_document(&self, path: &Path) -> StoreResult<Vec<MovementEntry>> {
        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let name = document_name(path);
        let value: serde_json::Value =
            serde_json::from_slice(&bytes).map_err(|e| StoreError::Malformed {
                name: name.clone(),
                reason: e.to_string(),
            })?;

        match value {
            serde_json::Value::Array(_) => {
                serde_json::from_value(value).map_err(|e| StoreError::Malformed {
                    name,
                    reason: e.to_string(),
                })
            }
            // The early variant seeded new documents with a bare object.
            serde_json::Value::Object(map) if map.is_empty() => Ok(Vec::new()),
            _ => Err(StoreError::Malformed {
                name,
                reason: "expected a JSON array of movement entries".into(),
            }),
        }
    }

    fn write_document(&self, path: &Path, entries: &[MovementEntry]) -> StoreResult<()> {
        let bytes = serde_json::to_vec_pretty(entries)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;

        // Atomic replace: write beside the target, then rename over it.
        let mut tmp = NamedTempFile::new_in(&self.root)?;
        tmp.write_all(&bytes)?;
        tmp.persist(path).map_err(|e| StoreError::Io(e.error))?;

        debug!(path = %path.display(), entries = entries.len(), "document saved");
        Ok(())
    }
}

impl LedgerStore for FsLedgerStore {
    fn load(&self, date: NaiveDate) -> StoreResult<Vec<MovementEntry>> {
        self.read_document(&self.daily_path(date))
    }

    fn save(&self, date: NaiveDate, entries: &[MovementEntry]) -> StoreResult<()> {
        self.write_document(&self.daily_path(date), entries)
    }

    fn exists(&self, date: NaiveDate) -> StoreResult<bool> {
        Ok(self.daily_path(date).is_file())
    }

    fn list_dates(&self) -> StoreResult<Vec<NaiveDate>> {
        let mut dates = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let entry = entry?;
            let filename = entry.file_name();
            let Some(filename) = filename.to_str() else {
                continue;
            };
            if let Some(date) = naming::parse_daily_filename(&self.prefix, filename) {
                dates.push(date);
            }
        }
        dates.sort_unstable();
        Ok(dates)
    }

    fn load_carry_forward(&self, date: NaiveDate) -> StoreResult<Vec<MovementEntry>> {
        self.read_document(&self.carry_path(date))
    }

    fn save_carry_forward(&self, date: NaiveDate, entries: &[MovementEntry]) -> StoreResult<()> {
        self.write_document(&self.carry_path(date), entries)
    }
}

fn document_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
