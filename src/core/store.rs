//! Atomic filesystem-backed save document store

use crate::core::key::UserKey;
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use std::io;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::fs;
use tracing::{debug, info};

/// Store error kinds
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Invalid payload: {0}")]
    Validation(String),

    #[error("Save file not found")]
    NotFound,

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Startup error: {0}")]
    Startup(String),
}

/// Store configuration
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Directory holding one `<key>.json` file per user
    pub save_dir: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            save_dir: PathBuf::from("./saves"),
        }
    }
}

impl StoreConfig {
    /// Resolve the save directory from an explicit path, the `SAVEBOX_DIR`
    /// environment variable, or the default, in that order.
    pub fn resolve(save_dir: Option<PathBuf>) -> Self {
        let save_dir = save_dir
            .or_else(|| std::env::var_os("SAVEBOX_DIR").map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from("./saves"));
        Self { save_dir }
    }
}

/// Metadata for a single file in the save directory
#[derive(Debug, Clone, Serialize)]
pub struct FileInfo {
    pub name: String,
    pub size: u64,
    pub mtime: String,
}

/// Snapshot of the save directory's state
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiskInfo {
    pub save_dir: String,
    pub exists: bool,
    pub is_dir: bool,
}

/// Save document store backed by a flat directory of `<key>.json` files.
///
/// Every write goes to a per-operation-unique temp sibling and is committed
/// with an atomic rename, so readers observe either the old or the new
/// content in full, never a torn file. There is no in-process locking:
/// concurrent writes to the same key are last-rename-wins, which is an
/// accepted consistency gap rather than a guarantee.
pub struct SaveStore {
    base_dir: PathBuf,
    temp_seq: AtomicU64,
}

impl SaveStore {
    /// Create the store, establishing a writable base directory.
    ///
    /// Performs a probe write+delete; any failure here is a startup error
    /// and the process should not serve requests.
    pub async fn new(config: StoreConfig) -> Result<Self, StoreError> {
        fs::create_dir_all(&config.save_dir).await.map_err(|e| {
            StoreError::Startup(format!(
                "failed to create save directory {}: {}",
                config.save_dir.display(),
                e
            ))
        })?;

        let store = Self {
            base_dir: config.save_dir,
            temp_seq: AtomicU64::new(0),
        };
        store.probe().await?;

        info!("save store ready at {}", store.base_dir.display());
        Ok(store)
    }

    /// Write-then-delete probe confirming the directory is writable.
    async fn probe(&self) -> Result<(), StoreError> {
        let probe = self.base_dir.join(".savebox-probe");
        fs::write(&probe, b"probe").await.map_err(|e| {
            StoreError::Startup(format!(
                "save directory {} is not writable: {}",
                self.base_dir.display(),
                e
            ))
        })?;
        fs::remove_file(&probe).await.map_err(|e| {
            StoreError::Startup(format!(
                "failed to remove probe file in {}: {}",
                self.base_dir.display(),
                e
            ))
        })?;
        Ok(())
    }

    fn save_path(&self, key: &UserKey) -> PathBuf {
        self.base_dir.join(format!("{}.json", key))
    }

    /// Per-operation-unique temp path so concurrent writers never share a
    /// temp file.
    fn temp_path(&self, key: &UserKey) -> PathBuf {
        let seq = self.temp_seq.fetch_add(1, Ordering::Relaxed);
        self.base_dir.join(format!("{}.json.{}.tmp", key, seq))
    }

    /// Write `payload` as pretty-printed JSON via temp file + atomic rename.
    ///
    /// The rename is the commit point; a failure before it leaves at worst a
    /// stray temp file, never a partial destination file.
    async fn write_atomic(&self, key: &UserKey, payload: &Value) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec_pretty(payload)
            .map_err(|e| StoreError::Io(io::Error::new(io::ErrorKind::InvalidData, e)))?;

        let tmp = self.temp_path(key);
        fs::write(&tmp, &bytes).await?;
        if let Err(e) = fs::rename(&tmp, self.save_path(key)).await {
            let _ = fs::remove_file(&tmp).await;
            return Err(e.into());
        }

        debug!(key = %key, "wrote save file");
        Ok(())
    }

    /// Save a document, replacing any prior content for the key.
    ///
    /// An absent payload is stored as an empty object.
    pub async fn save(&self, key: &UserKey, payload: Option<Value>) -> Result<(), StoreError> {
        let payload = payload.unwrap_or_else(|| Value::Object(serde_json::Map::new()));
        self.write_atomic(key, &payload).await
    }

    /// Load the document for a key; `None` means never saved or deleted.
    pub async fn load(&self, key: &UserKey) -> Result<Option<Value>, StoreError> {
        match fs::read(self.save_path(key)).await {
            Ok(bytes) => {
                let doc = serde_json::from_slice(&bytes)
                    .map_err(|e| StoreError::Io(io::Error::new(io::ErrorKind::InvalidData, e)))?;
                Ok(Some(doc))
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Load the document for a key, reporting absence as [`StoreError::NotFound`].
    pub async fn raw_read(&self, key: &UserKey) -> Result<Value, StoreError> {
        self.load(key).await?.ok_or(StoreError::NotFound)
    }

    /// Write a document, rejecting any payload that is not a JSON object
    /// before touching the filesystem.
    pub async fn raw_write(&self, key: &UserKey, payload: &Value) -> Result<(), StoreError> {
        if !payload.is_object() {
            return Err(StoreError::Validation(
                "payload must be a JSON object".to_string(),
            ));
        }
        self.write_atomic(key, payload).await
    }

    /// Delete the document for a key.
    pub async fn delete(&self, key: &UserKey) -> Result<(), StoreError> {
        match fs::remove_file(self.save_path(key)).await {
            Ok(()) => {
                debug!(key = %key, "deleted save file");
                Ok(())
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Err(StoreError::NotFound),
            Err(e) => Err(e.into()),
        }
    }

    /// List the keys of every stored document, in no particular order.
    ///
    /// Only regular files named `<key>.json` count; temp files and anything
    /// else in the directory are silently excluded.
    pub async fn list_keys(&self) -> Result<Vec<String>, StoreError> {
        let mut keys = Vec::new();
        let mut entries = fs::read_dir(&self.base_dir).await?;
        while let Some(entry) = entries.next_entry().await? {
            if !entry.file_type().await?.is_file() {
                continue;
            }
            let name = entry.file_name();
            if let Some(stem) = name.to_string_lossy().strip_suffix(".json") {
                keys.push(stem.to_string());
            }
        }
        Ok(keys)
    }

    /// List every regular file in the save directory with metadata.
    pub async fn list_files(&self) -> Result<Vec<FileInfo>, StoreError> {
        let mut files = Vec::new();
        let mut entries = fs::read_dir(&self.base_dir).await?;
        while let Some(entry) = entries.next_entry().await? {
            let meta = entry.metadata().await?;
            if !meta.is_file() {
                continue;
            }
            let mtime = meta
                .modified()
                .map(|t| DateTime::<Utc>::from(t).to_rfc3339())
                .unwrap_or_default();
            files.push(FileInfo {
                name: entry.file_name().to_string_lossy().to_string(),
                size: meta.len(),
                mtime,
            });
        }
        Ok(files)
    }

    /// Report whether the save directory currently exists and is a directory.
    pub async fn disk_info(&self) -> DiskInfo {
        let (exists, is_dir) = match fs::metadata(&self.base_dir).await {
            Ok(meta) => (true, meta.is_dir()),
            Err(_) => (false, false),
        };
        DiskInfo {
            save_dir: self.base_dir.display().to_string(),
            exists,
            is_dir,
        }
    }
}
