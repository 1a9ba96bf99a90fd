//! # Savebox
//!
//! A per-user JSON save file store served over HTTP. Each user has exactly
//! one save document, identified by a sanitized user key and persisted as a
//! single `<key>.json` file in a flat directory. Writes go through a
//! temp-file-then-atomic-rename protocol, so a save is never observed
//! half-written even under concurrent access.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use savebox::{SaveStore, StoreConfig, UserKey};
//! use std::path::PathBuf;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = StoreConfig {
//!         save_dir: PathBuf::from("./saves"),
//!     };
//!     let store = SaveStore::new(config).await?;
//!
//!     let key = UserKey::sanitize("alice");
//!     store.save(&key, Some(serde_json::json!({"level": 3}))).await?;
//!
//!     let doc = store.load(&key).await?;
//!     println!("loaded: {:?}", doc);
//!
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod core;
pub mod http;

pub use core::{DiskInfo, FileInfo, SaveStore, StoreConfig, StoreError, UserKey};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize logging (safe for testing)
pub fn init_logging() {
    // Only initialize logging once
    static INIT: std::sync::Once = std::sync::Once::new();
    INIT.call_once(|| {
        use tracing_subscriber::EnvFilter;

        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| "savebox=info".into());

        let subscriber = tracing_subscriber::fmt().with_env_filter(filter).finish();

        // This will fail silently if already initialized
        let _ = tracing::subscriber::set_global_default(subscriber);
    });
}
