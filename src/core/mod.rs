//! Core save/load subsystem: key sanitization and the atomic document store

pub mod key;
pub mod store;

pub use key::UserKey;
pub use store::{DiskInfo, FileInfo, SaveStore, StoreConfig, StoreError};
