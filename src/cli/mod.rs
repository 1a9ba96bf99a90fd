//! Command line interface

use crate::core::{SaveStore, StoreConfig};
use crate::http::SaveServer;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;

const DEFAULT_PORT: u16 = 3000;

/// Per-user JSON save file store served over HTTP
#[derive(Debug, Parser)]
#[command(name = "savebox", version, about)]
pub struct Cli {
    /// Address to bind
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Port to listen on (falls back to the PORT environment variable)
    #[arg(long)]
    pub port: Option<u16>,

    /// Directory holding save files (falls back to SAVEBOX_DIR)
    #[arg(long)]
    pub save_dir: Option<PathBuf>,
}

impl Cli {
    /// Resolve configuration and run the server.
    ///
    /// Failure to establish a writable save directory is fatal; the error
    /// propagates out and the process exits without serving any request.
    pub async fn execute(self) -> anyhow::Result<()> {
        let port = self
            .port
            .or_else(|| {
                std::env::var("PORT")
                    .ok()
                    .and_then(|p| p.parse::<u16>().ok())
            })
            .unwrap_or(DEFAULT_PORT);

        let config = StoreConfig::resolve(self.save_dir);
        let store = Arc::new(SaveStore::new(config).await?);

        let server = SaveServer::new(store, &self.host, port).map_err(anyhow::Error::msg)?;
        server.serve().await
    }
}
