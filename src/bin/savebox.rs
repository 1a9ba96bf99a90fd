//! Savebox server binary entry point

use clap::Parser;
use savebox::cli::Cli;

#[tokio::main]
async fn main() {
    savebox::init_logging();

    let cli = Cli::parse();
    if let Err(e) = cli.execute().await {
        tracing::error!("fatal: {:#}", e);
        std::process::exit(1);
    }
}
