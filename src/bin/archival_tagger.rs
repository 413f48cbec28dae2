use anyhow::Result;
use std::sync::Arc;
use tracing::{error, info};
use zendesk_transformations::{
    archive::{ArchivalTagger, S3BlobStore},
    config, logging, server,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (before logging setup)
    let config = match config::load().await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    let log_level = match logging::init(&config.server.logs.level) {
        Ok(level) => level,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    let bucket = match config.require_bucket() {
        Ok(bucket) => bucket.to_string(),
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    info!(
        "Starting archival tagger with log level: {}, bucket: {}",
        log_level, bucket
    );

    let store = S3BlobStore::from_env(bucket).await;
    let tagger = ArchivalTagger::new(Arc::new(store), &config.namespace);
    server::run(&config, Arc::new(tagger)).await?;

    Ok(())
}
