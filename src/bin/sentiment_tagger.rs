use anyhow::Result;
use std::sync::Arc;
use tracing::{error, info};
use zendesk_transformations::{
    config, logging,
    sentiment::{ComprehendClassifier, SentimentTagger},
    server,
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

    info!("Starting sentiment tagger with log level: {}", log_level);

    let classifier = match ComprehendClassifier::from_env(&config.language).await {
        Ok(classifier) => classifier,
        Err(e) => {
            error!("Failed to create Comprehend client: {}", e);
            std::process::exit(1);
        }
    };

    let tagger = SentimentTagger::new(Arc::new(classifier), &config.namespace);
    server::run(&config, Arc::new(tagger)).await?;

    Ok(())
}
