use crate::{Error, Result};
use async_trait::async_trait;
use aws_sdk_comprehend::{Client, error::DisplayErrorContext, types::LanguageCode};
use tracing::{debug, info, warn};

/// Classifies the overall sentiment of a piece of text.
#[async_trait]
pub trait SentimentClassifier: Send + Sync {
    /// Returns the coarse label, e.g. `POSITIVE`, `NEGATIVE`, `NEUTRAL` or `MIXED`.
    async fn classify(&self, text: &str) -> Result<String>;
}

/// AWS Comprehend `DetectSentiment` backed classifier.
pub struct ComprehendClassifier {
    client: Client,
    language: LanguageCode,
}

impl ComprehendClassifier {
    pub fn new(client: Client, language: &str) -> Result<Self> {
        if !LanguageCode::values().contains(&language) {
            return Err(Error::config(format!(
                "Unsupported LANGUAGE '{}'. Valid codes: {}",
                language,
                LanguageCode::values().join(", ")
            )));
        }

        Ok(Self {
            client,
            language: LanguageCode::from(language),
        })
    }

    /// Builds the client from the standard AWS environment (region,
    /// credentials, endpoint overrides).
    pub async fn from_env(language: &str) -> Result<Self> {
        let sdk_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        Self::new(Client::new(&sdk_config), language)
    }
}

#[async_trait]
impl SentimentClassifier for ComprehendClassifier {
    async fn classify(&self, text: &str) -> Result<String> {
        debug!("Requesting sentiment for {} bytes of text", text.len());

        let output = self
            .client
            .detect_sentiment()
            .text(text)
            .language_code(self.language.clone())
            .send()
            .await
            .map_err(|e| {
                warn!("Error occurred requesting from AWS Comprehend");
                Error::upstream(format!("DetectSentiment failed: {}", DisplayErrorContext(&e)))
            })?;

        let sentiment = output
            .sentiment()
            .map(|s| s.as_str().to_string())
            .ok_or_else(|| Error::upstream("DetectSentiment returned no sentiment"))?;

        info!("Got a response from Comprehend: {}", sentiment);
        Ok(sentiment)
    }
}
