use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use zendesk_transformations::{Error, Result, archive::BlobStore, sentiment::SentimentClassifier};

/// Mock sentiment classifier for testing
#[derive(Debug, Default)]
pub struct MockClassifier {
    pub label: String,
    pub error: Option<String>,
    pub requests: Arc<Mutex<Vec<String>>>,
}

impl MockClassifier {
    pub fn new(label: &str) -> Self {
        Self {
            label: label.to_string(),
            ..Self::default()
        }
    }

    pub fn with_error(mut self, error: &str) -> Self {
        self.error = Some(error.to_string());
        self
    }

    pub fn get_requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl SentimentClassifier for MockClassifier {
    async fn classify(&self, text: &str) -> Result<String> {
        self.requests.lock().unwrap().push(text.to_string());

        if let Some(ref error) = self.error {
            return Err(Error::upstream(error.clone()));
        }

        Ok(self.label.clone())
    }
}

/// In-memory blob store recording every upload
#[derive(Debug, Default)]
pub struct MockBlobStore {
    pub blobs: Arc<Mutex<Vec<(String, String)>>>,
    pub error: Option<String>,
}

impl MockBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_error(mut self, error: &str) -> Self {
        self.error = Some(error.to_string());
        self
    }

    pub fn get_blobs(&self) -> Vec<(String, String)> {
        self.blobs.lock().unwrap().clone()
    }
}

#[async_trait]
impl BlobStore for MockBlobStore {
    async fn put(&self, key: &str, content: &str) -> Result<()> {
        if let Some(ref error) = self.error {
            return Err(Error::upstream(error.clone()));
        }

        self.blobs
            .lock()
            .unwrap()
            .push((key.to_string(), content.to_string()));
        Ok(())
    }
}
