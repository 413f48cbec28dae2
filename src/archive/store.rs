use crate::{Error, Result};
use async_trait::async_trait;
use aws_sdk_s3::{Client, error::DisplayErrorContext, primitives::ByteStream};
use tracing::{error, info};

/// Write-only blob storage.
#[async_trait]
pub trait BlobStore: Send + Sync {
    async fn put(&self, key: &str, content: &str) -> Result<()>;
}

pub struct S3BlobStore {
    client: Client,
    bucket: String,
}

impl S3BlobStore {
    pub fn new(client: Client, bucket: impl Into<String>) -> Self {
        Self {
            client,
            bucket: bucket.into(),
        }
    }

    /// Builds the client from the standard AWS environment (region,
    /// credentials, endpoint overrides).
    pub async fn from_env(bucket: impl Into<String>) -> Self {
        let sdk_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        Self::new(Client::new(&sdk_config), bucket)
    }
}

#[async_trait]
impl BlobStore for S3BlobStore {
    async fn put(&self, key: &str, content: &str) -> Result<()> {
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .content_type("text/plain; charset=utf-8")
            .body(ByteStream::from(content.as_bytes().to_vec()))
            .send()
            .await
            .map_err(|e| {
                error!("Unable to upload {} to {}", key, self.bucket);
                Error::upstream(format!("PutObject failed: {}", DisplayErrorContext(&e)))
            })?;

        info!("Successfully uploaded {:?} to {:?}", key, self.bucket);
        Ok(())
    }
}
