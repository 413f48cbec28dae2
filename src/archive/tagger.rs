use super::{
    store::BlobStore,
    types::{ArchiveRequest, ArchiveResponse},
};
use crate::{
    Result,
    event::{AttributesReader, Event, EventExt, TAG_CREATE_EVENT_TYPE, tag_event},
    transform::Transformation,
};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{error, info};

/// Archives ticket descriptions, then passes the tag along.
pub struct ArchivalTagger {
    store: Arc<dyn BlobStore>,
    source: String,
}

impl ArchivalTagger {
    pub fn new(store: Arc<dyn BlobStore>, namespace: &str) -> Self {
        Self {
            store,
            source: event_source(namespace),
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }
}

/// Outbound event source for the given namespace.
pub fn event_source(namespace: &str) -> String {
    format!("transformations.conditionalization.{}", namespace)
}

/// Blobs are keyed by the source of the event that carried them.
pub fn blob_key(event_source: &str) -> String {
    format!("{}.txt", event_source)
}

#[async_trait]
impl Transformation for ArchivalTagger {
    fn name(&self) -> &str {
        "archival-tagger"
    }

    async fn transform(&self, event: Event) -> Result<Event> {
        let request: ArchiveRequest = event.data_as()?;
        let source = event.source().to_string();
        info!("Got ticket {} from {}", request.id, source);

        let key = blob_key(&source);
        if let Err(e) = self.store.put(&key, &request.description).await {
            error!("An error occurred archiving ticket {}: {}", request.id, e);
            return Err(e);
        }

        let response = ArchiveResponse {
            id: request.id,
            tag: request.tag,
        };

        tag_event(TAG_CREATE_EVENT_TYPE, &self.source, &response)
    }
}
