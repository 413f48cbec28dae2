use crate::{
    Error, Result,
    event::{AttributesReader, Event, encode_attributes},
};
use cloudevents::binding::reqwest::RequestBuilderExt;
use tracing::debug;

/// Delivers events to a downstream CloudEvents receiver in binary mode.
#[derive(Clone)]
pub struct HttpSink {
    client: reqwest::Client,
    target: String,
}

impl HttpSink {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            target: target.into(),
        }
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub async fn send(&self, event: Event) -> Result<()> {
        let id = event.id().to_string();

        let request = self
            .client
            .post(&self.target)
            .event(encode_attributes(event)?)
            .map_err(|e| Error::encode(format!("Failed to write event {}: {}", id, e)))?;

        let response = request.send().await.map_err(|e| {
            Error::delivery(format!("Failed to reach sink {}: {}", self.target, e))
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::delivery(format!(
                "Sink {} responded with {}",
                self.target, status
            )));
        }

        debug!("Event {} delivered to {}", id, self.target);
        Ok(())
    }
}
