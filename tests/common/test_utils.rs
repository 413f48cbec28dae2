use axum::{
    body::{Body, to_bytes},
    http::{Request, Response},
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::BTreeMap;

/// Build a binary-mode CloudEvent POST with a JSON payload
pub fn binary_event_request(event_type: &str, source: &str, data: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/")
        .header("ce-id", "test-event-1")
        .header("ce-source", source)
        .header("ce-specversion", "1.0")
        .header("ce-type", event_type)
        .header("ce-time", "2024-03-01T10:00:00Z")
        .header("content-type", "application/json")
        .body(Body::from(data.to_string()))
        .unwrap()
}

/// Build a structured-mode CloudEvent POST
pub fn structured_event_request(event_type: &str, source: &str, data: &Value) -> Request<Body> {
    let envelope = serde_json::json!({
        "specversion": "1.0",
        "id": "test-event-2",
        "source": source,
        "type": event_type,
        "datacontenttype": "application/json",
        "data": data,
    });

    Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "application/cloudevents+json")
        .body(Body::from(envelope.to_string()))
        .unwrap()
}

/// Build a binary-mode POST with a raw, possibly malformed, body
pub fn raw_event_request(source: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/")
        .header("ce-id", "test-event-3")
        .header("ce-source", source)
        .header("ce-specversion", "1.0")
        .header("ce-type", "com.zendesk.ticket.created")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// A binary-mode event as it travelled over HTTP: header values exactly as
/// sent, body parsed as JSON.
#[derive(Debug)]
pub struct WireEvent {
    headers: BTreeMap<String, String>,
    pub payload: Value,
}

impl WireEvent {
    pub fn new<'a>(headers: impl IntoIterator<Item = (&'a str, &'a str)>, body: &[u8]) -> Self {
        Self {
            headers: headers
                .into_iter()
                .map(|(name, value)| (name.to_ascii_lowercase(), value.to_string()))
                .collect(),
            payload: serde_json::from_slice(body).unwrap(),
        }
    }

    pub fn payload_as<T: DeserializeOwned>(&self) -> T {
        serde_json::from_value(self.payload.clone()).unwrap()
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }

    /// Replays this event as an inbound binary-mode request.
    pub fn to_request(&self) -> Request<Body> {
        let mut builder = Request::builder().method("POST").uri("/");
        for (name, value) in &self.headers {
            if name.starts_with("ce-") || name == "content-type" {
                builder = builder.header(name.as_str(), value.as_str());
            }
        }
        builder.body(Body::from(self.payload.to_string())).unwrap()
    }
}

/// Read a binary-mode reply off the wire
pub async fn response_event(response: Response<Body>) -> WireEvent {
    let headers = response.headers().clone();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    WireEvent::new(
        headers
            .iter()
            .map(|(name, value)| (name.as_str(), value.to_str().unwrap())),
        &body,
    )
}

pub async fn response_json(response: Response<Body>) -> Value {
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&body).unwrap()
}
