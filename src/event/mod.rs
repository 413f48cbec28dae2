mod wire;

pub use cloudevents::{AttributesReader, Data, Event};
pub use wire::{decode_attributes, encode_attributes, is_structured_mode};

use crate::{Error, Result};
use chrono::Utc;
use cloudevents::{EventBuilder, EventBuilderV10};
use serde::{Serialize, de::DeserializeOwned};
use uuid::Uuid;

pub const TICKET_CREATED_EVENT_TYPE: &str = "com.zendesk.ticket.created";
pub const TAG_CREATE_EVENT_TYPE: &str = "com.zendesk.tag.create";
pub const TAG_NEGATIVE_EVENT_TYPE: &str = "com.zendesk.tag.negative";

/// Subject stamped on every outbound tagging event.
pub const TAG_EVENT_SUBJECT: &str = "Zendesk Comprehend";

pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Builds an outbound tagging event with a fresh id, the current time and
/// `payload` as JSON data.
pub fn tag_event<T: Serialize>(event_type: &str, source: &str, payload: &T) -> Result<Event> {
    let data = serde_json::to_value(payload).map_err(|e| Error::encode(e.to_string()))?;

    EventBuilderV10::new()
        .id(Uuid::new_v4().to_string())
        .ty(event_type)
        .source(source)
        .subject(TAG_EVENT_SUBJECT)
        .time(Utc::now())
        .data(JSON_CONTENT_TYPE, data)
        .build()
        .map_err(|e| Error::encode(e.to_string()))
}

/// Typed access to the payload of an inbound event.
pub trait EventExt {
    /// Deserializes the event data. No data, or data of the wrong shape, is a
    /// decode error.
    fn data_as<T: DeserializeOwned>(&self) -> Result<T>;
}

impl EventExt for Event {
    fn data_as<T: DeserializeOwned>(&self) -> Result<T> {
        let parsed = match self.data() {
            Some(Data::Json(value)) => serde_json::from_value(value.clone()),
            Some(Data::Binary(bytes)) => serde_json::from_slice(bytes),
            Some(Data::String(text)) => serde_json::from_str(text),
            None => return Err(Error::decode("event carries no data")),
        };

        parsed.map_err(|e| Error::decode(e.to_string()))
    }
}
