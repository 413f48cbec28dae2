//! Percent-encoding of attribute values carried in `ce-*` headers.
//!
//! Header values are restricted to visible ASCII, so the HTTP binding
//! percent-encodes space, `"`, `%` and every byte outside printable ASCII.
//! Structured-mode events carry their attributes in the JSON body and are
//! left alone.

use crate::{Error, Result};
use axum::http::{HeaderMap, header::CONTENT_TYPE};
use cloudevents::{AttributesReader, AttributesWriter, Event, event::ExtensionValue};
use percent_encoding::{AsciiSet, CONTROLS, percent_decode_str, utf8_percent_encode};

const HEADER_VALUE: &AsciiSet = &CONTROLS.add(b' ').add(b'"').add(b'%');

const STRUCTURED_CONTENT_TYPE: &str = "application/cloudevents";

/// Whether the request carries a structured-mode event.
pub fn is_structured_mode(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| {
            value
                .trim_start()
                .to_ascii_lowercase()
                .starts_with(STRUCTURED_CONTENT_TYPE)
        })
}

/// Decodes the attributes of an event received in binary mode.
pub fn decode_attributes(event: Event) -> Result<Event> {
    map_header_attributes(event, decode_value)
}

/// Encodes the attributes of an event about to be sent in binary mode.
pub fn encode_attributes(event: Event) -> Result<Event> {
    map_header_attributes(event, |value| Ok(encode_value(value)))
}

fn encode_value(value: &str) -> String {
    utf8_percent_encode(value, HEADER_VALUE).to_string()
}

fn decode_value(value: &str) -> Result<String> {
    percent_decode_str(value)
        .decode_utf8()
        .map(|decoded| decoded.into_owned())
        .map_err(|e| Error::decode(format!("attribute value '{}' is not UTF-8: {}", value, e)))
}

fn map_header_attributes<F>(mut event: Event, f: F) -> Result<Event>
where
    F: Fn(&str) -> Result<String>,
{
    let id = f(event.id())?;
    let source = f(&event.source().to_string())?;
    let ty = f(event.ty())?;
    let subject = event.subject().map(&f).transpose()?;

    let extensions = event
        .iter_extensions()
        .filter_map(|(name, value)| match value {
            ExtensionValue::String(value) => Some((name.to_string(), value.clone())),
            _ => None,
        })
        .collect::<Vec<_>>();

    event.set_id(id);
    event.set_source(source);
    event.set_type(ty);
    event.set_subject(subject);
    for (name, value) in extensions {
        event.set_extension(&name, f(&value)?);
    }

    Ok(event)
}
