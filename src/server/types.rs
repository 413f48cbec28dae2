use crate::{config::Config, sink::HttpSink};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// How outbound events leave the service. Picked once at startup.
#[derive(Clone)]
pub enum DispatchMode {
    /// The outbound event is the HTTP response.
    Reply,
    /// The outbound event is posted to the sink; the caller gets an empty 202.
    Forward(HttpSink),
}

impl DispatchMode {
    pub fn from_config(config: &Config) -> Self {
        match config.sink() {
            Some(target) => Self::Forward(HttpSink::new(target)),
            None => Self::Reply,
        }
    }
}
