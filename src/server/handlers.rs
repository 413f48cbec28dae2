use super::types::{DispatchMode, ErrorResponse};
use crate::{
    Error, Result,
    event::{AttributesReader, Event, decode_attributes, encode_attributes, is_structured_mode},
    transform::Transformation,
};
use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Json, Response},
};
use std::sync::Arc;
use tracing::{error, info};

#[derive(Clone)]
pub struct AppState {
    pub transformation: Arc<dyn Transformation>,
    pub mode: DispatchMode,
}

pub async fn receive(
    State(state): State<AppState>,
    headers: HeaderMap,
    event: Event,
) -> Response {
    match dispatch(&state, &headers, event).await {
        Ok(response) => response,
        Err(e) => {
            error!(
                "{} failed to handle the event: {}",
                state.transformation.name(),
                e
            );
            error_response(e)
        }
    }
}

pub async fn healthz() -> &'static str {
    "ok"
}

async fn dispatch(state: &AppState, headers: &HeaderMap, event: Event) -> Result<Response> {
    // Binary mode carries attributes in percent-encoded headers.
    let event = if is_structured_mode(headers) {
        event
    } else {
        decode_attributes(event)?
    };
    info!("Got an event {} from {}", event.id(), event.source());

    let outbound = state.transformation.transform(event).await?;

    match &state.mode {
        DispatchMode::Reply => {
            info!("Replying with event {} ({})", outbound.id(), outbound.ty());
            Ok(encode_attributes(outbound)?.into_response())
        }
        DispatchMode::Forward(sink) => {
            info!(
                "Sending event {} ({}) to {}",
                outbound.id(),
                outbound.ty(),
                sink.target()
            );
            sink.send(outbound).await?;
            Ok(StatusCode::ACCEPTED.into_response())
        }
    }
}

fn error_response(e: Error) -> Response {
    (
        e.status_code(),
        Json(ErrorResponse {
            error: e.to_string(),
        }),
    )
        .into_response()
}
