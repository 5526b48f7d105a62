use std::time::Duration;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::{AppError, AppResult};
use crate::messaging::Message;
use crate::splitter::split;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/api/messages", get(drain_messages).post(send_message))
}

async fn send_message(
    State(state): State<AppState>,
    payload: Result<Json<SendRequest>, JsonRejection>,
) -> AppResult<Json<SendResponse>> {
    let Json(body) = payload.map_err(|rejection| AppError::bad_request(rejection.body_text()))?;

    let queued = split(&body.payload).len();
    let id = state.flow.send(body.payload)?;

    info!(message_id = %id, queued, "payload sent through splitter flow");

    Ok(Json(SendResponse { id, queued }))
}

/// Drains queued results. With `wait_ms`, an empty queue is waited on for the first message.
async fn drain_messages(
    State(state): State<AppState>,
    Query(params): Query<DrainParams>,
) -> Json<MessagesResponse> {
    let results = state.flow.results();
    let mut messages = Vec::new();

    if params.max != Some(0) && results.is_empty() {
        if let Some(wait_ms) = params.wait_ms {
            messages.extend(results.receive(Duration::from_millis(wait_ms)).await);
        }
    }

    let remaining = params.max.map(|max| max.saturating_sub(messages.len()));
    messages.extend(results.drain(remaining).await);

    Json(MessagesResponse {
        messages,
        pending: results.len(),
    })
}

#[derive(Debug, Deserialize)]
struct SendRequest {
    payload: String,
}

#[derive(Debug, Serialize)]
struct SendResponse {
    id: Uuid,
    queued: usize,
}

#[derive(Debug, Deserialize)]
struct DrainParams {
    max: Option<usize>,
    wait_ms: Option<u64>,
}

#[derive(Debug, Serialize)]
struct MessagesResponse {
    messages: Vec<Message>,
    pending: usize,
}
