use axum::extract::rejection::JsonRejection;
use axum::extract::Query;
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult};
use crate::splitter::split;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/api/split", get(split_query).post(split_body))
}

async fn split_query(Query(params): Query<SplitParams>) -> AppResult<Json<SplitResponse>> {
    let input = params
        .input
        .ok_or_else(|| AppError::bad_request("input is required"))?;

    Ok(Json(SplitResponse {
        tokens: split(&input),
    }))
}

async fn split_body(
    payload: Result<Json<SplitRequest>, JsonRejection>,
) -> AppResult<Json<SplitResponse>> {
    let Json(body) = payload.map_err(|rejection| AppError::bad_request(rejection.body_text()))?;

    Ok(Json(SplitResponse {
        tokens: split(&body.input),
    }))
}

#[derive(Debug, Deserialize)]
struct SplitParams {
    input: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SplitRequest {
    input: String,
}

#[derive(Debug, Serialize)]
struct SplitResponse {
    tokens: Vec<String>,
}
