pub mod messages;
pub mod split;

use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(split::router())
        .merge(messages::router())
        .with_state(state)
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn call(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = serde_json::from_slice(&body).unwrap_or(Value::Null);
        (status, json)
    }

    fn app(capacity: usize) -> Router {
        build_router(AppState::new(capacity))
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let (status, body) = call(app(4), get("/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "status": "ok" }));
    }

    #[tokio::test]
    async fn split_via_query() {
        let (status, body) = call(app(4), get("/api/split?input=%20%20a%20,,%20c%20")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "tokens": ["a", "c"] }));
    }

    #[tokio::test]
    async fn split_query_requires_input() {
        let (status, body) = call(app(4), get("/api/split")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "input is required" }));
    }

    #[tokio::test]
    async fn split_body_without_input_is_bad_request() {
        let (status, body) = call(app(4), post_json("/api/split", json!({}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("input"));
    }

    #[tokio::test]
    async fn send_message_rejects_malformed_json() {
        let request = Request::builder()
            .method("POST")
            .uri("/api/messages")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{ not json"))
            .unwrap();

        let (status, body) = call(app(4), request).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn split_via_body() {
        let request = post_json("/api/split", json!({ "input": "   a    , b,    c " }));
        let (status, body) = call(app(4), request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "tokens": ["a", "b", "c"] }));
    }

    #[tokio::test]
    async fn split_body_of_only_delimiters_is_empty() {
        let request = post_json("/api/split", json!({ "input": ",,, ,,    ,,  ,," }));
        let (_, body) = call(app(4), request).await;
        assert_eq!(body, json!({ "tokens": [] }));
    }

    #[tokio::test]
    async fn messages_flow_through_queue() {
        let app = app(8);

        let (status, sent) = call(
            app.clone(),
            post_json("/api/messages", json!({ "payload": "   a ,,z  " })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(sent["queued"], 2);

        let (status, drained) = call(app.clone(), get("/api/messages")).await;
        assert_eq!(status, StatusCode::OK);
        let messages = drained["messages"].as_array().unwrap();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0]["payload"], "a");
        assert_eq!(messages[1]["payload"], "z");
        assert_eq!(messages[0]["headers"]["correlation_id"], sent["id"]);
        assert_eq!(messages[1]["headers"]["sequence_number"], 2);

        let (_, drained) = call(app, get("/api/messages")).await;
        assert_eq!(drained, json!({ "messages": [], "pending": 0 }));
    }

    #[tokio::test]
    async fn drain_honours_max() {
        let app = app(8);
        call(
            app.clone(),
            post_json("/api/messages", json!({ "payload": "a,b,c" })),
        )
        .await;

        let (_, drained) = call(app.clone(), get("/api/messages?max=1")).await;
        assert_eq!(drained["messages"].as_array().unwrap().len(), 1);
        assert_eq!(drained["pending"], 2);

        let (_, drained) = call(app, get("/api/messages")).await;
        assert_eq!(drained["messages"].as_array().unwrap().len(), 2);
        assert_eq!(drained["pending"], 0);
    }

    #[tokio::test]
    async fn drain_waits_for_late_message() {
        let state = AppState::new(8);
        let app = build_router(state.clone());

        tokio::spawn(async move {
            tokio::time::sleep(std::time::Duration::from_millis(20)).await;
            state.flow.send("late, arrival").unwrap();
        });

        let (status, drained) = call(app, get("/api/messages?wait_ms=2000")).await;

        assert_eq!(status, StatusCode::OK);
        let payloads: Vec<&str> = drained["messages"]
            .as_array()
            .unwrap()
            .iter()
            .map(|message| message["payload"].as_str().unwrap())
            .collect();
        assert_eq!(payloads, vec!["late", "arrival"]);
        assert_eq!(drained["pending"], 0);
    }

    #[tokio::test]
    async fn drain_wait_times_out_empty() {
        let (status, drained) = call(app(4), get("/api/messages?wait_ms=10")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(drained, json!({ "messages": [], "pending": 0 }));
    }

    #[tokio::test]
    async fn full_queue_is_service_unavailable() {
        let app = app(1);

        let (status, body) = call(
            app,
            post_json("/api/messages", json!({ "payload": "a,b" })),
        )
        .await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body, json!({ "error": "channel 'results' is full" }));
    }
}
