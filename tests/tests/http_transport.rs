use application::chat_service::ChatService;
use application::notifier::Notifier;
use application::story_service::{StoryOutcome, StoryService, STORY_SUCCESS};
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use domain::notification::Severity;
use domain::session::{SubmitOutcome, CONNECTIVITY_ERROR_MESSAGE};
use domain::transport::{ChatTransport, StoryRequest, StoryTransport};
use fixtures::RecordingSink;
use infrastructure::error::TransportError;
use infrastructure::marketplace_client::MarketplaceClient;
use serde_json::{json, Value};
use std::sync::Arc;
use tokio::net::TcpListener;

async fn chat(Json(body): Json<Value>) -> Json<Value> {
    let message = body["message"].as_str().unwrap_or_default();
    if message.is_empty() {
        return Json(json!({"success": false, "message": "Please enter a message"}));
    }
    Json(json!({"success": true, "message": format!("You said: {message}")}))
}

async fn story(Json(body): Json<Value>) -> Json<Value> {
    let category = body["category"].as_str().unwrap_or_default();
    let description = body["description"].as_str().unwrap_or_default();
    Json(json!({
        "success": true,
        "story": format!("A {category} piece: {description}"),
    }))
}

async fn broken() -> (StatusCode, &'static str) {
    (StatusCode::INTERNAL_SERVER_ERROR, "boom")
}

async fn garbage() -> &'static str {
    "<html>not json</html>"
}

async fn spawn_server() -> String {
    let router = Router::new()
        .route("/api/chat", post(chat))
        .route("/generate_story", post(story))
        .route("/broken", post(broken))
        .route("/garbage", post(garbage));
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

fn client(base: &str, chat_path: &str) -> MarketplaceClient {
    MarketplaceClient::with_paths(base, chat_path, "/generate_story")
}

#[tokio::test]
async fn posts_message_and_parses_reply() {
    let base = spawn_server().await;
    let reply = client(&base, "/api/chat").send("Hello").await.unwrap();
    assert!(reply.success);
    assert_eq!(reply.message.as_deref(), Some("You said: Hello"));
}

#[tokio::test]
async fn trailing_slash_in_base_url_is_ignored() {
    let base = spawn_server().await;
    let reply = client(&format!("{base}/"), "/api/chat").send("x").await.unwrap();
    assert_eq!(reply.message.as_deref(), Some("You said: x"));
}

#[tokio::test]
async fn non_success_status_is_an_error() {
    let base = spawn_server().await;
    let err = client(&base, "/broken").send("Hello").await.unwrap_err();
    match err.downcast_ref::<TransportError>() {
        Some(TransportError::Status { status, body }) => {
            assert_eq!(*status, 500);
            assert_eq!(body, "boom");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn non_json_body_is_a_decode_error() {
    let base = spawn_server().await;
    let err = client(&base, "/garbage").send("Hello").await.unwrap_err();
    assert!(matches!(
        err.downcast_ref::<TransportError>(),
        Some(TransportError::Decode(_))
    ));
}

#[tokio::test]
async fn chat_service_over_http() {
    let base = spawn_server().await;
    let service = ChatService::new(client(&base, "/api/chat"));

    assert_eq!(service.submit("Hello").await, SubmitOutcome::Replied);
    assert_eq!(service.history()[1].text, "You said: Hello");
    assert!(!service.is_pending());
}

#[tokio::test]
async fn unreachable_server_yields_connectivity_message() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let service = ChatService::new(client(&format!("http://{addr}"), "/api/chat"));
    assert_eq!(service.submit("Hello").await, SubmitOutcome::TransportFailure);
    assert_eq!(service.history()[1].text, CONNECTIVITY_ERROR_MESSAGE);
    assert!(!service.is_pending());
}

#[tokio::test]
async fn story_generation_over_http() {
    let base = spawn_server().await;
    let request = StoryRequest {
        description: "walnut bowl".into(),
        category: "woodwork".into(),
    };
    let reply = client(&base, "/api/chat").generate_story(&request).await.unwrap();
    assert_eq!(reply.story.as_deref(), Some("A woodwork piece: walnut bowl"));

    let sink = Arc::new(RecordingSink::default());
    let service = StoryService::new(client(&base, "/api/chat"), Notifier::new(sink.clone()));
    assert_eq!(
        service.generate("walnut bowl", "woodwork").await,
        StoryOutcome::Generated("A woodwork piece: walnut bowl".into())
    );
    assert_eq!(sink.shown(), vec![(Severity::Success, STORY_SUCCESS.to_string())]);
}
