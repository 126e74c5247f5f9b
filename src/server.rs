//! Webhook hosting adapter.
//!
//! Receives Telegram updates over HTTP and hands them to the dispatcher.
//! The ack never varies: Telegram retries a webhook on any non-200 status,
//! so processing failures stay server-side as logs.

use crate::dispatch::Dispatcher;
use crate::telegram::Update;
use axum::body::Bytes;
use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

/// Build the webhook router.
pub fn app_router(dispatcher: Arc<Dispatcher>) -> Router {
    Router::new()
        .route("/", get(health))
        .route("/webhook", post(webhook))
        .layer(TraceLayer::new_for_http())
        .with_state(dispatcher)
}

async fn health() -> &'static str {
    "Bybit Funding Bot is running!"
}

async fn webhook(State(dispatcher): State<Arc<Dispatcher>>, body: Bytes) -> Json<Value> {
    match serde_json::from_slice::<Update>(&body) {
        Ok(update) => dispatcher.handle_update(update).await,
        Err(e) => warn!(error = %e, "Ignoring malformed webhook payload"),
    }
    Json(json!({ "ok": true }))
}

/// Bind and serve until the process is stopped.
pub async fn run(dispatcher: Arc<Dispatcher>, bind: &str) -> anyhow::Result<()> {
    let router = app_router(dispatcher);
    let listener = tokio::net::TcpListener::bind(bind).await?;
    info!("Listening on {bind}");
    axum::serve(listener, router).await?;
    Ok(())
}
