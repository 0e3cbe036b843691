use crate::adapters::whatsapp::WebhookPayload;
use crate::core::engine::ReplyEngine;
use crate::domain::ports::ReplySender;
use axum::{
    body::Bytes,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::sync::Arc;
use tokio::net::TcpListener;

pub struct AppState<S: ReplySender> {
    pub engine: Arc<ReplyEngine<S>>,
    pub verify_token: Arc<str>,
    pub started_at: DateTime<Utc>,
}

// derive(Clone) would demand S: Clone
impl<S: ReplySender> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            engine: Arc::clone(&self.engine),
            verify_token: Arc::clone(&self.verify_token),
            started_at: self.started_at,
        }
    }
}

impl<S: ReplySender> AppState<S> {
    pub fn new(engine: ReplyEngine<S>, verify_token: impl Into<Arc<str>>) -> Self {
        Self {
            engine: Arc::new(engine),
            verify_token: verify_token.into(),
            started_at: Utc::now(),
        }
    }
}

/// Subscription handshake parameters. All optional so a bare GET is a 403, not a 400.
#[derive(Debug, Deserialize)]
pub struct VerifyRequest {
    #[serde(rename = "hub.mode")]
    pub mode: Option<String>,
    #[serde(rename = "hub.verify_token")]
    pub verify_token: Option<String>,
    #[serde(rename = "hub.challenge")]
    pub challenge: Option<String>,
}

pub fn build_router<S: ReplySender + 'static>(state: AppState<S>) -> Router {
    Router::new()
        .route("/webhook", get(verify_webhook::<S>).post(handle_webhook::<S>))
        .route("/health", get(health::<S>))
        .with_state(state)
}

pub async fn serve<S: ReplySender + 'static>(addr: &str, state: AppState<S>) -> std::io::Result<()> {
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("🚀 Webhook listening on {}", listener.local_addr()?);
    axum::serve(listener, build_router(state)).await
}

async fn verify_webhook<S: ReplySender>(
    State(state): State<AppState<S>>,
    Query(params): Query<VerifyRequest>,
) -> Result<String, StatusCode> {
    let mode_present = params.mode.as_deref().is_some_and(|m| !m.is_empty());
    let token_matches = params.verify_token.as_deref() == Some(&*state.verify_token);

    if mode_present && token_matches {
        tracing::info!("WhatsApp webhook verified successfully");
        Ok(params.challenge.unwrap_or_default())
    } else {
        tracing::warn!("WhatsApp webhook verification failed");
        Err(StatusCode::FORBIDDEN)
    }
}

/// Always acknowledges with 200 so Meta does not redeliver; problems are logged.
async fn handle_webhook<S: ReplySender>(
    State(state): State<AppState<S>>,
    body: Bytes,
) -> StatusCode {
    let payload: WebhookPayload = match serde_json::from_slice(&body) {
        Ok(payload) => payload,
        Err(e) => {
            tracing::warn!("Ignoring malformed webhook body ({} bytes): {}", body.len(), e);
            return StatusCode::OK;
        }
    };

    match state.engine.handle_payload(&payload).await {
        Ok(sent) => tracing::debug!("Delivered {} replies", sent),
        Err(e) => {
            tracing::error!(
                "❌ Reply delivery failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
        }
    }

    StatusCode::OK
}

async fn health<S: ReplySender>(State(state): State<AppState<S>>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "started_at": state.started_at.to_rfc3339(),
        "regions": state.engine.router().regions().len(),
    }))
}
