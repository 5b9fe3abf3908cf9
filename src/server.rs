//! HTTP surface: one endpoint, permissive CORS on every response.

use crate::ai::{EmailService, GeminiEmailClient};
use crate::email::build_parts;
use crate::error::ApiError;
use crate::models::{Config, EmailRequest, EmailResponse, DEFAULT_MAX_BODY_BYTES};
use crate::Result;
use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::{DefaultBodyLimit, State};
use axum::http::{header, HeaderValue, StatusCode};
use axum::routing::post;
use axum::{Json, Router};
use std::sync::Arc;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

pub const EMAIL_ROUTE: &str = "/api/generate_email";

#[derive(Clone)]
pub struct AppState {
    pub email: Arc<dyn EmailService>,
    pub max_body_bytes: usize,
}

/// Build the router around an already-constructed model client.
pub fn router(email: Arc<dyn EmailService>) -> Router {
    router_with_body_limit(email, DEFAULT_MAX_BODY_BYTES)
}

/// Like [`router`], with an explicit cap on the request body size.
pub fn router_with_body_limit(email: Arc<dyn EmailService>, max_body_bytes: usize) -> Router {
    Router::new()
        .route(
            EMAIL_ROUTE,
            post(generate_email)
                .options(preflight)
                .fallback(method_not_allowed),
        )
        .with_state(AppState {
            email,
            max_body_bytes,
        })
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static("POST, OPTIONS"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static("Content-Type"),
        ))
        .layer(TraceLayer::new_for_http())
}

/// Create the Gemini client once and serve until the listener fails.
pub async fn serve(config: Config) -> Result<()> {
    let email = GeminiEmailClient::new(
        config.gemini_api_key,
        config.gemini_model,
        config.request_timeout,
    );
    info!("Email provider: Gemini (model: {})", email.model());

    let app = router_with_body_limit(Arc::new(email), config.max_body_bytes);

    let listener = tokio::net::TcpListener::bind(&config.listen_addr).await?;
    info!("Listening on http://{}{}", config.listen_addr, EMAIL_ROUTE);
    axum::serve(listener, app).await?;

    Ok(())
}

async fn preflight() -> StatusCode {
    StatusCode::OK
}

async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

async fn generate_email(
    State(state): State<AppState>,
    body: std::result::Result<Bytes, BytesRejection>,
) -> std::result::Result<Json<EmailResponse>, ApiError> {
    let body = body.map_err(|rejection| {
        tracing::warn!("Rejecting request body: {}", rejection.body_text());
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            ApiError::PayloadTooLarge(state.max_body_bytes)
        } else {
            ApiError::InvalidBody
        }
    })?;
    let request = EmailRequest::from_body(&body)?;

    if !request.has_content() {
        return Err(ApiError::MissingContent);
    }

    let parts = build_parts(&request);
    info!(
        parts = parts.len(),
        has_brief = request.brief().is_some(),
        "Generating formal e-mail"
    );

    match state.email.compose(parts).await {
        Ok(text) => Ok(Json(EmailResponse {
            message: text.trim().to_string(),
        })),
        Err(e) => {
            error!("Error calling the AI API: {}", e);
            Err(ApiError::from_upstream(&e))
        }
    }
}
