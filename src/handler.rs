use std::sync::Arc;

use axum::{
    Json,
    extract::{Request, State},
    http::{StatusCode, header},
    middleware::Next,
    response::{IntoResponse, Response},
};

use tracing::info;

use crate::api::UnauthorizedResponse;
use crate::bookmarks::BookmarkStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn BookmarkStore>,
    pub api_token: Arc<str>,
    pub public_url: Arc<str>,
}

pub async fn healthcheck() -> impl IntoResponse {
    info!("got healthcheck request");
    "Hello, world!"
}

fn bearer_token(req: &Request) -> Option<&str> {
    req.headers()
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
}

/// Rejects any request whose `Authorization` header does not carry the
/// configured bearer token.
pub async fn require_bearer_token(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let authorized = matches!(
        bearer_token(&req),
        Some(token) if !token.is_empty() && token == &*state.api_token
    );

    if !authorized {
        tracing::error!("Unauthorized request to path: {}", req.uri().path());
        return (StatusCode::UNAUTHORIZED, Json(UnauthorizedResponse::default())).into_response();
    }

    next.run(req).await
}
