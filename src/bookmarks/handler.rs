//! HTTP Handlers for the bookmarks API

use axum::{
    Json,
    body::Bytes,
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

use super::model::BookmarkPayload;
use super::serializer::{serialize, serialize_all};
use super::service::Bookmarks;
use super::validator::{validate_new, validate_patch};
use crate::error::BookmarkError;
use crate::handler::AppState;

fn no_content() -> Response {
    StatusCode::NO_CONTENT.into_response()
}

fn not_found(id: &str) -> Response {
    tracing::error!("Bookmark with id {} not found.", id);
    BookmarkError::NotFound.into_response()
}

pub async fn list_bookmarks(State(state): State<AppState>) -> Response {
    let lib = Bookmarks::new(state.store.as_ref());

    match lib.list_all().await {
        Ok(bookmarks) => (StatusCode::OK, Json(serialize_all(&bookmarks))).into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn create_bookmark(State(state): State<AppState>, body: Bytes) -> Response {
    let input = match BookmarkPayload::from_body(&body).and_then(|payload| validate_new(&payload)) {
        Ok(input) => input,
        Err(e) => {
            tracing::error!("rejected bookmark: {}", e);
            return BookmarkError::from(e).into_response();
        }
    };

    let lib = Bookmarks::new(state.store.as_ref());
    match lib.create(input).await {
        Ok(bookmark) => {
            tracing::info!("Bookmark with id {} created", bookmark.id);
            let location = format!("{}/bookmarks/{}", state.public_url.trim_end_matches('/'), bookmark.id);
            (
                StatusCode::CREATED,
                [(header::LOCATION, location)],
                Json(serialize(&bookmark)),
            )
                .into_response()
        }
        Err(e) => e.into_response(),
    }
}

pub async fn get_bookmark(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let lib = Bookmarks::new(state.store.as_ref());

    match lib.get_by_id(&id).await {
        Ok(Some(bookmark)) => (StatusCode::OK, Json(serialize(&bookmark))).into_response(),
        Ok(None) => not_found(&id),
        Err(e) => e.into_response(),
    }
}

pub async fn update_bookmark(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Response {
    let patch = match BookmarkPayload::from_body(&body).and_then(|payload| validate_patch(&payload)) {
        Ok(patch) => patch,
        Err(e) => {
            tracing::error!("rejected update for bookmark {}: {}", id, e);
            return BookmarkError::from(e).into_response();
        }
    };

    let lib = Bookmarks::new(state.store.as_ref());
    match lib.update(&id, patch).await {
        Ok(_) => {
            tracing::info!("Bookmark with id {} updated", id);
            no_content()
        }
        Err(BookmarkError::NotFound) => not_found(&id),
        Err(e) => e.into_response(),
    }
}

pub async fn delete_bookmark(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let lib = Bookmarks::new(state.store.as_ref());

    match lib.delete(&id).await {
        Ok(0) => not_found(&id),
        Ok(_) => {
            tracing::info!("Bookmark with id {} deleted.", id);
            no_content()
        }
        Err(e) => e.into_response(),
    }
}
