use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::api::ErrorResponse;

/// Rejections produced while checking a bookmark payload. The `Display` text is
/// the message sent back to the client.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("'{0}' is required")]
    MissingField(&'static str),
    #[error("'{0}' must be a string")]
    InvalidText(&'static str),
    #[error("'rating' must be a number between 0 and 5")]
    InvalidRating,
    #[error("'url' must be a valid URL")]
    InvalidUrl,
    #[error("Request body must contain either 'title', 'url', 'description', 'rating'")]
    EmptyUpdate,
    #[error("Request body must be a JSON object")]
    InvalidBody,
}

#[derive(Debug, thiserror::Error)]
pub enum BookmarkError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Bookmark not found")]
    NotFound,
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

impl IntoResponse for BookmarkError {
    fn into_response(self) -> Response {
        use BookmarkError::*;
        match self {
            Validation(ValidationError::EmptyUpdate) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::new(&ValidationError::EmptyUpdate.to_string())),
            )
                .into_response(),
            Validation(e) => (StatusCode::BAD_REQUEST, e.to_string()).into_response(),
            NotFound => (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse::new("Bookmark not found")),
            )
                .into_response(),
            Storage(e) => {
                tracing::error!(error = %crate::unpack_error(&*e), "storage failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse::new("Internal server error")),
                )
                    .into_response()
            }
        }
    }
}
