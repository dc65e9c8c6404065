use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::error::ValidationError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bookmark {
    pub id: String,
    pub title: String,
    pub url: String,
    pub description: String,
    pub rating: i64,
}

/// Request body for both `POST /bookmarks` and `PATCH /bookmarks/:id`.
///
/// Fields stay untyped until validation so that a wrong type is reported with
/// the same field-specific message as a wrong value. A JSON `null` is treated
/// as an absent field.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BookmarkPayload {
    #[serde(default)]
    pub title: Option<JsonValue>,
    #[serde(default)]
    pub url: Option<JsonValue>,
    #[serde(default)]
    pub description: Option<JsonValue>,
    #[serde(default)]
    pub rating: Option<JsonValue>,
}

impl BookmarkPayload {
    /// Reads a raw request body. An empty body is an empty payload, so it is
    /// reported by the field rules rather than as a parse failure.
    pub fn from_body(body: &[u8]) -> Result<Self, ValidationError> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }
        serde_json::from_slice(body).map_err(|_| ValidationError::InvalidBody)
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.url.is_none() && self.description.is_none() && self.rating.is_none()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewBookmark {
    pub title: String,
    pub url: String,
    pub description: String,
    pub rating: i64,
}

impl NewBookmark {
    pub fn into_bookmark(self, id: String) -> Bookmark {
        Bookmark {
            id,
            title: self.title,
            url: self.url,
            description: self.description,
            rating: self.rating,
        }
    }
}

/// Normalized partial update. `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookmarkPatch {
    pub title: Option<String>,
    pub url: Option<String>,
    pub description: Option<String>,
    pub rating: Option<i64>,
}

impl BookmarkPatch {
    pub fn apply_to(&self, bookmark: &mut Bookmark) {
        if let Some(title) = &self.title {
            bookmark.title = title.clone();
        }
        if let Some(url) = &self.url {
            bookmark.url = url.clone();
        }
        if let Some(description) = &self.description {
            bookmark.description = description.clone();
        }
        if let Some(rating) = self.rating {
            bookmark.rating = rating;
        }
    }
}
