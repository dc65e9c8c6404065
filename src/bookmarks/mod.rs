//! Bookmarks Module
//!
//! Stores web bookmarks (title, url, description and a 0-5 rating) and serves
//! them over a small JSON API.
//!
//! # Layout
//!
//! - `validator` decides whether a create or update payload is acceptable
//! - `serializer` turns a stored record into its client-safe form
//! - `service` runs list/get/create/update/delete against a [`BookmarkStore`]
//! - `handler` and `routes` map those outcomes onto HTTP
//!
//! # Usage
//!
//! ```rust,ignore
//! use bookmarks_api::bookmarks;
//!
//! let app = Router::new()
//!     .merge(bookmarks::routes())
//!     .with_state(app_state);
//!
//! let lib = bookmarks::Bookmarks::new(store.as_ref());
//! let all = lib.list_all().await?;
//! ```

mod handler;
mod model;
mod routes;
mod serializer;
mod service;
mod store;
mod validator;

pub use model::{Bookmark, BookmarkPatch, BookmarkPayload, NewBookmark};
pub use routes::routes;
pub use serializer::{SerializedBookmark, coerce_rating, escape_html, serialize, serialize_all};
pub use service::Bookmarks;
pub use store::{BookmarkStore, LibsqlBookmarkStore, MemoryBookmarkStore};
pub use validator::{ValidationMode, is_web_uri, validate, validate_new, validate_patch};

/// Returns the migrations for the bookmarks table, applied at startup.
pub fn migrations() -> &'static [(&'static str, &'static str)] {
    &[(
        "bookmarks_001_schema.sql",
        include_str!("migrations/001_schema.sql"),
    )]
}
