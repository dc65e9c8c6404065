//! Storage collaborators for bookmark records.
//!
//! [`BookmarkStore`] is the only surface the access operations talk to. Two
//! implementations are provided: [`LibsqlBookmarkStore`] over the `bookmarks`
//! table and [`MemoryBookmarkStore`] for runs without a database.

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::RwLock;

use super::model::{Bookmark, BookmarkPatch};
use super::serializer::coerce_rating;
use crate::db::Database;

#[async_trait]
pub trait BookmarkStore: Send + Sync {
    /// All records in insertion order.
    async fn list(&self) -> Result<Vec<Bookmark>>;

    async fn find_by_id(&self, id: &str) -> Result<Option<Bookmark>>;

    async fn insert(&self, bookmark: &Bookmark) -> Result<()>;

    /// Returns the number of records changed (0 or 1).
    async fn update_by_id(&self, id: &str, patch: &BookmarkPatch) -> Result<u64>;

    /// Returns the number of records removed (0 or 1).
    async fn delete_by_id(&self, id: &str) -> Result<u64>;
}

pub struct LibsqlBookmarkStore {
    db: Arc<Database>,
}

impl LibsqlBookmarkStore {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn row_to_bookmark(row: &libsql::Row) -> Result<Bookmark> {
        Ok(Bookmark {
            id: row.get(0)?,
            title: row.get(1)?,
            url: row.get(2)?,
            description: row.get::<Option<String>>(3)?.unwrap_or_default(),
            rating: coerce_rating(&row.get_value(4)?)?,
        })
    }
}

#[async_trait]
impl BookmarkStore for LibsqlBookmarkStore {
    async fn list(&self) -> Result<Vec<Bookmark>> {
        let query = r#"
            SELECT id, title, url, description, rating
            FROM bookmarks
            ORDER BY rowid
        "#;

        let mut rows = self.db.connection().query(query, ()).await?;
        let mut bookmarks = Vec::new();

        while let Some(row) = rows.next().await? {
            bookmarks.push(Self::row_to_bookmark(&row)?);
        }

        Ok(bookmarks)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Bookmark>> {
        let query = r#"
            SELECT id, title, url, description, rating
            FROM bookmarks WHERE id = ?
        "#;

        let mut rows = self
            .db
            .connection()
            .query(query, libsql::params![id])
            .await?;

        if let Some(row) = rows.next().await? {
            Ok(Some(Self::row_to_bookmark(&row)?))
        } else {
            Ok(None)
        }
    }

    async fn insert(&self, bookmark: &Bookmark) -> Result<()> {
        let query = r#"
            INSERT INTO bookmarks (id, title, url, description, rating)
            VALUES (?, ?, ?, ?, ?)
        "#;

        self.db
            .connection()
            .execute(
                query,
                libsql::params![
                    bookmark.id.as_str(),
                    bookmark.title.as_str(),
                    bookmark.url.as_str(),
                    bookmark.description.as_str(),
                    bookmark.rating
                ],
            )
            .await
            .map_err(|e| anyhow::anyhow!("failed to insert bookmark {}: {e}", bookmark.id))?;

        Ok(())
    }

    async fn update_by_id(&self, id: &str, patch: &BookmarkPatch) -> Result<u64> {
        let mut updates = Vec::new();
        let mut params: Vec<libsql::Value> = Vec::new();

        if let Some(title) = &patch.title {
            updates.push("title = ?");
            params.push(title.clone().into());
        }
        if let Some(url) = &patch.url {
            updates.push("url = ?");
            params.push(url.clone().into());
        }
        if let Some(description) = &patch.description {
            updates.push("description = ?");
            params.push(description.clone().into());
        }
        if let Some(rating) = patch.rating {
            updates.push("rating = ?");
            params.push(rating.into());
        }

        if updates.is_empty() {
            return Ok(0);
        }

        params.push(id.to_string().into());
        let query = format!("UPDATE bookmarks SET {} WHERE id = ?", updates.join(", "));

        let affected = self.db.connection().execute(&query, params).await?;
        Ok(affected)
    }

    async fn delete_by_id(&self, id: &str) -> Result<u64> {
        let affected = self
            .db
            .connection()
            .execute("DELETE FROM bookmarks WHERE id = ?", libsql::params![id])
            .await?;
        Ok(affected)
    }
}

#[derive(Default)]
pub struct MemoryBookmarkStore {
    bookmarks: RwLock<Vec<Bookmark>>,
}

impl MemoryBookmarkStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bookmarks(bookmarks: Vec<Bookmark>) -> Self {
        Self {
            bookmarks: RwLock::new(bookmarks),
        }
    }
}

#[async_trait]
impl BookmarkStore for MemoryBookmarkStore {
    async fn list(&self) -> Result<Vec<Bookmark>> {
        Ok(self.bookmarks.read().await.clone())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Bookmark>> {
        Ok(self
            .bookmarks
            .read()
            .await
            .iter()
            .find(|b| b.id == id)
            .cloned())
    }

    async fn insert(&self, bookmark: &Bookmark) -> Result<()> {
        let mut bookmarks = self.bookmarks.write().await;
        if bookmarks.iter().any(|b| b.id == bookmark.id) {
            anyhow::bail!("bookmark {} already exists", bookmark.id);
        }
        bookmarks.push(bookmark.clone());
        Ok(())
    }

    async fn update_by_id(&self, id: &str, patch: &BookmarkPatch) -> Result<u64> {
        let mut bookmarks = self.bookmarks.write().await;
        match bookmarks.iter_mut().find(|b| b.id == id) {
            Some(bookmark) => {
                patch.apply_to(bookmark);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete_by_id(&self, id: &str) -> Result<u64> {
        let mut bookmarks = self.bookmarks.write().await;
        let before = bookmarks.len();
        bookmarks.retain(|b| b.id != id);
        Ok((before - bookmarks.len()) as u64)
    }
}
