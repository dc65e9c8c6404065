use uuid::Uuid;

use super::model::{Bookmark, BookmarkPatch, NewBookmark};
use super::store::BookmarkStore;
use crate::error::BookmarkError;

/// Bookmark access operations over an injected storage collaborator.
///
/// Payloads reaching this type are already validated; storage failures are
/// returned as [`BookmarkError::Storage`] untouched.
pub struct Bookmarks<'a> {
    store: &'a dyn BookmarkStore,
}

impl<'a> Bookmarks<'a> {
    pub fn new(store: &'a dyn BookmarkStore) -> Self {
        Self { store }
    }

    pub async fn list_all(&self) -> Result<Vec<Bookmark>, BookmarkError> {
        Ok(self.store.list().await?)
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Option<Bookmark>, BookmarkError> {
        Ok(self.store.find_by_id(id).await?)
    }

    pub async fn create(&self, input: NewBookmark) -> Result<Bookmark, BookmarkError> {
        let bookmark = input.into_bookmark(Uuid::new_v4().to_string());
        self.store.insert(&bookmark).await?;
        Ok(bookmark)
    }

    pub async fn update(&self, id: &str, patch: BookmarkPatch) -> Result<u64, BookmarkError> {
        let affected = self.store.update_by_id(id, &patch).await?;
        if affected == 0 {
            return Err(BookmarkError::NotFound);
        }
        Ok(affected)
    }

    pub async fn delete(&self, id: &str) -> Result<u64, BookmarkError> {
        Ok(self.store.delete_by_id(id).await?)
    }
}
