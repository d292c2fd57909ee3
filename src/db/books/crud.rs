use mongodb::options::{FindOneAndUpdateOptions, ReturnDocument};
use tracing::{debug, info};

use crate::db::Database;
use crate::errors::{BookstoreError, Result};
use crate::models::Book;
use super::filters;

impl Database {
    /// Sets the price of one book with the given title.
    ///
    /// Returns the record as it reads after the update, or `None` when no
    /// book carries that title.
    pub async fn update_price_by_title(&self, title: &str, new_price: f64) -> Result<Option<Book>> {
        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        let updated = self
            .books()
            .find_one_and_update(filters::by_title(title), filters::set_price(new_price))
            .with_options(options)
            .await
            .map_err(|e| BookstoreError::query("update_price_by_title", e))?;

        match &updated {
            Some(book) => debug!("Updated price of '{}' to {}", book.title, book.price),
            None => debug!("No book titled '{}' to update", title),
        }

        Ok(updated)
    }

    /// Removes one book with the given title and hands back what was removed
    pub async fn delete_by_title(&self, title: &str) -> Result<Option<Book>> {
        let deleted = self
            .books()
            .find_one_and_delete(filters::by_title(title))
            .await
            .map_err(|e| BookstoreError::query("delete_by_title", e))?;

        if deleted.is_none() {
            debug!("No book titled '{}' to delete", title);
        }

        Ok(deleted)
    }

    pub async fn count_books(&self) -> Result<u64> {
        self.books()
            .count_documents(filters::all())
            .await
            .map_err(|e| BookstoreError::query("count_books", e))
    }

    /// Bulk insert used by the seeder and the test fixtures
    pub async fn insert_books(&self, books: &[Book]) -> Result<usize> {
        if books.is_empty() {
            return Ok(0);
        }

        let result = self
            .books()
            .insert_many(books)
            .await
            .map_err(|e| BookstoreError::query("insert_books", e))?;

        info!("Inserted {} books into '{}'", result.inserted_ids.len(), self.collection_name());
        Ok(result.inserted_ids.len())
    }

    /// Deletes every record, leaving the collection and its indexes in place
    pub async fn clear_books(&self) -> Result<u64> {
        let result = self
            .books()
            .delete_many(filters::all())
            .await
            .map_err(|e| BookstoreError::query("clear_books", e))?;

        info!("Removed {} books from '{}'", result.deleted_count, self.collection_name());
        Ok(result.deleted_count)
    }
}
