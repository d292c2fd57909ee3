use futures_util::TryStreamExt;
use mongodb::{
    bson::Document,
    options::FindOptions,
};
use tracing::debug;

use crate::db::Database;
use crate::errors::{BookstoreError, Result};
use crate::models::{Book, BookSummary, PageRequest};
use super::filters;

impl Database {
    /// Runs a find and drains the cursor into memory
    async fn collect_books(
        &self,
        operation: &'static str,
        filter: Document,
        options: Option<FindOptions>,
    ) -> Result<Vec<Book>> {
        debug!("{}: filter {}", operation, filter);

        let cursor = self
            .books()
            .find(filter)
            .with_options(options)
            .await
            .map_err(|e| BookstoreError::query(operation, e))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| BookstoreError::query(operation, e))
    }

    pub async fn find_by_genre(&self, genre: &str) -> Result<Vec<Book>> {
        self.collect_books("find_by_genre", filters::by_genre(genre), None).await
    }

    /// Books published strictly after `year`
    pub async fn find_by_year_after(&self, year: i32) -> Result<Vec<Book>> {
        self.collect_books("find_by_year_after", filters::published_after(year), None).await
    }

    pub async fn find_by_author(&self, author: &str) -> Result<Vec<Book>> {
        self.collect_books("find_by_author", filters::by_author(author), None).await
    }

    pub async fn find_by_title(&self, title: &str) -> Result<Vec<Book>> {
        self.collect_books("find_by_title", filters::by_title(title), None).await
    }

    pub async fn find_in_stock_after(&self, year: i32) -> Result<Vec<Book>> {
        self.collect_books(
            "find_in_stock_after",
            filters::in_stock_published_after(year),
            None,
        )
        .await
    }

    /// Every book reduced to title, author and price
    pub async fn find_projected(&self) -> Result<Vec<BookSummary>> {
        let mut options = FindOptions::default();
        options.projection = Some(filters::summary_projection());

        let cursor = self
            .books()
            .clone_with_type::<BookSummary>()
            .find(filters::all())
            .with_options(options)
            .await
            .map_err(|e| BookstoreError::query("find_projected", e))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| BookstoreError::query("find_projected", e))
    }

    pub async fn find_sorted_by_price(&self, ascending: bool) -> Result<Vec<Book>> {
        let mut options = FindOptions::default();
        options.sort = Some(filters::price_sort(ascending));

        self.collect_books("find_sorted_by_price", filters::all(), Some(options)).await
    }

    /// One page in the store's natural order
    pub async fn find_page(&self, page_number: u64, page_size: u64) -> Result<Vec<Book>> {
        let page = PageRequest::new(page_number, page_size);
        if page.page_size == 0 {
            // A zero limit means "no limit" to the server
            return Ok(Vec::new());
        }

        let mut options = FindOptions::default();
        options.skip = Some(page.skip());
        options.limit = Some(page.limit());

        self.collect_books("find_page", filters::all(), Some(options)).await
    }
}
