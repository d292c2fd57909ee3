use futures_util::TryStreamExt;
use mongodb::bson::{self, doc, Document};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::db::Database;
use crate::errors::{BookstoreError, Result};
use crate::models::{AuthorBookCount, DecadeCount, GenrePriceAverage};

pub fn average_price_by_genre_pipeline() -> Vec<Document> {
    vec![doc! {
        "$group": {
            "_id": "$genre",
            "averagePrice": { "$avg": "$price" },
        }
    }]
}

/// Ties on the count go to the alphabetically first author
pub fn author_with_most_books_pipeline() -> Vec<Document> {
    vec![
        doc! {
            "$group": {
                "_id": "$author",
                "bookCount": { "$sum": 1 },
            }
        },
        doc! { "$sort": { "bookCount": -1, "_id": 1 } },
        doc! { "$limit": 1 },
    ]
}

/// decade = floor(published_year / 10) * 10, counted per decade in ascending order
pub fn books_by_decade_pipeline() -> Vec<Document> {
    vec![
        doc! { "$project": { "published_year": 1 } },
        doc! {
            "$addFields": {
                "decade": {
                    "$toInt": {
                        "$multiply": [
                            { "$floor": { "$divide": ["$published_year", 10] } },
                            10,
                        ]
                    }
                }
            }
        },
        doc! {
            "$group": {
                "_id": "$decade",
                "count": { "$sum": 1 },
            }
        },
        doc! { "$sort": { "_id": 1 } },
    ]
}

impl Database {
    /// Runs a pipeline server-side and decodes each output row
    async fn run_pipeline<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        pipeline: Vec<Document>,
    ) -> Result<Vec<T>> {
        debug!("{}: {} stage pipeline", operation, pipeline.len());

        let cursor = self
            .books()
            .aggregate(pipeline)
            .await
            .map_err(|e| BookstoreError::query(operation, e))?;

        let rows: Vec<Document> = cursor
            .try_collect()
            .await
            .map_err(|e| BookstoreError::query(operation, e))?;

        rows.into_iter()
            .map(|row| bson::from_document(row).map_err(|e| BookstoreError::decode(operation, e)))
            .collect()
    }

    /// One row per distinct genre, in no particular order
    pub async fn average_price_by_genre(&self) -> Result<Vec<GenrePriceAverage>> {
        self.run_pipeline("average_price_by_genre", average_price_by_genre_pipeline())
            .await
    }

    /// `None` on an empty collection
    pub async fn author_with_most_books(&self) -> Result<Option<AuthorBookCount>> {
        let rows: Vec<AuthorBookCount> = self
            .run_pipeline("author_with_most_books", author_with_most_books_pipeline())
            .await?;
        Ok(rows.into_iter().next())
    }

    pub async fn books_by_decade(&self) -> Result<Vec<DecadeCount>> {
        self.run_pipeline("books_by_decade", books_by_decade_pipeline())
            .await
    }
}
