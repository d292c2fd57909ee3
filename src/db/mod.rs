use mongodb::{
    bson::doc,
    options::ClientOptions,
    Client, Collection,
};
use std::time::Duration;
use tracing::{debug, info};

use crate::config::Config;
use crate::errors::{redact_uri, BookstoreError, Result};
use crate::models::Book;

pub mod books;
pub mod aggregations;
pub mod indexes;

/// Handle to the bookstore database, passed explicitly to every query
#[derive(Clone)]
pub struct Database {
    client: Client,
    database: mongodb::Database,
    books: Collection<Book>,
}

impl Database {
    /// Opens a client and pings the server so an unreachable store fails here
    pub async fn connect(config: &Config) -> Result<Self> {
        let mut options = ClientOptions::parse(&config.mongodb_uri)
            .await
            .map_err(|e| BookstoreError::connection(&config.mongodb_uri, e))?;
        options.app_name = Some(config.app_name.clone());
        if let Some(secs) = config.server_selection_timeout_secs {
            options.server_selection_timeout = Some(Duration::from_secs(secs));
        }

        let client = Client::with_options(options)
            .map_err(|e| BookstoreError::connection(&config.mongodb_uri, e))?;

        client
            .database("admin")
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(|e| BookstoreError::connection(&config.mongodb_uri, e))?;

        info!(
            "Connected to MongoDB at {} (database '{}', collection '{}')",
            redact_uri(&config.mongodb_uri),
            config.database_name,
            config.books_collection
        );

        let database = client.database(&config.database_name);
        let books = database.collection::<Book>(&config.books_collection);

        Ok(Self { client, database, books })
    }

    /// Releases the client; pending operations are allowed to finish first
    pub async fn close(self) {
        debug!("Closing MongoDB client");
        self.client.shutdown().await;
        info!("MongoDB connection closed");
    }

    pub fn books(&self) -> &Collection<Book> {
        &self.books
    }

    pub fn database(&self) -> &mongodb::Database {
        &self.database
    }

    pub fn collection_name(&self) -> &str {
        self.books.name()
    }
}
