//! Test utilities for running the book queries against a real MongoDB server
//!
//! `TestContext` starts a throwaway MongoDB container, connects to it with a
//! collection name unique to the test, and loads a small known fixture.

#[cfg(any(test, feature = "test-utils"))]
use crate::{config::Config, db::Database, models::Book};
#[cfg(any(test, feature = "test-utils"))]
use testcontainers::{runners::AsyncRunner, ContainerAsync};
#[cfg(any(test, feature = "test-utils"))]
use testcontainers_modules::mongo::Mongo;

/// Known records the integration tests assert against
#[cfg(any(test, feature = "test-utils"))]
pub fn fixture_books() -> Vec<Book> {
    vec![
        Book::new("The Hobbit", "J.R.R. Tolkien", "Fantasy", 1937, 14.99, true),
        Book::new("The Lord of the Rings", "J.R.R. Tolkien", "Fantasy", 1954, 19.99, true),
        Book::new("Animal Farm", "George Orwell", "Political Satire", 1945, 8.50, false),
        Book::new("1984", "George Orwell", "Dystopian", 1949, 10.99, true),
        Book::new("To Kill a Mockingbird", "Harper Lee", "Fiction", 1960, 12.99, true),
        Book::new("I, Robot", "Isaac Asimov", "Science Fiction", 1950, 9.49, true),
        Book::new("The Midnight Library", "Matt Haig", "Fiction", 2020, 15.99, true),
        Book::new("The Martian", "Andy Weir", "Science Fiction", 2011, 13.99, false),
    ]
}

/// A connected `Database` backed by its own MongoDB container
#[cfg(any(test, feature = "test-utils"))]
pub struct TestContext {
    pub db: Database,
    pub config: Config,
    container: ContainerAsync<Mongo>,
}

#[cfg(any(test, feature = "test-utils"))]
impl TestContext {
    /// Container plus the standard fixture
    pub async fn new() -> Self {
        Self::with_books(&fixture_books()).await
    }

    /// Container plus exactly the given records
    pub async fn with_books(books: &[Book]) -> Self {
        let container = Mongo::default()
            .start()
            .await
            .expect("Failed to start mongo container");

        let port = container
            .get_host_port_ipv4(27017)
            .await
            .expect("Failed to get mongo port");

        let config = Config {
            database_name: "bookstore_test".to_string(),
            books_collection: format!("books_{}", uuid::Uuid::new_v4().simple()),
            app_name: "bookstore-queries-tests".to_string(),
            server_selection_timeout_secs: Some(10),
            ..Config::default()
        }
        .with_uri(format!("mongodb://127.0.0.1:{}", port));

        let db = Database::connect(&config)
            .await
            .expect("Failed to connect to test database");

        db.insert_books(books)
            .await
            .expect("Failed to load fixture books");

        Self { db, config, container }
    }

    /// Drops the test collection and closes the client before the container goes away
    pub async fn cleanup(self) {
        if let Err(e) = self.db.books().drop().await {
            eprintln!("Failed to drop test collection: {}", e);
        }
        self.db.close().await;
        drop(self.container);
    }
}
