use anyhow::Result;
use std::env;

#[derive(Clone, Debug)]
pub struct Config {
    pub mongodb_uri: String,
    pub database_name: String,
    pub books_collection: String,
    pub app_name: String,
    pub server_selection_timeout_secs: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            mongodb_uri: "mongodb://localhost:27017".to_string(),
            database_name: "bookstore".to_string(),
            books_collection: "books".to_string(),
            app_name: "bookstore-queries".to_string(),
            server_selection_timeout_secs: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let defaults = Config::default();

        Ok(Config {
            mongodb_uri: env::var("MONGODB_URI")
                .unwrap_or(defaults.mongodb_uri),
            database_name: env::var("MONGODB_DATABASE")
                .unwrap_or(defaults.database_name),
            books_collection: env::var("BOOKS_COLLECTION")
                .unwrap_or(defaults.books_collection),
            app_name: env::var("MONGODB_APP_NAME")
                .unwrap_or(defaults.app_name),
            server_selection_timeout_secs: env::var("MONGODB_SERVER_SELECTION_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok()),
        })
    }

    /// Same settings pointed at another server, as used by the container-backed tests
    pub fn with_uri(&self, mongodb_uri: impl Into<String>) -> Self {
        Config {
            mongodb_uri: mongodb_uri.into(),
            ..self.clone()
        }
    }
}
