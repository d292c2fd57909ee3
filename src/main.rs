use tracing::{error, info, warn};

use bookstore_queries::{
    config::Config,
    db::Database,
    errors::{AppError, BookstoreError},
    tour,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| {
            tracing_subscriber::EnvFilter::new("info")
                .add_directive("mongodb=warn".parse().expect("static directive"))
        });

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .init();

    let config = Config::from_env()?;

    let db = match Database::connect(&config).await {
        Ok(db) => db,
        Err(e) => {
            log_store_error(&e);
            return Err(e.into());
        }
    };

    let outcome = tour::run_query_tour(&db).await;

    // Close on both paths before reporting the outcome
    db.close().await;

    match &outcome {
        Ok(()) => info!("All queries completed"),
        Err(e) => {
            match e.downcast_ref::<BookstoreError>() {
                Some(store_error) => log_store_error(store_error),
                None => error!("Query tour failed: {:#}", e),
            }
        }
    }

    outcome
}

fn log_store_error(e: &BookstoreError) {
    error!("{} [{}]: {}", e.user_message(), e.error_code(), e);
    if let Some(action) = e.suggested_action() {
        warn!("{}", action);
    }
}
