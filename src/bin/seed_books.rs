use anyhow::{Context, Result};
use clap::{Arg, Command};

use bookstore_queries::{
    config::Config,
    db::Database,
    seed,
};

#[tokio::main]
async fn main() -> Result<()> {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| {
            tracing_subscriber::EnvFilter::new("info")
                .add_directive("mongodb=warn".parse().unwrap())
        });

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .init();

    let matches = Command::new("seed_books")
        .about("Load the sample book catalogue into MongoDB")
        .arg(
            Arg::new("force")
                .help("Remove existing books before seeding")
                .long("force")
                .short('f')
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("collection")
                .help("Collection to seed (defaults to BOOKS_COLLECTION)")
                .long("collection")
                .short('c')
                .value_name("NAME"),
        )
        .get_matches();

    let force = matches.get_flag("force");

    let mut config = Config::from_env()?;
    if let Some(collection) = matches.get_one::<String>("collection") {
        config.books_collection = collection.clone();
    }

    let db = Database::connect(&config).await?;
    let outcome = seed::seed_books(&db, force).await.context("seeding books");
    db.close().await;

    let inserted = outcome?;
    if inserted == 0 {
        println!("Nothing seeded; rerun with --force to replace the existing books");
    } else {
        println!("Seeded {} books into {}.{}", inserted, config.database_name, config.books_collection);
    }

    Ok(())
}
