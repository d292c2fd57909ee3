use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{info, warn};

use crate::db::books::filters;
use crate::db::indexes::ExplainSummary;
use crate::db::Database;
use crate::models::DEFAULT_PAGE_SIZE;

pub const GENRE_TO_FIND: &str = "Fantasy";
pub const YEAR_THRESHOLD: i32 = 1950;
pub const AUTHOR_TO_FIND: &str = "Harper Lee";
pub const TITLE_TO_REPRICE: &str = "The Hobbit";
pub const NEW_PRICE: f64 = 20.99;
pub const TITLE_TO_DELETE: &str = "Animal Farm";
pub const RECENT_YEAR_THRESHOLD: i32 = 2010;
pub const TITLE_TO_EXPLAIN: &str = "The Hobbit";

/// Logs one labelled result as pretty JSON
fn report<T: Serialize + ?Sized>(label: &str, value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(rendered) => info!("{}:\n{}", label, rendered),
        Err(e) => warn!("{}: could not render result: {}", label, e),
    }
}

/// Runs the whole catalogue of queries once, in order.
///
/// Each step waits for the previous one; the first failure stops the tour and
/// is returned to the caller, which still owns the connection.
pub async fn run_query_tour(db: &Database) -> Result<()> {
    info!("Running query tour against '{}'", db.collection_name());

    // Basic queries
    let in_genre = db.find_by_genre(GENRE_TO_FIND).await
        .context("finding books by genre")?;
    report(&format!("Books in genre \"{}\"", GENRE_TO_FIND), &in_genre);

    let after_year = db.find_by_year_after(YEAR_THRESHOLD).await
        .context("finding books by publication year")?;
    report(&format!("Books published after {}", YEAR_THRESHOLD), &after_year);

    let by_author = db.find_by_author(AUTHOR_TO_FIND).await
        .context("finding books by author")?;
    report(&format!("Books by author \"{}\"", AUTHOR_TO_FIND), &by_author);

    let updated = db.update_price_by_title(TITLE_TO_REPRICE, NEW_PRICE).await
        .context("updating a book price")?;
    if updated.is_none() {
        warn!("No book titled \"{}\" to update", TITLE_TO_REPRICE);
    }
    report("Updated book", &updated);

    let deleted = db.delete_by_title(TITLE_TO_DELETE).await
        .context("deleting a book")?;
    if deleted.is_none() {
        warn!("No book titled \"{}\" to delete", TITLE_TO_DELETE);
    }
    report("Deleted book", &deleted);

    // Advanced queries
    let in_stock = db.find_in_stock_after(RECENT_YEAR_THRESHOLD).await
        .context("finding in-stock books")?;
    report(
        &format!("Books in stock and published after {}", RECENT_YEAR_THRESHOLD),
        &in_stock,
    );

    let projected = db.find_projected().await
        .context("projecting books")?;
    report("Books (title, author, price)", &projected);

    let ascending = db.find_sorted_by_price(true).await
        .context("sorting books by price")?;
    report("Books sorted by price (ascending)", &ascending);

    let descending = db.find_sorted_by_price(false).await
        .context("sorting books by price")?;
    report("Books sorted by price (descending)", &descending);

    let page_number = 1;
    let page = db.find_page(page_number, DEFAULT_PAGE_SIZE).await
        .context("paginating books")?;
    report(&format!("Books on page {}", page_number), &page);

    // Aggregation pipelines
    let averages = db.average_price_by_genre().await
        .context("averaging prices by genre")?;
    report("Average price of books by genre", &averages);

    let top_author = db.author_with_most_books().await
        .context("finding the most prolific author")?;
    report("Author with the most books", &top_author);

    let decades = db.books_by_decade().await
        .context("grouping books by decade")?;
    report("Books grouped by publication decade", &decades);

    // Indexing
    let explain_filter = filters::by_title(TITLE_TO_EXPLAIN);
    let before = db.explain_query(explain_filter.clone()).await
        .context("explaining the title query")?;
    report(
        &format!("Title query on \"{}\" before indexing", TITLE_TO_EXPLAIN),
        &ExplainSummary::from_report(&before),
    );

    let title_index = db.ensure_index_title().await
        .context("creating the title index")?;
    info!("Index created on title field: {}", title_index);

    let compound_index = db.ensure_index_author_year().await
        .context("creating the author/year index")?;
    info!("Compound index created on author and published_year fields: {}", compound_index);

    let after = db.explain_query(explain_filter).await
        .context("explaining the title query")?;
    let summary = ExplainSummary::from_report(&after);
    report(
        &format!("Title query on \"{}\" after indexing", TITLE_TO_EXPLAIN),
        &summary,
    );
    report("Full explain report", &after);

    let remaining = db.count_books().await.context("counting books")?;
    info!("Query tour finished, {} books remain in '{}'", remaining, db.collection_name());

    Ok(())
}
