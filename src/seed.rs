use tracing::info;

use crate::db::Database;
use crate::errors::Result;
use crate::models::Book;

/// Sample catalogue the query tour is written against
pub fn sample_books() -> Vec<Book> {
    vec![
        Book::new("To Kill a Mockingbird", "Harper Lee", "Fiction", 1960, 12.99, true),
        Book::new("1984", "George Orwell", "Dystopian", 1949, 10.99, true),
        Book::new("The Great Gatsby", "F. Scott Fitzgerald", "Fiction", 1925, 9.99, true),
        Book::new("Brave New World", "Aldous Huxley", "Dystopian", 1932, 11.50, false),
        Book::new("The Hobbit", "J.R.R. Tolkien", "Fantasy", 1937, 14.99, true),
        Book::new("The Catcher in the Rye", "J.D. Salinger", "Fiction", 1951, 8.99, true),
        Book::new("Pride and Prejudice", "Jane Austen", "Romance", 1813, 7.99, true),
        Book::new("The Lord of the Rings", "J.R.R. Tolkien", "Fantasy", 1954, 19.99, true),
        Book::new("Animal Farm", "George Orwell", "Political Satire", 1945, 8.50, false),
        Book::new("The Alchemist", "Paulo Coelho", "Fiction", 1988, 10.99, true),
        Book::new("Moby Dick", "Herman Melville", "Adventure", 1851, 12.50, false),
        Book::new("Wuthering Heights", "Emily Brontë", "Gothic Fiction", 1847, 9.99, true),
        Book::new("The Martian", "Andy Weir", "Science Fiction", 2011, 13.99, false),
        Book::new("The Midnight Library", "Matt Haig", "Fiction", 2020, 15.99, true),
        Book::new("Project Hail Mary", "Andy Weir", "Science Fiction", 2021, 18.99, true),
    ]
}

/// Loads the sample catalogue.
///
/// A collection that already holds records is left alone unless `force` is
/// set, in which case it is emptied first.
pub async fn seed_books(db: &Database, force: bool) -> Result<usize> {
    let existing = db.count_books().await?;

    if existing > 0 {
        if !force {
            info!("Collection '{}' already holds {} books, skipping seed", db.collection_name(), existing);
            return Ok(0);
        }
        db.clear_books().await?;
    }

    let inserted = db.insert_books(&sample_books()).await?;
    info!("Seeded {} books into '{}'", inserted, db.collection_name());
    Ok(inserted)
}
