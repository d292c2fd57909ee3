use mongodb::bson::{doc, Document};

/// Filter matching every record
pub fn all() -> Document {
    doc! {}
}

pub fn by_genre(genre: &str) -> Document {
    doc! { "genre": genre }
}

/// Strictly after `year`; the year itself is excluded
pub fn published_after(year: i32) -> Document {
    doc! { "published_year": { "$gt": year } }
}

pub fn by_author(author: &str) -> Document {
    doc! { "author": author }
}

pub fn by_title(title: &str) -> Document {
    doc! { "title": title }
}

pub fn in_stock_published_after(year: i32) -> Document {
    doc! {
        "in_stock": true,
        "published_year": { "$gt": year },
    }
}

pub fn set_price(new_price: f64) -> Document {
    doc! { "$set": { "price": new_price } }
}

/// Keeps title, author and price and drops `_id`
pub fn summary_projection() -> Document {
    doc! {
        "_id": 0,
        "title": 1,
        "author": 1,
        "price": 1,
    }
}

pub fn price_sort(ascending: bool) -> Document {
    let direction = if ascending { 1 } else { -1 };
    doc! { "price": direction }
}
