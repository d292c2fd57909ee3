use serde::{Deserialize, Serialize};

// Aggregation rows keep the grouping key in `_id`, the way `$group` emits it.

/// Mean price of the books in one genre
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenrePriceAverage {
    #[serde(rename = "_id")]
    pub genre: String,
    #[serde(rename = "averagePrice")]
    pub average_price: f64,
}

/// Number of books written by one author
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorBookCount {
    #[serde(rename = "_id")]
    pub author: String,
    #[serde(rename = "bookCount")]
    pub book_count: i64,
}

/// Number of books published in one decade, e.g. 1950 for 1950..=1959
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecadeCount {
    #[serde(rename = "_id")]
    pub decade: i32,
    pub count: i64,
}

/// First year of the decade a year falls in, rounding towards negative infinity
pub fn decade_of(year: i32) -> i32 {
    year.div_euclid(10) * 10
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{self, doc};

    #[test]
    fn test_decade_of() {
        assert_eq!(decade_of(1945), 1940);
        assert_eq!(decade_of(1950), 1950);
        assert_eq!(decade_of(1959), 1950);
        assert_eq!(decade_of(2010), 2010);
        assert_eq!(decade_of(-5), -10);
    }

    #[test]
    fn test_group_rows_decode_from_id() {
        let genre: GenrePriceAverage =
            bson::from_document(doc! { "_id": "Fantasy", "averagePrice": 17.24 }).unwrap();
        assert_eq!(genre.genre, "Fantasy");
        assert_eq!(genre.average_price, 17.24);

        // $sum: 1 yields an int32
        let author: AuthorBookCount =
            bson::from_document(doc! { "_id": "George Orwell", "bookCount": 2_i32 }).unwrap();
        assert_eq!(author.author, "George Orwell");
        assert_eq!(author.book_count, 2);

        let decade: DecadeCount =
            bson::from_document(doc! { "_id": 1950_i32, "count": 2_i32 }).unwrap();
        assert_eq!(decade, DecadeCount { decade: 1950, count: 2 });
    }
}
