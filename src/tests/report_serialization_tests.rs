#[cfg(test)]
mod tests {
    use crate::db::indexes::ExplainSummary;
    use crate::models::{AuthorBookCount, Book, BookSummary, DecadeCount, GenrePriceAverage};
    use mongodb::bson::oid::ObjectId;
    use serde_json::{json, Value};

    #[test]
    fn test_stored_book_renders_object_id_as_extended_json() {
        let id = ObjectId::parse_str("650c1f1e2b9d4a3f8c7e6d5a").unwrap();
        let book = Book {
            id: Some(id),
            ..Book::new("The Hobbit", "J.R.R. Tolkien", "Fantasy", 1937, 20.99, true)
        };

        let rendered = serde_json::to_value(&book).unwrap();

        assert_eq!(rendered["_id"], json!({ "$oid": "650c1f1e2b9d4a3f8c7e6d5a" }));
        assert_eq!(rendered["title"], "The Hobbit");
        assert_eq!(rendered["price"], 20.99);
    }

    #[test]
    fn test_missing_update_result_renders_as_null() {
        let updated: Option<Book> = None;
        assert_eq!(serde_json::to_value(&updated).unwrap(), Value::Null);
    }

    #[test]
    fn test_summary_renders_only_three_fields() {
        let summary = BookSummary {
            title: "1984".to_string(),
            author: "George Orwell".to_string(),
            price: 10.99,
        };

        let rendered = serde_json::to_value(&summary).unwrap();
        let fields = rendered.as_object().unwrap();
        assert_eq!(fields.len(), 3);
        assert!(fields.contains_key("title"));
        assert!(fields.contains_key("author"));
        assert!(fields.contains_key("price"));
    }

    #[test]
    fn test_aggregation_rows_keep_store_field_names() {
        let genre = GenrePriceAverage { genre: "Fantasy".to_string(), average_price: 17.49 };
        let author = AuthorBookCount { author: "Andy Weir".to_string(), book_count: 2 };
        let decade = DecadeCount { decade: 1950, count: 2 };

        assert_eq!(
            serde_json::to_value(&genre).unwrap(),
            json!({ "_id": "Fantasy", "averagePrice": 17.49 })
        );
        assert_eq!(
            serde_json::to_value(&author).unwrap(),
            json!({ "_id": "Andy Weir", "bookCount": 2 })
        );
        assert_eq!(
            serde_json::to_value(&decade).unwrap(),
            json!({ "_id": 1950, "count": 2 })
        );
    }

    #[test]
    fn test_explain_summary_renders_missing_stats_as_null() {
        let summary = ExplainSummary {
            winning_stage: Some("COLLSCAN".to_string()),
            ..ExplainSummary::default()
        };

        let rendered = serde_json::to_value(&summary).unwrap();
        assert_eq!(rendered["winning_stage"], "COLLSCAN");
        assert_eq!(rendered["index_name"], Value::Null);
    }
}
