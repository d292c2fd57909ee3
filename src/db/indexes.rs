use mongodb::{
    bson::{doc, Bson, Document},
    IndexModel,
};
use serde::Serialize;
use tracing::info;

use crate::db::Database;
use crate::errors::{BookstoreError, Result};

pub fn title_index_keys() -> Document {
    doc! { "title": 1 }
}

/// Author ascending, newest first within an author
pub fn author_year_index_keys() -> Document {
    doc! { "author": 1, "published_year": -1 }
}

/// The parts of an `executionStats` explain report worth comparing before and
/// after an index exists.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ExplainSummary {
    pub winning_stage: Option<String>,
    pub index_name: Option<String>,
    pub returned: Option<i64>,
    pub docs_examined: Option<i64>,
    pub keys_examined: Option<i64>,
    pub execution_time_millis: Option<i64>,
}

impl ExplainSummary {
    pub fn from_report(report: &Document) -> Self {
        let plan = report
            .get_document("queryPlanner")
            .ok()
            .and_then(|planner| planner.get_document("winningPlan").ok())
            // Slot-based engine nests the classic plan one level down
            .map(|plan| plan.get_document("queryPlan").unwrap_or(plan));

        let stats = report.get_document("executionStats").ok();

        Self {
            winning_stage: plan.and_then(|p| p.get_str("stage").ok()).map(str::to_string),
            index_name: plan.and_then(find_index_name),
            returned: stats.and_then(|s| read_count(s, "nReturned")),
            docs_examined: stats.and_then(|s| read_count(s, "totalDocsExamined")),
            keys_examined: stats.and_then(|s| read_count(s, "totalKeysExamined")),
            execution_time_millis: stats.and_then(|s| read_count(s, "executionTimeMillis")),
        }
    }

    pub fn uses_index(&self) -> bool {
        self.index_name.is_some()
    }
}

/// Walks `inputStage` links down to the first index scan
fn find_index_name(stage: &Document) -> Option<String> {
    if let Ok(name) = stage.get_str("indexName") {
        return Some(name.to_string());
    }
    if let Ok(input) = stage.get_document("inputStage") {
        return find_index_name(input);
    }
    stage
        .get_array("inputStages")
        .ok()?
        .iter()
        .filter_map(Bson::as_document)
        .find_map(find_index_name)
}

fn read_count(document: &Document, key: &str) -> Option<i64> {
    match document.get(key)? {
        Bson::Int32(v) => Some(i64::from(*v)),
        Bson::Int64(v) => Some(*v),
        Bson::Double(v) => Some(*v as i64),
        _ => None,
    }
}

impl Database {
    async fn create_index(&self, operation: &'static str, keys: Document) -> Result<String> {
        let model = IndexModel::builder().keys(keys).build();

        let created = self
            .books()
            .create_index(model)
            .await
            .map_err(|e| BookstoreError::query(operation, e))?;

        info!("Index '{}' ready on '{}'", created.index_name, self.collection_name());
        Ok(created.index_name)
    }

    /// Creating an index that already exists is a no-op on the server
    pub async fn ensure_index_title(&self) -> Result<String> {
        self.create_index("ensure_index_title", title_index_keys()).await
    }

    pub async fn ensure_index_author_year(&self) -> Result<String> {
        self.create_index("ensure_index_author_year", author_year_index_keys()).await
    }

    pub async fn list_index_names(&self) -> Result<Vec<String>> {
        self.books()
            .list_index_names()
            .await
            .map_err(|e| BookstoreError::query("list_index_names", e))
    }

    /// Raw `executionStats` explain report for `find(filter)`; diagnostic only
    pub async fn explain_query(&self, filter: Document) -> Result<Document> {
        let command = doc! {
            "explain": {
                "find": self.collection_name(),
                "filter": filter,
            },
            "verbosity": "executionStats",
        };

        self.database()
            .run_command(command)
            .await
            .map_err(|e| BookstoreError::query("explain_query", e))
    }
}
