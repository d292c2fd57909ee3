// Re-export all model types for ease of use

pub mod book;
pub mod aggregates;
pub mod query;

// Re-export commonly used types
pub use book::*;
pub use aggregates::*;
pub use query::*;
