pub mod config;
pub mod db;
pub mod errors;
pub mod models;
pub mod seed;
pub mod test_utils;
pub mod tour;

#[cfg(test)]
mod tests;
