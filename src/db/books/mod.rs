// Book collection operations organized into focused modules

pub mod filters;
mod crud;
mod search;
