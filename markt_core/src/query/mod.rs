//! Declarative search and filter engine
//!
//! This module turns client query strings into predicates over entities:
//! - Operator sets per field kind, with value parsing and comparisons
//! - Field metadata declared by result shapes
//! - Search term parsing and filter terms
//! - Predicate building and composition onto an entity query
//! - Search/filter options consumed by listing services

mod fields;
mod operators;
mod options;
mod predicate;
mod query_errors;
mod term;
mod types;

// Re-export all public types
pub use fields::*;
pub use operators::*;
pub use options::*;
pub use predicate::*;
pub use query_errors::QueryError;
pub use term::*;
pub use types::*;
