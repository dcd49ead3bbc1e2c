//! Markt core: a declarative search and filter engine for product listings.
//!
//! Result shapes declare which of their fields clients may search or filter
//! on. Client query strings are parsed into terms, and terms become predicates
//! composed onto an entity query.

pub mod catalog;
mod entity;
pub mod query;

pub use entity::{Entity, FieldType, FieldValue};
