//! Search and filter terms

mod parser;

pub use parser::{TermParseError, parse_search_clause};

use log::debug;

use super::Operator;

/// One parsed search clause
#[derive(Debug, Clone, PartialEq)]
pub struct SearchTerm {
    /// Logical field name as the client wrote it
    pub field: String,
    /// Operator token as the client wrote it, `eq` when omitted
    pub operator: String,
    /// Raw value, everything after the operator
    pub value: String,
}

/// Raw values supplied for one filterable field
#[derive(Debug, Clone, PartialEq)]
pub struct FilterTerm {
    pub field: String,
    pub entity_field: &'static str,
    pub operator: Operator,
    pub values: Vec<String>,
}

impl FilterTerm {
    pub fn new(field: impl Into<String>, entity_field: &'static str, values: Vec<String>) -> Self {
        Self {
            field: field.into(),
            entity_field,
            operator: Operator::Equal,
            values,
        }
    }
}

/// Parse a raw search query into terms.
///
/// Only one clause is supported. An empty or unparseable query yields no
/// terms, which matches everything.
pub fn parse_search_query(query: Option<&str>) -> Vec<SearchTerm> {
    let query = match query.map(str::trim) {
        Some(query) if !query.is_empty() => query,
        _ => return Vec::new(),
    };

    match parse_search_clause(query) {
        Ok(term) => vec![term],
        Err(e) => {
            debug!("Ignoring unparseable search query '{}': {}", query, e);
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_query() {
        assert!(parse_search_query(None).is_empty());
    }

    #[test]
    fn test_blank_query() {
        assert!(parse_search_query(Some("   ")).is_empty());
    }

    #[test]
    fn test_unparseable_query() {
        assert!(parse_search_query(Some("shoe")).is_empty());
    }

    #[test]
    fn test_query_is_trimmed() {
        let terms = parse_search_query(Some("  price-lt-20 "));
        assert_eq!(terms.len(), 1);
        assert_eq!(terms[0].field, "price");
        assert_eq!(terms[0].operator, "lt");
        assert_eq!(terms[0].value, "20");
    }

    #[test]
    fn test_filter_term_is_equality() {
        let term = FilterTerm::new("brandId", "brand_id", vec!["1".to_string()]);
        assert_eq!(term.operator, Operator::Equal);
        assert_eq!(term.entity_field, "brand_id");
    }
}
