//! Parser for search clauses using pest

use pest::Parser;
use pest::iterators::{Pair, Pairs};
use pest_derive::Parser;

use super::SearchTerm;
use crate::query::Operator;

#[derive(Parser)]
#[grammar = "query/term/grammar.pest"]
struct SearchClauseParser;

/// Error type for search clause parsing
#[derive(Debug, Clone, PartialEq)]
pub enum TermParseError {
    SyntaxError(String),
}

impl std::fmt::Display for TermParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TermParseError::SyntaxError(msg) => write!(f, "Syntax error: {}", msg),
        }
    }
}

impl std::error::Error for TermParseError {}

/// Parse one search clause into a term
pub fn parse_search_clause(input: &str) -> Result<SearchTerm, TermParseError> {
    let clause = SearchClauseParser::parse(Rule::search_clause, input)
        .map_err(|e| TermParseError::SyntaxError(e.to_string()))?
        .next()
        .ok_or_else(|| TermParseError::SyntaxError("Empty search clause".to_string()))?;

    let inner = clause
        .into_inner()
        .next()
        .ok_or_else(|| TermParseError::SyntaxError("Empty search clause".to_string()))?;

    match inner.as_rule() {
        Rule::explicit_clause => parse_explicit_clause(inner),
        Rule::implicit_clause => parse_implicit_clause(inner),
        other => Err(TermParseError::SyntaxError(format!(
            "Unexpected rule: {:?}",
            other
        ))),
    }
}

fn parse_explicit_clause(pair: Pair<Rule>) -> Result<SearchTerm, TermParseError> {
    let mut inner = pair.into_inner();
    let field = next_text(&mut inner, "field")?;
    let operator = next_text(&mut inner, "operator")?;
    let value = next_text(&mut inner, "value")?;

    Ok(SearchTerm {
        field,
        operator,
        value,
    })
}

fn parse_implicit_clause(pair: Pair<Rule>) -> Result<SearchTerm, TermParseError> {
    let mut inner = pair.into_inner();
    let field = next_text(&mut inner, "field")?;
    let value = next_text(&mut inner, "value")?;

    Ok(SearchTerm {
        field,
        operator: Operator::Equal.token().to_string(),
        value,
    })
}

fn next_text(pairs: &mut Pairs<Rule>, part: &str) -> Result<String, TermParseError> {
    pairs
        .next()
        .map(|pair| pair.as_str().to_string())
        .ok_or_else(|| TermParseError::SyntaxError(format!("Missing {} in search clause", part)))
}
