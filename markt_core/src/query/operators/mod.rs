//! Operator sets: which operators a field kind accepts, how raw values are
//! parsed for it, and how a comparison is evaluated against an entity field.

mod comparable;
mod string;
mod value;

pub use value::{MAX_SCALE, TypedValue, parse_datetime, parse_fixed_point};

use std::fmt;

use super::QueryError;
use crate::FieldValue;

/// Minimum number of fractional digits for fixed-point values
pub const DEFAULT_MIN_SCALE: u32 = 2;

/// Comparison operators understood by the search and filter engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Equal,
    GreaterThan,
    GreaterOrEqual,
    LessThan,
    LessOrEqual,
    StartsWith,
    Contains,
}

impl Operator {
    /// The token clients use for this operator in query strings
    pub fn token(&self) -> &'static str {
        match self {
            Operator::Equal => "eq",
            Operator::GreaterThan => "gt",
            Operator::GreaterOrEqual => "gte",
            Operator::LessThan => "lt",
            Operator::LessOrEqual => "lte",
            Operator::StartsWith => "sw",
            Operator::Contains => "co",
        }
    }

    /// Looks up an operator by token, ignoring ASCII case
    pub fn from_token(token: &str) -> Option<Operator> {
        ALL_OPS
            .iter()
            .copied()
            .find(|op| op.token().eq_ignore_ascii_case(token))
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}

const ALL_OPS: [Operator; 7] = [
    Operator::Equal,
    Operator::GreaterThan,
    Operator::GreaterOrEqual,
    Operator::LessThan,
    Operator::LessOrEqual,
    Operator::StartsWith,
    Operator::Contains,
];

const EQUALITY_OPS: [Operator; 1] = [Operator::Equal];

const COMPARABLE_OPS: [Operator; 5] = [
    Operator::Equal,
    Operator::GreaterThan,
    Operator::GreaterOrEqual,
    Operator::LessThan,
    Operator::LessOrEqual,
];

const STRING_OPS: [Operator; 3] = [Operator::Equal, Operator::StartsWith, Operator::Contains];

/// The type raw values are parsed into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// Raw string passthrough
    Text,
    /// Decimal input re-encoded as an integer scaled by `10^digits`
    FixedPoint { min_scale: u32 },
    /// Timestamp with offset
    DateTime,
}

impl ValueKind {
    /// Human readable name used in error messages
    pub fn describe(&self) -> &'static str {
        match self {
            ValueKind::Text => "text",
            ValueKind::FixedPoint { .. } => "a decimal number",
            ValueKind::DateTime => "a timestamp",
        }
    }

    fn parse(&self, raw: &str) -> Option<TypedValue> {
        match self {
            ValueKind::Text => Some(TypedValue::Text(raw.to_string())),
            ValueKind::FixedPoint { min_scale } => parse_fixed_point(raw, *min_scale),
            ValueKind::DateTime => parse_datetime(raw).map(TypedValue::DateTime),
        }
    }
}

/// Operator set attached to a declared field.
///
/// Each variant fixes the legal operators; the [`ValueKind`] fixes how raw
/// values are parsed and compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperatorSet {
    /// Equality only
    Equality(ValueKind),
    /// Equality plus ordering
    Comparable(ValueKind),
    /// Case-insensitive equality, starts-with and contains on text
    String,
}

impl OperatorSet {
    pub const DEFAULT: OperatorSet = OperatorSet::Equality(ValueKind::Text);
    pub const STRING: OperatorSet = OperatorSet::String;
    pub const DECIMAL: OperatorSet = OperatorSet::Comparable(ValueKind::FixedPoint {
        min_scale: DEFAULT_MIN_SCALE,
    });
    pub const DATETIME: OperatorSet = OperatorSet::Comparable(ValueKind::DateTime);
    pub const EQUALITY_DECIMAL: OperatorSet = OperatorSet::Equality(ValueKind::FixedPoint {
        min_scale: DEFAULT_MIN_SCALE,
    });
    pub const EQUALITY_DATETIME: OperatorSet = OperatorSet::Equality(ValueKind::DateTime);

    /// Legal operators for this set
    pub fn operators(&self) -> &'static [Operator] {
        match self {
            OperatorSet::Equality(_) => &EQUALITY_OPS,
            OperatorSet::Comparable(_) => &COMPARABLE_OPS,
            OperatorSet::String => &STRING_OPS,
        }
    }

    pub fn value_kind(&self) -> ValueKind {
        match self {
            OperatorSet::Equality(kind) | OperatorSet::Comparable(kind) => *kind,
            OperatorSet::String => ValueKind::Text,
        }
    }

    /// Resolves an operator token against this set
    pub fn resolve_operator(&self, field: &str, token: &str) -> Result<Operator, QueryError> {
        Operator::from_token(token)
            .filter(|op| self.operators().contains(op))
            .ok_or_else(|| QueryError::InvalidOperator {
                field: field.to_string(),
                operator: token.to_string(),
                supported: self
                    .operators()
                    .iter()
                    .map(|op| op.token().to_string())
                    .collect(),
            })
    }

    /// Parses a raw client value into this set's value type
    pub fn parse_value(&self, field: &str, raw: &str) -> Result<TypedValue, QueryError> {
        let kind = self.value_kind();
        kind.parse(raw).ok_or_else(|| QueryError::InvalidValue {
            field: field.to_string(),
            value: raw.to_string(),
            expected: kind.describe().to_string(),
        })
    }

    /// Evaluates `field_value <operator> value`.
    ///
    /// A field value of an incompatible type never matches.
    pub fn compare(&self, field_value: &FieldValue, operator: Operator, value: &TypedValue) -> bool {
        match (self, value) {
            (OperatorSet::String, TypedValue::Text(text)) => {
                string::compare_string(field_value, operator, text)
            }
            (_, TypedValue::Text(text)) => comparable::compare_text(field_value, operator, text),
            (_, TypedValue::FixedPoint { .. }) => match value.as_decimal() {
                Some(decimal) => comparable::compare_decimal(field_value, operator, decimal),
                None => false,
            },
            (_, TypedValue::DateTime(datetime)) => {
                comparable::compare_datetime(field_value, operator, datetime)
            }
        }
    }
}
