//! Entity field access used by the query engine

use chrono::{DateTime, FixedOffset};
use rust_decimal::Decimal;
use std::fmt;

/// A borrowed view of a single entity field value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    String(&'a str),
    Integer(i64),
    Decimal(Decimal),
    DateTime(DateTime<FixedOffset>),
    Boolean(bool),
}

impl FieldValue<'_> {
    pub fn get_type(&self) -> FieldType {
        match self {
            FieldValue::String(_) => FieldType::String,
            FieldValue::Integer(_) => FieldType::Integer,
            FieldValue::Decimal(_) => FieldType::Decimal,
            FieldValue::DateTime(_) => FieldType::DateTime,
            FieldValue::Boolean(_) => FieldType::Boolean,
        }
    }

    /// Numeric view of the value, if it has one.
    pub fn as_decimal(&self) -> Option<Decimal> {
        match self {
            FieldValue::Integer(i) => Some(Decimal::from(*i)),
            FieldValue::Decimal(d) => Some(*d),
            _ => None,
        }
    }
}

impl<'a> From<&'a str> for FieldValue<'a> {
    fn from(value: &'a str) -> Self {
        FieldValue::String(value)
    }
}

impl From<i64> for FieldValue<'_> {
    fn from(value: i64) -> Self {
        FieldValue::Integer(value)
    }
}

impl From<Decimal> for FieldValue<'_> {
    fn from(value: Decimal) -> Self {
        FieldValue::Decimal(value)
    }
}

impl From<DateTime<FixedOffset>> for FieldValue<'_> {
    fn from(value: DateTime<FixedOffset>) -> Self {
        FieldValue::DateTime(value)
    }
}

impl From<bool> for FieldValue<'_> {
    fn from(value: bool) -> Self {
        FieldValue::Boolean(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    String,
    Integer,
    Decimal,
    DateTime,
    Boolean,
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FieldType::String => "String",
            FieldType::Integer => "Integer",
            FieldType::Decimal => "Decimal",
            FieldType::DateTime => "DateTime",
            FieldType::Boolean => "Boolean",
        };
        write!(f, "{}", name)
    }
}

/// A persisted record the query engine can read fields from.
///
/// Field names are the entity's own names, which may differ from the logical
/// names a result shape exposes to clients.
pub trait Entity {
    /// Returns the value of the named field, or `None` if the entity has no
    /// such field.
    fn get_field(&self, field: &str) -> Option<FieldValue<'_>>;
}
