//! Equality and ordering comparisons for text, fixed-point and datetime values

use chrono::{DateTime, FixedOffset};
use log::debug;
use rust_decimal::Decimal;
use std::cmp::Ordering;

use super::Operator;
use crate::FieldValue;

fn ordering_matches(ordering: Ordering, operator: Operator) -> bool {
    match operator {
        Operator::Equal => ordering == Ordering::Equal,
        Operator::GreaterThan => ordering == Ordering::Greater,
        Operator::GreaterOrEqual => ordering != Ordering::Less,
        Operator::LessThan => ordering == Ordering::Less,
        Operator::LessOrEqual => ordering != Ordering::Greater,
        Operator::StartsWith | Operator::Contains => false,
    }
}

/// Compare an integer or decimal field against a decimal value
pub fn compare_decimal(field_value: &FieldValue, operator: Operator, value: Decimal) -> bool {
    match field_value.as_decimal() {
        Some(field) => ordering_matches(field.cmp(&value), operator),
        None => {
            debug!(
                "Cannot compare {} field with decimal value {}",
                field_value.get_type(),
                value
            );
            false
        }
    }
}

/// Compare a datetime field against a datetime value, as instants
pub fn compare_datetime(
    field_value: &FieldValue,
    operator: Operator,
    value: &DateTime<FixedOffset>,
) -> bool {
    match field_value {
        FieldValue::DateTime(field) => ordering_matches(field.cmp(value), operator),
        _ => {
            debug!(
                "Cannot compare {} field with datetime value {}",
                field_value.get_type(),
                value
            );
            false
        }
    }
}

/// Compare a text field against a text value.
///
/// Equality ignores case; ordering is ordinal.
pub fn compare_text(field_value: &FieldValue, operator: Operator, value: &str) -> bool {
    let field = match field_value {
        FieldValue::String(s) => *s,
        _ => return false,
    };

    match operator {
        Operator::Equal => field.to_lowercase() == value.to_lowercase(),
        _ => ordering_matches(field.cmp(value), operator),
    }
}
