//! String comparison logic for the String operator set

use super::Operator;
use crate::FieldValue;

/// Compare a text field against a text value.
///
/// `eq` and `sw` ignore case; `co` is an ordinal, case-sensitive contains.
pub fn compare_string(field_value: &FieldValue, operator: Operator, value: &str) -> bool {
    let field = match field_value {
        FieldValue::String(s) => *s,
        _ => return false,
    };

    match operator {
        Operator::Equal => field.to_lowercase() == value.to_lowercase(),
        Operator::StartsWith => field.to_lowercase().starts_with(&value.to_lowercase()),
        Operator::Contains => field.contains(value),
        _ => false,
    }
}
