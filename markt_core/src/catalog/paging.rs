use serde::Deserialize;

use crate::query::{EntityQuery, ValidationError};

pub const DEFAULT_LIMIT: usize = 25;

const OFFSET_RANGE: std::ops::RangeInclusive<i64> = 1..=99999;
const LIMIT_RANGE: std::ops::RangeInclusive<i64> = 1..=100;

/// Offset and limit for a listing page, e.g. `?offset=25&limit=25`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct PagingOptions {
    #[serde(default)]
    pub offset: Option<i64>,
    #[serde(default)]
    pub limit: Option<i64>,
}

impl PagingOptions {
    pub fn new(offset: Option<i64>, limit: Option<i64>) -> Self {
        Self { offset, limit }
    }

    pub fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if self.offset.is_some_and(|offset| !OFFSET_RANGE.contains(&offset)) {
            errors.push(ValidationError::new(
                "Offset must be greater than 0.",
                "offset",
            ));
        }
        if self.limit.is_some_and(|limit| !LIMIT_RANGE.contains(&limit)) {
            errors.push(ValidationError::new(
                "Limit must be greater than 0 and less than 100.",
                "limit",
            ));
        }

        errors
    }

    pub fn skip(&self) -> usize {
        self.offset
            .and_then(|offset| usize::try_from(offset).ok())
            .unwrap_or(0)
    }

    pub fn take(&self) -> usize {
        self.limit
            .and_then(|limit| usize::try_from(limit).ok())
            .unwrap_or(DEFAULT_LIMIT)
    }

    /// Append skip and take stages to a query
    pub fn apply<'a, E>(&self, query: EntityQuery<'a, E>) -> EntityQuery<'a, E> {
        query.skip(self.skip()).take(self.take())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let paging = PagingOptions::default();
        assert!(paging.validate().is_empty());
        assert_eq!(paging.skip(), 0);
        assert_eq!(paging.take(), 25);
    }

    #[test]
    fn test_offset_out_of_range() {
        let errors = PagingOptions::new(Some(0), None).validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].message, "Offset must be greater than 0.");
        assert_eq!(errors[0].members, vec!["offset"]);

        assert_eq!(PagingOptions::new(Some(100000), None).validate().len(), 1);
        assert!(PagingOptions::new(Some(99999), None).validate().is_empty());
    }

    #[test]
    fn test_limit_out_of_range() {
        let errors = PagingOptions::new(None, Some(101)).validate();
        assert_eq!(errors[0].message, "Limit must be greater than 0 and less than 100.");
        assert!(PagingOptions::new(None, Some(100)).validate().is_empty());
        assert_eq!(PagingOptions::new(Some(-1), Some(0)).validate().len(), 2);
    }

    #[test]
    fn test_apply() {
        let numbers = [1, 2, 3, 4, 5];
        let query = PagingOptions::new(Some(1), Some(2)).apply(EntityQuery::new(&numbers));
        assert_eq!(query.execute(), vec![&2, &3]);
    }

    #[test]
    fn test_deserialize() {
        let paging: PagingOptions = serde_json::from_str(r#"{"limit": 10}"#).unwrap();
        assert_eq!(paging, PagingOptions::new(None, Some(10)));
    }
}
