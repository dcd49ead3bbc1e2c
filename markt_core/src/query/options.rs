//! Search and filter options: the request-scoped boundary objects listing
//! services validate and then apply to an entity query

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::marker::PhantomData;

use super::{
    FilterTerm, QueryError, QueryOutcome, QuerySource, ResultShape, SearchTerm, ValueCombination,
    build_filter_predicates, build_search_predicates, parse_search_query, shape_fields,
};

/// A client input problem reported before any predicate is built
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    pub message: String,
    pub members: Vec<String>,
}

impl ValidationError {
    pub fn new(message: impl Into<String>, member: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            members: vec![member.into()],
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Search query bound to a result shape, e.g. `?query=price-gt-100`
#[derive(Deserialize)]
#[serde(bound = "")]
pub struct SearchOptions<S> {
    #[serde(default)]
    query: Option<String>,
    #[serde(skip)]
    shape: PhantomData<fn() -> S>,
}

impl<S> Default for SearchOptions<S> {
    fn default() -> Self {
        Self {
            query: None,
            shape: PhantomData,
        }
    }
}

impl<S> fmt::Debug for SearchOptions<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchOptions")
            .field("query", &self.query)
            .finish()
    }
}

impl<S: ResultShape> SearchOptions<S> {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: Some(query.into()),
            shape: PhantomData,
        }
    }

    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    /// Terms parsed from the raw query, whether or not they are declared
    pub fn terms(&self) -> Vec<SearchTerm> {
        parse_search_query(self.query())
    }

    /// Reports every term whose field is not searchable on the shape
    pub fn validate(&self) -> Vec<ValidationError> {
        let fields = shape_fields::<S>();
        let mut invalid: Vec<String> = Vec::new();

        for term in self.terms() {
            let known = fields.find_searchable(&term.field).is_some();
            let reported = invalid.iter().any(|name| name.eq_ignore_ascii_case(&term.field));
            if !known && !reported {
                invalid.push(term.field);
            }
        }

        invalid
            .into_iter()
            .map(|name| ValidationError::new(format!("Invalid search term '{}'.", name), "query"))
            .collect()
    }

    /// Applies the search to a query, or returns it unchanged when there are
    /// no terms. Nothing is applied if any term fails.
    pub fn apply<Q: QuerySource<S::Entity>>(&self, query: Q) -> Result<Q, QueryError> {
        let terms = self.terms();
        if terms.is_empty() {
            return Ok(query);
        }

        let predicates = build_search_predicates::<S>(&terms)?;
        debug!("Applying {} search predicates", predicates.len());
        Ok(query.where_all(predicates))
    }
}

/// Raw values for one field. `None` targets the shape's first filterable
/// field.
#[derive(Debug, Clone, PartialEq)]
struct FilterEntry {
    field: Option<String>,
    values: Vec<String>,
}

/// Filter values bound to a result shape, e.g. brand ids from a listing URL.
///
/// Deserializes from a map of field names to raw values, such as
/// `{"brandId": ["1", "2"]}`. Field names are checked by `validate`.
#[derive(Deserialize)]
#[serde(bound = "", from = "FilterParams")]
pub struct FilterOptions<S> {
    entries: Vec<FilterEntry>,
    combination: ValueCombination,
    shape: PhantomData<fn() -> S>,
}

#[derive(Deserialize)]
#[serde(transparent)]
struct FilterParams(BTreeMap<String, Vec<String>>);

impl<S> From<FilterParams> for FilterOptions<S> {
    fn from(params: FilterParams) -> Self {
        Self {
            entries: params
                .0
                .into_iter()
                .map(|(field, values)| FilterEntry {
                    field: Some(field),
                    values,
                })
                .collect(),
            combination: ValueCombination::default(),
            shape: PhantomData,
        }
    }
}

impl<S> fmt::Debug for FilterOptions<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterOptions")
            .field("entries", &self.entries)
            .field("combination", &self.combination)
            .finish()
    }
}

impl<S: ResultShape> FilterOptions<S> {
    /// Values for the shape's first filterable field
    pub fn new(values: Vec<String>) -> Self {
        Self::with_entry(FilterEntry {
            field: None,
            values,
        })
    }

    /// Values for a named filterable field
    pub fn for_field(field: impl Into<String>, values: Vec<String>) -> Self {
        Self::with_entry(FilterEntry {
            field: Some(field.into()),
            values,
        })
    }

    fn with_entry(entry: FilterEntry) -> Self {
        Self {
            entries: vec![entry],
            combination: ValueCombination::default(),
            shape: PhantomData,
        }
    }

    /// Add values for another named filterable field
    pub fn with_field(mut self, field: impl Into<String>, values: Vec<String>) -> Self {
        self.entries.push(FilterEntry {
            field: Some(field.into()),
            values,
        });
        self
    }

    pub fn with_combination(mut self, combination: ValueCombination) -> Self {
        self.combination = combination;
        self
    }

    pub fn combination(&self) -> ValueCombination {
        self.combination
    }

    /// Resolve entries into filter terms.
    ///
    /// Values for the first filterable field are dropped if the shape has
    /// none; named fields that are not filterable are an error.
    pub fn terms(&self) -> Result<Vec<FilterTerm>, QueryError> {
        let fields = shape_fields::<S>();
        let mut terms = Vec::new();

        for entry in &self.entries {
            let descriptor = match &entry.field {
                None => match fields.filterable().next() {
                    Some(descriptor) => descriptor,
                    None => {
                        warn!(
                            "Shape '{}' has no filterable field, ignoring {} values",
                            std::any::type_name::<S>(),
                            entry.values.len()
                        );
                        continue;
                    }
                },
                Some(name) => fields.find_filterable(name).ok_or_else(|| {
                    QueryError::UnknownField {
                        field: name.clone(),
                    }
                })?,
            };

            terms.push(FilterTerm::new(
                descriptor.name,
                descriptor.entity_field,
                entry.values.clone(),
            ));
        }

        Ok(terms)
    }

    /// Reports every named field that is not filterable on the shape
    pub fn validate(&self) -> Vec<ValidationError> {
        let fields = shape_fields::<S>();

        self.entries
            .iter()
            .filter_map(|entry| entry.field.as_deref())
            .filter(|name| fields.find_filterable(name).is_none())
            .map(|name| ValidationError::new(format!("Invalid filter term '{}'.", name), name))
            .collect()
    }

    /// Applies the filter stages to a query.
    ///
    /// Named fields are resolved first, so an unknown field fails even
    /// without values. After that, any term without values forces an empty
    /// result.
    pub fn apply<Q: QuerySource<S::Entity>>(&self, query: Q) -> Result<QueryOutcome<Q>, QueryError> {
        let terms = self.terms()?;
        let outcome = build_filter_predicates::<S>(&terms, self.combination)?;
        Ok(outcome.map(|stages| query.where_all(stages)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::{EntityQuery, FieldDescriptor, OperatorSet};
    use crate::{Entity, FieldValue};
    use assert_matches::assert_matches;

    #[derive(Debug)]
    struct Book {
        title: &'static str,
        shelf: i64,
    }

    impl Entity for Book {
        fn get_field(&self, field: &str) -> Option<FieldValue<'_>> {
            match field {
                "title" => Some(FieldValue::String(self.title)),
                "shelf_id" => Some(FieldValue::Integer(self.shelf)),
                _ => None,
            }
        }
    }

    struct BookView;

    impl ResultShape for BookView {
        type Entity = Book;

        fn describe() -> Vec<FieldDescriptor> {
            vec![
                FieldDescriptor::searchable("title", OperatorSet::STRING),
                FieldDescriptor::filterable("shelf", OperatorSet::EQUALITY_DECIMAL)
                    .on_entity_field("shelf_id"),
            ]
        }
    }

    struct Unfilterable;

    impl ResultShape for Unfilterable {
        type Entity = Book;

        fn describe() -> Vec<FieldDescriptor> {
            vec![FieldDescriptor::searchable("title", OperatorSet::STRING)]
        }
    }

    fn library() -> Vec<Book> {
        vec![
            Book { title: "Dune", shelf: 1 },
            Book { title: "Emma", shelf: 2 },
            Book { title: "Dracula", shelf: 2 },
        ]
    }

    fn titles(books: Vec<&Book>) -> Vec<&'static str> {
        books.into_iter().map(|book| book.title).collect()
    }

    // ===== Search options =====

    #[test]
    fn test_search_without_query_is_unchanged() {
        let books = library();
        let options = SearchOptions::<BookView>::default();
        let query = options.apply(EntityQuery::new(&books)).unwrap();
        assert_eq!(query.filter_stages(), 0);
        assert_eq!(query.execute().len(), 3);
    }

    #[test]
    fn test_search_applies_predicate() {
        let books = library();
        let options = SearchOptions::<BookView>::new("title-sw-d");
        let query = options.apply(EntityQuery::new(&books)).unwrap();
        assert_eq!(titles(query.execute()), vec!["Dune", "Dracula"]);
    }

    #[test]
    fn test_search_validate_unknown_field() {
        let options = SearchOptions::<BookView>::new("bogus-eq-1");
        let errors = options.validate();
        assert_eq!(errors, vec![ValidationError::new("Invalid search term 'bogus'.", "query")]);
    }

    #[test]
    fn test_search_validate_known_field() {
        assert!(SearchOptions::<BookView>::new("Title-co-m").validate().is_empty());
        assert!(SearchOptions::<BookView>::default().validate().is_empty());
    }

    #[test]
    fn test_search_filter_field_is_not_searchable() {
        let errors = SearchOptions::<BookView>::new("shelf-eq-1").validate();
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_search_apply_unknown_field_fails() {
        let books = library();
        let result = SearchOptions::<BookView>::new("bogus-eq-1").apply(EntityQuery::new(&books));
        assert_matches!(result, Err(QueryError::UnknownField { .. }));
    }

    #[test]
    fn test_search_deserialize() {
        let options: SearchOptions<BookView> = serde_json::from_str(r#"{"query":"title-eq-emma"}"#).unwrap();
        assert_eq!(options.query(), Some("title-eq-emma"));

        let empty: SearchOptions<BookView> = serde_json::from_str("{}").unwrap();
        assert_eq!(empty.query(), None);
    }

    // ===== Filter options =====

    #[test]
    fn test_filter_deserialize() {
        let options: FilterOptions<BookView> =
            serde_json::from_str(r#"{"shelf": ["1", "2"]}"#).unwrap();
        let terms = options.terms().unwrap();
        assert_eq!(terms.len(), 1);
        assert_eq!(terms[0].entity_field, "shelf_id");
        assert_eq!(terms[0].values, vec!["1", "2"]);
        assert_eq!(options.combination(), ValueCombination::AllOf);

        let unknown: FilterOptions<BookView> =
            serde_json::from_str(r#"{"colour": ["red"]}"#).unwrap();
        assert_eq!(unknown.validate().len(), 1);
    }

    #[test]
    fn test_filter_deserialize_empty_map_is_unchanged() {
        let books = library();
        let options: FilterOptions<BookView> = serde_json::from_str("{}").unwrap();
        let query = options.apply(EntityQuery::new(&books)).unwrap().into_query().unwrap();
        assert_eq!(query.filter_stages(), 0);
    }

    #[test]
    fn test_filter_binds_first_filterable_field() {
        let options = FilterOptions::<BookView>::new(vec!["2".to_string()]);
        let terms = options.terms().unwrap();
        assert_eq!(terms.len(), 1);
        assert_eq!(terms[0].field, "shelf");
        assert_eq!(terms[0].entity_field, "shelf_id");
    }

    #[test]
    fn test_filter_applies_predicate() {
        let books = library();
        let options = FilterOptions::<BookView>::new(vec!["2".to_string()]);
        let outcome = options.apply(EntityQuery::new(&books)).unwrap();
        let query = outcome.into_query().unwrap();
        assert_eq!(titles(query.execute()), vec!["Emma", "Dracula"]);
    }

    #[test]
    fn test_filter_empty_values_force_empty() {
        let books = library();
        let options = FilterOptions::<BookView>::new(Vec::new());
        let outcome = options.apply(EntityQuery::new(&books)).unwrap();
        assert!(outcome.is_force_empty());
    }

    #[test]
    fn test_filter_without_filterable_field_is_unchanged() {
        let books = library();
        let options = FilterOptions::<Unfilterable>::new(vec!["2".to_string()]);
        let query = options.apply(EntityQuery::new(&books)).unwrap().into_query().unwrap();
        assert_eq!(query.filter_stages(), 0);
    }

    #[test]
    fn test_filter_validate_named_field() {
        let options = FilterOptions::<BookView>::for_field("Shelf", vec!["1".to_string()])
            .with_field("colour", vec!["red".to_string()]);
        let errors = options.validate();
        assert_eq!(errors, vec![ValidationError::new("Invalid filter term 'colour'.", "colour")]);
    }

    #[test]
    fn test_filter_apply_unknown_field_fails() {
        let books = library();
        let options = FilterOptions::<BookView>::for_field("colour", vec!["red".to_string()]);
        let result = options.apply(EntityQuery::new(&books));
        assert_matches!(result, Err(QueryError::UnknownField { .. }));
    }

    #[test]
    fn test_filter_unknown_field_without_values_fails() {
        let books = library();
        let options = FilterOptions::<BookView>::for_field("bogus", Vec::new());
        let result = options.apply(EntityQuery::new(&books));
        assert_matches!(result, Err(QueryError::UnknownField { ref field }) if field == "bogus");
    }

    #[test]
    fn test_filter_known_field_without_values_forces_empty() {
        let books = library();
        let options = FilterOptions::<BookView>::for_field("shelf", Vec::new());
        assert!(options.apply(EntityQuery::new(&books)).unwrap().is_force_empty());
    }

    #[test]
    fn test_filter_combination_default_is_all_of() {
        let options = FilterOptions::<BookView>::new(vec!["1".to_string()]);
        assert_eq!(options.combination(), ValueCombination::AllOf);
    }
}
