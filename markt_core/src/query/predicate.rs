//! Predicate building: from parsed terms and field metadata to composable
//! conditions over the entity type

use log::debug;
use std::fmt;
use std::sync::Arc;

use super::{
    FilterTerm, Operator, OperatorSet, QueryError, ResultShape, SearchTerm, TypedValue,
    shape_fields,
};
use crate::Entity;

/// A composable boolean condition over an entity
pub struct Predicate<E> {
    test: Arc<dyn Fn(&E) -> bool + Send + Sync>,
}

impl<E> Predicate<E> {
    pub fn new<F>(test: F) -> Self
    where
        F: Fn(&E) -> bool + Send + Sync + 'static,
    {
        Self {
            test: Arc::new(test),
        }
    }

    pub fn matches(&self, entity: &E) -> bool {
        (self.test)(entity)
    }
}

impl<E: 'static> Predicate<E> {
    pub fn and(self, other: Predicate<E>) -> Predicate<E> {
        Predicate::new(move |entity: &E| self.matches(entity) && other.matches(entity))
    }

    pub fn or(self, other: Predicate<E>) -> Predicate<E> {
        Predicate::new(move |entity: &E| self.matches(entity) || other.matches(entity))
    }
}

impl<E> Clone for Predicate<E> {
    fn clone(&self) -> Self {
        Self {
            test: Arc::clone(&self.test),
        }
    }
}

impl<E> fmt::Debug for Predicate<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Predicate")
    }
}

/// Result of applying options to a query.
///
/// `ForceEmpty` means the caller must return no results. It is not an error
/// and it differs from applying no predicate at all.
#[derive(Debug)]
pub enum QueryOutcome<Q> {
    Query(Q),
    ForceEmpty,
}

impl<Q> QueryOutcome<Q> {
    pub fn is_force_empty(&self) -> bool {
        matches!(self, QueryOutcome::ForceEmpty)
    }

    pub fn into_query(self) -> Option<Q> {
        match self {
            QueryOutcome::Query(query) => Some(query),
            QueryOutcome::ForceEmpty => None,
        }
    }

    pub fn map<R>(self, f: impl FnOnce(Q) -> R) -> QueryOutcome<R> {
        match self {
            QueryOutcome::Query(query) => QueryOutcome::Query(f(query)),
            QueryOutcome::ForceEmpty => QueryOutcome::ForceEmpty,
        }
    }
}

/// How several raw values for one filterable field are combined
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValueCombination {
    /// One equality stage per value, all of which must hold. With two
    /// different values on a single-valued field nothing can match.
    #[default]
    AllOf,
    /// A single stage matching any of the values
    AnyOf,
}

/// Build a single-field comparison predicate
pub fn comparison<E: Entity + 'static>(
    entity_field: &'static str,
    operators: OperatorSet,
    operator: Operator,
    value: TypedValue,
) -> Predicate<E> {
    Predicate::new(move |entity: &E| match entity.get_field(entity_field) {
        Some(field_value) => operators.compare(&field_value, operator, &value),
        None => false,
    })
}

/// Build one predicate per search term.
///
/// Every term is resolved before anything is returned, so a single bad term
/// fails the whole set.
pub fn build_search_predicates<S: ResultShape>(
    terms: &[SearchTerm],
) -> Result<Vec<Predicate<S::Entity>>, QueryError> {
    let fields = shape_fields::<S>();

    terms
        .iter()
        .map(|term| {
            let field = fields
                .find_searchable(&term.field)
                .ok_or_else(|| QueryError::UnknownField {
                    field: term.field.clone(),
                })?;
            let operator = field.operators.resolve_operator(field.name, &term.operator)?;
            let value = field.operators.parse_value(field.name, &term.value)?;

            debug!(
                "Search predicate: {} {} {:?} (entity field '{}')",
                field.name, operator, value, field.entity_field
            );
            Ok(comparison(field.entity_field, field.operators, operator, value))
        })
        .collect()
}

/// Build filter stages for the given terms.
///
/// A term with no values forces an empty result.
pub fn build_filter_predicates<S: ResultShape>(
    terms: &[FilterTerm],
    combination: ValueCombination,
) -> Result<QueryOutcome<Vec<Predicate<S::Entity>>>, QueryError> {
    if let Some(term) = terms.iter().find(|term| term.values.is_empty()) {
        debug!("Filter '{}' has no values, forcing empty result", term.field);
        return Ok(QueryOutcome::ForceEmpty);
    }

    let fields = shape_fields::<S>();
    let mut stages = Vec::new();

    for term in terms {
        let field = fields
            .find_filterable(&term.field)
            .ok_or_else(|| QueryError::UnknownField {
                field: term.field.clone(),
            })?;

        let mut predicates = term
            .values
            .iter()
            .map(|raw| {
                let value = field.operators.parse_value(field.name, raw)?;
                Ok(comparison(term.entity_field, field.operators, term.operator, value))
            })
            .collect::<Result<Vec<Predicate<S::Entity>>, QueryError>>()?;

        match combination {
            ValueCombination::AllOf => stages.append(&mut predicates),
            ValueCombination::AnyOf => {
                if let Some(any) = predicates.into_iter().reduce(Predicate::or) {
                    stages.push(any);
                }
            }
        }
    }

    debug!(
        "Built {} filter stages from {} terms ({:?})",
        stages.len(),
        terms.len(),
        combination
    );
    Ok(QueryOutcome::Query(stages))
}
