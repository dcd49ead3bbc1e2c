//! Entity query types that predicates are composed onto

use super::Predicate;

/// A queryable sequence of entities that accepts filter stages.
///
/// Implementations only record the stage; nothing is evaluated until the
/// owner executes the query.
pub trait QuerySource<E>: Sized {
    fn where_predicate(self, predicate: Predicate<E>) -> Self;

    /// Append stages in order
    fn where_all(self, predicates: Vec<Predicate<E>>) -> Self {
        predicates
            .into_iter()
            .fold(self, |query, predicate| query.where_predicate(predicate))
    }
}

/// Operations that can be applied to an entity sequence
#[derive(Debug)]
pub enum QueryOperation<E> {
    /// Keep entities matching the predicate
    Where(Predicate<E>),
    /// Drop the first n entities
    Skip(usize),
    /// Keep at most n entities
    Take(usize),
}

/// An in-memory query over a slice of entities
#[derive(Debug)]
pub struct EntityQuery<'a, E> {
    source: &'a [E],
    operations: Vec<QueryOperation<E>>,
}

impl<'a, E> EntityQuery<'a, E> {
    /// Create a new query over a slice of entities
    pub fn new(source: &'a [E]) -> Self {
        Self {
            source,
            operations: Vec::new(),
        }
    }

    /// Add an operation to the query
    pub fn with_operation(mut self, operation: QueryOperation<E>) -> Self {
        self.operations.push(operation);
        self
    }

    pub fn skip(self, count: usize) -> Self {
        self.with_operation(QueryOperation::Skip(count))
    }

    pub fn take(self, count: usize) -> Self {
        self.with_operation(QueryOperation::Take(count))
    }

    pub fn operations(&self) -> &[QueryOperation<E>] {
        &self.operations
    }

    /// Number of filter stages recorded on the query
    pub fn filter_stages(&self) -> usize {
        self.operations
            .iter()
            .filter(|operation| matches!(operation, QueryOperation::Where(_)))
            .count()
    }

    /// Execute the query, applying each operation in sequence
    pub fn execute(&self) -> Vec<&'a E> {
        let mut entities: Vec<&'a E> = self.source.iter().collect();

        for operation in &self.operations {
            entities = match operation {
                QueryOperation::Where(predicate) => entities
                    .into_iter()
                    .filter(|entity| predicate.matches(entity))
                    .collect(),
                QueryOperation::Skip(n) => entities.into_iter().skip(*n).collect(),
                QueryOperation::Take(n) => entities.into_iter().take(*n).collect(),
            };
        }

        entities
    }
}

impl<E> QuerySource<E> for EntityQuery<'_, E> {
    fn where_predicate(self, predicate: Predicate<E>) -> Self {
        self.with_operation(QueryOperation::Where(predicate))
    }
}
