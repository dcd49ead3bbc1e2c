//! Field metadata declared by result shapes
//!
//! A result shape is the client-facing view of an entity. It declares which
//! of its fields can be searched or filtered, with which operator set, and
//! which entity field backs each of them. Declarations are computed once per
//! shape type and cached for the life of the process.

use log::debug;
use std::any::TypeId;
use std::collections::HashMap;
use std::sync::{OnceLock, RwLock};

use super::OperatorSet;
use crate::Entity;

/// Whether a field takes part in searching or in filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRole {
    Search,
    Filter,
}

/// Static declaration binding a result-shape field to an entity field and an
/// operator set
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDescriptor {
    pub name: &'static str,
    pub entity_field: &'static str,
    pub operators: OperatorSet,
    pub role: FieldRole,
}

impl FieldDescriptor {
    /// Declare a searchable field backed by the entity field of the same name
    pub fn searchable(name: &'static str, operators: OperatorSet) -> Self {
        Self {
            name,
            entity_field: name,
            operators,
            role: FieldRole::Search,
        }
    }

    /// Declare a filterable field backed by the entity field of the same name
    pub fn filterable(name: &'static str, operators: OperatorSet) -> Self {
        Self {
            name,
            entity_field: name,
            operators,
            role: FieldRole::Filter,
        }
    }

    /// Back this field by a differently named entity field
    pub fn on_entity_field(mut self, entity_field: &'static str) -> Self {
        self.entity_field = entity_field;
        self
    }

    /// Logical names are matched ignoring ASCII case
    pub fn is_named(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }
}

/// A client-facing shape whose fields can be searched or filtered
pub trait ResultShape: 'static {
    /// The entity the shape's queries run against
    type Entity: Entity + 'static;

    /// All searchable and filterable field declarations, in declaration order
    fn describe() -> Vec<FieldDescriptor>;
}

/// The scanned field declarations of one result shape
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeFields {
    fields: Vec<FieldDescriptor>,
}

impl ShapeFields {
    pub fn new(fields: Vec<FieldDescriptor>) -> Self {
        Self { fields }
    }

    pub fn all(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    pub fn searchable(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.with_role(FieldRole::Search)
    }

    pub fn filterable(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.with_role(FieldRole::Filter)
    }

    pub fn find_searchable(&self, name: &str) -> Option<&FieldDescriptor> {
        self.searchable().find(|field| field.is_named(name))
    }

    pub fn find_filterable(&self, name: &str) -> Option<&FieldDescriptor> {
        self.filterable().find(|field| field.is_named(name))
    }

    fn with_role(&self, role: FieldRole) -> impl Iterator<Item = &FieldDescriptor> {
        self.fields.iter().filter(move |field| field.role == role)
    }
}

type ShapeCache = RwLock<HashMap<TypeId, &'static ShapeFields>>;

fn shape_cache() -> &'static ShapeCache {
    static CACHE: OnceLock<ShapeCache> = OnceLock::new();
    CACHE.get_or_init(|| RwLock::new(HashMap::new()))
}

/// Returns the field declarations of a result shape.
///
/// The first call for a shape runs [`ResultShape::describe`] and caches the
/// result; every later call is a read of the cache.
pub fn shape_fields<S: ResultShape>() -> &'static ShapeFields {
    let key = TypeId::of::<S>();

    let cached = shape_cache()
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
        .get(&key)
        .copied();
    if let Some(fields) = cached {
        return fields;
    }

    let mut cache = shape_cache()
        .write()
        .unwrap_or_else(|poisoned| poisoned.into_inner());

    *cache.entry(key).or_insert_with(|| {
        let fields = S::describe();
        debug!(
            "Scanned {} declared fields for shape '{}'",
            fields.len(),
            std::any::type_name::<S>()
        );
        let leaked: &'static ShapeFields = Box::leak(Box::new(ShapeFields::new(fields)));
        leaked
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FieldValue;

    struct Widget;

    impl Entity for Widget {
        fn get_field(&self, _field: &str) -> Option<FieldValue<'_>> {
            None
        }
    }

    struct WidgetView;

    impl ResultShape for WidgetView {
        type Entity = Widget;

        fn describe() -> Vec<FieldDescriptor> {
            vec![
                FieldDescriptor::searchable("title", OperatorSet::STRING),
                FieldDescriptor::filterable("makerId", OperatorSet::EQUALITY_DECIMAL)
                    .on_entity_field("maker_id"),
                FieldDescriptor::searchable("weight", OperatorSet::DECIMAL),
                FieldDescriptor::filterable("colour", OperatorSet::DEFAULT),
            ]
        }
    }

    struct EmptyView;

    impl ResultShape for EmptyView {
        type Entity = Widget;

        fn describe() -> Vec<FieldDescriptor> {
            Vec::new()
        }
    }

    #[test]
    fn test_entity_field_defaults_to_name() {
        let field = FieldDescriptor::searchable("title", OperatorSet::STRING);
        assert_eq!(field.entity_field, "title");
    }

    #[test]
    fn test_entity_field_override() {
        let fields = shape_fields::<WidgetView>();
        let field = fields.find_filterable("makerId").unwrap();
        assert_eq!(field.entity_field, "maker_id");
    }

    #[test]
    fn test_searchable_in_declaration_order() {
        let names: Vec<_> = shape_fields::<WidgetView>()
            .searchable()
            .map(|field| field.name)
            .collect();
        assert_eq!(names, vec!["title", "weight"]);
    }

    #[test]
    fn test_filterable_in_declaration_order() {
        let names: Vec<_> = shape_fields::<WidgetView>()
            .filterable()
            .map(|field| field.name)
            .collect();
        assert_eq!(names, vec!["makerId", "colour"]);
    }

    #[test]
    fn test_lookup_ignores_case() {
        let fields = shape_fields::<WidgetView>();
        assert!(fields.find_searchable("TITLE").is_some());
        assert!(fields.find_filterable("makerid").is_some());
    }

    #[test]
    fn test_lookup_respects_role() {
        let fields = shape_fields::<WidgetView>();
        assert!(fields.find_searchable("makerId").is_none());
        assert!(fields.find_filterable("title").is_none());
    }

    #[test]
    fn test_cached_per_shape() {
        let first = shape_fields::<WidgetView>();
        let second = shape_fields::<WidgetView>();
        assert!(std::ptr::eq(first, second));
        assert!(!std::ptr::eq(first, shape_fields::<EmptyView>()));
    }

    #[test]
    fn test_empty_shape() {
        let fields = shape_fields::<EmptyView>();
        assert!(fields.all().is_empty());
        assert_eq!(fields.searchable().count(), 0);
    }

    #[test]
    fn test_concurrent_first_use() {
        let handles: Vec<_> = (0..8)
            .map(|_| std::thread::spawn(|| shape_fields::<WidgetView>() as *const ShapeFields as usize))
            .collect();
        let addresses: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert!(addresses.windows(2).all(|pair| pair[0] == pair[1]));
    }
}
