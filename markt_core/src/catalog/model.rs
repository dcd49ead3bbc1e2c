use chrono::{DateTime, FixedOffset};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::query::{FieldDescriptor, OperatorSet, ResultShape};
use crate::{Entity, FieldValue};

/// A product listed by a seller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub uri: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: Decimal,
    #[serde(default)]
    pub is_in_stock: bool,
    pub subcategory_id: i64,
    pub brand_id: i64,
    #[serde(default)]
    pub seller_name: Option<String>,
    #[serde(default)]
    pub seller_username: Option<String>,
    pub date_time: DateTime<FixedOffset>,
    #[serde(default)]
    pub images: Vec<String>,
}

impl Entity for Product {
    fn get_field(&self, field: &str) -> Option<FieldValue<'_>> {
        match field {
            "id" => Some(FieldValue::Integer(self.id)),
            "uri" => Some(FieldValue::String(&self.uri)),
            "name" => Some(FieldValue::String(&self.name)),
            "description" => Some(FieldValue::String(&self.description)),
            "price" => Some(FieldValue::Decimal(self.price)),
            "is_in_stock" => Some(FieldValue::Boolean(self.is_in_stock)),
            "subcategory_id" => Some(FieldValue::Integer(self.subcategory_id)),
            "brand_id" => Some(FieldValue::Integer(self.brand_id)),
            "seller_name" => self.seller_name.as_deref().map(FieldValue::String),
            "seller_username" => self.seller_username.as_deref().map(FieldValue::String),
            "date_time" => Some(FieldValue::DateTime(self.date_time)),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brand {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subcategory {
    pub id: i64,
    pub uri: String,
    pub name: String,
}

/// The listing view of a product returned to clients
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductResult {
    pub id: i64,
    pub name: String,
    pub seller_name: Option<String>,
    pub seller_username: Option<String>,
    pub uri: String,
    pub price: Decimal,
    pub is_in_stock: bool,
    pub image_uri: Option<String>,
    pub brand_id: i64,
}

impl ResultShape for ProductResult {
    type Entity = Product;

    fn describe() -> Vec<FieldDescriptor> {
        vec![
            FieldDescriptor::searchable("name", OperatorSet::STRING),
            FieldDescriptor::searchable("price", OperatorSet::DECIMAL),
            FieldDescriptor::searchable("added", OperatorSet::DATETIME).on_entity_field("date_time"),
            FieldDescriptor::filterable("brandId", OperatorSet::EQUALITY_DECIMAL)
                .on_entity_field("brand_id"),
        ]
    }
}

impl From<&Product> for ProductResult {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            seller_name: product.seller_name.clone(),
            seller_username: product.seller_username.clone(),
            uri: product.uri.clone(),
            price: product.price,
            is_in_stock: product.is_in_stock,
            image_uri: product.images.first().cloned(),
            brand_id: product.brand_id,
        }
    }
}

/// In-memory product catalog
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub brands: Vec<Brand>,
    #[serde(default)]
    pub subcategories: Vec<Subcategory>,
}

impl Catalog {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Resolve `|` separated brand names to brand ids.
    ///
    /// Names match case-insensitively. Unknown names are dropped, so the
    /// result can be empty.
    pub fn brand_ids(&self, names: &str) -> Vec<String> {
        let wanted: Vec<String> = names
            .split('|')
            .map(|name| name.trim().to_lowercase())
            .filter(|name| !name.is_empty())
            .collect();

        self.brands
            .iter()
            .filter(|brand| wanted.contains(&brand.name.to_lowercase()))
            .map(|brand| brand.id.to_string())
            .collect()
    }

    pub fn subcategory_by_uri(&self, uri: &str) -> Option<&Subcategory> {
        self.subcategories.iter().find(|subcategory| subcategory.uri == uri)
    }
}
