//! Product listings: home page and subcategory pages

use log::debug;

use super::{ApiError, Catalog, PagingOptions, Product, ProductResult};
use crate::query::{
    EntityQuery, FilterOptions, Predicate, QueryOutcome, QuerySource, SearchOptions,
    ValidationError,
};

/// Searched and paged products across the whole catalog
pub fn home_products(
    catalog: &Catalog,
    search: &SearchOptions<ProductResult>,
    paging: &PagingOptions,
) -> Result<Vec<ProductResult>, ApiError> {
    check(search.validate())?;
    check(paging.validate())?;

    let query = search.apply(EntityQuery::new(&catalog.products))?;
    Ok(project(paging.apply(query)))
}

/// Products of one subcategory, narrowed by `|` separated brand names
pub fn subcategory_products(
    catalog: &Catalog,
    subcategory_uri: &str,
    brands: Option<&str>,
    search: &SearchOptions<ProductResult>,
    paging: &PagingOptions,
) -> Result<Vec<ProductResult>, ApiError> {
    check(search.validate())?;
    check(paging.validate())?;

    if subcategory_uri.trim().is_empty() {
        return Err(ApiError::bad_request("Invalid subcategory uri"));
    }

    let subcategory = catalog
        .subcategory_by_uri(subcategory_uri)
        .ok_or_else(|| ApiError::not_found("Subcategory not found"))?;
    let subcategory_id = subcategory.id;

    if !catalog
        .products
        .iter()
        .any(|product| product.subcategory_id == subcategory_id)
    {
        debug!("Subcategory '{}' has no products", subcategory_uri);
        return Ok(Vec::new());
    }

    let mut query = EntityQuery::new(&catalog.products).where_predicate(Predicate::new(
        move |product: &Product| product.subcategory_id == subcategory_id,
    ));

    let filter = brands
        .filter(|brands| !brands.is_empty())
        .map(|brands| FilterOptions::<ProductResult>::new(catalog.brand_ids(brands)));

    if let Some(filter) = filter {
        check(filter.validate())?;
        query = match filter.apply(query)? {
            QueryOutcome::Query(query) => query,
            QueryOutcome::ForceEmpty => {
                debug!("No brand matched '{}'", brands.unwrap_or_default());
                return Ok(Vec::new());
            }
        };
    }

    let query = search.apply(query)?;
    Ok(project(paging.apply(query)))
}

fn check(errors: Vec<ValidationError>) -> Result<(), ApiError> {
    match errors.into_iter().next() {
        Some(error) => Err(error.into()),
        None => Ok(()),
    }
}

fn project(query: EntityQuery<'_, Product>) -> Vec<ProductResult> {
    query.execute().into_iter().map(ProductResult::from).collect()
}
