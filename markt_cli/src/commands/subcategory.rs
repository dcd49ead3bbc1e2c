use markt_core::catalog::listing::subcategory_products;
use std::path::Path;

use super::{listing_error, output_products, paging_options, search_options};
use crate::cli::ListingArgs;
use crate::errors::CliError;
use crate::files::load_catalog;
use crate::ui::{self, OutputFormat};

/// Lists products of a subcategory, optionally narrowed by brand names.
pub fn subcategory(
    catalog_path: &Path,
    subcategory_uri: &str,
    brands: Option<&str>,
    listing: &ListingArgs,
    output_format: OutputFormat,
) -> Result<(), CliError> {
    ui::header(&format!("Listing products in '{}'", subcategory_uri));
    let catalog = load_catalog(catalog_path)?;

    if let Some(brands) = brands {
        ui::info(&format!("Brands: {}", brands));
    }

    let products = subcategory_products(
        &catalog,
        subcategory_uri,
        brands,
        &search_options(listing),
        &paging_options(listing),
    )
    .map_err(|e| listing_error(e, output_format))?;

    output_products(&products, output_format);
    Ok(())
}
