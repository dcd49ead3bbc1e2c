use markt_core::catalog::listing::home_products;
use std::path::Path;

use super::{listing_error, output_products, paging_options, search_options};
use crate::cli::ListingArgs;
use crate::errors::CliError;
use crate::files::load_catalog;
use crate::ui::{self, OutputFormat};

/// Lists home page products.
pub fn home(
    catalog_path: &Path,
    listing: &ListingArgs,
    output_format: OutputFormat,
) -> Result<(), CliError> {
    ui::header("Listing home products");
    let catalog = load_catalog(catalog_path)?;

    let products = home_products(&catalog, &search_options(listing), &paging_options(listing))
        .map_err(|e| listing_error(e, output_format))?;

    output_products(&products, output_format);
    Ok(())
}
