mod fields;
mod home;
mod subcategory;

pub use fields::list_fields;
pub use home::home;
pub use subcategory::subcategory;

use markt_core::catalog::{ApiError, PagingOptions, ProductResult};
use markt_core::query::SearchOptions;

use crate::cli::ListingArgs;
use crate::errors::CliError;
use crate::ui::{self, OutputFormat};

fn search_options(listing: &ListingArgs) -> SearchOptions<ProductResult> {
    match &listing.query {
        Some(query) => SearchOptions::new(query.as_str()),
        None => SearchOptions::default(),
    }
}

fn paging_options(listing: &ListingArgs) -> PagingOptions {
    PagingOptions::new(listing.offset, listing.limit)
}

/// Reports a listing error the way an API client would see it.
fn listing_error(error: ApiError, output_format: OutputFormat) -> CliError {
    match output_format {
        OutputFormat::Pretty => ui::error_with_details(
            &error.message,
            &format!("status {}", error.status.code()),
        ),
        OutputFormat::Json => ui::json_output(&error),
    }
    CliError::ListingError
}

fn output_products(products: &[ProductResult], output_format: OutputFormat) {
    if products.is_empty() {
        ui::warning("No products matched");
    } else {
        ui::success(&format!("Found {} products", products.len()));
    }

    match output_format {
        OutputFormat::Pretty => ui::pretty_output_product_list(products),
        OutputFormat::Json => ui::json_output(products),
    }
}
