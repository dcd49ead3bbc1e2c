//! Product catalog and the listing service built on the query engine

mod errors;
pub mod listing;
mod model;
mod paging;

pub use errors::{ApiError, ApiStatus};
pub use model::{Brand, Catalog, Product, ProductResult, Subcategory};
pub use paging::{DEFAULT_LIMIT, PagingOptions};
