use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use super::ui::OutputFormat;

/// Defines the top-level interface for the Markt CLI with clap.
#[derive(Parser, Debug)]
#[command(name = "markt")]
#[command(version, about = "Markt CLI: Browse product listings in the terminal.")]
pub struct MarktCli {
    /// Path to the catalog JSON file.
    #[arg(short, long, global = true, env = "MARKT_CATALOG", default_value = "catalog.json")]
    pub catalog: PathBuf,

    /// Enable verbose output?
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value_t = OutputFormat::default())]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: MarktCliCommand,
}

/// Defines the available subcommands of the Markt CLI.
#[derive(Subcommand, Debug, PartialEq)]
pub enum MarktCliCommand {
    /// List products for the home page.
    Home {
        #[command(flatten)]
        listing: ListingArgs,
    },
    /// List products of a subcategory.
    Subcategory {
        /// Subcategory URI (e.g. running-shoes)
        subcategory_uri: String,
        /// Brand names separated with | (e.g. "Nike|Adidas")
        #[arg(short, long)]
        brands: Option<String>,
        #[command(flatten)]
        listing: ListingArgs,
    },
    /// List searchable and filterable product fields.
    Fields,
}

/// Search and paging options shared by listing commands.
#[derive(Args, Debug, Clone, PartialEq, Default)]
pub struct ListingArgs {
    /// Search query: <field>-<operator>-<value> (e.g. price-gt-100)
    #[arg(short, long)]
    pub query: Option<String>,
    /// Number of products to skip
    #[arg(long, allow_negative_numbers = true)]
    pub offset: Option<i64>,
    /// Maximum number of products to return
    #[arg(short, long, allow_negative_numbers = true)]
    pub limit: Option<i64>,
}
