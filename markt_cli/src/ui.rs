use clap::ValueEnum;
use console::style;
use log::debug as log_debug;
use markt_core::catalog::ProductResult;
use markt_core::query::{FieldDescriptor, FieldRole};
use serde::Serialize;
use std::fmt;

/// How command results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Pretty,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Pretty => write!(f, "pretty"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

// Status messages go to stderr so stdout only carries results.

pub fn header(message: &str) {
    eprintln!("{}", style(message).bold().cyan());
}

pub fn success(message: &str) {
    eprintln!("{} {}", style("✓").green(), message);
}

pub fn info(message: &str) {
    eprintln!("{}", style(message).dim());
}

pub fn warning(message: &str) {
    eprintln!("{} {}", style("!").yellow(), message);
}

pub fn error(message: &str) {
    eprintln!("{} {}", style("✗").red(), style(message).red());
}

pub fn error_with_details(message: &str, details: &str) {
    error(message);
    eprintln!("  {}", style(details).dim());
}

pub fn debug(message: &str) {
    log_debug!("{}", message);
}

pub fn json_output<T: Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => error_with_details("Failed to serialize output", &e.to_string()),
    }
}

pub fn pretty_output_product_list(products: &[ProductResult]) {
    for product in products {
        let stock = if product.is_in_stock {
            style("in stock").green()
        } else {
            style("out of stock").red()
        };

        println!(
            "{} {} {}",
            style(format!("#{}", product.id)).dim(),
            style(&product.name).bold(),
            style(product.price).yellow()
        );
        println!("   {} | brand {} | {}", product.uri, product.brand_id, stock);
        if let Some(seller) = &product.seller_name {
            println!("   sold by {}", seller);
        }
    }
}

pub fn pretty_output_field_list(fields: &[FieldDescriptor]) {
    for field in fields {
        let role = match field.role {
            FieldRole::Search => style("search").cyan(),
            FieldRole::Filter => style("filter").magenta(),
        };
        let operators: Vec<String> = field
            .operators
            .operators()
            .iter()
            .map(|operator| operator.to_string())
            .collect();

        println!(
            "{} ({}) on '{}': {}",
            style(field.name).bold(),
            role,
            field.entity_field,
            operators.join(", ")
        );
    }
}
