use markt_core::catalog::ProductResult;
use markt_core::query::{FieldRole, shape_fields};
use serde_json::json;

use crate::errors::CliError;
use crate::ui::{self, OutputFormat};

/// Lists the product fields clients can search or filter on.
pub fn list_fields(output_format: OutputFormat) -> Result<(), CliError> {
    ui::header("Listing product fields");
    let fields = shape_fields::<ProductResult>().all();
    ui::success(&format!("Found {} fields", fields.len()));

    match output_format {
        OutputFormat::Pretty => ui::pretty_output_field_list(fields),
        OutputFormat::Json => {
            let described: Vec<_> = fields
                .iter()
                .map(|field| {
                    let role = match field.role {
                        FieldRole::Search => "search",
                        FieldRole::Filter => "filter",
                    };
                    json!({
                        "name": field.name,
                        "entityField": field.entity_field,
                        "role": role,
                        "operators": field
                            .operators
                            .operators()
                            .iter()
                            .map(|operator| operator.token())
                            .collect::<Vec<_>>(),
                    })
                })
                .collect();
            ui::json_output(&described);
        }
    }
    Ok(())
}
