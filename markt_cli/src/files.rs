use markt_core::catalog::Catalog;
use std::fs;
use std::path::Path;

use crate::errors::CliError;
use crate::ui;

/// Reads and parses a catalog JSON file.
pub fn load_catalog(path: &Path) -> Result<Catalog, CliError> {
    ui::debug(&format!("Loading catalog from {}", path.display()));

    let json = fs::read_to_string(path).map_err(|e| {
        ui::error_with_details(
            &format!("Failed to read catalog at {}", path.display()),
            &e.to_string(),
        );
        CliError::FileError
    })?;

    let catalog = Catalog::from_json(&json).map_err(|e| {
        ui::error_with_details("Failed to parse catalog", &e.to_string());
        CliError::InputError
    })?;

    ui::debug(&format!(
        "Loaded {} products, {} brands and {} subcategories",
        catalog.products.len(),
        catalog.brands.len(),
        catalog.subcategories.len()
    ));
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_catalog() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("catalog.json");
        fs::write(
            &path,
            r#"{"brands": [{"id": 1, "name": "Nike"}], "subcategories": [], "products": []}"#,
        )
        .unwrap();

        let catalog = load_catalog(&path).unwrap();
        assert_eq!(catalog.brands.len(), 1);
        assert!(catalog.products.is_empty());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();
        let result = load_catalog(&dir.path().join("missing.json"));
        assert_eq!(result.unwrap_err(), CliError::FileError);
    }

    #[test]
    fn test_load_invalid_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("catalog.json");
        fs::write(&path, "{ not json").unwrap();

        assert_eq!(load_catalog(&path).unwrap_err(), CliError::InputError);
    }
}
