mod item;
mod manifest;

pub use item::Item;
pub use manifest::Catalog;

use std::{fs, path::Path};

// ---- Public API (serde hidden from callers) ----

/// Load the item catalogue from a JSON file path.
pub fn load_from_file(path: impl AsRef<Path>) -> Result<Catalog, CatalogError> {
    let data = fs::read_to_string(path).map_err(CatalogError::Io)?;
    load_from_json_str(&data)
}

/// Load the item catalogue from a JSON string.
pub fn load_from_json_str(json: &str) -> Result<Catalog, CatalogError> {
    serde_json::from_str(json).map_err(CatalogError::Json)
}

/// ---- Errors ----
#[derive(thiserror::Error, Debug)]
pub enum CatalogError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::{CatalogError, load_from_file, load_from_json_str};

    #[test]
    fn parses_items_keyed_by_class_name() {
        let catalog = load_from_json_str(
            r#"{"items": {"Desc_OreIron_C": {"name": "Iron Ore", "icon": "desc-oreiron-c"}}}"#,
        )
        .expect("expected catalogue to parse");

        assert_eq!(catalog.items().len(), 1);
        let item = &catalog.items()["Desc_OreIron_C"];
        assert_eq!(item.icon(), Some("desc-oreiron-c"));
        assert_eq!(item.name(), Some("Iron Ore"));
    }

    #[test]
    fn missing_items_key_yields_empty_map() {
        let catalog = load_from_json_str(r#"{"recipes": {}}"#).expect("expected catalogue to parse");
        assert!(catalog.items().is_empty());
    }

    #[test]
    fn malformed_document_is_a_json_error() {
        let err = load_from_json_str("not json").unwrap_err();
        assert!(matches!(err, CatalogError::Json(_)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load_from_file("no/such/data.json").unwrap_err();
        assert!(matches!(err, CatalogError::Io(_)));
    }
}
