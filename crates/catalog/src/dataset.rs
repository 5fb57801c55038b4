use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::product::{Product, SalesHistory};

/// Filenames the loader expects under the data directory.
const INVENTORY_FILE: &str = "inventory.json";
const SALES_HISTORY_FILE: &str = "sales-history.json";

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read dataset file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse dataset file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// The two static datasets the dashboard runs on.
///
/// Loaded once at process start and never mutated. Suggestion requests read
/// snapshots of these lists; there is no write path.
#[derive(Debug, Clone, PartialEq)]
pub struct Datasets {
    pub inventory: Vec<Product>,
    pub sales_history: Vec<SalesHistory>,
}

impl Datasets {
    /// Load `inventory.json` and `sales-history.json` from `dir`.
    pub fn load(dir: &Path) -> Result<Self, CatalogError> {
        let inventory = read_json(&dir.join(INVENTORY_FILE))?;
        let sales_history = read_json(&dir.join(SALES_HISTORY_FILE))?;
        Ok(Self {
            inventory,
            sales_history,
        })
    }

    /// Build datasets from already-loaded JSON text (used by tests and
    /// embedded deployments that ship the data in the binary).
    pub fn from_json(inventory: &str, sales_history: &str) -> Result<Self, CatalogError> {
        Ok(Self {
            inventory: parse_json(inventory, INVENTORY_FILE)?,
            sales_history: parse_json(sales_history, SALES_HISTORY_FILE)?,
        })
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, CatalogError> {
    let text = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| CatalogError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn parse_json<T: serde::de::DeserializeOwned>(text: &str, name: &str) -> Result<T, CatalogError> {
    serde_json::from_str(text).map_err(|source| CatalogError::Parse {
        path: PathBuf::from(name),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const INVENTORY: &str = r#"[
        {
            "product_id": "PRD001",
            "name": "Wireless Mouse",
            "category": "Electronics",
            "current_stock": 25,
            "price": 29.99,
            "monthly_sales": 120
        },
        {
            "product_id": "PRD002",
            "name": "Desk Lamp",
            "category": "Home",
            "current_stock": 140,
            "price": 45.50,
            "monthly_sales": 60
        }
    ]"#;

    const SALES_HISTORY: &str = r#"[
        {
            "product_id": "PRD001",
            "monthly_sales": [80, 95, 100, 110, 115, 120],
            "growth_rate": 0.08
        },
        {
            "product_id": "PRD002",
            "monthly_sales": [70, 68, 65, 62, 61, 60],
            "growth_rate": -0.03
        }
    ]"#;

    #[test]
    fn from_json_parses_both_datasets() {
        let datasets = Datasets::from_json(INVENTORY, SALES_HISTORY).unwrap();
        assert_eq!(datasets.inventory.len(), 2);
        assert_eq!(datasets.sales_history.len(), 2);
        assert_eq!(datasets.inventory[0].product_id, "PRD001");
        assert_eq!(datasets.sales_history[1].growth_rate, -0.03);
    }

    #[test]
    fn from_json_reports_the_failing_file() {
        let err = Datasets::from_json("not json", SALES_HISTORY).unwrap_err();
        match err {
            CatalogError::Parse { path, .. } => {
                assert_eq!(path, PathBuf::from("inventory.json"));
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn load_reports_missing_directory_as_io_error() {
        let err = Datasets::load(Path::new("/nonexistent/stocksense-data")).unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
    }
}
