use serde::{Deserialize, Serialize};

/// A catalog entry as shipped in the static inventory dataset.
///
/// `product_id` is unique within the dataset. Prices are plain decimals in the
/// store currency; the dashboard never does arithmetic on them beyond display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub product_id: String,
    pub name: String,
    pub category: String,
    pub current_stock: u32,
    pub price: f64,
    pub monthly_sales: u32,
}

/// Per-product sales series with a precomputed growth rate.
///
/// `monthly_sales` is ordered oldest-first. `growth_rate` is a fraction
/// (0.15 = 15% month-over-month), computed offline when the dataset is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesHistory {
    pub product_id: String,
    pub monthly_sales: Vec<u32>,
    pub growth_rate: f64,
}
