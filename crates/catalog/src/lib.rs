//! `stocksense-catalog` — static inventory domain data.
//!
//! This crate contains the **read-only** datasets the dashboard is built on:
//! - `Product`: one row per catalog entry.
//! - `SalesHistory`: per-product monthly sales series.
//! - `Datasets`: the loader that reads both JSON files once at process start.
//!
//! Nothing here is ever mutated after load; callers share the data via `Arc`.

pub mod dataset;
pub mod product;

pub use dataset::{CatalogError, Datasets};
pub use product::{Product, SalesHistory};
