use std::path::Path;
use std::sync::Arc;

use stocksense_ai::{GroqChat, SuggestionService};
use stocksense_api::app::{self, AppState};
use stocksense_catalog::Datasets;

#[tokio::main]
async fn main() {
    stocksense_observability::init();

    let data_dir =
        std::env::var("STOCKSENSE_DATA_DIR").unwrap_or_else(|_| "data".to_string());
    let datasets = match Datasets::load(Path::new(&data_dir)) {
        Ok(d) => d,
        Err(e) => {
            tracing::error!(error = %e, %data_dir, "failed to load datasets");
            std::process::exit(1);
        }
    };
    tracing::info!(
        products = datasets.inventory.len(),
        histories = datasets.sales_history.len(),
        "datasets loaded"
    );

    let model = match GroqChat::from_env() {
        Ok(m) => m,
        Err(e) => {
            tracing::error!(error = %e, "failed to configure chat model");
            std::process::exit(1);
        }
    };

    let state = AppState::new(
        Arc::new(datasets),
        SuggestionService::new(Arc::new(model)),
    );
    let app = app::build_app(state);

    let listener = tokio::net::TcpListener::bind("0.0.0.0:8080")
        .await
        .expect("failed to bind 0.0.0.0:8080");

    tracing::info!("listening on {}", listener.local_addr().unwrap());

    axum::serve(listener, app).await.unwrap();
}
