use std::sync::Arc;

use stocksense_ai::SuggestionService;
use stocksense_catalog::Datasets;

/// Shared per-process state.
///
/// Datasets are loaded once and read-only; the service holds the chat-model
/// handle. Requests never mutate either, so plain `Arc` sharing is enough.
#[derive(Clone)]
pub struct AppState {
    pub datasets: Arc<Datasets>,
    pub service: SuggestionService,
}

impl AppState {
    pub fn new(datasets: Arc<Datasets>, service: SuggestionService) -> Self {
        Self { datasets, service }
    }
}
