use std::sync::Arc;

use serde_json::Value as JsonValue;
use stocksense_catalog::{Product, SalesHistory};

use crate::error::InsightError;
use crate::extract::extract_json;
use crate::kind::SuggestionKind;
use crate::llm::ChatModel;
use crate::prompt::build_prompt;

/// Composes prompt builder, chat model, and extractor for one kind at a time.
///
/// Stateless apart from the shared model handle; one instance serves all
/// kinds and all concurrent requests.
#[derive(Clone)]
pub struct SuggestionService {
    model: Arc<dyn ChatModel>,
}

impl SuggestionService {
    pub fn new(model: Arc<dyn ChatModel>) -> Self {
        Self { model }
    }

    /// Produce the suggestion array for `kind`.
    ///
    /// The elements are returned exactly as the model produced them; only
    /// the top-level array shape is enforced here. Callers wanting field
    /// validation run [`SuggestionKind::decode`] on the result.
    pub async fn suggestions(
        &self,
        kind: SuggestionKind,
        inventory: &[Product],
        sales_history: &[SalesHistory],
    ) -> Result<Vec<JsonValue>, InsightError> {
        let prompt = build_prompt(kind, inventory, sales_history);
        tracing::debug!(%kind, model = self.model.name(), prompt_chars = prompt.len(), "requesting suggestions");

        let raw = self.model.generate(&prompt, None).await?;
        tracing::debug!(%kind, response_chars = raw.len(), "full model response received");

        match extract_json(&raw)? {
            JsonValue::Array(items) => Ok(items),
            _ => Err(InsightError::Shape),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkit::MockChat;
    use serde_json::json;

    fn inventory() -> Vec<Product> {
        vec![Product {
            product_id: "PRD001".to_string(),
            name: "Wireless Mouse".to_string(),
            category: "Electronics".to_string(),
            current_stock: 25,
            price: 29.99,
            monthly_sales: 120,
        }]
    }

    fn history() -> Vec<SalesHistory> {
        vec![SalesHistory {
            product_id: "PRD001".to_string(),
            monthly_sales: vec![80, 95, 100, 110, 115, 120],
            growth_rate: 0.08,
        }]
    }

    fn service(model: MockChat) -> SuggestionService {
        SuggestionService::new(Arc::new(model))
    }

    #[tokio::test]
    async fn fenced_array_reply_yields_suggestions() {
        let reply = "Here you go:\n```json\n[{\"product_id\":\"PRD001\",\"name\":\"Wireless Mouse\",\"urgency\":\"high\",\"reason\":\"low stock\",\"suggested_quantity\":40}]\n```";
        let service = service(MockChat::replying(reply));

        let items = service
            .suggestions(SuggestionKind::Restock, &inventory(), &history())
            .await
            .unwrap();

        assert_eq!(items.len(), 1);
        assert_eq!(items[0]["urgency"], json!("high"));
    }

    #[tokio::test]
    async fn object_reply_fails_with_shape_error() {
        let service = service(MockChat::replying(r#"{"total": 3}"#));
        let err = service
            .suggestions(SuggestionKind::Price, &inventory(), &history())
            .await
            .unwrap_err();
        assert!(matches!(err, InsightError::Shape));
    }

    #[tokio::test]
    async fn prose_reply_fails_with_extraction_error() {
        let service = service(MockChat::replying("I cannot help with that."));
        let err = service
            .suggestions(SuggestionKind::Trending, &inventory(), &history())
            .await
            .unwrap_err();
        assert!(matches!(err, InsightError::Extraction));
    }

    #[tokio::test]
    async fn provider_failure_propagates_as_upstream() {
        let service = service(MockChat::failing("request timed out"));
        let err = service
            .suggestions(SuggestionKind::Restock, &inventory(), &history())
            .await
            .unwrap_err();
        assert!(matches!(err, InsightError::Upstream(_)));
        assert!(err.to_string().contains("request timed out"));
    }
}
