//! Prompt construction for the three suggestion kinds.
//!
//! Pure string building: the full inventory and sales history are embedded
//! as pretty-printed JSON, followed by kind-specific analysis instructions
//! and an explicit output contract (JSON array, at most five objects, no
//! prose).

use stocksense_catalog::{Product, SalesHistory};

use crate::kind::SuggestionKind;

/// Build the user prompt for one suggestion request.
///
/// Deterministic given its inputs; no I/O.
pub fn build_prompt(
    kind: SuggestionKind,
    inventory: &[Product],
    sales_history: &[SalesHistory],
) -> String {
    // Serializing plain structs cannot fail.
    let inventory_json =
        serde_json::to_string_pretty(inventory).unwrap_or_else(|_| "[]".to_string());
    let sales_json =
        serde_json::to_string_pretty(sales_history).unwrap_or_else(|_| "[]".to_string());

    format!(
        "\n{role}\n\nInventory Data:\n{inventory_json}\n\nSales History:\n{sales_json}\n\n\
Instructions:\n{instructions}\n\nReturn ONLY a valid JSON array with the following structure:\n\
{schema}\n\n{limit} Return JSON only, no other text.\n",
        role = role_framing(kind),
        instructions = analysis_instructions(kind),
        schema = output_schema(kind),
        limit = result_limit(kind),
    )
}

fn role_framing(kind: SuggestionKind) -> &'static str {
    match kind {
        SuggestionKind::Restock => {
            "You are an inventory management AI assistant. Analyze the following inventory data and suggest products that need restocking."
        }
        SuggestionKind::Price => {
            "You are a pricing strategy AI assistant. Analyze the following inventory and sales data to suggest optimal price adjustments."
        }
        SuggestionKind::Trending => {
            "You are a trend analysis AI assistant. Identify products with high sales potential based on inventory and sales data."
        }
    }
}

fn analysis_instructions(kind: SuggestionKind) -> &'static str {
    match kind {
        SuggestionKind::Restock => {
            "1. Identify products with low stock relative to their monthly sales velocity\n\
2. Consider products with stock < 30 units as high urgency\n\
3. Consider products with stock < 50 units as medium urgency\n\
4. Consider sales trends and growth rates\n\
5. Suggest appropriate restock quantities"
        }
        SuggestionKind::Price => {
            "1. Analyze demand trends (growth rate, sales pattern)\n\
2. Consider stock availability (low stock may justify price increase)\n\
3. Suggest price adjustments based on market dynamics\n\
4. Keep changes reasonable (typically ±15%)\n\
5. Provide clear reasoning for each suggestion"
        }
        SuggestionKind::Trending => {
            "1. Analyze growth rates and sales trends\n\
2. Look for products with consistent upward momentum\n\
3. Consider both absolute sales and growth percentage\n\
4. Identify products likely to see increased demand\n\
5. Provide trend analysis and projected sales increase"
        }
    }
}

fn output_schema(kind: SuggestionKind) -> &'static str {
    match kind {
        SuggestionKind::Restock => {
            r#"[
  {
    "product_id": "PRD001",
    "name": "Product Name",
    "urgency": "high" | "medium" | "low",
    "reason": "Brief explanation",
    "suggested_quantity": number
  }
]"#
        }
        SuggestionKind::Price => {
            r#"[
  {
    "product_id": "PRD001",
    "name": "Product Name",
    "current_price": number,
    "suggested_price": number,
    "change_percentage": number,
    "reasoning": "Brief explanation of why this price makes sense"
  }
]"#
        }
        SuggestionKind::Trending => {
            r#"[
  {
    "product_id": "PRD001",
    "name": "Product Name",
    "category": "Category",
    "growth_potential": "high" | "medium" | "low",
    "trend_analysis": "Brief analysis of why this product is trending",
    "projected_sales_increase": number (percentage)
  }
]"#
        }
    }
}

fn result_limit(kind: SuggestionKind) -> &'static str {
    match kind {
        SuggestionKind::Restock => "Limit to top 5 most urgent items.",
        SuggestionKind::Price => "Limit to top 5 recommendations.",
        SuggestionKind::Trending => "Limit to top 5 trending products.",
    }
}
