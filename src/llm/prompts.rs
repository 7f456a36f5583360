use serde_json::json;

use crate::input::PropertyInput;

/// Fixed instruction sent with every request. Mandates a JSON-only reply
/// matching the `InvestmentReport` wire schema, with the explicit fallback
/// rule: missing inputs still produce a complete document at a lowered
/// `confidence_pct`.
pub const SYSTEM_PROMPT: &str = r#"
You are Valora - a concise, data-driven real estate investment advisor.
Respond ONLY in valid JSON (no extra text) following this schema exactly:

{
  "property": {
    "address": "<string>",
    "estimated_current_value": <number>,
    "currency": "USD"
  },
  "prediction": {
    "annual_growth_pct": <number>,
    "projection_years": <int>,
    "projected_values": [
      { "year": 2025, "value": 312000 }
    ],
    "confidence_pct": <number>
  },
  "strategy": {
    "best_strategy": "<flip|buy_hold|rental|wholesale|other>",
    "explanation": "<short plain-sentence reason>",
    "expected_roi_pct": <number>
  },
  "negotiation_tip": {
    "amount_off_suggestion": <number>,
    "reason": "<one-line reason>"
  },
  "comparables": [
    { "address": "<string>", "sale_price": <number>, "days_on_market": <int> }
  ],
  "alternative_opportunities": [
    { "type": "duplex|nearby_house|lot", "address": "<string>", "estimated_roi_pct": <number> }
  ]
}

"projected_values" must contain exactly "projection_years" entries, one per year.
Use conservative, professional tone. If any input is missing, make a reasonable
assumption but set "confidence_pct" lower.
"#;

/// The user message: the property attributes serialized as JSON. Zeroed
/// optional amounts are sent as null so the model applies its fallback rule.
pub fn user_payload(input: &PropertyInput) -> String {
    json!({
        "address": input.address,
        "estimated_current_value": input.estimated_current_value.filter(|v| *v > 0.0),
        "purchase_price": input.purchase_price.filter(|v| *v > 0.0),
        "projection_years": input.projection_years,
    })
    .to_string()
}
