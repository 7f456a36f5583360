use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::input::Strategy;

/// One point of the value projection series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ProjectedValue {
    #[schemars(description = "Calendar year the projection applies to, e.g. 2027")]
    pub year: i32,

    #[schemars(description = "Projected value in whole currency units")]
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PropertySummary {
    pub address: String,

    pub estimated_current_value: f64,

    #[schemars(description = "ISO 4217 currency code, e.g. USD")]
    pub currency: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Prediction {
    pub annual_growth_pct: f64,

    pub projection_years: u32,

    #[schemars(description = "One entry per projected year, covering the whole horizon in order")]
    pub projected_values: Vec<ProjectedValue>,

    #[schemars(description = "Self-reported certainty; lowered when inputs were incomplete")]
    pub confidence_pct: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct StrategyAdvice {
    pub best_strategy: Strategy,

    #[schemars(description = "Short plain-sentence reason for the recommendation")]
    pub explanation: String,

    pub expected_roi_pct: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct NegotiationTip {
    pub amount_off_suggestion: f64,

    #[schemars(description = "One-line justification for the suggested discount")]
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Comparable {
    pub address: String,

    pub sale_price: f64,

    pub days_on_market: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum OpportunityKind {
    Duplex,
    NearbyHouse,
    Lot,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AlternativeOpportunity {
    #[serde(rename = "type")]
    pub kind: OpportunityKind,

    pub address: String,

    pub estimated_roi_pct: f64,
}

/// The single structured output of every analysis, local or remote.
///
/// Field names and nesting are the wire contract: they must match the JSON
/// schema the system prompt mandates, so any service honoring the prompt
/// interoperates with this type unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct InvestmentReport {
    pub property: PropertySummary,

    pub prediction: Prediction,

    pub strategy: StrategyAdvice,

    pub negotiation_tip: NegotiationTip,

    #[serde(default)]
    pub comparables: Vec<Comparable>,

    #[serde(default)]
    pub alternative_opportunities: Vec<AlternativeOpportunity>,
}

impl InvestmentReport {
    /// Checks the report invariants, returning the first violation found.
    ///
    /// The projection series must cover exactly the stated horizon, monetary
    /// fields must be non-negative, and percentages must be finite numbers.
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.prediction.projected_values.len() != self.prediction.projection_years as usize {
            return Err(format!(
                "projected_values has {} entries but projection_years is {}",
                self.prediction.projected_values.len(),
                self.prediction.projection_years
            ));
        }

        if self.property.estimated_current_value < 0.0 {
            return Err(format!(
                "estimated_current_value is negative: {}",
                self.property.estimated_current_value
            ));
        }

        for point in &self.prediction.projected_values {
            if !point.value.is_finite() || point.value < 0.0 {
                return Err(format!(
                    "projected value for year {} is not a non-negative number: {}",
                    point.year, point.value
                ));
            }
        }

        for (name, pct) in [
            ("annual_growth_pct", self.prediction.annual_growth_pct),
            ("confidence_pct", self.prediction.confidence_pct),
            ("expected_roi_pct", self.strategy.expected_roi_pct),
        ] {
            if !pct.is_finite() {
                return Err(format!("{} is not a finite number: {}", name, pct));
            }
        }

        if self.negotiation_tip.amount_off_suggestion < 0.0 {
            return Err(format!(
                "amount_off_suggestion is negative: {}",
                self.negotiation_tip.amount_off_suggestion
            ));
        }

        for comp in &self.comparables {
            if comp.sale_price < 0.0 {
                return Err(format!(
                    "comparable '{}' has negative sale_price: {}",
                    comp.address, comp.sale_price
                ));
            }
        }

        for alt in &self.alternative_opportunities {
            if !alt.estimated_roi_pct.is_finite() {
                return Err(format!(
                    "alternative opportunity '{}' has non-finite estimated_roi_pct",
                    alt.address
                ));
            }
        }

        Ok(())
    }

    pub fn generate_json_schema() -> schemars::schema::RootSchema {
        schemars::schema_for!(InvestmentReport)
    }

    pub fn schema_as_json() -> std::result::Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&Self::generate_json_schema())
    }
}
