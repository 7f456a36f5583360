use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{Result, ValoraError};

/// Fallback base value when neither an estimated current value nor a
/// purchase price is supplied.
pub const DEFAULT_BASE_VALUE: f64 = 300_000.0;

pub const MIN_PROJECTION_YEARS: u32 = 1;
pub const MAX_PROJECTION_YEARS: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    #[schemars(description = "Buy, renovate and resell within a short window")]
    Flip,

    #[schemars(description = "Buy and hold for long-term appreciation")]
    BuyHold,

    #[schemars(description = "Buy and let; returns combine appreciation and rental cash flow")]
    Rental,

    #[schemars(description = "Contract the property and assign the contract to another buyer")]
    Wholesale,

    #[schemars(description = "Any strategy outside the standard four")]
    Other,
}

/// Physical condition of the property. Informational only; the formulas
/// never read it, but the remote advisor receives it as context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    Excellent,
    Good,
    Fair,
    Poor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Occupancy {
    OwnerOccupied,
    Tenanted,
    Vacant,
}

/// Everything the operator tells us about a property before analysis.
///
/// Currency amounts are in whole currency units (USD for the demo). Optional
/// amounts set to `Some(0.0)` or less are treated as absent by
/// [`base_value`](PropertyInput::base_value), matching the form widgets that
/// default numeric fields to zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PropertyInput {
    pub address: String,

    pub estimated_current_value: Option<f64>,

    pub purchase_price: Option<f64>,

    pub repair_cost: Option<f64>,

    pub beds: Option<u32>,

    pub baths: Option<u32>,

    /// Floor area in square feet. Informational only.
    pub floor_area_sqft: Option<f64>,

    pub condition: Option<Condition>,

    pub occupancy: Option<Occupancy>,

    /// Whole years to project over, bounded 1-10.
    pub projection_years: u32,

    pub strategy: Strategy,
}

impl PropertyInput {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            estimated_current_value: None,
            purchase_price: None,
            repair_cost: None,
            beds: None,
            baths: None,
            floor_area_sqft: None,
            condition: None,
            occupancy: None,
            projection_years: 3,
            strategy: Strategy::BuyHold,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.address.trim().is_empty() {
            return Err(ValoraError::InvalidInput("address is empty".to_string()));
        }

        if !(MIN_PROJECTION_YEARS..=MAX_PROJECTION_YEARS).contains(&self.projection_years) {
            return Err(ValoraError::InvalidInput(format!(
                "projection_years {} out of range {}-{}",
                self.projection_years, MIN_PROJECTION_YEARS, MAX_PROJECTION_YEARS
            )));
        }

        for (name, amount) in [
            ("estimated_current_value", self.estimated_current_value),
            ("purchase_price", self.purchase_price),
            ("repair_cost", self.repair_cost),
        ] {
            if let Some(value) = amount {
                if !value.is_finite() || value < 0.0 {
                    return Err(ValoraError::InvalidInput(format!(
                        "{} must be a non-negative finite amount, got {}",
                        name, value
                    )));
                }
            }
        }

        Ok(())
    }

    /// The value compounding starts from: current estimate if positive, else
    /// purchase price if positive, else [`DEFAULT_BASE_VALUE`].
    pub fn base_value(&self) -> f64 {
        self.estimated_current_value
            .filter(|v| *v > 0.0)
            .or_else(|| self.purchase_price.filter(|v| *v > 0.0))
            .unwrap_or(DEFAULT_BASE_VALUE)
    }

    /// True when the operator supplied a usable valuation, i.e. the base did
    /// not fall back to the default constant.
    pub fn has_valuation(&self) -> bool {
        self.estimated_current_value.is_some_and(|v| v > 0.0)
            || self.purchase_price.is_some_and(|v| v > 0.0)
    }

    pub fn repair_cost_or_zero(&self) -> f64 {
        self.repair_cost.filter(|v| *v > 0.0).unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_value_prefers_estimate_over_purchase_price() {
        let mut input = PropertyInput::new("12 Test Ln");
        input.estimated_current_value = Some(500_000.0);
        input.purchase_price = Some(450_000.0);
        assert_eq!(input.base_value(), 500_000.0);

        input.estimated_current_value = None;
        assert_eq!(input.base_value(), 450_000.0);
    }

    #[test]
    fn test_base_value_falls_back_when_nothing_usable() {
        let mut input = PropertyInput::new("12 Test Ln");
        assert_eq!(input.base_value(), DEFAULT_BASE_VALUE);
        assert!(!input.has_valuation());

        // Zeroed form fields count as absent.
        input.estimated_current_value = Some(0.0);
        input.purchase_price = Some(0.0);
        assert_eq!(input.base_value(), DEFAULT_BASE_VALUE);
        assert!(!input.has_valuation());
    }

    #[test]
    fn test_validate_rejects_out_of_range_horizon() {
        let mut input = PropertyInput::new("12 Test Ln");
        input.projection_years = 0;
        assert!(input.validate().is_err());

        input.projection_years = 11;
        assert!(input.validate().is_err());

        input.projection_years = 10;
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_negative_amounts() {
        let mut input = PropertyInput::new("12 Test Ln");
        input.repair_cost = Some(-5.0);
        let err = input.validate().unwrap_err();
        assert!(matches!(err, ValoraError::InvalidInput(_)));
    }

    #[test]
    fn test_strategy_wire_tags() {
        assert_eq!(
            serde_json::to_string(&Strategy::BuyHold).unwrap(),
            "\"buy_hold\""
        );
        assert_eq!(serde_json::to_string(&Strategy::Flip).unwrap(), "\"flip\"");
        let parsed: Strategy = serde_json::from_str("\"wholesale\"").unwrap();
        assert_eq!(parsed, Strategy::Wholesale);
    }
}
