//! Canned results for smooth, offline demos.
//!
//! Mirrors the behavior of the original dashboard's demo mode: a known
//! showcase address gets a polished, hand-written report; anything else falls
//! back to the deterministic local calculator.

use log::info;

use crate::error::Result;
use crate::generator::ReportGenerator;
use crate::input::{PropertyInput, Strategy};
use crate::projection::LocalProjectionCalculator;
use crate::report::{
    AlternativeOpportunity, Comparable, InvestmentReport, NegotiationTip, OpportunityKind,
    Prediction, ProjectedValue, PropertySummary, StrategyAdvice,
};

pub const SHOWCASE_ADDRESS: &str = "123 Main St, Los Angeles, CA";

/// Returns the hand-written report for a showcase address, if there is one.
pub fn canned_report(address: &str) -> Option<InvestmentReport> {
    if address.trim() != SHOWCASE_ADDRESS {
        return None;
    }

    Some(InvestmentReport {
        property: PropertySummary {
            address: SHOWCASE_ADDRESS.to_string(),
            estimated_current_value: 750_000.0,
            currency: "USD".to_string(),
        },
        prediction: Prediction {
            annual_growth_pct: 4.5,
            projection_years: 3,
            projected_values: vec![
                ProjectedValue {
                    year: 2025,
                    value: 783_750.0,
                },
                ProjectedValue {
                    year: 2026,
                    value: 818_900.0,
                },
                ProjectedValue {
                    year: 2027,
                    value: 855_120.0,
                },
            ],
            confidence_pct: 78.0,
        },
        strategy: StrategyAdvice {
            best_strategy: Strategy::BuyHold,
            explanation: "Strong rental demand and steady appreciation in this zip code."
                .to_string(),
            expected_roi_pct: 8.1,
        },
        negotiation_tip: NegotiationTip {
            amount_off_suggestion: 20_000.0,
            reason: "Older roof and 45 days on market give negotiating leverage.".to_string(),
        },
        comparables: vec![
            Comparable {
                address: "118 Elm St".to_string(),
                sale_price: 732_000.0,
                days_on_market: 38,
            },
            Comparable {
                address: "234 Oak Ave".to_string(),
                sale_price: 769_000.0,
                days_on_market: 22,
            },
        ],
        alternative_opportunities: vec![AlternativeOpportunity {
            kind: OpportunityKind::Duplex,
            address: "200 Maple St".to_string(),
            estimated_roi_pct: 9.2,
        }],
    })
}

/// Generator for presentations: canned report when the address is known,
/// local formulas otherwise. Never touches the network.
#[derive(Debug, Clone, Default)]
pub struct DemoReportGenerator {
    fallback: LocalProjectionCalculator,
}

impl DemoReportGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fallback(fallback: LocalProjectionCalculator) -> Self {
        Self { fallback }
    }
}

#[async_trait::async_trait]
impl ReportGenerator for DemoReportGenerator {
    async fn generate(&self, input: &PropertyInput) -> Result<InvestmentReport> {
        if let Some(report) = canned_report(&input.address) {
            info!("Demo mode: serving canned report for '{}'", input.address);
            return Ok(report);
        }
        self.fallback.compute(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canned_report_only_for_showcase_address() {
        let report = canned_report(SHOWCASE_ADDRESS).unwrap();
        assert_eq!(report.prediction.projected_values.len(), 3);
        assert!(report.validate().is_ok());

        assert!(canned_report("9 Nowhere Rd").is_none());
    }

    #[tokio::test]
    async fn test_demo_generator_falls_back_to_local_formulas() {
        let demo =
            DemoReportGenerator::with_fallback(LocalProjectionCalculator::new().with_current_year(2026));

        let mut input = PropertyInput::new(SHOWCASE_ADDRESS);
        input.projection_years = 3;
        let canned = demo.generate(&input).await.unwrap();
        assert_eq!(canned.prediction.confidence_pct, 78.0);

        let mut other = PropertyInput::new("9 Nowhere Rd");
        other.estimated_current_value = Some(400_000.0);
        other.projection_years = 4;
        let computed = demo.generate(&other).await.unwrap();
        assert_eq!(computed.prediction.projected_values.len(), 4);
        assert!(computed.comparables.is_empty());
    }
}
