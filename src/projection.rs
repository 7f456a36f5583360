use chrono::Datelike;
use log::{debug, info};

use crate::error::{Result, ValoraError};
use crate::generator::ReportGenerator;
use crate::input::{PropertyInput, Strategy};
use crate::report::{
    InvestmentReport, NegotiationTip, Prediction, ProjectedValue, PropertySummary, StrategyAdvice,
};

/// Canonical appreciation rate, percent per year.
pub const DEFAULT_ANNUAL_GROWTH_PCT: f64 = 3.5;

/// Estimated monthly rent as a fraction of property value.
pub const MONTHLY_RENT_RATIO: f64 = 0.008;

/// Estimated yearly operating expenses as a fraction of property value.
pub const YEARLY_EXPENSE_RATIO: f64 = 0.01;

/// Suggested discount as a fraction of the base value.
pub const NEGOTIATION_DISCOUNT_RATIO: f64 = 0.03;

/// Confidence reported when the operator supplied a valuation.
pub const INFORMED_CONFIDENCE_PCT: f64 = 75.0;

/// Confidence reported when the base value fell back to the default constant.
pub const DEFAULTED_CONFIDENCE_PCT: f64 = 60.0;

pub const CURRENCY: &str = "USD";

/// Compounded value after `years` whole years of growth.
pub fn future_value(base: f64, growth_pct: f64, years: u32) -> f64 {
    base * (1.0 + growth_pct / 100.0).powi(years as i32)
}

/// Year-by-year compound projection, 1-indexed from `start_year`, each value
/// rounded to the nearest whole currency unit.
pub fn projected_values(
    base: f64,
    growth_pct: f64,
    start_year: i32,
    years: u32,
) -> Vec<ProjectedValue> {
    (1..=years)
        .map(|i| ProjectedValue {
            year: start_year + i as i32,
            value: future_value(base, growth_pct, i).round(),
        })
        .collect()
}

/// Strategy-conditioned return on capital deployed, as a ratio (0.1 = 10%).
///
/// `wholesale` and `other` have no dedicated formula and reuse the
/// buy-and-hold appreciation return. The base (and the base plus repairs,
/// where repairs enter the denominator) must be positive; a zero or negative
/// capital base is an `InvalidInput`, never NaN or infinity.
pub fn strategy_roi(
    strategy: Strategy,
    base: f64,
    repair_cost: f64,
    growth_pct: f64,
    years: u32,
) -> Result<f64> {
    if base <= 0.0 {
        return Err(ValoraError::InvalidInput(format!(
            "base value must be positive to compute ROI, got {}",
            base
        )));
    }
    if repair_cost < 0.0 {
        return Err(ValoraError::InvalidInput(format!(
            "repair cost must be non-negative, got {}",
            repair_cost
        )));
    }

    let fv = future_value(base, growth_pct, years);
    let invested = base + repair_cost;

    let roi = match strategy {
        Strategy::Flip => (fv - invested) / invested,
        Strategy::Rental => {
            let monthly_rent = base * MONTHLY_RENT_RATIO;
            let yearly_expenses = base * YEARLY_EXPENSE_RATIO;
            let cash_flow = (monthly_rent * 12.0 - yearly_expenses) * years as f64;
            (fv + cash_flow - invested) / invested
        }
        Strategy::BuyHold | Strategy::Wholesale | Strategy::Other => (fv - base) / base,
    };

    Ok(roi)
}

/// Deterministic, offline report generator.
///
/// A pure function of its input: identical inputs always yield an identical
/// report. The projection is anchored at a fixed current year captured when
/// the calculator is constructed, so one calculator instance is stable across
/// calls within a session.
#[derive(Debug, Clone)]
pub struct LocalProjectionCalculator {
    growth_pct: f64,
    current_year: i32,
}

impl Default for LocalProjectionCalculator {
    fn default() -> Self {
        Self::new()
    }
}

impl LocalProjectionCalculator {
    pub fn new() -> Self {
        Self {
            growth_pct: DEFAULT_ANNUAL_GROWTH_PCT,
            current_year: chrono::Utc::now().year(),
        }
    }

    pub fn with_growth_pct(mut self, growth_pct: f64) -> Self {
        self.growth_pct = growth_pct;
        self
    }

    /// Pins the projection start year, mainly for reproducible tests.
    pub fn with_current_year(mut self, year: i32) -> Self {
        self.current_year = year;
        self
    }

    pub fn compute(&self, input: &PropertyInput) -> Result<InvestmentReport> {
        input.validate()?;

        let base = input.base_value();
        let repair_cost = input.repair_cost_or_zero();
        let years = input.projection_years;

        info!(
            "Computing local projection for '{}' over {} years (strategy {:?})",
            input.address, years, input.strategy
        );

        let projected = projected_values(base, self.growth_pct, self.current_year, years);
        let roi = strategy_roi(input.strategy, base, repair_cost, self.growth_pct, years)?;

        let confidence_pct = if input.has_valuation() {
            INFORMED_CONFIDENCE_PCT
        } else {
            debug!(
                "no valuation supplied; using fallback base {} and lowering confidence",
                base
            );
            DEFAULTED_CONFIDENCE_PCT
        };

        let report = InvestmentReport {
            property: PropertySummary {
                address: input.address.clone(),
                estimated_current_value: base,
                currency: CURRENCY.to_string(),
            },
            prediction: Prediction {
                annual_growth_pct: self.growth_pct,
                projection_years: years,
                projected_values: projected,
                confidence_pct,
            },
            strategy: StrategyAdvice {
                best_strategy: input.strategy,
                explanation: explanation_for(input.strategy).to_string(),
                expected_roi_pct: roi * 100.0,
            },
            negotiation_tip: NegotiationTip {
                amount_off_suggestion: (base * NEGOTIATION_DISCOUNT_RATIO).round(),
                reason: "Typical minor repairs and market friction.".to_string(),
            },
            comparables: Vec::new(),
            alternative_opportunities: Vec::new(),
        };

        Ok(report)
    }
}

fn explanation_for(strategy: Strategy) -> &'static str {
    match strategy {
        Strategy::Flip => "Repair spend is recovered through resale at the appreciated value.",
        Strategy::BuyHold => "Conservative recommendation based on generic market appreciation.",
        Strategy::Rental => "Appreciation plus rental cash flow net of operating expenses.",
        Strategy::Wholesale => "Assignment margin approximated by short-term appreciation.",
        Strategy::Other => "Generic appreciation-based return; no strategy-specific model.",
    }
}

#[async_trait::async_trait]
impl ReportGenerator for LocalProjectionCalculator {
    async fn generate(&self, input: &PropertyInput) -> Result<InvestmentReport> {
        self.compute(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flip_input() -> PropertyInput {
        let mut input = PropertyInput::new("456 Flip Ave, Austin, TX");
        input.purchase_price = Some(300_000.0);
        input.repair_cost = Some(20_000.0);
        input.projection_years = 5;
        input.strategy = Strategy::Flip;
        input
    }

    #[test]
    fn test_future_value_compounds() {
        let fv = future_value(100_000.0, 10.0, 2);
        assert!((fv - 121_000.0).abs() < 1e-6);
    }

    #[test]
    fn test_projected_values_cover_horizon_and_increase() {
        for years in [1u32, 3, 7, 10] {
            let series = projected_values(250_000.0, 3.5, 2026, years);
            assert_eq!(series.len(), years as usize);
            assert_eq!(series[0].year, 2027);
            for pair in series.windows(2) {
                assert!(pair[1].value > pair[0].value);
                assert_eq!(pair[1].year, pair[0].year + 1);
            }
            for point in &series {
                assert!(point.value >= 0.0);
                assert_eq!(point.value, point.value.round());
            }
        }
    }

    #[test]
    fn test_buy_hold_roi_is_pure_appreciation() {
        let roi = strategy_roi(Strategy::BuyHold, 200_000.0, 0.0, 3.5, 4).unwrap();
        let expected = future_value(200_000.0, 3.5, 4) / 200_000.0 - 1.0;
        assert!((roi - expected).abs() < 1e-12);
    }

    #[test]
    fn test_flip_roi_includes_repair_cost_in_denominator() {
        let roi = strategy_roi(Strategy::Flip, 300_000.0, 20_000.0, 3.5, 5).unwrap();
        let fv = future_value(300_000.0, 3.5, 5);
        let expected = (fv - 320_000.0) / 320_000.0;
        assert!((roi - expected).abs() < 1e-12);
        // Roughly 11.3% over the 5 years.
        assert!((roi - 0.1133).abs() < 0.002, "got {}", roi);
    }

    #[test]
    fn test_rental_roi_adds_cash_flow() {
        let base = 250_000.0;
        let roi = strategy_roi(Strategy::Rental, base, 10_000.0, 3.5, 5).unwrap();

        let fv = future_value(base, 3.5, 5);
        let cash_flow = (base * 0.008 * 12.0 - base * 0.01) * 5.0;
        let expected = (fv + cash_flow - 260_000.0) / 260_000.0;
        assert!((roi - expected).abs() < 1e-12);
        assert!(roi > strategy_roi(Strategy::BuyHold, base, 0.0, 3.5, 5).unwrap());
    }

    #[test]
    fn test_zero_base_is_invalid_input_not_nan() {
        for strategy in [Strategy::BuyHold, Strategy::Flip, Strategy::Rental] {
            let err = strategy_roi(strategy, 0.0, 0.0, 3.5, 5).unwrap_err();
            assert!(matches!(err, ValoraError::InvalidInput(_)));
        }
    }

    #[test]
    fn test_compute_is_idempotent() {
        let calc = LocalProjectionCalculator::new().with_current_year(2026);
        let input = flip_input();
        let first = calc.compute(&input).unwrap();
        let second = calc.compute(&input).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_compute_populates_report() {
        let calc = LocalProjectionCalculator::new().with_current_year(2026);
        let report = calc.compute(&flip_input()).unwrap();

        assert_eq!(report.property.currency, "USD");
        assert_eq!(report.property.estimated_current_value, 300_000.0);
        assert_eq!(report.prediction.projection_years, 5);
        assert_eq!(report.prediction.projected_values.len(), 5);
        assert_eq!(report.prediction.confidence_pct, INFORMED_CONFIDENCE_PCT);
        assert_eq!(report.strategy.best_strategy, Strategy::Flip);
        assert_eq!(report.negotiation_tip.amount_off_suggestion, 9_000.0);
        assert!(report.comparables.is_empty());
        assert!(report.validate().is_ok());
    }

    #[test]
    fn test_compute_lowers_confidence_when_defaults_used() {
        let calc = LocalProjectionCalculator::new().with_current_year(2026);
        let mut input = PropertyInput::new("No Price Pl");
        input.projection_years = 2;
        let report = calc.compute(&input).unwrap();
        assert_eq!(report.property.estimated_current_value, 300_000.0);
        assert_eq!(report.prediction.confidence_pct, DEFAULTED_CONFIDENCE_PCT);
    }
}
