//! Offline analysis: formulas only, no credentials, no network.
//!
//! Run with: cargo run --example local_report

use valora::{DemoReportGenerator, PropertyInput, ReportGenerator, Strategy};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let mut input = PropertyInput::new("456 Flip Ave, Austin, TX");
    input.purchase_price = Some(300_000.0);
    input.repair_cost = Some(20_000.0);
    input.projection_years = 5;
    input.strategy = Strategy::Flip;

    let generator = DemoReportGenerator::new();
    let report = generator.generate(&input).await?;

    println!("Report for {}", report.property.address);
    println!(
        "  Estimated value: {:.0} {}",
        report.property.estimated_current_value, report.property.currency
    );
    println!(
        "  Growth {:.1}%/yr, confidence {:.0}%",
        report.prediction.annual_growth_pct, report.prediction.confidence_pct
    );
    for point in &report.prediction.projected_values {
        println!("    {}: {:.0}", point.year, point.value);
    }
    println!(
        "  Strategy {:?}: expected ROI {:.2}% - {}",
        report.strategy.best_strategy,
        report.strategy.expected_roi_pct,
        report.strategy.explanation
    );
    println!(
        "  Negotiation tip: ask {:.0} off ({})",
        report.negotiation_tip.amount_off_suggestion, report.negotiation_tip.reason
    );

    Ok(())
}
