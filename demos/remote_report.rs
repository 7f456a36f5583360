//! Remote analysis against a live chat-completion endpoint.
//!
//! Needs OPENAI_API_KEY in the environment (or a .env file).
//! Run with: cargo run --example remote_report

use valora::{ApiCredentials, OpenAiAdvisor, PropertyInput, ReportGenerator, Strategy};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let mut input = PropertyInput::new("123 Main St, Los Angeles, CA");
    input.estimated_current_value = Some(750_000.0);
    input.projection_years = 3;
    input.strategy = Strategy::BuyHold;

    let advisor = OpenAiAdvisor::new(&ApiCredentials::from_env())?;
    let report = advisor.generate(&input).await?;

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
