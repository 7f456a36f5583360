//! # Valora
//!
//! Core library for a real estate investment dashboard: turn a handful of
//! property attributes into a structured [`InvestmentReport`], either by
//! evaluating fixed-rate financial formulas locally or by delegating the
//! reasoning to a chat-completion service under a strict JSON schema
//! contract.
//!
//! ## Core Concepts
//!
//! - **PropertyInput**: validated operator input (address, prices, horizon, strategy)
//! - **InvestmentReport**: the single wire-authoritative output shape
//! - **ReportGenerator**: one async interface, three variants (local formulas,
//!   canned demo, remote advisor) selected by the caller
//! - **Tolerant extraction**: model replies wrapped in code fences or prose
//!   are still parsed; anything worse fails with the raw text attached
//!
//! Presentation (forms, tables, charts) sits outside this crate: the caller
//! hands in a `PropertyInput` and renders the resulting report, and every
//! failure aborts only the current submission.
//!
//! ## Example
//!
//! ```rust
//! use valora::{LocalProjectionCalculator, PropertyInput, Strategy};
//!
//! let mut input = PropertyInput::new("123 Main St, Los Angeles, CA");
//! input.purchase_price = Some(300_000.0);
//! input.repair_cost = Some(20_000.0);
//! input.projection_years = 5;
//! input.strategy = Strategy::Flip;
//!
//! let report = LocalProjectionCalculator::new().compute(&input).unwrap();
//! assert_eq!(report.prediction.projected_values.len(), 5);
//! ```

pub mod demo;
pub mod error;
pub mod extract;
pub mod generator;
pub mod input;
pub mod projection;
pub mod report;

#[cfg(feature = "openai")]
pub mod llm;

pub use demo::{canned_report, DemoReportGenerator};
pub use error::{Result, ValoraError};
pub use extract::{extract_json_value, extract_report};
pub use generator::ReportGenerator;
pub use input::{
    Condition, Occupancy, PropertyInput, Strategy, DEFAULT_BASE_VALUE, MAX_PROJECTION_YEARS,
    MIN_PROJECTION_YEARS,
};
pub use projection::{
    future_value, projected_values, strategy_roi, LocalProjectionCalculator,
    DEFAULT_ANNUAL_GROWTH_PCT,
};
pub use report::{
    AlternativeOpportunity, Comparable, InvestmentReport, NegotiationTip, OpportunityKind,
    Prediction, ProjectedValue, PropertySummary, StrategyAdvice,
};

#[cfg(feature = "openai")]
pub use llm::{ApiCredentials, ChatOptions, OpenAiAdvisor, OpenAiClient};
