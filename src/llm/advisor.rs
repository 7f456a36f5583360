use log::{debug, info};

use crate::error::{Result, ValoraError};
use crate::extract::extract_report;
use crate::generator::ReportGenerator;
use crate::input::PropertyInput;
use crate::llm::client::{ChatMessage, ChatOptions, OpenAiClient};
use crate::llm::credentials::ApiCredentials;
use crate::llm::prompts::{user_payload, SYSTEM_PROMPT};
use crate::report::InvestmentReport;

/// Remote report generator: delegates the investment reasoning to a
/// chat-completion service under the strict schema contract.
///
/// Per submission: build the two-message prompt, make exactly one outbound
/// call, tolerantly extract the JSON report, cross-check it against the
/// requested horizon. Any failure aborts the submission with a typed error;
/// no partial report is produced.
#[derive(Debug)]
pub struct OpenAiAdvisor {
    client: OpenAiClient,
    options: ChatOptions,
}

impl OpenAiAdvisor {
    /// Fails with [`ValoraError::MissingCredential`] if no token resolves,
    /// before any network call is attempted.
    pub fn new(credentials: &ApiCredentials) -> Result<Self> {
        Ok(Self {
            client: OpenAiClient::new(credentials)?,
            options: ChatOptions::default(),
        })
    }

    pub fn with_options(mut self, options: ChatOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.options.model = model.into();
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.client = self.client.with_base_url(base_url);
        self
    }

    fn messages(input: &PropertyInput) -> Vec<ChatMessage> {
        vec![
            ChatMessage::system(SYSTEM_PROMPT),
            ChatMessage::user(user_payload(input)),
        ]
    }

    fn check_horizon(report: InvestmentReport, input: &PropertyInput, raw: &str) -> Result<InvestmentReport> {
        if report.prediction.projection_years != input.projection_years {
            return Err(ValoraError::MalformedResponse {
                reason: format!(
                    "report projects {} years but {} were requested",
                    report.prediction.projection_years, input.projection_years
                ),
                raw: raw.to_string(),
            });
        }
        Ok(report)
    }
}

#[async_trait::async_trait]
impl ReportGenerator for OpenAiAdvisor {
    async fn generate(&self, input: &PropertyInput) -> Result<InvestmentReport> {
        input.validate()?;

        info!(
            "Requesting remote investment report for '{}' ({} years, model {})",
            input.address, input.projection_years, self.options.model
        );

        let raw = self.client.chat(&self.options, Self::messages(input)).await?;
        debug!("remote reply: {} bytes", raw.len());

        let report = extract_report(&raw)?;
        Self::check_horizon(report, input, &raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input() -> PropertyInput {
        let mut input = PropertyInput::new("77 Harbor View, San Diego, CA");
        input.purchase_price = Some(650_000.0);
        input.projection_years = 3;
        input
    }

    #[test]
    fn test_messages_carry_system_contract_and_user_payload() {
        let messages = OpenAiAdvisor::messages(&input());
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, "system");
        assert!(messages[0].content.contains("Respond ONLY in valid JSON"));
        assert_eq!(messages[1].role, "user");

        let payload: serde_json::Value = serde_json::from_str(&messages[1].content).unwrap();
        assert_eq!(payload["purchase_price"], 650_000.0);
        assert_eq!(payload["projection_years"], 3);
    }

    #[test]
    fn test_horizon_mismatch_is_malformed() {
        let raw = serde_json::json!({
            "property": { "address": "77 Harbor View", "estimated_current_value": 650000, "currency": "USD" },
            "prediction": {
                "annual_growth_pct": 4.0,
                "projection_years": 2,
                "projected_values": [
                    { "year": 2027, "value": 676000 },
                    { "year": 2028, "value": 703040 }
                ],
                "confidence_pct": 70
            },
            "strategy": { "best_strategy": "buy_hold", "explanation": "ok", "expected_roi_pct": 8.0 },
            "negotiation_tip": { "amount_off_suggestion": 10000, "reason": "ok" }
        })
        .to_string();

        let report = extract_report(&raw).unwrap();
        let err = OpenAiAdvisor::check_horizon(report, &input(), &raw).unwrap_err();
        assert!(matches!(err, ValoraError::MalformedResponse { .. }));
    }
}
