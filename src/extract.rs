use log::debug;
use serde_json::Value;

use crate::error::{Result, ValoraError};
use crate::report::InvestmentReport;

/// Pulls a JSON document out of an arbitrary model reply, defensively.
///
/// Generative services routinely wrap structured output in code fences or
/// surrounding prose despite instructions not to, so parsing proceeds in
/// order, first success wins:
///
/// 1. trim, strip a surrounding ``` fence if present, parse;
/// 2. otherwise take the first `{` through the last `}` of the original text
///    and parse that;
/// 3. otherwise fail with [`ValoraError::MalformedResponse`] carrying the raw
///    text for diagnostic display.
pub fn extract_json_value(raw: &str) -> Result<Value> {
    let candidate = strip_code_fence(raw);

    let first_error = match serde_json::from_str::<Value>(candidate) {
        Ok(value) => return Ok(value),
        Err(e) => e,
    };

    // Brace-scan fallback over the original text.
    if let (Some(start), Some(end)) = (raw.find('{'), raw.rfind('}')) {
        if end > start {
            debug!("direct parse failed, retrying on brace-delimited substring");
            if let Ok(value) = serde_json::from_str::<Value>(&raw[start..=end]) {
                return Ok(value);
            }
        }
    }

    Err(ValoraError::MalformedResponse {
        reason: first_error.to_string(),
        raw: raw.to_string(),
    })
}

/// Converts an arbitrary model reply into an [`InvestmentReport`].
///
/// Runs [`extract_json_value`], deserializes the document into the report
/// schema, then integrity-checks it (see [`InvestmentReport::validate`]). A
/// reply that parses as JSON but breaks the schema or its invariants is also
/// malformed; no partial report is ever synthesized.
pub fn extract_report(raw: &str) -> Result<InvestmentReport> {
    let value = extract_json_value(raw)?;
    let report = serde_json::from_value::<InvestmentReport>(value).map_err(|e| {
        ValoraError::MalformedResponse {
            reason: e.to_string(),
            raw: raw.to_string(),
        }
    })?;
    check_integrity(report, raw)
}

/// Removes surrounding markdown fence lines (```json ... ```), if any.
fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    if !trimmed.starts_with("```") {
        return trimmed;
    }

    let mut inner = trimmed;
    if let Some(after_first_line) = inner.splitn(2, '\n').nth(1) {
        inner = after_first_line;
    }
    if let Some(end) = inner.rfind("```") {
        inner = &inner[..end];
    }
    inner.trim()
}

fn check_integrity(report: InvestmentReport, raw: &str) -> Result<InvestmentReport> {
    report
        .validate()
        .map_err(|reason| ValoraError::MalformedResponse {
            reason,
            raw: raw.to_string(),
        })?;
    Ok(report)
}
