use crate::error::Result;
use crate::input::PropertyInput;
use crate::report::InvestmentReport;

/// The single seam between input collection and presentation.
///
/// One submission, one report (or one typed error). Implementations:
/// [`LocalProjectionCalculator`](crate::projection::LocalProjectionCalculator)
/// for offline formula evaluation,
/// [`DemoReportGenerator`](crate::demo::DemoReportGenerator) for canned
/// showcase results, and `OpenAiAdvisor` (feature `openai`) for delegating the
/// reasoning to a chat-completion service. Callers pick the variant; nothing
/// here branches on flags.
#[async_trait::async_trait]
pub trait ReportGenerator {
    async fn generate(&self, input: &PropertyInput) -> Result<InvestmentReport>;
}
