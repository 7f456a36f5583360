use thiserror::Error;

#[derive(Error, Debug)]
pub enum ValoraError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("No API credential available: set OPENAI_API_KEY or supply a session key")]
    MissingCredential,

    #[cfg(feature = "openai")]
    #[error("Remote service request failed: {0}")]
    Service(#[from] reqwest::Error),

    #[error("Remote service returned an error (status {status}): {body}")]
    ServiceStatus { status: u16, body: String },

    #[error("Could not parse model reply as an investment report: {reason}\n--- raw reply ---\n{raw}")]
    MalformedResponse { reason: String, raw: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ValoraError>;
