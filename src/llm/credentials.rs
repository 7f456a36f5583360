use crate::error::{Result, ValoraError};

/// Resolves the API token for the remote service.
///
/// Two sources, checked in order: an operator-supplied session key (entered at
/// runtime, scoped to this value, never persisted), then the process
/// environment. Passed explicitly into the client at construction time rather
/// than living in ambient mutable state, so the remote path stays testable
/// without a simulated session.
#[derive(Debug, Clone, Default)]
pub struct ApiCredentials {
    session_key: Option<String>,
}

impl ApiCredentials {
    pub const ENV_VAR: &'static str = "OPENAI_API_KEY";

    /// Environment-only resolution.
    pub fn from_env() -> Self {
        Self { session_key: None }
    }

    /// Prefer an operator-entered key over the environment.
    pub fn from_session_key(key: impl Into<String>) -> Self {
        Self {
            session_key: Some(key.into()),
        }
    }

    /// Yields the token or fails with [`ValoraError::MissingCredential`].
    /// Empty strings count as absent.
    pub fn resolve(&self) -> Result<String> {
        Self::resolve_from(self.session_key.as_deref(), std::env::var(Self::ENV_VAR).ok())
    }

    fn resolve_from(session_key: Option<&str>, env_value: Option<String>) -> Result<String> {
        if let Some(key) = session_key {
            if !key.trim().is_empty() {
                return Ok(key.to_string());
            }
        }
        env_value
            .filter(|key| !key.trim().is_empty())
            .ok_or(ValoraError::MissingCredential)
    }
}
