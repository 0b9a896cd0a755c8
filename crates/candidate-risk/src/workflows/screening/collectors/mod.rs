//! Boundary adapters for the three external signal providers.
//!
//! Each provider sits behind a trait so the screening service can be exercised with
//! in-process fakes. The HTTP implementations share one `reqwest::Client` configuration.

pub mod authorship;
pub mod email;
pub mod phone;

use std::time::Duration;

use async_trait::async_trait;

use super::domain::{EmailSignal, PhoneSignal};

pub use authorship::{build_prompt, parse_authorship_reply, ChatCompletionsGenerator};
pub use email::HttpEmailReputation;
pub use phone::HttpPhoneReputation;

const USER_AGENT: &str = concat!("candidate-risk/", env!("CARGO_PKG_VERSION"));

/// Email reputation lookup (format validity and disposable-domain detection).
#[async_trait]
pub trait EmailReputation: Send + Sync {
    async fn lookup(&self, email: &str) -> Result<EmailSignal, CollectorError>;
}

/// Phone reputation lookup (validity and line-type classification).
#[async_trait]
pub trait PhoneReputation: Send + Sync {
    async fn lookup(&self, phone: &str) -> Result<PhoneSignal, CollectorError>;
}

/// Free-text generation used by the AI-authorship estimator.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, CollectorError>;
}

/// Failure of a single collector. Never surfaced to the caller of a screening.
#[derive(Debug, thiserror::Error)]
pub enum CollectorError {
    #[error("transport failure: {0}")]
    Transport(String),
    #[error("upstream responded with status {0}")]
    Status(u16),
    #[error("malformed upstream response: {0}")]
    Malformed(String),
    #[error("upstream call timed out after {0:?}")]
    Timeout(Duration),
}

impl From<reqwest::Error> for CollectorError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            CollectorError::Malformed(err.to_string())
        } else if let Some(status) = err.status() {
            CollectorError::Status(status.as_u16())
        } else {
            CollectorError::Transport(err.to_string())
        }
    }
}

/// Builds the HTTP client shared by the provider adapters.
pub fn http_client(timeout: Duration) -> Result<reqwest::Client, CollectorError> {
    reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(timeout)
        .build()
        .map_err(|err| CollectorError::Transport(err.to_string()))
}

/// Rejects non-2xx responses before their bodies are decoded.
pub(crate) fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, CollectorError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(CollectorError::Status(status.as_u16()))
    }
}
