use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use super::{ensure_success, CollectorError, EmailReputation};
use crate::workflows::screening::domain::EmailSignal;

/// Email reputation provider reached over HTTP (`GET {base}?api_key=..&email=..`).
#[derive(Debug, Clone)]
pub struct HttpEmailReputation {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl HttpEmailReputation {
    pub fn new(http: reqwest::Client, base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct FlagField {
    value: Option<bool>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct EmailReputationReply {
    is_valid_format: Option<FlagField>,
    is_disposable_email: Option<FlagField>,
}

impl EmailReputationReply {
    pub(crate) fn into_signal(self) -> Result<EmailSignal, CollectorError> {
        let valid_format = self
            .is_valid_format
            .and_then(|field| field.value)
            .ok_or_else(|| CollectorError::Malformed("is_valid_format missing".to_string()))?;
        let disposable = self
            .is_disposable_email
            .and_then(|field| field.value)
            .ok_or_else(|| CollectorError::Malformed("is_disposable_email missing".to_string()))?;

        Ok(EmailSignal {
            valid_format,
            disposable,
        })
    }
}

#[async_trait]
impl EmailReputation for HttpEmailReputation {
    async fn lookup(&self, email: &str) -> Result<EmailSignal, CollectorError> {
        debug!("querying email reputation provider");

        let response = self
            .http
            .get(&self.base_url)
            .query(&[("api_key", self.api_key.as_str()), ("email", email)])
            .send()
            .await?;

        let reply: EmailReputationReply = ensure_success(response)?.json().await?;
        reply.into_signal()
    }
}
