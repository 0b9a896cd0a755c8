use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use super::{ensure_success, CollectorError, PhoneReputation};
use crate::workflows::screening::domain::{LineType, PhoneSignal};

/// Phone reputation provider reached over HTTP (`GET {base}?api_key=..&phone=..`).
#[derive(Debug, Clone)]
pub struct HttpPhoneReputation {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl HttpPhoneReputation {
    pub fn new(http: reqwest::Client, base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct PhoneReputationReply {
    valid: Option<bool>,
    #[serde(rename = "type")]
    line_type: Option<String>,
}

impl PhoneReputationReply {
    pub(crate) fn into_signal(self) -> Result<PhoneSignal, CollectorError> {
        let valid = self
            .valid
            .ok_or_else(|| CollectorError::Malformed("valid missing".to_string()))?;

        Ok(PhoneSignal {
            valid,
            line_type: LineType::classify(self.line_type.as_deref()),
        })
    }
}

#[async_trait]
impl PhoneReputation for HttpPhoneReputation {
    async fn lookup(&self, phone: &str) -> Result<PhoneSignal, CollectorError> {
        debug!("querying phone reputation provider");

        let response = self
            .http
            .get(&self.base_url)
            .query(&[("api_key", self.api_key.as_str()), ("phone", phone)])
            .send()
            .await?;

        let reply: PhoneReputationReply = ensure_success(response)?.json().await?;
        reply.into_signal()
    }
}
