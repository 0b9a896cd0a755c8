//! Candidate fraud-risk screening.
//!
//! A submission passes a presence check, three collectors gather email, phone, and
//! AI-authorship signals, and a fixed rubric turns them into a score and level.
//! Collector failures never fail a screening; they degrade to conservative defaults.

pub mod collectors;
pub mod domain;
pub mod intake;
pub mod report;
pub mod router;
pub mod scoring;
pub mod service;

#[cfg(test)]
mod tests;

pub use collectors::{
    http_client, parse_authorship_reply, ChatCompletionsGenerator, CollectorError,
    EmailReputation, HttpEmailReputation, HttpPhoneReputation, PhoneReputation, TextGenerator,
};
pub use domain::{
    AiSignal, CandidateSubmission, ConservativeDefault, EmailSignal, LineType, PhoneSignal,
    SignalOutcome, ValidatedSubmission,
};
pub use report::{ScreeningDetails, ScreeningReport};
pub use router::{screening_router, ScreeningState, SCREENING_PATH};
pub use scoring::{assess, RiskLevel, RiskVerdict, ScoreComponent, SignalKind};
pub use service::{CandidateScreeningService, CollectedSignals, ScreeningError};

use std::sync::Arc;

use crate::config::{ConfigError, ProviderConfig};

/// Screening service wired to the HTTP provider adapters.
pub type HttpScreeningService =
    CandidateScreeningService<HttpEmailReputation, HttpPhoneReputation, ChatCompletionsGenerator>;

/// Builds the production service from provider configuration.
///
/// Fails with [`ConfigError::MissingCredentials`] when any provider key is absent.
pub fn http_screening_service(
    providers: &ProviderConfig,
) -> Result<HttpScreeningService, ScreeningSetupError> {
    let credentials = providers.credentials()?;
    let http = http_client(providers.timeout)?;

    Ok(CandidateScreeningService::new(
        Arc::new(HttpEmailReputation::new(
            http.clone(),
            providers.email.base_url.clone(),
            credentials.email,
        )),
        Arc::new(HttpPhoneReputation::new(
            http.clone(),
            providers.phone.base_url.clone(),
            credentials.phone,
        )),
        Arc::new(ChatCompletionsGenerator::new(
            http,
            providers.text_generation.base_url.clone(),
            credentials.text_generation,
            providers.text_generation_model.clone(),
        )),
        providers.timeout,
    ))
}

#[derive(Debug, thiserror::Error)]
pub enum ScreeningSetupError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("unable to build provider client: {0}")]
    Client(#[from] CollectorError),
}
