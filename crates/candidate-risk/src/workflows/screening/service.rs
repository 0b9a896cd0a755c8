use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::{info, warn};

use super::collectors::{
    build_prompt, parse_authorship_reply, CollectorError, EmailReputation, PhoneReputation,
    TextGenerator,
};
use super::domain::{
    AiSignal, CandidateSubmission, EmailSignal, PhoneSignal, SignalOutcome, ValidatedSubmission,
};
use super::intake;
use super::report::ScreeningReport;
use super::scoring;

/// Service composing the three collectors with the fixed scoring rubric.
pub struct CandidateScreeningService<E, P, T> {
    email: Arc<E>,
    phone: Arc<P>,
    text: Arc<T>,
    call_timeout: Duration,
}

/// Per-collector results before they are collapsed into signals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectedSignals {
    pub email: SignalOutcome<EmailSignal>,
    pub phone: SignalOutcome<PhoneSignal>,
    pub ai: SignalOutcome<AiSignal>,
}

impl<E, P, T> CandidateScreeningService<E, P, T>
where
    E: EmailReputation + 'static,
    P: PhoneReputation + 'static,
    T: TextGenerator + 'static,
{
    pub fn new(email: Arc<E>, phone: Arc<P>, text: Arc<T>, call_timeout: Duration) -> Self {
        Self {
            email,
            phone,
            text,
            call_timeout,
        }
    }

    /// Validate, collect, and score a raw submission.
    pub async fn screen(
        &self,
        submission: CandidateSubmission,
    ) -> Result<ScreeningReport, ScreeningError> {
        let candidate = intake::validate(submission)?;
        Ok(self.screen_validated(candidate).await)
    }

    /// Collect and score a submission that already passed intake. Cannot fail: every
    /// collector failure degrades to its conservative default.
    pub async fn screen_validated(&self, candidate: ValidatedSubmission) -> ScreeningReport {
        let collected = self.collect(&candidate).await;

        let email = collected.email.resolve();
        let phone = collected.phone.resolve();
        let ai = collected.ai.resolve();

        let verdict = scoring::assess(&email, &phone, &ai);
        info!(
            score = verdict.score,
            level = verdict.level.label(),
            "candidate screening completed"
        );

        ScreeningReport::new(&candidate, &email, &phone, &ai, verdict)
    }

    /// Runs the three collectors concurrently.
    pub async fn collect(&self, candidate: &ValidatedSubmission) -> CollectedSignals {
        let (email, phone, ai) = tokio::join!(
            bounded("email", self.call_timeout, self.email.lookup(&candidate.email)),
            bounded("phone", self.call_timeout, self.phone.lookup(&candidate.phone)),
            self.estimate_authorship(candidate.resume_body()),
        );

        CollectedSignals { email, phone, ai }
    }

    async fn estimate_authorship(&self, resume: Option<&str>) -> SignalOutcome<AiSignal> {
        let Some(text) = resume else {
            return SignalOutcome::Collected(AiSignal::no_text());
        };

        let prompt = build_prompt(text);
        match bounded("ai", self.call_timeout, self.text.complete(&prompt)).await {
            SignalOutcome::Collected(reply) => match parse_authorship_reply(&reply) {
                Some(signal) => SignalOutcome::Collected(signal),
                None => {
                    warn!(
                        signal = "ai",
                        reply_len = reply.len(),
                        "estimator reply was not a valid verdict; using conservative default"
                    );
                    SignalOutcome::Unavailable
                }
            },
            SignalOutcome::Unavailable => SignalOutcome::Unavailable,
        }
    }
}

async fn bounded<V, F>(signal: &'static str, limit: Duration, call: F) -> SignalOutcome<V>
where
    F: Future<Output = Result<V, CollectorError>>,
{
    let error = match tokio::time::timeout(limit, call).await {
        Ok(Ok(value)) => return SignalOutcome::Collected(value),
        Ok(Err(err)) => err,
        Err(_) => CollectorError::Timeout(limit),
    };

    warn!(signal, error = %error, "collector failed; using conservative default");
    SignalOutcome::Unavailable
}

/// Request-level failure of a screening.
#[derive(Debug, thiserror::Error)]
pub enum ScreeningError {
    #[error("Email and phone are required")]
    InvalidRequest,
    #[error("Missing API keys")]
    MissingCredentials,
    #[error("Validation failed")]
    Internal(String),
}

impl IntoResponse for ScreeningError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            ScreeningError::InvalidRequest => {
                (StatusCode::BAD_REQUEST, json!({ "error": self.to_string() }))
            }
            ScreeningError::MissingCredentials => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": self.to_string() }),
            ),
            ScreeningError::Internal(message) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": self.to_string(), "message": message }),
            ),
        };

        (status, Json(body)).into_response()
    }
}
