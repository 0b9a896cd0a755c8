use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use tracing::warn;

use super::collectors::{EmailReputation, PhoneReputation, TextGenerator};
use super::domain::CandidateSubmission;
use super::intake;
use super::service::{CandidateScreeningService, ScreeningError};

pub const SCREENING_PATH: &str = "/api/v1/candidates/screen";

/// Router state. `service` is `None` when provider credentials were absent at startup.
pub struct ScreeningState<E, P, T> {
    pub service: Option<Arc<CandidateScreeningService<E, P, T>>>,
}

impl<E, P, T> Clone for ScreeningState<E, P, T> {
    fn clone(&self) -> Self {
        Self {
            service: self.service.clone(),
        }
    }
}

impl<E, P, T> ScreeningState<E, P, T> {
    pub fn configured(service: Arc<CandidateScreeningService<E, P, T>>) -> Self {
        Self {
            service: Some(service),
        }
    }

    pub fn unconfigured() -> Self {
        Self { service: None }
    }
}

/// Router builder exposing the screening endpoint.
pub fn screening_router<E, P, T>(state: ScreeningState<E, P, T>) -> Router
where
    E: EmailReputation + 'static,
    P: PhoneReputation + 'static,
    T: TextGenerator + 'static,
{
    Router::new()
        .route(SCREENING_PATH, post(screen_handler::<E, P, T>))
        .with_state(state)
}

pub(crate) async fn screen_handler<E, P, T>(
    State(state): State<ScreeningState<E, P, T>>,
    payload: Result<Json<CandidateSubmission>, JsonRejection>,
) -> Response
where
    E: EmailReputation + 'static,
    P: PhoneReputation + 'static,
    T: TextGenerator + 'static,
{
    let submission = match payload {
        Ok(Json(submission)) => submission,
        Err(rejection) => {
            warn!(error = %rejection.body_text(), "unreadable screening request");
            return ScreeningError::Internal(rejection.body_text()).into_response();
        }
    };

    let candidate = match intake::validate(submission) {
        Ok(candidate) => candidate,
        Err(err) => return err.into_response(),
    };

    let Some(service) = state.service else {
        warn!("screening requested without provider credentials");
        return ScreeningError::MissingCredentials.into_response();
    };

    let report = service.screen_validated(candidate).await;
    (StatusCode::OK, Json(report)).into_response()
}
