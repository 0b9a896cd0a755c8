use super::domain::{CandidateSubmission, ValidatedSubmission};
use super::ScreeningError;

/// Presence check only. Format validity is left to the email and phone providers.
pub fn validate(submission: CandidateSubmission) -> Result<ValidatedSubmission, ScreeningError> {
    let CandidateSubmission {
        candidate_name,
        candidate_email,
        candidate_phone,
        linkedin_url,
        resume_text,
    } = submission;

    match (present(candidate_email), present(candidate_phone)) {
        (Some(email), Some(phone)) => Ok(ValidatedSubmission {
            name: candidate_name,
            email,
            phone,
            linkedin_url,
            resume_text,
        }),
        _ => Err(ScreeningError::InvalidRequest),
    }
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.is_empty())
}
