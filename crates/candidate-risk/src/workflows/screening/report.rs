use chrono::{DateTime, Utc};
use serde::Serialize;

use super::domain::{AiSignal, EmailSignal, LineType, PhoneSignal, ValidatedSubmission};
use super::scoring::{RiskLevel, RiskVerdict, ScoreComponent};

/// Outbound body of a successful screening.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreeningReport {
    pub success: bool,
    pub risk_score: u8,
    pub risk_level: RiskLevel,
    pub email_status: &'static str,
    pub email_valid: bool,
    pub phone_status: &'static str,
    pub phone_valid: bool,
    pub ai_analysis: String,
    pub details: ScreeningDetails,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreeningDetails {
    pub candidate_name: Option<String>,
    pub linkedin_url: Option<String>,
    pub email_format_valid: bool,
    pub email_disposable: bool,
    pub phone_reported_valid: bool,
    pub phone_line_type: LineType,
    pub ai_probability: u8,
    pub score_breakdown: Vec<ScoreComponent>,
    pub screened_at: DateTime<Utc>,
}

impl ScreeningReport {
    pub fn new(
        submission: &ValidatedSubmission,
        email: &EmailSignal,
        phone: &PhoneSignal,
        ai: &AiSignal,
        verdict: RiskVerdict,
    ) -> Self {
        Self {
            success: true,
            risk_score: verdict.score,
            risk_level: verdict.level,
            email_status: email_status(email),
            email_valid: email.valid_format && !email.disposable,
            phone_status: phone_status(phone),
            phone_valid: phone.valid && !phone.is_voip(),
            ai_analysis: ai.reasoning.clone(),
            details: ScreeningDetails {
                candidate_name: submission.name.clone(),
                linkedin_url: submission.linkedin_url.clone(),
                email_format_valid: email.valid_format,
                email_disposable: email.disposable,
                phone_reported_valid: phone.valid,
                phone_line_type: phone.line_type,
                ai_probability: ai.probability,
                score_breakdown: verdict.components,
                screened_at: Utc::now(),
            },
        }
    }
}

pub fn email_status(email: &EmailSignal) -> &'static str {
    if email.valid_format {
        "Valid email format"
    } else {
        "Invalid email format"
    }
}

pub fn phone_status(phone: &PhoneSignal) -> &'static str {
    if !phone.valid {
        "Invalid phone"
    } else if phone.is_voip() {
        "VoIP/Suspicious"
    } else {
        "Valid phone"
    }
}
