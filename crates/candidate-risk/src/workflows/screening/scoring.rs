use serde::{Deserialize, Serialize};

use super::domain::{AiSignal, EmailSignal, PhoneSignal};

const EMAIL_RISK_POINTS: u16 = 30;
const PHONE_RISK_POINTS: u16 = 25;
const AI_HIGH_POINTS: u16 = 45;
const AI_ELEVATED_POINTS: u16 = 25;

const AI_HIGH_ABOVE: u8 = 70;
const AI_ELEVATED_ABOVE: u8 = 40;

const MAX_SCORE: u16 = 100;
const CRITICAL_AT: u8 = 80;
const HIGH_AT: u8 = 60;
const MEDIUM_AT: u8 = 40;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    pub fn from_score(score: u8) -> Self {
        if score >= CRITICAL_AT {
            RiskLevel::Critical
        } else if score >= HIGH_AT {
            RiskLevel::High
        } else if score >= MEDIUM_AT {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
            RiskLevel::Critical => "Critical",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignalKind {
    Email,
    Phone,
    Ai,
}

/// One rubric line that added to the score, kept for transparent audits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub signal: SignalKind,
    pub points: u8,
    pub note: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskVerdict {
    pub score: u8,
    pub level: RiskLevel,
    pub components: Vec<ScoreComponent>,
}

/// Applies the fixed rubric. Contributions are summed first and capped once.
pub fn assess(email: &EmailSignal, phone: &PhoneSignal, ai: &AiSignal) -> RiskVerdict {
    let mut components = Vec::new();

    if email.is_risky() {
        let note = if !email.valid_format {
            "invalid email format"
        } else {
            "disposable email domain"
        };
        components.push(component(SignalKind::Email, EMAIL_RISK_POINTS, note));
    }

    if phone.is_risky() {
        let note = if !phone.valid {
            "invalid phone number"
        } else {
            "VoIP phone line"
        };
        components.push(component(SignalKind::Phone, PHONE_RISK_POINTS, note));
    }

    if let Some(points) = ai_points(ai.probability) {
        components.push(ScoreComponent {
            signal: SignalKind::Ai,
            points: points as u8,
            note: format!("AI-authorship probability {}%", ai.probability),
        });
    }

    let total: u16 = components.iter().map(|c| u16::from(c.points)).sum();
    let score = total.min(MAX_SCORE) as u8;

    RiskVerdict {
        score,
        level: RiskLevel::from_score(score),
        components,
    }
}

fn ai_points(probability: u8) -> Option<u16> {
    if probability > AI_HIGH_ABOVE {
        Some(AI_HIGH_POINTS)
    } else if probability > AI_ELEVATED_ABOVE {
        Some(AI_ELEVATED_POINTS)
    } else {
        None
    }
}

fn component(signal: SignalKind, points: u16, note: &str) -> ScoreComponent {
    ScoreComponent {
        signal,
        points: points as u8,
        note: note.to_string(),
    }
}
