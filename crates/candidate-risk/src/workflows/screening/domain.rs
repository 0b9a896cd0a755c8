use serde::{Deserialize, Serialize};

/// Raw candidate payload as posted by the intake form.
///
/// Every field is optional on the wire so that a missing email or phone surfaces as a
/// validation failure rather than a body rejection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateSubmission {
    #[serde(default)]
    pub candidate_name: Option<String>,
    #[serde(default)]
    pub candidate_email: Option<String>,
    #[serde(default)]
    pub candidate_phone: Option<String>,
    #[serde(default)]
    pub linkedin_url: Option<String>,
    #[serde(default)]
    pub resume_text: Option<String>,
}

/// Submission that passed the presence checks in [`super::intake::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedSubmission {
    pub name: Option<String>,
    pub email: String,
    pub phone: String,
    pub linkedin_url: Option<String>,
    pub resume_text: Option<String>,
}

impl ValidatedSubmission {
    /// Resume text with surrounding whitespace removed, or `None` when nothing is left.
    pub fn resume_body(&self) -> Option<&str> {
        self.resume_text
            .as_deref()
            .map(str::trim)
            .filter(|text| !text.is_empty())
    }
}

/// Worst-case value substituted when a collector produced nothing usable.
pub trait ConservativeDefault {
    fn conservative() -> Self;
}

/// Tagged collector result, collapsed into a signal only at the aggregation boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignalOutcome<T> {
    Collected(T),
    Unavailable,
}

impl<T: ConservativeDefault> SignalOutcome<T> {
    pub fn resolve(self) -> T {
        match self {
            SignalOutcome::Collected(signal) => signal,
            SignalOutcome::Unavailable => T::conservative(),
        }
    }
}

impl<T> SignalOutcome<T> {
    pub fn is_collected(&self) -> bool {
        matches!(self, SignalOutcome::Collected(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailSignal {
    pub valid_format: bool,
    pub disposable: bool,
}

impl EmailSignal {
    pub fn is_risky(&self) -> bool {
        !self.valid_format || self.disposable
    }
}

impl ConservativeDefault for EmailSignal {
    fn conservative() -> Self {
        Self {
            valid_format: false,
            disposable: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineType {
    Voip,
    Other,
    Unknown,
}

impl LineType {
    /// Maps a provider's free-form line classification.
    pub fn classify(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            None | Some("") => LineType::Unknown,
            Some(value) if value.eq_ignore_ascii_case("voip") => LineType::Voip,
            Some(_) => LineType::Other,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhoneSignal {
    pub valid: bool,
    pub line_type: LineType,
}

impl PhoneSignal {
    pub fn is_voip(&self) -> bool {
        self.line_type == LineType::Voip
    }

    pub fn is_risky(&self) -> bool {
        !self.valid || self.is_voip()
    }
}

impl ConservativeDefault for PhoneSignal {
    fn conservative() -> Self {
        Self {
            valid: false,
            line_type: LineType::Unknown,
        }
    }
}

pub const NO_TEXT_REASONING: &str = "No resume text provided";
pub const UNAVAILABLE_REASONING: &str = "AI analysis unavailable";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiSignal {
    /// Estimated likelihood (0-100) that the text was machine-written.
    pub probability: u8,
    pub reasoning: String,
}

impl AiSignal {
    pub fn no_text() -> Self {
        Self {
            probability: 0,
            reasoning: NO_TEXT_REASONING.to_string(),
        }
    }
}

impl ConservativeDefault for AiSignal {
    fn conservative() -> Self {
        Self {
            probability: 0,
            reasoning: UNAVAILABLE_REASONING.to_string(),
        }
    }
}
