use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use super::{ensure_success, CollectorError, TextGenerator};
use crate::workflows::screening::domain::AiSignal;

const FENCE: &str = "```";
const FENCE_LANGUAGE: &str = "json";

/// Prompt asking the estimator for a bare JSON verdict on the resume text.
pub fn build_prompt(resume_text: &str) -> String {
    format!(
        "You are an expert at detecting AI-generated writing. Estimate the probability \
         (0-100) that the following resume text was written by an AI model rather than \
         a person.\n\
         Respond ONLY with a JSON object of the form \
         {{\"probability\": <integer 0-100>, \"reasoning\": \"<one or two sentences>\"}}. \
         Do not include any other text.\n\n\
         Resume text:\n{resume_text}"
    )
}

/// Removes every code-fence marker, with or without a `json` tag, and trims the rest.
pub(crate) fn strip_code_fences(raw: &str) -> String {
    let mut stripped = String::with_capacity(raw.len());
    let mut rest = raw;

    while let Some(index) = rest.find(FENCE) {
        stripped.push_str(&rest[..index]);
        rest = &rest[index + FENCE.len()..];
        if rest
            .get(..FENCE_LANGUAGE.len())
            .is_some_and(|tag| tag.eq_ignore_ascii_case(FENCE_LANGUAGE))
        {
            rest = &rest[FENCE_LANGUAGE.len()..];
        }
    }
    stripped.push_str(rest);

    stripped.trim().to_string()
}

/// Turns the estimator's untrusted reply into a signal.
///
/// Returns `None` unless the reply, once fences are removed, is a JSON object with a
/// numeric `probability` in 0..=100 and a string `reasoning`. Fractional probabilities
/// are rounded up so a value strictly above an integer breakpoint stays above it.
pub fn parse_authorship_reply(raw: &str) -> Option<AiSignal> {
    let body = strip_code_fences(raw);
    let value: Value = serde_json::from_str(&body).ok()?;
    let object = value.as_object()?;

    let probability = match object.get("probability")? {
        Value::Number(number) => number.as_f64()?,
        Value::String(text) => text.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    if !probability.is_finite() || !(0.0..=100.0).contains(&probability) {
        return None;
    }

    let reasoning = object.get("reasoning")?.as_str()?.trim().to_string();

    Some(AiSignal {
        probability: probability.ceil() as u8,
        reasoning,
    })
}

/// Text generator speaking the OpenAI-compatible chat completions protocol.
#[derive(Debug, Clone)]
pub struct ChatCompletionsGenerator {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl ChatCompletionsGenerator {
    pub fn new(
        http: reqwest::Client,
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            http,
            base_url: base_url.into(),
            api_key: api_key.into(),
            model: model.into(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 1],
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatReply {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: Option<ChatReplyMessage>,
}

#[derive(Debug, Deserialize)]
struct ChatReplyMessage {
    content: Option<String>,
}

#[async_trait]
impl TextGenerator for ChatCompletionsGenerator {
    async fn complete(&self, prompt: &str) -> Result<String, CollectorError> {
        debug!(model = %self.model, "requesting authorship estimate");

        let request = ChatRequest {
            model: &self.model,
            messages: [ChatMessage {
                role: "user",
                content: prompt,
            }],
        };

        let response = self
            .http
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let reply: ChatReply = ensure_success(response)?.json().await?;
        reply
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message)
            .and_then(|message| message.content)
            .ok_or_else(|| CollectorError::Malformed("reply carried no message content".to_string()))
    }
}
