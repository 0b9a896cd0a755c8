use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::response::Response;
use serde_json::Value;

use crate::workflows::screening::collectors::{
    CollectorError, EmailReputation, PhoneReputation, TextGenerator,
};
use crate::workflows::screening::domain::{
    CandidateSubmission, EmailSignal, LineType, PhoneSignal,
};
use crate::workflows::screening::CandidateScreeningService;

pub(super) const CALL_TIMEOUT: Duration = Duration::from_millis(100);

pub(super) fn submission() -> CandidateSubmission {
    CandidateSubmission {
        candidate_name: Some("Jordan Avery".to_string()),
        candidate_email: Some("jordan.avery@example.com".to_string()),
        candidate_phone: Some("+1 515 555 0142".to_string()),
        linkedin_url: Some("https://www.linkedin.com/in/jordan-avery".to_string()),
        resume_text: Some(
            "Warehouse lead with six years of forklift certification and inventory audits."
                .to_string(),
        ),
    }
}

pub(super) fn clean_email() -> EmailSignal {
    EmailSignal {
        valid_format: true,
        disposable: false,
    }
}

pub(super) fn mobile_phone() -> PhoneSignal {
    PhoneSignal {
        valid: true,
        line_type: LineType::Other,
    }
}

pub(super) fn voip_phone() -> PhoneSignal {
    PhoneSignal {
        valid: true,
        line_type: LineType::Voip,
    }
}

pub(super) fn verdict_reply(probability: u8) -> String {
    format!(r#"{{"probability": {probability}, "reasoning": "Mixed personal detail and stock phrasing."}}"#)
}

/// Scripted collector behavior shared by the fakes below.
#[derive(Debug, Clone)]
pub(super) enum Script<V> {
    Reply(V),
    Fail,
    Hang,
}

impl<V: Clone> Script<V> {
    async fn run(&self) -> Result<V, CollectorError> {
        match self {
            Script::Reply(value) => Ok(value.clone()),
            Script::Fail => Err(CollectorError::Transport("connection refused".to_string())),
            Script::Hang => {
                tokio::time::sleep(Duration::from_secs(5)).await;
                Err(CollectorError::Transport("unreachable".to_string()))
            }
        }
    }
}

pub(super) struct FakeEmail {
    script: Script<EmailSignal>,
    pub(super) calls: AtomicUsize,
}

impl FakeEmail {
    pub(super) fn new(script: Script<EmailSignal>) -> Self {
        Self {
            script,
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl EmailReputation for FakeEmail {
    async fn lookup(&self, _email: &str) -> Result<EmailSignal, CollectorError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.script.run().await
    }
}

pub(super) struct FakePhone {
    script: Script<PhoneSignal>,
    pub(super) calls: AtomicUsize,
}

impl FakePhone {
    pub(super) fn new(script: Script<PhoneSignal>) -> Self {
        Self {
            script,
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl PhoneReputation for FakePhone {
    async fn lookup(&self, _phone: &str) -> Result<PhoneSignal, CollectorError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.script.run().await
    }
}

pub(super) struct FakeText {
    script: Script<String>,
    pub(super) prompts: Mutex<Vec<String>>,
}

impl FakeText {
    pub(super) fn new(script: Script<String>) -> Self {
        Self {
            script,
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub(super) fn calls(&self) -> usize {
        self.prompts.lock().expect("prompt mutex poisoned").len()
    }
}

#[async_trait]
impl TextGenerator for FakeText {
    async fn complete(&self, prompt: &str) -> Result<String, CollectorError> {
        self.prompts
            .lock()
            .expect("prompt mutex poisoned")
            .push(prompt.to_string());
        self.script.run().await
    }
}

pub(super) type FakeService = CandidateScreeningService<FakeEmail, FakePhone, FakeText>;

pub(super) struct Harness {
    pub(super) service: Arc<FakeService>,
    pub(super) email: Arc<FakeEmail>,
    pub(super) phone: Arc<FakePhone>,
    pub(super) text: Arc<FakeText>,
}

pub(super) fn harness(
    email: Script<EmailSignal>,
    phone: Script<PhoneSignal>,
    text: Script<String>,
) -> Harness {
    let email = Arc::new(FakeEmail::new(email));
    let phone = Arc::new(FakePhone::new(phone));
    let text = Arc::new(FakeText::new(text));
    let service = Arc::new(CandidateScreeningService::new(
        email.clone(),
        phone.clone(),
        text.clone(),
        CALL_TIMEOUT,
    ));

    Harness {
        service,
        email,
        phone,
        text,
    }
}

pub(super) fn healthy_harness(ai_probability: u8) -> Harness {
    harness(
        Script::Reply(clean_email()),
        Script::Reply(mobile_phone()),
        Script::Reply(verdict_reply(ai_probability)),
    )
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
