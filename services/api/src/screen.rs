use std::path::PathBuf;

use candidate_risk::config::AppConfig;
use candidate_risk::error::AppError;
use candidate_risk::telemetry;
use candidate_risk::workflows::screening::{http_screening_service, CandidateSubmission};
use clap::Args;

#[derive(Args, Debug)]
pub(crate) struct ScreenArgs {
    /// Candidate email address
    #[arg(long)]
    pub(crate) email: String,
    /// Candidate phone number
    #[arg(long)]
    pub(crate) phone: String,
    /// Candidate display name
    #[arg(long)]
    pub(crate) name: Option<String>,
    /// Candidate LinkedIn profile URL
    #[arg(long)]
    pub(crate) linkedin_url: Option<String>,
    /// Plain-text resume passed to the AI-authorship estimator
    #[arg(long)]
    pub(crate) resume_file: Option<PathBuf>,
}

impl ScreenArgs {
    fn into_submission(self) -> Result<CandidateSubmission, AppError> {
        let resume_text = self
            .resume_file
            .map(std::fs::read_to_string)
            .transpose()?;

        Ok(CandidateSubmission {
            candidate_name: self.name,
            candidate_email: Some(self.email),
            candidate_phone: Some(self.phone),
            linkedin_url: self.linkedin_url,
            resume_text,
        })
    }
}

pub(crate) async fn run_screen(args: ScreenArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let submission = args.into_submission()?;
    let service = http_screening_service(&config.providers)?;
    let report = service.screen(submission).await?;

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
