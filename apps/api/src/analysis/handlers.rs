//! Axum route handlers for the analysis API.

use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;
use tracing::{info, warn};

use crate::analysis::prompts::{build_match_prompt, build_outreach_prompt, ANALYSIS_SYSTEM};
use crate::analysis::record::{parse_response, MatchReport, OutreachReport, ParsedRecord};
use crate::errors::AppError;
use crate::ingest::job_page::parse_job_url;
use crate::ingest::pdf::is_pdf_file_name;
use crate::llm_client::TextGenerator;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Submission parsing
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Default)]
pub struct Submission {
    pub resume: Option<ResumeUpload>,
    pub job_description: Option<String>,
    pub job_url: Option<String>,
}

#[derive(Debug)]
pub struct ResumeUpload {
    pub file_name: String,
    pub bytes: Bytes,
}

/// Where the job description comes from. Pasted text wins over a URL.
#[derive(Debug, PartialEq)]
pub enum JobSource {
    Text(String),
    Url(String),
}

impl Submission {
    /// Reads the `resume`, `job_description` and `job_url` parts; others are ignored.
    pub async fn from_multipart(mut multipart: Multipart) -> Result<Self, AppError> {
        let mut submission = Submission::default();

        while let Some(field) = multipart.next_field().await? {
            let name = field.name().unwrap_or_default().to_string();
            match name.as_str() {
                "resume" => {
                    let file_name = field.file_name().unwrap_or_default().to_string();
                    let bytes = field.bytes().await?;
                    submission.resume = Some(ResumeUpload { file_name, bytes });
                }
                "job_description" => {
                    submission.job_description = Some(field.text().await?);
                }
                "job_url" => {
                    submission.job_url = Some(field.text().await?);
                }
                _ => {}
            }
        }

        Ok(submission)
    }

    /// Checks the submission in a fixed order; the first failure is reported.
    pub fn validate(self) -> Result<(ResumeUpload, JobSource), AppError> {
        let resume = self
            .resume
            .ok_or_else(|| AppError::Validation("No resume file provided".to_string()))?;

        let job_description = self.job_description.filter(|t| !t.trim().is_empty());
        let job_url = self.job_url.filter(|u| !u.trim().is_empty());
        let job = match (job_description, job_url) {
            (Some(text), _) => JobSource::Text(text),
            (None, Some(url)) => JobSource::Url(url),
            (None, None) => {
                return Err(AppError::Validation(
                    "No job description provided".to_string(),
                ))
            }
        };

        if resume.file_name.is_empty() {
            return Err(AppError::Validation("No file selected".to_string()));
        }
        if !is_pdf_file_name(&resume.file_name) {
            return Err(AppError::Validation(
                "Only PDF files are supported".to_string(),
            ));
        }

        Ok((resume, job))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /analyze
///
/// Scores a resume against a job description: match percentage, skills,
/// suggested roles and reasons.
pub async fn handle_analyze(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<MatchReport>, AppError> {
    let (resume_text, job_description) = prepare_inputs(&state, multipart).await?;
    let prompt = build_match_prompt(&resume_text, &job_description);
    let record = generate_record(state.generator.as_ref(), &prompt).await;
    Ok(Json(MatchReport::from(record)))
}

/// POST /cold-emails
///
/// Drafts cold emails to the hiring manager, plus skills, reasons and
/// resume improvement suggestions.
pub async fn handle_cold_emails(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<OutreachReport>, AppError> {
    let (resume_text, job_description) = prepare_inputs(&state, multipart).await?;
    let prompt = build_outreach_prompt(&resume_text, &job_description);
    let record = generate_record(state.generator.as_ref(), &prompt).await;
    Ok(Json(OutreachReport::from(record)))
}

/// Validates the upload and returns `(resume_text, job_description)`.
async fn prepare_inputs(
    state: &AppState,
    multipart: Multipart,
) -> Result<(String, String), AppError> {
    let (resume, job) = Submission::from_multipart(multipart).await?.validate()?;

    let job_description = resolve_job_description(state, job).await?;

    let resume_text = state.resume_reader.read_text(resume.bytes).await.map_err(|e| {
        warn!("Resume '{}' unreadable: {e}", resume.file_name);
        AppError::Validation("Could not extract text from PDF".to_string())
    })?;

    Ok((resume_text, job_description))
}

async fn resolve_job_description(state: &AppState, job: JobSource) -> Result<String, AppError> {
    let text = match job {
        JobSource::Text(text) => text,
        JobSource::Url(raw) => {
            let url = parse_job_url(&raw).map_err(|e| AppError::Validation(e.to_string()))?;
            state
                .job_pages
                .fetch_text(&url)
                .await
                .map_err(|e| AppError::JobFetch(e.to_string()))?
        }
    };

    Ok(truncate_chars(text, state.config.max_job_description_chars))
}

/// Calls the generator and parses its reply.
///
/// A failed call or an empty reply yields `ParsedRecord::unavailable()`; the
/// parser only ever sees real generator text.
pub async fn generate_record(generator: &dyn TextGenerator, prompt: &str) -> ParsedRecord {
    match generator.generate(prompt, ANALYSIS_SYSTEM).await {
        Ok(text) if !text.trim().is_empty() => {
            let record = parse_response(&text);
            info!(
                "Parsed generator reply: {} skills, {} reasons, {} cold emails",
                record.skills.len(),
                record.reasons.len(),
                record.cold_emails.len()
            );
            record
        }
        Ok(_) => {
            warn!("Generator returned empty text; substituting default record");
            ParsedRecord::unavailable()
        }
        Err(e) => {
            warn!("Generator call failed: {e}; substituting default record");
            ParsedRecord::unavailable()
        }
    }
}

fn truncate_chars(text: String, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => text[..cut].to_string(),
        None => text,
    }
}
