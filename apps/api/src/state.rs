use std::sync::Arc;

use crate::config::Config;
use crate::ingest::job_page::JobPageSource;
use crate::ingest::pdf::ResumeReader;
use crate::llm_client::TextGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Generator behind both analysis endpoints. Default: `GeminiClient`.
    pub generator: Arc<dyn TextGenerator>,
    /// Resolves `job_url` submissions. Default: `JobPageFetcher`.
    pub job_pages: Arc<dyn JobPageSource>,
    /// Turns uploaded resumes into text. Default: `PdfResumeReader`.
    pub resume_reader: Arc<dyn ResumeReader>,
    pub config: Config,
}
