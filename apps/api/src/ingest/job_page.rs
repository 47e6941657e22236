// Downloads a job posting and reduces it to the text a reader would see.
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use scraper::{Html, Node};
use thiserror::Error;
use tracing::{info, warn};

const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";
const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Elements whose text never reaches the reader.
const HIDDEN_ELEMENTS: &[&str] = &["script", "style", "noscript", "template", "svg", "head"];

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Invalid job URL: {0}")]
    InvalidUrl(String),

    #[error("Failed to fetch job page: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Job page returned HTTP {0}")]
    Status(u16),

    #[error("Job page has no readable text")]
    Empty,
}

/// Resolves a job posting URL to plain text.
#[async_trait]
pub trait JobPageSource: Send + Sync {
    async fn fetch_text(&self, url: &Url) -> Result<String, FetchError>;
}

pub struct JobPageFetcher {
    client: Client,
}

impl JobPageFetcher {
    pub fn new() -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(FETCH_TIMEOUT)
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl JobPageSource for JobPageFetcher {
    async fn fetch_text(&self, url: &Url) -> Result<String, FetchError> {
        info!("Fetching job post: {}", url);

        let response = self.client.get(url.clone()).send().await?;
        if !response.status().is_success() {
            return Err(FetchError::Status(response.status().as_u16()));
        }

        let html = response.text().await?;
        let text = visible_text(&html);
        if text.is_empty() {
            warn!("Job page {} yielded no visible text", url);
            return Err(FetchError::Empty);
        }

        info!("Extracted {} chars from job post", text.len());
        Ok(text)
    }
}

/// Parses a user-supplied job URL; only http and https are accepted.
pub fn parse_job_url(raw: &str) -> Result<Url, FetchError> {
    let url = Url::parse(raw.trim()).map_err(|e| FetchError::InvalidUrl(e.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => Err(FetchError::InvalidUrl(format!(
            "unsupported scheme '{scheme}'"
        ))),
    }
}

/// Collects the text a reader would see, one whitespace-collapsed fragment per line.
pub fn visible_text(html: &str) -> String {
    let document = Html::parse_document(html);

    let mut lines = Vec::new();
    for node in document.root_element().descendants() {
        let Node::Text(text) = node.value() else {
            continue;
        };
        let hidden = node.ancestors().any(|ancestor| {
            ancestor
                .value()
                .as_element()
                .is_some_and(|element| HIDDEN_ELEMENTS.contains(&element.name()))
        });
        if hidden {
            continue;
        }

        let fragment = text.split_whitespace().collect::<Vec<_>>().join(" ");
        if !fragment.is_empty() {
            lines.push(fragment);
        }
    }

    lines.join("\n")
}
