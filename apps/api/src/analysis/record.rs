//! Runs every section extractor over one generator reply and assembles the record.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::analysis::lists::{
    extract_list, extract_list_with, extract_match_percentage, InlineStyle,
};
use crate::analysis::sections::{
    locate, SectionName, SectionSpec, COLD_EMAILS, IMPROVEMENT_SUGGESTIONS, REASONS, SKILLS,
    SUGGESTED_JOBS,
};
use crate::analysis::templates::extract_templates;

/// Substituted for `raw_analysis` when the generator produced nothing usable.
pub const GENERATOR_FALLBACK_TEXT: &str = "Error analyzing resume. Please try again.";

/// Everything recoverable from one generator reply.
///
/// Every field is always present; a missing section leaves its default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedRecord {
    pub match_percentage: u32,
    pub skills: Vec<String>,
    pub suggested_jobs: Vec<String>,
    pub reasons: Vec<String>,
    pub cold_emails: Vec<String>,
    pub improvement_suggestions: Vec<String>,
    /// The untouched generator text.
    pub raw_analysis: String,
}

impl ParsedRecord {
    /// The record returned when the generator call failed or came back empty.
    pub fn unavailable() -> Self {
        Self {
            raw_analysis: GENERATOR_FALLBACK_TEXT.to_string(),
            ..Self::default()
        }
    }
}

/// Response shape of the match-analysis endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchReport {
    pub match_percentage: u32,
    pub skills: Vec<String>,
    pub suggested_jobs: Vec<String>,
    pub reasons: Vec<String>,
    pub raw_analysis: String,
}

impl From<ParsedRecord> for MatchReport {
    fn from(record: ParsedRecord) -> Self {
        Self {
            match_percentage: record.match_percentage,
            skills: record.skills,
            suggested_jobs: record.suggested_jobs,
            reasons: record.reasons,
            raw_analysis: record.raw_analysis,
        }
    }
}

/// Response shape of the cold-email endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutreachReport {
    pub skills: Vec<String>,
    pub reasons: Vec<String>,
    pub cold_emails: Vec<String>,
    pub improvement_suggestions: Vec<String>,
    pub raw_analysis: String,
}

impl From<ParsedRecord> for OutreachReport {
    fn from(record: ParsedRecord) -> Self {
        Self {
            skills: record.skills,
            reasons: record.reasons,
            cold_emails: record.cold_emails,
            improvement_suggestions: record.improvement_suggestions,
            raw_analysis: record.raw_analysis,
        }
    }
}

/// Parses a generator reply into a `ParsedRecord`. Never fails.
pub fn parse_response(raw_text: &str) -> ParsedRecord {
    let text = raw_text.replace("\r\n", "\n");

    let match_percentage = extract_match_percentage(&text).unwrap_or_else(|| {
        debug!(section = ?SectionName::MatchPercentage, "section not found in generator output");
        0
    });

    ParsedRecord {
        match_percentage,
        skills: locate_or_log(&text, &SKILLS)
            .map(extract_list)
            .unwrap_or_default(),
        suggested_jobs: locate_or_log(&text, &SUGGESTED_JOBS)
            .map(extract_list)
            .unwrap_or_default(),
        // Reasons are prose; commas inside a sentence must not split it.
        reasons: locate_or_log(&text, &REASONS)
            .map(|body| extract_list_with(body, InlineStyle::Whole))
            .unwrap_or_default(),
        cold_emails: locate_or_log(&text, &COLD_EMAILS)
            .map(extract_templates)
            .unwrap_or_default(),
        improvement_suggestions: locate_or_log(&text, &IMPROVEMENT_SUGGESTIONS)
            .map(extract_list)
            .unwrap_or_default(),
        raw_analysis: raw_text.to_string(),
    }
}

fn locate_or_log<'a>(text: &'a str, spec: &SectionSpec) -> Option<&'a str> {
    let body = locate(text, spec);
    if body.is_none() {
        debug!(section = ?spec.name, "section not found in generator output");
    }
    body
}
