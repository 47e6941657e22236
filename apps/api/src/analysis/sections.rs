//! Section Locator — finds named, heading-delimited sections in generator output.
//!
//! Every lookup is first-match and case-insensitive on the heading. A missing
//! heading yields `None`; it is never an error.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// The fixed set of fields the parser knows how to recover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionName {
    Skills,
    Reasons,
    ColdEmails,
    ImprovementSuggestions,
    MatchPercentage,
    SuggestedJobs,
}

/// Where a section body stops.
#[derive(Debug, Clone, Copy)]
enum Boundary {
    /// A blank line, a newline followed by an uppercase letter, or end of text.
    NextHeading,
    /// A line opening with the given heading pattern, or end of text.
    Terminator(&'static str),
}

/// Heading pattern plus end-boundary rule for one field.
pub struct SectionSpec {
    pub name: SectionName,
    pattern: LazyLock<Regex>,
}

impl SectionSpec {
    pub fn pattern(&self) -> &Regex {
        &self.pattern
    }
}

const IMPROVEMENT_HEADING: &str = r"improvement\s+suggestions";

pub static SKILLS: SectionSpec = SectionSpec {
    name: SectionName::Skills,
    pattern: LazyLock::new(|| {
        section_pattern(r"key\s+skills|technical\s+skills", Boundary::NextHeading)
    }),
};

pub static SUGGESTED_JOBS: SectionSpec = SectionSpec {
    name: SectionName::SuggestedJobs,
    pattern: LazyLock::new(|| {
        section_pattern(
            r"suitable\s+job\s+roles|suggested\s+job\s+roles|suggested\s+jobs",
            Boundary::NextHeading,
        )
    }),
};

pub static REASONS: SectionSpec = SectionSpec {
    name: SectionName::Reasons,
    pattern: LazyLock::new(|| {
        // "Reasons why it's a good match:" is one heading, up to its colon.
        section_pattern(
            r"(?:good\s+match|bad\s+match|reasons)(?:[^\n:]{0,80}:)?",
            Boundary::NextHeading,
        )
    }),
};

pub static IMPROVEMENT_SUGGESTIONS: SectionSpec = SectionSpec {
    name: SectionName::ImprovementSuggestions,
    pattern: LazyLock::new(|| section_pattern(IMPROVEMENT_HEADING, Boundary::NextHeading)),
};

pub static COLD_EMAILS: SectionSpec = SectionSpec {
    name: SectionName::ColdEmails,
    pattern: LazyLock::new(|| {
        section_pattern(
            // "Cold Email Template 1:" leaves its numbered marker in the body.
            r"cold[\s-]+emails?(?:\s+templates?[ \t]*(?:[:*_]|\n|\z))?",
            Boundary::Terminator(IMPROVEMENT_HEADING),
        )
    }),
};

/// Builds `heading [**] [:] [**] <ws> (body) boundary`.
///
/// The heading and terminator match case-insensitively; the uppercase-letter
/// boundary does not, so lowercase continuation lines stay in the body.
fn section_pattern(heading: &str, boundary: Boundary) -> Regex {
    let end = match boundary {
        Boundary::NextHeading => r"\n[ \t]*\n|\n[A-Z]|\z".to_string(),
        Boundary::Terminator(terminator) => format!(r"\n[\s*_#]*(?i:{terminator})|\z"),
    };
    Regex::new(&format!(
        r"(?i:{heading})[ \t]*[*_]*[ \t]*:?[*_]*\s*(?s:(.*?))(?:{end})"
    ))
    .expect("valid section pattern")
}

/// Returns the body of the first section matching `spec`, or `None` if the
/// heading does not occur.
pub fn locate<'a>(raw_text: &'a str, spec: &SectionSpec) -> Option<&'a str> {
    spec.pattern()
        .captures(raw_text)
        .and_then(|captures| captures.get(1))
        .map(|body| body.as_str())
}
