//! Template Splitter — separates the cold-email section into individual drafts.

use std::sync::LazyLock;

use regex::Regex;

/// Split candidates shorter than this (trimmed, marker included) are noise.
pub const MIN_TEMPLATE_CHARS: usize = 20;

static TEMPLATE_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)[#*_]*(?:cold[\s-]+emails?\s+)?template\s*\d+\s*:[*_]*")
        .expect("valid regex")
});

/// Splits a cold-email section body on `Template N:` markers.
///
/// Text before the first marker is discarded. Each surviving template is the
/// verbatim, trimmed text between its marker and the next one. If nothing
/// survives the length guard, a body of at least `MIN_TEMPLATE_CHARS` comes
/// back whole as a single template.
pub fn extract_templates(body: &str) -> Vec<String> {
    let markers: Vec<_> = TEMPLATE_MARKER.find_iter(body).collect();

    let mut templates = Vec::with_capacity(markers.len());
    for (index, marker) in markers.iter().enumerate() {
        let end = markers
            .get(index + 1)
            .map_or(body.len(), |next| next.start());

        let candidate = body[marker.start()..end].trim();
        if candidate.chars().count() < MIN_TEMPLATE_CHARS {
            continue;
        }

        let template = body[marker.end()..end].trim();
        if !template.is_empty() {
            templates.push(template.to_string());
        }
    }

    if templates.is_empty() {
        let whole = body.trim();
        if whole.chars().count() >= MIN_TEMPLATE_CHARS {
            return vec![whole.to_string()];
        }
    }

    templates
}
