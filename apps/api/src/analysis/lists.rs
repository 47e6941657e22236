//! List Extractor — turns a section body into an ordered list of items.
//!
//! Two input styles are recognised: bulleted lines (`-`, `*`, `•`, `1.`) and
//! inline comma-separated lists. Items are trimmed, empties are dropped, and
//! order is preserved. There is no deduplication and no case folding.

use std::sync::LazyLock;

use regex::Regex;

static NUMBER_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{1,2}[.)]\s+").expect("valid regex"));

static MATCH_PERCENTAGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)match(?:ing)?\s*(?:score|percentage)\D{0,5}(\d{1,3})").expect("valid regex")
});

const BULLET_CHARS: &[char] = &['-', '*', '•'];

/// How a body with no bullet lines is split.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InlineStyle {
    /// Split on commas.
    Comma,
    /// Keep the whole body as a single item (prose sections).
    Whole,
}

/// Extracts items from a section body, splitting inline bodies on commas.
pub fn extract_list(body: &str) -> Vec<String> {
    extract_list_with(body, InlineStyle::Comma)
}

/// Extracts items from a section body using `inline` when no bullets are present.
pub fn extract_list_with(body: &str, inline: InlineStyle) -> Vec<String> {
    let items: Vec<String> = if has_bullets(body) {
        body.lines().map(strip_bullet).map(String::from).collect()
    } else {
        match inline {
            InlineStyle::Comma => body.split(',').map(clean_item).map(String::from).collect(),
            InlineStyle::Whole => vec![clean_item(body).to_string()],
        }
    };

    items.into_iter().filter(|item| !item.is_empty()).collect()
}

/// Pulls the first "match score / percentage" figure out of `raw_text`.
///
/// Values are not clamped: a generator that writes "Match score: 150" yields 150.
pub fn extract_match_percentage(raw_text: &str) -> Option<u32> {
    MATCH_PERCENTAGE
        .captures(raw_text)
        .and_then(|captures| captures.get(1))
        .and_then(|digits| digits.as_str().parse().ok())
}

fn has_bullets(body: &str) -> bool {
    body.lines().any(is_bullet_line)
}

// `*` only counts when followed by whitespace; `**Rust**, Go` is emphasis.
fn is_bullet_line(line: &str) -> bool {
    let line = line.trim_start();
    line.starts_with(['-', '•'])
        || line
            .strip_prefix('*')
            .is_some_and(|rest| rest.starts_with(char::is_whitespace))
        || NUMBER_MARKER.is_match(line)
}

fn strip_bullet(line: &str) -> &str {
    let line = line.trim_start().trim_start_matches(|c: char| {
        BULLET_CHARS.contains(&c) || c.is_whitespace()
    });
    let line = match NUMBER_MARKER.find(line) {
        Some(marker) => &line[marker.end()..],
        None => line,
    };
    clean_item(line)
}

/// Trims whitespace and leftover markdown emphasis from both ends.
fn clean_item(item: &str) -> &str {
    item.trim_matches(|c: char| c.is_whitespace() || c == '*')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hyphen_bullets() {
        assert_eq!(extract_list("- Python\n- SQL"), vec!["Python", "SQL"]);
    }

    #[test]
    fn test_comma_list() {
        assert_eq!(extract_list(" Python, SQL ,Docker "), vec!["Python", "SQL", "Docker"]);
    }

    #[test]
    fn test_hyphen_and_comma_styles_agree() {
        let bulleted = extract_list("- Rust\n- PostgreSQL\n- Kubernetes\n");
        let inline = extract_list("Rust, PostgreSQL, Kubernetes");
        assert_eq!(bulleted, inline);
    }

    #[test]
    fn test_mixed_bullet_markers_and_emphasis() {
        let body = "**\n* **Rust**\n• Go\n  - Python\n";
        assert_eq!(extract_list(body), vec!["Rust", "Go", "Python"]);
    }

    #[test]
    fn test_numbered_lines_are_bullets() {
        let body = "1. Backend Engineer\n2) Site Reliability Engineer\n";
        assert_eq!(
            extract_list(body),
            vec!["Backend Engineer", "Site Reliability Engineer"]
        );
    }

    #[test]
    fn test_leading_emphasis_is_not_a_bullet() {
        assert_eq!(extract_list("**Rust**, Go"), vec!["Rust", "Go"]);
        assert!(!is_bullet_line("**Rust**"));
        assert!(is_bullet_line("  * Rust"));
        assert!(is_bullet_line("-Rust"));
    }

    #[test]
    fn test_inner_hyphen_does_not_trigger_bullet_mode() {
        assert_eq!(
            extract_list("Node-RED, CI/CD, front-end"),
            vec!["Node-RED", "CI/CD", "front-end"]
        );
    }

    #[test]
    fn test_empty_items_dropped_and_duplicates_kept() {
        assert_eq!(extract_list("Rust,, Rust , ,"), vec!["Rust", "Rust"]);
        assert!(extract_list("  \n ").is_empty());
        assert!(extract_list("- \n-\n").is_empty());
    }

    #[test]
    fn test_trailing_language_symbols_survive() {
        assert_eq!(extract_list("- C++\n- C#"), vec!["C++", "C#"]);
    }

    #[test]
    fn test_whole_style_keeps_prose_together() {
        let body = "Strong Rust background, but no cloud experience.";
        assert_eq!(
            extract_list_with(body, InlineStyle::Whole),
            vec!["Strong Rust background, but no cloud experience."]
        );
    }

    #[test]
    fn test_whole_style_still_splits_bullets() {
        let body = "- Shipped Rust services, at scale\n- Led a team";
        assert_eq!(
            extract_list_with(body, InlineStyle::Whole),
            vec!["Shipped Rust services, at scale", "Led a team"]
        );
    }

    #[test]
    fn test_match_percentage_variants() {
        assert_eq!(extract_match_percentage("Match score: 82%"), Some(82));
        assert_eq!(extract_match_percentage("**Matching Percentage:** 7"), Some(7));
        assert_eq!(extract_match_percentage("overall match score is 100%"), Some(100));
        assert_eq!(extract_match_percentage("Match score: 150"), Some(150));
    }

    #[test]
    fn test_match_percentage_absent() {
        assert_eq!(extract_match_percentage("A strong match overall."), None);
        assert_eq!(
            extract_match_percentage("Match score: not available, see notes 55"),
            None
        );
    }
}
