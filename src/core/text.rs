//! Heuristic title and preview extraction from blog HTML.
//!
//! Title priority: first `<h1>`, then first `<h2>`, then the first `<p>`
//! (truncated), then the whole tag-stripped body (truncated). Matches are
//! case-insensitive and stay on a single line.

use regex::Regex;
use std::sync::LazyLock;

pub const TITLE_FALLBACK_LENGTH: usize = 60;
pub const DEFAULT_PREVIEW_LENGTH: usize = 150;
const ELLIPSIS: &str = "...";

static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").expect("tag regex"));
static H1_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<h1[^>]*>(.*?)</h1>").expect("h1 regex"));
static H2_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<h2[^>]*>(.*?)</h2>").expect("h2 regex"));
static P_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<p[^>]*>(.*?)</p>").expect("p regex"));

pub fn strip_tags(html: &str) -> String {
    TAG_RE.replace_all(html, "").into_owned()
}

/// Cuts `text` to `max_chars` characters and appends `...` when anything was cut.
pub fn truncate_with_ellipsis(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => format!("{}{}", &text[..byte_idx], ELLIPSIS),
        None => text.to_string(),
    }
}

fn first_capture(re: &Regex, html: &str) -> Option<String> {
    re.captures(html)
        .and_then(|caps| caps.get(1))
        .map(|m| strip_tags(m.as_str()))
}

pub fn extract_title(html: &str) -> String {
    if let Some(title) = first_capture(&H1_RE, html) {
        return title;
    }

    if let Some(title) = first_capture(&H2_RE, html) {
        return title;
    }

    if let Some(paragraph) = first_capture(&P_RE, html) {
        return truncate_with_ellipsis(&paragraph, TITLE_FALLBACK_LENGTH);
    }

    truncate_with_ellipsis(&strip_tags(html), TITLE_FALLBACK_LENGTH)
}

pub fn extract_preview(html: &str, max_length: usize) -> String {
    truncate_with_ellipsis(&strip_tags(html), max_length)
}
