use crate::error::{Result, SpecError};
use regex::Regex;
use std::sync::OnceLock;

static SEPARATOR_RE: OnceLock<Regex> = OnceLock::new();

fn separator_re() -> &'static Regex {
    SEPARATOR_RE.get_or_init(|| Regex::new(r"[^a-z0-9]+").unwrap())
}

/// Normalize free text into a directory-safe slug.
///
/// Lowercases, collapses every run of characters outside `[a-z0-9]` into a
/// single hyphen, and trims hyphens from both ends. Total over all input;
/// text with no ASCII letters or digits yields an empty string.
pub fn sanitize(text: &str) -> String {
    let lower = text.to_lowercase();
    separator_re()
        .replace_all(&lower, "-")
        .trim_matches('-')
        .to_string()
}

/// [`sanitize`], rejecting input that leaves nothing to name a directory with.
pub fn sanitize_required(text: &str) -> Result<String> {
    let slug = sanitize(text);
    if slug.is_empty() {
        return Err(SpecError::InvalidName(text.to_string()));
    }
    Ok(slug)
}
