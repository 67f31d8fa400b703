//! Common utilities for document generation.
//!
//! Shared helpers for markup escaping, download filenames and bundled assets.

use lazy_static::lazy_static;
use regex::Regex;
use std::path::Path;

/// Byte budgets for the filename parts, keeping the whole name under the
/// 255-byte limit applied by `sanitize_filename`.
const MAX_NAME_BYTES: usize = 160;
const MAX_PASSPORT_BYTES: usize = 48;

lazy_static! {
    static ref WHITESPACE: Regex = Regex::new(r"\s+").expect("valid whitespace regex");
}

/// Escape special characters for HTML text and attribute values.
pub fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Collapse every whitespace run to a single underscore.
pub fn underscore_whitespace(value: &str) -> String {
    WHITESPACE.replace_all(value.trim(), "_").into_owned()
}

/// Cut `value` to at most `max` bytes on a char boundary.
fn truncate_bytes(value: &str, max: usize) -> &str {
    if value.len() <= max {
        return value;
    }
    let mut end = max;
    while !value.is_char_boundary(end) {
        end -= 1;
    }
    &value[..end]
}

/// Build the suggested download name, e.g. `CV_Ahmed_Ali_P1234567.pdf`.
pub fn cv_filename(full_name: Option<&str>, passport_number: Option<&str>) -> String {
    let name = full_name
        .map(underscore_whitespace)
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "candidate".to_string());

    let mut stem = format!("CV_{}", truncate_bytes(&name, MAX_NAME_BYTES));
    if let Some(passport) = passport_number.map(underscore_whitespace).filter(|s| !s.is_empty()) {
        stem.push('_');
        stem.push_str(truncate_bytes(&passport, MAX_PASSPORT_BYTES));
    }

    let safe = sanitize_filename::sanitize(format!("{stem}.pdf")).replace('"', "");
    if safe.is_empty() {
        "CV_candidate.pdf".to_string()
    } else {
        safe
    }
}

/// Get the static assets directory path.
pub fn get_static_dir() -> &'static Path {
    Path::new(concat!(env!("CARGO_MANIFEST_DIR"), "/static"))
}
