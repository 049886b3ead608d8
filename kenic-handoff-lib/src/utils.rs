//! Utility functions for domain and suffix processing.
//!
//! This module contains the string-normalization helpers used throughout the
//! library: suffix normalization, idempotent FQDN building, and candidate
//! list parsing/de-duplication.
//!
//! Candidates are deliberately not validated against DNS syntax beyond
//! trimming; the catalog never promises the names are registrable, only that
//! they round-trip into the landing page and deep links safely.

use crate::error::HandoffError;

/// Normalize a TLD suffix: trim, lowercase, ensure the leading dot.
///
/// # Arguments
///
/// * `suffix` - Raw suffix input, e.g. "co.ke", ".Co.KE"
///
/// # Returns
///
/// The canonical form (".co.ke"), or an error when the input is empty after
/// trimming.
pub fn normalize_suffix(suffix: &str) -> Result<String, HandoffError> {
    let trimmed = suffix.trim().to_lowercase();

    if trimmed.is_empty() || trimmed == "." {
        return Err(HandoffError::invalid_suffix(
            suffix,
            "Suffix cannot be empty",
        ));
    }

    if trimmed.starts_with('.') {
        Ok(trimmed)
    } else {
        Ok(format!(".{}", trimmed))
    }
}

/// Combine a label with a suffix into a fully-qualified domain name.
///
/// Idempotent: a label that already ends with the suffix is not suffixed
/// again, so `to_fqdn("foo.co.ke", ".co.ke")` and `to_fqdn("foo", ".co.ke")`
/// both yield "foo.co.ke". The comparison is case-insensitive and the result
/// is lowercase.
///
/// `suffix` is expected in canonical form (see [`normalize_suffix`]).
pub fn to_fqdn(label: &str, suffix: &str) -> String {
    let label = label.trim().to_lowercase();
    let suffix = suffix.trim().to_lowercase();

    if label.is_empty() {
        return label;
    }

    if label.ends_with(&suffix) {
        label
    } else {
        format!("{}{}", label, suffix)
    }
}

/// Split a comma-separated domain list into its entries.
///
/// Entries are trimmed and empties dropped; percent-decoding is the HTTP
/// layer's job and has already happened by the time this runs. No further
/// validation: an unusual name still renders (escaped) rather than erroring.
pub fn parse_domain_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
        .collect()
}

/// De-duplicate candidate domains case-insensitively, preserving order.
///
/// The first occurrence wins and keeps its original casing; later duplicates
/// (any casing) are dropped. This is the selector contract of the landing
/// page, exposed for callers that want the cleaned list without rendering.
pub fn dedupe_candidates<S: AsRef<str>>(candidates: &[S]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    let mut result = Vec::new();

    for candidate in candidates {
        let trimmed = candidate.as_ref().trim();
        if trimmed.is_empty() {
            continue;
        }

        let key = trimmed.to_lowercase();
        if seen.contains(&key) {
            continue;
        }

        seen.push(key);
        result.push(trimmed.to_string());
    }

    result
}
