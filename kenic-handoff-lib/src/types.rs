//! Core data types for the registrar catalog.
//!
//! This module defines the entries the catalog hands out: supported TLDs and
//! registrars. Both are static configuration, built once at process start and
//! immutable afterwards.

use serde::{Deserialize, Serialize};

/// A supported top-level domain suffix.
///
/// The `tld` field always carries the leading dot, lowercase
/// (e.g. ".co.ke"); catalog construction normalizes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TldEntry {
    /// The suffix itself, e.g. ".co.ke"
    pub tld: String,

    /// Whether registration is restricted to a class of registrants
    /// (government, academic, ...)
    pub restricted: bool,

    /// Optional human-readable note shown next to the suffix
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// A registrar the user can be handed off to.
///
/// Identity is the `slug`; it is stable across catalog reloads and is what
/// the redirect endpoint accepts. Resolution is data-driven: a registrar with
/// a `deep_link_template` gets the domain substituted into it, one without
/// falls back to its plain site URL. Adding a registrar is adding data, not
/// a code path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrarEntry {
    /// Stable identifier, e.g. "truehost"
    pub slug: String,

    /// Display name, e.g. "Truehost"
    pub name: String,

    /// The marketing site users recognize; absolute URL
    pub site_url: String,

    /// URL template with a single `{DOMAIN}` placeholder that opens the
    /// registrar's interface with the domain pre-filled. When absent, the
    /// user is expected to search manually on `site_url`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deep_link_template: Option<String>,

    /// Suffixes this registrar is listed for. Empty means "listed for every
    /// suffix". Internal-only: never serialized to callers.
    #[serde(skip_serializing, default)]
    pub suffixes: Vec<String>,
}

impl RegistrarEntry {
    /// Whether this registrar should appear in the listing for `suffix`.
    ///
    /// An empty `suffixes` declaration means the registrar is global.
    pub fn serves_suffix(&self, suffix: &str) -> bool {
        self.suffixes.is_empty() || self.suffixes.iter().any(|s| s == suffix)
    }
}
