//! Configuration file parsing for catalog overrides.
//!
//! This module handles loading a catalog definition from a TOML file, so a
//! deployment can swap registrars or TLDs without a rebuild. A list present
//! in the file replaces the corresponding builtin list wholesale; a partial
//! per-entry merge would make listing order ambiguous, and order is part of
//! the catalog contract.

use crate::catalog::{builtin_registrar_entries, builtin_tld_entries, Catalog};
use crate::error::HandoffError;
use crate::types::{RegistrarEntry, TldEntry};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Catalog configuration loaded from a TOML file.
///
/// ```toml
/// [[tlds]]
/// tld = ".co.ke"
/// restricted = false
///
/// [[registrars]]
/// slug = "truehost"
/// name = "Truehost"
/// site_url = "https://truehost.co.ke/"
/// deep_link_template = "https://truehost.co.ke/cart.php?a=add&domain=register&query={DOMAIN}"
/// suffixes = [".co.ke"]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FileConfig {
    /// Supported TLD entries; replaces the builtin list when present
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tlds: Option<Vec<TldConfig>>,

    /// Registrar directory; replaces the builtin list when present
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registrars: Option<Vec<RegistrarConfig>>,
}

/// One `[[tlds]]` table. Snake_case on disk, unlike the camelCase wire shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TldConfig {
    pub tld: String,
    #[serde(default)]
    pub restricted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// One `[[registrars]]` table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistrarConfig {
    pub slug: String,
    pub name: String,
    pub site_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deep_link_template: Option<String>,
    #[serde(default)]
    pub suffixes: Vec<String>,
}

impl From<TldConfig> for TldEntry {
    fn from(config: TldConfig) -> Self {
        TldEntry {
            tld: config.tld,
            restricted: config.restricted,
            note: config.note,
        }
    }
}

impl From<RegistrarConfig> for RegistrarEntry {
    fn from(config: RegistrarConfig) -> Self {
        RegistrarEntry {
            slug: config.slug,
            name: config.name,
            site_url: config.site_url,
            deep_link_template: config.deep_link_template,
            suffixes: config.suffixes,
        }
    }
}

/// Configuration discovery and loading functionality.
pub struct ConfigManager;

impl ConfigManager {
    /// Load configuration from a specific file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    ///
    /// The parsed configuration or an error if the file is missing or the
    /// TOML does not parse.
    pub fn load_file<P: AsRef<Path>>(path: P) -> Result<FileConfig, HandoffError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(HandoffError::file_error(
                path.to_string_lossy(),
                "Configuration file not found",
            ));
        }

        let content = fs::read_to_string(path).map_err(|e| {
            HandoffError::file_error(
                path.to_string_lossy(),
                format!("Failed to read configuration file: {}", e),
            )
        })?;

        let config: FileConfig = toml::from_str(&content)?;
        Ok(config)
    }
}

/// Find a catalog config file in the standard local locations.
///
/// Checks `./kenic-handoff.toml` then `./.kenic-handoff.toml`; returns the
/// first that exists. Deployments that keep the file elsewhere pass an
/// explicit path instead.
pub fn discover_config_path() -> Option<PathBuf> {
    let candidates = ["./kenic-handoff.toml", "./.kenic-handoff.toml"];

    for candidate in &candidates {
        let path = Path::new(candidate);
        if path.exists() {
            return Some(path.to_path_buf());
        }
    }

    None
}

impl Catalog {
    /// Build a catalog from a config file, filling gaps from the builtin set.
    ///
    /// Each list (`tlds`, `registrars`) independently replaces its builtin
    /// counterpart when present. Validation and normalization happen in
    /// [`Catalog::from_parts`], so a config file gets the same slug/suffix
    /// guarantees as the compiled-in data.
    pub fn from_config(config: FileConfig) -> Result<Self, HandoffError> {
        let tlds = match config.tlds {
            Some(tlds) => tlds.into_iter().map(TldEntry::from).collect(),
            None => builtin_tld_entries(),
        };

        let registrars = match config.registrars {
            Some(registrars) => registrars.into_iter().map(RegistrarEntry::from).collect(),
            None => builtin_registrar_entries(),
        };

        Self::from_parts(tlds, registrars)
    }
}
