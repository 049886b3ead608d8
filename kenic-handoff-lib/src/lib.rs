//! # KeNIC Handoff Library
//!
//! A small library for handing a user off to a `.ke` domain registrar: a
//! static registrar/TLD catalog, deep-link resolution, and a self-contained
//! HTML landing page for picking one candidate domain.
//!
//! ## Quick Start
//!
//! ```rust
//! use kenic_handoff_lib::{Catalog, resolve_deep_link};
//!
//! let catalog = Catalog::builtin();
//! let registrar = catalog.registrar_by_slug("truehost").unwrap();
//! let url = resolve_deep_link(registrar, "example.co.ke").unwrap();
//!
//! assert!(url.contains("query=example.co.ke"));
//! ```
//!
//! ## Features
//!
//! - **Catalog Store**: immutable registrar/TLD tables, constructed once
//! - **Deep-Link Resolver**: data-driven `{DOMAIN}` template substitution
//! - **Landing Renderer**: one-of-N domain selector as a static HTML page
//! - **Configurable**: catalog override via TOML files

// Re-export main public API types and functions
// This makes them available as kenic_handoff_lib::TypeName
pub use catalog::Catalog;
pub use config::{discover_config_path, ConfigManager, FileConfig, RegistrarConfig, TldConfig};
pub use error::HandoffError;
pub use landing::render_landing;
pub use resolver::{resolve_deep_link, DOMAIN_PLACEHOLDER};
pub use types::{RegistrarEntry, TldEntry};
pub use utils::{dedupe_candidates, normalize_suffix, parse_domain_list, to_fqdn};

// Internal modules - these are not part of the public API
mod catalog;
mod config;
mod error;
mod landing;
mod resolver;
mod types;
mod utils;

// Type alias for convenience
pub type Result<T> = std::result::Result<T, HandoffError>;

// Library version metadata
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
