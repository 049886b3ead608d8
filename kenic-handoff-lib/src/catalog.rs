//! The registrar/TLD catalog: static tables, constructed once.
//!
//! The catalog is the single source of truth for both the JSON endpoints and
//! the data embedded into the landing page. It is immutable after
//! construction; callers share it by reference (`Arc` at the server layer)
//! and no locking exists because no writer does.

use crate::error::HandoffError;
use crate::resolver::DOMAIN_PLACEHOLDER;
use crate::types::{RegistrarEntry, TldEntry};
use crate::utils::normalize_suffix;

/// Immutable registrar/TLD catalog.
///
/// Entries keep their declaration order; every listing this type returns is
/// deterministic.
#[derive(Debug, Clone)]
pub struct Catalog {
    tlds: Vec<TldEntry>,
    registrars: Vec<RegistrarEntry>,
}

impl Catalog {
    /// Build a catalog from explicit parts, normalizing and validating.
    ///
    /// Suffixes (both TLD entries and per-registrar declarations) are
    /// normalized to leading-dot lowercase. Validation rejects duplicate
    /// slugs, empty names/URLs, and templates whose `{DOMAIN}` placeholder
    /// count is not exactly one.
    pub fn from_parts(
        tlds: Vec<TldEntry>,
        registrars: Vec<RegistrarEntry>,
    ) -> Result<Self, HandoffError> {
        let tlds = tlds
            .into_iter()
            .map(|mut entry| {
                entry.tld = normalize_suffix(&entry.tld)?;
                Ok(entry)
            })
            .collect::<Result<Vec<_>, HandoffError>>()?;

        let mut seen_slugs: Vec<String> = Vec::new();
        let registrars = registrars
            .into_iter()
            .map(|mut reg| {
                let slug = reg.slug.trim().to_lowercase();
                if slug.is_empty() {
                    return Err(HandoffError::config("Registrar slug cannot be empty"));
                }
                if seen_slugs.contains(&slug) {
                    return Err(HandoffError::config(format!(
                        "Duplicate registrar slug '{}'",
                        slug
                    )));
                }
                seen_slugs.push(slug.clone());
                reg.slug = slug;

                if reg.name.trim().is_empty() {
                    return Err(HandoffError::config(format!(
                        "Registrar '{}' has an empty name",
                        reg.slug
                    )));
                }
                if reg.site_url.trim().is_empty() {
                    return Err(HandoffError::config(format!(
                        "Registrar '{}' has an empty site URL",
                        reg.slug
                    )));
                }

                if let Some(template) = &reg.deep_link_template {
                    let placeholders = template.matches(DOMAIN_PLACEHOLDER).count();
                    if placeholders != 1 {
                        return Err(HandoffError::config(format!(
                            "Registrar '{}' template must contain {} exactly once (found {})",
                            reg.slug, DOMAIN_PLACEHOLDER, placeholders
                        )));
                    }
                }

                reg.suffixes = reg
                    .suffixes
                    .iter()
                    .map(|s| normalize_suffix(s))
                    .collect::<Result<Vec<_>, HandoffError>>()?;

                Ok(reg)
            })
            .collect::<Result<Vec<_>, HandoffError>>()?;

        Ok(Self { tlds, registrars })
    }

    /// The compiled-in KeNIC catalog.
    pub fn builtin() -> Self {
        // Builtin data is known-good; from_parts only normalizes here.
        Self::from_parts(builtin_tld_entries(), builtin_registrar_entries())
            .expect("builtin catalog must validate")
    }

    /// All supported TLD entries, in declaration order.
    pub fn tlds(&self) -> &[TldEntry] {
        &self.tlds
    }

    /// Registrars to show for `suffix`, in declaration order.
    ///
    /// When a suffix is given and at least one registrar declares it, the
    /// listing is that subset; otherwise it degrades to the full default
    /// list. An unknown suffix is therefore never an error.
    pub fn registrars(&self, suffix: Option<&str>) -> Vec<&RegistrarEntry> {
        if let Some(suffix) = suffix {
            if let Ok(suffix) = normalize_suffix(suffix) {
                let scoped: Vec<&RegistrarEntry> = self
                    .registrars
                    .iter()
                    .filter(|r| !r.suffixes.is_empty() && r.serves_suffix(&suffix))
                    .collect();
                if !scoped.is_empty() {
                    return scoped;
                }
            }
        }

        self.registrars.iter().collect()
    }

    /// Look up a registrar by its stable slug.
    pub fn registrar_by_slug(&self, slug: &str) -> Option<&RegistrarEntry> {
        let slug = slug.trim().to_lowercase();
        self.registrars.iter().find(|r| r.slug == slug)
    }
}

/// The compiled-in registrar directory, per the original KeNIC deployment.
///
/// - `site_url` is the marketing site users recognize.
/// - The deep-link template points at the billing portal (WHMCS for most
///   Kenyan registrars) and opens the cart with the domain already searched,
///   pricing visible.
pub(crate) fn builtin_registrar_entries() -> Vec<RegistrarEntry> {
    vec![
        builtin_registrar(
            "hostpinnacle",
            "HostPinnacle",
            "https://www.hostpinnacle.co.ke/",
            Some("https://www.hostpinnacle.co.ke"),
        ),
        builtin_registrar(
            "truehost",
            "Truehost",
            "https://truehost.co.ke/",
            Some("https://truehost.co.ke"),
        ),
        builtin_registrar(
            "eac-hostafrica",
            "EAC Directory (HOSTAFRICA)",
            "https://hostafrica.ke/",
            Some("https://portal.hostafrica.ke"),
        ),
        builtin_registrar(
            "safaricom",
            "Safaricom",
            "https://domains.safaricom.co.ke/",
            Some("https://domains.safaricom.co.ke"),
        ),
        builtin_registrar(
            "digital-webframe",
            "Digital Webframe Solutions",
            "https://digitalwebframe.com/",
            Some("https://clients.digitalwebframe.com"),
        ),
        builtin_registrar(
            "movetech",
            "Movetech Solutions Ltd",
            "https://movetechsolutions.co.ke/",
            Some("https://clients.movetechsolutions.co.ke"),
        ),
        builtin_registrar(
            "webhost-kenya",
            "Webhost Kenya",
            "https://webhostkenya.co.ke/",
            Some("https://clients.webhostkenya.co.ke"),
        ),
        builtin_registrar(
            "softlink-options",
            "Softlink Options Limited",
            "https://softlinkoptions.co.ke/",
            Some("https://billing.softlinkoptions.co.ke"),
        ),
    ]
}

/// The approved KeNIC TLDs (short, stable list).
pub(crate) fn builtin_tld_entries() -> Vec<TldEntry> {
    vec![
        builtin_tld(".ke", true, Some("2nd level; restricted")),
        builtin_tld(".co.ke", false, None),
        builtin_tld(".or.ke", false, None),
        builtin_tld(".me.ke", false, None),
        builtin_tld(".sc.ke", true, None),
        builtin_tld(".ac.ke", true, None),
        builtin_tld(".go.ke", true, None),
        builtin_tld(".info.ke", false, None),
        builtin_tld(".mobi.ke", false, None),
        builtin_tld(".ne.ke", false, None),
    ]
}

/// WHMCS cart deep link: opens the billing portal with the given domain
/// already searched. Most Kenyan registrars run WHMCS, so the builtin set
/// shares this shape; a registrar needing a different format just carries a
/// different template string.
fn whmcs_cart_template(base: &str) -> String {
    format!(
        "{}/cart.php?a=add&domain=register&query={}",
        base.trim_end_matches('/'),
        DOMAIN_PLACEHOLDER
    )
}

fn builtin_registrar(
    slug: &str,
    name: &str,
    site_url: &str,
    portal_base: Option<&str>,
) -> RegistrarEntry {
    RegistrarEntry {
        slug: slug.to_string(),
        name: name.to_string(),
        site_url: site_url.to_string(),
        deep_link_template: portal_base.map(whmcs_cart_template),
        suffixes: Vec::new(),
    }
}

fn builtin_tld(tld: &str, restricted: bool, note: Option<&str>) -> TldEntry {
    TldEntry {
        tld: tld.to_string(),
        restricted,
        note: note.map(|n| n.to_string()),
    }
}
