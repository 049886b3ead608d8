//! Deep-link resolution: map (registrar, domain) to a single URL to open.
//!
//! Resolution is pure string construction. There are no network calls and no
//! validation that the resulting URL is reachable; the registrar's template
//! is trusted verbatim and only the domain is encoded into it.

use crate::error::HandoffError;
use crate::types::RegistrarEntry;

/// The placeholder a deep-link template carries exactly once.
pub const DOMAIN_PLACEHOLDER: &str = "{DOMAIN}";

/// Resolve the URL that opens `registrar` with `domain` pre-filled.
///
/// The domain is trimmed and lowercased, then percent-encoded before it is
/// substituted for [`DOMAIN_PLACEHOLDER`], so reserved URL characters (or a
/// literal `{DOMAIN}` token in the input) can never alter the template's
/// surrounding path/query structure. A registrar without a template resolves
/// to its plain site URL; the user is expected to search manually there.
///
/// # Errors
///
/// Returns `HandoffError::InvalidDomain` when `domain` is empty after
/// trimming. Callers that want the homepage for "no domain picked yet"
/// should use `registrar.site_url` directly instead of relying on a
/// fallback here.
pub fn resolve_deep_link(
    registrar: &RegistrarEntry,
    domain: &str,
) -> Result<String, HandoffError> {
    let domain = domain.trim().to_lowercase();

    if domain.is_empty() {
        return Err(HandoffError::invalid_domain(
            domain,
            "Domain cannot be empty",
        ));
    }

    match &registrar.deep_link_template {
        Some(template) => {
            let encoded = urlencoding::encode(&domain);
            Ok(template.replace(DOMAIN_PLACEHOLDER, &encoded))
        }
        None => Ok(registrar.site_url.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registrar(template: Option<&str>) -> RegistrarEntry {
        RegistrarEntry {
            slug: "truehost".to_string(),
            name: "Truehost".to_string(),
            site_url: "https://truehost.co.ke/".to_string(),
            deep_link_template: template.map(|t| t.to_string()),
            suffixes: Vec::new(),
        }
    }

    const CART_TEMPLATE: &str =
        "https://truehost.co.ke/cart.php?a=add&domain=register&query={DOMAIN}";

    #[test]
    fn test_template_substitution() {
        let r = registrar(Some(CART_TEMPLATE));
        let url = resolve_deep_link(&r, "example.co.ke").unwrap();
        assert_eq!(
            url,
            "https://truehost.co.ke/cart.php?a=add&domain=register&query=example.co.ke"
        );
    }

    #[test]
    fn test_domain_is_lowercased_and_never_leaves_placeholder() {
        let r = registrar(Some(CART_TEMPLATE));
        let url = resolve_deep_link(&r, "My.Example").unwrap();
        assert!(url.contains("query=my.example"));
        assert!(!url.contains(DOMAIN_PLACEHOLDER));
    }

    #[test]
    fn test_reserved_characters_are_percent_encoded() {
        let r = registrar(Some(CART_TEMPLATE));
        let url = resolve_deep_link(&r, "a&b=c.ke").unwrap();
        // The template's own query structure must survive intact
        assert!(url.starts_with("https://truehost.co.ke/cart.php?a=add&domain=register&query="));
        assert!(url.ends_with("query=a%26b%3Dc.ke"));
    }

    #[test]
    fn test_literal_placeholder_in_domain_is_encoded_not_substituted() {
        let r = registrar(Some(CART_TEMPLATE));
        let url = resolve_deep_link(&r, "{DOMAIN}.ke").unwrap();
        assert!(url.ends_with("query=%7Bdomain%7D.ke"));
    }

    #[test]
    fn test_no_template_falls_back_to_site_url() {
        let r = registrar(None);
        let url = resolve_deep_link(&r, "example.co.ke").unwrap();
        assert_eq!(url, "https://truehost.co.ke/");
    }

    #[test]
    fn test_empty_domain_is_an_error() {
        let r = registrar(Some(CART_TEMPLATE));
        assert!(resolve_deep_link(&r, "").is_err());
        assert!(resolve_deep_link(&r, "   ").is_err());
    }
}
