//! Landing-page rendering: one static HTML document, no further round trips.
//!
//! The page offers a one-of-N radio selector over candidate domains plus one
//! action per registrar. Registrar data is embedded as JSON generated from
//! the same catalog the JSON endpoints serve, and a small inline script
//! resolves the deep link at click time with the same algorithm as
//! [`crate::resolver::resolve_deep_link`]. Rendering is a pure, synchronous,
//! deterministic function of its inputs.
//!
//! The candidate list arrives from an untrusted query string, so every
//! dynamic string is escaped for its context: text nodes, attribute values,
//! and the embedded JSON (`<` is escaped so a crafted value cannot terminate
//! the script element).

use crate::types::RegistrarEntry;
use crate::utils::dedupe_candidates;
use html_escape::encode_safe;

/// Render the "choose a registrar" landing page.
///
/// Candidates are de-duplicated case-insensitively (order-preserving, first
/// occurrence wins) and the first one is pre-selected. An empty list renders
/// a "(none)" selector and the page script refuses to navigate until a
/// candidate exists. Registrars render once each, in the order given.
///
/// `suffix_badge` is display-only; pass the active suffix when the caller
/// knows it (legacy label+tld requests), otherwise the default ".ke" badge
/// is shown.
pub fn render_landing<S: AsRef<str>>(
    registrars: &[&RegistrarEntry],
    candidates: &[S],
    suffix_badge: Option<&str>,
) -> String {
    let candidates = dedupe_candidates(candidates);
    let selected = candidates.first().cloned().unwrap_or_default();
    let badge = suffix_badge.unwrap_or(".ke");

    let names_line = if candidates.is_empty() {
        "<span class=\"muted\">(none)</span>".to_string()
    } else {
        encode_safe(&candidates.join(", ")).into_owned()
    };

    let radios = if candidates.is_empty() {
        "      <p class=\"muted\">(none)</p>\n".to_string()
    } else {
        let mut rows = String::new();
        for (i, domain) in candidates.iter().enumerate() {
            let checked = if i == 0 { " checked" } else { "" };
            rows.push_str(&format!(
                "      <label class=\"radio-row\">\n        <input type=\"radio\" name=\"picked\" value=\"{}\"{}/>\n        <span>{}</span>\n      </label>\n",
                encode_safe(domain),
                checked,
                encode_safe(domain),
            ));
        }
        rows
    };

    let mut reg_rows = String::new();
    for registrar in registrars {
        reg_rows.push_str(&format!(
            "      <div class=\"reg-row\">\n        <div class=\"reg-name\">{}</div>\n        <a class=\"btn\" href=\"#\" data-slug=\"{}\">Go to registrar</a>\n      </div>\n",
            encode_safe(&registrar.name),
            encode_safe(&registrar.slug),
        ));
    }

    let registrar_data = json_for_script(registrars);

    format!(
        r#"<!doctype html>
<html lang="en">
<head>
<meta charset="utf-8"/>
<meta name="viewport" content="width=device-width,initial-scale=1"/>
<title>Buy .ke domains</title>
<style>{style}</style>
</head>
<body>
  <div class="wrap">
    <h1>Buy .ke domains</h1>

    <div class="section">
      <div class="heading">
        <div class="muted">Your names:</div>
        <div>{names_line}</div>
        <span class="pill">{badge}</span>
      </div>

      <div style="margin-top:10px;">
        <div class="muted" style="margin-bottom:10px;">Choose the domain to buy</div>
{radios}        <div class="muted" id="pickedLine" style="margin-top:10px;">Selected: {selected_line}</div>
      </div>
    </div>

    <div class="section">
      <div class="muted" style="margin-bottom:10px;">Select a registrar</div>
{reg_rows}    </div>
  </div>

<script id="registrar-data" type="application/json">{registrar_data}</script>
<script>{script}</script>
</body>
</html>
"#,
        style = PAGE_STYLE,
        names_line = names_line,
        badge = encode_safe(badge),
        radios = radios,
        selected_line = if selected.is_empty() {
            "(none)".to_string()
        } else {
            encode_safe(&selected).into_owned()
        },
        reg_rows = reg_rows,
        registrar_data = registrar_data,
        script = PAGE_SCRIPT,
    )
}

/// Serialize a value for embedding inside a `<script>` element.
///
/// `<` is emitted as `\u003c` so no string value can contain `</script>` and
/// terminate the element early. JSON string escapes are otherwise left to
/// serde_json.
pub(crate) fn json_for_script<T: serde::Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string(value)
        .unwrap_or_else(|_| "[]".to_string())
        .replace('<', "\\u003c")
}

const PAGE_STYLE: &str = r#"
  :root { --bg:#111214; --card:#1b1d21; --text:#e7e7ea; --muted:#a0a0aa; --accent:#7b5cff; }
  * { box-sizing:border-box; }
  body { margin:0; font-family:system-ui, -apple-system, Segoe UI, Roboto, Ubuntu, Cantarell, 'Helvetica Neue', Arial, 'Noto Sans', sans-serif; background:var(--bg); color:var(--text); }
  .wrap { max-width:1100px; margin:32px auto; padding:0 20px; }
  h1 { font-weight:800; font-size:38px; margin:0 0 8px 0; }
  .section { background:var(--card); border:1px solid #2a2d33; border-radius:14px; padding:18px 18px; margin-top:16px; }
  .muted { color:var(--muted); }
  .pill { background:#23252b; color:#ccc; border:1px solid #31343b; padding:6px 10px; border-radius:999px; font-size:13px; }
  .heading { display:flex; gap:10px; align-items:center; margin-bottom:10px; }
  .radio-row { display:flex; align-items:center; gap:14px; padding:12px 12px; border-radius:10px; border:1px solid #2a2d33; background:#17191c; margin:8px 0; }
  .radio-row input { width:18px; height:18px; }
  .reg-row { display:flex; align-items:center; justify-content:space-between; padding:12px 12px; border-radius:10px; border:1px solid #2a2d33; background:#17191c; margin:8px 0; }
  .reg-name { font-weight:600; font-size:18px; }
  .btn { display:inline-block; color:white; text-decoration:none; background:var(--accent); padding:10px 14px; border-radius:10px; }
  .btn:hover { filter:brightness(1.05); }
"#;

// Client-side mirror of resolver::resolve_deep_link. The registrar objects
// come from the JSON block above, generated from the same catalog, so both
// call sites share one definition of the data. Templates carry exactly one
// {DOMAIN} placeholder (validated at catalog construction), which is why a
// single string replace is enough.
const PAGE_SCRIPT: &str = r#"
(function(){
  var registrars = JSON.parse(document.getElementById('registrar-data').textContent);
  var pickedLine = document.getElementById('pickedLine');

  function getPicked() {
    var r = document.querySelector('input[name="picked"]:checked');
    return r ? r.value : '';
  }

  function resolveDeepLink(reg, domain) {
    var d = domain.trim().toLowerCase();
    if (!reg.deepLinkTemplate) return reg.siteUrl;
    return reg.deepLinkTemplate.replace('{DOMAIN}', encodeURIComponent(d));
  }

  Array.prototype.forEach.call(document.querySelectorAll('input[name="picked"]'), function(inp){
    inp.addEventListener('change', function(){
      pickedLine.textContent = 'Selected: ' + (getPicked() || '(none)');
    });
  });

  Array.prototype.forEach.call(document.querySelectorAll('a.btn[data-slug]'), function(a){
    a.addEventListener('click', function(e){
      e.preventDefault();
      var domain = getPicked();
      if (!domain) { alert('Please pick a domain first.'); return; }
      var reg = null;
      for (var i = 0; i < registrars.length; i++) {
        if (registrars[i].slug === a.dataset.slug) { reg = registrars[i]; break; }
      }
      if (!reg) { alert('Unknown registrar.'); return; }
      window.location.href = resolveDeepLink(reg, domain);
    });
  });
})();
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn page(candidates: &[&str]) -> String {
        let catalog = Catalog::builtin();
        render_landing(&catalog.registrars(None), candidates, None)
    }

    /// Pull the radio values back out of the rendered page, in order.
    fn extract_candidates(page: &str) -> Vec<String> {
        let mut out = Vec::new();
        for chunk in page.split("name=\"picked\" value=\"").skip(1) {
            if let Some(end) = chunk.find('"') {
                out.push(chunk[..end].to_string());
            }
        }
        out
    }

    #[test]
    fn test_dedupe_scenario_two_entries_first_preselected() {
        let html = page(&["A.com", "a.com", "B.com"]);
        assert_eq!(extract_candidates(&html), vec!["A.com", "B.com"]);
        // First entry is the checked one
        assert!(html.contains("value=\"A.com\" checked"));
        assert!(!html.contains("value=\"B.com\" checked"));
        assert!(html.contains("Selected: A.com"));
    }

    #[test]
    fn test_render_then_extract_preserves_order() {
        let html = page(&["zebra.ke", "apple.ke", "ZEBRA.KE"]);
        assert_eq!(extract_candidates(&html), vec!["zebra.ke", "apple.ke"]);
    }

    #[test]
    fn test_empty_candidates_render_none_and_no_radios() {
        let html = page(&[]);
        assert!(html.contains("(none)"));
        assert!(!html.contains("<input type=\"radio\""));
        // The blocking prompt ships with the page regardless
        assert!(html.contains("Please pick a domain first."));
    }

    #[test]
    fn test_hostile_domain_is_escaped_never_executable() {
        let hostile = "\"><script>alert(1)</script>";
        let html = page(&[hostile]);
        assert!(!html.contains("<script>alert"));
        assert!(!html.contains("\"><script>"));
        assert!(html.contains("&lt;script&gt;alert(1)"));
    }

    #[test]
    fn test_registrars_render_once_in_catalog_order() {
        let html = page(&["example.co.ke"]);
        assert_eq!(html.matches("data-slug=\"truehost\"").count(), 1);

        let first = html.find("data-slug=\"hostpinnacle\"").unwrap();
        let last = html.find("data-slug=\"softlink-options\"").unwrap();
        assert!(first < last);
    }

    #[test]
    fn test_embedded_data_matches_catalog_wire_shape() {
        let html = page(&["example.co.ke"]);
        assert!(html.contains("\"slug\":\"truehost\""));
        assert!(html.contains("\"deepLinkTemplate\""));
        // Internal-only fields never reach the page
        assert!(!html.contains("\"suffixes\""));
    }

    #[test]
    fn test_json_for_script_escapes_script_terminators() {
        let value = vec!["</script><script>alert(1)</script>"];
        let json = json_for_script(&value);
        assert!(!json.contains("</script>"));
        assert!(json.contains("\\u003c/script>"));
    }

    #[test]
    fn test_suffix_badge_is_shown_and_escaped() {
        let catalog = Catalog::builtin();
        let html = render_landing(
            &catalog.registrars(None),
            &["a.co.ke"],
            Some(".co.ke"),
        );
        assert!(html.contains("<span class=\"pill\">.co.ke</span>"));

        let html = render_landing(&catalog.registrars(None), &["a.co.ke"], None);
        assert!(html.contains("<span class=\"pill\">.ke</span>"));
    }
}
