use super::*;
use axum::http::header;
use axum::response::IntoResponse;

fn test_state() -> State<Arc<AppState>> {
    State(Arc::new(AppState {
        catalog: Arc::new(Catalog::builtin()),
    }))
}

#[tokio::test]
async fn root_reports_liveness() {
    assert_eq!(root().await, "KeNIC handoff API OK");
}

#[tokio::test]
async fn tlds_returns_full_catalog_in_order() {
    let Json(resp) = list_tlds(test_state()).await;
    assert_eq!(resp.tlds.len(), 10);
    assert_eq!(resp.tlds[0].tld, ".ke");
    assert!(resp.tlds[0].restricted);
    assert_eq!(resp.tlds[1].tld, ".co.ke");
}

#[tokio::test]
async fn registrars_wire_shape_is_canonical() {
    let Json(resp) = list_registrars(test_state(), Query(RegistrarsQuery { suffix: None })).await;
    assert_eq!(resp.registrars.len(), 8);

    let json = serde_json::to_value(&resp.registrars[0]).unwrap();
    assert!(json.get("slug").is_some());
    assert!(json.get("name").is_some());
    assert!(json.get("siteUrl").is_some());
    assert!(json.get("deepLinkTemplate").is_some());
    // Internal-only field stays internal
    assert!(json.get("suffixes").is_none());
}

#[tokio::test]
async fn registrars_unknown_suffix_falls_back_to_default_list() {
    let all = list_registrars(test_state(), Query(RegistrarsQuery { suffix: None }))
        .await
        .0;
    let filtered = list_registrars(
        test_state(),
        Query(RegistrarsQuery {
            suffix: Some(".example".to_string()),
        }),
    )
    .await
    .0;
    assert_eq!(all.registrars, filtered.registrars);
}

#[tokio::test]
async fn landing_dedupes_and_preselects_first() {
    let Html(page) = landing(
        test_state(),
        Query(LandingQuery {
            domains: Some("A.com,a.com,B.com".to_string()),
            ..Default::default()
        }),
    )
    .await
    .unwrap();

    assert_eq!(page.matches("<input type=\"radio\"").count(), 2);
    assert!(page.contains("value=\"A.com\" checked"));
    assert!(page.contains("value=\"B.com\""));
    assert!(!page.contains("value=\"B.com\" checked"));
}

#[tokio::test]
async fn landing_legacy_labels_combine_with_tld() {
    let Html(page) = landing(
        test_state(),
        Query(LandingQuery {
            tld: Some("co.ke".to_string()),
            labels: Some("duka,shop.co.ke".to_string()),
            ..Default::default()
        }),
    )
    .await
    .unwrap();

    assert!(page.contains("value=\"duka.co.ke\" checked"));
    // Already-suffixed label is not suffixed twice
    assert!(page.contains("value=\"shop.co.ke\""));
    assert!(!page.contains("shop.co.ke.co.ke"));
    // Normalized suffix shows as the badge
    assert!(page.contains("<span class=\"pill\">.co.ke</span>"));
}

#[tokio::test]
async fn landing_labels_without_tld_is_bad_request() {
    let err = landing(
        test_state(),
        Query(LandingQuery {
            labels: Some("duka".to_string()),
            ..Default::default()
        }),
    )
    .await
    .unwrap_err();

    assert_eq!(err.0, StatusCode::BAD_REQUEST);
    assert!(err.1.contains("tld"));
}

#[tokio::test]
async fn landing_empty_domains_renders_none_page() {
    let Html(page) = landing(test_state(), Query(LandingQuery::default()))
        .await
        .unwrap();

    assert!(page.contains("(none)"));
    assert!(!page.contains("<input type=\"radio\""));
    assert!(page.contains("Please pick a domain first."));
}

#[tokio::test]
async fn landing_escapes_hostile_query_input() {
    let Html(page) = landing(
        test_state(),
        Query(LandingQuery {
            domains: Some("\"><script>alert(1)</script>".to_string()),
            ..Default::default()
        }),
    )
    .await
    .unwrap();

    assert!(!page.contains("<script>alert"));
    assert!(page.contains("&lt;script&gt;alert(1)"));
}

#[tokio::test]
async fn jump_redirects_to_resolved_deep_link() {
    let redirect = jump(
        test_state(),
        Query(JumpQuery {
            slug: Some("truehost".to_string()),
            domain: Some("Duka.co.ke".to_string()),
        }),
    )
    .await
    .unwrap();

    let resp = redirect.into_response();
    assert!(resp.status().is_redirection());
    let location = resp.headers().get(header::LOCATION).unwrap().to_str().unwrap();
    assert_eq!(
        location,
        "https://truehost.co.ke/cart.php?a=add&domain=register&query=duka.co.ke"
    );
}

#[tokio::test]
async fn jump_unknown_slug_is_404_without_fallback() {
    let err = jump(
        test_state(),
        Query(JumpQuery {
            slug: Some("not-a-registrar".to_string()),
            domain: Some("duka.co.ke".to_string()),
        }),
    )
    .await
    .unwrap_err();

    assert_eq!(err.0, StatusCode::NOT_FOUND);
    assert_eq!(err.1, "Unknown registrar");
}

#[tokio::test]
async fn jump_missing_domain_is_400() {
    let err = jump(
        test_state(),
        Query(JumpQuery {
            slug: Some("truehost".to_string()),
            domain: None,
        }),
    )
    .await
    .unwrap_err();

    assert_eq!(err.0, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn router_builds_with_builtin_catalog() {
    let _router = build_router(AppState {
        catalog: Arc::new(Catalog::builtin()),
    });
}
