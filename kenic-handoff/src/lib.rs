//! HTTP surface for the registrar handoff service.
//!
//! Thin glue over `kenic-handoff-lib`: every handler reads the shared
//! immutable catalog, calls a pure library function, and maps library errors
//! to plain-text HTTP responses. Failures are terminal for the single
//! request — nothing here retries, and nothing can poison shared state.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{Html, Redirect};
use axum::routing::get;
use axum::{Json, Router};
use kenic_handoff_lib::{
    normalize_suffix, parse_domain_list, render_landing, resolve_deep_link, to_fqdn, Catalog,
    RegistrarEntry, TldEntry,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/kenic/tlds", get(list_tlds))
        .route("/kenic/registrars", get(list_registrars))
        .route("/kenic/landing", get(landing))
        .route("/kenic/jump", get(jump))
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}

/// Bind and serve until ctrl-c.
pub async fn serve(addr: SocketAddr, catalog: Catalog) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    serve_listener(listener, catalog, async {
        let _ = tokio::signal::ctrl_c().await;
    })
    .await?;
    Ok(())
}

pub async fn serve_listener(
    listener: tokio::net::TcpListener,
    catalog: Catalog,
    shutdown: impl std::future::Future<Output = ()> + Send + 'static,
) -> anyhow::Result<SocketAddr> {
    let state = AppState {
        catalog: Arc::new(catalog),
    };
    let app = build_router(state);
    let addr = listener.local_addr()?;
    tracing::info!("listening on http://{addr}");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;
    Ok(addr)
}

async fn root() -> &'static str {
    "KeNIC handoff API OK"
}

#[derive(Debug, Serialize)]
struct TldsResponse {
    tlds: Vec<TldEntry>,
}

async fn list_tlds(State(state): State<Arc<AppState>>) -> Json<TldsResponse> {
    Json(TldsResponse {
        tlds: state.catalog.tlds().to_vec(),
    })
}

#[derive(Debug, Deserialize)]
struct RegistrarsQuery {
    #[serde(default)]
    suffix: Option<String>,
}

#[derive(Debug, Serialize)]
struct RegistrarsResponse {
    registrars: Vec<RegistrarEntry>,
}

async fn list_registrars(
    State(state): State<Arc<AppState>>,
    Query(query): Query<RegistrarsQuery>,
) -> Json<RegistrarsResponse> {
    let registrars = state
        .catalog
        .registrars(query.suffix.as_deref())
        .into_iter()
        .cloned()
        .collect();
    Json(RegistrarsResponse { registrars })
}

#[derive(Debug, Deserialize, Default)]
struct LandingQuery {
    /// Preferred form: comma-separated FQDNs, each percent-encoded
    #[serde(default)]
    domains: Option<String>,
    /// Legacy form: suffix + bare labels to combine
    #[serde(default)]
    tld: Option<String>,
    #[serde(default)]
    labels: Option<String>,
}

async fn landing(
    State(state): State<Arc<AppState>>,
    Query(query): Query<LandingQuery>,
) -> Result<Html<String>, (StatusCode, String)> {
    let suffix = match query.tld.as_deref() {
        Some(tld) => Some(
            normalize_suffix(tld).map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))?,
        ),
        None => None,
    };

    let candidates = if let Some(domains) = query.domains.as_deref() {
        parse_domain_list(domains)
    } else if let Some(labels) = query.labels.as_deref() {
        let Some(suffix) = suffix.as_deref() else {
            return Err((
                StatusCode::BAD_REQUEST,
                "Missing 'tld' parameter. Use ?tld=<suffix>&labels=<names> or ?domains=<fqdns>."
                    .to_string(),
            ));
        };
        parse_domain_list(labels)
            .iter()
            .map(|label| to_fqdn(label, suffix))
            .collect()
    } else {
        // Empty cart: the page still renders, with "(none)" and blocked
        // registrar actions.
        Vec::new()
    };

    let registrars = state.catalog.registrars(suffix.as_deref());
    Ok(Html(render_landing(
        &registrars,
        &candidates,
        suffix.as_deref(),
    )))
}

#[derive(Debug, Deserialize, Default)]
struct JumpQuery {
    #[serde(default)]
    slug: Option<String>,
    #[serde(default)]
    domain: Option<String>,
}

async fn jump(
    State(state): State<Arc<AppState>>,
    Query(query): Query<JumpQuery>,
) -> Result<Redirect, (StatusCode, String)> {
    let slug = query.slug.unwrap_or_default();
    let registrar = state
        .catalog
        .registrar_by_slug(&slug)
        .ok_or((StatusCode::NOT_FOUND, "Unknown registrar".to_string()))?;

    let domain = query.domain.unwrap_or_default();
    let url = resolve_deep_link(registrar, &domain)
        .map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))?;

    Ok(Redirect::to(&url))
}

#[cfg(test)]
mod tests;
