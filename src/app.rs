use crate::aggregate::load_catalog;
use crate::models::{Catalog, ContentItem, SearchResult, TrailerSelection};
use crate::search::search;
use crate::tmdb::{CatalogApi, TmdbClient};
use crate::trailer::resolve_trailer;
use anyhow::{Context, Result};
use axum::{
    extract::{Query, State},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use std::{env, net::SocketAddr, sync::Arc};
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};
use tracing::{debug, info};

const MAX_BODY_BYTES: usize = 64 * 1024;
const DEFAULT_ADDR: &str = "0.0.0.0:3146";

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<dyn CatalogApi>,
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
}

pub async fn run_server() -> Result<()> {
    let catalog: Arc<dyn CatalogApi> = Arc::new(TmdbClient::from_env()?);
    let state = AppState { catalog };
    let app = build_router(state);

    let addr: SocketAddr = env::var("CINEROW_ADDR")
        .ok()
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| DEFAULT_ADDR.to_string())
        .parse()
        .context("CINEROW_ADDR is not a valid socket address")?;
    info!("Listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/catalog", get(catalog))
        .route("/search", get(search_handler))
        .route("/trailer", post(trailer))
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> &'static str {
    "OK"
}

async fn catalog(State(state): State<AppState>) -> Json<Catalog> {
    Json(load_catalog(state.catalog.as_ref()).await)
}

async fn search_handler(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Json<SearchResult> {
    debug!("Search request: '{}'", params.q);
    Json(search(state.catalog.as_ref(), &params.q).await)
}

async fn trailer(
    State(state): State<AppState>,
    Json(item): Json<ContentItem>,
) -> Json<TrailerSelection> {
    Json(resolve_trailer(state.catalog.as_ref(), item).await)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        let mut term = signal(SignalKind::terminate()).expect("failed to install SIGTERM handler");
        term.recv().await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Shutdown signal received (Ctrl+C)");
        }
        _ = terminate => {
            info!("Shutdown signal received (SIGTERM)");
        }
    }
}
