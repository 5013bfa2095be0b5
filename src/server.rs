//! HTTP surface: PWA manifest, the rendered blog list and a health probe.

use crate::core::manifest::pwa_manifest;
use crate::core::pipeline::PageBuilder;
use crate::domain::model::{BlogListView, Manifest};
use crate::utils::error::{ErrorCategory, StorefrontError};
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;
use std::{net::SocketAddr, sync::Arc};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

#[derive(Clone)]
pub struct AppState {
    pub builder: Arc<PageBuilder>,
}

impl AppState {
    pub fn new(builder: PageBuilder) -> Self {
        Self {
            builder: Arc::new(builder),
        }
    }
}

impl IntoResponse for StorefrontError {
    fn into_response(self) -> Response {
        let status = match self.category() {
            ErrorCategory::Network => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        error!(
            "❌ Request failed: {} (Category: {:?}, Severity: {:?})",
            self,
            self.category(),
            self.severity()
        );
        (status, self.user_friendly_message()).into_response()
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/manifest.json", get(manifest))
        .route("/blogs", get(all_general_blogs_page))
        .route("/api/blogs", get(all_general_blogs_json))
        .route("/health", get(health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn serve(bind_address: &str, state: AppState) -> anyhow::Result<()> {
    let addr: SocketAddr = bind_address.parse()?;
    let listener = TcpListener::bind(addr).await?;

    info!("🚀 Storefront listening on {}", listener.local_addr()?);
    axum::serve(listener, router(state)).await?;

    Ok(())
}

async fn manifest() -> Json<Manifest> {
    Json(pwa_manifest())
}

async fn all_general_blogs_page(
    State(state): State<AppState>,
) -> Result<Html<String>, StorefrontError> {
    let content = state.builder.fetch().await?;
    let page = state.builder.build(&content)?;
    Ok(Html(page.html))
}

async fn all_general_blogs_json(
    State(state): State<AppState>,
) -> Result<Json<BlogListView>, StorefrontError> {
    let content = state.builder.fetch().await?;
    Ok(Json(state.builder.view(&content)))
}

async fn health_check() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}
