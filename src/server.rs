use axum::{extract::Request, http::StatusCode, response::IntoResponse, routing::get, Router};
use std::sync::Arc;
use tower_http::{compression::CompressionLayer, services::ServeDir, trace::TraceLayer};

use crate::config::Config;
use crate::db::CatalogRepo;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub repo: Arc<dyn CatalogRepo>,
}

impl AppState {
    pub fn new(config: Config, repo: Arc<dyn CatalogRepo>) -> Self {
        Self {
            config: Arc::new(config),
            repo,
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    let mut router = Router::new()
        .route("/", get(crate::site::home))
        .route("/movie/:id", get(crate::site::movie_page))
        .route("/category/:name", get(crate::site::category_page))
        .route("/robots.txt", get(crate::site::robots_txt))
        .fallback(fallback_handler);

    if let Some(ref appdir) = state.config.appdir {
        router = router.fallback_service(ServeDir::new(appdir));
    }

    router
        .layer(axum::middleware::from_fn(crate::middleware::cache_headers))
        .layer(axum::middleware::from_fn(crate::middleware::log_request))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn fallback_handler(_req: Request) -> impl IntoResponse {
    StatusCode::NOT_FOUND
}
