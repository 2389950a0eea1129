use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use serde::Deserialize;
use tracing::error;

use crate::catalog::{self, PageMetadata};
use crate::html;
use crate::server::AppState;

#[derive(Debug, Deserialize)]
pub struct PageQuery {
    pub page: Option<String>,
}

fn unavailable() -> Response {
    (
        StatusCode::SERVICE_UNAVAILABLE,
        "Service temporairement indisponible",
    )
        .into_response()
}

pub async fn home(State(state): State<AppState>) -> Response {
    let categories = match state.repo.list_categories().await {
        Ok(categories) => categories,
        Err(e) => {
            error!("Failed to list categories: {}", e);
            return unavailable();
        }
    };

    let site = &state.config.site;
    let meta = PageMetadata {
        title: site.name.clone(),
        og_type: Some("website"),
        canonical: Some("/".to_string()),
        ..Default::default()
    };
    let body = format!(
        r#"<div class="container"><h1>{}</h1>{}</div>"#,
        html::escape(&site.name),
        html::category_list(Some(categories.as_slice()))
    );

    Html(html::document(&meta, &site.name, None, &body)).into_response()
}

pub async fn movie_page(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let site = &state.config.site;

    match catalog::load_movie_page(state.repo.as_ref(), site, &id).await {
        Ok(Some(page)) => {
            let body = html::movie_body(&page, &site.image_base);
            let doc = html::document(&page.metadata, &site.name, Some(&page.structured_data), &body);
            Html(doc).into_response()
        }
        Ok(None) => {
            let doc = html::document(&PageMetadata::not_found(), &site.name, None, &html::not_found_body());
            (StatusCode::NOT_FOUND, Html(doc)).into_response()
        }
        Err(e) => {
            error!("Failed to load movie {}: {}", id, e);
            unavailable()
        }
    }
}

pub async fn category_page(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Query(query): Query<PageQuery>,
) -> Response {
    let site = &state.config.site;
    let page = catalog::parse_page(query.page.as_deref());

    let listing = match catalog::load_category_page(state.repo.as_ref(), site, &name, page).await {
        Ok(listing) => listing,
        Err(e) => {
            error!("Failed to load category {} page {}: {}", name, page, e);
            return unavailable();
        }
    };

    let grid = if listing.movies.is_empty() {
        r#"<p class="empty">Aucun film dans cette catégorie.</p>"#.to_string()
    } else {
        html::movie_grid(&listing.movies, &site.image_base)
    };
    let body = format!(
        r#"<div class="container"><h1>Films {}</h1>{}{}</div>"#,
        html::escape(&listing.name),
        grid,
        html::pagination(&listing.pagination)
    );

    Html(html::document(&listing.metadata, &site.name, None, &body)).into_response()
}

pub async fn robots_txt() -> &'static str {
    "User-agent: *\nAllow: /\n"
}
