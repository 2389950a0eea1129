//! Page assembly: turns a request's identifier or page number into the
//! data a page needs, fetched from the catalog repository.

pub mod image;
pub mod seo;

use serde_json::Value;
use tracing::warn;

use crate::config::SiteConfig;
use crate::db::{CatalogRepo, DbResult, Movie};
use crate::html::pagination::PaginationState;

pub use image::{image_url, ImageSize};
pub use seo::{structured_data, PageMetadata, NOT_FOUND_TITLE};

#[derive(Debug, Clone)]
pub struct MoviePage {
    pub movie: Movie,
    pub metadata: PageMetadata,
    pub structured_data: Value,
    pub similar: Vec<Movie>,
}

#[derive(Debug, Clone)]
pub struct CategoryPage {
    pub name: String,
    pub movies: Vec<Movie>,
    pub total: u64,
    pub pagination: PaginationState,
    pub metadata: PageMetadata,
}

/// Movie ids in URLs are plain integers; anything else cannot exist.
pub fn parse_movie_id(id: &str) -> Option<i64> {
    id.trim().parse::<i64>().ok()
}

/// `?page=` values below 1 or unparsable fall back to the first page.
pub fn parse_page(page: Option<&str>) -> u32 {
    page.and_then(|p| p.trim().parse::<u32>().ok())
        .filter(|&p| p >= 1)
        .unwrap_or(1)
}

pub fn total_pages(total: u64, per_page: u32) -> u32 {
    if per_page == 0 {
        return 0;
    }
    total.div_ceil(per_page as u64).min(u32::MAX as u64) as u32
}

/// Resolve the detail page for `id`.
///
/// `Ok(None)` means the movie does not exist. A failed similar-movies
/// lookup degrades to an empty list; a failed movie lookup is an error.
pub async fn load_movie_page(
    repo: &dyn CatalogRepo,
    site: &SiteConfig,
    id: &str,
) -> DbResult<Option<MoviePage>> {
    let Some(id) = parse_movie_id(id) else {
        return Ok(None);
    };
    let Some(movie) = repo.get_movie(id).await? else {
        return Ok(None);
    };

    let metadata = PageMetadata::for_movie(&movie, &site.image_base);
    let structured_data = structured_data(&movie, &site.image_base);

    let similar = match repo.get_similar_movies(&movie).await {
        Ok(similar) => similar,
        Err(e) => {
            warn!("Similar movies lookup failed for movie {}: {}", movie.id, e);
            Vec::new()
        }
    };

    Ok(Some(MoviePage {
        movie,
        metadata,
        structured_data,
        similar,
    }))
}

pub async fn load_category_page(
    repo: &dyn CatalogRepo,
    site: &SiteConfig,
    name: &str,
    page: u32,
) -> DbResult<CategoryPage> {
    let per_page = site.per_page.max(1);
    let total = repo.count_movies_by_genre(name).await?;
    let offset = (page.saturating_sub(1) as u64) * per_page as u64;

    let movies = if offset < total {
        repo.list_movies_by_genre(name, offset, per_page as u64).await?
    } else {
        Vec::new()
    };

    Ok(CategoryPage {
        name: name.to_string(),
        movies,
        total,
        pagination: PaginationState {
            current_page: page,
            total_pages: total_pages(total, per_page),
            base_url: format!("/category/{}", urlencoding::encode(name)),
        },
        metadata: PageMetadata::for_category(name),
    })
}
