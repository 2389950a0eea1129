use async_trait::async_trait;

use super::model::*;

/// Maximum number of movies returned by a similarity lookup.
pub const SIMILAR_MOVIES_LIMIT: usize = 4;

#[async_trait]
pub trait MovieRepo: Send + Sync {
    /// `Ok(None)` when no movie has this id.
    async fn get_movie(&self, id: i64) -> DbResult<Option<Movie>>;
    /// Movies sharing `movie`'s first genre, best rated first, never `movie` itself.
    async fn get_similar_movies(&self, movie: &Movie) -> DbResult<Vec<Movie>>;
    async fn list_movies_by_genre(&self, genre: &str, offset: u64, limit: u64) -> DbResult<Vec<Movie>>;
    async fn count_movies_by_genre(&self, genre: &str) -> DbResult<u64>;
}

#[async_trait]
pub trait CategoryRepo: Send + Sync {
    async fn list_categories(&self) -> DbResult<Vec<Category>>;
}

pub trait CatalogRepo: MovieRepo + CategoryRepo + Send + Sync {}

impl<T: MovieRepo + CategoryRepo + Send + Sync> CatalogRepo for T {}
