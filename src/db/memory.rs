use std::sync::Mutex;

use async_trait::async_trait;

use super::model::*;
use super::repo::*;

/// In-memory catalog with the same query semantics as the SQLite backend.
///
/// Records every genre key used for a similarity lookup, and can be told
/// to fail all queries to exercise outage handling.
#[derive(Default)]
pub struct MemoryRepository {
    movies: Vec<Movie>,
    categories: Vec<Category>,
    similar_lookups: Mutex<Vec<String>>,
    failing: bool,
}

impl MemoryRepository {
    pub fn new(movies: Vec<Movie>, categories: Vec<Category>) -> Self {
        Self {
            movies,
            categories,
            ..Default::default()
        }
    }

    /// A repository whose every query fails like an unreachable database.
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Default::default()
        }
    }

    pub fn similar_lookups(&self) -> Vec<String> {
        self.similar_lookups
            .lock()
            .map(|l| l.clone())
            .unwrap_or_default()
    }

    fn check(&self) -> DbResult<()> {
        if self.failing {
            return Err(DbError::Sqlx(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }

    fn by_genre(&self, genre: &str) -> Vec<&Movie> {
        let mut movies: Vec<&Movie> = self.movies.iter().filter(|m| m.has_genre(genre)).collect();
        movies.sort_by(|a, b| {
            b.vote_average
                .total_cmp(&a.vote_average)
                .then(a.id.cmp(&b.id))
        });
        movies
    }
}

#[async_trait]
impl MovieRepo for MemoryRepository {
    async fn get_movie(&self, id: i64) -> DbResult<Option<Movie>> {
        self.check()?;
        Ok(self.movies.iter().find(|m| m.id == id).cloned())
    }

    async fn get_similar_movies(&self, movie: &Movie) -> DbResult<Vec<Movie>> {
        self.check()?;
        let Some(genre) = movie.primary_genre() else {
            return Ok(Vec::new());
        };
        if let Ok(mut lookups) = self.similar_lookups.lock() {
            lookups.push(genre.to_string());
        }

        Ok(self
            .by_genre(genre)
            .into_iter()
            .filter(|m| m.id != movie.id)
            .take(SIMILAR_MOVIES_LIMIT)
            .cloned()
            .collect())
    }

    async fn list_movies_by_genre(&self, genre: &str, offset: u64, limit: u64) -> DbResult<Vec<Movie>> {
        self.check()?;
        Ok(self
            .by_genre(genre)
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn count_movies_by_genre(&self, genre: &str) -> DbResult<u64> {
        self.check()?;
        Ok(self.by_genre(genre).len() as u64)
    }
}

#[async_trait]
impl CategoryRepo for MemoryRepository {
    async fn list_categories(&self) -> DbResult<Vec<Category>> {
        self.check()?;
        Ok(self.categories.clone())
    }
}
