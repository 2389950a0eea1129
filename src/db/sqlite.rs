use std::str::FromStr;

use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use tracing::{debug, info};

use super::model::*;
use super::repo::*;

const MOVIE_COLUMNS: &str = r#"id, title, title_seo, meta_description_seo, overview, poster_path,
    release_date, runtime, genres, "cast", vote_average, trailer_url"#;

// Rows whose JSON genre list contains the bound value. Rows with invalid
// JSON never match; json_each would otherwise fail the whole query.
const GENRE_MATCH: &str = "CASE WHEN json_valid(movies.genres) THEN \
    EXISTS (SELECT 1 FROM json_each(movies.genres) WHERE json_each.value = ?) \
    ELSE 0 END";

pub struct SqliteRepository {
    pool: SqlitePool,
}

impl SqliteRepository {
    pub async fn new(db_path: &str, max_connections: u32) -> DbResult<Self> {
        let options = SqliteConnectOptions::from_str(db_path)?.create_if_missing(true);

        // Every connection to an in-memory database sees its own copy,
        // so those get exactly one connection that is never recycled.
        let pool = if db_path.contains(":memory:") {
            SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
                .connect_with(options)
                .await?
        } else {
            SqlitePoolOptions::new()
                .max_connections(max_connections.max(1))
                .connect_with(options)
                .await?
        };

        let repo = Self { pool };

        repo.init_schema().await?;

        info!("Database initialized at {}", db_path);

        Ok(repo)
    }

    async fn init_schema(&self) -> DbResult<()> {
        let schema = include_str!("schema.sql");
        sqlx::query(schema).execute(&self.pool).await?;
        Ok(())
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}

fn into_movies(rows: Vec<MovieRow>) -> DbResult<Vec<Movie>> {
    rows.into_iter().map(Movie::try_from).collect()
}

#[async_trait]
impl MovieRepo for SqliteRepository {
    async fn get_movie(&self, id: i64) -> DbResult<Option<Movie>> {
        let sql = format!("SELECT {} FROM movies WHERE id = ?", MOVIE_COLUMNS);
        let row = sqlx::query_as::<_, MovieRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.map(Movie::try_from).transpose()
    }

    async fn get_similar_movies(&self, movie: &Movie) -> DbResult<Vec<Movie>> {
        let Some(genre) = movie.primary_genre() else {
            debug!("Movie {} has no genres, skipping similarity lookup", movie.id);
            return Ok(Vec::new());
        };

        let sql = format!(
            "SELECT {} FROM movies WHERE {} AND id <> ? ORDER BY vote_average DESC LIMIT ?",
            MOVIE_COLUMNS, GENRE_MATCH
        );
        let rows = sqlx::query_as::<_, MovieRow>(&sql)
            .bind(genre)
            .bind(movie.id)
            .bind(SIMILAR_MOVIES_LIMIT as i64)
            .fetch_all(&self.pool)
            .await?;

        into_movies(rows)
    }

    async fn list_movies_by_genre(&self, genre: &str, offset: u64, limit: u64) -> DbResult<Vec<Movie>> {
        let sql = format!(
            "SELECT {} FROM movies WHERE {} ORDER BY vote_average DESC, id LIMIT ? OFFSET ?",
            MOVIE_COLUMNS, GENRE_MATCH
        );
        let rows = sqlx::query_as::<_, MovieRow>(&sql)
            .bind(genre)
            .bind(limit as i64)
            .bind(offset as i64)
            .fetch_all(&self.pool)
            .await?;

        into_movies(rows)
    }

    async fn count_movies_by_genre(&self, genre: &str) -> DbResult<u64> {
        let sql = format!("SELECT COUNT(*) FROM movies WHERE {}", GENRE_MATCH);
        let count: i64 = sqlx::query_scalar(&sql)
            .bind(genre)
            .fetch_one(&self.pool)
            .await?;
        Ok(count.max(0) as u64)
    }
}

#[async_trait]
impl CategoryRepo for SqliteRepository {
    async fn list_categories(&self) -> DbResult<Vec<Category>> {
        let categories = sqlx::query_as::<_, Category>("SELECT id, name FROM categories ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(categories)
    }
}
