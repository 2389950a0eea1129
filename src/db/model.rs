use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CastMember {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: i64,
    pub title: String,
    pub title_seo: String,
    pub meta_description_seo: String,
    pub overview: String,
    pub poster_path: String,
    pub release_date: String,
    pub runtime: i32,
    pub genres: Vec<String>,
    pub cast: Vec<CastMember>,
    pub vote_average: f64,
    pub trailer_url: Option<String>,
}

impl Movie {
    /// The genre used as the key for similarity lookups.
    pub fn primary_genre(&self) -> Option<&str> {
        self.genres.first().map(|g| g.as_str())
    }

    pub fn has_genre(&self, genre: &str) -> bool {
        self.genres.iter().any(|g| g == genre)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Category {
    pub id: i64,
    pub name: String,
}

/// Raw `movies` row. Genres and cast are stored as JSON text.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct MovieRow {
    pub id: i64,
    pub title: String,
    pub title_seo: String,
    pub meta_description_seo: String,
    pub overview: String,
    pub poster_path: String,
    pub release_date: String,
    pub runtime: i32,
    pub genres: String,
    pub cast: String,
    pub vote_average: f64,
    pub trailer_url: Option<String>,
}

impl TryFrom<MovieRow> for Movie {
    type Error = DbError;

    fn try_from(row: MovieRow) -> Result<Self, Self::Error> {
        let genres: Vec<String> = serde_json::from_str(&row.genres)
            .map_err(|e| DbError::Decode(format!("movie {}: genres: {}", row.id, e)))?;
        let cast: Vec<CastMember> = serde_json::from_str(&row.cast)
            .map_err(|e| DbError::Decode(format!("movie {}: cast: {}", row.id, e)))?;

        Ok(Movie {
            id: row.id,
            title: row.title,
            title_seo: row.title_seo,
            meta_description_seo: row.meta_description_seo,
            overview: row.overview,
            poster_path: row.poster_path,
            release_date: row.release_date,
            runtime: row.runtime,
            genres,
            cast,
            vote_average: row.vote_average,
            trailer_url: row.trailer_url.filter(|t| !t.is_empty()),
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("Database error: {0}")]
    Sqlx(#[from] sqlx::Error),
    #[error("Invalid row data: {0}")]
    Decode(String),
}

pub type DbResult<T> = Result<T, DbError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn row(genres: &str, cast: &str) -> MovieRow {
        MovieRow {
            id: 7,
            title: "Heat".to_string(),
            title_seo: "Heat streaming".to_string(),
            meta_description_seo: "Heat en streaming".to_string(),
            overview: "A heist.".to_string(),
            poster_path: "/heat.jpg".to_string(),
            release_date: "1995-12-15".to_string(),
            runtime: 170,
            genres: genres.to_string(),
            cast: cast.to_string(),
            vote_average: 7.9,
            trailer_url: Some(String::new()),
        }
    }

    #[test]
    fn test_movie_from_row() {
        let movie = Movie::try_from(row(
            r#"["Crime","Drama"]"#,
            r#"[{"name":"Al Pacino"},{"name":"Robert De Niro"}]"#,
        ))
        .unwrap();
        assert_eq!(movie.genres, vec!["Crime", "Drama"]);
        assert_eq!(movie.primary_genre(), Some("Crime"));
        assert_eq!(movie.cast[1].name, "Robert De Niro");
        assert_eq!(movie.trailer_url, None);
    }

    #[test]
    fn test_movie_from_bad_row() {
        let err = Movie::try_from(row("Crime", "[]")).unwrap_err();
        assert!(matches!(err, DbError::Decode(_)));
    }
}
