use serde_json::{json, Value};

use crate::db::Movie;
use super::image::{image_url, ImageSize};

pub const NOT_FOUND_TITLE: &str = "Film non trouvé";

// Provisional: the catalog stores no vote count or rating bounds yet, so the
// aggregate rating block carries fixed values.
pub const BEST_RATING: &str = "10";
pub const WORST_RATING: &str = "1";
pub const RATING_COUNT: &str = "1000";

/// What goes into `<head>`: title, description and OpenGraph tags.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageMetadata {
    pub title: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub og_type: Option<&'static str>,
    pub canonical: Option<String>,
}

impl PageMetadata {
    pub fn not_found() -> Self {
        Self {
            title: NOT_FOUND_TITLE.to_string(),
            ..Default::default()
        }
    }

    pub fn for_movie(movie: &Movie, image_base: &str) -> Self {
        Self {
            title: movie.title_seo.clone(),
            description: Some(movie.meta_description_seo.clone()),
            image: Some(image_url(image_base, ImageSize::W500, &movie.poster_path)),
            og_type: Some("video.movie"),
            canonical: Some(format!("/movie/{}", movie.id)),
        }
    }

    pub fn for_category(name: &str) -> Self {
        Self {
            title: format!("Films {} streaming gratuit", name),
            description: Some(format!("Tous les films {} en streaming gratuit.", name)),
            og_type: Some("website"),
            canonical: Some(format!("/category/{}", urlencoding::encode(name))),
            ..Default::default()
        }
    }
}

/// The schema.org `Movie` document embedded as JSON-LD.
pub fn structured_data(movie: &Movie, image_base: &str) -> Value {
    let actors: Vec<Value> = movie
        .cast
        .iter()
        .map(|actor| json!({ "@type": "Person", "name": actor.name }))
        .collect();

    json!({
        "@context": "https://schema.org",
        "@type": "Movie",
        "name": movie.title,
        "description": movie.overview,
        "image": image_url(image_base, ImageSize::Original, &movie.poster_path),
        "datePublished": movie.release_date,
        "duration": format!("PT{}M", movie.runtime),
        "genre": movie.genres,
        "actor": actors,
        "aggregateRating": {
            "@type": "AggregateRating",
            "ratingValue": movie.vote_average,
            "bestRating": BEST_RATING,
            "worstRating": WORST_RATING,
            "ratingCount": RATING_COUNT,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::CastMember;

    fn movie() -> Movie {
        Movie {
            id: 550,
            title: "Fight Club".to_string(),
            title_seo: "Fight Club streaming gratuit".to_string(),
            meta_description_seo: "Regarder Fight Club".to_string(),
            overview: "An insomniac office worker...".to_string(),
            poster_path: "/fc.jpg".to_string(),
            release_date: "1999-10-15".to_string(),
            runtime: 120,
            genres: vec!["Action".to_string(), "Drama".to_string()],
            cast: vec![
                CastMember { name: "Edward Norton".to_string() },
                CastMember { name: "Brad Pitt".to_string() },
            ],
            vote_average: 8.4,
            trailer_url: None,
        }
    }

    #[test]
    fn test_structured_data() {
        let doc = structured_data(&movie(), "https://image.tmdb.org/t/p");
        assert_eq!(doc["@type"], "Movie");
        assert_eq!(doc["duration"], "PT120M");
        assert_eq!(doc["image"], "https://image.tmdb.org/t/p/original/fc.jpg");
        assert_eq!(doc["genre"], json!(["Action", "Drama"]));
        assert_eq!(doc["actor"][1], json!({ "@type": "Person", "name": "Brad Pitt" }));
        assert_eq!(doc["aggregateRating"]["ratingValue"], 8.4);
        assert_eq!(doc["aggregateRating"]["ratingCount"], "1000");
        assert_eq!(doc["aggregateRating"]["bestRating"], "10");
        assert_eq!(doc["aggregateRating"]["worstRating"], "1");
    }

    #[test]
    fn test_movie_metadata() {
        let meta = PageMetadata::for_movie(&movie(), "https://image.tmdb.org/t/p");
        assert_eq!(meta.title, "Fight Club streaming gratuit");
        assert_eq!(meta.description.as_deref(), Some("Regarder Fight Club"));
        assert_eq!(meta.image.as_deref(), Some("https://image.tmdb.org/t/p/w500/fc.jpg"));
        assert_eq!(meta.canonical.as_deref(), Some("/movie/550"));
    }

    #[test]
    fn test_not_found_metadata() {
        let meta = PageMetadata::not_found();
        assert_eq!(meta.title, "Film non trouvé");
        assert!(meta.description.is_none());
        assert!(meta.image.is_none());
    }
}
