use std::fmt::Write;

use crate::catalog::{image_url, ImageSize};
use crate::db::Movie;
use super::escape;

/// Poster grid linking to each movie's page. Empty input renders nothing.
pub fn movie_grid(movies: &[Movie], image_base: &str) -> String {
    if movies.is_empty() {
        return String::new();
    }

    let mut out = String::from(r#"<div class="movie-grid">"#);
    for movie in movies {
        let _ = write!(
            out,
            concat!(
                r#"<a class="movie-card" href="/movie/{}">"#,
                r#"<img src="{}" alt="{}" width="300" height="450" loading="lazy">"#,
                r#"<h3>{}</h3><span class="rating">{:.1}/10</span></a>"#
            ),
            movie.id,
            escape(&image_url(image_base, ImageSize::W500, &movie.poster_path)),
            escape(&movie.title),
            escape(&movie.title),
            movie.vote_average
        );
    }
    out.push_str("</div>");
    out
}
