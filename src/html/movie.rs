use std::fmt::Write;

use chrono::NaiveDate;

use crate::catalog::{image_url, ImageSize, MoviePage, NOT_FOUND_TITLE};
use super::category_list::category_href;
use super::{escape, movie_grid};

const TITLE_SUFFIX: &str = "Streaming gratuit";
const PLAYER_PLACEHOLDER: &str = "Lecteur vidéo à venir";

/// `YYYY-MM-DD` shown as `DD/MM/YYYY`; anything else is shown as stored.
pub fn format_release_date(date: &str) -> String {
    match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(d) => d.format("%d/%m/%Y").to_string(),
        Err(_) => date.to_string(),
    }
}

pub fn not_found_body() -> String {
    format!("<div>{}</div>", NOT_FOUND_TITLE)
}

pub fn movie_body(page: &MoviePage, image_base: &str) -> String {
    let movie = &page.movie;
    let title = escape(&movie.title);
    let mut out = String::new();

    // Hero backdrop with gradient overlay.
    let _ = write!(
        out,
        r#"<div class="hero"><img class="backdrop" src="{}" alt=""><div class="gradient"></div></div>"#,
        escape(&image_url(image_base, ImageSize::Original, &movie.poster_path))
    );

    out.push_str(r#"<div class="container"><div class="movie">"#);
    let _ = write!(
        out,
        r#"<div class="poster"><img src="{}" alt="{}" width="300" height="450"></div>"#,
        escape(&image_url(image_base, ImageSize::W500, &movie.poster_path)),
        title
    );

    out.push_str(r#"<div class="details">"#);
    let _ = write!(out, "<h1>{} {}</h1>", title, TITLE_SUFFIX);

    let _ = write!(
        out,
        concat!(
            r#"<div class="facts"><span class="rating">{:.1}/10</span>"#,
            r#"<span class="runtime">{} minutes</span>"#,
            r#"<span class="release-date">{}</span></div>"#
        ),
        movie.vote_average,
        movie.runtime,
        escape(&format_release_date(&movie.release_date))
    );

    out.push_str(r#"<div class="genres">"#);
    for genre in &movie.genres {
        let _ = write!(
            out,
            r#"<a class="genre" href="{}">{}</a>"#,
            escape(&category_href(genre)),
            escape(genre)
        );
    }
    out.push_str("</div>");

    let _ = write!(
        out,
        r#"<h2>Synopsis {} streaming gratuit</h2><p class="overview">{}</p>"#,
        title,
        escape(&movie.overview)
    );

    out.push_str(r#"<div class="cast"><h2>Acteurs principaux</h2><div class="chips">"#);
    for actor in &movie.cast {
        let _ = write!(out, r#"<span class="actor">{}</span>"#, escape(&actor.name));
    }
    out.push_str("</div></div>");

    if let Some(ref trailer) = movie.trailer_url {
        let _ = write!(
            out,
            concat!(
                r#"<div class="trailer"><h2>Bande annonce {} streaming gratuit</h2>"#,
                r#"<div class="video"><iframe src="{}" allowfullscreen></iframe></div></div>"#
            ),
            title,
            escape(trailer)
        );
    }

    // TODO: replace with a real player once video delivery exists.
    let _ = write!(
        out,
        concat!(
            r#"<div class="player"><h2>Regarder {} {}</h2>"#,
            r#"<div class="video"><span>{}</span></div></div>"#
        ),
        title,
        TITLE_SUFFIX,
        PLAYER_PLACEHOLDER
    );

    out.push_str("</div></div>");

    if !page.similar.is_empty() {
        out.push_str(r#"<section class="similar"><h2>Films similaires</h2>"#);
        out.push_str(&movie_grid(&page.similar, image_base));
        out.push_str("</section>");
    }

    out.push_str("</div>");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{structured_data, PageMetadata};
    use crate::db::{CastMember, Movie};

    const BASE: &str = "https://image.tmdb.org/t/p";

    fn page(trailer_url: Option<&str>, similar: Vec<Movie>) -> MoviePage {
        let movie = Movie {
            id: 1,
            title: "Léon".to_string(),
            title_seo: "Léon streaming".to_string(),
            meta_description_seo: "Léon".to_string(),
            overview: "Mathilda <12>".to_string(),
            poster_path: "/leon.jpg".to_string(),
            release_date: "1994-09-14".to_string(),
            runtime: 110,
            genres: vec!["Action".to_string(), "Drama".to_string()],
            cast: vec![
                CastMember { name: "Jean Reno".to_string() },
                CastMember { name: "Natalie Portman".to_string() },
            ],
            vote_average: 8.29,
            trailer_url: trailer_url.map(|t| t.to_string()),
        };
        MoviePage {
            metadata: PageMetadata::for_movie(&movie, BASE),
            structured_data: structured_data(&movie, BASE),
            movie,
            similar,
        }
    }

    #[test]
    fn test_format_release_date() {
        assert_eq!(format_release_date("1994-09-14"), "14/09/1994");
        assert_eq!(format_release_date("1994"), "1994");
        assert_eq!(format_release_date(""), "");
    }

    #[test]
    fn test_movie_body() {
        let html = movie_body(&page(None, vec![]), BASE);
        assert!(html.contains("<h1>Léon Streaming gratuit</h1>"));
        assert!(html.contains("8.3/10"));
        assert!(html.contains("110 minutes"));
        assert!(html.contains("14/09/1994"));
        assert!(html.contains(r#"src="https://image.tmdb.org/t/p/original/leon.jpg""#));
        assert!(html.contains(r#"src="https://image.tmdb.org/t/p/w500/leon.jpg""#));
        assert!(html.contains("Mathilda &lt;12&gt;"));
        assert!(html.contains("Lecteur vidéo à venir"));
        assert!(!html.contains("<iframe"));
        assert!(!html.contains("Films similaires"));

        let action = html.find(r#"href="/category/Action""#).unwrap();
        let drama = html.find(r#"href="/category/Drama""#).unwrap();
        assert!(action < drama);

        let reno = html.find("Jean Reno").unwrap();
        let portman = html.find("Natalie Portman").unwrap();
        assert!(reno < portman);
    }

    #[test]
    fn test_movie_body_with_trailer_and_similar() {
        let other = page(None, vec![]).movie;
        let other = Movie { id: 2, ..other };
        let html = movie_body(&page(Some("https://www.youtube.com/embed/x"), vec![other]), BASE);
        assert!(html.contains(r#"<iframe src="https://www.youtube.com/embed/x" allowfullscreen>"#));
        assert!(html.contains("Bande annonce Léon streaming gratuit"));
        assert!(html.contains("Films similaires"));
        assert!(html.contains(r#"href="/movie/2""#));
    }

    #[test]
    fn test_not_found_body() {
        assert_eq!(not_found_body(), "<div>Film non trouvé</div>");
    }
}
