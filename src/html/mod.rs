//! Markup producers. Everything here is a pure function of its input.

pub mod category_list;
pub mod movie;
pub mod movie_grid;
pub mod pagination;

use std::fmt::Write;

use serde_json::Value;

use crate::catalog::PageMetadata;

pub use category_list::category_list;
pub use movie::{movie_body, not_found_body};
pub use movie_grid::movie_grid;
pub use pagination::{pagination, PaginationState};

pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Serialize a JSON-LD document for a `<script>` element. A literal `</`
/// inside a string would close the element early.
pub fn json_ld(doc: &Value) -> String {
    doc.to_string().replace("</", "<\\/")
}

/// Full HTML document around `body`.
pub fn document(meta: &PageMetadata, site_name: &str, structured: Option<&Value>, body: &str) -> String {
    let mut head = String::new();
    let _ = write!(head, "<title>{}</title>", escape(&meta.title));
    let _ = write!(head, r#"<meta property="og:title" content="{}">"#, escape(&meta.title));
    let _ = write!(head, r#"<meta property="og:site_name" content="{}">"#, escape(site_name));
    if let Some(ref description) = meta.description {
        let _ = write!(head, r#"<meta name="description" content="{}">"#, escape(description));
        let _ = write!(head, r#"<meta property="og:description" content="{}">"#, escape(description));
    }
    if let Some(og_type) = meta.og_type {
        let _ = write!(head, r#"<meta property="og:type" content="{}">"#, og_type);
    }
    if let Some(ref image) = meta.image {
        let _ = write!(head, r#"<meta property="og:image" content="{}">"#, escape(image));
    }
    if let Some(ref canonical) = meta.canonical {
        let _ = write!(head, r#"<link rel="canonical" href="{}">"#, escape(canonical));
    }
    if let Some(doc) = structured {
        let _ = write!(head, r#"<script type="application/ld+json">{}</script>"#, json_ld(doc));
    }

    format!(
        concat!(
            "<!DOCTYPE html>\n",
            r#"<html lang="fr"><head><meta charset="utf-8">"#,
            r#"<meta name="viewport" content="width=device-width, initial-scale=1">"#,
            "{}</head><body>{}</body></html>\n"
        ),
        head, body
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_escape() {
        assert_eq!(escape(r#"Tom & "Jerry" <3 'x'"#), "Tom &amp; &quot;Jerry&quot; &lt;3 &#39;x&#39;");
        assert_eq!(escape("Amélie"), "Amélie");
    }

    #[test]
    fn test_json_ld_cannot_close_script() {
        let doc = json!({ "description": "bad </script><script>alert(1)" });
        let out = json_ld(&doc);
        assert!(!out.contains("</script>"));
        assert!(out.contains(r"<\/script>"));
    }

    #[test]
    fn test_document_without_description() {
        let html = document(&PageMetadata::not_found(), "Cinepage", None, "<div>x</div>");
        assert!(html.contains("<title>Film non trouvé</title>"));
        assert!(!html.contains(r#"name="description""#));
        assert!(!html.contains("application/ld+json"));
    }

    #[test]
    fn test_document_with_description() {
        let meta = PageMetadata {
            title: "T".to_string(),
            description: Some("A \"quoted\" text".to_string()),
            ..Default::default()
        };
        let html = document(&meta, "Cinepage", Some(&json!({ "@type": "Movie" })), "");
        assert!(html.contains(r#"<meta name="description" content="A &quot;quoted&quot; text">"#));
        assert!(html.contains(r#"<script type="application/ld+json">{"@type":"Movie"}</script>"#));
    }
}
