use std::fmt::Write;

use crate::db::Category;
use super::escape;

pub fn category_href(name: &str) -> String {
    format!("/category/{}", urlencoding::encode(name))
}

/// Grid of links to each category's listing, in input order.
pub fn category_list(categories: Option<&[Category]>) -> String {
    let categories = match categories {
        Some(c) if !c.is_empty() => c,
        _ => return String::new(),
    };

    let mut out = String::from(r#"<div class="category-grid">"#);
    for category in categories {
        let _ = write!(
            out,
            r#"<a class="category" href="{}"><h3>{}</h3></a>"#,
            escape(&category_href(&category.name)),
            escape(&category.name)
        );
    }
    out.push_str("</div>");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(id: i64, name: &str) -> Category {
        Category { id, name: name.to_string() }
    }

    #[test]
    fn test_category_list_order() {
        let categories = vec![category(2, "Drama"), category(1, "Action"), category(3, "Drama")];
        let html = category_list(Some(categories.as_slice()));
        assert_eq!(html.matches("<a ").count(), 3);
        let drama = html.find("/category/Drama").unwrap();
        let action = html.find("/category/Action").unwrap();
        assert!(drama < action);
    }

    #[test]
    fn test_category_list_encodes_names() {
        let html = category_list(Some(&[category(1, "Science Fiction & Fantasy")][..]));
        assert!(html.contains(r#"href="/category/Science%20Fiction%20%26%20Fantasy""#));
        assert!(html.contains("<h3>Science Fiction &amp; Fantasy</h3>"));
    }

    #[test]
    fn test_category_list_empty() {
        assert_eq!(category_list(None), "");
        assert_eq!(category_list(Some(&[][..])), "");
    }
}
