use std::fmt::Write;

use super::escape;

#[derive(Debug, Clone, PartialEq)]
pub struct PaginationState {
    pub current_page: u32,
    pub total_pages: u32,
    pub base_url: String,
}

/// One link per page, `{base_url}?page={n}`. The current page is styled
/// differently but stays a link; a current page out of range marks nothing.
pub fn pagination(state: &PaginationState) -> String {
    let base = escape(&state.base_url);
    let mut out = String::from(r#"<nav class="pagination">"#);
    for page in 1..=state.total_pages {
        let class = if page == state.current_page { "current" } else { "page" };
        let _ = write!(out, r#"<a class="{}" href="{}?page={}">{}</a>"#, class, base, page, page);
    }
    out.push_str("</nav>");
    out
}
