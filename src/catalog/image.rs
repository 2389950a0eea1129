use std::fmt::{Display, Formatter};

/// Sizes the image host serves. Stored poster paths are partial paths
/// (`/abc.jpg`) relative to one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSize {
    W500,
    Original,
}

impl ImageSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageSize::W500 => "w500",
            ImageSize::Original => "original",
        }
    }
}

impl Display for ImageSize {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn image_url(base: &str, size: ImageSize, path: &str) -> String {
    format!("{}/{}{}", base.trim_end_matches('/'), size, path)
}
