//! Image URI resolution for posters and backdrops.

/// Default TMDB image CDN base.
pub const DEFAULT_IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p";

/// Default rendition size.
pub const DEFAULT_IMAGE_SIZE: &str = "w500";

/// Turns catalog image paths (`/abc.jpg`) into absolute URIs.
///
/// Resolution is pure and total: every input maps to a string, and an
/// empty path maps to an empty string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageResolver {
    base_url: String,
    size: String,
}

impl ImageResolver {
    pub fn new(base_url: impl Into<String>, size: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            size: size.into().trim_matches('/').to_string(),
        }
    }

    pub fn resolve_image_uri(&self, path: &str) -> String {
        if path.is_empty() {
            return String::new();
        }
        if path.starts_with('/') {
            format!("{}/{}{}", self.base_url, self.size, path)
        } else {
            format!("{}/{}/{}", self.base_url, self.size, path)
        }
    }
}

impl Default for ImageResolver {
    fn default() -> Self {
        Self::new(DEFAULT_IMAGE_BASE_URL, DEFAULT_IMAGE_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolves_leading_slash_path() {
        let resolver = ImageResolver::default();
        assert_eq!(
            resolver.resolve_image_uri("/abc.jpg"),
            "https://image.tmdb.org/t/p/w500/abc.jpg"
        );
    }

    #[test]
    fn test_resolves_bare_path() {
        let resolver = ImageResolver::new("https://cdn.example/", "/original/");
        assert_eq!(
            resolver.resolve_image_uri("x.png"),
            "https://cdn.example/original/x.png"
        );
    }

    #[test]
    fn test_empty_path_resolves_to_empty() {
        assert_eq!(ImageResolver::default().resolve_image_uri(""), "");
    }
}
