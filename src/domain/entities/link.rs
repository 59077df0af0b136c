//! Link entity representing a stored identifier to URL mapping.

/// A caller-supplied identifier paired with its target URL.
///
/// Links are written once and never modified. The `url` is opaque text:
/// no well-formedness check is applied anywhere below the HTTP boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub id: String,
    pub url: String,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(id: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            url: url.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_creation() {
        let link = Link::new("abc", "https://example.com");

        assert_eq!(link.id, "abc");
        assert_eq!(link.url, "https://example.com");
    }

    #[test]
    fn test_link_keeps_values_verbatim() {
        let link = Link::new(" AbC ", "not a url at all");

        assert_eq!(link.id, " AbC ");
        assert_eq!(link.url, "not a url at all");
    }

    #[test]
    fn test_link_equality() {
        assert_eq!(
            Link::new("abc", "https://example.com"),
            Link::new("abc".to_string(), "https://example.com".to_string())
        );
        assert_ne!(
            Link::new("abc", "https://example.com"),
            Link::new("ABC", "https://example.com")
        );
    }
}
