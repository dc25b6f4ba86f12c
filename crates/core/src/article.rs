use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Separator between title and URL in the open-all choice labels.
pub const CHOICE_SEPARATOR: &str = " -> ";

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub title: String,
    pub url: String,
    pub description: String,
    pub tags: Vec<String>,
}

impl Article {
    /// Label shown for this article in the interactive multi-select prompt.
    #[must_use]
    pub fn choice_label(&self) -> String {
        format!("{}{CHOICE_SEPARATOR}{}", self.title, self.url)
    }

    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

impl Display for Article {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        if self.title.is_empty() {
            formatter.write_str(&self.url)
        } else {
            formatter.write_str(&self.title)
        }
    }
}

/// Splits a comma-separated tag string.
///
/// Substrings are kept raw (no trimming, no filtering), so `Some("")`
/// yields a single empty tag. `None` yields no tags.
#[must_use]
pub fn parse_tags(tags: Option<&str>) -> Vec<String> {
    match tags {
        Some(tags) => tags.split(',').map(ToString::to_string).collect(),
        None => vec![],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_article(title: &str) -> Article {
        Article {
            title: title.to_string(),
            url: "https://example.com".to_string(),
            description: "An example".to_string(),
            tags: vec!["rust".to_string(), "web".to_string()],
        }
    }

    #[test]
    fn test_parse_tags_comma_separated() {
        assert_eq!(parse_tags(Some("a,b,c")), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_parse_tags_absent() {
        assert!(parse_tags(None).is_empty());
    }

    #[test]
    fn test_parse_tags_empty_string_is_one_empty_tag() {
        assert_eq!(parse_tags(Some("")), vec![""]);
    }

    #[test]
    fn test_parse_tags_keeps_whitespace() {
        assert_eq!(parse_tags(Some("a, b")), vec!["a", " b"]);
    }

    #[test]
    fn test_choice_label() {
        let article = create_test_article("Example");
        assert_eq!(article.choice_label(), "Example -> https://example.com");
    }

    #[test]
    fn test_has_tag() {
        let article = create_test_article("Example");
        assert!(article.has_tag("rust"));
        assert!(!article.has_tag("ru"));
    }

    #[test]
    fn test_display_falls_back_to_url() {
        assert_eq!(format!("{}", create_test_article("Example")), "Example");
        assert_eq!(format!("{}", create_test_article("")), "https://example.com");
    }

    #[test]
    fn test_serialized_field_names() {
        let json = serde_json::to_value(create_test_article("Example")).unwrap();
        assert_eq!(json["title"], "Example");
        assert_eq!(json["url"], "https://example.com");
        assert_eq!(json["description"], "An example");
        assert_eq!(json["tags"], serde_json::json!(["rust", "web"]));
    }
}
