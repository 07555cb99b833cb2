use serde::{Deserialize, Serialize};

/// Separator of the `data-tags` attribute
pub const TAG_SEPARATOR: &str = ",";

/// Facet values carried by one card
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CardFacets {
    pub topic: String,
    /// Order is irrelevant for matching, duplicates are allowed
    pub tags: Vec<String>,
}

impl CardFacets {
    pub fn new(topic: impl Into<String>, tags: Vec<String>) -> Self {
        Self {
            topic: topic.into(),
            tags,
        }
    }

    /// Build from raw card attributes. A missing topic reads as an empty
    /// string, a missing tag list as no tags.
    pub fn from_attributes(topic: Option<&str>, tags: Option<&str>) -> Self {
        Self {
            topic: topic.unwrap_or_default().to_string(),
            tags: split_tag_list(tags),
        }
    }

    pub fn tag_list(&self) -> String {
        join_tag_list(&self.tags)
    }
}

/// Split a comma-separated tag list.
///
/// Segments are trimmed and empty segments dropped, so an absent or blank
/// attribute yields an empty list rather than a single `""` tag.
pub fn split_tag_list(raw: Option<&str>) -> Vec<String> {
    raw.map(|list| {
        list.split(TAG_SEPARATOR)
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .map(str::to_string)
            .collect()
    })
    .unwrap_or_default()
}

pub fn join_tag_list<S: AsRef<str>>(tags: &[S]) -> String {
    tags.iter()
        .map(|tag| tag.as_ref())
        .collect::<Vec<_>>()
        .join(TAG_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_tag_list() {
        assert_eq!(split_tag_list(Some("a,b,c")), vec!["a", "b", "c"]);
        assert_eq!(split_tag_list(Some("a, b ,c")), vec!["a", "b", "c"]);
        assert_eq!(split_tag_list(Some("x,x")), vec!["x", "x"]);
    }

    #[test]
    fn test_absent_or_blank_tags_are_empty() {
        assert!(split_tag_list(None).is_empty());
        assert!(split_tag_list(Some("")).is_empty());
        assert!(split_tag_list(Some(" , ,")).is_empty());
    }

    #[test]
    fn test_from_attributes() {
        let card = CardFacets::from_attributes(Some("infra"), Some("k8s,helm"));
        assert_eq!(card.topic, "infra");
        assert_eq!(card.tags, vec!["k8s", "helm"]);

        let bare = CardFacets::from_attributes(None, None);
        assert_eq!(bare, CardFacets::default());
        assert!(bare.tags.is_empty());
    }

    #[test]
    fn test_join_tag_list() {
        assert_eq!(join_tag_list(&["a", "b"]), "a,b");
        assert_eq!(join_tag_list::<&str>(&[]), "");
        let card = CardFacets::new("t", vec!["x".into(), "y".into()]);
        assert_eq!(card.tag_list(), "x,y");
    }
}
