use serde::{Deserialize, Serialize};

/// Independent filtering dimension of a post card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Facet {
    Topic,
    Tag,
}

impl Facet {
    pub fn code(&self) -> &'static str {
        match self {
            Facet::Topic => "topic",
            Facet::Tag => "tag",
        }
    }

    /// Attribute carrying the facet value on a selector button
    pub fn selector_attribute(&self) -> &'static str {
        match self {
            Facet::Topic => "data-topic",
            Facet::Tag => "data-tag",
        }
    }

    /// Attribute carrying the facet value(s) on a card.
    /// Tags are a comma-separated list, the topic is a single value.
    pub fn card_attribute(&self) -> &'static str {
        match self {
            Facet::Topic => "data-topic",
            Facet::Tag => "data-tags",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Facet::Topic => "Topics",
            Facet::Tag => "Tags",
        }
    }

    pub fn all() -> [Facet; 2] {
        [Facet::Topic, Facet::Tag]
    }
}

impl std::fmt::Display for Facet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
