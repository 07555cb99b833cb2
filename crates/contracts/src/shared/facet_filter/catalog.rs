use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::domain::a001_post::aggregate::Post;
use crate::enums::facet::Facet;

/// Distinct facet values found across a set of posts, sorted
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FacetCatalog {
    pub topics: Vec<String>,
    pub tags: Vec<String>,
}

impl FacetCatalog {
    pub fn from_posts(posts: &[Post]) -> Self {
        let mut topics = BTreeSet::new();
        let mut tags = BTreeSet::new();

        for post in posts {
            if let Some(topic) = post.topic.as_deref().filter(|t| !t.is_empty()) {
                topics.insert(topic.to_string());
            }
            tags.extend(post.tags.iter().filter(|t| !t.is_empty()).cloned());
        }

        Self {
            topics: topics.into_iter().collect(),
            tags: tags.into_iter().collect(),
        }
    }

    pub fn values(&self, facet: Facet) -> &[String] {
        match facet {
            Facet::Topic => &self.topics,
            Facet::Tag => &self.tags,
        }
    }
}
