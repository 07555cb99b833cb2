use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serialize};

use crate::shared::facet_filter::card_facets::{split_tag_list, CardFacets};

// ============================================================================
// Aggregate
// ============================================================================

/// Post of the digest page as embedded by the page generator.
///
/// Every field is optional: posts that were never tagged still render,
/// they just only match the `all` filters.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Post {
    /// Source topic identifier; the generator writes it as a number or a string
    #[serde(default, deserialize_with = "deserialize_topic_id")]
    pub topic_id: Option<String>,

    #[serde(default)]
    pub author: Option<String>,

    /// `YYYY-MM-DD HH:MM:SS[.fff]`
    #[serde(default)]
    pub create_time: Option<String>,

    #[serde(default)]
    pub topic: Option<String>,

    /// JSON list, or a comma-separated string as on the card markup
    #[serde(default, deserialize_with = "deserialize_tags")]
    pub tags: Vec<String>,

    #[serde(default)]
    pub digest: Option<String>,

    /// Pre-rendered HTML body
    #[serde(default)]
    pub content: Option<String>,
}

impl Post {
    pub fn facets(&self) -> CardFacets {
        CardFacets::new(self.topic.clone().unwrap_or_default(), self.tags.clone())
    }

    pub fn created_at(&self) -> Option<NaiveDateTime> {
        self.create_time.as_deref().and_then(parse_create_time)
    }

    /// DD.MM.YYYY HH:MM, or the raw value when it does not parse
    pub fn display_time(&self) -> Option<String> {
        match self.created_at() {
            Some(at) => Some(at.format("%d.%m.%Y %H:%M").to_string()),
            None => self.create_time.clone(),
        }
    }
}

fn parse_create_time(raw: &str) -> Option<NaiveDateTime> {
    let normalized = raw.trim().replacen('T', " ", 1);
    NaiveDateTime::parse_from_str(&normalized, "%Y-%m-%d %H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(&normalized, "%Y-%m-%d %H:%M:%S"))
        .ok()
}

fn deserialize_topic_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Number(u64),
        Text(String),
    }

    Ok(Option::<RawId>::deserialize(deserializer)?.map(|raw| match raw {
        RawId::Number(n) => n.to_string(),
        RawId::Text(s) => s,
    }))
}

fn deserialize_tags<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawTags {
        List(Vec<String>),
        Joined(String),
    }

    Ok(match Option::<RawTags>::deserialize(deserializer)? {
        Some(RawTags::List(tags)) => tags,
        Some(RawTags::Joined(list)) => split_tag_list(Some(&list)),
        None => Vec::new(),
    })
}

// ============================================================================
// Collection helpers
// ============================================================================

/// Post entry that could not be decoded
#[derive(Debug)]
pub struct RejectedPost {
    /// Position in the embedded array
    pub index: usize,
    pub error: serde_json::Error,
}

#[derive(Debug, Default)]
pub struct PostBatch {
    pub posts: Vec<Post>,
    pub rejected: Vec<RejectedPost>,
}

/// Decode the JSON array of posts embedded in the page.
///
/// Only a malformed array fails as a whole; a malformed entry is skipped
/// and reported in [`PostBatch::rejected`].
pub fn parse_posts(json: &str) -> serde_json::Result<PostBatch> {
    let entries: Vec<serde_json::Value> = serde_json::from_str(json)?;
    let mut batch = PostBatch::default();
    for (index, entry) in entries.into_iter().enumerate() {
        match serde_json::from_value::<Post>(entry) {
            Ok(post) => batch.posts.push(post),
            Err(error) => batch.rejected.push(RejectedPost { index, error }),
        }
    }
    Ok(batch)
}

/// Newest first; posts without a readable time go last in input order
pub fn sort_newest_first(posts: &mut [Post]) {
    posts.sort_by(|a, b| match (a.created_at(), b.created_at()) {
        (Some(x), Some(y)) => y.cmp(&x),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => std::cmp::Ordering::Equal,
    });
}
