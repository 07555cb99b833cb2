//! Per-widget configuration: CSS queries and class names used by the DOM host.
//!
//! A widget root marked with `data-facet-filter` may carry a JSON object as
//! the attribute value; its fields override the defaults below.

use contracts::enums::facet::Facet;
use serde::{Deserialize, Serialize};
use web_sys::Element;

use super::error::MountError;

/// Attribute marking a widget root (value: optional JSON config)
pub const ROOT_ATTRIBUTE: &str = "data-facet-filter";
/// Attribute set on a root once its listeners are attached
pub const BOUND_ATTRIBUTE: &str = "data-facet-filter-bound";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    pub topic_selector: String,
    pub tag_selector: String,
    pub card_selector: String,
    pub active_class: String,
    pub hidden_class: String,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            topic_selector: ".topic-filter .topic-tag".to_string(),
            tag_selector: ".tag-filter .tag".to_string(),
            card_selector: ".post-card".to_string(),
            active_class: "active".to_string(),
            hidden_class: "hidden".to_string(),
        }
    }
}

impl FilterConfig {
    pub fn selector_query(&self, facet: Facet) -> &str {
        match facet {
            Facet::Topic => &self.topic_selector,
            Facet::Tag => &self.tag_selector,
        }
    }

    /// Parse overrides; blank input means defaults
    pub fn from_json(raw: &str) -> Result<Self, MountError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_str(raw).map_err(MountError::Config)
    }

    /// Config of the widget rooted at `root`
    pub fn from_root(root: &Element) -> Result<Self, MountError> {
        match root.get_attribute(ROOT_ATTRIBUTE) {
            Some(raw) => Self::from_json(&raw),
            None => Ok(Self::default()),
        }
    }
}
