use serde::{Deserialize, Serialize};

use super::card_facets::CardFacets;
use super::selection::Selection;
use crate::enums::facet::Facet;

/// Active selection of both facets.
///
/// Starts as `all`/`all`, lives only as long as the widget that owns it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterState {
    pub active_topic: Selection,
    pub active_tag: Selection,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self, facet: Facet) -> &Selection {
        match facet {
            Facet::Topic => &self.active_topic,
            Facet::Tag => &self.active_tag,
        }
    }

    /// Store a new selection for `facet`.
    ///
    /// Returns `false` and leaves the state untouched when `selection` is
    /// already active, so callers can skip re-rendering.
    pub fn select(&mut self, facet: Facet, selection: Selection) -> bool {
        let slot = match facet {
            Facet::Topic => &mut self.active_topic,
            Facet::Tag => &mut self.active_tag,
        };
        if *slot == selection {
            return false;
        }
        *slot = selection;
        true
    }

    /// Visibility rule: topic and tag filters must both admit the card
    pub fn matches(&self, card: &CardFacets) -> bool {
        self.active_topic.admits(&card.topic)
            && self.active_tag.admits_any(card.tags.iter().map(String::as_str))
    }

    /// Number of facets narrowed to a concrete value
    pub fn active_count(&self) -> usize {
        Facet::all()
            .into_iter()
            .filter(|facet| !self.active(*facet).is_all())
            .count()
    }
}
