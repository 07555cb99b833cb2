//! In-memory [`FilterHost`] for unit tests.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use contracts::enums::facet::Facet;
use contracts::shared::facet_filter::CardFacets;

use super::error::MountError;
use super::host::{ActivationHandler, FilterHost};

pub type Subscriptions = Rc<RefCell<Vec<(Facet, usize, ActivationHandler)>>>;

#[derive(Default)]
pub struct MemoryHost {
    pub topics: Vec<Option<String>>,
    pub tags: Vec<Option<String>>,
    pub topic_active: Vec<bool>,
    pub tag_active: Vec<bool>,
    pub cards: Vec<CardFacets>,
    pub hidden: Vec<bool>,
    /// Number of `set_card_hidden` calls, to detect re-renders.
    /// Shared so it can be read after the host is dropped.
    pub hidden_writes: Rc<Cell<usize>>,
    pub subscriptions: Subscriptions,
}

impl MemoryHost {
    pub fn new(topics: &[&str], tags: &[&str], cards: Vec<CardFacets>) -> Self {
        Self {
            topics: topics.iter().map(|t| Some(t.to_string())).collect(),
            tags: tags.iter().map(|t| Some(t.to_string())).collect(),
            topic_active: vec![false; topics.len()],
            tag_active: vec![false; tags.len()],
            hidden: vec![false; cards.len()],
            cards,
            ..Self::default()
        }
    }

    pub fn active(&self, facet: Facet) -> &[bool] {
        match facet {
            Facet::Topic => &self.topic_active,
            Facet::Tag => &self.tag_active,
        }
    }

    pub fn visible_cards(&self) -> Vec<usize> {
        self.hidden
            .iter()
            .enumerate()
            .filter(|(_, hidden)| !**hidden)
            .map(|(i, _)| i)
            .collect()
    }

    fn values(&self, facet: Facet) -> &[Option<String>] {
        match facet {
            Facet::Topic => &self.topics,
            Facet::Tag => &self.tags,
        }
    }
}

impl FilterHost for MemoryHost {
    fn selector_count(&self, facet: Facet) -> usize {
        self.values(facet).len()
    }

    fn selector_value(&self, facet: Facet, index: usize) -> Option<String> {
        self.values(facet).get(index).cloned().flatten()
    }

    fn set_selector_active(&mut self, facet: Facet, index: usize, active: bool) {
        let flags = match facet {
            Facet::Topic => &mut self.topic_active,
            Facet::Tag => &mut self.tag_active,
        };
        if flags.len() <= index {
            flags.resize(index + 1, false);
        }
        flags[index] = active;
    }

    fn card_count(&self) -> usize {
        self.cards.len()
    }

    fn card_facets(&self, index: usize) -> CardFacets {
        self.cards[index].clone()
    }

    fn set_card_hidden(&mut self, index: usize, hidden: bool) {
        self.hidden_writes.set(self.hidden_writes.get() + 1);
        self.hidden[index] = hidden;
    }

    fn subscribe(
        &mut self,
        facet: Facet,
        index: usize,
        handler: ActivationHandler,
    ) -> Result<(), MountError> {
        self.subscriptions.borrow_mut().push((facet, index, handler));
        Ok(())
    }
}

pub fn card(topic: &str, tags: &[&str]) -> CardFacets {
    CardFacets::new(topic, tags.iter().map(|t| t.to_string()).collect())
}

/// Fire every handler subscribed to selector `index` of `facet`
pub fn click(subscriptions: &Subscriptions, facet: Facet, index: usize) {
    let mut subscriptions = subscriptions.borrow_mut();
    for (f, i, handler) in subscriptions.iter_mut() {
        if *f == facet && *i == index {
            handler();
        }
    }
}
