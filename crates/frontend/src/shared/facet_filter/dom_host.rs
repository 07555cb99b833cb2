//! [`FilterHost`] over real page elements.

use contracts::enums::facet::Facet;
use contracts::shared::facet_filter::CardFacets;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event};

use super::config::{FilterConfig, BOUND_ATTRIBUTE};
use super::error::{js_message, MountError};
use super::host::{ActivationHandler, FilterHost};

/// Selectors and cards found under one widget root.
///
/// The element lists are captured once at mount; attribute values are
/// read on every evaluation. Click listeners live as long as the host.
pub struct DomFilterHost {
    config: FilterConfig,
    topic_selectors: Vec<Element>,
    tag_selectors: Vec<Element>,
    cards: Vec<Element>,
    listeners: Vec<Closure<dyn FnMut(Event)>>,
}

impl DomFilterHost {
    pub fn collect(root: &Element, config: FilterConfig) -> Result<Self, MountError> {
        let topic_selectors = query_all(root, config.selector_query(Facet::Topic))?;
        let tag_selectors = query_all(root, config.selector_query(Facet::Tag))?;
        let cards = query_all(root, &config.card_selector)?;

        Ok(Self {
            config,
            topic_selectors,
            tag_selectors,
            cards,
            listeners: Vec::new(),
        })
    }

    fn selectors(&self, facet: Facet) -> &[Element] {
        match facet {
            Facet::Topic => &self.topic_selectors,
            Facet::Tag => &self.tag_selectors,
        }
    }
}

impl FilterHost for DomFilterHost {
    fn selector_count(&self, facet: Facet) -> usize {
        self.selectors(facet).len()
    }

    fn selector_value(&self, facet: Facet, index: usize) -> Option<String> {
        self.selectors(facet)
            .get(index)
            .and_then(|el| el.get_attribute(facet.selector_attribute()))
    }

    fn set_selector_active(&mut self, facet: Facet, index: usize, active: bool) {
        if let Some(el) = self.selectors(facet).get(index) {
            toggle_class(el, &self.config.active_class, active);
        }
    }

    fn card_count(&self) -> usize {
        self.cards.len()
    }

    fn card_facets(&self, index: usize) -> CardFacets {
        match self.cards.get(index) {
            Some(card) => CardFacets::from_attributes(
                card.get_attribute(Facet::Topic.card_attribute()).as_deref(),
                card.get_attribute(Facet::Tag.card_attribute()).as_deref(),
            ),
            None => CardFacets::default(),
        }
    }

    fn set_card_hidden(&mut self, index: usize, hidden: bool) {
        if let Some(card) = self.cards.get(index) {
            toggle_class(card, &self.config.hidden_class, hidden);
        }
    }

    fn subscribe(
        &mut self,
        facet: Facet,
        index: usize,
        mut handler: ActivationHandler,
    ) -> Result<(), MountError> {
        let Some(element) = self.selectors(facet).get(index) else {
            return Ok(());
        };

        let listener = Closure::wrap(Box::new(move |_: Event| {
            handler();
        }) as Box<dyn FnMut(Event)>);

        element
            .add_event_listener_with_callback(
                "click",
                listener.as_ref().unchecked_ref::<js_sys::Function>(),
            )
            .map_err(|e| MountError::Listener {
                event: "click".to_string(),
                message: js_message(&e),
            })?;

        self.listeners.push(listener);
        Ok(())
    }
}

/// All elements under `root` matching the CSS `selector`, in document order
pub fn query_all(root: &Element, selector: &str) -> Result<Vec<Element>, MountError> {
    let nodes = root
        .query_selector_all(selector)
        .map_err(|e| MountError::InvalidSelector {
            selector: selector.to_string(),
            message: js_message(&e),
        })?;

    Ok((0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

fn toggle_class(element: &Element, class: &str, on: bool) {
    if let Err(e) = element.class_list().toggle_with_force(class, on) {
        log::warn!("failed to toggle class `{}`: {}", class, js_message(&e));
    }
}

/// Flag `element` as bound so a repeated start skips it
pub fn mark_bound(element: &Element) {
    if let Err(e) = element.set_attribute(BOUND_ATTRIBUTE, "") {
        log::warn!("failed to mark element as bound: {}", js_message(&e));
    }
}
