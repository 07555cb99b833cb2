use contracts::enums::facet::Facet;
use contracts::shared::facet_filter::CardFacets;

use super::error::MountError;

/// Callback fired when a selector is activated (clicked)
pub type ActivationHandler = Box<dyn FnMut()>;

/// Page surface a [`FilterController`](super::controller::FilterController) drives.
///
/// Selectors and cards are addressed by their position in document order;
/// the set is fixed once the host is built.
pub trait FilterHost {
    fn selector_count(&self, facet: Facet) -> usize;

    /// Facet value carried by a selector, `None` if the attribute is missing
    fn selector_value(&self, facet: Facet, index: usize) -> Option<String>;

    fn set_selector_active(&mut self, facet: Facet, index: usize, active: bool);

    fn card_count(&self) -> usize;

    /// Facet values of a card, read at call time
    fn card_facets(&self, index: usize) -> CardFacets;

    fn set_card_hidden(&mut self, index: usize, hidden: bool);

    /// Register `handler` to run each time the selector is activated
    fn subscribe(
        &mut self,
        facet: Facet,
        index: usize,
        handler: ActivationHandler,
    ) -> Result<(), MountError>;
}
