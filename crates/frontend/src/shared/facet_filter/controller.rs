use contracts::enums::facet::Facet;
use contracts::shared::facet_filter::{FilterState, Selection};

use super::host::FilterHost;

/// Owns the filter state of one widget and applies it to its host.
pub struct FilterController<H: FilterHost> {
    host: H,
    state: FilterState,
}

impl<H: FilterHost> FilterController<H> {
    /// Starts at `all`/`all`; the page is not touched until the first selection.
    pub fn new(host: H) -> Self {
        Self {
            host,
            state: FilterState::new(),
        }
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub(crate) fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Handle a click on selector `index` of `facet`.
    ///
    /// Selectors without a facet value are ignored.
    pub fn activate(&mut self, facet: Facet, index: usize) -> bool {
        let Some(raw) = self.host.selector_value(facet, index) else {
            log::warn!("{} selector #{} has no value, ignored", facet, index);
            return false;
        };
        self.select(facet, index, Selection::parse(&raw))
    }

    /// Make selector `index` the only active one of its group, store
    /// `selection` and re-evaluate every card.
    ///
    /// Selecting the value that is already active changes nothing and
    /// returns `false`.
    pub fn select(&mut self, facet: Facet, index: usize, selection: Selection) -> bool {
        if *self.state.active(facet) == selection {
            return false;
        }

        for i in 0..self.host.selector_count(facet) {
            self.host.set_selector_active(facet, i, i == index);
        }

        log::debug!("{} filter: {} -> {}", facet, self.state.active(facet), selection);
        self.state.select(facet, selection);
        self.apply();
        true
    }

    /// Recompute the hidden flag of every card. Returns the visible count.
    pub fn apply(&mut self) -> usize {
        let mut visible = 0;
        for i in 0..self.host.card_count() {
            let shown = self.state.matches(&self.host.card_facets(i));
            self.host.set_card_hidden(i, !shown);
            if shown {
                visible += 1;
            }
        }
        visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::facet_filter::testing::{card, MemoryHost};

    fn controller() -> FilterController<MemoryHost> {
        FilterController::new(MemoryHost::new(
            &["all", "A", "B"],
            &["all", "x", "y"],
            vec![
                card("A", &["x"]),
                card("A", &["y"]),
                card("B", &["x", "y"]),
                card("B", &[]),
            ],
        ))
    }

    #[test]
    fn test_initial_state_untouched() {
        let c = controller();
        assert!(c.state().active_topic.is_all());
        assert!(c.state().active_tag.is_all());
        assert_eq!(c.host().hidden_writes.get(), 0);
        assert_eq!(c.host().visible_cards(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_topic_selection() {
        let mut c = controller();
        assert!(c.activate(Facet::Topic, 1));
        assert_eq!(c.state().active_topic.as_str(), "A");
        assert_eq!(c.host().visible_cards(), vec![0, 1]);
        assert_eq!(c.host().active(Facet::Topic), [false, true, false]);
        assert_eq!(c.host().active(Facet::Tag), [false, false, false]);
    }

    #[test]
    fn test_tag_selection() {
        let mut c = controller();
        assert!(c.activate(Facet::Tag, 1));
        assert_eq!(c.host().visible_cards(), vec![0, 2]);
    }

    #[test]
    fn test_topic_and_tag() {
        let mut c = controller();
        c.activate(Facet::Topic, 1);
        c.activate(Facet::Tag, 1);
        assert_eq!(c.host().visible_cards(), vec![0]);
        assert!(c.host().hidden[1], "topic A with tags [y] must be hidden");
    }

    #[test]
    fn test_reclick_is_noop() {
        let mut c = controller();
        c.activate(Facet::Topic, 2);
        let writes = c.host().hidden_writes.get();
        let state = c.state().clone();
        let hidden = c.host().hidden.clone();

        assert!(!c.activate(Facet::Topic, 2));
        assert_eq!(c.host().hidden_writes.get(), writes);
        assert_eq!(*c.state(), state);
        assert_eq!(c.host().hidden, hidden);

        // "all" is active from the start
        assert!(!c.activate(Facet::Tag, 0));
        assert_eq!(c.host().hidden_writes.get(), writes);
    }

    #[test]
    fn test_mutual_exclusivity() {
        let mut c = controller();
        for index in [1, 2, 0, 2] {
            c.activate(Facet::Tag, index);
            let active = c.host().active(Facet::Tag);
            assert_eq!(active.iter().filter(|a| **a).count(), 1);
            assert!(active[index]);
        }
    }

    #[test]
    fn test_back_to_all() {
        let mut c = controller();
        c.activate(Facet::Tag, 2);
        c.activate(Facet::Topic, 1);
        assert_eq!(c.host().visible_cards(), vec![1]);
        c.activate(Facet::Topic, 0);
        assert_eq!(c.host().visible_cards(), vec![1, 2]);
    }

    #[test]
    fn test_unknown_value_hides_everything() {
        let mut host = MemoryHost::new(&["all", "ghost"], &["all"], vec![card("A", &["x"])]);
        host.topics.push(None);
        let mut c = FilterController::new(host);
        assert!(c.activate(Facet::Topic, 1));
        assert!(c.host().visible_cards().is_empty());

        // selector without a value
        assert!(!c.activate(Facet::Topic, 2));
        assert_eq!(c.state().active_topic.as_str(), "ghost");
    }

    #[test]
    fn test_visibility_rule_over_all_selections() {
        let mut c = controller();
        for topic in 0..3 {
            for tag in 0..3 {
                c.activate(Facet::Topic, topic);
                c.activate(Facet::Tag, tag);
                let state = c.state().clone();
                for (i, facets) in c.host().cards.iter().enumerate() {
                    let t = state.active_topic.as_str();
                    let g = state.active_tag.as_str();
                    let expected_hidden = !((t == "all" || facets.topic == t)
                        && (g == "all" || facets.tags.iter().any(|x| x == g)));
                    assert_eq!(c.host().hidden[i], expected_hidden);
                }
            }
        }
    }

    #[test]
    fn test_apply_returns_visible_count() {
        let mut c = controller();
        assert_eq!(c.apply(), 4);
        c.activate(Facet::Topic, 2);
        assert_eq!(c.apply(), 2);
    }
}
