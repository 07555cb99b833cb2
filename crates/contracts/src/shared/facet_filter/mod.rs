//! Topic/tag filtering of post cards, independent of any DOM.

pub mod card_facets;
pub mod catalog;
pub mod filter_state;
pub mod selection;

pub use card_facets::{join_tag_list, split_tag_list, CardFacets};
pub use catalog::FacetCatalog;
pub use filter_state::FilterState;
pub use selection::{Selection, ALL};
