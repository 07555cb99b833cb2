//! Topic/tag filter widgets of the post digest page.
//!
//! Static markup is enhanced in place through [`dom_host::DomFilterHost`];
//! pages that embed their posts as JSON get the Leptos [`board::FacetBoard`].

pub mod board;
pub mod bootstrap;
pub mod config;
pub mod controller;
pub mod dom_host;
pub mod error;
pub mod host;
pub mod wiring;

#[cfg(test)]
pub(crate) mod testing;

pub use config::FilterConfig;
pub use controller::FilterController;
pub use error::MountError;
pub use host::FilterHost;
