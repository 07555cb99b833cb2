//! Page entry: decide between rendering the board and enhancing static
//! markup, once the document is parsed.

use std::cell::RefCell;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element};

use super::board::{mount_board, POSTS_DATA_ID};
use super::config::{FilterConfig, BOUND_ATTRIBUTE, ROOT_ATTRIBUTE};
use super::dom_host::{mark_bound, query_all, DomFilterHost};
use super::error::{js_message, MountError};
use super::host::FilterHost;
use super::wiring::{wire, SharedController};
use contracts::enums::facet::Facet;

// Mounted widgets stay alive for the page lifetime; their listeners only
// hold weak references to the controllers.
thread_local! {
    static MOUNTED: RefCell<Vec<SharedController<DomFilterHost>>> = RefCell::new(Vec::new());
}

pub fn run() {
    let Some(window) = web_sys::window() else {
        log::error!("Failed to start facet filter: {}", MountError::NoWindow);
        return;
    };
    let Some(document) = window.document() else {
        log::error!("Failed to start facet filter: {}", MountError::NoDocument);
        return;
    };

    if document.ready_state() == "loading" {
        let ready_document = document.clone();
        let on_ready = Closure::once_into_js(move || mount_page(&ready_document));
        if let Err(e) = document.add_event_listener_with_callback(
            "DOMContentLoaded",
            on_ready.unchecked_ref::<js_sys::Function>(),
        ) {
            log::error!("Failed to wait for DOMContentLoaded: {}", js_message(&e));
        }
    } else {
        mount_page(&document);
    }
}

fn mount_page(document: &Document) {
    if let Some(data) = document.get_element_by_id(POSTS_DATA_ID) {
        match mount_board(document, &data) {
            Ok(()) => return,
            // the static cards stay filterable without the board
            Err(err) => log::warn!("Post board not rendered, enhancing static markup: {}", err),
        }
    }

    match bind_widgets(document) {
        Ok(count) => log::info!("facet filter: {} widget(s) mounted", count),
        Err(err) => log::error!("Failed to mount facet filter: {}", err),
    }
}

/// Bind every `[data-facet-filter]` root, or the whole document when the
/// page has none. Returns how many widgets were bound by this call.
pub fn bind_widgets(document: &Document) -> Result<usize, MountError> {
    let html = document.document_element().ok_or(MountError::NoDocument)?;
    let mut roots = query_all(&html, &format!("[{}]", ROOT_ATTRIBUTE))?;
    if roots.is_empty() {
        roots.push(html);
    }

    let mut mounted = 0;
    for root in roots {
        if root.has_attribute(BOUND_ATTRIBUTE) {
            continue;
        }
        // one broken widget must not keep the others from mounting
        match bind_root(&root) {
            Ok(()) => mounted += 1,
            Err(err) => log::error!("Failed to mount filter widget: {}", err),
        }
    }
    Ok(mounted)
}

/// Attach an independent controller to the widget under `root`.
pub fn bind_root(root: &Element) -> Result<(), MountError> {
    let config = FilterConfig::from_root(root)?;
    let host = DomFilterHost::collect(root, config)?;
    log::info!(
        "filter widget: {} topic selectors, {} tag selectors, {} cards",
        host.selector_count(Facet::Topic),
        host.selector_count(Facet::Tag),
        host.card_count()
    );

    let controller = wire(host)?;
    mark_bound(root);
    MOUNTED.with(|mounted| mounted.borrow_mut().push(controller));
    Ok(())
}
