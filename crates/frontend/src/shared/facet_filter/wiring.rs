use std::cell::RefCell;
use std::rc::Rc;

use contracts::enums::facet::Facet;

use super::controller::FilterController;
use super::error::MountError;
use super::host::{ActivationHandler, FilterHost};

pub type SharedController<H> = Rc<RefCell<FilterController<H>>>;

/// Build a controller over `host` and subscribe it to every selector.
///
/// Handlers hold a weak reference: once the returned controller is dropped
/// the subscriptions become inert.
pub fn wire<H: FilterHost + 'static>(host: H) -> Result<SharedController<H>, MountError> {
    let controller = Rc::new(RefCell::new(FilterController::new(host)));

    for facet in Facet::all() {
        let count = controller.borrow().host().selector_count(facet);
        for index in 0..count {
            let weak = Rc::downgrade(&controller);
            let handler: ActivationHandler = Box::new(move || {
                let Some(controller) = weak.upgrade() else {
                    return;
                };
                match controller.try_borrow_mut() {
                    Ok(mut controller) => {
                        controller.activate(facet, index);
                    }
                    Err(_) => {
                        log::warn!("{} selector #{} activated while busy, ignored", facet, index);
                    }
                };
            });
            controller
                .borrow_mut()
                .host_mut()
                .subscribe(facet, index, handler)?;
        }
    }

    Ok(controller)
}
