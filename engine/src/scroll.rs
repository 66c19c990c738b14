//! Scroll-controller handle store.

use std::rc::Rc;

use landing_types::ui::{ScrollController, ScrollPatch, ScrollState};

use crate::store::{Setter, Store, StoreState};

impl StoreState for ScrollState {
    type Patch = ScrollPatch;

    fn merge(&mut self, patch: ScrollPatch) {
        self.apply(patch);
    }
}

#[derive(Clone)]
pub struct ScrollActions {
    set: Setter<ScrollState>,
}

impl ScrollActions {
    /// Register the active controller, or clear it with `None`.
    ///
    /// Only a weak reference is kept; creating and dropping the controller
    /// stays with the caller.
    pub fn set_controller(&self, controller: Option<&Rc<dyn ScrollController>>) {
        tracing::debug!(present = controller.is_some(), "scroll controller set");
        self.set.set(ScrollPatch::controller(controller));
    }
}

pub type ScrollStore = Store<ScrollState, ScrollActions>;

impl Store<ScrollState, ScrollActions> {
    #[must_use]
    pub fn new_scroll() -> Self {
        Store::create(|set| (ScrollState::default(), ScrollActions { set }))
    }

    pub fn set_controller(&self, controller: Option<&Rc<dyn ScrollController>>) {
        self.actions().set_controller(controller);
    }

    /// The live controller, if one is registered and still alive.
    #[must_use]
    pub fn controller(&self) -> Option<Rc<dyn ScrollController>> {
        self.with_state(ScrollState::controller)
    }
}
