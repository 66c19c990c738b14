//! Scroll-controller handle shared between page components.

use std::fmt;
use std::rc::{Rc, Weak};

use super::Section;

/// Where a programmatic scroll should land.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollTarget {
    Top,
    Bottom,
    Section(Section),
    /// Absolute line offset from the top of the page.
    Offset(u16),
}

/// A smooth-scrolling driver owned by the view layer.
///
/// Methods take `&self`: the controller is shared behind `Rc` and mutates
/// through interior mutability on the UI thread.
pub trait ScrollController {
    fn scroll_to(&self, target: ScrollTarget);

    /// Relative scroll in lines; negative moves up.
    fn scroll_by(&self, lines: i32);

    /// Current (possibly mid-animation) offset from the top of the page.
    fn offset(&self) -> u16;
}

/// Non-owning reference to the active scroll controller.
///
/// The controller's lifetime belongs to whoever created it. Once it is
/// dropped, [`ScrollState::controller`] reads as `None`.
#[derive(Clone, Default)]
pub struct ScrollState {
    controller: Option<Weak<dyn ScrollController>>,
}

impl ScrollState {
    /// Upgrade the stored handle. `None` before registration, after
    /// teardown, or once the controller has been dropped.
    #[must_use]
    pub fn controller(&self) -> Option<Rc<dyn ScrollController>> {
        self.controller.as_ref().and_then(Weak::upgrade)
    }

    #[must_use]
    pub fn has_controller(&self) -> bool {
        self.controller().is_some()
    }

    /// Whether `candidate` is the registered controller.
    #[must_use]
    pub fn is_controller(&self, candidate: &Rc<dyn ScrollController>) -> bool {
        self.controller
            .as_ref()
            .is_some_and(|weak| Weak::ptr_eq(weak, &Rc::downgrade(candidate)))
    }

    pub fn apply(&mut self, patch: ScrollPatch) {
        if let Some(controller) = patch.controller {
            self.controller = controller;
        }
    }
}

impl fmt::Debug for ScrollState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollState")
            .field("controller", &self.has_controller())
            .finish()
    }
}

/// Partial [`ScrollState`] update. `controller: Some(None)` clears the handle.
#[derive(Clone, Default)]
pub struct ScrollPatch {
    controller: Option<Option<Weak<dyn ScrollController>>>,
}

impl ScrollPatch {
    #[must_use]
    pub fn controller(controller: Option<&Rc<dyn ScrollController>>) -> Self {
        Self {
            controller: Some(controller.map(Rc::downgrade)),
        }
    }
}
