//! Observable UI state for the landing page.
//!
//! A generic single-threaded [`Store`] plus the two stores the page is built
//! around: the demo-request dialog and the smooth-scroll controller handle.
//! Both live in a [`SiteContext`] created once per session and handed to the
//! view layer explicitly.

mod context;
mod modal;
mod scroll;
mod store;

pub use context::SiteContext;
pub use modal::{ModalActions, ModalStore};
pub use scroll::{ScrollActions, ScrollStore};
pub use store::{Setter, Store, StoreState, Subscription};

pub use landing_types::ui::{
    AnimPhase, ModalEffect, ModalEffectKind, ModalPatch, ModalState, ScrollController, ScrollPatch,
    ScrollState, ScrollTarget, Section, UiOptions,
};
pub use landing_types::{EmptyStringError, NonEmptyStaticStr, NonEmptyString};
