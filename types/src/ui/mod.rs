//! UI state types for the landing page.
//!
//! Pure data types with no IO, no async, no ratatui dependency.
//! Used by both the engine (state ownership) and tui (rendering/input).

mod animation;
mod modal;
mod scroll;
mod section;
mod view_state;

pub use animation::{AnimPhase, ease_out_cubic};
pub use modal::{
    DEFAULT_MODAL_SUBJECT, DEFAULT_MODAL_TITLE, ModalEffect, ModalEffectKind, ModalPatch, ModalState,
};
pub use scroll::{ScrollController, ScrollPatch, ScrollState, ScrollTarget};
pub use section::Section;
pub use view_state::UiOptions;
