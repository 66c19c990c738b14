//! Per-session provider for the page's stores.

use landing_types::ui::UiOptions;

use crate::modal::ModalStore;
use crate::scroll::ScrollStore;

/// Everything a view needs to read or drive shared UI state.
///
/// Built once when the session starts and passed down explicitly; dropped
/// (with every store in it) when the session ends.
#[derive(Clone)]
pub struct SiteContext {
    pub modal: ModalStore,
    pub scroll: ScrollStore,
    pub options: UiOptions,
}

impl SiteContext {
    #[must_use]
    pub fn new(options: UiOptions) -> Self {
        tracing::debug!(?options, "site context created");
        Self {
            modal: ModalStore::new_modal(),
            scroll: ScrollStore::new_scroll(),
            options,
        }
    }
}

impl Default for SiteContext {
    fn default() -> Self {
        Self::new(UiOptions::default())
    }
}
