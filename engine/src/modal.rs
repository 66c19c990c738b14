//! Demo-request dialog store.

use landing_types::ui::{ModalPatch, ModalState};

use crate::store::{Setter, Store, StoreState};

impl StoreState for ModalState {
    type Patch = ModalPatch;

    fn merge(&mut self, patch: ModalPatch) {
        self.apply(patch);
    }
}

/// Bound operations of the modal store.
///
/// Title and subject only change together with visibility: there is no
/// operation that edits the copy of a closed dialog.
#[derive(Clone)]
pub struct ModalActions {
    set: Setter<ModalState>,
}

impl ModalActions {
    /// Show the dialog. Missing or blank copy falls back to
    /// "GET YOUR FREE DEMO" / "Demo Request". Calling while open replaces
    /// the copy (last caller wins).
    pub fn open_modal(&self, title: Option<&str>, subject: Option<&str>) {
        tracing::info!(?title, ?subject, "modal opened");
        self.set.set(ModalPatch::open(title, subject));
    }

    pub fn open_demo(&self) {
        self.open_modal(None, None);
    }

    /// Hide the dialog, keeping the last copy for the closing transition.
    pub fn close_modal(&self) {
        tracing::info!("modal closed");
        self.set.set(ModalPatch::close());
    }
}

pub type ModalStore = Store<ModalState, ModalActions>;

impl Store<ModalState, ModalActions> {
    /// Closed dialog with the demo-request copy.
    #[must_use]
    pub fn new_modal() -> Self {
        Store::create(|set| (ModalState::default(), ModalActions { set }))
    }

    pub fn open_modal(&self, title: Option<&str>, subject: Option<&str>) {
        self.actions().open_modal(title, subject);
    }

    pub fn open_demo(&self) {
        self.actions().open_demo();
    }

    pub fn close_modal(&self) {
        self.actions().close_modal();
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.with_state(ModalState::is_open)
    }
}

#[cfg(test)]
mod tests {
    use super::ModalStore;
    use landing_types::ui::ModalState;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn snapshot(store: &ModalStore) -> (bool, String, String) {
        let state = store.get_state();
        (
            state.is_open(),
            state.title().to_string(),
            state.subject().to_string(),
        )
    }

    #[test]
    fn starts_closed_with_demo_copy() {
        let store = ModalStore::new_modal();
        assert_eq!(store.get_state(), ModalState::default());
        assert_eq!(
            snapshot(&store),
            (false, "GET YOUR FREE DEMO".into(), "Demo Request".into())
        );
    }

    #[test]
    fn open_without_arguments_uses_defaults() {
        let store = ModalStore::new_modal();
        store.open_modal(Some("Other"), Some("Thing"));
        store.close_modal();
        store.open_demo();
        assert_eq!(
            snapshot(&store),
            (true, "GET YOUR FREE DEMO".into(), "Demo Request".into())
        );
    }

    #[test]
    fn open_then_close_keeps_custom_copy() {
        let store = ModalStore::new_modal();
        store.open_modal(Some("Custom Title"), Some("Custom Subject"));
        assert_eq!(
            snapshot(&store),
            (true, "Custom Title".into(), "Custom Subject".into())
        );

        store.close_modal();
        assert_eq!(
            snapshot(&store),
            (false, "Custom Title".into(), "Custom Subject".into())
        );
    }

    #[test]
    fn reopening_replaces_copy() {
        let store = ModalStore::new_modal();
        store.open_modal(Some("First"), Some("One"));
        store.open_modal(Some("Second"), None);
        assert_eq!(
            snapshot(&store),
            (true, "Second".into(), "Demo Request".into())
        );
    }

    #[test]
    fn is_open_tracks_most_recent_call() {
        let store = ModalStore::new_modal();
        // Deterministic mix of open/close calls; 1 = open, 0 = close.
        let calls = [1, 1, 0, 0, 1, 0, 1, 1, 1, 0, 1];
        for (i, call) in calls.into_iter().enumerate() {
            if call == 1 {
                store.open_modal(Some(&format!("title {i}")), None);
            } else {
                store.close_modal();
            }
            assert_eq!(store.is_open(), call == 1, "after call {i}");
        }
    }

    #[test]
    fn close_never_touches_copy() {
        let store = ModalStore::new_modal();
        for title in ["A", "B", "C"] {
            store.open_modal(Some(title), Some(title));
            let before = store.get_state();
            store.close_modal();
            store.close_modal();
            let after = store.get_state();
            assert_eq!(after.title(), before.title());
            assert_eq!(after.subject(), before.subject());
        }
    }

    #[test]
    fn subscribers_observe_open_and_close() {
        let store = ModalStore::new_modal();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let _sub = store.subscribe(move |state: &ModalState| {
            sink.borrow_mut().push((state.is_open(), state.title().to_string()));
        });

        store.open_modal(Some("TALK TO SALES"), Some("Pricing Inquiry"));
        store.close_modal();
        assert_eq!(
            *seen.borrow(),
            vec![
                (true, "TALK TO SALES".to_string()),
                (false, "TALK TO SALES".to_string()),
            ]
        );
    }
}
