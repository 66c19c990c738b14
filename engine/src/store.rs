//! Generic observable store.
//!
//! Single-threaded by construction (`Rc`/`RefCell`), matching the UI loop:
//! every `set` runs to completion on the caller's stack and notifies
//! subscribers synchronously, in subscription order.

use std::any::type_name;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

/// State that can be updated by merging a partial value into it.
pub trait StoreState: Clone + 'static {
    /// Partial state. Fields left unset are preserved by [`StoreState::merge`].
    type Patch;

    fn merge(&mut self, patch: Self::Patch);
}

struct Listener<S> {
    id: u64,
    active: Cell<bool>,
    callback: Box<dyn Fn(&S)>,
}

struct Shared<S> {
    state: RefCell<S>,
    listeners: RefCell<Vec<Rc<Listener<S>>>>,
    next_id: Cell<u64>,
    dispatching: Cell<bool>,
    /// A `set` arrived while subscribers were being notified.
    pending: Cell<bool>,
}

impl<S: StoreState> Shared<S> {
    fn new(state: S) -> Self {
        Self {
            state: RefCell::new(state),
            listeners: RefCell::new(Vec::new()),
            next_id: Cell::new(0),
            dispatching: Cell::new(false),
            pending: Cell::new(false),
        }
    }

    fn set(&self, patch: S::Patch) {
        self.state.borrow_mut().merge(patch);
        tracing::trace!(
            store = type_name::<S>(),
            subscribers = self.listeners.borrow().len(),
            "state updated"
        );
        self.notify();
    }

    /// Nested sets (from inside a callback) are folded into another pass
    /// after the current one, so every subscriber sees the final value last.
    fn notify(&self) {
        if self.dispatching.get() {
            self.pending.set(true);
            return;
        }

        let _guard = DispatchGuard::enter(&self.dispatching);
        loop {
            self.pending.set(false);
            let snapshot = self.state.borrow().clone();
            let listeners = self.listeners.borrow().clone();
            for listener in &listeners {
                if listener.active.get() {
                    (listener.callback)(&snapshot);
                }
            }
            if !self.pending.get() {
                break;
            }
        }
    }

    fn add_listener(&self, callback: Box<dyn Fn(&S)>) -> Rc<Listener<S>> {
        let id = self.next_id.get();
        self.next_id.set(id.wrapping_add(1));
        let listener = Rc::new(Listener {
            id,
            active: Cell::new(true),
            callback,
        });
        self.listeners.borrow_mut().push(Rc::clone(&listener));
        listener
    }

    fn remove_listener(&self, id: u64) {
        self.listeners.borrow_mut().retain(|listener| listener.id != id);
    }
}

/// Clears the dispatch flag even if a subscriber panics.
struct DispatchGuard<'a>(&'a Cell<bool>);

impl<'a> DispatchGuard<'a> {
    fn enter(flag: &'a Cell<bool>) -> Self {
        flag.set(true);
        Self(flag)
    }
}

impl Drop for DispatchGuard<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

/// Write handle given to a store's initializer and captured by its actions.
///
/// Holds the store weakly: setting after the store is gone is a no-op.
pub struct Setter<S> {
    shared: Weak<Shared<S>>,
}

impl<S> Clone for Setter<S> {
    fn clone(&self) -> Self {
        Self {
            shared: Weak::clone(&self.shared),
        }
    }
}

impl<S: StoreState> Setter<S> {
    pub fn set(&self, patch: S::Patch) {
        match self.shared.upgrade() {
            Some(shared) => shared.set(patch),
            None => tracing::debug!(store = type_name::<S>(), "set on a dropped store ignored"),
        }
    }
}

/// Registration handle returned by [`Store::subscribe`].
///
/// Dropping it unsubscribes; call [`Subscription::detach`] to keep the
/// callback registered for the life of the store.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn unsubscribe(mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }

    pub fn detach(mut self) {
        self.cancel = None;
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

/// Observable container of `S` plus the bound update operations `A`.
pub struct Store<S, A> {
    shared: Rc<Shared<S>>,
    actions: A,
}

impl<S, A: Clone> Clone for Store<S, A> {
    fn clone(&self) -> Self {
        Self {
            shared: Rc::clone(&self.shared),
            actions: self.actions.clone(),
        }
    }
}

impl<S: StoreState, A> Store<S, A> {
    /// Build a store from an initializer that receives the [`Setter`] and
    /// returns the initial state together with its bound actions.
    ///
    /// The setter is not live until `create` returns; sets issued from
    /// inside the initializer are ignored.
    pub fn create<F>(initializer: F) -> Self
    where
        F: FnOnce(Setter<S>) -> (S, A),
    {
        let mut actions = None;
        let shared = Rc::new_cyclic(|weak| {
            let (state, bound) = initializer(Setter {
                shared: Weak::clone(weak),
            });
            actions = Some(bound);
            Shared::new(state)
        });
        let Some(actions) = actions else {
            unreachable!("Rc::new_cyclic always runs its initializer");
        };
        tracing::debug!(store = type_name::<S>(), "store created");
        Self { shared, actions }
    }

    /// Snapshot of the current state.
    #[must_use]
    pub fn get_state(&self) -> S {
        self.shared.state.borrow().clone()
    }

    /// Read the current state without cloning it.
    ///
    /// Must not call back into this store's `set` from `f`.
    pub fn with_state<R>(&self, f: impl FnOnce(&S) -> R) -> R {
        f(&self.shared.state.borrow())
    }

    pub fn set(&self, patch: S::Patch) {
        self.shared.set(patch);
    }

    #[must_use]
    pub fn setter(&self) -> Setter<S> {
        Setter {
            shared: Rc::downgrade(&self.shared),
        }
    }

    pub fn actions(&self) -> &A {
        &self.actions
    }

    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&S) + 'static,
    {
        let listener = self.shared.add_listener(Box::new(callback));
        let shared = Rc::downgrade(&self.shared);
        Subscription {
            cancel: Some(Box::new(move || {
                listener.active.set(false);
                if let Some(shared) = shared.upgrade() {
                    shared.remove_listener(listener.id);
                }
            })),
        }
    }

    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.shared.listeners.borrow().len()
    }
}
