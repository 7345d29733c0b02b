//! Scroll event subscriptions
//!
//! [`ScrollSource`] abstracts the global scroll signal. Subscribers hold a
//! [`Subscription`] guard; dropping the guard detaches the handler, so a
//! component that goes away can never receive another event.
//!
//! [`ScrollBus`] is the in-process source used when the host dispatches
//! scroll offsets itself (tests, server-side previews). The browser build
//! implements the same lifecycle directly on `window` listeners.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::fmt;
use std::rc::Rc;

/// Callback invoked with the vertical scroll offset
pub type ScrollHandler = Box<dyn FnMut(f64)>;

/// Identifier handed out by [`ScrollSource::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

impl SubscriptionId {
    /// Wrap an id allocated by a [`ScrollSource`] implementation
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    pub fn raw(self) -> u64 {
        self.0
    }
}

/// Anything that can deliver scroll offsets to registered handlers
pub trait ScrollSource {
    /// Register a handler, returning the id needed to remove it
    fn subscribe(&self, handler: ScrollHandler) -> SubscriptionId;

    /// Remove a handler. Returns `false` if the id was not registered.
    fn unsubscribe(&self, id: SubscriptionId) -> bool;
}

/// Guard that unsubscribes its handler when dropped
pub struct Subscription<S: ScrollSource> {
    source: S,
    id: Option<SubscriptionId>,
}

impl<S: ScrollSource> Subscription<S> {
    /// Subscribe `handler` to `source` and hold the registration
    pub fn new(source: S, handler: ScrollHandler) -> Self {
        let id = source.subscribe(handler);
        Self {
            source,
            id: Some(id),
        }
    }

    pub fn id(&self) -> Option<SubscriptionId> {
        self.id
    }

    pub fn is_active(&self) -> bool {
        self.id.is_some()
    }

    /// Detach now rather than at drop time
    pub fn cancel(&mut self) {
        if let Some(id) = self.id.take() {
            self.source.unsubscribe(id);
        }
    }
}

impl<S: ScrollSource> Drop for Subscription<S> {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl<S: ScrollSource> fmt::Debug for Subscription<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}

type SharedHandler = Rc<RefCell<ScrollHandler>>;

#[derive(Default)]
struct BusInner {
    next_id: u64,
    handlers: Vec<(SubscriptionId, SharedHandler)>,
    dispatching: bool,
    pending: VecDeque<f64>,
}

/// Single-threaded scroll event dispatcher
///
/// Cloning yields another handle to the same set of handlers.
#[derive(Clone, Default)]
pub struct ScrollBus {
    inner: Rc<RefCell<BusInner>>,
}

impl ScrollBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of handlers currently attached
    pub fn listener_count(&self) -> usize {
        self.inner.borrow().handlers.len()
    }

    /// Deliver `offset` to every attached handler, in subscription order.
    /// Returns how many handler calls ran.
    ///
    /// A handler that dispatches on the same bus has its offset queued; it is
    /// delivered to every handler once the current offset has been, before
    /// the outermost call returns. The nested call itself returns 0.
    pub fn dispatch(&self, offset: f64) -> usize {
        {
            let mut inner = self.inner.borrow_mut();
            if inner.dispatching {
                tracing::trace!(offset, "nested dispatch queued");
                inner.pending.push_back(offset);
                return 0;
            }
            inner.dispatching = true;
        }

        let mut invoked = self.deliver(offset);
        loop {
            let next = {
                let mut inner = self.inner.borrow_mut();
                let next = inner.pending.pop_front();
                if next.is_none() {
                    inner.dispatching = false;
                }
                next
            };
            match next {
                Some(offset) => invoked += self.deliver(offset),
                None => return invoked,
            }
        }
    }

    fn deliver(&self, offset: f64) -> usize {
        // Snapshot so handlers may subscribe or unsubscribe while running
        let snapshot: Vec<(SubscriptionId, SharedHandler)> = self
            .inner
            .borrow()
            .handlers
            .iter()
            .map(|(id, handler)| (*id, Rc::clone(handler)))
            .collect();

        let mut invoked = 0;
        for (id, handler) in snapshot {
            if !self.is_registered(id) {
                continue;
            }
            (handler.borrow_mut())(offset);
            invoked += 1;
        }
        invoked
    }

    fn is_registered(&self, id: SubscriptionId) -> bool {
        self.inner
            .borrow()
            .handlers
            .iter()
            .any(|(registered, _)| *registered == id)
    }
}

impl ScrollSource for ScrollBus {
    fn subscribe(&self, handler: ScrollHandler) -> SubscriptionId {
        let mut inner = self.inner.borrow_mut();
        let id = SubscriptionId(inner.next_id);
        inner.next_id += 1;
        inner.handlers.push((id, Rc::new(RefCell::new(handler))));
        tracing::trace!(?id, "scroll handler attached");
        id
    }

    fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut inner = self.inner.borrow_mut();
        let before = inner.handlers.len();
        inner.handlers.retain(|(registered, _)| *registered != id);
        let removed = inner.handlers.len() != before;
        if removed {
            tracing::trace!(?id, "scroll handler detached");
        }
        removed
    }
}

impl fmt::Debug for ScrollBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollBus")
            .field("listeners", &self.listener_count())
            .finish()
    }
}
