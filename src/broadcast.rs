//! Per-occurrence event broadcasters
//!
//! Every window occurrence (moved, resized, mouse down, ...) owns one [`Event`].
//! An event keeps an ordered list of subscriber callbacks and invokes all of them
//! synchronously when fired. Firing with nobody subscribed does nothing.
//!
//! The subscriber list is snapshotted when a broadcast starts, so callbacks may
//! subscribe or unsubscribe (on any event, including the one being fired)
//! without disturbing the broadcast in progress. Changes take effect on the
//! next fire.
//!
//! # Usage
//!
//! ```ignore
//! let id = window.events().resized.subscribe(|sender, _| {
//!     tracing::info!(window = %sender, "resized");
//! });
//! window.notify_resized();
//! window.events().resized.unsubscribe(id);
//! ```

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};
use std::sync::atomic::{AtomicU64, Ordering};

use indexmap::IndexMap;

use crate::input::{
    KeyPressEventArgs, KeyboardKeyEventArgs, MouseButtonEventArgs, MouseMoveEventArgs,
    MouseWheelEventArgs,
};

/// Identity of the window that raised an event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WindowId(u64);

impl WindowId {
    /// Allocates a process-unique id
    pub fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "window#{}", self.0)
    }
}

/// Handle returned by [`Event::subscribe`], used to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Callback<A> = Rc<dyn Fn(WindowId, &A)>;

struct Subscribers<A> {
    next_id: u64,
    callbacks: IndexMap<SubscriptionId, Callback<A>>,
}

/// A named broadcaster carrying payloads of type `A`
///
/// Cloning an `Event` yields another strong handle to the same subscriber
/// list. A callback stored in that list must not own a strong handle to it
/// (directly or through a cloned [`WindowEvents`]): the list would keep
/// itself alive and never be freed. Callbacks that need to reach their own
/// broadcaster capture [`Event::downgrade`] instead.
pub struct Event<A> {
    name: &'static str,
    subscribers: Rc<RefCell<Subscribers<A>>>,
}

impl<A> Event<A> {
    /// Creates an event with no subscribers
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            subscribers: Rc::new(RefCell::new(Subscribers {
                next_id: 0,
                callbacks: IndexMap::new(),
            })),
        }
    }

    /// Name of the occurrence, used in diagnostics
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Registers a callback; it runs after every callback registered before it
    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(WindowId, &A) + 'static,
    {
        let mut subscribers = self.subscribers.borrow_mut();
        let id = SubscriptionId(subscribers.next_id);
        subscribers.next_id += 1;
        subscribers.callbacks.insert(id, Rc::new(callback));
        id
    }

    /// Removes a callback. Returns false if it was not subscribed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        // shift_remove keeps the remaining callbacks in registration order
        self.subscribers
            .borrow_mut()
            .callbacks
            .shift_remove(&id)
            .is_some()
    }

    /// A handle that does not keep the subscriber list alive
    pub fn downgrade(&self) -> WeakEvent<A> {
        WeakEvent {
            name: self.name,
            subscribers: Rc::downgrade(&self.subscribers),
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.borrow().callbacks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscriber_count() == 0
    }

    /// Invokes every callback registered at the moment of the call, in order
    pub fn fire(&self, sender: WindowId, args: &A) {
        let snapshot: Vec<Callback<A>> = self
            .subscribers
            .borrow()
            .callbacks
            .values()
            .cloned()
            .collect();

        for callback in snapshot {
            callback(sender, args);
        }
    }
}

impl<A> Clone for Event<A> {
    fn clone(&self) -> Self {
        Self {
            name: self.name,
            subscribers: Rc::clone(&self.subscribers),
        }
    }
}

impl<A> fmt::Debug for Event<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Event")
            .field("name", &self.name)
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

/// Non-owning handle to an [`Event`], safe to capture in its callbacks
pub struct WeakEvent<A> {
    name: &'static str,
    subscribers: Weak<RefCell<Subscribers<A>>>,
}

impl<A> WeakEvent<A> {
    /// Returns the event if any strong handle is still alive
    pub fn upgrade(&self) -> Option<Event<A>> {
        self.subscribers.upgrade().map(|subscribers| Event {
            name: self.name,
            subscribers,
        })
    }
}

impl<A> Clone for WeakEvent<A> {
    fn clone(&self) -> Self {
        Self {
            name: self.name,
            subscribers: Weak::clone(&self.subscribers),
        }
    }
}

impl<A> fmt::Debug for WeakEvent<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeakEvent")
            .field("name", &self.name)
            .field("alive", &(self.subscribers.strong_count() > 0))
            .finish()
    }
}

/// Payload of the `closing` event. Any subscriber may veto the close.
#[derive(Debug, Default)]
pub struct CancelEventArgs {
    cancel: Cell<bool>,
}

impl CancelEventArgs {
    /// Requests that the close be aborted
    pub fn cancel(&self) {
        self.cancel.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.get()
    }
}

/// One broadcaster per window occurrence
///
/// Clones share every subscriber list. Capturing a clone inside one of its own
/// callbacks forms an `Rc` cycle; capture a [`WeakEvent`] instead.
#[derive(Debug, Clone)]
pub struct WindowEvents {
    pub moved: Event<()>,
    pub resized: Event<()>,
    pub closing: Event<CancelEventArgs>,
    pub closed: Event<()>,
    pub disposed: Event<()>,
    pub icon_changed: Event<()>,
    pub title_changed: Event<()>,
    pub visible_changed: Event<()>,
    pub focused_changed: Event<()>,
    pub window_border_changed: Event<()>,
    pub window_state_changed: Event<()>,
    pub key_down: Event<KeyboardKeyEventArgs>,
    pub key_press: Event<KeyPressEventArgs>,
    pub key_up: Event<KeyboardKeyEventArgs>,
    pub mouse_enter: Event<()>,
    pub mouse_leave: Event<()>,
    pub mouse_down: Event<MouseButtonEventArgs>,
    pub mouse_up: Event<MouseButtonEventArgs>,
    pub mouse_move: Event<MouseMoveEventArgs>,
    pub mouse_wheel: Event<MouseWheelEventArgs>,
}

impl WindowEvents {
    /// Creates the full set with no subscribers anywhere
    pub fn new() -> Self {
        Self {
            moved: Event::new("moved"),
            resized: Event::new("resized"),
            closing: Event::new("closing"),
            closed: Event::new("closed"),
            disposed: Event::new("disposed"),
            icon_changed: Event::new("icon_changed"),
            title_changed: Event::new("title_changed"),
            visible_changed: Event::new("visible_changed"),
            focused_changed: Event::new("focused_changed"),
            window_border_changed: Event::new("window_border_changed"),
            window_state_changed: Event::new("window_state_changed"),
            key_down: Event::new("key_down"),
            key_press: Event::new("key_press"),
            key_up: Event::new("key_up"),
            mouse_enter: Event::new("mouse_enter"),
            mouse_leave: Event::new("mouse_leave"),
            mouse_down: Event::new("mouse_down"),
            mouse_up: Event::new("mouse_up"),
            mouse_move: Event::new("mouse_move"),
            mouse_wheel: Event::new("mouse_wheel"),
        }
    }
}

impl Default for WindowEvents {
    fn default() -> Self {
        Self::new()
    }
}
