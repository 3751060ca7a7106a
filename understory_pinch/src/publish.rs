// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Single-writer, multi-reader published value.
//!
//! [`StateCell`] holds the latest value and a revision counter. Readers may
//! either poll ([`StateCell::get`] + [`StateCell::revision`]) or register a
//! callback with [`StateCell::subscribe`]. Every write replaces the value
//! wholesale; writing an equal value is a no-op.
//!
//! ## Minimal example
//!
//! ```
//! use understory_pinch::StateCell;
//!
//! let mut cell = StateCell::new(1_u32);
//! let seen = std::rc::Rc::new(std::cell::Cell::new(0));
//! let sink = seen.clone();
//! let id = cell.subscribe(move |v: &u32| sink.set(*v));
//!
//! assert!(cell.set(5));
//! assert_eq!(seen.get(), 5);
//! assert_eq!(cell.revision(), 1);
//!
//! // Same value: no revision bump, no notification.
//! assert!(!cell.set(5));
//! assert_eq!(cell.revision(), 1);
//!
//! assert!(cell.unsubscribe(id));
//! ```

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use crate::state::TransformState;

/// Handle returned by [`StateCell::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

type Subscriber<T> = Box<dyn FnMut(&T)>;

/// Latest-value cell with change notification.
pub struct StateCell<T = TransformState> {
    value: T,
    revision: u64,
    next_id: u64,
    subscribers: Vec<(SubscriptionId, Subscriber<T>)>,
}

impl<T: Clone + PartialEq> StateCell<T> {
    /// Creates a cell holding `value` at revision `0`.
    #[must_use]
    pub fn new(value: T) -> Self {
        Self {
            value,
            revision: 0,
            next_id: 0,
            subscribers: Vec::new(),
        }
    }

    /// Current value.
    #[must_use]
    pub fn get(&self) -> T {
        self.value.clone()
    }

    /// Borrows the current value.
    #[must_use]
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Number of changes since creation.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Replaces the value and notifies subscribers in subscription order.
    ///
    /// Returns `false`, without notifying, if `value` equals the current one.
    pub fn set(&mut self, value: T) -> bool {
        if self.value == value {
            return false;
        }
        self.value = value;
        self.revision = self.revision.wrapping_add(1);
        for (_, subscriber) in &mut self.subscribers {
            subscriber(&self.value);
        }
        true
    }

    /// Registers `f` to be called after every change.
    pub fn subscribe(&mut self, f: impl FnMut(&T) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, Box::new(f)));
        id
    }

    /// Removes a subscriber. Returns `false` if `id` was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() != before
    }

    /// Number of registered subscribers.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

impl<T: fmt::Debug> fmt::Debug for StateCell<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateCell")
            .field("value", &self.value)
            .field("revision", &self.revision)
            .field("subscribers", &self.subscribers.len())
            .finish_non_exhaustive()
    }
}
