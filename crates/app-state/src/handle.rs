//! Observable state handles
//!
//! A [`StateHandle`] owns one piece of ephemeral view state. Owners keep the
//! handle and pass children either the current value or a [`Setter`], so
//! every write goes through exactly one channel and every reader can
//! subscribe to changes.
//!
//! # Example
//!
//! ```rust
//! use app_state::StateHandle;
//!
//! let dark_theme = StateHandle::new(false);
//! let set_dark_theme = dark_theme.setter();
//!
//! let mut rx = dark_theme.subscribe();
//! assert!(set_dark_theme.set(true));
//! assert!(rx.has_changed().unwrap());
//! assert!(dark_theme.get());
//! ```

use std::fmt;
use std::sync::Arc;
use tokio::sync::watch;

/// Owned, observable piece of view state
///
/// Cloning a handle yields another reference to the same value.
pub struct StateHandle<T> {
    tx: Arc<watch::Sender<T>>,
}

impl<T> Clone for StateHandle<T> {
    fn clone(&self) -> Self {
        Self {
            tx: Arc::clone(&self.tx),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for StateHandle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateHandle")
            .field("value", &*self.tx.borrow())
            .finish()
    }
}

impl<T: Clone + PartialEq> StateHandle<T> {
    /// Create a new handle holding `initial`
    pub fn new(initial: T) -> Self {
        let (tx, _) = watch::channel(initial);
        Self { tx: Arc::new(tx) }
    }

    /// Get a copy of the current value
    pub fn get(&self) -> T {
        self.tx.borrow().clone()
    }

    /// Read the current value without cloning it
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.tx.borrow())
    }

    /// Replace the value
    ///
    /// Returns `true` if the value changed. Writing an equal value does not
    /// notify subscribers.
    pub fn set(&self, value: T) -> bool {
        set_if_changed(&self.tx, value)
    }

    /// Derive the next value from the current one
    pub fn update(&self, f: impl FnOnce(&T) -> T) -> bool {
        let next = f(&self.tx.borrow());
        self.set(next)
    }

    /// Get the write-only half of this handle
    pub fn setter(&self) -> Setter<T> {
        Setter {
            tx: Arc::clone(&self.tx),
        }
    }

    /// Subscribe to changes
    ///
    /// The receiver starts with the current value marked as seen.
    pub fn subscribe(&self) -> watch::Receiver<T> {
        self.tx.subscribe()
    }
}

impl<T: Clone + PartialEq + Default> Default for StateHandle<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

/// Write-only view of a [`StateHandle`]
pub struct Setter<T> {
    tx: Arc<watch::Sender<T>>,
}

impl<T> Clone for Setter<T> {
    fn clone(&self) -> Self {
        Self {
            tx: Arc::clone(&self.tx),
        }
    }
}

impl<T> fmt::Debug for Setter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Setter")
            .field("subscribers", &self.tx.receiver_count())
            .finish()
    }
}

impl<T: PartialEq> Setter<T> {
    /// Write a new value, returning whether it changed
    pub fn set(&self, value: T) -> bool {
        set_if_changed(&self.tx, value)
    }
}

fn set_if_changed<T: PartialEq>(tx: &watch::Sender<T>, value: T) -> bool {
    tx.send_if_modified(move |current| {
        if *current == value {
            false
        } else {
            *current = value;
            true
        }
    })
}
