//! Callback abstraction for slider notifications
//!
//! Instead of writing `Option<Box<dyn Fn(T) -> M>>` for every notification,
//! the widget stores a `Callback<T, M>` and asks it for a message.
//!
//! # Examples
//!
//! ```
//! use multislider::Callback;
//!
//! enum Message {
//!     Moved(Vec<f32>),
//! }
//!
//! let on_change = Callback::new(Message::Moved);
//! assert!(matches!(on_change.call(vec![0.5]), Some(Message::Moved(_))));
//! assert!(Callback::<Vec<f32>, Message>::none().call(vec![0.5]).is_none());
//! ```

use std::fmt;

/// A callback wrapper that encapsulates optional event handlers.
///
/// # Type Parameters
///
/// - `T`: The input type for the callback (here: the updated value list)
/// - `M`: The message type returned by the callback
pub struct Callback<T, M> {
    f: Option<Box<dyn Fn(T) -> M>>,
}

impl<T, M> Callback<T, M> {
    /// Create a new callback from a function.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(T) -> M + 'static,
    {
        Self {
            f: Some(Box::new(f)),
        }
    }

    /// Create an empty callback (no handler).
    pub fn none() -> Self {
        Self { f: None }
    }

    /// Call the callback with a value, if it exists.
    ///
    /// Returns `Some(message)` if the callback is set, or `None` if no callback is registered.
    pub fn call(&self, value: T) -> Option<M> {
        self.f.as_ref().map(|f| f(value))
    }

    /// Check if the callback is set.
    pub fn is_some(&self) -> bool {
        self.f.is_some()
    }

    /// Check if the callback is not set.
    pub fn is_none(&self) -> bool {
        self.f.is_none()
    }
}

impl<T, M> Default for Callback<T, M> {
    fn default() -> Self {
        Self::none()
    }
}

impl<T, M> fmt::Debug for Callback<T, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callback")
            .field("set", &self.is_some())
            .finish()
    }
}
