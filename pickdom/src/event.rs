//! Activation dispatch types.
//!
//! Hosts resolve gestures (tap, click, key press) against the tree they
//! rendered and deliver them through [`Node::activate`](crate::Node::activate).
//! The types here carry the outcome of that delivery and the callbacks it
//! invokes.

use std::fmt;
use std::rc::Rc;

use thiserror::Error;

/// Result of delivering an activation gesture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventResult {
    /// Gesture was ignored, nothing was invoked.
    Ignored,
    /// Gesture was consumed and the handler ran.
    Consumed,
}

impl EventResult {
    /// Check if the gesture was handled.
    pub fn is_handled(&self) -> bool {
        !matches!(self, EventResult::Ignored)
    }
}

/// Error type for activation dispatch failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    /// The activated region has no handler wired. Controls never substitute
    /// a no-op handler, so this always points at a wiring bug upstream.
    #[error("activatable region has no activation handler")]
    NoHandler,

    /// No activatable region exists at the given tree-order index.
    #[error("no activatable region at index {0}")]
    NoSuchRegion(usize),
}

/// Callback invoked when an activatable region receives a gesture.
///
/// Cheap to clone; clones share the same underlying closure.
#[derive(Clone)]
pub struct ActivateHandler(Rc<dyn Fn()>);

impl ActivateHandler {
    pub fn new(handler: impl Fn() + 'static) -> Self {
        Self(Rc::new(handler))
    }

    /// Invoke the underlying closure once.
    pub fn invoke(&self) {
        (self.0)()
    }
}

impl fmt::Debug for ActivateHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ActivateHandler")
    }
}

/// Callback invoked with the value of the option whose control was
/// activated.
pub struct ChangeHandler<V>(Rc<dyn Fn(&V)>);

impl<V> ChangeHandler<V> {
    pub fn new(handler: impl Fn(&V) + 'static) -> Self {
        Self(Rc::new(handler))
    }

    pub fn invoke(&self, value: &V) {
        (self.0)(value)
    }
}

// Manual impls: deriving would add V bounds the shared Rc doesn't need.
impl<V> Clone for ChangeHandler<V> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<V> fmt::Debug for ChangeHandler<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ChangeHandler")
    }
}
