pub mod error;
pub mod manager;
pub mod scheduler;
pub mod types;

use std::any::Any;
use std::fmt;

/// Type for listener registration handles
pub type ListenerId = u64;

/// Draw-order priority for a registered listener.
///
/// Lower values run earlier within a dispatch pass. Listeners sharing a
/// priority run in registration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Priority(pub i32);

impl Priority {
    /// Priority used when the caller does not care about ordering.
    pub const DEFAULT: Priority = Priority(0);
}

/// Result of listener processing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was processed successfully and propagation should continue
    Continue,
    /// Event was processed and propagation should stop
    Stop,
}

/// Core event trait
///
/// An event value bundles the routing name and the payload: the scheduler
/// routes on [`Event::name`], listeners recover the concrete payload via
/// [`Event::as_any`].
pub trait Event: Any + fmt::Debug + Send + Sync {
    /// Get the name of this event
    fn name(&self) -> &'static str;

    /// Cast to Any for downcasting
    fn as_any(&self) -> &dyn Any;
}

/// Re-export important types
pub use manager::{BoxedEvent, DefaultEventManager, EventManager};
pub use scheduler::{create_scheduler, EventScheduler, ListenerFn, SharedEventScheduler};
pub use types::{InteractionEvent, Layer, RenderEvent};

// Test module declaration
#[cfg(test)]
mod tests;
