// Core library for the easel draw-scheduling engine
pub mod event;
pub mod utils;

// Re-export key public types/traits for easier use by embedding
// visualization components.
pub use event::error::SchedulerError;
pub use event::manager::{DefaultEventManager, EventManager};
pub use event::scheduler::{EventScheduler, SharedEventScheduler};
pub use event::types::{InteractionEvent, Layer, RenderEvent};
pub use event::{Event, EventResult, ListenerId, Priority};
