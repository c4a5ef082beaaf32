use crate::event::error::Result;
use crate::event::scheduler::{self, ListenerFn, SharedEventScheduler};
use crate::event::{Event, EventResult, ListenerId, Priority};

/// Type alias for boxed event
pub type BoxedEvent = Box<dyn Event>;

/// Scheduler facade for the visualization component that owns it.
///
/// Dyn-safe: listener arguments are boxed. Generic conveniences live on
/// [`DefaultEventManager`] instead, since they cannot be on the dyn trait.
pub trait EventManager: Send + Sync {
    /// Register a repeating listener for events with the given name
    fn on(
        &self,
        event_name: &'static str,
        priority: Priority,
        listener: Box<ListenerFn>,
    ) -> Result<ListenerId>;

    /// Register a listener that fires on the next dispatch only
    fn once(
        &self,
        event_name: &'static str,
        priority: Priority,
        listener: Box<ListenerFn>,
    ) -> Result<ListenerId>;

    /// Remove a registration by its id
    fn off(&self, event_name: &str, id: ListenerId) -> Result<bool>;

    /// Dispatch an event synchronously
    fn dispatch(&self, event: &dyn Event) -> Result<EventResult>;

    /// Queue an event for a later flush, coalescing by event name
    fn queue_event(&self, event: BoxedEvent) -> Result<()>;

    /// Flush all pending events
    fn process_queue(&self) -> Result<usize>;
}

/// Default implementation of EventManager
#[derive(Clone, Debug)]
pub struct DefaultEventManager {
    name: &'static str,
    scheduler: SharedEventScheduler,
}

impl DefaultEventManager {
    /// Create a new default event manager with a shared scheduler
    pub fn new() -> Self {
        Self {
            name: "DefaultEventManager",
            scheduler: scheduler::create_scheduler(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Get a reference to the underlying shared scheduler
    pub fn scheduler(&self) -> &SharedEventScheduler {
        &self.scheduler
    }

    /// Register a repeating listener without boxing (Concrete Impl)
    pub fn subscribe<F>(
        &self,
        event_name: &'static str,
        priority: Priority,
        listener: F,
    ) -> Result<ListenerId>
    where
        F: Fn(&dyn Event) -> EventResult + Send + Sync + 'static,
    {
        self.scheduler.on(event_name, priority, listener)
    }

    /// Register a one-shot listener without boxing (Concrete Impl)
    pub fn subscribe_once<F>(
        &self,
        event_name: &'static str,
        priority: Priority,
        listener: F,
    ) -> Result<ListenerId>
    where
        F: Fn(&dyn Event) -> EventResult + Send + Sync + 'static,
    {
        self.scheduler.once(event_name, priority, listener)
    }
}

impl EventManager for DefaultEventManager {
    fn on(
        &self,
        event_name: &'static str,
        priority: Priority,
        listener: Box<ListenerFn>,
    ) -> Result<ListenerId> {
        self.scheduler.on_boxed(event_name, priority, listener)
    }

    fn once(
        &self,
        event_name: &'static str,
        priority: Priority,
        listener: Box<ListenerFn>,
    ) -> Result<ListenerId> {
        self.scheduler.once_boxed(event_name, priority, listener)
    }

    fn off(&self, event_name: &str, id: ListenerId) -> Result<bool> {
        self.scheduler.off(event_name, id)
    }

    fn dispatch(&self, event: &dyn Event) -> Result<EventResult> {
        self.scheduler.dispatch(event)
    }

    fn queue_event(&self, event: BoxedEvent) -> Result<()> {
        self.scheduler.queue_event(event)
    }

    fn process_queue(&self) -> Result<usize> {
        self.scheduler.process_queue()
    }
}

impl Default for DefaultEventManager {
    fn default() -> Self {
        Self::new()
    }
}
