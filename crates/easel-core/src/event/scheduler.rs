use std::collections::{HashMap, VecDeque};
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::event::error::{Result, SchedulerError};
use crate::event::{Event, EventResult, ListenerId, Priority};

/// Listener callback invoked with each dispatched event.
pub type ListenerFn = dyn Fn(&dyn Event) -> EventResult + Send + Sync;

//--------------------------------------------------
// EventScheduler (single-owner registry)
//--------------------------------------------------

/// One registration: the listener plus its ordering metadata.
struct Entry {
    id: ListenerId,
    priority: Priority,
    once: bool,
    listener: Arc<ListenerFn>,
}

/// Per-entry view captured at dispatch start. Holding the `Arc` keeps the
/// listener alive even if the registry entry is removed mid-pass.
struct Snapshot {
    id: ListenerId,
    once: bool,
    listener: Arc<ListenerFn>,
}

/// Priority event scheduler for ordering draw listeners.
///
/// Each per-event entry list is kept sorted by ascending priority at all
/// times; equal priorities keep registration order. `dispatch` iterates a
/// snapshot of that list, so the registry can never be invalidated by a
/// listener mid-pass.
pub struct EventScheduler {
    listeners: HashMap<&'static str, Vec<Entry>>,
    next_listener_id: ListenerId,
    pending: VecDeque<Box<dyn Event>>,
}

// Manual Debug implementation for EventScheduler
impl fmt::Debug for EventScheduler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let listener_count: usize = self.listeners.values().map(|v| v.len()).sum();
        f.debug_struct("EventScheduler")
            .field("listener_count", &listener_count)
            .field("next_listener_id", &self.next_listener_id)
            .field("pending_events", &self.pending.len())
            .finish()
    }
}

impl EventScheduler {
    pub fn new() -> Self {
        Self {
            listeners: HashMap::new(),
            next_listener_id: 1,
            pending: VecDeque::new(),
        }
    }

    /// Register `listener` to run on every dispatch of `event_name`.
    ///
    /// Registering the same callback twice creates two independent
    /// entries; both run.
    pub fn on<F>(&mut self, event_name: &'static str, priority: Priority, listener: F) -> ListenerId
    where
        F: Fn(&dyn Event) -> EventResult + Send + Sync + 'static,
    {
        self.insert(event_name, priority, false, Arc::new(listener))
    }

    /// Register `listener` to run on the next dispatch of `event_name`
    /// only; the entry is pruned after its first invocation.
    pub fn once<F>(
        &mut self,
        event_name: &'static str,
        priority: Priority,
        listener: F,
    ) -> ListenerId
    where
        F: Fn(&dyn Event) -> EventResult + Send + Sync + 'static,
    {
        self.insert(event_name, priority, true, Arc::new(listener))
    }

    pub(crate) fn on_boxed(
        &mut self,
        event_name: &'static str,
        priority: Priority,
        listener: Box<ListenerFn>,
    ) -> ListenerId {
        self.insert(event_name, priority, false, Arc::from(listener))
    }

    pub(crate) fn once_boxed(
        &mut self,
        event_name: &'static str,
        priority: Priority,
        listener: Box<ListenerFn>,
    ) -> ListenerId {
        self.insert(event_name, priority, true, Arc::from(listener))
    }

    fn insert(
        &mut self,
        event_name: &'static str,
        priority: Priority,
        once: bool,
        listener: Arc<ListenerFn>,
    ) -> ListenerId {
        let id = self.next_listener_id;
        self.next_listener_id += 1;
        let entries = self.listeners.entry(event_name).or_default();
        // Insert after all entries with priority <= new: the list stays
        // sorted and equal priorities keep registration order.
        let at = entries.partition_point(|e| e.priority <= priority);
        entries.insert(
            at,
            Entry {
                id,
                priority,
                once,
                listener,
            },
        );
        log::trace!(
            "registered listener {} for '{}' at priority {:?} (once: {})",
            id,
            event_name,
            priority,
            once
        );
        id
    }

    /// Remove the registration `id` under `event_name`.
    ///
    /// Returns `false` when nothing matched; removing an unknown listener
    /// is a silent no-op.
    pub fn off(&mut self, event_name: &str, id: ListenerId) -> bool {
        let Some(entries) = self.listeners.get_mut(event_name) else {
            return false;
        };
        let len_before = entries.len();
        entries.retain(|e| e.id != id);
        let removed = entries.len() < len_before;
        if removed {
            log::trace!("removed listener {} from '{}'", id, event_name);
        }
        removed
    }

    /// Synchronously invoke every listener registered for the event, in
    /// ascending priority order, passing the event through unchanged.
    ///
    /// A listener returning [`EventResult::Stop`] halts the remaining
    /// listeners of this pass. `once` entries that fired (including one
    /// that returned `Stop`) are pruned before this returns; `once`
    /// entries never reached stay registered. Dispatching an event with
    /// no listeners is a no-op returning `Continue`.
    pub fn dispatch(&mut self, event: &dyn Event) -> EventResult {
        let snapshot = self.snapshot(event.name());
        if snapshot.is_empty() {
            return EventResult::Continue;
        }
        log::trace!(
            "dispatching '{}' to {} listener(s)",
            event.name(),
            snapshot.len()
        );
        let (result, fired) = run_snapshot(event, &snapshot);
        self.prune_fired(event.name(), &fired);
        result
    }

    /// Queue an event for a later [`process_queue`](Self::process_queue)
    /// flush. A pending event with the same name is replaced in place:
    /// the queue position of the first request is kept, the payload of
    /// the latest wins.
    pub fn queue_event(&mut self, event: Box<dyn Event>) {
        if let Some(pending) = self.pending.iter_mut().find(|p| p.name() == event.name()) {
            log::debug!("coalescing pending '{}' event", event.name());
            *pending = event;
        } else {
            self.pending.push_back(event);
        }
    }

    /// Dispatch every pending event and return how many were dispatched.
    ///
    /// The pending list is taken up front; events queued by listeners
    /// during the flush wait for the next flush.
    pub fn process_queue(&mut self) -> usize {
        let pending = self.take_pending();
        let count = pending.len();
        for event in pending {
            self.dispatch(event.as_ref());
        }
        count
    }

    pub fn queue_size(&self) -> usize {
        self.pending.len()
    }

    /// Number of registrations currently held under `event_name`.
    pub fn listener_count(&self, event_name: &str) -> usize {
        self.listeners.get(event_name).map_or(0, Vec::len)
    }

    fn snapshot(&self, event_name: &str) -> Vec<Snapshot> {
        self.listeners
            .get(event_name)
            .map(|entries| {
                entries
                    .iter()
                    .map(|e| Snapshot {
                        id: e.id,
                        once: e.once,
                        listener: Arc::clone(&e.listener),
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    fn prune_fired(&mut self, event_name: &str, fired: &[ListenerId]) {
        if fired.is_empty() {
            return;
        }
        if let Some(entries) = self.listeners.get_mut(event_name) {
            entries.retain(|e| !(e.once && fired.contains(&e.id)));
        }
    }

    fn take_pending(&mut self) -> VecDeque<Box<dyn Event>> {
        std::mem::take(&mut self.pending)
    }
}

impl Default for EventScheduler {
    fn default() -> Self {
        Self::new()
    }
}

/// Run one dispatch pass over a snapshot, returning the pass result and
/// the ids that actually fired.
fn run_snapshot(event: &dyn Event, snapshot: &[Snapshot]) -> (EventResult, Vec<ListenerId>) {
    let mut fired = Vec::with_capacity(snapshot.len());
    for entry in snapshot {
        fired.push(entry.id);
        if (entry.listener)(event) == EventResult::Stop {
            return (EventResult::Stop, fired);
        }
    }
    (EventResult::Continue, fired)
}

//--------------------------------------------------
// SharedEventScheduler (cloneable, lock-protected handle)
//--------------------------------------------------

/// Thread-safe shared scheduler handle. Clones share one registry.
///
/// `dispatch` snapshots the listener list under the lock, releases the
/// lock before invoking anything, then re-locks to prune fired `once`
/// entries. A listener holding a clone of this handle may therefore call
/// `on`/`once`/`off` mid-dispatch without deadlocking; such calls affect
/// only future dispatches, never the in-flight pass.
#[derive(Clone)]
pub struct SharedEventScheduler {
    inner: Arc<Mutex<EventScheduler>>,
}

// Manual Debug impl for SharedEventScheduler
impl fmt::Debug for SharedEventScheduler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedEventScheduler").finish_non_exhaustive()
    }
}

impl SharedEventScheduler {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(EventScheduler::new())),
        }
    }

    fn lock(&self, operation: &'static str) -> Result<MutexGuard<'_, EventScheduler>> {
        self.inner
            .lock()
            .map_err(|_| SchedulerError::LockPoisoned { operation })
    }

    pub fn on<F>(
        &self,
        event_name: &'static str,
        priority: Priority,
        listener: F,
    ) -> Result<ListenerId>
    where
        F: Fn(&dyn Event) -> EventResult + Send + Sync + 'static,
    {
        Ok(self.lock("on")?.on(event_name, priority, listener))
    }

    pub fn once<F>(
        &self,
        event_name: &'static str,
        priority: Priority,
        listener: F,
    ) -> Result<ListenerId>
    where
        F: Fn(&dyn Event) -> EventResult + Send + Sync + 'static,
    {
        Ok(self.lock("once")?.once(event_name, priority, listener))
    }

    pub fn on_boxed(
        &self,
        event_name: &'static str,
        priority: Priority,
        listener: Box<ListenerFn>,
    ) -> Result<ListenerId> {
        Ok(self.lock("on")?.on_boxed(event_name, priority, listener))
    }

    pub fn once_boxed(
        &self,
        event_name: &'static str,
        priority: Priority,
        listener: Box<ListenerFn>,
    ) -> Result<ListenerId> {
        Ok(self.lock("once")?.once_boxed(event_name, priority, listener))
    }

    pub fn off(&self, event_name: &str, id: ListenerId) -> Result<bool> {
        Ok(self.lock("off")?.off(event_name, id))
    }

    pub fn dispatch(&self, event: &dyn Event) -> Result<EventResult> {
        let snapshot = self.lock("dispatch")?.snapshot(event.name());
        if snapshot.is_empty() {
            return Ok(EventResult::Continue);
        }
        log::trace!(
            "dispatching '{}' to {} listener(s)",
            event.name(),
            snapshot.len()
        );
        // Listeners run with the lock released.
        let (result, fired) = run_snapshot(event, &snapshot);
        self.lock("dispatch")?.prune_fired(event.name(), &fired);
        Ok(result)
    }

    pub fn queue_event(&self, event: Box<dyn Event>) -> Result<()> {
        self.lock("queue_event")?.queue_event(event);
        Ok(())
    }

    pub fn process_queue(&self) -> Result<usize> {
        let pending = self.lock("process_queue")?.take_pending();
        let count = pending.len();
        for event in pending {
            self.dispatch(event.as_ref())?;
        }
        Ok(count)
    }

    pub fn queue_size(&self) -> Result<usize> {
        Ok(self.lock("queue_size")?.queue_size())
    }

    pub fn listener_count(&self, event_name: &str) -> Result<usize> {
        Ok(self.lock("listener_count")?.listener_count(event_name))
    }
}

impl Default for SharedEventScheduler {
    fn default() -> Self {
        Self::new()
    }
}

//--------------------------------------------------
// Helper Functions
//--------------------------------------------------

/// Create a new shared scheduler instance
pub fn create_scheduler() -> SharedEventScheduler {
    SharedEventScheduler::new()
}

/// Lift a callback that does not care about propagation into a listener
/// that always continues the pass.
pub fn continuing<F>(f: F) -> Box<ListenerFn>
where
    F: Fn(&dyn Event) + Send + Sync + 'static,
{
    Box::new(move |event: &dyn Event| {
        f(event);
        EventResult::Continue
    })
}

/// Lift a typed callback into a listener that downcasts the event and
/// silently continues on a type mismatch.
pub fn typed<E, F>(f: F) -> Box<ListenerFn>
where
    E: Event + 'static,
    F: Fn(&E) -> EventResult + Send + Sync + 'static,
{
    Box::new(
        move |event: &dyn Event| match event.as_any().downcast_ref::<E>() {
            Some(e) => f(e),
            None => EventResult::Continue,
        },
    )
}
