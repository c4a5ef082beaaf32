#[cfg(test)]
mod types_tests;

#[cfg(test)]
mod tests {
    use crate::event::Priority;

    #[test]
    fn test_priority_default() {
        assert_eq!(Priority::default(), Priority(0));
        assert_eq!(Priority::default(), Priority::DEFAULT);
    }

    #[test]
    fn test_priority_ordering() {
        assert!(Priority(-1) < Priority(0));
        assert!(Priority(0) < Priority(1));
        assert!(Priority(1) < Priority(10));
    }

    #[test]
    fn test_event_dispatch() {
        use std::sync::{Arc, Mutex};

        use crate::event::manager::{DefaultEventManager, EventManager};
        use crate::event::types::RenderEvent;
        use crate::event::{Event, EventResult, Priority};

        let event_manager = DefaultEventManager::new();
        let called = Arc::new(Mutex::new(false));
        let called_clone = called.clone();

        event_manager
            .subscribe("draw", Priority::DEFAULT, move |_event: &dyn Event| {
                let mut called = called_clone.lock().unwrap();
                *called = true;
                EventResult::Continue
            })
            .unwrap();

        let event = RenderEvent::RedrawRequested {
            reason: "initial".to_string(),
        };
        event_manager.dispatch(&event).unwrap();

        assert!(*called.lock().unwrap(), "Listener should have been called");
    }
}
