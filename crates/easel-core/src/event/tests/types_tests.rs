use crate::event::types::{InteractionEvent, Layer, RenderEvent};
use crate::event::{Event, Priority};

#[test]
fn test_render_event_names() {
    let events: Vec<(RenderEvent, &'static str)> = vec![
        (
            RenderEvent::RedrawRequested {
                reason: "test".to_string(),
            },
            "draw",
        ),
        (
            RenderEvent::Resize {
                width: 800,
                height: 600,
            },
            "resize",
        ),
        (RenderEvent::ZoomChanged { scale: 2.0 }, "zoom"),
        (
            RenderEvent::PanChanged {
                offset_x: 4.0,
                offset_y: -2.0,
            },
            "pan",
        ),
    ];

    for (event, name) in events {
        assert_eq!(event.name(), name);
    }
}

#[test]
fn test_interaction_event_names() {
    let events: Vec<(InteractionEvent, &'static str)> = vec![
        (InteractionEvent::SpanSelected { span_id: 7 }, "span.select"),
        (InteractionEvent::SelectionCleared, "span.clear"),
        (InteractionEvent::CursorMoved { x: 1.0, y: 2.0 }, "cursor.move"),
    ];

    for (event, name) in events {
        assert_eq!(event.name(), name);
    }
}

#[test]
fn test_render_event_downcast() {
    let event = RenderEvent::Resize {
        width: 1920,
        height: 1080,
    };

    let any = event.as_any();
    let downcasted = any.downcast_ref::<RenderEvent>();
    assert!(downcasted.is_some());
    if let Some(RenderEvent::Resize { width, height }) = downcasted {
        assert_eq!(*width, 1920);
        assert_eq!(*height, 1080);
    } else {
        panic!("Expected RenderEvent::Resize variant");
    }

    // Downcasting to the wrong concrete type fails
    assert!(any.downcast_ref::<InteractionEvent>().is_none());
}

#[test]
fn test_layer_priorities_are_back_to_front() {
    for pair in Layer::ALL.windows(2) {
        assert!(
            pair[0].priority() < pair[1].priority(),
            "{:?} must draw before {:?}",
            pair[0],
            pair[1]
        );
    }
    assert_eq!(Layer::Background.priority(), Priority(0));
    assert_eq!(Layer::Cursor.priority(), Priority(50));
}

#[test]
fn test_layer_priorities_leave_room_for_custom_listeners() {
    for pair in Layer::ALL.windows(2) {
        let gap = pair[1].priority().0 - pair[0].priority().0;
        assert!(gap > 1, "Adjacent layers must leave priority gaps");
    }
}
