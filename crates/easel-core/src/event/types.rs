use std::any::Any;

use crate::event::{Event, Priority};

/// Render-loop events emitted by the visualization that owns the scheduler
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RenderEvent {
    /// A redraw of the scene is needed
    RedrawRequested { reason: String },
    /// The canvas was resized
    Resize { width: u32, height: u32 },
    /// The zoom level changed
    ZoomChanged { scale: f64 },
    /// The viewport was panned
    PanChanged { offset_x: f64, offset_y: f64 },
}

impl Event for RenderEvent {
    fn name(&self) -> &'static str {
        match self {
            RenderEvent::RedrawRequested { .. } => "draw",
            RenderEvent::Resize { .. } => "resize",
            RenderEvent::ZoomChanged { .. } => "zoom",
            RenderEvent::PanChanged { .. } => "pan",
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Pointer and selection events over the rendered trace
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InteractionEvent {
    /// A span was selected
    SpanSelected { span_id: u64 },
    /// The current selection was cleared
    SelectionCleared,
    /// The cursor moved over the canvas
    CursorMoved { x: f64, y: f64 },
}

impl Event for InteractionEvent {
    fn name(&self) -> &'static str {
        match self {
            InteractionEvent::SpanSelected { .. } => "span.select",
            InteractionEvent::SelectionCleared => "span.clear",
            InteractionEvent::CursorMoved { .. } => "cursor.move",
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Draw layers of the trace scene, back to front
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Layer {
    /// Canvas fill behind everything else
    Background,
    /// Time grid and tick lines
    Grid,
    /// The trace spans themselves
    Spans,
    /// Labels and markers attached to spans
    Annotations,
    /// Hover highlights and selection rectangles
    Overlay,
    /// The cursor crosshair, always on top
    Cursor,
}

impl Layer {
    /// All layers, back to front.
    pub const ALL: [Layer; 6] = [
        Layer::Background,
        Layer::Grid,
        Layer::Spans,
        Layer::Annotations,
        Layer::Overlay,
        Layer::Cursor,
    ];

    /// Scheduler priority for draw listeners on this layer.
    ///
    /// Values are spaced so custom listeners can slot between layers.
    pub fn priority(self) -> Priority {
        match self {
            Layer::Background => Priority(0),
            Layer::Grid => Priority(10),
            Layer::Spans => Priority(20),
            Layer::Annotations => Priority(30),
            Layer::Overlay => Priority(40),
            Layer::Cursor => Priority(50),
        }
    }
}
