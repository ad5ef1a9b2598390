//! Active pointer gesture state for widget drag and resize.

use kurbo::{Point, Vec2};

use super::{Transform, WidgetId};

/// The kind of gesture in progress. Drag and resize are mutually exclusive;
/// at most one gesture is active in the whole overlay at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureKind {
    /// Pointer-down on the widget body: moves the whole widget.
    Drag,
    /// Pointer-down on the resize handle: grows/shrinks the widget.
    Resize,
}

/// State of an active drag or resize gesture.
///
/// The resolved transform is always computed from the transform captured at
/// gesture start plus the total pointer delta, so a run of small moves lands
/// exactly where one large move would.
#[derive(Debug, Clone)]
pub struct GestureState {
    pub widget_id: WidgetId,
    pub kind: GestureKind,
    pub start_pointer: Point,
    pub current_pointer: Point,
    /// Transform captured when the gesture began.
    pub origin: Transform,
}

impl GestureState {
    /// Begin a gesture at the given pointer position.
    pub fn new(widget_id: WidgetId, kind: GestureKind, start: Point, origin: Transform) -> Self {
        Self {
            widget_id,
            kind,
            start_pointer: start,
            current_pointer: start,
            origin,
        }
    }

    /// Total pointer delta since the gesture began.
    pub fn delta(&self) -> Vec2 {
        Vec2::new(
            self.current_pointer.x - self.start_pointer.x,
            self.current_pointer.y - self.start_pointer.y,
        )
    }

    /// Record a pointer move.
    pub fn update(&mut self, pointer: Point) {
        self.current_pointer = pointer;
    }

    /// Transform implied by the current pointer position.
    pub fn resolve(&self) -> Transform {
        let delta = self.delta();
        let mut transform = self.origin;
        match self.kind {
            GestureKind::Drag => transform.translate(delta),
            GestureKind::Resize => {
                transform.resize_to(self.origin.width + delta.x, self.origin.height + delta.y);
            }
        }
        transform
    }
}
