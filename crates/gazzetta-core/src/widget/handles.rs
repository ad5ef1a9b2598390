//! Manipulation handles for the selected widget.

use kurbo::Point;

use super::Widget;

/// Handle hit tolerance in pixels.
pub const HANDLE_HIT_TOLERANCE: f64 = 16.0;
/// Distance from the widget's top edge to the rotation handle.
pub const ROTATE_HANDLE_OFFSET: f64 = 25.0;

/// The kind of handle. Determines what the press does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandleKind {
    /// Bottom-right corner: dragging it resizes the widget.
    Resize,
    /// Above top-center: clicking it steps rotation by 45°.
    Rotate,
}

/// A handle with its position in overlay coordinates.
#[derive(Debug, Clone, Copy)]
pub struct Handle {
    pub kind: HandleKind,
    pub position: Point,
}

impl Handle {
    pub fn new(kind: HandleKind, position: Point) -> Self {
        Self { kind, position }
    }

    /// Distance-based hit test.
    pub fn hit_test(&self, point: Point, tolerance: f64) -> bool {
        let dx = point.x - self.position.x;
        let dy = point.y - self.position.y;
        dx * dx + dy * dy <= tolerance * tolerance
    }
}

/// Handles for a widget, positioned on its rotated bounds.
///
/// Only the selected widget displays handles; callers are expected to ask
/// for them only when the widget is selected.
pub fn handles_for(widget: &Widget) -> Vec<Handle> {
    let t = &widget.transform;
    let center = t.center();
    let half_w = t.width / 2.0;
    let half_h = t.height / 2.0;
    let theta = t.rotation.to_radians();
    let (sin, cos) = theta.sin_cos();

    let rotate_point = |dx: f64, dy: f64| -> Point {
        Point::new(
            center.x + dx * cos - dy * sin,
            center.y + dx * sin + dy * cos,
        )
    };

    vec![
        Handle::new(HandleKind::Resize, rotate_point(half_w, half_h)),
        Handle::new(
            HandleKind::Rotate,
            rotate_point(0.0, -half_h - ROTATE_HANDLE_OFFSET),
        ),
    ]
}

/// Find which handle (if any) is hit at the given point.
pub fn hit_test_handles(widget: &Widget, point: Point, tolerance: f64) -> Option<HandleKind> {
    handles_for(widget)
        .into_iter()
        .find(|h| h.hit_test(point, tolerance))
        .map(|h| h.kind)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::{Transform, WidgetKind};

    fn widget_at_origin() -> Widget {
        let mut t = Transform::default_at(100.0, 0.0);
        t.x = 0.0;
        t.y = 0.0;
        Widget::new(WidgetKind::Sticker, "⭐", t)
    }

    #[test]
    fn test_handle_positions_unrotated() {
        let widget = widget_at_origin();
        let handles = handles_for(&widget);

        assert_eq!(handles.len(), 2);
        assert_eq!(handles[0].kind, HandleKind::Resize);
        assert!((handles[0].position.x - 200.0).abs() < 1e-9);
        assert!((handles[0].position.y - 200.0).abs() < 1e-9);

        assert_eq!(handles[1].kind, HandleKind::Rotate);
        assert!((handles[1].position.x - 100.0).abs() < 1e-9);
        assert!((handles[1].position.y - (-ROTATE_HANDLE_OFFSET)).abs() < 1e-9);
    }

    #[test]
    fn test_handles_follow_rotation() {
        let mut widget = widget_at_origin();
        widget.transform.rotation = 180.0;
        let handles = handles_for(&widget);

        // Resize corner swings to the opposite side of the center.
        assert!((handles[0].position.x - 0.0).abs() < 1e-6);
        assert!((handles[0].position.y - 0.0).abs() < 1e-6);
        // Rotate handle ends up below the widget.
        assert!((handles[1].position.y - (200.0 + ROTATE_HANDLE_OFFSET)).abs() < 1e-6);
    }

    #[test]
    fn test_hit_test_tolerance() {
        let widget = widget_at_origin();

        assert_eq!(
            hit_test_handles(&widget, Point::new(205.0, 205.0), HANDLE_HIT_TOLERANCE),
            Some(HandleKind::Resize)
        );
        assert_eq!(
            hit_test_handles(&widget, Point::new(100.0, -ROTATE_HANDLE_OFFSET), HANDLE_HIT_TOLERANCE),
            Some(HandleKind::Rotate)
        );
        assert_eq!(
            hit_test_handles(&widget, Point::new(300.0, 300.0), HANDLE_HIT_TOLERANCE),
            None
        );
    }
}
