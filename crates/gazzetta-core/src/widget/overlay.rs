//! Overlay-level interaction state: selection, caption editing, gestures.
//!
//! Selection is tracked here by id, outside the widget collection itself, so
//! widget data stays pure and the single-selection invariant holds by
//! construction.

use super::{GestureKind, GestureState, Widget, WidgetId};
use kurbo::Point;

/// Runtime state of the widget overlay. Not persisted.
#[derive(Debug, Clone, Default)]
pub struct OverlayState {
    /// The one selected widget, if any.
    selected: Option<WidgetId>,
    /// Widget whose caption is being edited inline, if any.
    editing: Option<WidgetId>,
    /// The active drag/resize gesture, if any.
    gesture: Option<GestureState>,
}

impl OverlayState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The selected widget's id.
    pub fn selected(&self) -> Option<WidgetId> {
        self.selected
    }

    /// The widget in caption-edit mode.
    pub fn editing(&self) -> Option<WidgetId> {
        self.editing
    }

    /// The gesture in progress.
    pub fn gesture(&self) -> Option<&GestureState> {
        self.gesture.as_ref()
    }

    pub fn is_selected(&self, id: WidgetId) -> bool {
        self.selected == Some(id)
    }

    /// Select a widget. Any previous selection is replaced; edit mode on a
    /// different widget ends.
    pub fn select(&mut self, id: WidgetId) {
        if self.editing != Some(id) {
            self.editing = None;
        }
        self.selected = Some(id);
    }

    /// Clear selection, edit mode and any gesture in progress.
    pub fn clear_selection(&mut self) {
        self.selected = None;
        self.editing = None;
        self.gesture = None;
    }

    /// Enter inline caption editing for a widget (also selects it).
    pub fn begin_editing(&mut self, id: WidgetId) {
        self.selected = Some(id);
        self.editing = Some(id);
    }

    /// Leave caption editing, keeping the selection.
    pub fn exit_editing(&mut self) {
        self.editing = None;
    }

    /// Start a drag or resize gesture. Replaces any gesture in progress.
    pub fn begin_gesture(&mut self, id: WidgetId, kind: GestureKind, pointer: Point, origin: super::Transform) {
        self.gesture = Some(GestureState::new(id, kind, pointer, origin));
    }

    /// Record a pointer move against the active gesture, returning the
    /// resolved transform to apply. `None` when no gesture is active.
    pub fn update_gesture(&mut self, pointer: Point) -> Option<(WidgetId, super::Transform)> {
        let gesture = self.gesture.as_mut()?;
        gesture.update(pointer);
        Some((gesture.widget_id, gesture.resolve()))
    }

    /// End the active gesture (pointer up).
    pub fn end_gesture(&mut self) {
        self.gesture = None;
    }

    /// Drop any gesture in progress without reverting what it already
    /// applied. Used on window blur or visibility loss so no drag sticks.
    pub fn cancel_gesture(&mut self) {
        self.gesture = None;
    }

    /// Forget all state referring to a removed widget.
    pub fn forget(&mut self, id: WidgetId) {
        if self.selected == Some(id) {
            self.selected = None;
        }
        if self.editing == Some(id) {
            self.editing = None;
        }
        if self.gesture.as_ref().is_some_and(|g| g.widget_id == id) {
            self.gesture = None;
        }
    }
}

/// Widgets in paint order: stable z-index sort, with the selected widget
/// moved on top while it stays selected. Its stored z-index is untouched, so
/// deselecting reverts it to z-determined order.
pub fn paint_order<'a>(widgets: &'a [Widget], selected: Option<WidgetId>) -> Vec<&'a Widget> {
    let mut order: Vec<&Widget> = widgets.iter().collect();
    order.sort_by_key(|w| w.transform.z_index);
    if let Some(id) = selected {
        if let Some(pos) = order.iter().position(|w| w.id == id) {
            let widget = order.remove(pos);
            order.push(widget);
        }
    }
    order
}
