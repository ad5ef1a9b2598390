//! Editor controller: routes pointer input to the document and overlay.

use crate::block::{BlockId, BlockKind, ImageResizeState};
use crate::document::{NewspaperDocument, RegionRef};
use crate::widget::{
    GestureKind, HANDLE_HIT_TOLERANCE, HandleKind, OverlayState, TextStyle, Transform, Widget,
    WidgetId, WidgetKind, hit_test_handles, paint_order,
};
use kurbo::Point;

/// Runtime editor state wrapping the document being edited. Not persisted.
#[derive(Debug, Clone, Default)]
pub struct Editor {
    /// The document being edited.
    pub document: NewspaperDocument,
    /// Overlay selection/gesture state.
    pub overlay: OverlayState,
    /// Preview/print mode: edit affordances hidden, data path unchanged.
    pub preview: bool,
    /// Active image-height gesture, if any.
    image_resize: Option<ImageResizeState>,
}

impl Editor {
    /// Create an editor around an existing document.
    pub fn new(document: NewspaperDocument) -> Self {
        Self {
            document,
            overlay: OverlayState::new(),
            preview: false,
            image_resize: None,
        }
    }

    // --- widget operations ---

    /// Add a widget at the default position (horizontally centered, a fixed
    /// offset below the current scroll) and select it. Returns its id.
    pub fn add_widget(
        &mut self,
        kind: WidgetKind,
        content: impl Into<String>,
        center_x: f64,
        scroll_y: f64,
    ) -> WidgetId {
        let widget = Widget::new(kind, content, Transform::default_at(center_x, scroll_y));
        let id = self.document.add_widget(widget);
        self.overlay.select(id);
        id
    }

    /// Remove a widget, clearing selection if it was selected. Removing an
    /// unknown id is a no-op.
    pub fn remove_widget(&mut self, id: WidgetId) {
        self.document.remove_widget(id);
        self.overlay.forget(id);
    }

    /// Widgets in paint order for the current frame.
    pub fn widget_paint_order(&self) -> Vec<&Widget> {
        paint_order(&self.document.widgets, self.overlay.selected())
    }

    /// Rotate the selected widget by one 45° step.
    pub fn rotate_selected(&mut self) {
        if let Some(widget) = self.selected_widget_mut() {
            widget.rotate_step();
        }
    }

    /// Toggle the horizontal mirror of the selected widget.
    pub fn flip_selected(&mut self) {
        if let Some(widget) = self.selected_widget_mut() {
            widget.toggle_flip();
        }
    }

    /// Raise the selected widget one paint layer.
    pub fn bring_selected_forward(&mut self) {
        if let Some(widget) = self.selected_widget_mut() {
            widget.bring_forward();
        }
    }

    /// Set the caption of the selected widget. No-op unless text-bearing.
    pub fn set_selected_text(&mut self, text: impl Into<String>) {
        if let Some(widget) = self.selected_widget_mut() {
            widget.set_text(text);
        }
    }

    /// Set the typography of the selected widget. No-op unless text-bearing.
    pub fn set_selected_text_style(&mut self, style: TextStyle) {
        if let Some(widget) = self.selected_widget_mut() {
            if widget.kind.is_text_bearing() {
                widget.text_style = Some(style);
            }
        }
    }

    fn selected_widget_mut(&mut self) -> Option<&mut Widget> {
        let id = self.overlay.selected()?;
        self.document.widget_mut(id)
    }

    // --- pointer routing ---

    /// Pointer press on the overlay.
    ///
    /// Routed in priority order: the selected widget's handles first, then
    /// widget bodies front-to-back, then empty space (clears selection).
    pub fn pointer_down(&mut self, point: Point) {
        if let Some(id) = self.overlay.selected() {
            if let Some(widget) = self.document.widget(id) {
                match hit_test_handles(widget, point, HANDLE_HIT_TOLERANCE) {
                    Some(HandleKind::Resize) => {
                        let origin = widget.transform;
                        self.overlay.begin_gesture(id, GestureKind::Resize, point, origin);
                        return;
                    }
                    Some(HandleKind::Rotate) => {
                        // A discrete step, not a gesture.
                        self.rotate_selected();
                        return;
                    }
                    None => {}
                }
            }
        }

        let hit = self
            .widget_paint_order()
            .iter()
            .rev()
            .find(|w| w.contains(point))
            .map(|w| (w.id, w.transform));

        match hit {
            Some((id, origin)) => {
                self.overlay.select(id);
                self.overlay.begin_gesture(id, GestureKind::Drag, point, origin);
            }
            None => self.overlay.clear_selection(),
        }
    }

    /// Pointer move. Resolves the active gesture, if any, against the live
    /// document; a gesture whose widget vanished is dropped, not an error.
    pub fn pointer_move(&mut self, point: Point) {
        if let Some(resize) = self.image_resize {
            let height = resize.height_for(point.y);
            if !self.document.patch_block(resize.block_id, |b| b.height = Some(height)) {
                self.image_resize = None;
            }
            return;
        }

        if let Some((id, transform)) = self.overlay.update_gesture(point) {
            match self.document.widget_mut(id) {
                Some(widget) => widget.transform = transform,
                None => self.overlay.end_gesture(),
            }
        }
    }

    /// Pointer release: commits and exits any active gesture.
    pub fn pointer_up(&mut self) {
        self.overlay.end_gesture();
        self.image_resize = None;
    }

    /// Double-click/tap: enters inline caption editing on text-bearing
    /// widgets.
    pub fn double_click(&mut self, point: Point) {
        let hit = self
            .widget_paint_order()
            .iter()
            .rev()
            .find(|w| w.contains(point))
            .map(|w| (w.id, w.kind));
        if let Some((id, kind)) = hit {
            self.overlay.select(id);
            if kind.is_text_bearing() {
                self.overlay.begin_editing(id);
            }
        }
    }

    /// Drop in-flight gestures. For window blur or visibility loss, so no
    /// drag survives a lost release event.
    pub fn cancel_interactions(&mut self) {
        self.overlay.cancel_gesture();
        self.image_resize = None;
    }

    // --- block operations ---

    /// Append a new block to a region. `None` if the region is gone (e.g. a
    /// removed spread).
    pub fn add_block(&mut self, region: RegionRef, kind: BlockKind) -> Option<BlockId> {
        self.document.region_mut(region).map(|r| r.add(kind))
    }

    /// Remove a block wherever it lives.
    pub fn remove_block(&mut self, id: BlockId) -> bool {
        self.document.remove_block(id)
    }

    /// Replace a block's content, if it still exists.
    pub fn update_block(&mut self, id: BlockId, content: impl Into<String>) -> bool {
        let content = content.into();
        self.document.patch_block(id, |b| b.content = content)
    }

    /// Begin the manual height gesture on an image block's bottom edge.
    /// No-op if the block is missing or not an image.
    pub fn begin_image_resize(&mut self, id: BlockId, image_top_y: f64) {
        let mut kind = None;
        self.document.patch_block(id, |b| kind = Some(b.kind));
        if kind == Some(BlockKind::Image) {
            self.image_resize = Some(ImageResizeState::new(id, image_top_y));
        }
    }

    /// The active image-height gesture, if any.
    pub fn image_resize(&self) -> Option<&ImageResizeState> {
        self.image_resize.as_ref()
    }

    /// Toggle preview/print mode.
    pub fn set_preview(&mut self, preview: bool) {
        self.preview = preview;
    }
}
