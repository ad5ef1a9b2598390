//! Decorative widget entities for the overlay layer.
//!
//! Widgets are free-floating elements (mascots, stickers, speech bubbles,
//! free text, QR codes) composited above the page stack. Each one carries its
//! own transform and is independently draggable, resizable, rotatable,
//! flippable and z-ordered. Selection and gesture state live in
//! [`OverlayState`], not on the widget itself.

mod gesture;
mod handles;
mod overlay;

pub use gesture::{GestureKind, GestureState};
pub use handles::{Handle, HandleKind, HANDLE_HIT_TOLERANCE, ROTATE_HANDLE_OFFSET, handles_for, hit_test_handles};
pub use overlay::{OverlayState, paint_order};

use kurbo::{Point, Rect, Vec2};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for widgets.
pub type WidgetId = Uuid;

/// Minimum widget size on each axis after a resize, in pixels.
pub const MIN_WIDGET_SIZE: f64 = 30.0;
/// Rotation applied per rotate-handle click, in degrees.
pub const ROTATE_STEP_DEG: f64 = 45.0;
/// Edge length of a freshly added widget, in pixels.
pub const DEFAULT_WIDGET_SIZE: f64 = 200.0;
/// Paint-order index assigned to freshly added widgets.
pub const DEFAULT_Z_INDEX: i32 = 50;

/// The kind of a widget. Fixed at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WidgetKind {
    /// Mascot image from the asset catalog or a user upload.
    Mascot,
    /// Decorative sticker.
    Sticker,
    /// Speech bubble with a caption centered inside.
    Bubble,
    /// Free-standing caption text.
    Text,
    /// Generated QR code keyed by the content string.
    QrCode,
    /// Unrecognized type string from a newer document. The widget is kept
    /// on import but never rendered.
    #[serde(other)]
    Unknown,
}

impl WidgetKind {
    /// Whether this kind carries a user-editable caption.
    pub fn is_text_bearing(&self) -> bool {
        matches!(self, WidgetKind::Bubble | WidgetKind::Text)
    }

    /// Default caption for text-bearing kinds.
    pub fn default_caption(&self) -> Option<&'static str> {
        match self {
            WidgetKind::Bubble => Some("Hooray!"),
            WidgetKind::Text => Some("Your text"),
            _ => None,
        }
    }
}

/// How a widget's content payload is rendered.
///
/// Computed once from the payload when the widget is created (and again on
/// deserialize, for documents that predate the field) instead of re-sniffing
/// the content string on every render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderKind {
    /// Bitmap image referenced by URL or data URI.
    Image,
    /// Inline vector markup drawn as-is.
    Vector,
    /// A single character or emoji scaled to the bounding box.
    #[default]
    Glyph,
    /// Generated QR image plus its scan label.
    QrCode,
}

/// Classify a content payload into its render strategy.
pub fn detect_render_kind(kind: WidgetKind, content: &str) -> RenderKind {
    if kind == WidgetKind::QrCode {
        return RenderKind::QrCode;
    }
    let trimmed = content.trim();
    if trimmed.starts_with("data:")
        || trimmed.starts_with("http://")
        || trimmed.starts_with("https://")
    {
        RenderKind::Image
    } else if trimmed.starts_with('<') {
        RenderKind::Vector
    } else {
        RenderKind::Glyph
    }
}

/// Geometry of a widget: position, size, rotation, paint order, mirroring.
/// All coordinates are pixels relative to the overlay origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transform {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Rotation in degrees, kept in [0, 360).
    #[serde(default)]
    pub rotation: f64,
    pub z_index: i32,
    /// Horizontal mirror. Composes with rotation, does not replace it.
    #[serde(default)]
    pub flip_x: bool,
}

impl Transform {
    /// Default placement for a new widget: centered horizontally on the
    /// overlay and a fixed offset below the current scroll position.
    pub fn default_at(center_x: f64, scroll_y: f64) -> Self {
        Self {
            x: center_x - DEFAULT_WIDGET_SIZE / 2.0,
            y: scroll_y + 300.0,
            width: DEFAULT_WIDGET_SIZE,
            height: DEFAULT_WIDGET_SIZE,
            rotation: 0.0,
            z_index: DEFAULT_Z_INDEX,
            flip_x: false,
        }
    }

    /// Bounding box before rotation is applied.
    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.x + self.width, self.y + self.height)
    }

    /// Center of the widget, the pivot for rotation and mirroring.
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Move by a delta.
    pub fn translate(&mut self, delta: Vec2) {
        self.x += delta.x;
        self.y += delta.y;
    }

    /// Set the size, clamping each axis to [`MIN_WIDGET_SIZE`].
    pub fn resize_to(&mut self, width: f64, height: f64) {
        self.width = width.max(MIN_WIDGET_SIZE);
        self.height = height.max(MIN_WIDGET_SIZE);
    }

    /// Advance rotation by one step, wrapping modulo 360.
    pub fn rotate_step(&mut self) {
        self.rotation = (self.rotation + ROTATE_STEP_DEG).rem_euclid(360.0);
    }
}

/// Typography for text-bearing widgets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    pub font_size: f64,
    pub color: String,
    pub font_family: String,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font_size: 16.0,
            color: "#000000".to_string(),
            font_family: "Georgia".to_string(),
        }
    }
}

/// A free-floating decorative widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Widget {
    pub id: WidgetId,
    #[serde(rename = "type")]
    pub kind: WidgetKind,
    /// Render strategy derived from the content payload.
    #[serde(default)]
    pub render_kind: RenderKind,
    /// Type-dependent payload: image URL/data URI, vector markup, glyph, or
    /// the string a QR code encodes. Unused for plain text widgets.
    #[serde(default)]
    pub content: String,
    /// User-editable caption, applicable only to text-bearing kinds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(rename = "style")]
    pub transform: Transform,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_style: Option<TextStyle>,
}

impl Widget {
    /// Create a widget with a freshly generated id.
    pub fn new(kind: WidgetKind, content: impl Into<String>, transform: Transform) -> Self {
        let content = content.into();
        Self {
            id: Uuid::new_v4(),
            kind,
            render_kind: detect_render_kind(kind, &content),
            content,
            text: kind.default_caption().map(str::to_string),
            transform,
            text_style: kind.is_text_bearing().then(TextStyle::default),
        }
    }

    /// Recompute the derived render strategy. Called after deserialization so
    /// documents written before the field existed pick it up.
    pub fn normalize(&mut self) {
        self.render_kind = detect_render_kind(self.kind, &self.content);
    }

    /// Set the caption. No-op for kinds without one.
    pub fn set_text(&mut self, text: impl Into<String>) -> bool {
        if self.kind.is_text_bearing() {
            self.text = Some(text.into());
            true
        } else {
            false
        }
    }

    /// Toggle the horizontal mirror.
    pub fn toggle_flip(&mut self) {
        self.transform.flip_x = !self.transform.flip_x;
    }

    /// Advance rotation by one 45° step.
    pub fn rotate_step(&mut self) {
        self.transform.rotate_step();
    }

    /// Raise the widget one paint layer.
    pub fn bring_forward(&mut self) {
        self.transform.z_index += 1;
    }

    /// Hit test a point against the widget's rotated bounds.
    ///
    /// The point is rotated into the widget's local frame around its center;
    /// the mirror is symmetric about the center, so it never affects
    /// containment.
    pub fn contains(&self, point: Point) -> bool {
        let center = self.transform.center();
        let theta = -self.transform.rotation.to_radians();
        let (sin, cos) = theta.sin_cos();
        let dx = point.x - center.x;
        let dy = point.y - center.y;
        let local = Point::new(
            center.x + dx * cos - dy * sin,
            center.y + dx * sin + dy * cos,
        );
        self.transform.bounds().contains(local)
    }
}
