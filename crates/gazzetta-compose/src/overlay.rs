//! Overlay views: widgets resolved into paint order and render strategy.

use gazzetta_core::widget::{RenderKind, Widget, WidgetId, WidgetKind, paint_order};

/// Caption printed under generated QR codes.
pub const QR_LABEL: &str = "SCAN ME";

/// What the host draws for a widget's payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetContent<'a> {
    /// Bitmap referenced by URL or data URI.
    Image(&'a str),
    /// Inline vector markup, drawn as-is.
    Vector(&'a str),
    /// A single character or emoji scaled to the bounding box.
    Glyph(&'a str),
    /// QR code generated from the data string, with its scan label.
    QrCode { data: &'a str, label: &'static str },
    /// Nothing to draw.
    Empty,
}

/// One widget ready for compositing.
#[derive(Debug, Clone, Copy)]
pub struct OverlayView<'a> {
    pub widget: &'a Widget,
    pub content: WidgetContent<'a>,
    /// Set on the selected widget while it paints above everything else.
    pub on_top: bool,
}

fn resolve_content(widget: &Widget) -> WidgetContent<'_> {
    let payload = widget.content.trim();
    if payload.is_empty() || widget.kind == WidgetKind::Unknown {
        return WidgetContent::Empty;
    }
    match widget.render_kind {
        RenderKind::Image => WidgetContent::Image(payload),
        RenderKind::Vector => WidgetContent::Vector(payload),
        RenderKind::Glyph => WidgetContent::Glyph(payload),
        RenderKind::QrCode => WidgetContent::QrCode {
            data: payload,
            label: QR_LABEL,
        },
    }
}

/// Widgets in paint order, with render strategy and top-of-stack marking
/// resolved.
pub fn overlay_views(widgets: &[Widget], selected: Option<WidgetId>) -> Vec<OverlayView<'_>> {
    paint_order(widgets, selected)
        .into_iter()
        .map(|widget| OverlayView {
            widget,
            content: resolve_content(widget),
            on_top: selected == Some(widget.id),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use gazzetta_core::widget::{Transform, WidgetKind};

    fn widget(kind: WidgetKind, content: &str, z: i32) -> Widget {
        let mut t = Transform::default_at(0.0, 0.0);
        t.z_index = z;
        Widget::new(kind, content, t)
    }

    #[test]
    fn test_content_resolution_follows_render_kind() {
        let widgets = [
            widget(WidgetKind::Mascot, "https://cdn.example/fox.png", 1),
            widget(WidgetKind::Bubble, "<svg/>", 2),
            widget(WidgetKind::Sticker, "🎉", 3),
            widget(WidgetKind::QrCode, "https://example.com", 4),
        ];
        let views = overlay_views(&widgets, None);

        assert_eq!(views[0].content, WidgetContent::Image("https://cdn.example/fox.png"));
        assert_eq!(views[1].content, WidgetContent::Vector("<svg/>"));
        assert_eq!(views[2].content, WidgetContent::Glyph("🎉"));
        assert_eq!(
            views[3].content,
            WidgetContent::QrCode { data: "https://example.com", label: "SCAN ME" }
        );
    }

    #[test]
    fn test_empty_payload_renders_nothing() {
        let widgets = [widget(WidgetKind::Sticker, "   ", 1)];
        let views = overlay_views(&widgets, None);
        assert_eq!(views[0].content, WidgetContent::Empty);
    }

    #[test]
    fn test_unknown_kind_renders_nothing() {
        let widgets = [widget(WidgetKind::Unknown, "🎉", 1)];
        let views = overlay_views(&widgets, None);
        assert_eq!(views[0].content, WidgetContent::Empty);
    }

    #[test]
    fn test_selected_widget_is_on_top() {
        let widgets = [
            widget(WidgetKind::Sticker, "⭐", 1),
            widget(WidgetKind::Sticker, "🎈", 99),
        ];
        let low_id = widgets[0].id;

        let views = overlay_views(&widgets, Some(low_id));
        let last = views.last().unwrap();
        assert_eq!(last.widget.id, low_id);
        assert!(last.on_top);
        assert!(!views[0].on_top);
    }
}
