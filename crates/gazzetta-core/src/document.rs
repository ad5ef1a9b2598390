//! The newspaper document: articles, page regions, spreads and widgets.

use crate::block::{BlockId, ContentBlock, Region};
use crate::content::EventKind;
use crate::widget::{Widget, WidgetId};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Document-level errors.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("invalid document JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("missing required field: {0}")]
    MissingField(&'static str),
}

/// One named article with fixed placement in the layout.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub body: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Article {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            image: None,
        }
    }
}

/// The fixed named articles of an edition.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Articles {
    #[serde(default)]
    pub lead: Article,
    #[serde(default)]
    pub sidebar: Article,
    #[serde(default)]
    pub back_main: Article,
    #[serde(default)]
    pub weather: Article,
    #[serde(default)]
    pub comic: Article,
}

/// One inserted two-page spread.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtraSpread {
    pub id: Uuid,
    pub left_page: u32,
    pub right_page: u32,
    #[serde(default)]
    pub left_blocks: Region,
    #[serde(default)]
    pub right_blocks: Region,
}

impl ExtraSpread {
    /// Create the spread that follows `existing` spreads already in the
    /// document. The front page is page 1; each spread occupies the next
    /// two physical pages before the back page.
    pub fn following(existing: usize) -> Self {
        let left_page = 2 + 2 * existing as u32;
        Self {
            id: Uuid::new_v4(),
            left_page,
            right_page: left_page + 1,
            left_blocks: Region::new(),
            right_blocks: Region::new(),
        }
    }
}

/// Names a region of the document for block operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionRef {
    Front,
    Back,
    Sidebar,
    SpreadLeft(Uuid),
    SpreadRight(Uuid),
}

/// The document root owned by the host application. Subsystems receive
/// references and mutate through it; they never clone and diverge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewspaperDocument {
    /// Theme identifier. The one field an import must carry.
    pub theme: String,
    #[serde(rename = "eventType", default)]
    pub event: EventKind,
    #[serde(default)]
    pub format: String,
    /// Masthead name of the publication.
    #[serde(default)]
    pub pub_name: String,
    /// Front-page index summary lines.
    #[serde(default)]
    pub index: Vec<String>,
    #[serde(default)]
    pub articles: Articles,
    #[serde(default)]
    pub front_blocks: Region,
    #[serde(default)]
    pub back_blocks: Region,
    #[serde(default)]
    pub sidebar_blocks: Region,
    #[serde(default)]
    pub extra_spreads: Vec<ExtraSpread>,
    /// Documents saved before the overlay existed lack this field and load
    /// with no widgets.
    #[serde(default)]
    pub widgets: Vec<Widget>,
}

impl NewspaperDocument {
    /// Create an empty document for the given theme and event.
    pub fn new(theme: impl Into<String>, event: EventKind, format: impl Into<String>) -> Self {
        Self {
            theme: theme.into(),
            event,
            format: format.into(),
            pub_name: String::new(),
            index: Vec::new(),
            articles: Articles::default(),
            front_blocks: Region::new(),
            back_blocks: Region::new(),
            sidebar_blocks: Region::new(),
            extra_spreads: Vec::new(),
            widgets: Vec::new(),
        }
    }

    /// Insert a new spread after the existing ones. Returns its id.
    pub fn add_spread(&mut self) -> Uuid {
        let spread = ExtraSpread::following(self.extra_spreads.len());
        let id = spread.id;
        self.extra_spreads.push(spread);
        id
    }

    /// Remove a spread by id. Returns false if no spread had the id.
    pub fn remove_spread(&mut self, id: Uuid) -> bool {
        let before = self.extra_spreads.len();
        self.extra_spreads.retain(|s| s.id != id);
        self.extra_spreads.len() != before
    }

    /// Look up a region.
    pub fn region(&self, region: RegionRef) -> Option<&Region> {
        match region {
            RegionRef::Front => Some(&self.front_blocks),
            RegionRef::Back => Some(&self.back_blocks),
            RegionRef::Sidebar => Some(&self.sidebar_blocks),
            RegionRef::SpreadLeft(id) => self
                .extra_spreads
                .iter()
                .find(|s| s.id == id)
                .map(|s| &s.left_blocks),
            RegionRef::SpreadRight(id) => self
                .extra_spreads
                .iter()
                .find(|s| s.id == id)
                .map(|s| &s.right_blocks),
        }
    }

    /// Look up a region for mutation.
    pub fn region_mut(&mut self, region: RegionRef) -> Option<&mut Region> {
        match region {
            RegionRef::Front => Some(&mut self.front_blocks),
            RegionRef::Back => Some(&mut self.back_blocks),
            RegionRef::Sidebar => Some(&mut self.sidebar_blocks),
            RegionRef::SpreadLeft(id) => self
                .extra_spreads
                .iter_mut()
                .find(|s| s.id == id)
                .map(|s| &mut s.left_blocks),
            RegionRef::SpreadRight(id) => self
                .extra_spreads
                .iter_mut()
                .find(|s| s.id == id)
                .map(|s| &mut s.right_blocks),
        }
    }

    fn regions_mut(&mut self) -> impl Iterator<Item = &mut Region> {
        let spreads = self
            .extra_spreads
            .iter_mut()
            .flat_map(|s| [&mut s.left_blocks, &mut s.right_blocks]);
        [
            &mut self.front_blocks,
            &mut self.back_blocks,
            &mut self.sidebar_blocks,
        ]
        .into_iter()
        .chain(spreads)
    }

    /// Mutate a block wherever it lives, if it still exists. This is the one
    /// patch path shared by inline edits and asynchronous enrichment, so an
    /// id deleted in the meantime is a silent no-op.
    pub fn patch_block(&mut self, id: BlockId, patch: impl FnOnce(&mut ContentBlock)) -> bool {
        for region in self.regions_mut() {
            if let Some(block) = region.get_mut(id) {
                patch(block);
                return true;
            }
        }
        false
    }

    /// Remove a block from whichever region holds it.
    pub fn remove_block(&mut self, id: BlockId) -> bool {
        for region in self.regions_mut() {
            if region.remove(id) {
                return true;
            }
        }
        false
    }

    /// Look up a widget by id.
    pub fn widget(&self, id: WidgetId) -> Option<&Widget> {
        self.widgets.iter().find(|w| w.id == id)
    }

    /// Look up a widget for mutation.
    pub fn widget_mut(&mut self, id: WidgetId) -> Option<&mut Widget> {
        self.widgets.iter_mut().find(|w| w.id == id)
    }

    /// Append a widget. Returns its id.
    pub fn add_widget(&mut self, widget: Widget) -> WidgetId {
        let id = widget.id;
        self.widgets.push(widget);
        id
    }

    /// Remove a widget by id. Removing an unknown id is a no-op.
    pub fn remove_widget(&mut self, id: WidgetId) -> bool {
        let before = self.widgets.len();
        self.widgets.retain(|w| w.id != id);
        self.widgets.len() != before
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Parse a document from JSON, validating that a theme identifier is
    /// present. On error nothing is mutated; the caller keeps its document.
    pub fn from_json(json: &str) -> Result<Self, DocumentError> {
        let mut doc: Self = serde_json::from_str(json)?;
        if doc.theme.trim().is_empty() {
            return Err(DocumentError::MissingField("theme"));
        }
        for widget in &mut doc.widgets {
            widget.normalize();
        }
        Ok(doc)
    }

    /// A user-supplied export name with the `.json` suffix enforced.
    pub fn export_file_name(name: &str) -> String {
        let trimmed = name.trim();
        let base = if trimmed.is_empty() { "newspaper" } else { trimmed };
        if base.to_ascii_lowercase().ends_with(".json") {
            base.to_string()
        } else {
            format!("{base}.json")
        }
    }
}

impl Default for NewspaperDocument {
    fn default() -> Self {
        Self::new("classic", EventKind::Birthday, "tabloid")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::BlockKind;
    use crate::widget::{Transform, WidgetKind};

    fn sample_document() -> NewspaperDocument {
        let mut doc = NewspaperDocument::new("vintage", EventKind::Birthday, "tabloid");
        doc.pub_name = "The Daily Maria".to_string();
        doc.front_blocks.push(ContentBlock::with_content(BlockKind::Headline, "Titolo"));
        doc.front_blocks.push(ContentBlock::with_content(BlockKind::Paragraph, "Testo"));
        doc.sidebar_blocks.add(BlockKind::Paragraph);
        let spread_id = doc.add_spread();
        doc.region_mut(RegionRef::SpreadLeft(spread_id))
            .unwrap()
            .add(BlockKind::Headline);
        doc.add_widget(Widget::new(
            WidgetKind::Bubble,
            "<svg/>",
            Transform::default_at(400.0, 0.0),
        ));
        doc
    }

    #[test]
    fn test_round_trip_full_document() {
        let doc = sample_document();
        let json = doc.to_json().unwrap();
        let restored = NewspaperDocument::from_json(&json).unwrap();
        assert_eq!(doc, restored);
    }

    #[test]
    fn test_round_trip_zero_widgets() {
        let mut doc = sample_document();
        doc.widgets.clear();
        let json = doc.to_json().unwrap();
        let restored = NewspaperDocument::from_json(&json).unwrap();
        assert_eq!(doc, restored);
    }

    #[test]
    fn test_missing_widgets_field_defaults_empty() {
        let json = r#"{"theme": "vintage", "eventType": "birthday", "format": "tabloid"}"#;
        let doc = NewspaperDocument::from_json(json).unwrap();
        assert!(doc.widgets.is_empty());
        assert!(doc.front_blocks.is_empty());
    }

    #[test]
    fn test_import_rejects_missing_theme() {
        let json = r#"{"eventType": "birthday", "format": "tabloid"}"#;
        // Serde default gives an empty theme; validation must reject it.
        let result = NewspaperDocument::from_json(&format!(
            r#"{{"theme": "", {}"#,
            json.trim_start_matches('{')
        ));
        assert!(matches!(result, Err(DocumentError::MissingField("theme"))));
    }

    #[test]
    fn test_import_rejects_malformed_json() {
        assert!(matches!(
            NewspaperDocument::from_json("{not json"),
            Err(DocumentError::Parse(_))
        ));
    }

    #[test]
    fn test_spread_page_numbers() {
        let mut doc = NewspaperDocument::default();
        let first = doc.add_spread();
        let second = doc.add_spread();

        let s1 = doc.extra_spreads.iter().find(|s| s.id == first).unwrap();
        let s2 = doc.extra_spreads.iter().find(|s| s.id == second).unwrap();
        assert_eq!((s1.left_page, s1.right_page), (2, 3));
        assert_eq!((s2.left_page, s2.right_page), (4, 5));
    }

    #[test]
    fn test_remove_spread() {
        let mut doc = NewspaperDocument::default();
        let id = doc.add_spread();
        assert!(doc.remove_spread(id));
        assert!(!doc.remove_spread(id));
        assert!(doc.extra_spreads.is_empty());
    }

    #[test]
    fn test_patch_block_reaches_spread_regions() {
        let mut doc = NewspaperDocument::default();
        let spread_id = doc.add_spread();
        let block_id = doc
            .region_mut(RegionRef::SpreadRight(spread_id))
            .unwrap()
            .add(BlockKind::Paragraph);

        assert!(doc.patch_block(block_id, |b| b.content = "patched".to_string()));
        assert_eq!(
            doc.region(RegionRef::SpreadRight(spread_id))
                .unwrap()
                .get(block_id)
                .unwrap()
                .content,
            "patched"
        );
    }

    #[test]
    fn test_patch_missing_block_is_noop() {
        let mut doc = NewspaperDocument::default();
        assert!(!doc.patch_block(Uuid::new_v4(), |b| b.content.clear()));
    }

    #[test]
    fn test_remove_widget_unknown_id_is_noop() {
        let mut doc = sample_document();
        let count = doc.widgets.len();
        assert!(!doc.remove_widget(Uuid::new_v4()));
        assert_eq!(doc.widgets.len(), count);
    }

    #[test]
    fn test_export_file_name_suffix() {
        assert_eq!(NewspaperDocument::export_file_name("gazette"), "gazette.json");
        assert_eq!(NewspaperDocument::export_file_name("gazette.json"), "gazette.json");
        assert_eq!(NewspaperDocument::export_file_name("  My Paper "), "My Paper.json");
        assert_eq!(NewspaperDocument::export_file_name(""), "newspaper.json");
    }

    #[test]
    fn test_unknown_widget_kind_still_loads() {
        let doc = sample_document();
        // A widget type minted by a newer build of the editor.
        let json = doc
            .to_json()
            .unwrap()
            .replace("\"type\": \"bubble\"", "\"type\": \"hologram\"");

        let restored = NewspaperDocument::from_json(&json).unwrap();
        assert_eq!(restored.widgets[0].kind, WidgetKind::Unknown);
        assert_eq!(restored.widgets.len(), doc.widgets.len());
    }

    #[test]
    fn test_render_kind_recomputed_on_load() {
        let mut doc = sample_document();
        doc.widgets[0].content = "https://cdn.example/bubble.png".to_string();
        // Simulate a stale discriminant from an older document.
        doc.widgets[0].render_kind = crate::widget::RenderKind::Glyph;

        let json = doc.to_json().unwrap();
        let restored = NewspaperDocument::from_json(&json).unwrap();
        assert_eq!(restored.widgets[0].render_kind, crate::widget::RenderKind::Image);
    }
}
