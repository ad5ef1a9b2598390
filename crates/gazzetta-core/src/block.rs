//! Content blocks and page regions.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for content blocks.
pub type BlockId = Uuid;

/// Minimum manual height for image blocks, in pixels.
pub const MIN_IMAGE_HEIGHT: f64 = 100.0;

/// The kind of a content block. Fixed for the block's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockKind {
    Headline,
    Paragraph,
    Image,
}

impl BlockKind {
    /// Default content for a freshly added block of this kind.
    pub fn placeholder(&self) -> &'static str {
        match self {
            BlockKind::Headline => "New headline",
            BlockKind::Paragraph => "Write your story here...",
            BlockKind::Image => "",
        }
    }
}

/// A single block of page content: a headline, a paragraph, or an image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentBlock {
    pub id: BlockId,
    #[serde(rename = "type")]
    pub kind: BlockKind,
    /// Text for headline/paragraph blocks; image URL or data URI for images.
    pub content: String,
    /// Manual pixel height override. Only meaningful for image blocks;
    /// `None` means auto height.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
}

impl ContentBlock {
    /// Create a block with the kind's placeholder content.
    pub fn new(kind: BlockKind) -> Self {
        Self::with_content(kind, kind.placeholder())
    }

    /// Create a block with explicit content.
    pub fn with_content(kind: BlockKind, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            content: content.into(),
            height: None,
        }
    }
}

/// An ordered sequence of content blocks. Insertion order is render order.
///
/// A region exclusively owns its blocks; no block is shared between regions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Region(Vec<ContentBlock>);

impl Region {
    /// Create an empty region.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new block of the given kind. Returns its id.
    pub fn add(&mut self, kind: BlockKind) -> BlockId {
        let block = ContentBlock::new(kind);
        let id = block.id;
        self.0.push(block);
        id
    }

    /// Append an existing block.
    pub fn push(&mut self, block: ContentBlock) {
        self.0.push(block);
    }

    /// Remove a block by id, preserving the relative order of the survivors.
    /// Returns false if no block had the id.
    pub fn remove(&mut self, id: BlockId) -> bool {
        let before = self.0.len();
        self.0.retain(|b| b.id != id);
        self.0.len() != before
    }

    /// Replace a block's content. Returns false if the block is gone.
    pub fn update_content(&mut self, id: BlockId, content: impl Into<String>) -> bool {
        match self.get_mut(id) {
            Some(block) => {
                block.content = content.into();
                true
            }
            None => false,
        }
    }

    /// Set the manual height of an image block, clamped to [`MIN_IMAGE_HEIGHT`].
    /// No-op for non-image blocks or missing ids.
    pub fn set_image_height(&mut self, id: BlockId, height: f64) -> bool {
        match self.get_mut(id) {
            Some(block) if block.kind == BlockKind::Image => {
                block.height = Some(height.max(MIN_IMAGE_HEIGHT));
                true
            }
            _ => false,
        }
    }

    /// Get a block by id.
    pub fn get(&self, id: BlockId) -> Option<&ContentBlock> {
        self.0.iter().find(|b| b.id == id)
    }

    /// Get a mutable block by id.
    pub fn get_mut(&mut self, id: BlockId) -> Option<&mut ContentBlock> {
        self.0.iter_mut().find(|b| b.id == id)
    }

    /// Check whether a block with the id is present.
    pub fn contains(&self, id: BlockId) -> bool {
        self.get(id).is_some()
    }

    /// Iterate blocks in render order.
    pub fn iter(&self) -> impl Iterator<Item = &ContentBlock> {
        self.0.iter()
    }

    /// Number of blocks in the region.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the region has no blocks.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Ids of all blocks, in render order.
    pub fn ids(&self) -> Vec<BlockId> {
        self.0.iter().map(|b| b.id).collect()
    }
}

/// Active manual-resize gesture on an image block's bottom edge.
///
/// The new height is recomputed from the pointer's Y position relative to the
/// image's top edge on every move, so incremental moves cannot drift.
#[derive(Debug, Clone, Copy)]
pub struct ImageResizeState {
    /// The image block being resized.
    pub block_id: BlockId,
    /// Y coordinate of the image's top edge when the gesture began.
    pub top_y: f64,
}

impl ImageResizeState {
    /// Create a resize state anchored at the image's top edge.
    pub fn new(block_id: BlockId, top_y: f64) -> Self {
        Self { block_id, top_y }
    }

    /// Height implied by the current pointer Y, clamped to the minimum.
    pub fn height_for(&self, pointer_y: f64) -> f64 {
        (pointer_y - self.top_y).max(MIN_IMAGE_HEIGHT)
    }
}
