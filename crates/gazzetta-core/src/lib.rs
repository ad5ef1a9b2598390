//! Gazzetta Core Library
//!
//! Platform-agnostic document model and editing logic for the Gazzetta
//! newspaper editor.

pub mod block;
pub mod content;
pub mod document;
pub mod editor;
pub mod enrich;
pub mod input;
pub mod storage;
pub mod widget;

pub use block::{BlockId, BlockKind, ContentBlock, ImageResizeState, Region, MIN_IMAGE_HEIGHT};
pub use content::{EventConfig, EventKind, Gender, GeneratedContent, generate};
pub use document::{Article, Articles, DocumentError, ExtraSpread, NewspaperDocument, RegionRef};
pub use editor::Editor;
pub use enrich::{BlockPatch, EnrichError, EnrichmentRequest, GenerationMode, ImageGenerator, TextGenerator, apply_patches, run_enrichment};
pub use input::{InputState, PointerEvent, PointerSource};
pub use storage::{BoxFuture, MemoryStorage, Storage, StorageError, StorageResult};
pub use widget::{
    GestureKind, GestureState, Handle, HandleKind, OverlayState, RenderKind, TextStyle, Transform,
    Widget, WidgetId, WidgetKind, paint_order,
};
