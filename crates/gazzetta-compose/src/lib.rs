//! Gazzetta Compose Library
//!
//! Headless page assembly for Gazzetta. Turns document state into render
//! models a host renderer consumes; it draws nothing itself.

mod blocks;
mod overlay;
mod page;

pub use blocks::{BlockView, region_views, show_add_block};
pub use overlay::{OverlayView, QR_LABEL, WidgetContent, overlay_views};
pub use page::{PageSlot, PageView, assemble};
