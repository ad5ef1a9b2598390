//! Block views: per-block display flags for a region.
//!
//! Preview mode only flips display flags; the blocks themselves come from
//! the same region either way.

use gazzetta_core::block::{BlockKind, ContentBlock, Region};

/// One content block with its display affordances resolved.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlockView<'a> {
    pub block: &'a ContentBlock,
    /// Text column count for the block's body.
    pub columns: u8,
    /// Whether the host shows inline editing for this block.
    pub editable: bool,
    /// Whether the host shows the bottom-edge resize grip (images only).
    pub resizable: bool,
}

/// Resolve a region's blocks into views. `wide` regions flow paragraphs in
/// two columns; preview mode suppresses all edit affordances.
pub fn region_views(region: &Region, wide: bool, preview: bool) -> Vec<BlockView<'_>> {
    region
        .iter()
        .map(|block| BlockView {
            block,
            columns: if wide && block.kind == BlockKind::Paragraph { 2 } else { 1 },
            editable: !preview,
            resizable: !preview && block.kind == BlockKind::Image,
        })
        .collect()
}

/// Whether the add-block control renders below a region.
pub fn show_add_block(preview: bool) -> bool {
    !preview
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mixed_region() -> Region {
        let mut region = Region::new();
        region.add(BlockKind::Headline);
        region.add(BlockKind::Paragraph);
        region.add(BlockKind::Image);
        region
    }

    #[test]
    fn test_views_preserve_region_order() {
        let region = mixed_region();
        let views = region_views(&region, false, false);

        let kinds: Vec<_> = views.iter().map(|v| v.block.kind).collect();
        assert_eq!(kinds, vec![BlockKind::Headline, BlockKind::Paragraph, BlockKind::Image]);
    }

    #[test]
    fn test_wide_region_flows_paragraphs_in_two_columns() {
        let region = mixed_region();
        let views = region_views(&region, true, false);

        assert_eq!(views[0].columns, 1);
        assert_eq!(views[1].columns, 2);
        assert_eq!(views[2].columns, 1);

        let narrow = region_views(&region, false, false);
        assert!(narrow.iter().all(|v| v.columns == 1));
    }

    #[test]
    fn test_preview_suppresses_affordances_only() {
        let region = mixed_region();

        let editing = region_views(&region, true, false);
        assert!(editing.iter().all(|v| v.editable));
        assert!(editing[2].resizable);
        assert!(show_add_block(false));

        let preview = region_views(&region, true, true);
        assert!(preview.iter().all(|v| !v.editable && !v.resizable));
        assert!(!show_add_block(true));

        // Same blocks, same order, same columns in both modes.
        for (e, p) in editing.iter().zip(&preview) {
            assert_eq!(e.block, p.block);
            assert_eq!(e.columns, p.columns);
        }
    }

    #[test]
    fn test_only_images_are_resizable() {
        let region = mixed_region();
        let views = region_views(&region, false, false);

        assert!(!views[0].resizable);
        assert!(!views[1].resizable);
        assert!(views[2].resizable);
    }
}
