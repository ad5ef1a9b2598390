//! Physical page assembly.

use gazzetta_core::document::{NewspaperDocument, RegionRef};

/// Which page of the edition a view describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSlot {
    Front,
    SpreadLeft,
    SpreadRight,
    Back,
}

/// One physical page ready for rendering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageView {
    /// Physical page number, 1-based.
    pub number: u32,
    pub slot: PageSlot,
    /// The editable region on this page.
    pub region: RegionRef,
    /// Front page only: the sidebar column renders beside the main region.
    pub with_sidebar: bool,
}

/// Assemble the document's pages in physical order: the front page, each
/// spread in stored order, then the back page.
pub fn assemble(doc: &NewspaperDocument) -> Vec<PageView> {
    let mut pages = Vec::with_capacity(2 + 2 * doc.extra_spreads.len());

    pages.push(PageView {
        number: 1,
        slot: PageSlot::Front,
        region: RegionRef::Front,
        with_sidebar: true,
    });

    for spread in &doc.extra_spreads {
        pages.push(PageView {
            number: spread.left_page,
            slot: PageSlot::SpreadLeft,
            region: RegionRef::SpreadLeft(spread.id),
            with_sidebar: false,
        });
        pages.push(PageView {
            number: spread.right_page,
            slot: PageSlot::SpreadRight,
            region: RegionRef::SpreadRight(spread.id),
            with_sidebar: false,
        });
    }

    pages.push(PageView {
        number: 2 + 2 * doc.extra_spreads.len() as u32,
        slot: PageSlot::Back,
        region: RegionRef::Back,
        with_sidebar: false,
    });

    pages
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_page_edition() {
        let doc = NewspaperDocument::default();
        let pages = assemble(&doc);

        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].number, 1);
        assert_eq!(pages[0].slot, PageSlot::Front);
        assert!(pages[0].with_sidebar);
        assert_eq!(pages[1].number, 2);
        assert_eq!(pages[1].slot, PageSlot::Back);
        assert!(!pages[1].with_sidebar);
    }

    #[test]
    fn test_spreads_between_front_and_back() {
        let mut doc = NewspaperDocument::default();
        let first = doc.add_spread();
        let second = doc.add_spread();

        let pages = assemble(&doc);
        let numbers: Vec<_> = pages.iter().map(|p| p.number).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4, 5, 6]);

        assert_eq!(pages[1].region, RegionRef::SpreadLeft(first));
        assert_eq!(pages[2].region, RegionRef::SpreadRight(first));
        assert_eq!(pages[3].region, RegionRef::SpreadLeft(second));
        assert_eq!(pages[4].region, RegionRef::SpreadRight(second));
        assert_eq!(pages[5].slot, PageSlot::Back);
    }

    #[test]
    fn test_back_page_number_tracks_spread_removal() {
        let mut doc = NewspaperDocument::default();
        let id = doc.add_spread();
        assert_eq!(assemble(&doc).last().unwrap().number, 4);

        doc.remove_spread(id);
        assert_eq!(assemble(&doc).last().unwrap().number, 2);
    }
}
