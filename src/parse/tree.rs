use scraper::ElementRef;

use crate::{parse::remove_excess_whitespace, static_selector};

/// The structural shapes the menu extractor looks for inside a day section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    /// every table row, in document order
    TableRow,
    /// a cell naming a meal and its serving window
    HeaderCell,
    DataCell,
    ListItem,
}

/// Read-only view of a markup subtree.
///
/// The day-section extractor only talks to this trait, so it runs the same over a
/// parsed `scraper` document and over hand-built trees.
pub trait MenuNode: Copy {
    /// Descendants matching `pattern`, in document order.
    fn find(self, pattern: Pattern) -> Vec<Self>;

    /// All text below this node with whitespace collapsed and trimmed.
    fn trimmed_text(self) -> String;
}

impl<'a> MenuNode for ElementRef<'a> {
    fn find(self, pattern: Pattern) -> Vec<Self> {
        static_selector!(TABLE_ROW_SELECTOR <- "table tr");
        static_selector!(HEADER_CELL_SELECTOR <- "h4");
        static_selector!(DATA_CELL_SELECTOR <- "td");
        static_selector!(LIST_ITEM_SELECTOR <- "li");

        let selector = match pattern {
            Pattern::TableRow => &TABLE_ROW_SELECTOR,
            Pattern::HeaderCell => &HEADER_CELL_SELECTOR,
            Pattern::DataCell => &DATA_CELL_SELECTOR,
            Pattern::ListItem => &LIST_ITEM_SELECTOR,
        };
        self.select(selector).collect()
    }

    fn trimmed_text(self) -> String {
        element_text(self)
    }
}

pub fn element_text(element: ElementRef<'_>) -> String {
    let raw = element.text().collect::<String>();
    remove_excess_whitespace(&raw).into_owned()
}
