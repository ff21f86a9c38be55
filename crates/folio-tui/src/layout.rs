//! Row geometry of the rendered page.
//!
//! The sections widget and the layout use the same wrapping and height
//! rules, so the extents computed here match what gets drawn. Recomputed on
//! resize and whenever the page changes.

use folio_core::page::{Block, BlockRole, Page};
use folio_core::reveal::Extent;
use unicode_width::UnicodeWidthStr;

/// Rows occupied by the page hero (title, tagline, spacer)
pub const HERO_ROWS: u16 = 3;
/// Rows occupied by a section heading (title plus spacer)
pub const SECTION_HEADING_ROWS: u16 = 2;
/// Rows occupied by the footer (spacer plus year line)
pub const FOOTER_ROWS: u16 = 2;
/// Horizontal padding inside the content column
pub const CONTENT_PADDING: u16 = 2;

/// A block's place within the document
#[derive(Debug, Clone, Copy)]
pub struct BlockExtent {
    pub section: usize,
    pub block: usize,
    pub extent: Extent,
    /// Participates in reveal-on-scroll
    pub reveals: bool,
}

#[derive(Debug, Clone)]
pub struct PageLayout {
    pub width: u16,
    pub section_tops: Vec<u16>,
    pub blocks: Vec<BlockExtent>,
    pub content_height: u16,
}

impl PageLayout {
    pub fn compute(page: &Page, width: u16) -> Self {
        let text_width = text_width(width);
        let mut row: u16 = HERO_ROWS;
        let mut section_tops = Vec::with_capacity(page.sections.len());
        let mut blocks = Vec::new();

        for (s_idx, section) in page.sections.iter().enumerate() {
            section_tops.push(row);
            row += SECTION_HEADING_ROWS;

            for (b_idx, block) in section.blocks.iter().enumerate() {
                let height = block_height(block, text_width);
                blocks.push(BlockExtent {
                    section: s_idx,
                    block: b_idx,
                    extent: Extent { top: row, height },
                    reveals: block.role.reveals(),
                });
                // every block is followed by one spacer row
                row = row.saturating_add(height).saturating_add(1);
            }
        }

        Self {
            width,
            section_tops,
            blocks,
            content_height: row.saturating_add(FOOTER_ROWS),
        }
    }

    /// Extents of reveal-eligible blocks, in document order
    pub fn reveal_extents(&self) -> Vec<Extent> {
        self.blocks
            .iter()
            .filter(|b| b.reveals)
            .map(|b| b.extent)
            .collect()
    }

    pub fn max_scroll(&self, viewport_height: u16) -> u16 {
        self.content_height.saturating_sub(viewport_height)
    }
}

/// Usable text column width
pub fn text_width(width: u16) -> u16 {
    width.saturating_sub(CONTENT_PADDING * 2).max(10)
}

/// Rows a block occupies, excluding the trailing spacer
pub fn block_height(block: &Block, text_width: u16) -> u16 {
    match block.role {
        BlockRole::Badge => 1,
        BlockRole::Text => wrap(&block.body, text_width).len() as u16,
        BlockRole::Card | BlockRole::Panel => {
            let title_rows = u16::from(block.title.is_some());
            title_rows + wrap(&block.body, text_width).len() as u16
        }
    }
}

/// Greedy word wrap by display width
pub fn wrap(text: &str, width: u16) -> Vec<String> {
    let width = width.max(1) as usize;
    let mut lines = Vec::new();

    for paragraph in text.lines() {
        if paragraph.is_empty() {
            lines.push(String::new());
            continue;
        }
        let mut line = String::new();
        for word in paragraph.split_whitespace() {
            if line.is_empty() {
                line = word.to_string();
            } else if line.width() + 1 + word.width() <= width {
                line.push(' ');
                line.push_str(word);
            } else {
                lines.push(std::mem::take(&mut line));
                line = word.to_string();
            }
        }
        if !line.is_empty() {
            lines.push(line);
        }
    }

    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}
