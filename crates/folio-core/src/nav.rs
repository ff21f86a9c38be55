//! Anchor navigation targets.

use crate::page::Page;

/// Scroll offset that puts `section_top` just below the sticky header
pub fn anchor_offset(section_top: u16, header_height: u16, gap: u16) -> u16 {
    section_top.saturating_sub(header_height.saturating_add(gap))
}

/// Resolve a section id to its scroll target.
///
/// `section_tops` parallels `page.sections` in document order. Unknown ids
/// resolve to nothing; navigation is then a silent no-op.
pub fn resolve_anchor(
    page: &Page,
    section_tops: &[u16],
    id: &str,
    header_height: u16,
    gap: u16,
) -> Option<u16> {
    let idx = page.section_index(id)?;
    let top = section_tops.get(idx)?;
    Some(anchor_offset(*top, header_height, gap))
}
