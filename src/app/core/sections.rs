//! Scroll-driven active section.
//!
//! The active section is re-derived from the current scroll offset every
//! time it changes; nothing about previous positions is remembered.

use crate::app::SectionId;

/// Header compensation for pixel-based layouts (a sticky 120 unit header).
pub const DEFAULT_HEADER_OFFSET: u32 = 120;

/// Return the section that should be highlighted for `scroll_offset`.
///
/// `tops` pairs each section with the position of its top edge, in declared
/// order. The scan runs from the last section to the first and the first
/// section whose top is at or above `scroll_offset + header_offset` wins.
/// When no section qualifies (content above the first anchor) the first
/// declared section is returned, so there is always exactly one answer.
pub fn active_section(
    scroll_offset: u32,
    tops: &[(SectionId, u32)],
    header_offset: u32,
) -> SectionId {
    let threshold = scroll_offset.saturating_add(header_offset);
    tops.iter()
        .rev()
        .find(|(_, top)| *top <= threshold)
        .or_else(|| tops.first())
        .map(|(id, _)| *id)
        .unwrap_or(SectionId::Home)
}
