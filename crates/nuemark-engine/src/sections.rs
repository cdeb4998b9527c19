//! Section segmentation by heading level.

use std::ops::Range;

use crate::parsing::blocks::Block;

/// Headings at this level or above start a new section.
pub const DEFAULT_SECTION_LEVEL: u8 = 2;

/// Index ranges of the sections in `blocks`.
///
/// Each section starts at a heading with `level <= max_level` and runs up to
/// the next such heading. Blocks before the first one are in no section.
/// Returns `None` when no heading qualifies.
pub fn section_ranges(blocks: &[Block], max_level: u8) -> Option<Vec<Range<usize>>> {
    let starts: Vec<usize> = blocks
        .iter()
        .enumerate()
        .filter(|(_, block)| block.level().is_some_and(|level| level <= max_level))
        .map(|(i, _)| i)
        .collect();
    if starts.is_empty() {
        return None;
    }

    let ends = starts.iter().skip(1).copied().chain([blocks.len()]);
    Some(starts.iter().zip(ends).map(|(&start, end)| start..end).collect())
}

/// The sections of `blocks` as slices. See [`section_ranges`].
pub fn categorize(blocks: &[Block], max_level: u8) -> Option<Vec<&[Block]>> {
    let ranges = section_ranges(blocks, max_level)?;
    Some(ranges.into_iter().map(|range| &blocks[range]).collect())
}
