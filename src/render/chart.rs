//! Horizontal bar chart with eighth-block sub-cell resolution.
//!
//! The largest count spans `width` full cells. Each cell is split into 8
//! horizontal steps; the boundary cell is drawn with one of the partial
//! blocks U+2589 (7/8) .. U+258F (1/8). A bar that rounds to nothing is
//! drawn as a single thin `▏` so every category stays visible.

use crate::core::constants::{COUNT_WIDTH, EIGHTHS_PER_CELL};

const FULL_BLOCK: char = '█';
const THIN_BLOCK: char = '▏';
/// Drawn between label and count.
const AXIS: char = '▏';

/// Partial block covering `eighths` (1..=7) eighths of a cell.
#[inline]
fn partial_block(eighths: u64) -> char {
    debug_assert!((1..EIGHTHS_PER_CELL).contains(&eighths));
    // U+2588 is full; each step towards U+258F removes one eighth
    let steps_down = u32::try_from(EIGHTHS_PER_CELL - eighths).unwrap_or(0);
    char::from_u32(u32::from(FULL_BLOCK) + steps_down).unwrap_or(THIN_BLOCK)
}

/// Glyphs for one bar of `count` against the chart maximum.
#[must_use]
pub fn bar(count: u64, max_count: u64, width: u64) -> String {
    if max_count == 0 {
        return THIN_BLOCK.to_string();
    }
    let eighths = count.saturating_mul(width * EIGHTHS_PER_CELL) / max_count;
    let (full, rem) = (eighths / EIGHTHS_PER_CELL, eighths % EIGHTHS_PER_CELL);

    let mut out: String =
        std::iter::repeat_n(FULL_BLOCK, usize::try_from(full).unwrap_or(0)).collect();
    if rem > 0 {
        out.push(partial_block(rem));
    }
    if out.is_empty() {
        out.push(THIN_BLOCK);
    }
    out
}

/// One line per `(label, count)`, labels right-aligned to the longest.
///
/// Input order is preserved; callers pass value counts, largest first.
#[must_use]
pub fn bar_chart(data: &[(String, u64)], width: u64) -> Vec<String> {
    let Some(max_count) = data.iter().map(|(_, n)| *n).max() else {
        return Vec::new();
    };
    let label_w = data
        .iter()
        .map(|(l, _)| l.chars().count())
        .max()
        .unwrap_or(0);
    let count_w = COUNT_WIDTH;

    data.iter()
        .map(|(label, count)| {
            format!(
                "{label:>label_w$} {AXIS} {count:>count_w$} {}",
                bar(*count, max_count, width)
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::constants::CHART_WIDTH;

    fn pairs(v: &[(&str, u64)]) -> Vec<(String, u64)> {
        v.iter().map(|(l, n)| ((*l).to_owned(), *n)).collect()
    }

    #[test]
    fn largest_bar_fills_the_width() {
        let b = bar(1234, 1234, CHART_WIDTH);
        assert_eq!(b.chars().count(), 25);
        assert!(b.chars().all(|c| c == FULL_BLOCK));
    }

    #[test]
    fn zero_count_keeps_one_glyph() {
        assert_eq!(bar(0, 10, CHART_WIDTH), "▏");
        assert_eq!(bar(0, 0, CHART_WIDTH), "▏");
    }

    #[test]
    fn boundary_cell_uses_partial_blocks() {
        // 1/200 of the max is exactly one eighth
        assert_eq!(bar(1, 200, CHART_WIDTH), "▏");
        assert_eq!(bar(4, 200, CHART_WIDTH), "▌");
        assert_eq!(bar(7, 200, CHART_WIDTH), "▉");
        assert_eq!(bar(12, 200, CHART_WIDTH), "█▌");
    }

    #[test]
    fn partial_glyph_table() {
        let glyphs: String = (1..8).map(partial_block).collect();
        assert_eq!(glyphs, "▏▎▍▌▋▊▉");
    }

    #[test]
    fn labels_and_counts_are_aligned() {
        let lines = bar_chart(
            &pairs(&[("Subscriber", 200), ("Customer", 100)]),
            CHART_WIDTH,
        );
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("Subscriber ▏  200 █"));
        assert!(lines[1].starts_with("  Customer ▏  100 "));
        let half = lines[1].rsplit(' ').next().unwrap();
        assert_eq!(half.chars().count(), 13);
        assert!(half.ends_with('▌'));
    }

    #[test]
    fn empty_input_renders_nothing() {
        assert!(bar_chart(&[], CHART_WIDTH).is_empty());
    }
}
