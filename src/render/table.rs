//! reStructuredText-style grid for the raw-data pager.
//!
//! ```text
//! ============ ===========
//!  Start Time   User Type
//! ============ ===========
//!  2017-06-23   Subscriber
//! ============ ===========
//! ```

use comfy_table::{Cell, ContentArrangement, Table, TableComponent};
use terminal_size::{Width, terminal_size};

/// `=` rules on top, bottom and under the header; nothing else is drawn.
///
/// Component order is comfy-table's preset order (borders, header line,
/// inner lines, intersections, corners).
const RST_PRESET: &str = "  == =             ";

/// Current terminal width (80 fallback).
#[inline]
#[must_use]
pub fn terminal_width() -> usize {
    terminal_size().map_or(80, |(Width(w), _)| usize::from(w))
}

/// Render `rows` under `headers`, wrapping cells to stay within `max_width`.
#[must_use]
pub fn render_table(headers: &[String], rows: &[Vec<&str>], max_width: usize) -> String {
    let mut table = Table::new();
    table
        .load_preset(RST_PRESET)
        // a blank separator still splits the rules per column
        .set_style(TableComponent::VerticalLines, ' ')
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(u16::try_from(max_width).unwrap_or(u16::MAX))
        .set_header(headers.iter().map(Cell::new));

    for row in rows {
        table.add_row(row.iter().copied().map(Cell::new));
    }
    format!("{table}\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(h: &[&str]) -> Vec<String> {
        h.iter().map(|s| (*s).to_owned()).collect()
    }

    /// Display columns of a line holding ASCII and CJK text only.
    fn columns(line: &str) -> usize {
        line.chars().map(|c| if c.is_ascii() { 1 } else { 2 }).sum()
    }

    #[test]
    fn grid_layout() {
        let out = render_table(
            &headers(&["Start Station", "User Type"]),
            &[vec!["Canal St", "Subscriber"], vec!["Clark St", "Customer"]],
            200,
        );
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 6);
        assert!(lines[0].chars().all(|c| c == '=' || c == ' '));
        assert!(lines[0].contains(' '), "one rule per column");
        assert_eq!(lines[0], lines[2]);
        assert_eq!(lines[0], lines[5]);
        assert!(lines[1].contains("Start Station"));
        assert!(lines[3].contains("Canal St") && lines[3].contains("Subscriber"));
        // cells line up with the header
        assert_eq!(lines[1].find("User Type"), lines[3].find("Subscriber"));
        assert!(!out.contains('|'));
    }

    #[test]
    fn wide_tables_wrap_to_fit() {
        let long = "x".repeat(60);
        let out = render_table(
            &headers(&["Station", "Type"]),
            &[vec![long.as_str(), "Subscriber"]],
            40,
        );
        assert!(out.lines().all(|l| l.chars().count() <= 40), "{out}");
        assert!(out.lines().count() > 5, "long cell wraps: {out}");
        let xs: usize = out.lines().map(|l| l.matches('x').count()).sum();
        assert_eq!(xs, 60, "no content is dropped");
    }

    #[test]
    fn double_width_cells_stay_aligned() {
        let out = render_table(
            &headers(&["Start Station", "User Type"]),
            &[vec!["東京駅前", "Subscriber"], vec!["Canal St", "Customer"]],
            200,
        );
        let lines: Vec<&str> = out.lines().collect();
        let rule = columns(lines[0]);
        assert!(lines.iter().all(|l| columns(l) <= rule), "{out}");
        let sub = lines[3].find("Subscriber").unwrap();
        let cus = lines[4].find("Customer").unwrap();
        let head = lines[1].find("User Type").unwrap();
        assert_eq!(columns(&lines[3][..sub]), columns(&lines[4][..cus]));
        assert_eq!(columns(&lines[3][..sub]), head);
    }
}
