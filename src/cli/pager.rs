//! Five-row pages of the filtered table, on request.

use std::io::{self, BufRead, Write};

use crate::{
    cli::prompt::Console,
    core::data::TripTable,
    render::table::render_table,
};

/// Show pages while the user answers `yes`. Returns the number of pages shown.
pub fn show_raw_data<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    table: &TripTable,
    page_size: usize,
    max_width: usize,
) -> io::Result<usize> {
    let mut wants_more = console.confirm("Do you want to see some raw data? Enter yes or no.\n")?;
    let mut offset = 0;
    let mut pages = 0;

    while wants_more {
        let end = (offset + page_size).min(table.len());
        let rows: Vec<Vec<&str>> = table.trips[offset..end]
            .iter()
            .map(|t| t.raw.iter().collect())
            .collect();
        write!(
            console.out(),
            "{}",
            render_table(&table.headers, &rows, max_width)
        )?;
        pages += 1;

        offset += page_size;
        if offset >= table.len() {
            let notice = console.palette().notice("You have reached the end of file!");
            console.say(&notice)?;
            break;
        }
        wants_more = console.confirm(&format!(
            "\nDo you want to see the next {page_size} lines? Enter yes or no.\n"
        ))?;
    }
    Ok(pages)
}
