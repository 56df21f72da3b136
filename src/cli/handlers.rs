use std::io::{self, BufRead, Write};

use log::info;

use crate::{
    core::{config::Config, data::load_city, error::AppError},
    render::table::terminal_width,
};

use super::{
    pager::show_raw_data,
    prompt::{Console, get_filters},
    report,
};

/// Prompt → load → report, until the user declines a restart.
///
/// Errors from prompting or loading end the session; an empty selection
/// just prompts again.
pub fn session<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    cfg: &Config,
) -> Result<(), AppError> {
    let p = console.palette();
    console.say(&p.banner("Welcome to Bikeshare Project!\n\n"))?;

    loop {
        let sel = get_filters(console, cfg)?;
        info!("selection: {} / {} / {}", sel.city, sel.month, sel.day);

        let table = load_city(&cfg.data_dir, &sel)?;
        if table.is_empty() {
            console.say(&p.notice(
                "Not enough data to continue processing, please try other filters",
            ))?;
            continue;
        }

        let width = cfg.table_width.unwrap_or_else(terminal_width);
        show_raw_data(console, &table, cfg.page_size, width)?;
        let out = console.out();
        report::time_report(out, &table, p)?;
        report::station_report(out, &table, p)?;
        report::duration_report(out, &table, cfg)?;
        report::user_report(out, &table, cfg)?;

        if !console.confirm("\nWould you like to restart? Enter yes or no.\n")? {
            break;
        }
    }
    info!("session finished");
    Ok(())
}

/// Print the error (if any) and the closing line.
pub fn farewell<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    err: Option<&AppError>,
) -> io::Result<()> {
    let p = console.palette();
    match err {
        Some(e) => {
            console.say(&p.error(&e.to_string()))?;
            console.say(&p.error("Bye!"))
        }
        None => console.say(&p.label("Bye!")),
    }
}
