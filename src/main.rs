use std::process::ExitCode;

fn main() -> ExitCode {
    // errors have already been reported on the console by the time we get here
    match bikeshare_stats::cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}
