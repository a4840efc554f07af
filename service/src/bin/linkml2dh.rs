//! `linkml2dh` command-line tool
//!
//! Projects one class of a `LinkML` schema into a DataHarmonizer TSV template.

use linkml_service::cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    // The app has already reported the error on stderr
    match cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}
