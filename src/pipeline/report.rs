//! Per-file progress lines: stdout for the line itself, the logger (stderr) for error detail.

use colored::Colorize;
use log::{debug, error};
use std::io::{self, Write};

use crate::types::ConversionResult;

/// Called once per finished file, from the worker that converted it.
pub type Reporter = fn(&ConversionResult);

/// Write the `[OK]` / `[Failed]` line for one result.
pub fn write_result<W: Write>(out: &mut W, result: &ConversionResult) -> io::Result<()> {
    let paths = format!("{} -> {}", result.source.display(), result.target.display());
    match &result.error {
        None => writeln!(out, "[{}] {}", "OK".green(), paths),
        Some(_) => writeln!(out, "[{}] {}", "Failed".red(), paths),
    }
}

/// Default reporter. A closed or broken stdout is not an error for the run: the line is dropped.
pub fn report_result(result: &ConversionResult) {
    if let Some(e) = &result.error {
        error!("{}", e);
    }
    if let Err(e) = write_result(&mut io::stdout().lock(), result) {
        debug!("progress line dropped: {}", e);
    }
}
