//! Command-line boundary
//!
//! Everything the user sees goes to `out`: the document, the usage line, or an
//! `error <message>` line. Process exit status is not used to signal failure.

use crate::options::{LogTarget, RunConfig};
use crate::{LogFile, StlSource};
use std::io::{self, Write};

/// Printed when the argument count is not exactly one
pub const USAGE: &str = "Usage: ./stl_parser.rb filename";

/// Run the converter for the given arguments (program name excluded).
///
/// Only failures writing to `out` itself are returned.
pub fn run<W: Write>(args: &[String], out: &mut W, config: &RunConfig) -> io::Result<()> {
    let [arg] = args else {
        writeln!(out, "{}", USAGE)?;
        return out.flush();
    };

    let mut log = open_log(&config.log);
    let source = StlSource::parse(arg);
    log_event(&mut log, |log| log.source(&source));

    match source.convert(&mut *out, &config.convert) {
        Ok(facets) => log_event(&mut log, |log| log.facets(facets)),
        Err(e) => {
            log_event(&mut log, |log| log.failure(&e));
            writeln!(out, "error {}", e)?;
        }
    }

    out.flush()
}

fn open_log(target: &LogTarget) -> Option<LogFile> {
    let path = match target {
        LogTarget::Disabled => return None,
        LogTarget::TempFolder => None,
        LogTarget::Path(path) => Some(path.as_path()),
    };
    match LogFile::new(path) {
        Ok(log) => Some(log),
        Err(e) => {
            eprintln!("Logging disabled: {}", e);
            None
        }
    }
}

fn log_event<F>(log: &mut Option<LogFile>, event: F)
where
    F: FnOnce(&mut LogFile) -> crate::Result<()>,
{
    if let Some(log) = log {
        if let Err(e) = event(log) {
            eprintln!("Failed to write log: {}", e);
        }
    }
}
