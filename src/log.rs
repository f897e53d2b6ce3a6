//! Run log: one timestamped line per conversion event

use crate::utils::date_time_filename;
use crate::{Error, Result, StlSource};
use chrono::Local;
use std::env;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

pub struct LogFile {
    writer: BufWriter<File>,
    path: PathBuf,
}

impl LogFile {
    /// Create a log file at `path`, or a timestamped one in the temp folder.
    pub fn new(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) if !path.as_os_str().is_empty() => path.to_path_buf(),
            _ => env::temp_dir().join(date_time_filename("stl_ascii_", ".log")),
        };

        let file = File::create(&path).map_err(|e| {
            Error::FileLoad(format!("Unable to create file {}: {}", path.display(), e))
        })?;

        Ok(Self {
            writer: BufWriter::new(file),
            path,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Record the input about to be converted
    pub fn source(&mut self, source: &StlSource) -> Result<()> {
        self.line(format_args!("Converting {}", source))
    }

    /// Record a completed conversion
    pub fn facets(&mut self, count: u32) -> Result<()> {
        self.line(format_args!("Wrote {} facets", count))
    }

    /// Record the error that ended the conversion
    pub fn failure(&mut self, err: &Error) -> Result<()> {
        self.line(format_args!("Conversion failed: {}", err))
    }

    fn line(&mut self, message: std::fmt::Arguments<'_>) -> Result<()> {
        let stamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        writeln!(self.writer, "[{}] {}", stamp, message)?;
        self.writer.flush()?;
        Ok(())
    }
}
