//! Input selection: plain file or an entry inside a zip archive

use crate::convert::{convert_file, convert_zip_entry};
use crate::{ConvertOptions, Result};
use std::fmt;
use std::io::Write;
use std::path::PathBuf;

/// Separator between an archive path and the entry inside it
pub const ARCHIVE_SEPARATOR: char = '!';

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StlSource {
    File(PathBuf),
    ZipEntry { archive: PathBuf, entry: String },
}

impl StlSource {
    /// `parts.zip!cube1.stl` names an archive entry, anything else a file.
    pub fn parse(arg: &str) -> Self {
        if let Some((archive, entry)) = arg.split_once(ARCHIVE_SEPARATOR) {
            if archive.to_ascii_lowercase().ends_with(".zip") && !entry.is_empty() {
                return StlSource::ZipEntry {
                    archive: PathBuf::from(archive),
                    entry: entry.trim_start_matches('/').to_string(),
                };
            }
        }
        StlSource::File(PathBuf::from(arg))
    }

    /// Convert this source into `output`, returning the number of facets
    pub fn convert<W: Write>(&self, output: W, options: &ConvertOptions) -> Result<u32> {
        match self {
            StlSource::File(path) => convert_file(path, output, options),
            StlSource::ZipEntry { archive, entry } => {
                convert_zip_entry(archive, entry, output, options)
            }
        }
    }
}

impl fmt::Display for StlSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StlSource::File(path) => write!(f, "{}", path.display()),
            StlSource::ZipEntry { archive, entry } => {
                write!(f, "{}{}{}", archive.display(), ARCHIVE_SEPARATOR, entry)
            }
        }
    }
}
