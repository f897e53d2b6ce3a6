//! Conversion and runtime settings

use crate::reader::HEADER_SIZE;
use crate::NumberFormat;
use std::env;
use std::path::PathBuf;

/// Name written after `solid` / `endsolid` when none is chosen
pub const DEFAULT_MESH_NAME: &str = "untitled";

/// Environment variable that enables the log file
pub const LOG_ENV: &str = "STL_ASCII_LOG";

/// Where the mesh name comes from
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum MeshName {
    /// Always `untitled`
    #[default]
    Untitled,
    /// A caller-supplied name
    Custom(String),
    /// Text of the binary header, up to the first NUL
    FromHeader,
}

impl MeshName {
    /// Resolve the name, given the header bytes that were skipped
    pub fn resolve(&self, header: Option<&[u8; HEADER_SIZE]>) -> String {
        match self {
            MeshName::Untitled => DEFAULT_MESH_NAME.to_string(),
            MeshName::Custom(name) => name.clone(),
            MeshName::FromHeader => header
                .map(|bytes| {
                    let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
                    String::from_utf8_lossy(&bytes[..end]).trim().to_string()
                })
                .filter(|name| !name.is_empty())
                .unwrap_or_else(|| DEFAULT_MESH_NAME.to_string()),
        }
    }
}

/// Settings for one conversion pass
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConvertOptions {
    pub mesh_name: MeshName,
    pub number_format: NumberFormat,
}

impl ConvertOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mesh_name(mut self, mesh_name: MeshName) -> Self {
        self.mesh_name = mesh_name;
        self
    }

    pub fn with_number_format(mut self, number_format: NumberFormat) -> Self {
        self.number_format = number_format;
        self
    }
}

/// Log destination selected by the environment
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LogTarget {
    #[default]
    Disabled,
    /// Timestamped file in the temp folder
    TempFolder,
    Path(PathBuf),
}

/// Process-level settings for the command-line runner
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RunConfig {
    pub convert: ConvertOptions,
    pub log: LogTarget,
}

impl RunConfig {
    /// Read settings from the process environment.
    ///
    /// `STL_ASCII_LOG` unset: no log. Empty: a log file in the temp folder.
    /// Anything else: log to that path.
    pub fn from_env() -> Self {
        let log = match env::var_os(LOG_ENV) {
            None => LogTarget::Disabled,
            Some(value) if value.is_empty() => LogTarget::TempFolder,
            Some(value) => LogTarget::Path(PathBuf::from(value)),
        };
        Self {
            convert: ConvertOptions::default(),
            log,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(text: &[u8]) -> [u8; HEADER_SIZE] {
        let mut bytes = [0u8; HEADER_SIZE];
        bytes[..text.len()].copy_from_slice(text);
        bytes
    }

    #[test]
    fn test_default_options() {
        let options = ConvertOptions::default();
        assert_eq!(options.mesh_name, MeshName::Untitled);
        assert_eq!(options.number_format, NumberFormat::Natural);
    }

    #[test]
    fn test_untitled_ignores_header() {
        let bytes = header(b"cube");
        assert_eq!(MeshName::Untitled.resolve(Some(&bytes)), "untitled");
    }

    #[test]
    fn test_name_from_header() {
        let bytes = header(b"  bracket_v2  ");
        assert_eq!(MeshName::FromHeader.resolve(Some(&bytes)), "bracket_v2");
    }

    #[test]
    fn test_blank_header_falls_back() {
        let bytes = [b' '; HEADER_SIZE];
        assert_eq!(MeshName::FromHeader.resolve(Some(&bytes)), "untitled");
        assert_eq!(MeshName::FromHeader.resolve(None), "untitled");
    }

    #[test]
    fn test_custom_name() {
        let options = ConvertOptions::new()
            .with_mesh_name(MeshName::Custom("part".to_string()))
            .with_number_format(NumberFormat::Fixed(2));
        assert_eq!(options.mesh_name.resolve(None), "part");
        assert_eq!(options.number_format, NumberFormat::Fixed(2));
    }
}
