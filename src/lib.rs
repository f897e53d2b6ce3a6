//! # stl-ascii
//!
//! Streaming converter from binary STL to ASCII STL.
//!
//! Faces are decoded one at a time and written immediately; the mesh is never
//! held in memory.
//!
//! ## Example
//!
//! ```rust,no_run
//! use stl_ascii::{convert_file, ConvertOptions};
//!
//! let stdout = std::io::stdout();
//! let facets = convert_file("cube.stl", stdout.lock(), &ConvertOptions::default())?;
//! eprintln!("{} facets", facets);
//! # Ok::<(), stl_ascii::Error>(())
//! ```

pub mod convert;
pub mod error;
pub mod log;
pub mod options;
pub mod reader;
pub mod runner;
pub mod source;
pub mod types;
pub mod utils;
pub mod writer;

// Re-exports
pub use convert::{convert, convert_file, convert_zip_entry};
pub use error::{Error, Result};
pub use log::LogFile;
pub use options::{ConvertOptions, LogTarget, MeshName, RunConfig, DEFAULT_MESH_NAME};
pub use reader::BinaryStlReader;
pub use source::StlSource;
pub use types::Triangle;
pub use utils::TempFolder;
pub use writer::{AsciiStlWriter, NumberFormat};
