//! Binary to ASCII conversion pass

use crate::{AsciiStlWriter, BinaryStlReader, ConvertOptions, Error, Result};
use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::Path;

/// Convert a binary STL stream into ASCII STL.
///
/// Each face is written as soon as it is decoded. Returns the number of facets
/// written. If the header or face count is short, nothing is written; a failure
/// later leaves the facets already emitted in `output`.
///
/// # Example
///
/// ```rust,no_run
/// use stl_ascii::{convert, ConvertOptions};
/// use std::fs::File;
///
/// let input = File::open("cube.stl")?;
/// let facets = convert(input, std::io::stdout(), &ConvertOptions::default())?;
/// # Ok::<(), stl_ascii::Error>(())
/// ```
pub fn convert<R: Read, W: Write>(input: R, output: W, options: &ConvertOptions) -> Result<u32> {
    let mut reader = BinaryStlReader::new(input);
    reader.skip_header()?;
    let face_count = reader.read_face_count()?;

    let name = options.mesh_name.resolve(reader.header());
    let mut writer = AsciiStlWriter::with_number_format(output, options.number_format);

    writer.begin_mesh(&name)?;
    for _ in 0..face_count {
        let triangle = reader.read_triangle()?;
        writer.write_facet(&triangle)?;
    }
    writer.end_mesh(&name)?;
    writer.flush()?;

    Ok(face_count)
}

/// Convert a binary STL file
pub fn convert_file<P: AsRef<Path>, W: Write>(
    path: P,
    output: W,
    options: &ConvertOptions,
) -> Result<u32> {
    let file = File::open(path.as_ref()).map_err(|e| {
        Error::FileLoad(format!(
            "Failed to open STL file {}: {}",
            path.as_ref().display(),
            e
        ))
    })?;
    convert(BufReader::new(file), output, options)
}

/// Convert a binary STL stored inside a zip archive
pub fn convert_zip_entry<P: AsRef<Path>, W: Write>(
    archive: P,
    entry: &str,
    output: W,
    options: &ConvertOptions,
) -> Result<u32> {
    let file = File::open(archive.as_ref()).map_err(|e| {
        Error::FileLoad(format!(
            "Failed to open archive {}: {}",
            archive.as_ref().display(),
            e
        ))
    })?;
    let mut archive = zip::ZipArchive::new(BufReader::new(file))
        .map_err(|e| Error::Archive(format!("Failed to read zip: {}", e)))?;
    let entry_reader = archive
        .by_name(entry)
        .map_err(|_| Error::Archive(format!("{} not found in zip", entry)))?;
    convert(entry_reader, output, options)
}
