//! Binary STL decoding
//!
//! Layout (little-endian): 80-byte header, `u32` face count, then one 50-byte
//! record per face (normal, three vertices, 2 attribute bytes).

use crate::{Error, Result, Triangle};
use nalgebra::Vector3;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Size of the leading header block
pub const HEADER_SIZE: usize = 80;
/// Size of the face count field
pub const FACE_COUNT_SIZE: usize = 4;
/// Size of one packed `f32` triple
pub const VECTOR3_SIZE: usize = 12;
/// Size of the trailing attribute field of a face record
pub const ATTRIBUTE_SIZE: usize = 2;
/// Size of one face record
pub const TRIANGLE_SIZE: usize = 4 * VECTOR3_SIZE + ATTRIBUTE_SIZE;

const SECTION_HEADER: &str = "header";
const SECTION_COUNT: &str = "triangle count";
const SECTION_DATA: &str = "triangle data";

/// Forward-only reader over a binary STL stream
pub struct BinaryStlReader<R> {
    input: R,
    header: Option<[u8; HEADER_SIZE]>,
    expected_triangles: u32,
}

impl BinaryStlReader<BufReader<File>> {
    /// Open a binary STL file for reading
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use stl_ascii::BinaryStlReader;
    ///
    /// let mut reader = BinaryStlReader::open("cube.stl")?;
    /// let count = reader.read_triangles(|i, tri| {
    ///     println!("{}: {}", i, tri);
    ///     Ok(())
    /// })?;
    /// # Ok::<(), stl_ascii::Error>(())
    /// ```
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref()).map_err(|e| {
            Error::FileLoad(format!(
                "Failed to open STL file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: Read> BinaryStlReader<R> {
    pub fn new(input: R) -> Self {
        Self {
            input,
            header: None,
            expected_triangles: 0,
        }
    }

    /// Advance past the 80-byte header.
    ///
    /// The bytes are kept and available through [`header`](Self::header).
    pub fn skip_header(&mut self) -> Result<()> {
        let header = self.read_bytes::<HEADER_SIZE>(SECTION_HEADER)?;
        self.header = Some(header);
        Ok(())
    }

    /// Header bytes, once [`skip_header`](Self::skip_header) has run
    pub fn header(&self) -> Option<&[u8; HEADER_SIZE]> {
        self.header.as_ref()
    }

    /// Read the unsigned little-endian face count
    pub fn read_face_count(&mut self) -> Result<u32> {
        let bytes = self.read_bytes::<FACE_COUNT_SIZE>(SECTION_COUNT)?;
        self.expected_triangles = u32::from_le_bytes(bytes);
        Ok(self.expected_triangles)
    }

    /// Face count reported by the file. Zero until the count has been read.
    pub fn expected_triangles(&self) -> u32 {
        self.expected_triangles
    }

    /// Read three consecutive little-endian `f32` values
    pub fn read_vector3(&mut self) -> Result<Vector3<f32>> {
        let bytes = self.read_bytes::<VECTOR3_SIZE>(SECTION_DATA)?;
        let component = |i: usize| {
            f32::from_le_bytes([bytes[i], bytes[i + 1], bytes[i + 2], bytes[i + 3]])
        };
        Ok(Vector3::new(component(0), component(4), component(8)))
    }

    /// Skip the 2-byte attribute field, whatever its value
    pub fn skip_attribute_bytes(&mut self) -> Result<()> {
        self.read_bytes::<ATTRIBUTE_SIZE>(SECTION_DATA)?;
        Ok(())
    }

    /// Decode one face record: normal, three vertices, attribute bytes.
    pub fn read_triangle(&mut self) -> Result<Triangle> {
        let normal = self.read_vector3()?;
        let v1 = self.read_vector3()?;
        let v2 = self.read_vector3()?;
        let v3 = self.read_vector3()?;
        self.skip_attribute_bytes()?;
        Ok(Triangle::new(normal, v1, v2, v3))
    }

    /// Read the whole stream, handing each face to `on_face` as it is decoded.
    ///
    /// Returns the number of faces read. Stops at the first decode error or the
    /// first error returned by `on_face`.
    pub fn read_triangles<F>(&mut self, mut on_face: F) -> Result<u32>
    where
        F: FnMut(u32, &Triangle) -> Result<()>,
    {
        self.skip_header()?;
        let count = self.read_face_count()?;
        for index in 0..count {
            let triangle = self.read_triangle()?;
            on_face(index, &triangle)?;
        }
        Ok(count)
    }

    fn read_bytes<const N: usize>(&mut self, section: &'static str) -> Result<[u8; N]> {
        let mut bytes = [0u8; N];
        self.input
            .read_exact(&mut bytes)
            .map_err(|e| Error::from_read(e, section))?;
        Ok(bytes)
    }
}
