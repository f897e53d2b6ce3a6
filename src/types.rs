//! Basic types for decoded STL data

use nalgebra::Vector3;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One facet of a binary STL file
///
/// Field order matches the 50-byte record: normal first, then the three vertices.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Triangle {
    /// Facet normal as stored in the file (not recomputed)
    pub normal: Vector3<f32>,
    /// Vertices in file order
    pub vertices: [Vector3<f32>; 3],
}

impl Triangle {
    /// Create a new triangle
    pub fn new(
        normal: Vector3<f32>,
        v1: Vector3<f32>,
        v2: Vector3<f32>,
        v3: Vector3<f32>,
    ) -> Self {
        Self {
            normal,
            vertices: [v1, v2, v3],
        }
    }
}

/// `normal (x, y, z); v1 (x, y, z);v2 (x, y, z);v3 (x, y, z);` with six decimals
impl fmt::Display for Triangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.normal;
        write!(f, "normal ({:.6}, {:.6}, {:.6}); ", n.x, n.y, n.z)?;
        for (i, v) in self.vertices.iter().enumerate() {
            write!(f, "v{} ({:.6}, {:.6}, {:.6});", i + 1, v.x, v.y, v.z)?;
        }
        Ok(())
    }
}
