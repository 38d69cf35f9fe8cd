//! Output mesh geometry.

use nalgebra::{Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::color::Rgba;

/// One output mesh vertex.
///
/// Carries everything the rendering layer consumes: position, shading
/// normal, the raw process scalar the vertex was colored by, and the
/// resolved color.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MeshVertex {
    /// Position in millimeters.
    pub position: Point3<f64>,

    /// Unit shading normal.
    pub normal: Vector3<f64>,

    /// Raw scalar value from the selected process channel.
    pub scalar: f64,

    /// Color resolved through the active color scale.
    pub color: Rgba,
}

/// One contiguous swept solid within the output mesh.
///
/// Degenerate samples and segments split the path into islands; each
/// island owns a disjoint, contiguous range of vertices and faces, so
/// downstream consumers can slice the buffers per island without an index
/// remap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MeshIsland {
    /// First vertex index owned by this island.
    pub vertex_offset: usize,

    /// Number of vertices owned by this island.
    pub vertex_count: usize,

    /// First face index owned by this island.
    pub face_offset: usize,

    /// Number of faces owned by this island.
    pub face_count: usize,

    /// Input sample index of the island's first cross-section.
    pub first_sample: usize,

    /// Input sample index of the island's last cross-section.
    pub last_sample: usize,
}

impl MeshIsland {
    /// Vertex index range owned by this island.
    #[must_use]
    pub const fn vertex_range(&self) -> std::ops::Range<usize> {
        self.vertex_offset..self.vertex_offset + self.vertex_count
    }

    /// Face index range owned by this island.
    #[must_use]
    pub const fn face_range(&self) -> std::ops::Range<usize> {
        self.face_offset..self.face_offset + self.face_count
    }
}

/// The output mesh: vertices, triangle faces, and island partition.
///
/// Owned exclusively by the build's caller and immutable once returned.
/// Faces use counter-clockwise winding viewed from outside; every face
/// index is in range (checkable with [`MeshGeometry::is_well_formed`]).
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MeshGeometry {
    /// Vertex data, emitted in path order.
    pub vertices: Vec<MeshVertex>,

    /// Triangle faces as indices into the vertex array.
    pub faces: Vec<[u32; 3]>,

    /// Contiguous islands partitioning the vertex and face buffers.
    pub islands: Vec<MeshIsland>,
}

impl MeshGeometry {
    /// Creates an empty mesh.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            vertices: Vec::new(),
            faces: Vec::new(),
            islands: Vec::new(),
        }
    }

    /// Number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of triangle faces.
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Whether the mesh has no geometry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() && self.faces.is_empty()
    }

    /// Checks structural invariants: face indices in range, island ranges
    /// disjoint, contiguous, and covering the buffers.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        let n = self.vertices.len();
        if !self
            .faces
            .iter()
            .all(|face| face.iter().all(|&i| (i as usize) < n))
        {
            return false;
        }

        let mut next_vertex = 0;
        let mut next_face = 0;
        for island in &self.islands {
            if island.vertex_offset != next_vertex || island.face_offset != next_face {
                return false;
            }
            next_vertex += island.vertex_count;
            next_face += island.face_count;
        }
        next_vertex == self.vertices.len() && next_face == self.faces.len()
    }
}
