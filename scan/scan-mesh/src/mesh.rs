//! Indexed triangle mesh with optional vertex colors.

use nalgebra::{Point3, Vector4};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An indexed triangle mesh in camera or world space.
///
/// Vertices and faces are stored separately, with faces referencing
/// vertices by index. Vertex colors, when present, form a list parallel
/// to the vertices.
///
/// # Memory Layout
///
/// - `vertices`: `Vec<Point3<f32>>` - Vertex positions
/// - `faces`: `Vec<[u32; 3]>` - Triangle faces as vertex indices
/// - `colors`: `Vec<Vector4<f32>>` - RGBA in `[0, 1]`, empty or one per vertex
///
/// # Example
///
/// ```
/// use nalgebra::Point3;
/// use scan_mesh::TriangleMesh;
///
/// let mut mesh = TriangleMesh::new();
/// mesh.vertices.push(Point3::new(0.0, 0.0, 1.0));
/// mesh.vertices.push(Point3::new(1.0, 0.0, 1.0));
/// mesh.vertices.push(Point3::new(0.0, 1.0, 1.0));
/// mesh.faces.push([0, 1, 2]);
///
/// assert_eq!(mesh.vertex_count(), 3);
/// assert_eq!(mesh.face_count(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TriangleMesh {
    /// Vertex positions.
    pub vertices: Vec<Point3<f32>>,

    /// Triangle faces as indices into the vertex array.
    pub faces: Vec<[u32; 3]>,

    /// Per-vertex RGBA colors in `[0, 1]`.
    ///
    /// Either empty (uncolored mesh) or exactly `vertices.len()` entries.
    pub colors: Vec<Vector4<f32>>,
}

impl TriangleMesh {
    /// Creates a new empty mesh.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            vertices: Vec::new(),
            faces: Vec::new(),
            colors: Vec::new(),
        }
    }

    /// Creates a mesh with pre-allocated capacity.
    #[inline]
    #[must_use]
    pub fn with_capacity(vertex_count: usize, face_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            faces: Vec::with_capacity(face_count),
            colors: Vec::new(),
        }
    }

    /// Number of vertices.
    #[inline]
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of triangle faces.
    #[inline]
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// True if the mesh has neither vertices nor faces.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() && self.faces.is_empty()
    }

    /// True if the mesh carries per-vertex colors.
    ///
    /// When true, `colors.len() == vertices.len()` holds.
    #[inline]
    #[must_use]
    pub fn has_colors(&self) -> bool {
        !self.colors.is_empty()
    }

    /// Checks the color-list invariant: empty or one color per vertex.
    #[must_use]
    pub fn has_consistent_colors(&self) -> bool {
        self.colors.is_empty() || self.colors.len() == self.vertices.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mesh_counts() {
        let mut mesh = TriangleMesh::new();
        assert!(mesh.is_empty());

        mesh.vertices.push(Point3::new(0.0, 0.0, 1.0));
        mesh.vertices.push(Point3::new(1.0, 0.0, 1.0));
        mesh.vertices.push(Point3::new(0.0, 1.0, 1.0));
        mesh.faces.push([0, 1, 2]);

        assert!(!mesh.is_empty());
        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.face_count(), 1);
    }

    #[test]
    fn mesh_with_capacity_is_empty() {
        let mesh = TriangleMesh::with_capacity(100, 200);
        assert!(mesh.is_empty());
        assert!(mesh.vertices.capacity() >= 100);
    }

    #[test]
    fn color_invariant() {
        let mut mesh = TriangleMesh::new();
        mesh.vertices.push(Point3::new(0.0, 0.0, 1.0));
        mesh.vertices.push(Point3::new(1.0, 0.0, 1.0));

        assert!(!mesh.has_colors());
        assert!(mesh.has_consistent_colors());

        mesh.colors.push(Vector4::new(1.0, 0.0, 0.0, 1.0));
        assert!(mesh.has_colors());
        assert!(!mesh.has_consistent_colors());

        mesh.colors.push(Vector4::new(0.0, 1.0, 0.0, 1.0));
        assert!(mesh.has_consistent_colors());
    }
}
