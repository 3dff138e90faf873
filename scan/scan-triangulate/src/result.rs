//! Result types for depth-map triangulation.

// Block and triangle counts don't overflow in practice
#![allow(clippy::cast_precision_loss)]

use scan_mesh::TriangleMesh;

/// Result of depth-map triangulation.
#[derive(Debug, Clone)]
pub struct TriangulationResult {
    /// The triangulated mesh, in camera space.
    pub mesh: TriangleMesh,

    /// Number of 2×2 blocks visited.
    pub blocks_visited: usize,

    /// Number of blocks skipped for lacking valid depth samples.
    pub blocks_skipped: usize,

    /// Number of triangles emitted into the mesh.
    pub triangles_emitted: usize,

    /// Number of candidate triangles dropped at depth discontinuities.
    pub triangles_dropped: usize,

    /// Whether the mesh was colored from a color image.
    pub colored: bool,
}

impl TriangulationResult {
    /// Fraction of candidate triangles dropped by discontinuity
    /// filtering.
    #[must_use]
    pub fn drop_ratio(&self) -> f64 {
        let candidates = self.triangles_emitted + self.triangles_dropped;
        if candidates == 0 {
            0.0
        } else {
            self.triangles_dropped as f64 / candidates as f64
        }
    }

    /// True if discontinuity filtering removed any triangle.
    #[must_use]
    pub const fn was_filtered(&self) -> bool {
        self.triangles_dropped > 0
    }
}

impl std::fmt::Display for TriangulationResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Triangulation: {} triangles from {} blocks ({} dropped at discontinuities, {} blocks skipped{})",
            self.triangles_emitted,
            self.blocks_visited,
            self.triangles_dropped,
            self.blocks_skipped,
            if self.colored { ", colored" } else { "" }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drop_ratio() {
        let result = TriangulationResult {
            mesh: TriangleMesh::new(),
            blocks_visited: 100,
            blocks_skipped: 10,
            triangles_emitted: 150,
            triangles_dropped: 50,
            colored: false,
        };

        assert!((result.drop_ratio() - 0.25).abs() < 1e-9);
        assert!(result.was_filtered());
    }

    #[test]
    fn drop_ratio_no_candidates() {
        let result = TriangulationResult {
            mesh: TriangleMesh::new(),
            blocks_visited: 0,
            blocks_skipped: 0,
            triangles_emitted: 0,
            triangles_dropped: 0,
            colored: false,
        };

        assert!(result.drop_ratio().abs() < 1e-9);
        assert!(!result.was_filtered());
    }

    #[test]
    fn display_mentions_counts() {
        let result = TriangulationResult {
            mesh: TriangleMesh::new(),
            blocks_visited: 9,
            blocks_skipped: 1,
            triangles_emitted: 12,
            triangles_dropped: 4,
            colored: true,
        };

        let text = format!("{result}");
        assert!(text.contains("12 triangles"));
        assert!(text.contains("colored"));
    }
}
