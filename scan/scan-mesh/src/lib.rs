//! Triangle mesh type for depth-map meshing.
//!
//! This crate provides [`TriangleMesh`], the output contract of the
//! depth-map triangulator: a growable vertex list, a face list, and an
//! optional color list parallel to the vertices. It also provides the
//! camera-to-world transform step applied after triangulation.
//!
//! # Layer 0 Crate
//!
//! This is a Layer 0 crate with **zero framework dependencies**. It can be
//! used in:
//! - CLI tools
//! - Servers
//! - Offline reconstruction pipelines
//!
//! # Color Contract
//!
//! `colors` is either empty (uncolored mesh) or exactly as long as
//! `vertices`, with RGBA components normalized to `[0, 1]`. Downstream
//! writers rely on this invariant.
//!
//! # Example
//!
//! ```
//! use nalgebra::Point3;
//! use scan_mesh::TriangleMesh;
//!
//! let mut mesh = TriangleMesh::new();
//! mesh.vertices.push(Point3::new(0.0, 0.0, 1.0));
//! mesh.vertices.push(Point3::new(1.0, 0.0, 1.0));
//! mesh.vertices.push(Point3::new(0.0, 1.0, 1.0));
//! mesh.faces.push([0, 1, 2]);
//!
//! assert_eq!(mesh.face_count(), 1);
//! assert!(!mesh.has_colors());
//! ```

// Safety: Deny unwrap/expect in library code. Tests may use them.
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod mesh;
mod transform;

pub use mesh::TriangleMesh;

// Re-export nalgebra types for convenience
pub use nalgebra::{Matrix4, Point3, Vector4};
