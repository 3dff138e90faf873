//! Depth-map to triangle-mesh conversion.
//!
//! This crate turns a per-pixel depth map, an optional aligned color
//! image, and an inverse camera calibration into a triangulated point set
//! in camera space. Invalid depth samples are skipped and triangles that
//! would bridge real-world depth discontinuities (occlusion boundaries)
//! are suppressed.
//!
//! # Algorithm
//!
//! 1. Walk the depth map in 2×2 blocks, row-major
//! 2. Build a validity mask from the four corner depths; blocks with
//!    fewer than three valid samples contribute nothing
//! 3. Pick the triangle(s) for the block: one triangle when exactly one
//!    corner is invalid, otherwise split the quad along the diagonal with
//!    the smaller depth difference
//! 4. Unless filtering is disabled, drop any triangle with an edge whose
//!    depth jump exceeds the nearer sample's pixel footprint times the
//!    discontinuity factor
//! 5. Allocate one mesh vertex per contributing pixel, lazily, so
//!    adjacent triangles share vertices
//! 6. Optionally paint vertices from the color image
//!
//! # Layer 0 Crate
//!
//! This is a Layer 0 crate with **zero framework dependencies**. It can be
//! used in:
//! - CLI tools
//! - Servers
//! - Offline reconstruction pipelines
//!
//! # Example
//!
//! ```
//! use scan_types::{CameraIntrinsics, DepthMap};
//! use scan_triangulate::{triangulate_depthmap, TriangulateParams};
//!
//! // A fronto-parallel plane at depth 2.
//! let dm = DepthMap {
//!     depths: vec![2.0f32; 8 * 6],
//!     width: 8,
//!     height: 6,
//! };
//! let invproj = CameraIntrinsics::ideal(10.0, 8, 6).inverse_calibration();
//!
//! let result =
//!     triangulate_depthmap(&dm, None, &invproj, &TriangulateParams::default()).unwrap();
//! println!("{result}");
//!
//! // Every 2x2 block yields two triangles.
//! assert_eq!(result.mesh.face_count(), 7 * 5 * 2);
//! assert_eq!(result.mesh.vertex_count(), 8 * 6);
//! ```

// Safety: Deny unwrap/expect in library code. Tests may use them.
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod colorize;
mod error;
mod params;
mod result;
mod triangulate;

// Re-export main types and functions
pub use error::{TriangulateError, TriangulateResult};
pub use params::TriangulateParams;
pub use result::TriangulationResult;
pub use triangulate::triangulate_depthmap;
