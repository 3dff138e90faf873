//! Input-side value types for depth-map meshing.
//!
//! This crate provides the data a depth-map triangulator consumes:
//!
//! - [`DepthMap`] - Per-pixel distances from the camera center
//! - [`ColorImage`] - Byte image pixel-aligned with a depth map
//! - [`CameraIntrinsics`] - Pinhole camera parameters
//! - [`InverseCalibration`] - Pixel-to-ray matrix with unprojection helpers
//!
//! # Layer 0 Crate
//!
//! This is a Layer 0 crate with **zero framework dependencies**. It can be
//! used in:
//! - CLI tools
//! - Servers
//! - Offline reconstruction pipelines
//!
//! # Depth Convention
//!
//! A depth value is the distance from the camera center along the ray
//! through the pixel center, stored as `f32`. A value of `0.0` marks a
//! pixel with no valid measurement. This differs from z-depth: unprojection
//! scales the *normalized* pixel ray by the stored depth.
//!
//! # Example
//!
//! ```
//! use scan_types::{CameraIntrinsics, DepthMap};
//!
//! let depth_map = DepthMap {
//!     depths: vec![1.5f32; 640 * 480],
//!     width: 640,
//!     height: 480,
//! };
//! assert_eq!(depth_map.valid_pixel_count(), 640 * 480);
//!
//! let intrinsics = CameraIntrinsics::ideal(500.0, 640, 480);
//! let invproj = intrinsics.inverse_calibration();
//! let point = invproj.unproject(320, 240, 1.5);
//! assert!(point.z > 0.0);
//! ```

// Safety: Deny unwrap/expect in library code. Tests may use them.
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod calibration;
mod color;
mod depth;

pub use calibration::{CameraIntrinsics, InverseCalibration};
pub use color::ColorImage;
pub use depth::DepthMap;

// Re-export nalgebra types for convenience
pub use nalgebra::{Matrix3, Point3, Vector3};
