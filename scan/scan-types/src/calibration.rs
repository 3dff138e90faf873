//! Camera calibration types.
//!
//! Provides pinhole intrinsics and the inverse-calibration matrix used to
//! turn a pixel plus a depth value into a camera-space point.

// Pixel coordinates fit f32 exactly for any realistic image size
#![allow(clippy::cast_precision_loss)]

use nalgebra::{Matrix3, Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Camera intrinsic parameters (pinhole model, distortion-free).
///
/// Describes the camera's internal geometry: focal length and principal
/// point, both in pixel units.
///
/// # Pinhole Model
///
/// Projects a camera-space point `[X, Y, Z]` to pixel coordinates:
/// ```text
/// u = fx * X/Z + cx
/// v = fy * Y/Z + cy
/// ```
///
/// # Example
///
/// ```
/// use scan_types::CameraIntrinsics;
///
/// let intrinsics = CameraIntrinsics::ideal(500.0, 640, 480);
/// assert!((intrinsics.cx - 320.0).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CameraIntrinsics {
    /// Focal length in pixels (x direction).
    pub fx: f32,
    /// Focal length in pixels (y direction).
    pub fy: f32,
    /// Principal point x-coordinate in pixels.
    pub cx: f32,
    /// Principal point y-coordinate in pixels.
    pub cy: f32,
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
}

impl CameraIntrinsics {
    /// Creates ideal intrinsics: equal focal lengths and the principal
    /// point at the image center.
    #[must_use]
    pub fn ideal(focal_length: f32, width: u32, height: u32) -> Self {
        Self {
            fx: focal_length,
            fy: focal_length,
            cx: width as f32 / 2.0,
            cy: height as f32 / 2.0,
            width,
            height,
        }
    }

    /// Builds the inverse-calibration matrix for these intrinsics.
    ///
    /// The result satisfies `invproj · [u, v, 1] = [(u−cx)/fx, (v−cy)/fy, 1]`,
    /// an un-normalized camera-space ray through pixel coordinate `(u, v)`.
    #[must_use]
    pub fn inverse_calibration(&self) -> InverseCalibration {
        InverseCalibration::from_matrix(Matrix3::new(
            1.0 / self.fx,
            0.0,
            -self.cx / self.fx,
            0.0,
            1.0 / self.fy,
            -self.cy / self.fy,
            0.0,
            0.0,
            1.0,
        ))
    }
}

/// The inverse of a camera calibration matrix.
///
/// Maps homogeneous pixel coordinates to un-normalized camera-space ray
/// directions. Pixel rays pass through pixel *centers*, so integer pixel
/// coordinates receive a half-pixel offset before the matrix is applied.
///
/// # Example
///
/// ```
/// use nalgebra::Matrix3;
/// use scan_types::InverseCalibration;
///
/// let invproj = InverseCalibration::from_matrix(Matrix3::identity());
/// let ray = invproj.ray(0, 0);
/// assert!((ray.x - 0.5).abs() < 1e-6);
/// assert!((ray.z - 1.0).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct InverseCalibration {
    matrix: Matrix3<f32>,
}

impl InverseCalibration {
    /// Creates an inverse calibration from a row-major 3×3 matrix.
    #[must_use]
    pub const fn from_matrix(matrix: Matrix3<f32>) -> Self {
        Self { matrix }
    }

    /// Returns the underlying 3×3 matrix.
    #[must_use]
    pub const fn matrix(&self) -> &Matrix3<f32> {
        &self.matrix
    }

    /// Computes the un-normalized camera-space ray through the center of
    /// pixel `(x, y)`.
    #[must_use]
    pub fn ray(&self, x: u32, y: u32) -> Vector3<f32> {
        self.matrix * Vector3::new(x as f32 + 0.5, y as f32 + 0.5, 1.0)
    }

    /// Unprojects a pixel with a known depth to a camera-space point.
    ///
    /// The depth is the distance from the camera center along the pixel
    /// ray, so the ray is normalized before scaling. Callers guard
    /// against invalid samples; depth must be positive.
    #[must_use]
    pub fn unproject(&self, x: u32, y: u32, depth: f32) -> Point3<f32> {
        Point3::from(self.ray(x, y).normalize() * depth)
    }

    /// Estimates the camera-space length one pixel spans at the given
    /// depth.
    ///
    /// Uses the horizontal focal term of the matrix as the representative
    /// scale. This is a threshold heuristic for discontinuity detection,
    /// not an exact footprint.
    #[must_use]
    pub fn pixel_footprint(&self, x: u32, y: u32, depth: f32) -> f32 {
        self.matrix[(0, 0)] * depth / self.ray(x, y).norm()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn ideal_intrinsics_center() {
        let intr = CameraIntrinsics::ideal(100.0, 200, 100);
        assert_relative_eq!(intr.cx, 100.0);
        assert_relative_eq!(intr.cy, 50.0);
        assert_relative_eq!(intr.fx, intr.fy);
    }

    #[test]
    fn inverse_calibration_ray_direction() {
        let intr = CameraIntrinsics::ideal(100.0, 100, 100);
        let invproj = intr.inverse_calibration();

        // Pixel left of center looks left, z stays 1.
        let ray = invproj.ray(24, 49);
        assert_relative_eq!(ray.x, (24.5 - 50.0) / 100.0, epsilon = 1e-6);
        assert_relative_eq!(ray.y, (49.5 - 50.0) / 100.0, epsilon = 1e-6);
        assert_relative_eq!(ray.z, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn identity_ray_has_half_pixel_offset() {
        let invproj = InverseCalibration::from_matrix(Matrix3::identity());
        let ray = invproj.ray(2, 3);
        assert_relative_eq!(ray.x, 2.5);
        assert_relative_eq!(ray.y, 3.5);
        assert_relative_eq!(ray.z, 1.0);
    }

    #[test]
    fn unproject_preserves_distance() {
        let invproj = InverseCalibration::from_matrix(Matrix3::identity());
        let point = invproj.unproject(1, 2, 4.0);
        let dist = (point.x * point.x + point.y * point.y + point.z * point.z).sqrt();
        assert_relative_eq!(dist, 4.0, epsilon = 1e-5);
    }

    #[test]
    fn unproject_lies_on_ray() {
        let invproj = InverseCalibration::from_matrix(Matrix3::identity());
        let ray = invproj.ray(1, 2);
        let point = invproj.unproject(1, 2, 4.0);

        // Cross product of colinear vectors vanishes.
        let cross = ray.cross(&point.coords);
        assert!(cross.norm() < 1e-5);
    }

    #[test]
    fn footprint_scales_with_depth() {
        let invproj = InverseCalibration::from_matrix(Matrix3::identity());
        let near = invproj.pixel_footprint(0, 0, 1.0);
        let far = invproj.pixel_footprint(0, 0, 10.0);
        assert_relative_eq!(far, near * 10.0, epsilon = 1e-5);
    }

    #[test]
    fn footprint_divides_by_ray_norm() {
        let invproj = InverseCalibration::from_matrix(Matrix3::identity());
        let ray = invproj.ray(3, 4);
        let footprint = invproj.pixel_footprint(3, 4, 2.0);
        assert_relative_eq!(footprint, 2.0 / ray.norm(), epsilon = 1e-6);
    }
}
