//! Depth map type.
//!
//! Provides the per-pixel depth grid produced by stereo matching,
//! structured light sensors, or multi-view stereo.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A per-pixel depth map.
///
/// Stores the distance from the camera center to the surface along the
/// ray through each pixel center.
///
/// # Depth Values
///
/// - Depth is stored as `f32` distance along the (normalized) pixel ray
/// - `0.0` marks a pixel with no valid measurement
/// - The buffer is stored in row-major order (width × height)
///
/// # Example
///
/// ```
/// use scan_types::DepthMap;
///
/// let dm = DepthMap {
///     depths: vec![2.0f32; 320 * 240],
///     width: 320,
///     height: 240,
/// };
///
/// assert_eq!(dm.pixel_count(), 320 * 240);
/// assert!(dm.has_valid_buffer_size());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DepthMap {
    /// Per-pixel depth values.
    ///
    /// Stored in row-major order: `depths[y * width + x]`
    pub depths: Vec<f32>,

    /// Image width in pixels.
    pub width: u32,

    /// Image height in pixels.
    pub height: u32,
}

impl DepthMap {
    /// Checks whether a depth value is a valid measurement.
    ///
    /// `0.0` is the no-measurement marker; negative values and NaN never
    /// occur in well-formed maps and are treated as invalid too.
    #[must_use]
    pub fn is_valid_depth(depth: f32) -> bool {
        depth > 0.0
    }

    /// Returns the total number of pixels.
    #[must_use]
    pub const fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Checks if the depth buffer has the expected size (width × height).
    #[must_use]
    pub fn has_valid_buffer_size(&self) -> bool {
        self.depths.len() == self.pixel_count()
    }

    /// Gets the depth at a pixel coordinate.
    ///
    /// Returns `None` if coordinates are out of bounds.
    #[must_use]
    pub fn get(&self, x: u32, y: u32) -> Option<f32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = y as usize * self.width as usize + x as usize;
        self.depths.get(idx).copied()
    }

    /// Gets the depth at a pixel, returning `None` if invalid or out of
    /// bounds.
    #[must_use]
    pub fn get_valid(&self, x: u32, y: u32) -> Option<f32> {
        self.get(x, y).filter(|&d| Self::is_valid_depth(d))
    }

    /// Counts the number of pixels with a valid measurement.
    #[must_use]
    pub fn valid_pixel_count(&self) -> usize {
        self.depths
            .iter()
            .filter(|&&d| Self::is_valid_depth(d))
            .count()
    }

    /// Returns the fraction of pixels with valid depth (0.0 to 1.0).
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn valid_fraction(&self) -> f32 {
        if self.depths.is_empty() {
            return 0.0;
        }
        self.valid_pixel_count() as f32 / self.depths.len() as f32
    }
}
