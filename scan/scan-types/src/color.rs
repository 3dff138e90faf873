//! Color image type.
//!
//! Provides the byte image used to paint triangulated vertices. The image
//! is expected to be pixel-aligned with the depth map it accompanies.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An interleaved byte image with one or more channels.
///
/// Channel counts of 1 (grayscale) and 3+ (RGB plus extras) are the common
/// cases; with fewer than 3 channels the first channel is replicated when
/// an RGB color is requested.
///
/// # Example
///
/// ```
/// use scan_types::ColorImage;
///
/// let image = ColorImage {
///     data: vec![128u8; 4 * 4 * 3],
///     width: 4,
///     height: 4,
///     channels: 3,
/// };
///
/// assert!(image.has_valid_buffer_size());
/// assert_eq!(image.sample(0, 2), 128);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ColorImage {
    /// Interleaved channel bytes in row-major pixel order:
    /// `data[(y * width + x) * channels + c]`
    pub data: Vec<u8>,

    /// Image width in pixels.
    pub width: u32,

    /// Image height in pixels.
    pub height: u32,

    /// Number of interleaved channels per pixel (at least 1).
    pub channels: u32,
}

impl ColorImage {
    /// Returns the total number of pixels.
    #[must_use]
    pub const fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Returns the expected buffer size (pixels × channels).
    #[must_use]
    pub const fn expected_buffer_size(&self) -> usize {
        self.pixel_count() * self.channels as usize
    }

    /// Checks if the byte buffer has the expected size.
    #[must_use]
    pub fn has_valid_buffer_size(&self) -> bool {
        self.channels >= 1 && self.data.len() == self.expected_buffer_size()
    }

    /// Samples one channel of a pixel by linear pixel index.
    ///
    /// Returns 0 for out-of-bounds indices or channels.
    #[must_use]
    pub fn sample(&self, pixel: usize, channel: u32) -> u8 {
        if channel >= self.channels {
            return 0;
        }
        let idx = pixel * self.channels as usize + channel as usize;
        self.data.get(idx).copied().unwrap_or(0)
    }

    /// Samples one channel of a pixel by coordinate.
    ///
    /// Returns `None` if coordinates are out of bounds.
    #[must_use]
    pub fn get(&self, x: u32, y: u32, channel: u32) -> Option<u8> {
        if x >= self.width || y >= self.height || channel >= self.channels {
            return None;
        }
        let pixel = y as usize * self.width as usize + x as usize;
        let idx = pixel * self.channels as usize + channel as usize;
        self.data.get(idx).copied()
    }
}
