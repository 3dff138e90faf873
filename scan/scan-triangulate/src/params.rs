//! Parameters for depth-map triangulation.

/// Parameters for depth-map triangulation.
#[derive(Debug, Clone)]
pub struct TriangulateParams {
    /// Depth discontinuity factor.
    ///
    /// A triangle edge is rejected when the depth difference between its
    /// two samples exceeds `dd_factor` times the pixel footprint of the
    /// nearer sample (scaled by √2 across a block diagonal). `0.0`
    /// disables discontinuity filtering entirely. Default: 5.0
    pub dd_factor: f32,
}

impl Default for TriangulateParams {
    fn default() -> Self {
        Self { dd_factor: 5.0 }
    }
}

impl TriangulateParams {
    /// Creates params with a specific discontinuity factor.
    #[must_use]
    pub const fn with_dd_factor(dd_factor: f32) -> Self {
        Self { dd_factor }
    }

    /// Creates params with discontinuity filtering disabled.
    ///
    /// Every selected triangle is emitted, including triangles bridging
    /// occlusion boundaries.
    #[must_use]
    pub const fn disabled() -> Self {
        Self { dd_factor: 0.0 }
    }

    /// True if discontinuity filtering is active.
    #[must_use]
    pub fn filters_discontinuities(&self) -> bool {
        self.dd_factor > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_params() {
        let params = TriangulateParams::default();
        assert!((params.dd_factor - 5.0).abs() < f32::EPSILON);
        assert!(params.filters_discontinuities());
    }

    #[test]
    fn disabled_params() {
        let params = TriangulateParams::disabled();
        assert!(!params.filters_discontinuities());
    }

    #[test]
    fn with_dd_factor() {
        let params = TriangulateParams::with_dd_factor(2.5);
        assert!((params.dd_factor - 2.5).abs() < f32::EPSILON);
    }
}
