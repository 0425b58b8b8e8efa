// SPDX-License-Identifier: MPL-2.0
//! Gallery paging newtypes.
//!
//! This module provides type-safe wrappers for paging configuration values,
//! ensuring they are always within valid ranges.

// =============================================================================
// PreloadRadius
// =============================================================================

/// Preload radius bounds (number of pages kept materialized on each side).
pub mod preload_radius_bounds {
    /// Minimum radius. Zero means "materialize every page".
    pub const MIN: usize = 0;
    /// Maximum radius.
    pub const MAX: usize = 64;
    /// Default radius.
    pub const DEFAULT: usize = 1;
}

/// Number of pages kept materialized on each side of the current page.
///
/// A radius of zero is the unbounded window: every page stays materialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreloadRadius(usize);

impl PreloadRadius {
    /// Creates a new radius, clamping to valid range.
    #[must_use]
    pub fn new(radius: usize) -> Self {
        Self(radius.clamp(preload_radius_bounds::MIN, preload_radius_bounds::MAX))
    }

    /// Radius that keeps every page materialized.
    #[must_use]
    pub fn unbounded() -> Self {
        Self(0)
    }

    /// Returns the radius value.
    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }

    /// Returns true if every page should be materialized.
    #[must_use]
    pub fn is_unbounded(self) -> bool {
        self.0 == 0
    }
}

impl Default for PreloadRadius {
    fn default() -> Self {
        Self(preload_radius_bounds::DEFAULT)
    }
}

// =============================================================================
// EdgeThreshold
// =============================================================================

/// Edge threshold bounds (distance in pages from either end of the sequence).
pub mod edge_threshold_bounds {
    /// Minimum threshold.
    pub const MIN: usize = 0;
    /// Maximum threshold.
    pub const MAX: usize = 100;
    /// Default threshold.
    pub const DEFAULT: usize = 3;
}

/// Distance from either end at which "near the edge" notifications fire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeThreshold(usize);

impl EdgeThreshold {
    /// Creates a new threshold, clamping to valid range.
    #[must_use]
    pub fn new(threshold: usize) -> Self {
        Self(threshold.clamp(edge_threshold_bounds::MIN, edge_threshold_bounds::MAX))
    }

    /// Returns the threshold value.
    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }

    /// Returns true if paging forward onto `page` is within the threshold of the last page.
    #[must_use]
    pub fn is_near_right_end(self, page: usize, page_count: usize) -> bool {
        page_count.saturating_sub(page) <= self.0
    }

    /// Returns true if paging backward onto `page` is within the threshold of the first page.
    #[must_use]
    pub fn is_near_left_end(self, page: usize) -> bool {
        page <= self.0
    }
}

impl Default for EdgeThreshold {
    fn default() -> Self {
        Self(edge_threshold_bounds::DEFAULT)
    }
}

// =============================================================================
// PageSpacing
// =============================================================================

/// Page spacing bounds (points between two adjacent pages).
pub mod page_spacing_bounds {
    /// Minimum spacing.
    pub const MIN: f32 = 0.0;
    /// Maximum spacing.
    pub const MAX: f32 = 200.0;
    /// Default spacing.
    pub const DEFAULT: f32 = 20.0;
}

/// Horizontal gap between pages, forwarded to the render surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageSpacing(f32);

impl PageSpacing {
    /// Creates a new spacing, clamping to valid range.
    #[must_use]
    pub fn new(spacing: f32) -> Self {
        if spacing.is_nan() {
            return Self::default();
        }
        Self(spacing.clamp(page_spacing_bounds::MIN, page_spacing_bounds::MAX))
    }

    /// Returns the spacing value.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for PageSpacing {
    fn default() -> Self {
        Self(page_spacing_bounds::DEFAULT)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preload_radius_clamps_to_max() {
        assert_eq!(PreloadRadius::new(10_000).value(), preload_radius_bounds::MAX);
        assert_eq!(PreloadRadius::new(2).value(), 2);
    }

    #[test]
    fn preload_radius_zero_is_unbounded() {
        assert!(PreloadRadius::new(0).is_unbounded());
        assert!(PreloadRadius::unbounded().is_unbounded());
        assert!(!PreloadRadius::default().is_unbounded());
    }

    #[test]
    fn edge_threshold_right_end() {
        let threshold = EdgeThreshold::new(2);
        // 10 pages: pages 8 and 9 are within 2 of the end
        assert!(!threshold.is_near_right_end(7, 10));
        assert!(threshold.is_near_right_end(8, 10));
        assert!(threshold.is_near_right_end(9, 10));
    }

    #[test]
    fn edge_threshold_left_end() {
        let threshold = EdgeThreshold::new(2);
        assert!(threshold.is_near_left_end(0));
        assert!(threshold.is_near_left_end(2));
        assert!(!threshold.is_near_left_end(3));
    }

    #[test]
    fn edge_threshold_clamps() {
        assert_eq!(EdgeThreshold::new(1_000).value(), edge_threshold_bounds::MAX);
        assert_eq!(EdgeThreshold::default().value(), edge_threshold_bounds::DEFAULT);
    }

    #[test]
    fn page_spacing_clamps_and_rejects_nan() {
        assert!((PageSpacing::new(-4.0).value() - page_spacing_bounds::MIN).abs() < f32::EPSILON);
        assert!((PageSpacing::new(500.0).value() - page_spacing_bounds::MAX).abs() < f32::EPSILON);
        assert!(
            (PageSpacing::new(f32::NAN).value() - page_spacing_bounds::DEFAULT).abs()
                < f32::EPSILON
        );
    }
}
