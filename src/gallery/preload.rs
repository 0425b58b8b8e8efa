// SPDX-License-Identifier: MPL-2.0
//! Preload window computation.
//!
//! The window is the contiguous index range kept materialized around the
//! current page. It is symmetric and inclusive: `radius` pages on each side
//! of the current page, cut at both ends of the sequence.
//!
//! # Example
//!
//! ```
//! use lightbox_core::domain::gallery::PreloadRadius;
//! use lightbox_core::gallery::window;
//!
//! assert_eq!(window(0, PreloadRadius::new(1), 5), 0..2);
//! assert_eq!(window(4, PreloadRadius::new(1), 5), 3..5);
//! assert_eq!(window(2, PreloadRadius::unbounded(), 5), 0..5);
//! ```

use crate::domain::gallery::PreloadRadius;
use std::ops::Range;

/// Returns the indices that should hold real content.
///
/// - `length == 0` yields an empty range
/// - an unbounded radius (zero) yields `0..length`
/// - `current_page` beyond the end is treated as the last page
#[must_use]
pub fn window(current_page: usize, radius: PreloadRadius, length: usize) -> Range<usize> {
    if length == 0 {
        return 0..0;
    }
    if radius.is_unbounded() {
        return 0..length;
    }

    let page = current_page.min(length - 1);
    let start = page.saturating_sub(radius.value());
    let end = page.saturating_add(radius.value()).saturating_add(1).min(length);
    start..end
}

/// Preload policy of one gallery: the configured radius.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PreloadWindow {
    radius: PreloadRadius,
}

impl PreloadWindow {
    #[must_use]
    pub fn new(radius: PreloadRadius) -> Self {
        Self { radius }
    }

    #[must_use]
    pub fn radius(&self) -> PreloadRadius {
        self.radius
    }

    pub fn set_radius(&mut self, radius: PreloadRadius) {
        self.radius = radius;
    }

    /// Window for `current_page` in a sequence of `length` items.
    #[must_use]
    pub fn around(&self, current_page: usize, length: usize) -> Range<usize> {
        window(current_page, self.radius, length)
    }
}
