// SPDX-License-Identifier: MPL-2.0
//! Gallery paging domain types.

pub mod newtypes;

// Re-export commonly used types
pub use newtypes::{EdgeThreshold, PageSpacing, PreloadRadius};
