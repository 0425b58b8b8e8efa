// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that host adapters implement.
//! These traits use only domain types, ensuring the gallery core remains
//! independent of any UI toolkit or media framework.
//!
//! # Available Ports
//!
//! - [`delegate`]: Event sink for the integrating application
//! - [`export`]: Saving items to the platform media library
//! - [`render`]: Render surface observing materialization and playback
//! - [`video`]: Video playback backend
//!
//! # Design Notes
//!
//! - All traits use domain types only (no toolkit handles, no decoder types)
//! - Traits are object-safe; the lightbox stores them as boxed trait objects
//! - The model is single-threaded, so no `Send`/`Sync` bounds are imposed
//!
//! # Example
//!
//! ```
//! use lightbox_core::application::port::LightboxDelegate;
//!
//! struct PageLogger;
//!
//! impl LightboxDelegate for PageLogger {
//!     fn on_page_changed(&mut self, index: usize) {
//!         println!("now on page {index}");
//!     }
//! }
//! ```

pub mod delegate;
pub mod export;
pub mod render;
pub mod video;

// Re-export main types for convenience
pub use delegate::{LightboxDelegate, NoopDelegate};
pub use export::{MediaExporter, SaveOutcome, UnsupportedExporter};
pub use render::{HeadlessSurface, RenderSurface};
pub use video::{NullVideoBackend, VideoBackend};
