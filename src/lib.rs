// SPDX-License-Identifier: MPL-2.0
//! `lightbox_core` is the page and media lifecycle core of a full-screen
//! image/video lightbox gallery.
//!
//! It decides which entries are materialized around the current page, derives
//! every downstream effect of a page change (preload window, edge
//! notifications, seen tracking, video hand-off), manages the single active
//! video session and applies sequence mutations without disturbing in-flight
//! gestures. Rendering, gesture recognition, image decoding and video decoding
//! are left to the host through the traits in [`application::port`].
//!
//! # Example
//!
//! ```
//! use lightbox_core::domain::media::MediaItem;
//! use lightbox_core::{Collaborators, Lightbox, LightboxSettings};
//!
//! let items = vec![
//!     MediaItem::remote_image("https://example.com/a.jpg"),
//!     MediaItem::remote_video("https://example.com/b.mp4"),
//! ];
//! let mut lightbox = Lightbox::new(items, LightboxSettings::default(), Collaborators::default());
//!
//! lightbox.next();
//! assert_eq!(lightbox.current_page(), 1);
//! assert!(lightbox.player().active_url().is_some());
//! ```

#![doc(html_root_url = "https://docs.rs/lightbox_core/0.3.0")]

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod gallery;
pub mod lightbox;
pub mod scheduler;
pub mod video_player;

#[cfg(test)]
pub(crate) mod test_utils;

pub use error::{Error, Result};
pub use lightbox::{Collaborators, Lightbox, LightboxSettings};
