// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core value types with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability and architectural purity.
//!
//! # Modules
//!
//! - [`gallery`]: Paging values ([`PreloadRadius`](gallery::PreloadRadius),
//!   [`EdgeThreshold`](gallery::EdgeThreshold), [`PageSpacing`](gallery::PageSpacing))
//! - [`media`]: Gallery entries ([`MediaItem`](media::MediaItem), [`MediaKind`](media::MediaKind),
//!   [`MediaUrl`](media::MediaUrl))
//! - [`video`]: Video playback types ([`PlaybackStatus`](video::PlaybackStatus),
//!   [`SessionId`](video::SessionId), [`SkipGuard`](video::SkipGuard))

pub mod gallery;
pub mod media;
pub mod video;
