// SPDX-License-Identifier: MPL-2.0
//! Core media types for the domain layer.
//!
//! These types represent pure data without any presentation dependencies.
//! A [`MediaItem`] describes one gallery entry; its [`MediaKind`] names the single
//! content source the render surface should use for it.

use std::fmt;
use std::sync::Arc;

/// Location of remote media content.
///
/// The core never dereferences URLs, it only compares them (video hand-off)
/// and forwards them to collaborators.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MediaUrl(String);

impl MediaUrl {
    /// Creates a URL from any string-like value.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    /// Returns the URL as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MediaUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for MediaUrl {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for MediaUrl {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Encoded image bytes supplied directly by the caller.
///
/// Decoding is left to the render surface. The bytes are reference-counted so
/// snapshots of the gallery stay cheap to clone.
///
/// # Example
///
/// ```
/// use lightbox_core::domain::media::EncodedImage;
///
/// let image = EncodedImage::new(vec![0x89, b'P', b'N', b'G']);
/// assert_eq!(image.len(), 4);
/// ```
#[derive(Debug, Clone)]
pub struct EncodedImage {
    bytes: Arc<Vec<u8>>,
}

impl EncodedImage {
    /// Wraps raw encoded bytes.
    #[must_use]
    pub fn new(bytes: Vec<u8>) -> Self {
        Self {
            bytes: Arc::new(bytes),
        }
    }

    /// Returns the encoded bytes.
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Returns the number of encoded bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns true if no bytes were supplied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl PartialEq for EncodedImage {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.bytes, &other.bytes) || self.bytes == other.bytes
    }
}

/// Image produced on demand, when its page is materialized or exported.
///
/// The producer may run more than once and may yield nothing (e.g. the asset
/// was removed from disk). Clones share the same producer.
#[derive(Clone)]
pub struct LazyImage {
    produce: Arc<dyn Fn() -> Option<EncodedImage> + Send + Sync>,
}

impl LazyImage {
    /// Wraps an image producer.
    #[must_use]
    pub fn new(produce: impl Fn() -> Option<EncodedImage> + Send + Sync + 'static) -> Self {
        Self {
            produce: Arc::new(produce),
        }
    }

    /// Runs the producer.
    #[must_use]
    pub fn produce(&self) -> Option<EncodedImage> {
        (self.produce)()
    }
}

impl fmt::Debug for LazyImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("LazyImage(..)")
    }
}

impl PartialEq for LazyImage {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.produce, &other.produce)
    }
}

/// Content source of a gallery entry.
#[derive(Debug, Clone, PartialEq)]
pub enum MediaKind {
    /// Image bytes held in memory.
    LocalImage(EncodedImage),
    /// Local image produced on demand.
    LazyImage(LazyImage),
    /// Image loaded by the media loader from a URL.
    RemoteImage(MediaUrl),
    /// Video played by the player; the poster is shown while it loads.
    RemoteVideo {
        url: MediaUrl,
        poster: Option<MediaUrl>,
    },
    /// Lightweight stand-in for an entry outside the preload window.
    Placeholder,
}

/// Borrowed view of an image source, as handed to the export service or the
/// dynamic background.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ImageSource<'a> {
    /// In-memory encoded image.
    Local(&'a EncodedImage),
    /// Local image not produced yet.
    Lazy(&'a LazyImage),
    /// Remote image URL.
    Remote(&'a MediaUrl),
}

/// One entry of the gallery.
#[derive(Debug, Clone, PartialEq)]
pub struct MediaItem {
    pub kind: MediaKind,
    pub title: Option<String>,
    pub description: Option<String>,
}

/// Shared placeholder returned for entries that are not materialized.
pub(crate) static PLACEHOLDER: MediaItem = MediaItem::placeholder();

impl MediaItem {
    /// Creates an entry backed by in-memory image bytes.
    #[must_use]
    pub fn local_image(image: EncodedImage) -> Self {
        Self::from_kind(MediaKind::LocalImage(image))
    }

    /// Creates an entry whose image is produced when first needed.
    #[must_use]
    pub fn lazy_image(image: LazyImage) -> Self {
        Self::from_kind(MediaKind::LazyImage(image))
    }

    /// Creates an entry backed by a remote image.
    #[must_use]
    pub fn remote_image(url: impl Into<MediaUrl>) -> Self {
        Self::from_kind(MediaKind::RemoteImage(url.into()))
    }

    /// Creates an entry backed by a remote video without poster.
    #[must_use]
    pub fn remote_video(url: impl Into<MediaUrl>) -> Self {
        Self::from_kind(MediaKind::RemoteVideo {
            url: url.into(),
            poster: None,
        })
    }

    /// Creates a video entry with a poster image.
    #[must_use]
    pub fn remote_video_with_poster(url: impl Into<MediaUrl>, poster: impl Into<MediaUrl>) -> Self {
        Self::from_kind(MediaKind::RemoteVideo {
            url: url.into(),
            poster: Some(poster.into()),
        })
    }

    /// Creates a placeholder entry.
    #[must_use]
    pub const fn placeholder() -> Self {
        Self {
            kind: MediaKind::Placeholder,
            title: None,
            description: None,
        }
    }

    fn from_kind(kind: MediaKind) -> Self {
        Self {
            kind,
            title: None,
            description: None,
        }
    }

    /// Sets the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Returns true for placeholder entries.
    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        matches!(self.kind, MediaKind::Placeholder)
    }

    /// Returns true iff the entry carries a video URL.
    #[must_use]
    pub fn has_video_content(&self) -> bool {
        self.video_url().is_some()
    }

    /// Returns true if the entry has an image source (local, remote or poster).
    /// A lazy image counts even if its producer later yields nothing.
    #[must_use]
    pub fn has_image_content(&self) -> bool {
        self.primary_image().is_some()
    }

    /// Returns the video URL for video entries.
    #[must_use]
    pub fn video_url(&self) -> Option<&MediaUrl> {
        match &self.kind {
            MediaKind::RemoteVideo { url, .. } => Some(url),
            _ => None,
        }
    }

    /// Returns the image that best represents this entry.
    ///
    /// For videos this is the poster, if any.
    #[must_use]
    pub fn primary_image(&self) -> Option<ImageSource<'_>> {
        match &self.kind {
            MediaKind::LocalImage(image) => Some(ImageSource::Local(image)),
            MediaKind::LazyImage(image) => Some(ImageSource::Lazy(image)),
            MediaKind::RemoteImage(url) => Some(ImageSource::Remote(url)),
            MediaKind::RemoteVideo {
                poster: Some(poster),
                ..
            } => Some(ImageSource::Remote(poster)),
            MediaKind::RemoteVideo { poster: None, .. } | MediaKind::Placeholder => None,
        }
    }

    /// Text shown under the page: the description, falling back to the title.
    #[must_use]
    pub fn caption(&self) -> &str {
        self.description
            .as_deref()
            .or(self.title.as_deref())
            .unwrap_or("")
    }
}
