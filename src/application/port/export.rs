// SPDX-License-Identifier: MPL-2.0
//! Media export port definition.
//!
//! This module defines the [`MediaExporter`] trait used to save the current
//! item to the platform media library, and the [`SaveOutcome`] reported back
//! to the delegate.
//!
//! Export failures are never propagated as errors from the lightbox: every
//! save completes with an outcome and a transient message.

use crate::domain::media::{ImageSource, MediaUrl};
use crate::error::ExportError;

/// Message shown after a successful save.
pub const SAVE_SUCCEEDED_MESSAGE: &str = "Saved to library";

/// Message shown after a failed save.
pub const SAVE_FAILED_MESSAGE: &str = "Could not save to library";

// =============================================================================
// MediaExporter Trait
// =============================================================================

/// Port for the persistence/export service.
pub trait MediaExporter {
    /// Saves an image (remote URL or in-memory bytes). Lazy sources are
    /// produced here; a producer that yields nothing is a failed save.
    ///
    /// # Errors
    ///
    /// Returns an [`ExportError`] if the platform refuses or fails the save.
    fn save_image(&mut self, source: ImageSource<'_>) -> Result<(), ExportError>;

    /// Saves a video from its URL.
    ///
    /// # Errors
    ///
    /// Returns an [`ExportError`] if the platform refuses or fails the save.
    fn save_video(&mut self, url: &MediaUrl) -> Result<(), ExportError>;
}

/// Exporter for hosts without a media library; every save is unsupported.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnsupportedExporter;

impl MediaExporter for UnsupportedExporter {
    fn save_image(&mut self, _source: ImageSource<'_>) -> Result<(), ExportError> {
        Err(ExportError::Unsupported)
    }

    fn save_video(&mut self, _url: &MediaUrl) -> Result<(), ExportError> {
        Err(ExportError::Unsupported)
    }
}

// =============================================================================
// SaveOutcome
// =============================================================================

/// `(success, error)` pair delivered to the delegate after a save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveOutcome {
    pub success: bool,
    pub error: Option<ExportError>,
}

impl SaveOutcome {
    /// Builds the outcome from an export result.
    #[must_use]
    pub fn from_result(result: Result<(), ExportError>) -> Self {
        match result {
            Ok(()) => Self {
                success: true,
                error: None,
            },
            Err(error) => Self {
                success: false,
                error: Some(error),
            },
        }
    }

    /// Transient user-facing text for this outcome.
    #[must_use]
    pub fn message(&self) -> &'static str {
        if self.success {
            SAVE_SUCCEEDED_MESSAGE
        } else {
            SAVE_FAILED_MESSAGE
        }
    }
}
