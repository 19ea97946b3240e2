//! Session-scoped state: the selected language, the most recently uploaded
//! design, and the version history.
//!
//! A session is created explicitly, owned by exactly one event loop, and
//! consumed by [`Session::close`]. Every action either completes or returns an
//! error; a failed action leaves the session as it was.

use std::path::Path;

use image::{ImageFormat, RgbaImage};

use crate::error::SessionError;
use crate::localize::Language;
use crate::versions::{DesignSnapshot, VersionStore};

/// What a session produced, reported when it closes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    pub versions_saved: usize,
}

/// Decode PNG or JPEG bytes into an RGBA buffer. Other formats are refused.
pub fn decode_design(bytes: &[u8]) -> Result<RgbaImage, SessionError> {
    let format = match image::guess_format(bytes) {
        Ok(f @ (ImageFormat::Png | ImageFormat::Jpeg)) => f,
        _ => return Err(SessionError::UnsupportedImage),
    };
    let decoded = image::load_from_memory_with_format(bytes, format)
        .map_err(|e| SessionError::Decode(e.to_string()))?;
    Ok(decoded.into_rgba8())
}

#[derive(Debug, Default)]
pub struct Session {
    language: Language,
    uploaded: Option<RgbaImage>,
    versions: VersionStore,
}

impl Session {
    pub fn new(language: Language) -> Self {
        tracing::debug!(lang = language.code(), "session started");
        Self {
            language,
            uploaded: None,
            versions: VersionStore::new(),
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    /// Replace the uploaded design with the decoded `bytes`.
    ///
    /// Returns the image dimensions. The version history is not touched.
    pub fn upload(&mut self, bytes: &[u8]) -> Result<(u32, u32), SessionError> {
        let image = decode_design(bytes)?;
        let dims = image.dimensions();
        tracing::info!(width = dims.0, height = dims.1, "design uploaded");
        self.uploaded = Some(image);
        Ok(dims)
    }

    /// Read `path` and [`upload`](Self::upload) its contents.
    pub fn upload_path(&mut self, path: &Path) -> Result<(u32, u32), SessionError> {
        let bytes = std::fs::read(path).map_err(|e| SessionError::Read {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        self.upload(&bytes)
    }

    pub fn uploaded(&self) -> Option<&RgbaImage> {
        self.uploaded.as_ref()
    }

    /// Snapshot the uploaded design into the history. Returns the new index.
    pub fn save_version(&mut self) -> Result<usize, SessionError> {
        let image = self.uploaded.clone().ok_or(SessionError::NoActiveImage)?;
        Ok(self.versions.append(DesignSnapshot::new(image)))
    }

    pub fn versions(&self) -> &VersionStore {
        &self.versions
    }

    /// The image a publish would upload: the most recent upload. Saved
    /// versions are snapshots of an upload, so they are never newer than it.
    pub fn active_image(&self) -> Result<&RgbaImage, SessionError> {
        self.uploaded
            .as_ref()
            .or_else(|| self.versions.current_snapshot().map(DesignSnapshot::image))
            .ok_or(SessionError::NoActiveImage)
    }

    /// End the session, dropping all state.
    pub fn close(self) -> SessionSummary {
        let summary = SessionSummary {
            versions_saved: self.versions.len(),
        };
        tracing::debug!(versions_saved = summary.versions_saved, "session closed");
        summary
    }
}
