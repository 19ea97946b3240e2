//! Version history: an append-only, index-addressed list of design snapshots.

use image::RgbaImage;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

use crate::error::VersionError;

/// One saved, immutable copy of the design at a point in time.
#[derive(Debug, Clone, PartialEq)]
pub struct DesignSnapshot {
    image: RgbaImage,
    saved_at: OffsetDateTime,
}

impl DesignSnapshot {
    /// Capture `image`, stamped with the current UTC time.
    pub fn new(image: RgbaImage) -> Self {
        Self::at(image, OffsetDateTime::now_utc())
    }

    pub fn at(image: RgbaImage, saved_at: OffsetDateTime) -> Self {
        Self { image, saved_at }
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    pub fn saved_at(&self) -> OffsetDateTime {
        self.saved_at
    }

    /// RFC 3339 rendering of [`saved_at`](Self::saved_at).
    pub fn saved_at_rfc3339(&self) -> String {
        self.saved_at
            .format(&Rfc3339)
            .unwrap_or_else(|_| self.saved_at.unix_timestamp().to_string())
    }
}

/// Display label for a version index: `Version 1` for index 0.
pub fn version_label(index: usize) -> String {
    format!("Version {}", index + 1)
}

/// Append-only design history with a "current" pointer.
///
/// Empty until the first [`append`](Self::append); there is no removal, so
/// once non-empty it stays non-empty. `current` is `None` exactly when the
/// history is empty and otherwise the index of the latest append.
#[derive(Debug, Default)]
pub struct VersionStore {
    snapshots: Vec<DesignSnapshot>,
    current: Option<usize>,
}

impl VersionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `snapshot` at the end and make it current. Returns its index.
    pub fn append(&mut self, snapshot: DesignSnapshot) -> usize {
        self.snapshots.push(snapshot);
        let index = self.snapshots.len() - 1;
        self.current = Some(index);
        tracing::debug!(index, "design version appended");
        index
    }

    pub fn get(&self, index: usize) -> Result<&DesignSnapshot, VersionError> {
        self.snapshots
            .get(index)
            .ok_or_else(|| VersionError::IndexOutOfRange {
                index: i64::try_from(index).unwrap_or(i64::MAX),
                len: self.snapshots.len(),
            })
    }

    /// Indices in creation order.
    pub fn list(&self) -> std::ops::Range<usize> {
        0..self.snapshots.len()
    }

    pub fn current(&self) -> Option<usize> {
        self.current
    }

    /// The snapshot under the current pointer, if any.
    pub fn current_snapshot(&self) -> Option<&DesignSnapshot> {
        self.current.and_then(|i| self.snapshots.get(i))
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Resolve a 1-based display label (as typed by a user) to an index.
    pub fn index_for_label(&self, label: i64) -> Result<usize, VersionError> {
        let out_of_range = || VersionError::IndexOutOfRange {
            index: label.saturating_sub(1),
            len: self.snapshots.len(),
        };
        let index = usize::try_from(label.checked_sub(1).ok_or_else(out_of_range)?)
            .map_err(|_| out_of_range())?;
        if index < self.snapshots.len() {
            Ok(index)
        } else {
            Err(out_of_range())
        }
    }
}
