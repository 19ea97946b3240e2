//! Persistence bridge: encode the active design as PNG and create it as a
//! new file in a remote repository.
//!
//! Publishing is always a create. Publishing the same repository twice asks
//! the host to create the same path again, and the host's refusal is
//! reported as a [`PersistenceError`]; nothing is ever overwritten.

use std::io::Cursor;

use image::{ImageFormat, RgbaImage};
use serde::Serialize;

use crate::error::PersistenceError;
use crate::services::{FileUpload, HostingService};

/// Commit message attached to every upload.
pub const COMMIT_MESSAGE: &str = "Upload design";

/// Remote file name for a design published to `repository`.
pub fn design_file_name(repository: &str) -> String {
    format!("design_{}.png", repository)
}

/// Encode `image` as PNG bytes.
pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>, PersistenceError> {
    let mut bytes = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .map_err(|e| PersistenceError::Encode(e.to_string()))?;
    Ok(bytes)
}

/// Lowercase hex SHA-256 of the encoded PNG, reported as [`PublishReceipt::sha256`].
pub(crate) fn sha256_hex(bytes: &[u8]) -> String {
    use sha2::Digest as _;
    let digest = sha2::Sha256::digest(bytes);
    digest.iter().map(|b| format!("{:02x}", b)).collect()
}

/// What was uploaded by a successful [`publish`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PublishReceipt {
    pub repository: String,
    pub path: String,
    pub bytes: usize,
    pub sha256: String,
}

/// Upload `image` to `repository` as `design_<repository>.png`.
pub fn publish(
    host: &dyn HostingService,
    image: &RgbaImage,
    repository: &str,
    credential: &str,
) -> Result<PublishReceipt, PersistenceError> {
    let repository = repository.trim();
    if repository.is_empty() {
        return Err(PersistenceError::EmptyRepository);
    }

    let content = encode_png(image)?;
    let path = design_file_name(repository);

    tracing::info!(repository, path = %path, bytes = content.len(), "publishing design");
    host.create_file(
        credential,
        &FileUpload {
            repository,
            path: &path,
            message: COMMIT_MESSAGE,
            content: &content,
        },
    )
    .inspect_err(|e| tracing::warn!(repository, error = %e, "publish failed"))?;

    Ok(PublishReceipt {
        repository: repository.to_string(),
        sha256: sha256_hex(&content),
        bytes: content.len(),
        path,
    })
}
