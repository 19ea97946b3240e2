//! Contracts for the external collaborators: completion, translation and
//! hosting services.
//!
//! Implementations are blocking request/response calls. The core never talks
//! to the network itself; it formats requests and relays what comes back.

use crate::error::ServiceError;
use crate::localize::Language;

/// One chat-style completion request.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    /// System-role text framing the model's persona.
    pub system: String,
    /// User-role text: the built prompt.
    pub prompt: String,
    pub temperature: f32,
    /// Upper bound on generated tokens.
    pub max_tokens: u32,
}

/// A text-completion backend.
pub trait CompletionService {
    /// Send `request` and return the generated text as received.
    fn complete(&self, request: &CompletionRequest) -> Result<String, ServiceError>;
}

/// A machine-translation backend.
pub trait Translator {
    fn translate(&self, text: &str, target: Language) -> Result<String, ServiceError>;
}

/// Translator that returns its input unchanged.
///
/// Used when the target is the source language of every UI string (English).
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityTranslator;

impl Translator for IdentityTranslator {
    fn translate(&self, text: &str, _target: Language) -> Result<String, ServiceError> {
        Ok(text.to_string())
    }
}

/// A file to create in a remote repository.
#[derive(Debug, Clone, Copy)]
pub struct FileUpload<'a> {
    pub repository: &'a str,
    pub path: &'a str,
    pub message: &'a str,
    pub content: &'a [u8],
}

/// A source-hosting backend.
pub trait HostingService {
    /// Create `upload.path` in `upload.repository`, authenticated by `credential`.
    ///
    /// Always a create: an existing file at the same path is an error, never
    /// overwritten.
    fn create_file(&self, credential: &str, upload: &FileUpload<'_>) -> Result<(), ServiceError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_translator_returns_input() {
        let t = IdentityTranslator;
        assert_eq!(t.translate("Save Design Version", Language::De).unwrap(), "Save Design Version");
    }
}
