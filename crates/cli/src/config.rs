//! Service configuration for `design-mentor`.
//!
//! Read from `--config <file>` or, when that flag is absent, from
//! `design-mentor.toml` in the working directory if it exists. Every field
//! has a default, so an empty or missing file means "use the public
//! endpoints".
//!
//! # Example
//!
//! ```toml
//! [completion]
//! base_url = "https://api.openai.com"
//! model = "gpt-3.5-turbo"
//!
//! [translation]
//! base_url = "https://translate.googleapis.com"
//!
//! [hosting]
//! base_url = "https://api.github.com"
//! ```
//!
//! Credentials never live in this file: the completion key comes from
//! `OPENAI_API_KEY`, the hosting token from `--token` or `GITHUB_TOKEN`.

use std::path::Path;

use serde::{Deserialize, Serialize};

use mentor_clients::{github, openai, translate};
use mentor_clients::{GitHubClient, GoogleTranslateClient, OpenAiClient};
use mentor_core::{IdentityTranslator, Language, ServiceError, Translator};

/// File consulted when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "design-mentor.toml";

// ── Types ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MentorConfig {
    pub completion: CompletionSettings,
    pub translation: TranslationSettings,
    pub hosting: HostingSettings,
}

/// `[completion]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CompletionSettings {
    pub base_url: String,
    pub model: String,
}

impl Default for CompletionSettings {
    fn default() -> Self {
        Self {
            base_url: openai::DEFAULT_BASE_URL.to_string(),
            model: openai::DEFAULT_MODEL.to_string(),
        }
    }
}

/// `[translation]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TranslationSettings {
    pub base_url: String,
}

impl Default for TranslationSettings {
    fn default() -> Self {
        Self {
            base_url: translate::DEFAULT_BASE_URL.to_string(),
        }
    }
}

/// `[hosting]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HostingSettings {
    pub base_url: String,
}

impl Default for HostingSettings {
    fn default() -> Self {
        Self {
            base_url: github::DEFAULT_API_URL.to_string(),
        }
    }
}

// ── Functions ─────────────────────────────────────────────────────────────────

/// Read and parse a config TOML file from `path`.
///
/// Returns a human-readable error string on failure.
pub fn read_config(path: &Path) -> Result<MentorConfig, String> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("could not read '{}': {}", path.display(), e))?;

    toml::from_str(&content).map_err(|e| format!("could not parse '{}': {}", path.display(), e))
}

/// Resolve the configuration for this invocation.
///
/// An explicit path must exist; the implicit `design-mentor.toml` is optional.
pub fn load_config(explicit: Option<&Path>) -> Result<MentorConfig, String> {
    match explicit {
        Some(path) => read_config(path),
        None => {
            let implicit = Path::new(DEFAULT_CONFIG_FILE);
            if implicit.is_file() {
                tracing::debug!(path = DEFAULT_CONFIG_FILE, "using config from working directory");
                read_config(implicit)
            } else {
                Ok(MentorConfig::default())
            }
        }
    }
}

/// The hosting token: `--token` if given, else `GITHUB_TOKEN`, else empty
/// (the hosting client rejects an empty token before sending anything).
pub fn resolve_token(flag: Option<&str>) -> String {
    flag.map(str::to_string)
        .or_else(|| std::env::var(github::TOKEN_ENV).ok())
        .unwrap_or_default()
}

impl MentorConfig {
    /// Completion client keyed from `OPENAI_API_KEY`.
    pub fn completion_client(&self) -> Result<OpenAiClient, ServiceError> {
        Ok(OpenAiClient::from_env()?
            .with_base_url(&self.completion.base_url)
            .with_model(&self.completion.model))
    }

    /// Translator for `lang`. English is the source language of every
    /// string, so it never leaves the process.
    pub fn translator(&self, lang: Language) -> Box<dyn Translator> {
        match lang {
            Language::En => Box::new(IdentityTranslator),
            _ => Box::new(GoogleTranslateClient::new().with_base_url(&self.translation.base_url)),
        }
    }

    pub fn hosting_client(&self) -> GitHubClient {
        GitHubClient::new().with_base_url(&self.hosting.base_url)
    }
}
