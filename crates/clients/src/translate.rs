//! Client for the public Google Translate `translate_a/single` endpoint.
//!
//! The endpoint answers with nested arrays; the first element is a list of
//! segments whose first entry is the translated text.

use mentor_core::{Language, ServiceError, ServiceKind, Translator};

use crate::http::{agent, base_url, classify, parse_error, urlencoded};

pub const DEFAULT_BASE_URL: &str = "https://translate.googleapis.com";

const SERVICE: ServiceKind = ServiceKind::Translation;

#[derive(Debug, Clone)]
pub struct GoogleTranslateClient {
    base_url: String,
}

impl GoogleTranslateClient {
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, url: &str) -> Self {
        self.base_url = base_url(url);
        self
    }
}

impl Default for GoogleTranslateClient {
    fn default() -> Self {
        Self::new()
    }
}

impl Translator for GoogleTranslateClient {
    fn translate(&self, text: &str, target: Language) -> Result<String, ServiceError> {
        if text.trim().is_empty() {
            return Ok(text.to_string());
        }

        let url = format!(
            "{}/translate_a/single?client=gtx&sl=auto&tl={}&dt=t&q={}",
            self.base_url,
            target.code(),
            urlencoded(text)
        );
        tracing::trace!(lang = target.code(), "translation request");

        let response = agent()
            .get(&url)
            .call()
            .map_err(|e| classify(e, SERVICE, "translate endpoint"))?;

        let value: serde_json::Value = response
            .into_body()
            .read_json()
            .map_err(|e| parse_error(SERVICE, e))?;

        parse_segments(&value)
            .ok_or_else(|| parse_error(SERVICE, "unexpected translation response shape"))
    }
}

/// Concatenate the translated text of every segment in `value[0]`.
fn parse_segments(value: &serde_json::Value) -> Option<String> {
    let segments = value.get(0)?.as_array()?;
    let mut out = String::new();
    for segment in segments {
        if let Some(text) = segment.get(0).and_then(|t| t.as_str()) {
            out.push_str(text);
        }
    }
    if segments.is_empty() {
        None
    } else {
        Some(out)
    }
}
