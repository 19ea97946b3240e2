//! Localization pass-through: every user-facing string can be routed through
//! a [`Translator`] for the selected language.
//!
//! There is no cache. Translating the same text twice makes two round trips.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::ServiceError;
use crate::services::Translator;

/// Supported interface languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Es,
    Fr,
    De,
}

impl Language {
    pub const ALL: [Language; 4] = [Language::En, Language::Es, Language::Fr, Language::De];

    /// ISO 639-1 code sent to the translation service.
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Es => "es",
            Language::Fr => "fr",
            Language::De => "de",
        }
    }

    /// English display name.
    pub fn name(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Es => "Spanish",
            Language::Fr => "French",
            Language::De => "German",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|l| l.code() == lower || l.name().to_lowercase() == lower)
            .ok_or_else(|| format!("unsupported language '{}' (expected one of: en, es, fr, de)", s))
    }
}

/// Translate `text` into `lang` through `translator`.
///
/// The input is never modified; the translated text is returned as given by
/// the translator.
pub fn localize(
    translator: &dyn Translator,
    text: &str,
    lang: Language,
) -> Result<String, ServiceError> {
    tracing::trace!(lang = lang.code(), len = text.len(), "localizing");
    translator.translate(text, lang)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ServiceKind;
    use std::cell::Cell;

    /// Deterministic translator that tags text with the target code and
    /// counts round trips.
    struct Tagging {
        calls: Cell<usize>,
    }

    impl Translator for Tagging {
        fn translate(&self, text: &str, target: Language) -> Result<String, ServiceError> {
            self.calls.set(self.calls.get() + 1);
            Ok(format!("[{}] {}", target.code(), text))
        }
    }

    struct Offline;

    impl Translator for Offline {
        fn translate(&self, _text: &str, _target: Language) -> Result<String, ServiceError> {
            Err(ServiceError::Network {
                service: ServiceKind::Translation,
                message: "connection refused".to_string(),
            })
        }
    }

    #[test]
    fn repeated_calls_are_identical_and_uncached() {
        let t = Tagging {
            calls: Cell::new(0),
        };
        let text = String::from("Upload your wireframe");
        let a = localize(&t, &text, Language::En).unwrap();
        let b = localize(&t, &text, Language::En).unwrap();
        assert_eq!(a, b);
        assert_eq!(text, "Upload your wireframe");
        assert_eq!(t.calls.get(), 2);
    }

    #[test]
    fn target_language_is_forwarded() {
        let t = Tagging {
            calls: Cell::new(0),
        };
        assert_eq!(localize(&t, "Hi", Language::Fr).unwrap(), "[fr] Hi");
    }

    #[test]
    fn translator_failure_is_returned() {
        let err = localize(&Offline, "Hi", Language::Es).unwrap_err();
        assert_eq!(err.service(), ServiceKind::Translation);
    }

    #[test]
    fn language_parses_codes_and_names() {
        assert_eq!("es".parse::<Language>().unwrap(), Language::Es);
        assert_eq!("German".parse::<Language>().unwrap(), Language::De);
        assert_eq!(" FR ".parse::<Language>().unwrap(), Language::Fr);
        assert!("it".parse::<Language>().is_err());
        assert_eq!(Language::default(), Language::En);
    }

    #[test]
    fn language_serializes_as_code() {
        assert_eq!(serde_json::to_string(&Language::De).unwrap(), "\"de\"");
    }
}
