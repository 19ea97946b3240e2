//! Localized interface labels.
//!
//! Every heading and status line the CLI prints goes through [`Labels::t`].
//! Generated content (feedback, suggestions, wireframe code, markup) is
//! printed as received.

use mentor_core::{localize, Language, Translator};

use crate::config::MentorConfig;

pub(crate) struct Labels {
    lang: Language,
    translator: Box<dyn Translator>,
}

impl Labels {
    pub(crate) fn new(config: &MentorConfig, lang: Language) -> Self {
        Self {
            lang,
            translator: config.translator(lang),
        }
    }

    #[cfg(test)]
    pub(crate) fn with_translator(lang: Language, translator: Box<dyn Translator>) -> Self {
        Self { lang, translator }
    }

    pub(crate) fn lang(&self) -> Language {
        self.lang
    }

    /// `text` in the current language. A failed translation falls back to
    /// the English text so a label never blocks the command it belongs to.
    pub(crate) fn t(&self, text: &str) -> String {
        match localize(self.translator.as_ref(), text, self.lang) {
            Ok(translated) => translated,
            Err(e) => {
                tracing::warn!(lang = self.lang.code(), error = %e, "label left untranslated");
                text.to_string()
            }
        }
    }
}

/// Translator that tags text with the target code, for checking which
/// strings reach the localizer.
#[cfg(test)]
pub(crate) struct Tagging;

#[cfg(test)]
impl Translator for Tagging {
    fn translate(&self, text: &str, target: Language) -> Result<String, mentor_core::ServiceError> {
        Ok(format!("[{}] {}", target.code(), text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_labels_are_unchanged() {
        let labels = Labels::new(&MentorConfig::default(), Language::En);
        assert_eq!(labels.t("AI Feedback:"), "AI Feedback:");
        assert_eq!(labels.lang(), Language::En);
    }

    #[test]
    fn unreachable_translator_falls_back_to_english() {
        let mut config = MentorConfig::default();
        config.translation.base_url = "http://127.0.0.1:9".to_string();
        let labels = Labels::new(&config, Language::De);
        assert_eq!(labels.t("Generated HTML Code"), "Generated HTML Code");
    }

    #[test]
    fn labels_use_the_given_translator() {
        let labels = Labels::with_translator(Language::Fr, Box::new(Tagging));
        assert_eq!(labels.t("Generated CSS Code"), "[fr] Generated CSS Code");
    }
}
