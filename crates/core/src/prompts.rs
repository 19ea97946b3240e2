//! Prompt builders for design feedback, enhancement suggestions and
//! wireframe generation.
//!
//! Builders are pure string formatting. User text is interpolated verbatim:
//! it is natural-language input for a model, not markup or code.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// Kind of critique requested for an uploaded design.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FeedbackCategory {
    Usability,
    Accessibility,
    Aesthetics,
    All,
}

impl FeedbackCategory {
    pub const ALL: [FeedbackCategory; 4] = [
        FeedbackCategory::Usability,
        FeedbackCategory::Accessibility,
        FeedbackCategory::Aesthetics,
        FeedbackCategory::All,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FeedbackCategory::Usability => "Usability",
            FeedbackCategory::Accessibility => "Accessibility",
            FeedbackCategory::Aesthetics => "Aesthetics",
            FeedbackCategory::All => "All",
        }
    }
}

/// Kind of improvement requested for an uploaded design.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum EnhancementCategory {
    LayoutImprovement,
    ColorScheme,
    Typography,
    All,
}

impl EnhancementCategory {
    pub const ALL: [EnhancementCategory; 4] = [
        EnhancementCategory::LayoutImprovement,
        EnhancementCategory::ColorScheme,
        EnhancementCategory::Typography,
        EnhancementCategory::All,
    ];

    pub fn label(self) -> &'static str {
        match self {
            EnhancementCategory::LayoutImprovement => "Layout Improvement",
            EnhancementCategory::ColorScheme => "Color Scheme",
            EnhancementCategory::Typography => "Typography",
            EnhancementCategory::All => "All",
        }
    }
}

/// Level of visual detail requested for a generated wireframe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Fidelity {
    Low,
    High,
}

impl Fidelity {
    pub const ALL: [Fidelity; 2] = [Fidelity::Low, Fidelity::High];

    pub fn label(self) -> &'static str {
        match self {
            Fidelity::Low => "Low Fidelity",
            Fidelity::High => "High Fidelity",
        }
    }

    fn clause(self) -> &'static str {
        match self {
            Fidelity::Low => "simple and low-fidelity wireframe with basic shapes",
            Fidelity::High => {
                "detailed and high-fidelity wireframe with realistic elements and styles"
            }
        }
    }
}

/// Lowercase, and fold `-`/`_` to spaces, so `color-scheme` matches `Color Scheme`.
fn normalize(s: &str) -> String {
    s.trim()
        .chars()
        .map(|c| if c == '-' || c == '_' { ' ' } else { c })
        .collect::<String>()
        .to_lowercase()
}

fn expected<T: Copy>(all: &[T], label: fn(T) -> &'static str) -> String {
    all.iter()
        .map(|c| label(*c))
        .collect::<Vec<_>>()
        .join(", ")
}

impl FromStr for FeedbackCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let norm = normalize(s);
        Self::ALL
            .into_iter()
            .find(|c| c.label().to_lowercase() == norm)
            .ok_or_else(|| {
                format!(
                    "unknown feedback category '{}' (expected one of: {})",
                    s,
                    expected(&Self::ALL, Self::label)
                )
            })
    }
}

impl FromStr for EnhancementCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let norm = normalize(s);
        let found = match norm.as_str() {
            "layout" => Some(EnhancementCategory::LayoutImprovement),
            "color" | "colour" | "colour scheme" => Some(EnhancementCategory::ColorScheme),
            _ => Self::ALL
                .into_iter()
                .find(|c| c.label().to_lowercase() == norm),
        };
        found.ok_or_else(|| {
            format!(
                "unknown enhancement category '{}' (expected one of: {})",
                s,
                expected(&Self::ALL, Self::label)
            )
        })
    }
}

impl FromStr for Fidelity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "low" | "low fidelity" => Ok(Fidelity::Low),
            "high" | "high fidelity" => Ok(Fidelity::High),
            _ => Err(format!(
                "unknown fidelity '{}' (expected one of: low, high)",
                s
            )),
        }
    }
}

impl fmt::Display for FeedbackCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for EnhancementCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for Fidelity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Ask for `category` feedback on the uploaded design, given the user's goal.
///
/// An empty `design_context` is accepted and yields a prompt with `''`.
pub fn build_feedback_prompt(design_context: &str, category: FeedbackCategory) -> String {
    format!(
        "You are a virtual design mentor. Based on the design goal: '{}', provide {} feedback for the uploaded design.",
        design_context,
        category.label().to_lowercase()
    )
}

/// Ask for `category` enhancement suggestions on the uploaded design.
pub fn build_enhancement_prompt(category: EnhancementCategory) -> String {
    format!(
        "You are a design expert. Based on the uploaded image, provide suggestions for {} in the design.",
        category.label().to_lowercase()
    )
}

/// Ask for a wireframe at the given fidelity matching `description`.
pub fn build_wireframe_prompt(description: &str, fidelity: Fidelity) -> String {
    format!(
        "Generate a {} based on the following description: '{}'",
        fidelity.clause(),
        description
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feedback_prompt_carries_context_and_category() {
        let p = build_feedback_prompt("Make it mobile-friendly", FeedbackCategory::Usability);
        assert!(p.contains("Make it mobile-friendly"));
        assert!(p.to_lowercase().contains("usability"));
        assert_eq!(
            p,
            "You are a virtual design mentor. Based on the design goal: 'Make it mobile-friendly', provide usability feedback for the uploaded design."
        );
    }

    #[test]
    fn feedback_prompt_accepts_empty_context() {
        let p = build_feedback_prompt("", FeedbackCategory::All);
        assert!(p.contains("design goal: ''"));
        assert!(p.contains("provide all feedback"));
    }

    #[test]
    fn enhancement_prompt_lowercases_category() {
        let p = build_enhancement_prompt(EnhancementCategory::ColorScheme);
        assert!(p.contains("suggestions for color scheme in the design"));
        let p = build_enhancement_prompt(EnhancementCategory::LayoutImprovement);
        assert!(p.contains("layout improvement"));
    }

    #[test]
    fn wireframe_prompt_switches_clause_on_fidelity() {
        let low = build_wireframe_prompt("e-commerce app", Fidelity::Low);
        assert!(low.contains("simple and low-fidelity"));
        assert!(low.contains("e-commerce app"));
        assert!(!low.contains("high-fidelity"));

        let high = build_wireframe_prompt("e-commerce app", Fidelity::High);
        assert!(high.contains("detailed and high-fidelity"));
        assert!(high.contains("e-commerce app"));
        assert!(!high.contains("low-fidelity"));
    }

    #[test]
    fn wireframe_prompt_does_not_escape_description() {
        let desc = "it's {weird} \n 'quoted'";
        let p = build_wireframe_prompt(desc, Fidelity::Low);
        assert!(p.ends_with(&format!("'{}'", desc)));
    }

    #[test]
    fn categories_parse_from_labels_and_aliases() {
        assert_eq!(
            "usability".parse::<FeedbackCategory>().unwrap(),
            FeedbackCategory::Usability
        );
        assert_eq!(
            "ALL".parse::<FeedbackCategory>().unwrap(),
            FeedbackCategory::All
        );
        assert_eq!(
            "Layout Improvement".parse::<EnhancementCategory>().unwrap(),
            EnhancementCategory::LayoutImprovement
        );
        assert_eq!(
            "color-scheme".parse::<EnhancementCategory>().unwrap(),
            EnhancementCategory::ColorScheme
        );
        assert_eq!(
            "layout".parse::<EnhancementCategory>().unwrap(),
            EnhancementCategory::LayoutImprovement
        );
        assert_eq!("High Fidelity".parse::<Fidelity>().unwrap(), Fidelity::High);
        assert_eq!("low".parse::<Fidelity>().unwrap(), Fidelity::Low);
    }

    #[test]
    fn unknown_category_lists_expected_values() {
        let err = "vibes".parse::<FeedbackCategory>().unwrap_err();
        assert!(err.contains("vibes"));
        assert!(err.contains("Usability, Accessibility, Aesthetics, All"));
        assert!("medium".parse::<Fidelity>().is_err());
        assert!("spacing".parse::<EnhancementCategory>().is_err());
    }
}
