//! One-shot subcommands: each runs a single action and exits.

use std::path::Path;
use std::process;

use mentor_core::advice::{request_enhancements, request_feedback, request_wireframe};
use mentor_core::publish::publish;
use mentor_core::{
    localize, ComponentLibrary, EnhancementCategory, FeedbackCategory, Fidelity, Session,
};

use crate::config::{self, MentorConfig};
use crate::labels::Labels;
use crate::{report_error, OutputFormat};

fn fail(msg: &str, output: OutputFormat, quiet: bool) -> ! {
    report_error(msg, output, quiet);
    process::exit(1);
}

fn print_json(value: &impl serde::Serialize) {
    let pretty = serde_json::to_string_pretty(value)
        .unwrap_or_else(|e| format!("serialization error: {}", e));
    println!("{}", pretty);
}

/// Heading followed by a body. Headings are dropped under `--quiet`.
fn print_section(heading: &str, body: &str, quiet: bool) {
    if !quiet {
        println!("{}", heading);
    }
    println!("{}", body);
}

// ── Components ───────────────────────────────────────────────────────────────

pub(crate) fn cmd_components(labels: &Labels, output: OutputFormat, quiet: bool) {
    let library = ComponentLibrary::builtin();
    match output {
        OutputFormat::Json => print_json(&library.templates()),
        OutputFormat::Text => {
            if !quiet {
                println!("{}", labels.t("Available components:"));
            }
            print!("{}", render_components(&library, labels));
        }
    }
}

fn render_components(library: &ComponentLibrary, labels: &Labels) -> String {
    let html = labels.t("HTML");
    let css = labels.t("CSS");
    let mut out = String::new();
    for template in library.templates() {
        out.push_str(&format!("{}\n", template.name));
        out.push_str(&format!("  {}: {}\n", html, template.markup));
        out.push_str(&format!("  {}: {}\n", css, template.style));
    }
    out
}

pub(crate) fn cmd_compose(names: &[String], labels: &Labels, output: OutputFormat, quiet: bool) {
    let composition = match ComponentLibrary::builtin().compose(names) {
        Ok(c) => c,
        Err(e) => fail(&format!("error composing components: {}", e), output, quiet),
    };

    match output {
        OutputFormat::Json => print_json(&composition),
        OutputFormat::Text => {
            print_section(&labels.t("Generated HTML Code"), &composition.markup, quiet);
            if !quiet {
                println!();
            }
            print_section(&labels.t("Generated CSS Code"), &composition.style, quiet);
        }
    }
}

// ── AI assistance ────────────────────────────────────────────────────────────

pub(crate) fn cmd_feedback(
    config: &MentorConfig,
    labels: &Labels,
    category: FeedbackCategory,
    context: &str,
    output: OutputFormat,
    quiet: bool,
) {
    let result = config
        .completion_client()
        .and_then(|client| request_feedback(&client, context, category));
    let feedback = match result {
        Ok(text) => text,
        Err(e) => fail(&format!("error generating feedback: {}", e), output, quiet),
    };

    match output {
        OutputFormat::Json => print_json(&serde_json::json!({
            "category": category.label(),
            "feedback": feedback,
        })),
        OutputFormat::Text => print_section(&labels.t("AI Feedback:"), &feedback, quiet),
    }
}

pub(crate) fn cmd_enhance(
    config: &MentorConfig,
    labels: &Labels,
    category: EnhancementCategory,
    output: OutputFormat,
    quiet: bool,
) {
    let result = config
        .completion_client()
        .and_then(|client| request_enhancements(&client, category));
    let suggestions = match result {
        Ok(text) => text,
        Err(e) => fail(
            &format!("error generating enhancement suggestions: {}", e),
            output,
            quiet,
        ),
    };

    match output {
        OutputFormat::Json => print_json(&serde_json::json!({
            "category": category.label(),
            "suggestions": suggestions,
        })),
        OutputFormat::Text => {
            print_section(&labels.t("AI Enhancement Suggestions:"), &suggestions, quiet)
        }
    }
}

pub(crate) fn cmd_wireframe(
    config: &MentorConfig,
    labels: &Labels,
    description: &str,
    fidelity: Fidelity,
    output: OutputFormat,
    quiet: bool,
) {
    let result = config
        .completion_client()
        .and_then(|client| request_wireframe(&client, description, fidelity));
    let code = match result {
        Ok(text) => text,
        Err(e) => fail(&format!("error generating wireframe: {}", e), output, quiet),
    };

    match output {
        OutputFormat::Json => print_json(&serde_json::json!({
            "fidelity": fidelity.label(),
            "wireframe": code,
        })),
        OutputFormat::Text => print_section(&labels.t("Generated Wireframe Code:"), &code, quiet),
    }
}

// ── Localization ─────────────────────────────────────────────────────────────

/// Unlike labels, an explicit translation surfaces service failures.
pub(crate) fn cmd_translate(
    config: &MentorConfig,
    labels: &Labels,
    text: &str,
    output: OutputFormat,
    quiet: bool,
) {
    let lang = labels.lang();
    let translator = config.translator(lang);
    let translated = match localize(translator.as_ref(), text, lang) {
        Ok(t) => t,
        Err(e) => fail(&format!("error translating text: {}", e), output, quiet),
    };

    match output {
        OutputFormat::Json => print_json(&serde_json::json!({
            "lang": lang,
            "text": translated,
        })),
        OutputFormat::Text => println!("{}", translated),
    }
}

// ── Publishing ───────────────────────────────────────────────────────────────

pub(crate) fn cmd_publish(
    config: &MentorConfig,
    labels: &Labels,
    image: &Path,
    repo: &str,
    token: Option<&str>,
    output: OutputFormat,
    quiet: bool,
) {
    let mut session = Session::new(labels.lang());
    if let Err(e) = session.upload_path(image) {
        fail(&format!("error loading design: {}", e), output, quiet);
    }
    let design = match session.active_image() {
        Ok(img) => img,
        Err(e) => fail(&format!("error saving design: {}", e), output, quiet),
    };

    let token = config::resolve_token(token);
    let receipt = match publish(&config.hosting_client(), design, repo, &token) {
        Ok(r) => r,
        Err(e) => fail(&format!("error saving design: {}", e), output, quiet),
    };

    match output {
        OutputFormat::Json => print_json(&receipt),
        OutputFormat::Text => {
            if !quiet {
                println!("{}", labels.t("Design saved to GitHub successfully!"));
            }
            println!("{}/{} ({} bytes)", receipt.repository, receipt.path, receipt.bytes);
        }
    }
}
