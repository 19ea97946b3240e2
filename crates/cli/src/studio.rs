//! `design-mentor studio` -- interactive design session.
//!
//! Holds one [`Session`] for the lifetime of the shell: upload a design,
//! save versions, browse and export them, ask for feedback, compose
//! components, generate wireframes and publish. A failed command prints an
//! error and leaves the session as it was.

use std::io::{self, BufRead, Write};
use std::path::Path;

use mentor_core::advice::{request_enhancements, request_feedback, request_wireframe};
use mentor_core::publish::{encode_png, publish};
use mentor_core::versions::version_label;
use mentor_core::{
    ComponentLibrary, EnhancementCategory, FeedbackCategory, Fidelity, Language, Session,
};

use crate::config::{self, MentorConfig};
use crate::labels::Labels;

/// Run the interactive studio on stdin/stdout until `quit` or EOF.
pub(crate) fn run_studio(config: &MentorConfig, lang: Language, image: Option<&Path>, quiet: bool) {
    let mut studio = Studio::new(config, lang);

    if !quiet {
        print!("{}", banner(&studio.labels));
    }

    if let Some(path) = image {
        studio.handle(&format!("upload {}", path.display()));
    }

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        print!("mentor> ");
        if io::stdout().flush().is_err() {
            break;
        }

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => {
                // EOF (Ctrl-D)
                println!();
                break;
            }
            Ok(_) => {}
            Err(e) => {
                eprintln!("error reading input: {}", e);
                break;
            }
        }

        if studio.handle(&line) == Flow::Quit {
            break;
        }
    }

    let Studio {
        labels, session, ..
    } = studio;
    let summary = session.close();
    if !quiet {
        println!("{}", closing_line(&labels, summary.versions_saved));
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

struct Studio<'a> {
    config: &'a MentorConfig,
    labels: Labels,
    session: Session,
    library: ComponentLibrary,
}

impl<'a> Studio<'a> {
    fn new(config: &'a MentorConfig, lang: Language) -> Self {
        Self {
            config,
            labels: Labels::new(config, lang),
            session: Session::new(lang),
            library: ComponentLibrary::builtin(),
        }
    }

    /// Execute one input line.
    fn handle(&mut self, line: &str) -> Flow {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Flow::Continue;
        }

        let parts: Vec<&str> = trimmed.splitn(3, char::is_whitespace).collect();
        let cmd = parts[0].to_lowercase();
        let arg = |i: usize| parts.get(i).map(|s| s.trim()).filter(|s| !s.is_empty());

        match cmd.as_str() {
            "help" => print!("{}", help_text(&self.labels)),
            "upload" => match trimmed.split_once(char::is_whitespace) {
                Some((_, path)) => self.upload(Path::new(path.trim())),
                None => eprintln!("usage: upload <path>"),
            },
            "save" => self.save(),
            "versions" => self.list_versions(),
            "show" => self.show(arg(1)),
            "export" => match (arg(1), arg(2)) {
                (Some(label), Some(path)) => self.export(label, Path::new(path)),
                _ => eprintln!("usage: export <version> <path>"),
            },
            "feedback" => {
                let category = arg(1).unwrap_or("all");
                match category.parse::<FeedbackCategory>() {
                    Ok(c) => self.feedback(c, arg(2).unwrap_or("")),
                    Err(e) => eprintln!("{}", e),
                }
            }
            "enhance" => match arg(1).unwrap_or("all").parse::<EnhancementCategory>() {
                Ok(c) => self.enhance(c),
                Err(e) => eprintln!("{}", e),
            },
            "components" => self.components(),
            "compose" => match trimmed.split_once(char::is_whitespace) {
                Some((_, names)) => self.compose(names),
                None => eprintln!("usage: compose <name>[, <name>...]"),
            },
            "wireframe" => match (arg(1), arg(2)) {
                (Some(fidelity), Some(description)) => match fidelity.parse::<Fidelity>() {
                    Ok(f) => self.wireframe(f, description),
                    Err(e) => eprintln!("{}", e),
                },
                _ => eprintln!("usage: wireframe <low|high> <description>"),
            },
            "lang" => match arg(1) {
                Some(code) => match code.parse::<Language>() {
                    Ok(lang) => self.set_language(lang),
                    Err(e) => eprintln!("{}", e),
                },
                None => println!("  {} ({})", self.labels.lang(), self.labels.lang().name()),
            },
            "publish" => match arg(1) {
                Some(repo) => self.publish(repo, arg(2)),
                None => eprintln!("usage: publish <repository> [token]"),
            },
            "quit" | "exit" => return Flow::Quit,
            _ => {
                eprintln!(
                    "unknown command: {}. Type 'help' for available commands.",
                    cmd
                );
            }
        }
        Flow::Continue
    }

    // ─── Design and versions ─────────────────────────────────────────────────

    fn upload(&mut self, path: &Path) {
        match self.session.upload_path(path) {
            Ok((w, h)) => println!(
                "  {}: {} ({}x{})",
                self.labels.t("Uploaded Design"),
                path.display(),
                w,
                h
            ),
            Err(e) => eprintln!("error uploading design: {}", e),
        }
    }

    fn save(&mut self) {
        match self.session.save_version() {
            Ok(index) => println!("  {} {}!", self.labels.t("Saved version"), index + 1),
            Err(e) => eprintln!("error saving version: {}", e),
        }
    }

    fn list_versions(&self) {
        let versions = self.session.versions();
        if versions.is_empty() {
            println!("  {}", self.labels.t("No versions saved yet."));
            return;
        }
        println!("  {}", self.labels.t("Version Control"));
        for index in versions.list() {
            let Ok(snapshot) = versions.get(index) else {
                continue;
            };
            let marker = if versions.current() == Some(index) { '*' } else { ' ' };
            let (w, h) = snapshot.dimensions();
            println!(
                "  {} {:<12} {}x{}  {}",
                marker,
                version_label(index),
                w,
                h,
                snapshot.saved_at_rfc3339()
            );
        }
    }

    /// Details of the labelled version, or the current one.
    fn show(&self, label: Option<&str>) {
        let versions = self.session.versions();
        let index = match label {
            Some(raw) => match parse_label(raw).and_then(|n| {
                versions.index_for_label(n).map_err(|e| e.to_string())
            }) {
                Ok(i) => i,
                Err(e) => {
                    eprintln!("error showing version: {}", e);
                    return;
                }
            },
            None => match versions.current() {
                Some(i) => i,
                None => {
                    eprintln!("error showing version: no versions saved");
                    return;
                }
            },
        };

        if let Ok(snapshot) = versions.get(index) {
            let (w, h) = snapshot.dimensions();
            println!("  {}", version_label(index));
            println!("    size:     {}x{}", w, h);
            println!("    saved at: {}", snapshot.saved_at_rfc3339());
        }
    }

    fn export(&self, label: &str, path: &Path) {
        let versions = self.session.versions();
        let result = parse_label(label)
            .and_then(|n| versions.index_for_label(n).map_err(|e| e.to_string()))
            .and_then(|i| versions.get(i).map_err(|e| e.to_string()).map(|s| (i, s)))
            .and_then(|(i, snapshot)| {
                let bytes = encode_png(snapshot.image()).map_err(|e| e.to_string())?;
                std::fs::write(path, bytes)
                    .map_err(|e| format!("could not write '{}': {}", path.display(), e))?;
                Ok(i)
            });

        match result {
            Ok(index) => println!("  {} -> {}", version_label(index), path.display()),
            Err(e) => eprintln!("error exporting version: {}", e),
        }
    }

    // ─── AI assistance ───────────────────────────────────────────────────────

    fn feedback(&self, category: FeedbackCategory, context: &str) {
        println!("  {}", self.labels.t("Generating feedback..."));
        let result = self
            .config
            .completion_client()
            .and_then(|client| request_feedback(&client, context, category));
        match result {
            Ok(text) => {
                println!("{}", self.labels.t("AI Feedback:"));
                println!("{}", text);
            }
            Err(e) => eprintln!("error generating feedback: {}", e),
        }
    }

    fn enhance(&self, category: EnhancementCategory) {
        println!("  {}", self.labels.t("Generating enhancement suggestions..."));
        let result = self
            .config
            .completion_client()
            .and_then(|client| request_enhancements(&client, category));
        match result {
            Ok(text) => {
                println!("{}", self.labels.t("AI Enhancement Suggestions:"));
                println!("{}", text);
            }
            Err(e) => eprintln!("error generating enhancement suggestions: {}", e),
        }
    }

    fn wireframe(&self, fidelity: Fidelity, description: &str) {
        println!("  {}", self.labels.t("Generating wireframe..."));
        let result = self
            .config
            .completion_client()
            .and_then(|client| request_wireframe(&client, description, fidelity));
        match result {
            Ok(code) => {
                println!("{}", self.labels.t("Generated Wireframe Code:"));
                println!("{}", code);
            }
            Err(e) => eprintln!("error generating wireframe: {}", e),
        }
    }

    // ─── Components ──────────────────────────────────────────────────────────

    fn components(&self) {
        for name in self.library.names() {
            println!("  {}", name);
        }
    }

    /// `names` is a comma-separated list, e.g. `Header, Product Card`.
    fn compose(&self, names: &str) {
        let selected: Vec<&str> = names
            .split(',')
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .collect();
        match self.library.compose(&selected[..]) {
            Ok(page) => {
                println!("{}", self.labels.t("Generated HTML Code"));
                println!("{}", page.markup);
                println!("{}", self.labels.t("Generated CSS Code"));
                println!("{}", page.style);
            }
            Err(e) => eprintln!("error composing components: {}", e),
        }
    }

    // ─── Session settings and publishing ─────────────────────────────────────

    fn set_language(&mut self, lang: Language) {
        self.labels = Labels::new(self.config, lang);
        self.session.set_language(lang);
        println!("  {} ({})", lang, lang.name());
    }

    fn publish(&self, repo: &str, token: Option<&str>) {
        let design = match self.session.active_image() {
            Ok(img) => img,
            Err(e) => {
                eprintln!("error saving design: {}", e);
                return;
            }
        };
        let token = config::resolve_token(token);
        match publish(&self.config.hosting_client(), design, repo, &token) {
            Ok(receipt) => {
                println!("{}", self.labels.t("Design saved to GitHub successfully!"));
                println!("  {}/{} ({} bytes)", receipt.repository, receipt.path, receipt.bytes);
            }
            Err(e) => eprintln!("error saving design: {}", e),
        }
    }
}

fn parse_label(raw: &str) -> Result<i64, String> {
    raw.trim()
        .trim_start_matches(['v', 'V'])
        .parse::<i64>()
        .map_err(|_| format!("invalid version '{}': expected a number such as 1", raw))
}

const COMMANDS: [&str; 14] = [
    "help", "upload", "save", "versions", "show", "export", "feedback", "enhance", "compose",
    "components", "wireframe", "lang", "publish", "quit",
];

const HELP: [(&str, &str); 14] = [
    ("help", "Show this help"),
    ("upload <path>", "Load a PNG or JPEG design"),
    ("save", "Save the uploaded design as a new version"),
    ("versions", "List saved versions (* marks current)"),
    ("show [version]", "Show details of a version"),
    ("export <version> <path>", "Write a version to a PNG file"),
    (
        "feedback [category] [context]",
        "AI feedback (usability, accessibility, aesthetics, all)",
    ),
    ("enhance [category]", "AI suggestions (layout, color, typography, all)"),
    ("components", "List available components"),
    ("compose <name>[, <name>...]", "Generate HTML and CSS from components"),
    ("wireframe <low|high> <text>", "Generate wireframe code from a description"),
    ("lang [en|es|fr|de]", "Show or change the interface language"),
    ("publish <repository> [token]", "Upload the current design to GitHub"),
    ("quit", "Exit the studio"),
];

fn banner(labels: &Labels) -> String {
    format!(
        "{}\n{}\n\n  {} {}\n\n",
        labels.t("Enhanced Virtual Design Mentor"),
        labels.t("An AI-powered platform for interactive design feedback and enhancement!"),
        labels.t("Commands:"),
        COMMANDS.join(", ")
    )
}

/// Command syntax stays literal; descriptions are localized.
fn help_text(labels: &Labels) -> String {
    let mut out = String::from("\n");
    for (usage, description) in HELP {
        out.push_str(&format!("  {:<34}{}\n", usage, labels.t(description)));
    }
    out.push('\n');
    out
}

fn closing_line(labels: &Labels, versions_saved: usize) -> String {
    format!("{} {}", labels.t("Session closed. Versions saved:"), versions_saved)
}
