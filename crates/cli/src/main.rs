mod commands;
mod config;
mod labels;
mod studio;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use mentor_core::{EnhancementCategory, FeedbackCategory, Fidelity, Language};

/// Output format for CLI responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Text,
    Json,
}

/// AI-assisted design feedback, composition and publishing.
#[derive(Parser)]
#[command(
    name = "design-mentor",
    version,
    about = "AI-assisted design feedback, component composition and publishing"
)]
struct Cli {
    /// Interface language (en, es, fr, de)
    #[arg(long, global = true, default_value = "en")]
    lang: Language,

    /// Path to a TOML config file (default: ./design-mentor.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output format (text or json)
    #[arg(long, global = true, default_value = "text", value_enum)]
    output: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    quiet: bool,

    /// Log request details to stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the component library
    Components,

    /// Generate HTML and CSS from library components, in the given order
    Compose {
        /// Component names, e.g. Header "Product Card" Footer
        #[arg(required = true)]
        names: Vec<String>,
    },

    /// Ask for AI feedback on a design
    Feedback {
        /// usability, accessibility, aesthetics or all
        #[arg(long, default_value = "all")]
        category: FeedbackCategory,
        /// Design goal or context
        #[arg(long, default_value = "")]
        context: String,
    },

    /// Ask for AI enhancement suggestions
    Enhance {
        /// layout, color, typography or all
        #[arg(long, default_value = "all")]
        category: EnhancementCategory,
    },

    /// Generate wireframe code from a description
    Wireframe {
        /// What the wireframe should show
        description: String,
        /// low or high
        #[arg(long, default_value = "low")]
        fidelity: Fidelity,
    },

    /// Translate text into the --lang language
    Translate {
        text: String,
    },

    /// Upload a design image to a GitHub repository
    Publish {
        /// PNG or JPEG design file
        #[arg(long)]
        image: PathBuf,
        /// Repository name under the token owner's account
        #[arg(long)]
        repo: String,
        /// Personal access token (default: $GITHUB_TOKEN)
        #[arg(long)]
        token: Option<String>,
    },

    /// Start an interactive design session
    Studio {
        /// Design to load on start
        #[arg(long)]
        image: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = match config::load_config(cli.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            report_error(&format!("error: {}", e), cli.output, cli.quiet);
            process::exit(1);
        }
    };
    let labels = labels::Labels::new(&config, cli.lang);

    match cli.command {
        Commands::Components => {
            commands::cmd_components(&labels, cli.output, cli.quiet);
        }
        Commands::Compose { names } => {
            commands::cmd_compose(&names, &labels, cli.output, cli.quiet);
        }
        Commands::Feedback { category, context } => {
            commands::cmd_feedback(&config, &labels, category, &context, cli.output, cli.quiet);
        }
        Commands::Enhance { category } => {
            commands::cmd_enhance(&config, &labels, category, cli.output, cli.quiet);
        }
        Commands::Wireframe {
            description,
            fidelity,
        } => {
            commands::cmd_wireframe(
                &config,
                &labels,
                &description,
                fidelity,
                cli.output,
                cli.quiet,
            );
        }
        Commands::Translate { text } => {
            commands::cmd_translate(&config, &labels, &text, cli.output, cli.quiet);
        }
        Commands::Publish { image, repo, token } => {
            commands::cmd_publish(
                &config,
                &labels,
                &image,
                &repo,
                token.as_deref(),
                cli.output,
                cli.quiet,
            );
        }
        Commands::Studio { image } => {
            studio::run_studio(&config, cli.lang, image.as_deref(), cli.quiet);
        }
    }
}

/// Logs go to stderr so stdout stays clean for `--output json`.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

pub(crate) fn report_error(msg: &str, output: OutputFormat, quiet: bool) {
    if quiet {
        return;
    }
    match output {
        OutputFormat::Text => eprintln!("{}", msg),
        OutputFormat::Json => {
            eprintln!("{}", serde_json::json!({ "error": msg }));
        }
    }
}
