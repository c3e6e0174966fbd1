//! ac-highlight: highlight matched prefixes in saved search responses.

use autocomplete_highlight::HighlightConfig;
use clap::{Parser, Subcommand, ValueEnum};
use owo_colors::OwoColorize;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod commands;

const DEFAULT_LOG_FILTER: &str = "ac_highlight=debug,autocomplete_highlight=debug";

/// Highlight matched prefixes in autocomplete search results
#[derive(Parser)]
#[command(name = "ac-highlight")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Highlight the fields of every result in a search response
    Render {
        /// Response JSON file (stdin when omitted or "-")
        input: Option<PathBuf>,

        /// Field to render, repeatable (defaults to config, then all fields)
        #[arg(short, long = "field")]
        fields: Vec<String>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Classify a single word against matching prefixes
    Classify {
        /// Word to classify
        word: String,

        /// Matching prefix, repeatable, tried in order
        #[arg(short, long = "prefix")]
        prefixes: Vec<String>,

        /// Query keyword, repeatable
        #[arg(short, long = "keyword")]
        keywords: Vec<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Output format for rendered results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Terminal colors
    Text,
    /// Configured markup
    Markup,
    /// JSON array of highlighted results
    Json,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.verbose {
        init_logging();
    }

    let result = HighlightConfig::load(cli.config.as_deref())
        .map_err(anyhow::Error::from)
        .and_then(|config| match cli.command {
            Commands::Render { input, fields, format } => {
                commands::render::run(&config, input.as_deref(), &fields, format)
            }
            Commands::Classify { word, prefixes, keywords, json } => {
                commands::classify::run(&word, &prefixes, &keywords, json)
            }
        });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {:#}", "Error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}
