//! pathfit CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "pathfit", version, about = "Career-fit self-assessment scoring")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score an answer file against a catalog
    Score {
        /// Answer file (.json or .toml)
        #[arg(long)]
        answers: PathBuf,

        /// Catalog TOML (defaults to the configured or bundled catalog)
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Output format: text, json, markdown
        #[arg(long)]
        format: Option<String>,

        /// Directory the JSON report is saved to
        #[arg(long)]
        output: Option<PathBuf>,

        /// Print only, do not save a report
        #[arg(long)]
        no_save: bool,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Validate catalog TOML files
    Validate {
        /// Path to catalog file or directory
        #[arg(long)]
        catalog: PathBuf,
    },

    /// List the questions of a catalog
    Questions {
        /// Catalog TOML (defaults to the configured or bundled catalog)
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Only show one category: trait-fit, technical, multi-dimensional
        #[arg(long)]
        category: Option<String>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Compare two assessment reports
    Compare {
        /// Baseline report JSON
        #[arg(long)]
        baseline: PathBuf,

        /// Current report JSON
        #[arg(long)]
        current: PathBuf,

        /// Points a metric must move by to count as changed
        #[arg(long)]
        threshold: Option<u8>,

        /// Exit code 1 if any metric declined
        #[arg(long)]
        fail_on_decline: bool,

        /// Output format: text, json, markdown
        #[arg(long)]
        format: Option<String>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Create starter config, example catalog and example answers
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("pathfit=info")),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Score {
            answers,
            catalog,
            format,
            output,
            no_save,
            config,
        } => commands::score::execute(answers, catalog, format, output, no_save, config),
        Commands::Validate { catalog } => commands::validate::execute(catalog),
        Commands::Questions {
            catalog,
            category,
            config,
        } => commands::questions::execute(catalog, category, config),
        Commands::Compare {
            baseline,
            current,
            threshold,
            fail_on_decline,
            format,
            config,
        } => commands::compare::execute(baseline, current, threshold, fail_on_decline, format, config),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
