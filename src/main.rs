//! risk-matrix: interactive terminal risk matrix
//!
//! Shows a small collection of risks as an editable matrix or as a bar chart
//! of risk counts per level.

#![allow(clippy::needless_pass_by_value)]

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use risk_matrix::{
    cli,
    config::{self, ViewConfig},
    model::{RiskLevel, ViewMode},
    reports::{auto_detect_format, stdout_is_terminal, OutputFormat},
    LevelFilter,
};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "risk-matrix")]
#[command(version)]
#[command(about = "Interactive terminal risk matrix", long_about = None)]
#[command(after_help = "EXAMPLES:
    # Open the interactive matrix (summary when piped)
    risk-matrix view

    # Start on the bar chart, showing only high risks
    risk-matrix view --graph --filter high

    # Plain-text summary without colors
    risk-matrix --no-color view -o summary")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    /// Disable colored output (also respects `NO_COLOR` env)
    #[arg(long, global = true)]
    no_color: bool,

    /// Path to configuration file
    #[arg(long, global = true, env = "RISK_MATRIX_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Arguments for the `view` subcommand
#[derive(Parser)]
struct ViewArgs {
    /// Output format (auto detects TTY: tui if interactive, summary otherwise)
    #[arg(short, long, default_value = "auto")]
    output: OutputFormat,

    /// Only show risks of this level
    #[arg(long, value_enum)]
    filter: Option<RiskLevel>,

    /// Start on the bar chart instead of the matrix
    #[arg(long)]
    graph: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the risk matrix (interactive TUI or plain-text summary)
    View(ViewArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Generate JSON Schema for the config file format
    ConfigSchema {
        /// Write schema to file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show, discover, or initialize configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Sub-subcommands for the `config` command
#[derive(Subcommand)]
enum ConfigAction {
    /// Print current effective configuration (merged from defaults + file)
    Show,
    /// Print config file search paths and discovered config file
    Path,
    /// Generate an example .risk-matrix.yaml in the current directory
    Init,
}

/// Default log level: quiet while the TUI owns the terminal.
fn default_log_level(cli: &Cli) -> &'static str {
    if cli.verbose {
        return "debug";
    }
    if cli.quiet {
        return "error";
    }
    match &cli.command {
        Commands::View(args)
            if auto_detect_format(args.output, stdout_is_terminal()) == OutputFormat::Tui =>
        {
            "warn"
        }
        _ => "info",
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging (stderr, so it never mixes with summaries on stdout)
    let log_level = default_log_level(&cli);
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();

    // Dispatch to command handlers
    match cli.command {
        Commands::View(args) => {
            let (app, _) = config::load_or_default(cli.config.as_deref());
            let view_config = ViewConfig {
                app,
                output: args.output,
                filter: args.filter.map(LevelFilter::Only),
                view_mode: args.graph.then_some(ViewMode::Graph),
                no_color: cli.no_color,
            };
            cli::run_view(view_config)
        }

        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "risk-matrix", &mut io::stdout());
            Ok(())
        }

        Commands::ConfigSchema { output } => {
            let schema = config::generate_json_schema();
            match output {
                Some(path) => {
                    std::fs::write(&path, &schema)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    eprintln!("Schema written to {}", path.display());
                }
                None => {
                    println!("{schema}");
                }
            }
            Ok(())
        }

        Commands::Config { action } => match action {
            ConfigAction::Show => {
                let (config, loaded_from) = config::load_or_default(cli.config.as_deref());
                if let Some(path) = &loaded_from {
                    eprintln!("# Loaded from: {}", path.display());
                } else {
                    eprintln!("# No config file found; showing defaults");
                }
                let yaml = serde_yaml::to_string(&config).context("failed to serialize config")?;
                print!("{yaml}");
                Ok(())
            }
            ConfigAction::Path => {
                eprintln!("Config file search paths (in order):");
                for path in config::config_search_dirs() {
                    eprintln!("  {}", path.display());
                }
                eprintln!();
                eprintln!("Recognized file names:");
                for name in config::CONFIG_FILE_NAMES {
                    eprintln!("  {name}");
                }
                eprintln!();
                match config::discover_config_file(cli.config.as_deref()) {
                    Some(path) => eprintln!("Active config file: {}", path.display()),
                    None => eprintln!("No config file found."),
                }
                Ok(())
            }
            ConfigAction::Init => {
                let target = std::env::current_dir()
                    .context("cannot determine current directory")?
                    .join(".risk-matrix.yaml");
                if target.exists() {
                    anyhow::bail!(
                        "{} already exists. Remove it first to re-initialize.",
                        target.display()
                    );
                }
                let content = config::generate_full_example_config();
                std::fs::write(&target, content)
                    .with_context(|| format!("failed to write {}", target.display()))?;
                eprintln!("Created {}", target.display());
                Ok(())
            }
        },
    }
}
