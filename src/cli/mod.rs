//! Command-line interface for repo-prompt
//!
//! A single command: resolve FILES, build the document, write it out.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::{load_config, merge_cli_with_config, CliOverrides};
use crate::domain::TreeOrder;
use crate::pack::build_pack;
use crate::render::OutputSink;

mod utils;

use utils::parse_csv;

/// Concatenate files into a single Markdown document with a file tree
///
/// Each file is wrapped in a fenced code block labeled with its path relative
/// to the common ancestor of all inputs. Glob patterns that match nothing are
/// ignored; literal paths that do not exist are an error.
#[derive(Parser)]
#[command(name = "repo-prompt")]
#[command(author, version)]
pub struct Cli {
    /// Paths or glob patterns for files to concatenate
    #[arg(value_name = "FILES", required = true)]
    files: Vec<String>,

    /// Write the document to this file instead of stdout (overwritten)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Config file (default: repo-prompt.toml / .yml in the current directory)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Sibling ordering in the tree
    #[arg(long, value_enum, value_name = "ORDER")]
    tree_order: Option<TreeOrder>,

    /// Drop glob matches matching these globs (comma-separated)
    #[arg(short = 'e', long, value_name = "GLOBS")]
    exclude: Option<String>,

    /// Let wildcards match dot-files and dot-directories
    #[arg(long)]
    hidden: bool,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long)]
    verbose: bool,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG in the environment always takes precedence; --verbose falls back to DEBUG.
    let filter = if cli.verbose {
        EnvFilter::from_default_env().add_directive(Level::DEBUG.into())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    let cwd = std::env::current_dir().context("Failed to determine current directory")?;

    let file_config = load_config(&cwd, cli.config.as_deref())?;
    let config = merge_cli_with_config(
        file_config,
        CliOverrides {
            tree_order: cli.tree_order,
            exclude_globs: parse_csv(&cli.exclude),
            include_hidden: cli.hidden,
        },
    );
    tracing::debug!("Effective config: {:?}", config);

    let document = build_pack(&cli.files, &config, &cwd)?;
    OutputSink::from_option(cli.output).write(&document)?;

    Ok(())
}
