//! CLI for the icongen component generator.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use icongen_core::config;
use std::path::PathBuf;

use commands::{run_generate, run_list, run_targets};

/// Top-level CLI for the icongen component generator.
#[derive(Debug, Parser)]
#[command(name = "icongen")]
#[command(about = "Generate UI icon components from a remote SVG directory", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Fetch icons and write generated components for one or all targets.
    Generate {
        /// Target name (see `icongen targets`). Default: all targets.
        #[arg(long)]
        target: Option<String>,

        /// Output root the per-target directories are joined onto.
        /// Default: config `output_root`, else the current directory.
        #[arg(long, value_name = "DIR")]
        out_root: Option<PathBuf>,

        /// Override the source repository (`owner/name`) for the selected
        /// targets, e.g. to generate from a fork.
        #[arg(long, value_name = "OWNER/NAME")]
        repo: Option<String>,
    },

    /// List the remote entries a target's lister currently sees.
    List {
        /// Target name. Default: all targets.
        #[arg(long)]
        target: Option<String>,
    },

    /// Show the built-in generation targets.
    Targets,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Generate {
                target,
                out_root,
                repo,
            } => run_generate(&cfg, target.as_deref(), out_root, repo.as_deref()),
            CliCommand::List { target } => run_list(&cfg, target.as_deref()),
            CliCommand::Targets => run_targets(),
        }
    }
}
