// SPDX-License-Identifier: Apache-2.0

//! Command-line interface definition for Twig.
//!
//! Uses clap's derive API for declarative CLI parsing with hierarchical
//! noun-verb subcommands for autocomplete-optimal design.

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use twig_core::CommentId;

/// Extended help text for the generate subcommand with shell-specific examples.
const COMPLETION_GENERATE_HELP: &str = r#"EXAMPLES

  bash
    Add to ~/.bashrc or ~/.bash_profile:
      eval "$(twig completion generate bash)"

  zsh
    Generate completion file:
      mkdir -p ~/.zsh/completions
      twig completion generate zsh > ~/.zsh/completions/_twig

    Add to ~/.zshrc (before compinit):
      fpath=(~/.zsh/completions $fpath)
      autoload -U compinit && compinit -i

  fish
    Generate completion file:
      twig completion generate fish > ~/.config/fish/completions/twig.fish
"#;

/// Extended help text for `tree build`.
const TREE_BUILD_HELP: &str = r#"EXAMPLES

  Render a saved comment page:
    twig tree build page1.json

  Merge two pages, skipping comments already seen:
    twig tree build page1.json page2.json

  Show only the replies under comment 47, read from stdin:
    curl -s "$API/comment/list?parent_id=47" | jq .comments | twig tree build --root-id 47 -
"#;

/// Output format for CLI results.
#[derive(Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text with colors (default)
    #[default]
    Text,
    /// JSON output for programmatic consumption
    Json,
    /// YAML output for programmatic consumption
    Yaml,
    /// Markdown output for posts and issue trackers
    Markdown,
}

/// Global output configuration passed to commands.
#[derive(Clone)]
pub struct OutputContext {
    /// Output format (text, json, yaml, markdown)
    pub format: OutputFormat,
    /// Suppress summaries and diagnostic tables
    pub quiet: bool,
    /// Enable verbose output (debug-level logging)
    pub verbose: bool,
    /// Whether stdout is a terminal (TTY)
    pub is_tty: bool,
}

impl OutputContext {
    /// Creates an `OutputContext` from CLI arguments.
    pub fn from_cli(format: OutputFormat, quiet: bool, verbose: bool) -> Self {
        Self {
            format,
            quiet,
            verbose,
            is_tty: std::io::stdout().is_terminal(),
        }
    }
}

/// Twig - threaded comment display from flat comment pages.
///
/// Rebuilds reply order from materialized comment paths, fills in
/// tombstones for ancestors missing from the page, and flags comments
/// whose replies must be fetched separately.
#[derive(Parser)]
#[command(name = "twig")]
#[command(version, about, long_about = None)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Output format (text, json, yaml, markdown)
    #[arg(long, short = 'o', global = true, default_value = "text", value_enum)]
    pub output: OutputFormat,

    /// Suppress summaries and diagnostic tables
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Enable verbose output (debug-level logging)
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Build and inspect comment trees
    #[command(subcommand)]
    Tree(TreeCommand),

    /// Print the JSON schema of the comment input format
    Schema,

    /// Generate shell completion scripts
    #[command(subcommand)]
    Completion(CompletionCommand),
}

/// Tree subcommands
#[derive(Subcommand)]
pub enum TreeCommand {
    /// Rebuild display order from one or more comment pages
    #[command(after_long_help = TREE_BUILD_HELP)]
    Build {
        /// JSON files holding arrays of comments ("-" reads stdin)
        #[arg(value_name = "FILE", required = true)]
        files: Vec<PathBuf>,

        /// Show only the replies under this comment
        #[arg(long)]
        root_id: Option<CommentId>,

        /// Depth at which "load more" is flagged (overrides config)
        #[arg(long)]
        max_depth: Option<u32>,
    },

    /// Report data-quality problems in comment pages
    Check {
        /// JSON files holding arrays of comments ("-" reads stdin)
        #[arg(value_name = "FILE", required = true)]
        files: Vec<PathBuf>,

        /// Depth at which "load more" is flagged (overrides config)
        #[arg(long)]
        max_depth: Option<u32>,
    },
}

/// Completion subcommands
#[derive(Subcommand)]
pub enum CompletionCommand {
    /// Generate completion script for a shell (output to stdout)
    #[command(after_long_help = COMPLETION_GENERATE_HELP)]
    Generate {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
