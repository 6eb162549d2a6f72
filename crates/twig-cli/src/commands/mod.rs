// SPDX-License-Identifier: Apache-2.0

//! Command handlers for Twig CLI.

pub mod completion;
pub mod schema;
pub mod tree;
pub mod types;

use anyhow::{Result, bail};
use tracing::debug;
use twig_core::AppConfig;

use crate::cli::{Commands, CompletionCommand, OutputContext, TreeCommand};
use crate::output;

/// Dispatch to the appropriate command handler.
pub fn run(command: Commands, ctx: &OutputContext, config: &AppConfig) -> Result<()> {
    match command {
        Commands::Tree(tree_cmd) => match tree_cmd {
            TreeCommand::Build {
                files,
                root_id,
                max_depth,
            } => {
                let result = tree::run_build(&files, root_id, max_depth, config)?;
                output::render(&result, ctx)
            }
            TreeCommand::Check { files, max_depth } => {
                let result = tree::run_check(&files, max_depth, config)?;
                output::render(&result, ctx)?;

                let failing = result.failing_files();
                debug!(files = result.files.len(), failing, "check finished");
                if failing > 0 {
                    bail!(
                        "{failing} of {} file(s) have diagnostics",
                        result.files.len()
                    );
                }
                Ok(())
            }
        },

        Commands::Schema => {
            let result = schema::run();
            output::render(&result, ctx)
        }

        Commands::Completion(CompletionCommand::Generate { shell }) => {
            completion::run_generate(shell)
        }
    }
}
