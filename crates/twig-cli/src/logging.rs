// SPDX-License-Identifier: Apache-2.0

//! Logging initialization for the Twig CLI.
//!
//! Uses `tracing` with `tracing-subscriber` for structured logging on stderr,
//! so stdout stays clean for JSON and YAML output.
//!
//! # Examples
//!
//! ```bash
//! # Default: warnings only (one per data-quality problem)
//! twig tree build page.json
//!
//! # Per-pass detail and placeholder synthesis
//! twig -v tree build page.json
//!
//! # Fine-grained control
//! RUST_LOG=twig_core::tree=debug twig tree build page.json
//! ```

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

/// Default filter directives for the given verbosity.
fn default_filter(verbose: bool) -> &'static str {
    if verbose { "twig=debug" } else { "twig=warn" }
}

/// Initialize the logging subsystem.
///
/// `RUST_LOG` takes precedence; otherwise `-v` raises the level from
/// `warn` to `debug` for all `twig` crates.
pub fn init_logging(verbose: bool) {
    let fmt_layer = fmt::layer().with_target(false).with_writer(std::io::stderr);

    let filter_layer = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();
}
