// SPDX-License-Identifier: Apache-2.0

//! CLI-specific error formatting with user-friendly hints.
//!
//! Downcasts `anyhow::Error` to `TwigError` and adds hints for the CLI. The
//! library keeps structured error data, presentation lives here.

use anyhow::Error;
use twig_core::error::TwigError;

/// Formats an error for CLI display with helpful hints.
///
/// If the error is not a `TwigError`, returns the full context chain.
pub fn format_error(error: &Error) -> String {
    let Some(twig_err) = error.downcast_ref::<TwigError>() else {
        return format!("{error:#}");
    };

    match twig_err {
        TwigError::Config { message: _ } => {
            format!(
                "{twig_err}\n\nTip: Check your config file at {}",
                twig_core::config::config_file_path().display()
            )
        }
        TwigError::InvalidInput(_) => {
            format!(
                "{error:#}\n\nTip: Input must be a JSON array of comments. Run `twig schema` to see the expected fields."
            )
        }
        TwigError::Io(_) => {
            format!("{error:#}\n\nTip: Check that the file exists and is readable.")
        }
    }
}

#[cfg(test)]
mod tests {
    use anyhow::Context;

    use super::*;

    #[test]
    fn test_config_error_points_at_config_file() {
        let err = Error::new(TwigError::Config {
            message: "invalid type".to_string(),
        });
        let formatted = format_error(&err);
        assert!(formatted.contains("Configuration error: invalid type"));
        assert!(formatted.contains("config.toml"));
    }

    #[test]
    fn test_invalid_input_keeps_context() {
        let parse_err = serde_json::from_str::<Vec<u32>>("{").unwrap_err();
        let err = Err::<(), _>(TwigError::InvalidInput(parse_err))
            .context("Failed to parse page.json")
            .unwrap_err();
        let formatted = format_error(&err);
        assert!(formatted.starts_with("Failed to parse page.json"));
        assert!(formatted.contains("twig schema"));
    }

    #[test]
    fn test_io_error_hint() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err = Error::new(TwigError::from(io_err));
        assert!(format_error(&err).contains("Check that the file exists"));
    }

    #[test]
    fn test_other_errors_pass_through() {
        let err = anyhow::anyhow!("2 of 3 files have diagnostics");
        assert_eq!(format_error(&err), "2 of 3 files have diagnostics");
    }
}
