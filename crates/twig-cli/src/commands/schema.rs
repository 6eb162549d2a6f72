// SPDX-License-Identifier: Apache-2.0

//! Input schema command.

use super::types::SchemaResult;

/// Describe the comment input format.
pub fn run() -> SchemaResult {
    SchemaResult {
        schema: twig_core::input_schema(),
    }
}
