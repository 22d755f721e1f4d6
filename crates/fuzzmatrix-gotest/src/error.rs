// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Error types for fuzzmatrix-gotest

use thiserror::Error;

/// Errors that can occur while processing `go test -json` output
#[derive(Debug, Error)]
pub enum GoTestError {
    /// A line was not a JSON object, or the matrix could not be serialized
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
