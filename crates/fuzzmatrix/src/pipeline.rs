// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Lines to matrix
//!
//! [`run_pipeline`] composes the stages: list, parse, filter, collect. The
//! lister is injected, so everything after it can be exercised without a Go
//! toolchain.

use thiserror::Error;
use tracing::info;

use fuzzmatrix_gotest::{GoTestError, MatrixEntry, Record, collect, fuzz_filter, parse_lines};

use crate::lister::ListError;

/// Pipeline errors
///
/// Either is fatal: no partial matrix is produced.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The test listing command failed
    #[error("Failed to list fuzz tests")]
    List(#[from] ListError),

    /// A line of `go test -json` output could not be parsed
    #[error("Malformed go test output")]
    Parse(#[from] GoTestError),
}

/// Build the fuzz matrix from the lines produced by `list`
///
/// # Errors
///
/// Returns `PipelineError::List` if `list` fails and `PipelineError::Parse`
/// on the first line that is not a JSON object.
pub fn run_pipeline<F>(list: F) -> Result<Vec<MatrixEntry>, PipelineError>
where
    F: FnOnce() -> Result<Vec<String>, ListError>,
{
    let lines = list()?;
    let records: Vec<Record> = parse_lines(&lines).collect::<Result<_, _>>()?;
    let matrix = collect(fuzz_filter(records));

    info!(
        lines = lines.len(),
        fuzz_tests = matrix.len(),
        "Built fuzz matrix"
    );
    Ok(matrix)
}
