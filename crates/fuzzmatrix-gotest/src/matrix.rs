// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Fuzz matrix building
//!
//! Turns a stream of [`Record`]s into the JSON matrix consumed by a GitHub
//! Actions `strategy.matrix.include` via `fromJSON`:
//!
//! ```json
//! [{"name":"FuzzTake","pkg":"github.com/FollowTheProcess/parser"}]
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::GoTestError;
use crate::event::Record;

/// Name prefix that marks a Go fuzz test function
pub const FUZZ_PREFIX: &str = "Fuzz";

/// One job in the CI matrix
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatrixEntry {
    /// Fuzz test function name
    pub name: String,
    /// Import path of the package that owns it
    pub pkg: String,
}

impl From<Record> for MatrixEntry {
    fn from(record: Record) -> Self {
        Self {
            name: record.output_text,
            pkg: record.package,
        }
    }
}

/// Keep only the records that announce a fuzz test, in their original order
pub fn fuzz_filter<I>(records: I) -> impl Iterator<Item = Record>
where
    I: IntoIterator<Item = Record>,
{
    records.into_iter().filter(Record::is_fuzz_test)
}

/// Project records into matrix entries, one per record
///
/// No deduplication and no sorting: entries come out in the order `go test`
/// reported them.
#[must_use]
pub fn collect<I>(records: I) -> Vec<MatrixEntry>
where
    I: IntoIterator<Item = Record>,
{
    records
        .into_iter()
        .map(MatrixEntry::from)
        .inspect(|entry| debug!(name = %entry.name, pkg = %entry.pkg, "Found fuzz test"))
        .collect()
}

/// Serialize the matrix as a compact, single-line JSON array
///
/// An empty matrix renders as `[]`.
///
/// # Errors
///
/// Returns `GoTestError::Json` if serialization fails.
pub fn render_matrix(entries: &[MatrixEntry]) -> Result<String, GoTestError> {
    Ok(serde_json::to_string(entries)?)
}
