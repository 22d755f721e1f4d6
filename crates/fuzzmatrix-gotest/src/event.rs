// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! `go test -json` record parsing
//!
//! `go test -json` (via `test2json`) writes one JSON object per line. Each
//! object describes a single event: a package starting, a line of output, a
//! test passing, and so on. Only four keys matter for matrix building:
//!
//! | Key       | Field         |
//! |-----------|---------------|
//! | `Time`    | `timestamp`   |
//! | `Action`  | `action`      |
//! | `Package` | `package`     |
//! | `Output`  | `output_text` |
//!
//! The format is permissive: any of these keys may be missing from a line,
//! and every other key (`Test`, `Elapsed`, ...) is ignored.
//!
//! # Example
//!
//! ```
//! use fuzzmatrix_gotest::event::Record;
//!
//! let line = r#"{"Action":"output","Package":"pkg/a","Output":"FuzzParse\n"}"#;
//! let record = Record::parse(line).unwrap();
//! assert_eq!(record.output_text(), "FuzzParse");
//! assert_eq!(record.timestamp(), "");
//! ```

use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

use crate::error::GoTestError;
use crate::matrix::FUZZ_PREFIX;

/// A single line of `go test -json` output
///
/// Absent, `null` and non-string values all become empty text, and every
/// value is trimmed. A `Record` is never mutated after construction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Record {
    #[serde(rename = "Time", default, deserialize_with = "trimmed_text")]
    pub(crate) timestamp: String,
    #[serde(rename = "Action", default, deserialize_with = "trimmed_text")]
    pub(crate) action: String,
    #[serde(rename = "Package", default, deserialize_with = "trimmed_text")]
    pub(crate) package: String,
    #[serde(rename = "Output", default, deserialize_with = "trimmed_text")]
    pub(crate) output_text: String,
}

impl Record {
    /// Build a record from its four fields, trimming each one
    #[must_use]
    pub fn new(
        timestamp: impl AsRef<str>,
        action: impl AsRef<str>,
        package: impl AsRef<str>,
        output_text: impl AsRef<str>,
    ) -> Self {
        Self {
            timestamp: timestamp.as_ref().trim().to_owned(),
            action: action.as_ref().trim().to_owned(),
            package: package.as_ref().trim().to_owned(),
            output_text: output_text.as_ref().trim().to_owned(),
        }
    }

    /// Parse a record from a single line of JSONL
    ///
    /// # Errors
    ///
    /// Returns `GoTestError::Json` if the line is not valid JSON, or is valid
    /// JSON but not an object.
    pub fn parse(line: &str) -> Result<Self, GoTestError> {
        let object: Map<String, Value> = serde_json::from_str(line)?;
        Ok(Self::deserialize(Value::Object(object))?)
    }

    /// Event timestamp (RFC 3339 as emitted by `test2json`)
    #[must_use]
    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    /// Event kind, e.g. `"output"`, `"pass"`, `"start"`
    #[must_use]
    pub fn action(&self) -> &str {
        &self.action
    }

    /// Import path of the package the event belongs to
    #[must_use]
    pub fn package(&self) -> &str {
        &self.package
    }

    /// The captured output fragment
    #[must_use]
    pub fn output_text(&self) -> &str {
        &self.output_text
    }

    /// Whether this record announces a fuzz test function
    ///
    /// With `-list`, `go test` prints each matching function name as a bare
    /// output line. There is no dedicated event for it, so the name prefix is
    /// the only signal.
    #[must_use]
    pub fn is_fuzz_test(&self) -> bool {
        self.output_text.starts_with(FUZZ_PREFIX)
    }
}

/// Deserialize any JSON value as trimmed text, mapping non-strings to `""`
fn trimmed_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_str().map(str::trim).unwrap_or_default().to_owned())
}

/// Parse every line into a [`Record`], lazily and in order
///
/// Yields exactly one item per input line. Callers decide whether to stop at
/// the first error; `fuzzmatrix` always does.
pub fn parse_lines<I>(lines: I) -> impl Iterator<Item = Result<Record, GoTestError>>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    lines.into_iter().map(|line| Record::parse(line.as_ref()))
}
