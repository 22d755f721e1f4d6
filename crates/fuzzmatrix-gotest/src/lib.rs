// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! fuzzmatrix-gotest: `go test -json` processing for fuzzmatrix
//!
//! This library crate parses the line-delimited JSON written by
//! `go test -list ^Fuzz -run ^$ -json ./...`, picks out the fuzz test
//! functions, and renders them as a CI matrix.
//!
//! # Example
//!
//! ```
//! use fuzzmatrix_gotest::{collect, fuzz_filter, parse_lines, render_matrix};
//!
//! let lines = [r#"{"Action":"output","Package":"pkg/a","Output":"FuzzParse"}"#];
//! let records = parse_lines(lines).collect::<Result<Vec<_>, _>>().unwrap();
//! let matrix = collect(fuzz_filter(records));
//! assert_eq!(
//!     render_matrix(&matrix).unwrap(),
//!     r#"[{"name":"FuzzParse","pkg":"pkg/a"}]"#
//! );
//! ```

pub mod error;
pub mod event;
pub mod matrix;

pub use error::GoTestError;
pub use event::{Record, parse_lines};
pub use matrix::{FUZZ_PREFIX, MatrixEntry, collect, fuzz_filter, render_matrix};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::error::GoTestError;
    pub use crate::event::{Record, parse_lines};
    pub use crate::matrix::{MatrixEntry, collect, fuzz_filter, render_matrix};
}
