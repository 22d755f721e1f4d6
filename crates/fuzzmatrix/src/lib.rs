// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! fuzzmatrix library
//!
//! This module exports the pieces of the `fuzzmatrix` binary for use in
//! integration tests: configuration, the `go test` lister, and the pipeline
//! that turns listed lines into a matrix.

pub mod config;
pub mod lister;
pub mod pipeline;
