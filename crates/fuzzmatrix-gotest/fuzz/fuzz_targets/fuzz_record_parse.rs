// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Fuzz target for single-line record parsing
//!
//! This fuzzes `Record::parse`, which reads one line of `go test -json`
//! output.

#![no_main]

use libfuzzer_sys::fuzz_target;

use fuzzmatrix_gotest::Record;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        if let Ok(record) = Record::parse(input) {
            // Parsed fields are always trimmed
            assert_eq!(record.output_text(), record.output_text().trim());
            assert_eq!(record.package(), record.package().trim());
        }
    }
});
