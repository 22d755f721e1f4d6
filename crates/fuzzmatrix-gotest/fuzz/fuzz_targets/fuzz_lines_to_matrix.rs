// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Fuzz target for the lines-to-matrix path
//!
//! Feeds arbitrary multi-line input through parse, filter, collect and
//! render. None of these should panic.

#![no_main]

use libfuzzer_sys::fuzz_target;

use fuzzmatrix_gotest::{Record, collect, fuzz_filter, parse_lines, render_matrix};

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        let parsed: Result<Vec<Record>, _> = parse_lines(input.lines()).collect();
        if let Ok(records) = parsed {
            let matrix = collect(fuzz_filter(records));
            let rendered = render_matrix(&matrix).expect("matrix should always serialize");
            assert!(rendered.starts_with('[') && rendered.ends_with(']'));
        }
    }
});
