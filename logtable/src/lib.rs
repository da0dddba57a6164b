// Copyright (c) 2022, Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0
#![warn(
    future_incompatible,
    nonstandard_style,
    rust_2018_idioms,
    rust_2021_compatibility
)]

//! Generates precomputed base-2 logarithm lookup tables as source code.
//!
//! Entry `i` of a table is `floor(log2(i)) + 1` (and `0` for `i == 0`), which is the number of
//! low-order bits a bitmask needs to cover `i`.

#[cfg(test)]
#[path = "tests/bucket_tests.rs"]
pub mod bucket_tests;

#[cfg(test)]
#[path = "tests/layout_tests.rs"]
pub mod layout_tests;

#[cfg(test)]
#[path = "tests/render_tests.rs"]
pub mod render_tests;

pub mod bucket;
pub mod layout;
pub mod render;

// Other tooling
pub mod error;
