// Copyright (c) 2022, Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! Collection of errors to be used in logtable.
//!
//! Rendering itself never fails on a layout; the only validation is done by
//! [crate::layout::TableLayout::new]. Layouts built with
//! [crate::layout::TableLayout::new_unchecked] render whatever integer division gives.

use thiserror::Error;

pub type LogTableResult<T> = Result<T, LogTableError>;

/// Collection of errors to be used in logtable.
#[derive(Debug, Error)]
pub enum LogTableError {
    /// The table must hold at least one value.
    #[error("Table size must be positive")]
    ZeroTableSize,

    /// Rows must hold at least one value.
    #[error("Row size must be positive")]
    ZeroRowSize,

    /// The row size does not evenly divide the table size.
    #[error("Row size {row_size} does not evenly divide table size {table_size}")]
    UnevenRows { table_size: usize, row_size: usize },

    /// A caller-supplied name made the rendered text invalid UTF-8.
    #[error("Rendered table is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// Writing the rendered table failed.
    #[error("Failed to write table: {0}")]
    Io(#[from] std::io::Error),
}
