// Copyright (c) 2022, Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

use crate::error::{LogTableError, LogTableResult};

/// Number of entries in the default table.
pub const DEFAULT_TABLE_SIZE: usize = 512;

/// Number of entries printed per row in the default table.
pub const DEFAULT_ROW_SIZE: usize = 16;

/// Shape of a rendered table: how many entries it has and how many go on each row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TableLayout {
    table_size: usize,
    row_size: usize,
}

impl TableLayout {
    /// Create a layout, checking that both sizes are positive and that rows divide the table
    /// evenly.
    pub fn new(table_size: usize, row_size: usize) -> LogTableResult<Self> {
        if table_size == 0 {
            return Err(LogTableError::ZeroTableSize);
        }
        if row_size == 0 {
            return Err(LogTableError::ZeroRowSize);
        }
        if table_size % row_size != 0 {
            return Err(LogTableError::UnevenRows {
                table_size,
                row_size,
            });
        }
        Ok(Self::new_unchecked(table_size, row_size))
    }

    /// Create a layout without validation. Only whole rows are rendered, so a table size that
    /// is not a multiple of the row size loses its trailing entries, and a zero row size gives
    /// an empty table.
    pub const fn new_unchecked(table_size: usize, row_size: usize) -> Self {
        Self {
            table_size,
            row_size,
        }
    }

    pub const fn table_size(&self) -> usize {
        self.table_size
    }

    pub const fn row_size(&self) -> usize {
        self.row_size
    }

    /// Number of whole rows in the table.
    pub const fn num_rows(&self) -> usize {
        match self.row_size {
            0 => 0,
            r => self.table_size / r,
        }
    }
}

impl Default for TableLayout {
    fn default() -> Self {
        Self::new_unchecked(DEFAULT_TABLE_SIZE, DEFAULT_ROW_SIZE)
    }
}
