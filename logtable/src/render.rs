// Copyright (c) 2022, Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! Rendering of bucket tables as source-code text.
//!
//! The [TableFormat::Raw] format is the bare array body: every row is preceded by a line break,
//! values are separated by `", "`, rows end with `","` except for the last one, and a single
//! line break closes the block. The declaration formats wrap the same body in a C or Rust
//! array declaration, so the output can be pasted straight into a source file.
//!
//! ```
//! use logtable::layout::TableLayout;
//! use logtable::render::TableRenderer;
//!
//! let layout = TableLayout::new(8, 4).unwrap();
//! let text = TableRenderer::new(layout).render().unwrap();
//! assert_eq!(text, "\n0, 1, 2, 2,\n3, 3, 3, 3\n");
//! ```

use crate::bucket::bucket_value;
use crate::error::LogTableResult;
use crate::layout::TableLayout;
use std::io::Write;
use tracing::{debug, trace};

/// The shape of the rendered text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TableFormat {
    /// Only the rows, exactly as they appear between the braces of an array literal.
    #[default]
    Raw,
    /// A `static const char` C array declaration.
    C,
    /// A `pub const` Rust array declaration.
    Rust,
}

impl TableFormat {
    /// The declaration name used when none is given. Raw tables have no name.
    pub fn default_name(&self, table_size: usize) -> Option<String> {
        match self {
            TableFormat::Raw => None,
            TableFormat::C => Some(format!("LogTable{}", table_size)),
            TableFormat::Rust => Some(format!("LOG_TABLE_{}", table_size)),
        }
    }

    fn indent(&self) -> &'static str {
        match self {
            TableFormat::Raw => "",
            TableFormat::C => "\t",
            TableFormat::Rust => "    ",
        }
    }
}

/// Renders the [crate::bucket::BucketSequence] of a table laid out according to a [TableLayout].
#[derive(Clone, Debug, Default)]
pub struct TableRenderer {
    layout: TableLayout,
    format: TableFormat,
    name: Option<String>,
}

impl TableRenderer {
    pub fn new(layout: TableLayout) -> Self {
        Self {
            layout,
            format: TableFormat::Raw,
            name: None,
        }
    }

    pub fn with_format(mut self, format: TableFormat) -> Self {
        self.format = format;
        self
    }

    /// Override the declaration name. Ignored by [TableFormat::Raw].
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn layout(&self) -> &TableLayout {
        &self.layout
    }

    pub fn format(&self) -> TableFormat {
        self.format
    }

    /// Write the table to `out`.
    pub fn write_to<W: Write>(&self, out: &mut W) -> LogTableResult<()> {
        let table_size = self.layout.table_size();
        let name = self
            .name
            .clone()
            .or_else(|| self.format.default_name(table_size));

        match (self.format, &name) {
            (TableFormat::C, Some(name)) => {
                write!(out, "static const char {}[{}] = {{", name, table_size)?
            }
            (TableFormat::Rust, Some(name)) => {
                write!(out, "pub const {}: [u8; {}] = [", name, table_size)?
            }
            _ => {}
        }

        self.write_rows(out)?;
        writeln!(out)?;

        match self.format {
            TableFormat::Raw => {}
            TableFormat::C => writeln!(out, "}};")?,
            TableFormat::Rust => writeln!(out, "];")?,
        }
        Ok(())
    }

    /// Render the table into a string.
    pub fn render(&self) -> LogTableResult<String> {
        let mut buf = Vec::new();
        self.write_to(&mut buf)?;
        Ok(String::from_utf8(buf)?)
    }

    fn write_rows<W: Write>(&self, out: &mut W) -> LogTableResult<()> {
        let row_size = self.layout.row_size();
        let num_rows = self.layout.num_rows();
        let indent = self.format.indent();

        debug!(
            table_size = self.layout.table_size(),
            row_size,
            num_rows,
            format = ?self.format,
            "Rendering log table"
        );

        // Streamed cell by cell; nothing table-sized is allocated.
        for row in 0..num_rows {
            trace!(row, "Writing row");
            write!(out, "\n{}", indent)?;
            for col in 0..row_size {
                write!(out, "{}", bucket_value((row * row_size + col) as u64))?;
                if col != row_size - 1 {
                    write!(out, ", ")?;
                } else if row != num_rows - 1 {
                    write!(out, ",")?;
                }
            }
        }
        Ok(())
    }
}

/// Render the table for `layout` in the [TableFormat::Raw] format.
pub fn render_raw(layout: TableLayout) -> LogTableResult<String> {
    TableRenderer::new(layout).render()
}
