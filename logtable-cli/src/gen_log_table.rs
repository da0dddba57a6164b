// Copyright (c) 2022, Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

use clap::{ArgAction, Parser, ValueEnum};
use logtable::error::LogTableResult;
use logtable::layout::{TableLayout, DEFAULT_ROW_SIZE, DEFAULT_TABLE_SIZE};
use logtable::render::{TableFormat, TableRenderer};
use std::io::{BufWriter, Write};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "gen-log-table")]
#[command(about = "Print a lookup table of floor(log2(i) + 1) for every index i, formatted as source code", long_about = None)]
struct Arguments {
    /// Number of entries in the table (default is 512).
    #[clap(short = 's', long)]
    table_size: Option<usize>,

    /// Number of entries printed per row (default is 16). Must evenly divide the table size.
    #[clap(short, long)]
    row_size: Option<usize>,

    /// Output format.
    #[clap(short, long, value_enum, default_value_t = Format::Raw)]
    format: Format,

    /// Name of the declared array. Only used by the c and rust formats.
    #[clap(short, long)]
    name: Option<String>,

    /// Log more to stderr. Repeat for more detail. RUST_LOG takes precedence.
    #[clap(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Only the comma separated rows.
    Raw,
    /// A C `static const char` array.
    C,
    /// A Rust `pub const` array.
    Rust,
}

impl From<Format> for TableFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Raw => TableFormat::Raw,
            Format::C => TableFormat::C,
            Format::Rust => TableFormat::Rust,
        }
    }
}

fn main() {
    let args = Arguments::parse();
    init_logging(args.verbose);

    let result = {
        let stdout = std::io::stdout();
        let mut out = BufWriter::new(stdout.lock());
        execute(args, &mut out)
    };
    match result {
        Ok(_) => {
            std::process::exit(exitcode::OK);
        }
        Err(e) => {
            // Stdout may be the stream that just failed.
            eprintln!("Error: {}", e);
            std::process::exit(exitcode::DATAERR);
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    // Stdout only carries the table.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)),
        )
        .init();
}

fn execute<W: Write>(args: Arguments, out: &mut W) -> LogTableResult<()> {
    let layout = match (args.table_size, args.row_size) {
        (None, None) => TableLayout::default(),
        (table_size, row_size) => TableLayout::new(
            table_size.unwrap_or(DEFAULT_TABLE_SIZE),
            row_size.unwrap_or(DEFAULT_ROW_SIZE),
        )?,
    };

    let mut renderer = TableRenderer::new(layout).with_format(args.format.into());
    if let Some(name) = args.name {
        renderer = renderer.with_name(name);
    }

    renderer.write_to(out)?;
    out.flush()?;
    info!(
        entries = layout.table_size(),
        rows = layout.num_rows(),
        "Wrote log table"
    );
    Ok(())
}

#[cfg(test)]
mod tests {

    use crate::{execute, Arguments};
    use clap::Parser;
    use logtable::error::LogTableError;
    use regex::Regex;

    fn run(args: &[&str]) -> Result<String, LogTableError> {
        let args =
            Arguments::parse_from(std::iter::once("gen-log-table").chain(args.iter().copied()));
        let mut out = Vec::new();
        execute(args, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_default() {
        let output = run(&[]).unwrap();
        assert!(output.starts_with("\n0, 1, 2, 2, 3, 3, 3, 3, 4, 4, 4, 4, 4, 4, 4, 4,\n5, "));
        assert!(output.ends_with(", 9, 9\n"));
        assert_eq!(output.lines().count(), 33);
        assert_eq!(output.matches(',').count(), 511);
    }

    #[test]
    fn test_custom_layout() {
        let output = run(&["--table-size", "8", "--row-size", "4"]).unwrap();
        assert_eq!(output, "\n0, 1, 2, 2,\n3, 3, 3, 3\n");

        // Only the row size given; the table size stays at its default.
        let output = run(&["-r", "32"]).unwrap();
        assert_eq!(output.lines().count(), 17);
    }

    #[test]
    fn test_declarations() {
        let output = run(&["-f", "c"]).unwrap();
        let pattern =
            Regex::new(r"^static const char LogTable512\[512\] = \{\n(\t[0-9, ]+,?\n){32}\};\n$")
                .unwrap();
        assert!(pattern.is_match(&output));

        let output = run(&["-s", "4", "-r", "4", "-f", "rust", "-n", "BITS"]).unwrap();
        assert_eq!(output, "pub const BITS: [u8; 4] = [\n    0, 1, 2, 2\n];\n");
    }

    #[test]
    fn test_invalid_layout() {
        assert!(matches!(
            run(&["--table-size", "100"]),
            Err(LogTableError::UnevenRows {
                table_size: 100,
                row_size: 16
            })
        ));
        assert!(matches!(
            run(&["--row-size", "0"]),
            Err(LogTableError::ZeroRowSize)
        ));
        assert!(matches!(
            run(&["--table-size", "0"]),
            Err(LogTableError::ZeroTableSize)
        ));
    }
}
