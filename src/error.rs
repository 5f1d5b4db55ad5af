use std::path::PathBuf;

use thiserror::Error;

/// Structural failure of the input source. Fatal to the load step: no
/// partial table is ever returned. Recoverable conditions (unparseable
/// date headers, empty selections, insufficient change data) are encoded
/// in return values instead.
#[derive(Debug, Error)]
pub enum FormatError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unsupported file format: .{0}")]
    UnsupportedFormat(String),

    #[error("cannot open workbook: {0}")]
    Workbook(String),

    #[error("header row {header_row} not present: source has only {row_count} rows")]
    MissingHeaderRow { header_row: usize, row_count: usize },

    #[error("no observation columns after the key column")]
    NoObservations,
}
