//! Chemo med inventory analysis: load a periodic stock spreadsheet,
//! normalize its date columns into an immutable drug-by-date table, and
//! answer snapshot, statistics, and change-trend queries against it.
//!
//! Rendering (tables, charts, selection widgets) is the caller's job; this
//! crate only computes the values those views display.

mod error;

pub mod data;
pub mod processing;

pub use error::FormatError;

pub use data::loader::{load_file, LoadConfig, RawTable};
pub use data::table::InventoryTable;
pub use processing::changes::{analyze_changes, ChangeReport, ChangeStats, Trend};
pub use processing::snapshot::{current_count, select_column, ColumnSnapshot, SnapshotConfig};
pub use processing::statistics::RowStats;
