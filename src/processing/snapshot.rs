use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::data::table::InventoryTable;

/// Which column ordinal the "current count" view reads.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SnapshotConfig {
    /// 0-based position of the snapshot column. Source convention: column
    /// 0 is a baseline entry, column 1 the most recent completed period.
    pub snapshot_offset: usize,
}

impl Default for SnapshotConfig {
    fn default() -> Self {
        Self { snapshot_offset: 1 }
    }
}

/// One observation date's counts for every drug, in table row order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnSnapshot {
    pub date: NaiveDate,
    pub counts: Vec<(String, Option<f64>)>,
}

/// Extract the column at `position`. `None` means the table has no such
/// column; callers show a "no data" placeholder rather than fail.
pub fn select_column(table: &InventoryTable, position: usize) -> Option<ColumnSnapshot> {
    let date = *table.columns().get(position)?;
    let counts = table
        .drugs()
        .iter()
        .map(|drug| {
            let qty = table
                .row(drug)
                .and_then(|row| row.get(position).copied().flatten());
            (drug.clone(), qty)
        })
        .collect();

    Some(ColumnSnapshot { date, counts })
}

/// The configured "current count" snapshot.
pub fn current_count(table: &InventoryTable, config: &SnapshotConfig) -> Option<ColumnSnapshot> {
    select_column(table, config.snapshot_offset)
}
