use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::data::datetime;
use crate::data::loader::RawTable;
use crate::error::FormatError;

/// Fallback label for the key column when the source leaves it blank.
pub const KEY_LABEL: &str = "Drug";

/// The canonical drug-by-date quantity table. Built once from a RawTable
/// and never mutated afterwards; every downstream query is a pure read,
/// so a shared `&InventoryTable` is safe across threads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryTable {
    key_label: String,
    drugs: Vec<String>,
    columns: Vec<NaiveDate>,
    /// Cells aligned to `drugs` x `columns`. `None` is an explicit missing
    /// observation, distinct from a count of zero.
    rows: Vec<Vec<Option<f64>>>,
}

impl InventoryTable {
    /// Build the table from a raw sheet. Column 0 of each data row is the
    /// drug key; the remaining headers are normalized to calendar dates
    /// and unparseable ones are dropped together with their cells.
    pub fn build(raw: &RawTable) -> Result<Self, FormatError> {
        if raw.headers.len() < 2 {
            return Err(FormatError::NoObservations);
        }

        let key_label = {
            let first = raw.headers[0].trim();
            if first.is_empty() {
                KEY_LABEL.to_string()
            } else {
                first.to_string()
            }
        };

        // Positions are relative to the observation cells, key column
        // excluded; only headers that normalized to a date survive.
        let normalized = datetime::normalize_headers(&raw.headers[1..]);
        let mut columns = Vec::new();
        let mut kept: Vec<usize> = Vec::new();
        for (i, date) in normalized.iter().enumerate() {
            if let Some(d) = *date {
                columns.push(d);
                kept.push(i);
            }
        }

        let mut drugs: Vec<String> = Vec::new();
        let mut rows: Vec<Vec<Option<f64>>> = Vec::new();
        for raw_row in &raw.rows {
            let Some(name) = raw_row.first().map(|s| s.trim()).filter(|s| !s.is_empty())
            else {
                continue;
            };

            let cells: Vec<Option<f64>> = kept
                .iter()
                .map(|&i| raw_row.get(i + 1).and_then(|s| parse_quantity(s)))
                .collect();

            // Duplicate keys overwrite in place: last write wins, the first
            // occurrence keeps its position.
            match drugs.iter().position(|d| d == name) {
                Some(at) => rows[at] = cells,
                None => {
                    drugs.push(name.to_string());
                    rows.push(cells);
                }
            }
        }

        tracing::debug!(
            drugs = drugs.len(),
            columns = columns.len(),
            "built inventory table"
        );

        Ok(Self {
            key_label,
            drugs,
            columns,
            rows,
        })
    }

    /// Label of the key column ("Drug" when the source left it blank).
    pub fn key_label(&self) -> &str {
        &self.key_label
    }

    /// Drug names in source order, unique.
    pub fn drugs(&self) -> &[String] {
        &self.drugs
    }

    /// Observation dates in source column order. Not necessarily sorted or
    /// evenly spaced, and duplicates are legal.
    pub fn columns(&self) -> &[NaiveDate] {
        &self.columns
    }

    /// The full history for one drug, aligned to `columns`.
    pub fn row(&self, drug: &str) -> Option<&[Option<f64>]> {
        let at = self.drugs.iter().position(|d| d == drug)?;
        Some(&self.rows[at])
    }

    pub fn is_empty(&self) -> bool {
        self.drugs.is_empty() || self.columns.is_empty()
    }
}

/// Parse a cell as a quantity. Blank and non-numeric cells are missing,
/// not zero.
fn parse_quantity(cell: &str) -> Option<f64> {
    let trimmed = cell.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}
