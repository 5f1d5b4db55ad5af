use serde::{Deserialize, Serialize};

/// Summary statistics for one drug's full history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RowStats {
    pub count: usize,
    /// Rounded to 2 decimal digits for display; `max`/`min` stay exact.
    pub mean: f64,
    pub max: f64,
    pub min: f64,
}

impl RowStats {
    /// Compute statistics over the present values of a row. Returns `None`
    /// for an empty or all-missing row; statistics over nothing are
    /// undefined, not zero.
    pub fn compute(row: &[Option<f64>]) -> Option<Self> {
        let vals: Vec<f64> = row
            .iter()
            .copied()
            .flatten()
            .filter(|v| v.is_finite())
            .collect();
        if vals.is_empty() {
            return None;
        }

        let count = vals.len();
        let min = vals.iter().copied().fold(f64::INFINITY, f64::min);
        let max = vals.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let mean = round2(vals.iter().sum::<f64>() / count as f64);

        Some(RowStats {
            count,
            mean,
            max,
            min,
        })
    }

    /// Format as the statistics panel's lines.
    pub fn report(&self) -> String {
        format!(
            "Mean quantity: {}\nMax quantity: {}\nMin quantity: {}",
            self.mean, self.max, self.min
        )
    }
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
