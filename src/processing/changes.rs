use serde::{Deserialize, Serialize};

/// Qualitative direction of the mean period-over-period change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Trend {
    Increasing,
    Decreasing,
    Stable,
}

impl Trend {
    /// Three-way sign test with exact zero as the boundary. No epsilon:
    /// only a mean of exactly 0.0 classifies as Stable.
    fn from_mean(mean: f64) -> Self {
        if mean > 0.0 {
            Trend::Increasing
        } else if mean < 0.0 {
            Trend::Decreasing
        } else {
            Trend::Stable
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Trend::Increasing => "increasing",
            Trend::Decreasing => "decreasing",
            Trend::Stable => "stable",
        }
    }
}

/// Aggregates over the defined entries of a change series.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangeStats {
    pub mean: f64,
    /// Largest single-period change: the biggest increase, or the least
    /// negative change when every period shrank.
    pub max_change: f64,
    /// Smallest single-period change: the biggest decrease.
    pub min_change: f64,
    pub trend: Trend,
}

impl ChangeStats {
    /// The biggest single-period decrease as a display magnitude.
    pub fn max_decrease(&self) -> f64 {
        -self.min_change
    }
}

/// First-difference analysis of one drug's history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangeReport {
    /// `changes[i] = row[i + 1] - row[i]`; `None` where either endpoint is
    /// missing. Length is one less than the row, zero for empty rows.
    pub changes: Vec<Option<f64>>,
    /// `None` flags insufficient data: no two consecutive present
    /// observations, so no change is defined.
    pub stats: Option<ChangeStats>,
}

impl ChangeReport {
    pub fn is_insufficient(&self) -> bool {
        self.stats.is_none()
    }

    /// Render the report as the narrative panel's prose.
    pub fn narrative(&self, drug: &str) -> String {
        let Some(stats) = &self.stats else {
            return "Not enough data to analyze the change.".to_string();
        };

        let trend_line = match stats.trend {
            Trend::Increasing => {
                "Overall, there has been an increasing trend in the quantity of vials."
            }
            Trend::Decreasing => {
                "Overall, there has been a decreasing trend in the quantity of vials."
            }
            Trend::Stable => {
                "The quantity of vials has remained relatively stable with no significant overall trend."
            }
        };

        format!(
            "Over the period, the quantity of {drug} vials has fluctuated.\n\
             The average daily change in quantity is {:.2} vials.\n\
             The maximum increase observed in a day was {:.2} vials, \
             while the maximum decrease was {:.2} vials.\n{trend_line}",
            stats.mean,
            stats.max_change,
            stats.max_decrease(),
        )
    }
}

/// Compute the day-over-day change series for a row and its aggregates.
/// Missing endpoints propagate to missing changes and are excluded from
/// the aggregates rather than treated as zero.
pub fn analyze_changes(row: &[Option<f64>]) -> ChangeReport {
    let changes: Vec<Option<f64>> = row
        .windows(2)
        .map(|pair| match (pair[0], pair[1]) {
            (Some(a), Some(b)) => Some(b - a),
            _ => None,
        })
        .collect();

    let defined: Vec<f64> = changes.iter().copied().flatten().collect();
    let stats = if defined.is_empty() {
        None
    } else {
        let mean = defined.iter().sum::<f64>() / defined.len() as f64;
        let max_change = defined.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let min_change = defined.iter().copied().fold(f64::INFINITY, f64::min);
        Some(ChangeStats {
            mean,
            max_change,
            min_change,
            trend: Trend::from_mean(mean),
        })
    };

    ChangeReport { changes, stats }
}
