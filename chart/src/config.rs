use serde::{Deserialize, Serialize};

/// Construction parameters for a [`Chart`](crate::Chart).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Maximum points retained per series; oldest points are evicted first.
    pub capacity: usize,
    /// Number of series, fixed for the lifetime of the chart.
    pub num_series: usize,
    /// Appends between batched axis rescales. 0 means "use the capacity".
    pub rescale_batch: usize,
    /// Proportional padding added beyond the tight value bounds.
    pub margin_fraction: f64,
    /// Low end of the seed range the axis watermarks start from.
    pub seed_low: f64,
    /// High end of the seed range the axis watermarks start from.
    pub seed_high: f64,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            capacity: 200,
            num_series: 1,
            rescale_batch: 0,
            margin_fraction: 0.1,
            seed_low: 0.0,
            seed_high: 0.0,
        }
    }
}
