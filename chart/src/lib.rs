pub mod axis;
pub mod config;
pub mod feed;
pub mod series;

pub use axis::AxisTracker;
pub use config::ChartConfig;
pub use feed::{ChartFeed, Sample};
pub use series::{AppendOutcome, SeriesBuffer};

use signal::SignalError;

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ChartError {
    #[error("series index {index} out of range for {count} series")]
    InvalidIndex { index: usize, count: usize },
    #[error("x/y lengths do not match ({xs} vs {ys})")]
    LengthMismatch { xs: usize, ys: usize },
    #[error("sample feed failed: {0}")]
    Feed(#[from] SignalError),
}

/// What a successful append left behind: the series fill level and the
/// axis range after this sample was accounted for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Appended {
    pub held: usize,
    pub evicted: bool,
    pub range: (f64, f64),
}

/// A realtime chart model: a fixed set of bounded series buffers sharing
/// one y-axis range.
///
/// The chart never draws; it maintains the (x, y) sequences and the
/// (min, max) bounds a renderer reads back. Appends apply strictly in call
/// order. The axis widens immediately when a value escapes it, but tight
/// bounds are only recomputed every `rescale_batch` appends, so the axis
/// visibly steps as old points fall out of the buffers.
pub struct Chart {
    series: Vec<SeriesBuffer>,
    axis: AxisTracker,
    capacity: usize,
    rescale_batch: usize,
    counter: usize,
}

impl Chart {
    pub fn new(config: &ChartConfig) -> Self {
        let capacity = config.capacity.max(1);
        let rescale_batch = if config.rescale_batch > 0 {
            config.rescale_batch
        } else {
            capacity
        };
        Self {
            series: (0..config.num_series)
                .map(|_| SeriesBuffer::new(capacity))
                .collect(),
            axis: AxisTracker::new(config.seed_low, config.seed_high, config.margin_fraction),
            capacity,
            rescale_batch,
            counter: 0,
        }
    }

    /// Appends one value to the indexed series and accounts for it on the
    /// shared axis. Every `rescale_batch` appends the axis is rebounded
    /// from the values still buffered across all series.
    pub fn append(&mut self, index: usize, value: f64) -> Result<Appended, ChartError> {
        let count = self.series.len();
        let buffer = self
            .series
            .get_mut(index)
            .ok_or(ChartError::InvalidIndex { index, count })?;
        let outcome = buffer.append(value);
        let mut range = self.axis.account_for(value);

        self.counter += 1;
        if self.counter >= self.rescale_batch {
            self.counter = 0;
            let values: Vec<f64> = self
                .series
                .iter()
                .flat_map(|buffer| buffer.values())
                .collect();
            if let Some(rebounded) = self.axis.rebound(values) {
                range = rebounded;
                log::debug!("axis rebounded to [{}, {}]", range.0, range.1);
            }
        }

        Ok(Appended {
            held: outcome.held,
            evicted: outcome.evicted,
            range,
        })
    }

    /// Replaces the whole indexed series with caller-supplied points.
    /// Validates only the x/y length match; the axis and the rescale
    /// counter are left alone.
    pub fn update_data(&mut self, index: usize, xs: &[f64], ys: &[f64]) -> Result<(), ChartError> {
        let count = self.series.len();
        let buffer = self
            .series
            .get_mut(index)
            .ok_or(ChartError::InvalidIndex { index, count })?;
        buffer.replace(xs, ys)
    }

    pub fn series(&self, index: usize) -> Option<&SeriesBuffer> {
        self.series.get(index)
    }

    pub fn num_series(&self) -> usize {
        self.series.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn axis_range(&self) -> Option<(f64, f64)> {
        self.axis.range()
    }

    /// Appends since the last batched rescale; resets to 0 each time the
    /// batch size is reached.
    pub fn rescale_counter(&self) -> usize {
        self.counter
    }
}
