use std::collections::VecDeque;

use crate::ChartError;

/// Outcome of a single append: how many points the buffer now holds and
/// whether the oldest point was dropped to stay within capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppendOutcome {
    pub held: usize,
    pub evicted: bool,
}

/// One line of time-ordered (x, y) samples with a fixed point capacity.
///
/// x is a permanent insertion counter: it keeps increasing across
/// evictions, so the n-th appended point always carries x = n - 1 no
/// matter how many older points have been dropped.
pub struct SeriesBuffer {
    points: VecDeque<(f64, f64)>,
    capacity: usize,
    appended: u64,
}

impl SeriesBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            points: VecDeque::new(),
            capacity: capacity.max(1),
            appended: 0,
        }
    }

    pub fn append(&mut self, value: f64) -> AppendOutcome {
        let x = self.appended as f64;
        self.appended += 1;
        self.points.push_back((x, value));
        let mut evicted = false;
        while self.points.len() > self.capacity {
            self.points.pop_front();
            evicted = true;
        }
        AppendOutcome {
            held: self.points.len(),
            evicted,
        }
    }

    /// Replaces the whole series with caller-supplied points. Only the
    /// length match between `xs` and `ys` is validated; capacity is not
    /// enforced here, matching the single-append/bulk-replace asymmetry
    /// of the modeled system.
    pub fn replace(&mut self, xs: &[f64], ys: &[f64]) -> Result<(), ChartError> {
        if xs.len() != ys.len() {
            return Err(ChartError::LengthMismatch {
                xs: xs.len(),
                ys: ys.len(),
            });
        }
        if xs.len() > self.capacity {
            log::warn!(
                "series replaced with {} points, capacity is {}",
                xs.len(),
                self.capacity
            );
        }
        self.points = xs.iter().copied().zip(ys.iter().copied()).collect();
        self.appended = xs.len() as u64;
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn back(&self) -> Option<(f64, f64)> {
        self.points.back().copied()
    }

    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.points.iter().copied()
    }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|&(_, y)| y)
    }
}
