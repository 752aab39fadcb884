/// Tracks the shared y-axis display range of a chart.
///
/// Low/high watermarks absorb every observed value, but the published
/// range only moves when a value lands strictly outside it (immediate
/// expansion) or when `rebound` recomputes tight bounds from the data
/// that survived eviction (batched rescale). The axis therefore steps
/// instead of breathing on every sample.
pub struct AxisTracker {
    margin_fraction: f64,
    low: f64,
    high: f64,
    range: Option<(f64, f64)>,
}

impl AxisTracker {
    pub fn new(seed_low: f64, seed_high: f64, margin_fraction: f64) -> Self {
        let (low, high) = if seed_low <= seed_high {
            (seed_low, seed_high)
        } else {
            (seed_high, seed_low)
        };
        Self {
            margin_fraction: margin_fraction.max(0.0),
            low,
            high,
            range: None,
        }
    }

    /// Accounts for one new value and returns the current range. The
    /// first call ever defines the range; later calls widen it only when
    /// the value escapes the published bounds.
    pub fn account_for(&mut self, value: f64) -> (f64, f64) {
        self.low = self.low.min(value);
        self.high = self.high.max(value);
        let range = match self.range {
            Some((min, max)) if value >= min && value <= max => (min, max),
            _ => self.padded(),
        };
        self.range = Some(range);
        range
    }

    /// Recomputes the range from the supplied values alone. This is the
    /// only path that can contract the range. With no values the range is
    /// left untouched.
    pub fn rebound<I>(&mut self, values: I) -> Option<(f64, f64)>
    where
        I: IntoIterator<Item = f64>,
    {
        let mut low = f64::INFINITY;
        let mut high = f64::NEG_INFINITY;
        for value in values {
            low = low.min(value);
            high = high.max(value);
        }
        if low > high {
            return self.range;
        }
        self.low = low;
        self.high = high;
        self.range = Some(self.padded());
        self.range
    }

    pub fn range(&self) -> Option<(f64, f64)> {
        self.range
    }

    fn padded(&self) -> (f64, f64) {
        let margin = self.margin_fraction * (self.high - self.low);
        (self.low - margin, self.high + margin)
    }
}

#[cfg(test)]
mod tests {
    use super::AxisTracker;

    #[test]
    fn first_value_defines_the_range_around_the_seed() {
        let mut axis = AxisTracker::new(0.0, 0.0, 0.1);
        assert_eq!(axis.range(), None);
        assert_eq!(axis.account_for(-20.0), (-22.0, 2.0));
    }

    #[test]
    fn values_inside_the_range_leave_it_unchanged() {
        let mut axis = AxisTracker::new(0.0, 0.0, 0.1);
        axis.account_for(-20.0);
        assert_eq!(axis.account_for(-5.0), (-22.0, 2.0));
    }

    #[test]
    fn escaping_values_widen_proportionally_to_the_span() {
        let mut axis = AxisTracker::new(0.0, 0.0, 0.1);
        axis.account_for(-20.0);
        assert_eq!(axis.account_for(20.0), (-24.0, 24.0));
    }

    #[test]
    fn range_is_always_ordered() {
        let mut axis = AxisTracker::new(0.0, 0.0, 0.1);
        for value in [0.0, -3.5, 7.25, 7.25, -100.0, 42.0] {
            let (min, max) = axis.account_for(value);
            assert!(min <= max);
        }
    }

    #[test]
    fn rebound_contracts_to_the_surviving_data() {
        let mut axis = AxisTracker::new(0.0, 0.0, 0.1);
        axis.account_for(-20.0);
        axis.account_for(20.0);
        assert_eq!(axis.rebound(vec![20.0, 24.0]), Some((19.6, 24.4)));
    }

    #[test]
    fn rebound_without_data_keeps_the_range() {
        let mut axis = AxisTracker::new(0.0, 0.0, 0.1);
        axis.account_for(1.0);
        let before = axis.range();
        assert_eq!(axis.rebound(Vec::new()), before);
    }

    #[test]
    fn swapped_seed_bounds_are_reordered() {
        let mut axis = AxisTracker::new(5.0, -5.0, 0.0);
        assert_eq!(axis.account_for(0.0), (-5.0, 5.0));
    }
}
