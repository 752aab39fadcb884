use std::sync::mpsc::{Receiver, TryRecvError};

use signal::{Signal, SignalError};

use crate::{Chart, ChartError};

/// One telemetry value routed to a series of a chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub series: usize,
    pub value: f64,
}

/// Applies samples emitted by a collaborator signal to a chart.
///
/// The feed schedules nothing itself: a timer or data-arrival source
/// emits, and whoever owns the event loop calls `drain` on its own tick.
pub struct ChartFeed {
    receiver: Receiver<Sample>,
}

impl ChartFeed {
    pub fn attach(source: &mut Signal<Sample>) -> Self {
        Self {
            receiver: source.connect_channel(),
        }
    }

    pub fn try_next(&self) -> Result<Option<Sample>, SignalError> {
        match self.receiver.try_recv() {
            Ok(sample) => Ok(Some(sample)),
            Err(TryRecvError::Empty) => Ok(None),
            Err(TryRecvError::Disconnected) => Err(SignalError::Disconnected),
        }
    }

    /// Applies every pending sample in emission order and returns how many
    /// were applied. Pending samples are applied even when the source has
    /// since disconnected; the disconnect itself is then reported.
    pub fn drain(&self, chart: &mut Chart) -> Result<usize, ChartError> {
        let mut applied = 0;
        while let Some(sample) = self.try_next()? {
            chart.append(sample.series, sample.value)?;
            applied += 1;
        }
        Ok(applied)
    }
}
