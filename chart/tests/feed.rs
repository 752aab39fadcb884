use chart::{Chart, ChartConfig, ChartError, ChartFeed, Sample};
use signal::{Signal, SignalError};

fn chart(num_series: usize) -> Chart {
    Chart::new(&ChartConfig {
        capacity: 10,
        num_series,
        ..ChartConfig::default()
    })
}

#[test]
fn drain_applies_samples_in_emission_order() {
    let mut source = Signal::new();
    let feed = ChartFeed::attach(&mut source);
    let mut chart = chart(2);

    source.emit(Sample {
        series: 0,
        value: -20.0,
    });
    source.emit(Sample {
        series: 1,
        value: 20.0,
    });

    assert_eq!(feed.drain(&mut chart).expect("drain"), 2);
    assert_eq!(chart.axis_range(), Some((-24.0, 24.0)));
    assert_eq!(feed.drain(&mut chart).expect("drain"), 0);
}

#[test]
fn drain_reports_a_disconnected_source_after_applying_pending() {
    let mut chart = chart(1);
    let feed = {
        let mut source = Signal::new();
        let feed = ChartFeed::attach(&mut source);
        source.emit(Sample {
            series: 0,
            value: 1.0,
        });
        feed
    };

    assert_eq!(
        feed.drain(&mut chart),
        Err(ChartError::Feed(SignalError::Disconnected))
    );
    assert_eq!(chart.series(0).map(|s| s.len()), Some(1));
}

#[test]
fn drain_surfaces_an_invalid_series_from_a_sample() {
    let mut source = Signal::new();
    let feed = ChartFeed::attach(&mut source);
    let mut chart = chart(1);

    source.emit(Sample {
        series: 3,
        value: 0.5,
    });

    assert_eq!(
        feed.drain(&mut chart),
        Err(ChartError::InvalidIndex { index: 3, count: 1 })
    );
}

#[test]
fn several_feeds_can_watch_one_source() {
    let mut source = Signal::new();
    let feed_a = ChartFeed::attach(&mut source);
    let feed_b = ChartFeed::attach(&mut source);
    let mut chart_a = chart(1);
    let mut chart_b = chart(1);

    source.emit(Sample {
        series: 0,
        value: 2.0,
    });

    assert_eq!(feed_a.drain(&mut chart_a).expect("drain"), 1);
    assert_eq!(feed_b.drain(&mut chart_b).expect("drain"), 1);
}
