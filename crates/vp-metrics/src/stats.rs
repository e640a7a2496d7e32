//! Time-weighted statistics over a step-function series.
//!
//! A sample `(t_i, v_i)` holds until `t_{i+1}`.  The first
//! [`WARM_UP_HOURS`] after the series' first key are dropped to avoid
//! start-up bias: the window starts at the first key more than
//! `WARM_UP_HOURS` past the first key.  When no key lies past the warm-up
//! the whole series is used.
//!
//! ```text
//! mean     = Σ v_i · (t_{i+1} − t_i)            / (t_last − t_start)
//! variance = Σ (v_i − mean)² · (t_{i+1} − t_i)  / (t_last − t_start)
//! ```
//!
//! Windows with fewer than two samples, or zero span, report 0.

use crate::MetricsSeries;

/// Length of the discarded warm-up period, in hours.
pub const WARM_UP_HOURS: f64 = 5.0;

/// Time-weighted mean of the post-warm-up window.
pub fn time_average(series: &MetricsSeries) -> f64 {
    let points = collect(series);
    match window(&points) {
        Some((samples, span)) => weighted_mean(samples, span),
        None => 0.0,
    }
}

/// Time-weighted variance about [`time_average`] over the same window.
pub fn time_variance(series: &MetricsSeries) -> f64 {
    let points = collect(series);
    let Some((samples, span)) = window(&points) else {
        return 0.0;
    };
    let mean = weighted_mean(samples, span);
    let total: f64 = samples
        .windows(2)
        .map(|pair| {
            let (t0, v0) = pair[0];
            let (t1, _) = pair[1];
            (v0 - mean).powi(2) * (t1 - t0)
        })
        .sum();
    total / span
}

fn collect(series: &MetricsSeries) -> Vec<(f64, f64)> {
    series.iter().map(|(t, v)| (t.hours(), v as f64)).collect()
}

/// The post-warm-up samples and their span, if there is anything to average.
fn window(points: &[(f64, f64)]) -> Option<(&[(f64, f64)], f64)> {
    let &(first, _) = points.first()?;
    let start = points
        .iter()
        .position(|&(t, _)| t - first > WARM_UP_HOURS)
        .unwrap_or(0);
    let samples = &points[start..];
    if samples.len() < 2 {
        return None;
    }
    let span = samples[samples.len() - 1].0 - samples[0].0;
    (span > 0.0).then_some((samples, span))
}

fn weighted_mean(samples: &[(f64, f64)], span: f64) -> f64 {
    let total: f64 = samples
        .windows(2)
        .map(|pair| pair[0].1 * (pair[1].0 - pair[0].0))
        .sum();
    total / span
}
