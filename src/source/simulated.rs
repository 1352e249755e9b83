//! src/source/simulated.rs
//!
//! Bounded random walk standing in for a live pupil-size feed.

use std::sync::mpsc::Sender;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use rand::Rng;

use super::SampleBatch;

#[derive(Clone, Debug)]
pub struct SimulatedSettings {
    /// Range the walk stays inside.
    pub range: (f64, f64),

    /// Largest step between samples, as a fraction of the range.
    pub step_frac: f64,

    pub interval: Duration,

    /// Stop after this many samples; `None` runs until the receiver hangs up.
    pub limit: Option<usize>,
}

impl SimulatedSettings {
    pub fn new(range: (f64, f64), interval: Duration) -> Self {
        Self {
            range,
            interval,
            ..Self::default()
        }
    }
}

impl Default for SimulatedSettings {
    fn default() -> Self {
        Self {
            range: (2.0, 5.0),
            step_frac: 0.08,
            interval: Duration::from_millis(100),
            limit: None,
        }
    }
}

/// Next value of the walk: a uniform step from `prev`, reflected back into range.
pub fn next_sample<R: Rng>(rng: &mut R, prev: f64, settings: &SimulatedSettings) -> f64 {
    let (lo, hi) = ordered(settings.range);
    let span = hi - lo;
    if span <= 0.0 {
        return lo;
    }
    let step = span * settings.step_frac.clamp(0.0, 1.0);
    let mut next = prev + rng.random_range(-step..=step);
    if next > hi {
        next = hi - (next - hi);
    }
    if next < lo {
        next = lo + (lo - next);
    }
    next.clamp(lo, hi)
}

pub fn spawn(settings: SimulatedSettings, tx: Sender<SampleBatch>) -> JoinHandle<()> {
    thread::spawn(move || {
        let mut rng = rand::rng();
        let (lo, hi) = ordered(settings.range);
        let mut value = (lo + hi) / 2.0;
        let mut sent = 0usize;
        while settings.limit.is_none_or(|limit| sent < limit) {
            value = next_sample(&mut rng, value, &settings);
            if tx.send(vec![value]).is_err() {
                break;
            }
            sent += 1;
            thread::sleep(settings.interval);
        }
        tracing::info!(sent, "simulated source exiting");
    })
}

fn ordered((a, b): (f64, f64)) -> (f64, f64) {
    if a <= b { (a, b) } else { (b, a) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::sync::mpsc;

    #[test]
    fn walk_stays_in_range() {
        let settings = SimulatedSettings {
            step_frac: 0.5,
            ..SimulatedSettings::default()
        };
        let mut rng = StdRng::seed_from_u64(7);
        let mut v = 3.5;
        for _ in 0..10_000 {
            v = next_sample(&mut rng, v, &settings);
            assert!((2.0..=5.0).contains(&v), "walk escaped to {v}");
        }
    }

    #[test]
    fn degenerate_range_is_constant() {
        let settings = SimulatedSettings::new((1.0, 1.0), Duration::ZERO);
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(next_sample(&mut rng, 4.0, &settings), 1.0);
    }

    #[test]
    fn limited_source_sends_exactly_limit() {
        let settings = SimulatedSettings {
            interval: Duration::ZERO,
            limit: Some(25),
            ..SimulatedSettings::default()
        };
        let (tx, rx) = mpsc::channel();
        spawn(settings, tx).join().unwrap();
        let batches: Vec<SampleBatch> = rx.try_iter().collect();
        assert_eq!(batches.len(), 25);
        assert!(batches.iter().all(|b| b.len() == 1));
    }
}
