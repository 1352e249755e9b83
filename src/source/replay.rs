//! src/source/replay.rs
//!
//! Replay pupil size from a Tobii "All-Data" TSV export.
//!
//! Rows are kept only for the configured media (default `ScreenRec`) and only
//! when both validity columns are filled in. Pupil size is the mean of both
//! eyes when both are valid, the valid eye otherwise; `-1` or an empty cell
//! marks an invalid eye. Samples are paced by `RecordingTimestamp` deltas.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;
use std::sync::mpsc::Sender;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use super::SampleBatch;
use crate::error::{Result, SparkError};

const MEDIA_NAME: &str = "MediaName";
const VALIDITY_LEFT: &str = "ValidityLeft";
const VALIDITY_RIGHT: &str = "ValidityRight";
const PUPIL_LEFT: &str = "PupilLeft";
const PUPIL_RIGHT: &str = "PupilRight";
const TIMESTAMP: &str = "RecordingTimestamp";

#[derive(Clone, Debug)]
pub struct ReplaySettings {
    pub path: PathBuf,

    /// Only rows whose `MediaName` equals this are replayed.
    pub media: String,

    /// Playback speed; 2.0 replays twice as fast as recorded.
    pub speed: f64,

    /// Longest pause between two samples, whatever the recording says.
    pub max_gap: Duration,
}

impl ReplaySettings {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            media: "ScreenRec".to_string(),
            speed: 1.0,
            max_gap: Duration::from_millis(500),
        }
    }
}

/// One replayed reading.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PupilSample {
    /// milliseconds since the start of the recording
    pub timestamp: u64,
    pub pupil: f64,
}

/// Read every usable pupil sample from a TSV export.
pub fn read_pupil_samples<R: BufRead>(reader: R, media: &str) -> Result<Vec<PupilSample>> {
    let mut lines = reader.lines();
    let header = match lines.next() {
        Some(line) => line?,
        None => return Ok(Vec::new()),
    };
    let columns: HashMap<&str, usize> = header
        .trim_end_matches('\r')
        .split('\t')
        .enumerate()
        .map(|(i, name)| (name, i))
        .collect();
    let col = |name: &str| {
        columns
            .get(name)
            .copied()
            .ok_or_else(|| SparkError::Replay(format!("missing column {name}")))
    };
    let media_col = col(MEDIA_NAME)?;
    let vleft_col = col(VALIDITY_LEFT)?;
    let vright_col = col(VALIDITY_RIGHT)?;
    let pleft_col = col(PUPIL_LEFT)?;
    let pright_col = col(PUPIL_RIGHT)?;
    let ts_col = col(TIMESTAMP)?;

    let mut samples = Vec::new();
    for line in lines {
        let line = line?;
        let row: Vec<&str> = line.trim_end_matches('\r').split('\t').collect();
        let cell = |i: usize| row.get(i).map(|s| s.trim()).unwrap_or("");

        if cell(media_col) != media {
            continue;
        }
        if cell(vleft_col).is_empty() || cell(vright_col).is_empty() {
            continue;
        }
        let Some(pupil) = pupil_size(eye(cell(pleft_col)), eye(cell(pright_col))) else {
            continue;
        };
        let Ok(timestamp) = cell(ts_col).parse::<u64>() else {
            tracing::warn!(timestamp = cell(ts_col), "skipping row with bad timestamp");
            continue;
        };
        samples.push(PupilSample { timestamp, pupil });
    }
    Ok(samples)
}

/// A single eye's reading; `-1`, empty, and unparsable cells are invalid.
fn eye(cell: &str) -> Option<f64> {
    // exports may use a decimal comma
    let v = cell.replace(',', ".").parse::<f64>().ok()?;
    (v.is_finite() && v != -1.0).then_some(v)
}

/// Mean of both eyes, or whichever one is valid.
fn pupil_size(left: Option<f64>, right: Option<f64>) -> Option<f64> {
    match (left, right) {
        (Some(l), Some(r)) => Some((l + r) / 2.0),
        (Some(v), None) | (None, Some(v)) => Some(v),
        (None, None) => None,
    }
}

/// Time to wait before sending a sample recorded `delta_ms` after the previous one.
fn pause(delta_ms: u64, settings: &ReplaySettings) -> Duration {
    let speed = if settings.speed > 0.0 { settings.speed } else { 1.0 };
    Duration::from_secs_f64(delta_ms as f64 / 1000.0 / speed).min(settings.max_gap)
}

pub fn spawn(settings: ReplaySettings, tx: Sender<SampleBatch>) -> JoinHandle<()> {
    thread::spawn(move || {
        if let Err(e) = run(&settings, &tx) {
            tracing::error!(path = %settings.path.display(), error = %e, "replay failed");
        }
    })
}

fn run(settings: &ReplaySettings, tx: &Sender<SampleBatch>) -> Result<()> {
    let file = File::open(&settings.path)?;
    let samples = read_pupil_samples(BufReader::new(file), &settings.media)?;
    tracing::info!(
        path = %settings.path.display(),
        count = samples.len(),
        "replaying recording"
    );

    let mut prev_ts = samples.first().map(|s| s.timestamp).unwrap_or(0);
    for s in samples {
        thread::sleep(pause(s.timestamp.saturating_sub(prev_ts), settings));
        prev_ts = s.timestamp;
        if tx.send(vec![s.pupil]).is_err() {
            break;
        }
    }
    tracing::info!("replay finished");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};
    use std::sync::mpsc;

    const EXPORT: &str = "RecordingTimestamp\tMediaName\tValidityLeft\tValidityRight\tPupilLeft\tPupilRight\n\
        0\tScreenRec\t0\t0\t3,00\t3,20\n\
        16\tScreenRec\t0\t4\t3,10\t-1\n\
        33\tScreenRec\t4\t4\t-1\t-1\n\
        50\tIntro.avi\t0\t0\t3,00\t3,00\n\
        66\tScreenRec\t\t0\t3,00\t3,00\n\
        83\tScreenRec\t0\t0\t2.9\t\n";

    #[test]
    fn keeps_valid_screen_rows() {
        let samples = read_pupil_samples(Cursor::new(EXPORT), "ScreenRec").unwrap();
        let got: Vec<(u64, f64)> = samples.iter().map(|s| (s.timestamp, s.pupil)).collect();
        assert_eq!(got.len(), 3);
        assert_eq!(got[0].0, 0);
        assert!((got[0].1 - 3.1).abs() < 1e-9);
        assert_eq!(got[1], (16, 3.1));
        assert_eq!(got[2], (83, 2.9));
    }

    #[test]
    fn media_filter_is_configurable() {
        let samples = read_pupil_samples(Cursor::new(EXPORT), "Intro.avi").unwrap();
        assert_eq!(samples, vec![PupilSample { timestamp: 50, pupil: 3.0 }]);
    }

    #[test]
    fn missing_column_is_reported() {
        let err = read_pupil_samples(Cursor::new("MediaName\tPupilLeft\n"), "ScreenRec").unwrap_err();
        assert!(matches!(err, SparkError::Replay(msg) if msg.contains("ValidityLeft")));
    }

    #[test]
    fn empty_file_has_no_samples() {
        assert!(read_pupil_samples(Cursor::new(""), "ScreenRec").unwrap().is_empty());
    }

    #[test]
    fn pause_scales_and_caps() {
        let mut settings = ReplaySettings::new(PathBuf::from("x.tsv"));
        settings.speed = 2.0;
        assert_eq!(pause(100, &settings), Duration::from_millis(50));
        assert_eq!(pause(10_000, &settings), settings.max_gap);
    }

    #[test]
    fn replays_file_in_order() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(EXPORT.as_bytes()).unwrap();
        let mut settings = ReplaySettings::new(file.path().to_path_buf());
        settings.max_gap = Duration::ZERO;

        let (tx, rx) = mpsc::channel();
        spawn(settings, tx).join().unwrap();
        let values: Vec<f64> = rx.try_iter().flatten().collect();
        assert_eq!(values.len(), 3);
        assert_eq!(values[1..], [3.1, 2.9]);
    }
}
