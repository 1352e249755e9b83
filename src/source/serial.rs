//! src/source/serial.rs
//!
//! Serial port reader: one batch per non-empty line received from the device
//! (e.g. an eye tracker bridge on /dev/ttyACM0).

use std::io::{BufRead, BufReader};
use std::sync::mpsc::Sender;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use super::{SampleBatch, parse_sample_line};
use crate::error::Result;

#[derive(Clone, Debug)]
pub struct SerialSettings {
    pub port: String,
    pub baud_rate: u32,
    pub timeout: Duration,
}

impl Default for SerialSettings {
    fn default() -> Self {
        Self {
            port: "/dev/ttyACM0".to_string(),
            baud_rate: 115_200,
            timeout: Duration::from_secs(10),
        }
    }
}

/// Spawn a thread that opens the port and forwards parsed lines.
pub fn spawn(settings: SerialSettings, tx: Sender<SampleBatch>) -> JoinHandle<()> {
    thread::spawn(move || {
        if let Err(e) = run(&settings, &tx) {
            tracing::error!(port = %settings.port, error = %e, "serial reader failed");
        }
        tracing::info!(port = %settings.port, "serial reader exiting");
    })
}

fn run(settings: &SerialSettings, tx: &Sender<SampleBatch>) -> Result<()> {
    let port = serialport::new(&settings.port, settings.baud_rate)
        .timeout(settings.timeout)
        .open()?;
    tracing::info!(port = %settings.port, baud = settings.baud_rate, "serial reader started");
    forward_lines(BufReader::new(port), tx)
}

/// Forward each line of `reader` as a batch until EOF or the receiver hangs up.
pub(crate) fn forward_lines<R: BufRead>(reader: R, tx: &Sender<SampleBatch>) -> Result<()> {
    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let batch = parse_sample_line(trimmed);
        if batch.is_empty() {
            tracing::warn!(line = trimmed, "no samples in line");
            continue;
        }
        tracing::debug!(count = batch.len(), "serial batch");
        if tx.send(batch).is_err() {
            // UI is gone
            break;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use std::sync::mpsc;

    #[test]
    fn forwards_one_batch_per_numeric_line() {
        let (tx, rx) = mpsc::channel();
        let input = "3.1\n\n   \nhello\n3.2 3.3\n";
        forward_lines(Cursor::new(input), &tx).unwrap();
        drop(tx);
        let batches: Vec<SampleBatch> = rx.iter().collect();
        assert_eq!(batches, vec![vec![3.1], vec![3.2, 3.3]]);
    }

    #[test]
    fn stops_when_receiver_is_dropped() {
        let (tx, rx) = mpsc::channel();
        drop(rx);
        assert!(forward_lines(Cursor::new("1\n2\n"), &tx).is_ok());
    }
}
