//! src/source.rs
//!
//! Sample feeds. Each source runs on its own thread and sends batches of
//! samples over a channel; the UI thread is the only one touching the widget.

pub mod replay;
pub mod serial;
pub mod simulated;
pub mod tcp;

use std::sync::mpsc::Sender;
use std::thread::JoinHandle;

use clap::ValueEnum;

pub use replay::ReplaySettings;
pub use serial::SerialSettings;
pub use simulated::SimulatedSettings;
pub use tcp::TcpSettings;

/// One batch of samples, appended with a single `add_data` call.
pub type SampleBatch = Vec<f64>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum SourceKind {
    /// bounded random walk
    Simulated,
    /// one batch per line read from a serial port
    Serial,
    /// line-based TCP feed
    Tcp,
    /// Tobii All-Data TSV recording
    Replay,
}

/// Settings for whichever source gets started.
#[derive(Clone, Debug)]
pub enum SourceSettings {
    Simulated(SimulatedSettings),
    Serial(SerialSettings),
    Tcp(TcpSettings),
    Replay(ReplaySettings),
}

impl SourceSettings {
    /// Short human-readable description for titles and logs.
    pub fn describe(&self) -> String {
        match self {
            SourceSettings::Simulated(s) => format!("simulated every {}ms", s.interval.as_millis()),
            SourceSettings::Serial(s) => format!("serial {} @ {} baud", s.port, s.baud_rate),
            SourceSettings::Tcp(s) => format!("tcp {}", s.addr),
            SourceSettings::Replay(s) => format!("replay {}", s.path.display()),
        }
    }
}

/// Start the configured source on a background thread.
pub fn spawn(settings: SourceSettings, tx: Sender<SampleBatch>) -> JoinHandle<()> {
    tracing::info!(source = %settings.describe(), "starting sample source");
    match settings {
        SourceSettings::Simulated(s) => simulated::spawn(s, tx),
        SourceSettings::Serial(s) => serial::spawn(s, tx),
        SourceSettings::Tcp(s) => tcp::spawn(s, tx),
        SourceSettings::Replay(s) => replay::spawn(s, tx),
    }
}

/// Parse every numeric token of a line.
///
/// Tokens are separated by whitespace, commas, or semicolons. Tokens that are
/// not numbers, or are NaN/infinite, are skipped.
pub fn parse_sample_line(line: &str) -> SampleBatch {
    line.split(|c: char| c.is_whitespace() || c == ',' || c == ';')
        .filter(|tok| !tok.is_empty())
        .filter_map(|tok| tok.parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_separated_numbers() {
        assert_eq!(parse_sample_line("3.2"), vec![3.2]);
        assert_eq!(parse_sample_line(" 1, 2;3\t4 "), vec![1.0, 2.0, 3.0, 4.0]);
        assert_eq!(parse_sample_line("-0.5e1"), vec![-5.0]);
    }

    #[test]
    fn skips_labels_and_non_finite() {
        assert_eq!(parse_sample_line("PUPIL: 3.1 mm"), vec![3.1]);
        assert_eq!(parse_sample_line("NaN inf -inf 2"), vec![2.0]);
        assert!(parse_sample_line("").is_empty());
        assert!(parse_sample_line("no numbers here").is_empty());
    }

    #[test]
    fn describes_sources() {
        let s = SourceSettings::Serial(SerialSettings::default());
        assert_eq!(s.describe(), "serial /dev/ttyACM0 @ 115200 baud");
        let t = SourceSettings::Tcp(TcpSettings::default());
        assert_eq!(t.describe(), "tcp 127.0.0.1:4000");
    }
}
