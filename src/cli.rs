//! src/cli.rs
//!
//! Command-line arguments and their mapping onto the config structs.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::error::{Result, SparkError};
use crate::logging::LogTarget;
use crate::source::{
    ReplaySettings, SerialSettings, SimulatedSettings, SourceKind, SourceSettings, TcpSettings,
};
use crate::spark::SparkConfig;

#[derive(Debug, Parser)]
#[command(name = "sparkline_monitor", version, about = "Live sparkline of a numeric sample feed")]
pub struct Args {
    /// Where samples come from
    #[arg(long, value_enum, default_value_t = SourceKind::Simulated)]
    pub source: SourceKind,

    /// Serial device for `--source serial`
    #[arg(long, default_value = "/dev/ttyACM0")]
    pub port: String,

    #[arg(long, default_value_t = 115_200)]
    pub baud: u32,

    /// Bind address for `--source tcp`
    #[arg(long, default_value = "127.0.0.1:4000")]
    pub listen: String,

    /// Tobii All-Data TSV export for `--source replay`
    #[arg(long, value_name = "FILE")]
    pub replay: Option<PathBuf>,

    /// MediaName rows to replay
    #[arg(long, default_value = "ScreenRec")]
    pub media: String,

    /// Replay speed factor
    #[arg(long, default_value_t = 1.0)]
    pub speed: f64,

    /// Milliseconds between simulated samples
    #[arg(long, default_value_t = 100)]
    pub interval_ms: u64,

    #[arg(long, default_value_t = 2.0, allow_negative_numbers = true)]
    pub min_y: f64,

    #[arg(long, default_value_t = 5.0, allow_negative_numbers = true)]
    pub max_y: f64,

    /// Samples kept in the sliding window
    #[arg(long, default_value_t = 60)]
    pub max_length: usize,

    /// Skip the boundary lines and min/max labels
    #[arg(long)]
    pub no_decorations: bool,

    /// Collect samples without a terminal UI, then write the SVG and exit
    #[arg(long)]
    pub headless: bool,

    /// SVG output path (headless export and the `e` key)
    #[arg(long, value_name = "FILE", default_value = "sparkline.svg")]
    pub svg: PathBuf,

    /// SVG container width in pixels
    #[arg(long, default_value_t = 300.0)]
    pub width: f64,

    /// SVG container height in pixels
    #[arg(long, default_value_t = 60.0)]
    pub height: f64,

    /// Samples to collect in headless mode (defaults to --max-length)
    #[arg(long)]
    pub count: Option<usize>,

    /// Write logs here; the terminal UI logs nowhere otherwise
    #[arg(long, value_name = "FILE")]
    pub log_file: Option<PathBuf>,
}

impl Args {
    pub fn spark_config(&self) -> SparkConfig {
        SparkConfig::new(self.min_y, self.max_y, self.max_length).decorations(!self.no_decorations)
    }

    pub fn source_settings(&self) -> Result<SourceSettings> {
        Ok(match self.source {
            SourceKind::Simulated => {
                let mut s = SimulatedSettings::new(
                    (self.min_y, self.max_y),
                    Duration::from_millis(self.interval_ms),
                );
                if self.headless {
                    s.limit = Some(self.sample_count());
                }
                SourceSettings::Simulated(s)
            }
            SourceKind::Serial => SourceSettings::Serial(SerialSettings {
                port: self.port.clone(),
                baud_rate: self.baud,
                ..SerialSettings::default()
            }),
            SourceKind::Tcp => SourceSettings::Tcp(TcpSettings {
                addr: self.listen.clone(),
            }),
            SourceKind::Replay => {
                let path = self.replay.clone().ok_or_else(|| {
                    SparkError::Replay("--replay <FILE> is required for the replay source".into())
                })?;
                let mut s = ReplaySettings::new(path);
                s.media = self.media.clone();
                s.speed = self.speed;
                SourceSettings::Replay(s)
            }
        })
    }

    /// Samples to collect before a headless export.
    pub fn sample_count(&self) -> usize {
        self.count.unwrap_or(self.max_length)
    }

    pub fn log_target(&self) -> LogTarget {
        match (&self.log_file, self.headless) {
            (Some(path), _) => LogTarget::File(path.clone()),
            (None, true) => LogTarget::Stderr,
            (None, false) => LogTarget::Off,
        }
    }
}
