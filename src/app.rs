//! src/app.rs
//!
//! Top-level application: starts a sample source and feeds its batches into
//! one sparkline, either in a live terminal dashboard or headless with an SVG
//! export at the end.
//!
//! # Running
//!
//! ```text
//! cargo run --release                                  # simulated pupil feed
//! cargo run --release -- --source serial --port /dev/ttyACM0
//! cargo run --release -- --source tcp --listen 127.0.0.1:4000
//! cargo run --release -- --source replay --replay P01-All-Data.tsv --speed 2
//! cargo run --release -- --headless --count 120 --svg pupil.svg
//! ```
//!
//! # Keyboard Controls
//!
//! - **e**: Export the current scene to the `--svg` path.
//! - **q**: Quit and restore terminal state.
//!
//! # TCP feed
//!
//! With `--source tcp` every line a client sends is parsed for numbers and
//! appended as one batch:
//!
//! ```text
//! $ nc 127.0.0.1 4000
//! 3.41 3.44
//! OK 2
//! quit
//! OK bye
//! ```
//!
//! # Threading
//!
//! Sources run on their own threads and only talk to the UI through an mpsc
//! channel. The UI loop drains the channel once per frame and is the only
//! caller of `Sparkline::add_data`.

use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use color_eyre::eyre::WrapErr;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::DefaultTerminal;
use ratatui::layout::Rect;

use crate::cli::Args;
use crate::logging;
use crate::panels::{HelpPanel, InfoPanel, SamplesPanel, SparklinePanel, TitlePanel};
use crate::render::{Page, Size, svg};
use crate::source::{self, SampleBatch, SourceSettings};
use crate::spark::{Margins, SparkConfig, Sparkline};
use crate::ui::{DashboardLayout, Panel};

/// Container id of the single sparkline on the page.
const CONTAINER: &str = "sparkline";

const FRAME_TIME: Duration = Duration::from_millis(100);

const BINDINGS: [(&str, &str); 2] = [("E", "Export SVG"), ("Q", "Quit")];

/// Braille-dot margins for the terminal: labels sit at the right edge, so no left gutter.
const TERMINAL_MARGINS: Margins = Margins {
    left: 0.0,
    top: 4.0,
    bottom: 4.0,
};

pub fn run(args: Args) -> color_eyre::Result<()> {
    logging::init(&args.log_target())?;
    let settings = args.source_settings()?;
    let config = args.spark_config();

    if args.headless {
        run_headless(&args, config, settings)
    } else {
        let mut terminal = ratatui::init();
        let result = run_tui(&mut terminal, &args, config, settings);
        ratatui::restore();
        result
    }
}

/// Collect `--count` samples (or until the source ends), then write the SVG.
fn run_headless(args: &Args, config: SparkConfig, settings: SourceSettings) -> color_eyre::Result<()> {
    let page = Page::new().with_container(CONTAINER, Size::new(args.width, args.height));
    let mut spark = Sparkline::new(&page, CONTAINER, &[], config)?;

    let (tx, rx) = mpsc::channel::<SampleBatch>();
    // detached: serial/tcp sources only notice the hangup on their next send
    let _source = source::spawn(settings, tx);

    let wanted = args.sample_count();
    let mut received = 0usize;
    while received < wanted {
        match rx.recv() {
            Ok(batch) => {
                received += batch.len();
                spark.add_data(&batch);
            }
            Err(_) => {
                tracing::warn!(received, wanted, "source ended early");
                break;
            }
        }
    }

    svg::write_svg(spark.scene(), &args.svg)
        .wrap_err_with(|| format!("writing {}", args.svg.display()))?;
    tracing::info!(received, samples = spark.window().len(), "headless export done");
    Ok(())
}

fn run_tui(
    terminal: &mut DefaultTerminal,
    args: &Args,
    config: SparkConfig,
    settings: SourceSettings,
) -> color_eyre::Result<()> {
    // the container is measured once; later resizes only rescale the canvas
    let size = terminal.size()?;
    let layout = DashboardLayout::new(Rect::new(0, 0, size.width, size.height));
    let page = Page::new().with_container(CONTAINER, SparklinePanel::container_size(layout.chart));
    let mut spark = Sparkline::new(&page, CONTAINER, &[], config.margins(TERMINAL_MARGINS))?;

    let source_label = settings.describe();
    let (tx, rx) = mpsc::channel::<SampleBatch>();
    let _source = source::spawn(settings, tx);

    let title = TitlePanel::new("Live Sparkline", &source_label);
    let chart_title = format!("{} [{}..{}]", CONTAINER, spark.config().min_y, spark.config().max_y);
    let mut received = 0usize;
    let mut status: Option<String> = None;
    let mut source_done = false;

    loop {
        let frame_start = Instant::now();

        if !source_done {
            let (count, done) = drain(&rx, &mut spark);
            received += count;
            if done {
                tracing::info!(received, "sample source closed");
                status = Some("source closed".to_string());
                source_done = true;
            }
        }

        terminal.draw(|f| {
            let layout = DashboardLayout::new(f.area());
            title.draw(f, layout.title);
            SparklinePanel::new(&spark, &chart_title).draw(f, layout.chart);
            InfoPanel::new(&spark, received).draw(f, layout.info);
            SamplesPanel::new(&spark).draw(f, layout.samples);
            HelpPanel::new(&BINDINGS, status.as_deref()).draw(f, layout.help);
        })?;

        let mut quit = false;
        while event::poll(Duration::from_millis(0))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => quit = true,
                    KeyCode::Char('e') => {
                        status = Some(match svg::write_svg(spark.scene(), &args.svg) {
                            Ok(()) => format!("exported {}", args.svg.display()),
                            Err(e) => {
                                tracing::error!(error = %e, "svg export failed");
                                format!("export failed: {e}")
                            }
                        });
                    }
                    _ => {}
                }
            }
        }
        if quit {
            break;
        }

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME_TIME {
            thread::sleep(FRAME_TIME - elapsed);
        }
    }

    Ok(())
}

/// Append every pending batch. Returns the samples appended and whether the
/// source has hung up.
fn drain(rx: &Receiver<SampleBatch>, spark: &mut Sparkline) -> (usize, bool) {
    let mut count = 0;
    loop {
        match rx.try_recv() {
            Ok(batch) => {
                count += batch.len();
                spark.add_data(&batch);
            }
            Err(TryRecvError::Empty) => return (count, false),
            Err(TryRecvError::Disconnected) => return (count, true),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn drain_appends_pending_batches() {
        let page = Page::new().with_container(CONTAINER, Size::new(100.0, 40.0));
        let mut spark = Sparkline::new(&page, CONTAINER, &[], SparkConfig::new(0.0, 10.0, 3)).unwrap();
        let (tx, rx) = mpsc::channel();
        tx.send(vec![10.0]).unwrap();
        tx.send(vec![20.0, 30.0]).unwrap();

        assert_eq!(drain(&rx, &mut spark), (3, false));
        assert_eq!(spark.window().to_vec(), vec![10.0, 20.0, 30.0]);

        tx.send(vec![40.0]).unwrap();
        drop(tx);
        assert_eq!(drain(&rx, &mut spark), (1, true));
        assert_eq!(spark.window().to_vec(), vec![20.0, 30.0, 40.0]);
        assert_eq!(spark.offset(), 0);
    }

    #[test]
    fn headless_simulated_run_writes_svg() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("pupil.svg");
        let args = Args::try_parse_from([
            "sparkline_monitor",
            "--headless",
            "--interval-ms",
            "0",
            "--max-length",
            "8",
            "--count",
            "12",
            "--svg",
            out.to_str().unwrap(),
        ])
        .unwrap();
        let settings = args.source_settings().unwrap();
        run_headless(&args, args.spark_config(), settings).unwrap();

        let svg = std::fs::read_to_string(&out).unwrap();
        assert_eq!(svg.matches("<path").count(), 1);
        assert_eq!(svg.matches("<line").count(), 2);
        assert_eq!(svg.matches("<text").count(), 2);
        // full window: 8 points, the last one on the right edge
        let d = svg.split("d=\"").nth(1).unwrap().split('"').next().unwrap();
        assert_eq!(d.split(' ').count(), 8);
        assert!(d.split(' ').last().unwrap().starts_with("L300,"));
    }
}
