//! src/main.rs
//!
//! Entrypoint delegating to `app::run()`.

use clap::Parser;

use sparkline_monitor::{app, cli::Args};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    app::run(Args::parse())
}
