//! This crate contains the source code for the binary of the stepfinder visualizer.

#![expect(
    clippy::cargo_common_metadata,
    reason = "Temporary allow during development."
)]
#![expect(
    unused_crate_dependencies,
    reason = "The dependencies are used in the library crate."
)]

use clap::Parser as _;
use color_eyre::{eyre::Result, install};
use stepfinder::{init_logging, App, Config};

fn main() -> Result<()> {
    install()?;

    let config = Config::parse();
    init_logging(&config)?;

    let mut terminal = ratatui::init();
    let result = App::new(&config).and_then(|mut app| app.run(&mut terminal));
    ratatui::restore();

    result
}
