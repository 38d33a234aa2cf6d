//! caniobserve binary entry point.
//!
//! # Usage
//!
//! ```bash
//! caniobserve calendar 0.0 0.0 -d 1
//! caniobserve calendar 120.5 -3.2 -d 7 -t Parkes -o parkes.ics
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Log level (default: info)

use std::env;

use clap::Parser;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use caniobserve::cli::{run, Cli};

fn main() -> anyhow::Result<()> {
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .init();

    run(Cli::parse())
}
