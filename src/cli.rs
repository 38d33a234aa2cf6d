//! Command-line surface and orchestration.
//!
//! `caniobserve calendar <L> <B> -d DAYS` samples the target's altitude at
//! one-minute resolution from the current instant, extracts the
//! above-threshold windows, and writes one calendar event per window.

use std::path::PathBuf;

use anyhow::Result;
use chrono::{DateTime, Utc};
use clap::{Args, Parser, Subcommand};
use qtty::{Days, Degrees};
use tracing::info;

use crate::ephemeris::{altitude_series, AltitudeSample, GalacticCoord, MINUTE_STEP};
use crate::models::{ModifiedJulianDate, ObservatorySite};
use crate::services::{extract_windows, write_calendar, CalendarEvent};

/// Observability tools
#[derive(Parser, Debug)]
#[command(name = "caniobserve", version, about = "Observability tools")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Make calendar entries for target and telescope
    Calendar(CalendarArgs),
}

#[derive(Args, Debug)]
#[command(allow_negative_numbers = true)]
pub struct CalendarArgs {
    /// Galactic longitude of the target, degrees
    pub l: f64,

    /// Galactic latitude of the target, degrees
    pub b: f64,

    /// Number of days forward to parse
    #[arg(short = 'd', long = "day-num")]
    pub day_num: u32,

    /// Which telescope to use
    #[arg(short = 't', long, default_value = "GBT")]
    pub telescope: String,

    /// Output calendar file
    #[arg(short = 'o', long, default_value = "target.ics")]
    pub output: PathBuf,

    /// Minimum elevation above the geometric horizon, degrees
    #[arg(long, default_value_t = 5.0)]
    pub horizon_margin: f64,
}

/// Dispatch a parsed invocation.
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Calendar(args) => run_calendar(&args, Utc::now()),
    }
}

/// Run the calendar command with an explicit start instant.
///
/// The start instant is a parameter so tests can pin the sampling grid.
pub fn run_calendar(args: &CalendarArgs, start: DateTime<Utc>) -> Result<()> {
    let site = ObservatorySite::lookup(&args.telescope)?;
    let target = GalacticCoord::new(Degrees::new(args.l), Degrees::new(args.b)).to_icrs();

    info!(
        l = args.l,
        b = args.b,
        site = site.name,
        days = args.day_num,
        "computing visibility windows"
    );

    let samples = altitude_series(
        &target,
        site,
        ModifiedJulianDate::from_datetime(start),
        Days::new(args.day_num as f64),
        MINUTE_STEP,
    );

    let events = events_for_series(args, site, &samples)?;
    write_calendar(&events, &args.output)?;

    Ok(())
}

/// Extract windows from a sampled series and shape them into calendar events.
///
/// Split out from [`run_calendar`] so the end-to-end path can be exercised
/// with a deterministic series.
pub fn events_for_series(
    args: &CalendarArgs,
    site: &ObservatorySite,
    samples: &[AltitudeSample],
) -> Result<Vec<CalendarEvent>> {
    let windows = extract_windows(samples, Degrees::new(args.horizon_margin))?;
    info!(windows = windows.len(), "target rises above threshold");

    Ok(windows
        .into_iter()
        .map(|window| CalendarEvent {
            title: "Target is in the sky!".to_string(),
            description: event_description(args.l, args.b),
            location: site.location.to_string(),
            window,
        })
        .collect())
}

fn event_description(l: f64, b: f64) -> String {
    format!(
        "(l, b) = ({l}, {b}) \\n\\n\
         Weather: https://www.google.com/search?q=green+bank+weather \\n\\n\
         GBT Pizza Plot: https://www.gb.nrao.edu/~rmaddale/Weather/AllOverviews.html#RestOverview \\n\\n\
         GBT Guide: https://github.com/UCBerkeleySETI/bl_docs/wiki/NEW-GBT-Observing-guide"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parses_reference_invocation() {
        let cli = Cli::try_parse_from(["caniobserve", "calendar", "120.5", "-3.2", "-d", "2"])
            .unwrap();
        let Command::Calendar(args) = cli.command;
        assert_eq!(args.l, 120.5);
        assert_eq!(args.b, -3.2);
        assert_eq!(args.day_num, 2);
        assert_eq!(args.telescope, "GBT");
        assert_eq!(args.output, PathBuf::from("target.ics"));
        assert_eq!(args.horizon_margin, 5.0);
    }

    #[test]
    fn test_cli_requires_day_num() {
        assert!(Cli::try_parse_from(["caniobserve", "calendar", "0", "0"]).is_err());
    }

    #[test]
    fn test_cli_rejects_malformed_coordinates() {
        assert!(Cli::try_parse_from(["caniobserve", "calendar", "abc", "0", "-d", "1"]).is_err());
    }

    #[test]
    fn test_cli_accepts_telescope_and_output() {
        let cli = Cli::try_parse_from([
            "caniobserve",
            "calendar",
            "0",
            "0",
            "-d",
            "1",
            "-t",
            "Parkes",
            "-o",
            "/tmp/out.ics",
        ])
        .unwrap();
        let Command::Calendar(args) = cli.command;
        assert_eq!(args.telescope, "Parkes");
        assert_eq!(args.output, PathBuf::from("/tmp/out.ics"));
    }

    #[test]
    fn test_unknown_telescope_fails() {
        let args = CalendarArgs {
            l: 0.0,
            b: 0.0,
            day_num: 1,
            telescope: "VLA".to_string(),
            output: PathBuf::from("target.ics"),
            horizon_margin: 5.0,
        };
        let err = run_calendar(&args, Utc::now()).unwrap_err();
        assert!(err.to_string().contains("unknown telescope"));
    }

    #[test]
    fn test_description_embeds_coordinates_and_links() {
        let description = event_description(12.25, -4.5);
        assert!(description.contains("(l, b) = (12.25, -4.5)"));
        assert!(description.contains("green+bank+weather"));
        assert!(description.contains("AllOverviews.html#RestOverview"));
        assert!(description.contains("NEW-GBT-Observing-guide"));
    }

    #[test]
    fn test_command_debug_asserts() {
        Cli::command().debug_assert();
    }
}
