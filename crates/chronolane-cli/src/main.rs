//! `lanes`: compute calendar layout records from a JSON event list.
//!
//! Reads an array of events from a file or stdin, runs one layout pass for
//! the requested week, and prints the records as JSON. Useful for debugging
//! a renderer or diffing layout output in scripts; it draws nothing.

use std::fs;
use std::io::Read;
use std::path::PathBuf;

use anyhow::{ensure, Context, Result};
use chrono::NaiveDate;
use clap::Parser;

use chronolane::{compute_layout, Event, GeometryConfig, LayoutOptions, TimelineKind, WeekStart};

#[derive(Parser)]
#[command(
    name = "lanes",
    version,
    about = "Deterministic calendar event layout from JSON"
)]
struct Args {
    /// JSON file containing an array of events; reads stdin when omitted.
    input: Option<PathBuf>,

    /// Reference date identifying the week to lay out (YYYY-MM-DD).
    #[arg(short, long)]
    date: NaiveDate,

    /// Available width in layout units.
    #[arg(short, long, default_value_t = 800.0)]
    width: f64,

    /// Timeline to lay out ("week" or "day").
    #[arg(long, default_value = "week")]
    view: TimelineKind,

    /// First day of the week ("monday" or "sunday").
    #[arg(long, default_value = "monday")]
    week_start: WeekStart,

    /// Vertical scale in layout units per hour.
    #[arg(long, default_value_t = 60.0)]
    hour_height: f64,

    /// Pretty-print the JSON output.
    #[arg(long)]
    pretty: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    ensure!(
        args.width.is_finite() && args.width > 0.0,
        "width must be a positive number, got {}",
        args.width
    );

    let geometry = GeometryConfig {
        hour_height: args.hour_height,
        ..GeometryConfig::default()
    };
    geometry.validate()?;

    let raw = read_input(args.input.as_deref())?;
    let events: Vec<Event> =
        serde_json::from_str(&raw).context("input is not a JSON array of events")?;

    let options = LayoutOptions {
        kind: args.view,
        week_start: args.week_start,
        geometry,
    };
    let records = compute_layout(&events, args.date, args.width, &options);

    let output = if args.pretty {
        serde_json::to_string_pretty(&records)?
    } else {
        serde_json::to_string(&records)?
    };
    println!("{output}");

    Ok(())
}

fn read_input(path: Option<&std::path::Path>) -> Result<String> {
    match path {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("cannot read {}", path.display()))
        }
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("cannot read stdin")?;
            Ok(buffer)
        }
    }
}
