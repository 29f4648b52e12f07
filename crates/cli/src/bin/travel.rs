use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, anyhow};
use clap::Parser;
use solar_travel_sim::core::units::kms_to_au_per_year;
use solar_travel_sim::export::{self, report, transfer as export_transfer};
use solar_travel_sim::transfer::destination;
use solar_travel_sim::transfer::{
    DEFAULT_TRANSFER_FRAMES, TravelQuery, find_travel_time, guess_outcomes, transfer_frames,
};

#[path = "common/mod.rs"]
mod common;

/// Solve the one-way travel time between two bodies at constant straight-line speed.
#[derive(Parser, Debug)]
#[command(author, version, about = "One-way travel-time solver")]
struct Cli {
    #[command(flatten)]
    scenario: common::ScenarioArgs,

    /// Departure body (case-insensitive, aliases accepted)
    #[arg(long, default_value = "earth")]
    from: String,

    /// Destination body (case-insensitive, aliases accepted)
    #[arg(long)]
    to: String,

    /// Departure time in years
    #[arg(long, default_value_t = 0.0)]
    depart: f64,

    /// Craft speed in km/s
    #[arg(long, default_value_t = 11.0)]
    speed_kms: f64,

    /// Write a JSON report of the leg (use '-' for stdout)
    #[arg(long)]
    json: Option<PathBuf>,

    /// Write transfer frames as CSV (use '-' for stdout)
    #[arg(long)]
    frames: Option<PathBuf>,

    /// Number of transfer frames to write
    #[arg(long, default_value_t = DEFAULT_TRANSFER_FRAMES)]
    frame_count: usize,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let scenario = cli.scenario.load()?;
    let settings = scenario.travel_settings(cli.scenario.model());

    let (origin, target) = destination::resolve_pair(&scenario.catalog, &cli.from, &cli.to)?;
    let query = TravelQuery::new(origin, target, cli.depart, kms_to_au_per_year(cli.speed_kms))?;

    if cli.scenario.verbose {
        eprintln!(
            "Solving {} -> {} with the {} model",
            origin.name(),
            target.name(),
            settings.model.label()
        );
        common::print_guesses(&guess_outcomes(&query, &settings));
    }

    let leg = find_travel_time(&query, &settings).ok_or_else(|| {
        anyhow!(
            "no positive-time solution from {} to {} at {} km/s",
            origin.name(),
            target.name(),
            cli.speed_kms
        )
    })?;

    common::print_leg("Transit", origin.name(), target.name(), &leg);
    println!("Arrival   : t = {:.4} yr", leg.arrival_time());

    if let Some(path) = &cli.json {
        let mut writer = export::writer_for_path(path)
            .with_context(|| format!("creating {}", path.display()))?;
        report::write_json(
            &mut writer,
            &common::leg_report(origin.name(), target.name(), &leg),
        )?;
    }

    if let Some(path) = &cli.frames {
        let frames = transfer_frames(&leg, origin, target, &settings.model, cli.frame_count)?;
        let mut writer = export::writer_for_path(path)
            .with_context(|| format!("creating {}", path.display()))?;
        export_transfer::write_header(&mut writer)?;
        for frame in &frames {
            export_transfer::Record {
                frame: frame.index,
                fraction: frame.fraction,
                time_years: frame.time,
                craft: frame.craft.as_array(),
                origin: frame.origin.as_array(),
                target: frame.target.as_array(),
            }
            .write_to(&mut writer)?;
        }
        writer.flush()?;
    }

    Ok(())
}
