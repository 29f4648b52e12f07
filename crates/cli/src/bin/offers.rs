use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use solar_travel_sim::core::time::{days_to_years, years_to_days};
use solar_travel_sim::core::units::kms_to_au_per_year;
use solar_travel_sim::export::{self, offers as export_offers};
use solar_travel_sim::transfer::destination;
use solar_travel_sim::transfer::{
    LaunchWindow, OfferRequest, fastest_per_destination, generate_offers,
};

#[path = "common/mod.rs"]
mod common;

/// Sweep launch times and destinations, writing one round-trip offer per grid cell.
#[derive(Parser, Debug)]
#[command(author, version, about = "Round-trip offer grid (CSV)")]
struct Cli {
    #[command(flatten)]
    scenario: common::ScenarioArgs,

    /// Home body (case-insensitive, aliases accepted)
    #[arg(long, default_value = "earth")]
    from: String,

    /// Destinations to offer (defaults to every other catalog body)
    #[arg(long = "to")]
    destinations: Vec<String>,

    /// First launch time in years
    #[arg(long, default_value_t = 0.0)]
    window_start: f64,

    /// Last launch time in years
    #[arg(long, default_value_t = 2.0)]
    window_end: f64,

    /// Launch grid step in days
    #[arg(long, default_value_t = 30.0)]
    step_days: f64,

    /// Time spent at each destination, in days
    #[arg(long, default_value_t = 30.0)]
    stay_days: f64,

    /// Craft speed in km/s
    #[arg(long, default_value_t = 11.0)]
    speed_kms: f64,

    /// Output CSV file (use '-' for stdout)
    #[arg(long, default_value = "artifacts/offers.csv")]
    output: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let scenario = cli.scenario.load()?;
    let settings = scenario.travel_settings(cli.scenario.model());

    let home = destination::resolve(&scenario.catalog, &cli.from)?;
    let destinations: Vec<String> = if cli.destinations.is_empty() {
        scenario
            .catalog
            .iter()
            .filter(|body| !body.is_named(home.name()))
            .map(|body| body.name().to_string())
            .collect()
    } else {
        cli.destinations.clone()
    };

    let request = OfferRequest {
        origin: cli.from.clone(),
        destinations,
        window: LaunchWindow {
            start: cli.window_start,
            end: cli.window_end,
            step: days_to_years(cli.step_days),
        },
        stay_duration: days_to_years(cli.stay_days),
        speed: kms_to_au_per_year(cli.speed_kms),
    };

    if cli.scenario.verbose {
        eprintln!(
            "Sweeping {} destinations x {} launch times",
            request.destinations.len(),
            request.window.times()?.len()
        );
    }

    let offers = generate_offers(&scenario.catalog, &request, &settings)?;

    let mut writer = export::writer_for_path(&cli.output)
        .with_context(|| format!("creating {}", cli.output.display()))?;
    export_offers::write_header(&mut writer)?;
    let mut failures = 0usize;
    for offer in &offers {
        let reason;
        let record = match &offer.outcome {
            Ok(plan) => export_offers::Record {
                origin: home.name(),
                destination: &plan.destination,
                launch_time_years: offer.launch_time,
                outbound_days: Some(plan.outbound.elapsed_days()),
                stay_days: cli.stay_days,
                inbound_days: Some(plan.inbound.elapsed_days()),
                total_days: Some(years_to_days(plan.total_duration())),
                status: "ok",
            },
            Err(err) => {
                failures += 1;
                if cli.scenario.verbose {
                    eprintln!("  {} @ t = {:.4} yr: {err}", offer.destination, offer.launch_time);
                }
                reason = err.to_string();
                export_offers::Record {
                    origin: home.name(),
                    destination: destination::body_name(&offer.destination)
                        .unwrap_or(&offer.destination),
                    launch_time_years: offer.launch_time,
                    outbound_days: None,
                    stay_days: cli.stay_days,
                    inbound_days: None,
                    total_days: None,
                    status: &reason,
                }
            }
        };
        record.write_to(&mut writer)?;
    }
    writer.flush()?;

    for offer in fastest_per_destination(&offers) {
        if let Ok(plan) = &offer.outcome {
            eprintln!(
                "Fastest {:<8}: launch t = {:.4} yr, round trip = {:.1} days",
                plan.destination,
                offer.launch_time,
                years_to_days(plan.total_duration())
            );
        }
    }
    if failures > 0 {
        eprintln!("{failures} of {} offers had no solution", offers.len());
    }

    Ok(())
}
