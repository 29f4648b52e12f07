use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use solar_travel_sim::core::time::{days_to_years, years_to_days};
use solar_travel_sim::core::units::kms_to_au_per_year;
use solar_travel_sim::export::{self, report};
use solar_travel_sim::transfer::{RoundTripRequest, plan_round_trip};

#[path = "common/mod.rs"]
mod common;

/// Plan an outbound leg, a stay at the destination, and the return leg.
#[derive(Parser, Debug)]
#[command(author, version, about = "Round-trip planner")]
struct Cli {
    #[command(flatten)]
    scenario: common::ScenarioArgs,

    /// Home body (case-insensitive, aliases accepted)
    #[arg(long, default_value = "earth")]
    from: String,

    /// Destination body (case-insensitive, aliases accepted)
    #[arg(long)]
    to: String,

    /// Launch time in years
    #[arg(long, default_value_t = 0.0)]
    launch: f64,

    /// Time spent at the destination, in days
    #[arg(long, default_value_t = 0.0)]
    stay_days: f64,

    /// Craft speed in km/s
    #[arg(long, default_value_t = 11.0)]
    speed_kms: f64,

    /// Write a JSON report of the plan (use '-' for stdout)
    #[arg(long)]
    json: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let scenario = cli.scenario.load()?;
    let model = cli.scenario.model();
    let settings = scenario.travel_settings(model);

    let request = RoundTripRequest {
        origin: cli.from.clone(),
        destination: cli.to.clone(),
        launch_time: cli.launch,
        stay_duration: days_to_years(cli.stay_days),
        speed: kms_to_au_per_year(cli.speed_kms),
    };
    if cli.scenario.verbose {
        eprintln!(
            "Planning {} -> {} -> {} at {} km/s ({:.4} AU/yr), {} model",
            request.origin,
            request.destination,
            request.origin,
            cli.speed_kms,
            request.speed,
            settings.model.label()
        );
    }

    let plan = plan_round_trip(&scenario.catalog, &request, &settings)?;

    println!("=== Round Trip: {} <-> {} ===", plan.origin, plan.destination);
    common::print_leg("Outbound", &plan.origin, &plan.destination, &plan.outbound);
    println!("Stay      : {:.2} days", cli.stay_days);
    common::print_leg("Return", &plan.destination, &plan.origin, &plan.inbound);
    println!(
        "Total     : {:.2} days ({:.4} yr), home at t = {:.4} yr",
        years_to_days(plan.total_duration()),
        plan.total_duration(),
        plan.return_time()
    );

    if let Some(path) = &cli.json {
        let summary = report::RoundTripReport {
            origin: plan.origin.clone(),
            destination: plan.destination.clone(),
            model: settings.model.label().to_string(),
            launch_time_years: plan.launch_time,
            stay_years: plan.stay_duration,
            total_on_site_years: plan.total_on_site,
            total_duration_years: plan.total_duration(),
            total_duration_days: years_to_days(plan.total_duration()),
            return_time_years: plan.return_time(),
            outbound: common::leg_report(&plan.origin, &plan.destination, &plan.outbound),
            inbound: common::leg_report(&plan.destination, &plan.origin, &plan.inbound),
        };
        let mut writer = export::writer_for_path(path)
            .with_context(|| format!("creating {}", path.display()))?;
        report::write_json(&mut writer, &summary)?;
    }

    Ok(())
}
