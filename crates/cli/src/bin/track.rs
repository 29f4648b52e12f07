use std::path::PathBuf;

use anyhow::{Context, anyhow};
use clap::Parser;
use solar_travel_sim::animation::{self, CsvTrackRenderer, FrameClock, Scene, StopHandle};
use solar_travel_sim::export;
use solar_travel_sim::orbits::OrbitalBody;
use solar_travel_sim::transfer::destination;

#[path = "common/mod.rs"]
mod common;

/// Stream body positions frame by frame as CSV.
#[derive(Parser, Debug)]
#[command(author, version, about = "Body position track exporter")]
struct Cli {
    #[command(flatten)]
    scenario: common::ScenarioArgs,

    /// Bodies to include (defaults to the whole catalog)
    #[arg(id = "body", long = "body", value_name = "BODIES")]
    bodies: Vec<String>,

    /// Simulation start time in years
    #[arg(long, default_value_t = 0.0)]
    start: f64,

    /// Frames per second of the target animation
    #[arg(long, default_value_t = 30.0)]
    fps: f64,

    /// Simulated years per second of animation
    #[arg(long, default_value_t = 0.25)]
    years_per_second: f64,

    /// Number of frames to emit
    #[arg(long, default_value_t = 101)]
    frames: usize,

    /// Output CSV file (use '-' for stdout)
    #[arg(long, default_value = "-")]
    output: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    if !(cli.fps.is_finite() && cli.fps > 0.0) {
        return Err(anyhow!("--fps must be positive, got {}", cli.fps));
    }
    let scenario = cli.scenario.load()?;
    let model = scenario.model(cli.scenario.model());

    let selected: Vec<OrbitalBody> = if cli.bodies.is_empty() {
        scenario.catalog.bodies().to_vec()
    } else {
        cli.bodies
            .iter()
            .map(|id| destination::resolve(&scenario.catalog, id).cloned())
            .collect::<Result<_, _>>()?
    };

    let scene = Scene::new(&selected, model);
    let clock = FrameClock::paced(cli.start, cli.fps, cli.years_per_second).with_limit(cli.frames);
    if cli.scenario.verbose {
        eprintln!(
            "Tracking {} bodies over {} frames, {:.5} yr per frame ({} model)",
            selected.len(),
            cli.frames,
            clock.step(),
            model.label()
        );
    }

    let writer = export::writer_for_path(&cli.output)
        .with_context(|| format!("creating {}", cli.output.display()))?;
    let mut renderer = CsvTrackRenderer::new(writer);
    let summary = animation::run(&scene, clock, &StopHandle::new(), &mut renderer)?;

    if cli.scenario.verbose {
        eprintln!(
            "Wrote {} frames, last t = {:.4} yr",
            summary.frames_rendered,
            summary.last_time.unwrap_or(cli.start)
        );
    }
    Ok(())
}
