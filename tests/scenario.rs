use std::fs;
use std::path::PathBuf;

use approx::assert_relative_eq;
use solar_travel_sim::orbits::OrbitError;
use solar_travel_sim::scenario::{ModelChoice, Scenario, ScenarioError};
use solar_travel_sim::transfer::CatalogError;

fn configs() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("configs")
}

#[test]
fn shipped_scenario_loads() {
    let configs = configs();
    let scenario = Scenario::load(configs.join("bodies"), Some(configs.join("solver.toml")))
        .expect("scenario");

    assert_eq!(scenario.catalog.len(), 8);
    let names: Vec<&str> = scenario.catalog.iter().map(|b| b.name()).collect();
    assert_eq!(names.first(), Some(&"MERCURY"));
    assert_eq!(names.last(), Some(&"NEPTUNE"));

    let mars = scenario.catalog.get("Mars").expect("mars");
    assert_relative_eq!(mars.semi_minor_axis(), 1.524 * (1.0 - 0.0934_f64.powi(2)).sqrt());

    let settings = scenario.travel_settings(ModelChoice::Keplerian);
    assert_eq!(settings.model.label(), "keplerian");
    assert_eq!(settings.initial_guesses, vec![0.01, 0.1, 1.0, 5.0]);
}

#[test]
fn missing_solver_file_means_defaults() {
    let scenario = Scenario::load(configs().join("bodies"), None::<PathBuf>).expect("scenario");
    assert_eq!(scenario.solver.max_iterations, 100);
    assert_eq!(scenario.model(ModelChoice::Parametric).label(), "parametric");
}

#[test]
fn inconsistent_semi_minor_axis_fails_the_load() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("bodies.yaml");
    fs::write(
        &path,
        r#"
- name: EARTH
  semi_major_axis: 149.6
  semi_minor_axis: 149.5791
  focal_distance: 2.5
  period_years: 1.0
  unit: gm
- name: SATURN
  semi_major_axis: 1433.5
  semi_minor_axis: 488.1149
  focal_distance: 79.2
  unit: gm
"#,
    )
    .unwrap();

    match Scenario::load(&path, None::<PathBuf>) {
        Err(ScenarioError::Catalog(CatalogError::Orbit(OrbitError::InvalidConfiguration {
            body,
            ..
        }))) => assert_eq!(body, "SATURN"),
        other => panic!("expected SATURN to be rejected, got {other:?}"),
    }
}

#[test]
fn corrected_gigametre_table_derives_periods() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("bodies.yaml");
    fs::write(
        &path,
        r#"
- name: EARTH
  semi_major_axis: 149.6
  semi_minor_axis: 149.5791
  focal_distance: 2.5
  period_years: 1.0
  unit: gm
- name: SATURN
  semi_major_axis: 1433.5
  semi_minor_axis: 1431.3
  focal_distance: 79.2
  unit: gm
"#,
    )
    .unwrap();

    let scenario = Scenario::load(&path, None::<PathBuf>).expect("scenario");
    let saturn = scenario.catalog.get("saturn").expect("saturn");
    assert_relative_eq!(saturn.period(), (1433.5_f64 / 149.6).powf(1.5), epsilon = 1e-9);
    assert_relative_eq!(saturn.focal_distance(), 79.2 / 149.597_870_7, epsilon = 1e-9);
}
