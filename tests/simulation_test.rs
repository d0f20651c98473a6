//! End-to-end simulation runs through the public library API

use bridge_sim::simulation::{DwellTime, SimConfig, SimWorld};

/// The reference scenario (4 cars each way, 2 pedestrians) with timings
/// scaled down so the test finishes quickly.
fn fast_config() -> SimConfig {
    SimConfig {
        cars_per_direction: 4,
        pedestrians: 2,
        car_arrival_mean: 0.05,
        ped_arrival_mean: 0.1,
        car_dwell: DwellTime::new(0.05, 0.02),
        ped_dwell: DwellTime::new(0.05, 0.05),
        seed: Some(7),
    }
}

#[test]
fn test_full_scenario_runs_to_completion() {
    let world = SimWorld::new(fast_config()).expect("config is valid");
    let report = world.run().expect("simulation run");

    assert_eq!(report.cars_north_crossed, 4);
    assert_eq!(report.cars_south_crossed, 4);
    assert_eq!(report.pedestrians_crossed, 2);
    assert_eq!(report.total_crossings(), 10);

    // Everyone left: the bridge ends empty.
    let final_state = report.final_state;
    assert_eq!(final_state.cars_north, 0);
    assert_eq!(final_state.cars_south, 0);
    assert_eq!(final_state.pedestrians, 0);

    // One enter and one leave per entity.
    assert_eq!(final_state.requests, 20);
}

#[test]
fn test_unseeded_run_completes() {
    let mut config = fast_config();
    config.seed = None;
    let report = SimWorld::new(config)
        .expect("config is valid")
        .run()
        .expect("simulation run");
    assert_eq!(report.total_crossings(), 10);
}

#[test]
fn test_rejects_nonpositive_arrival_mean() {
    let mut config = SimConfig::default();
    config.car_arrival_mean = 0.0;
    assert!(SimWorld::new(config).is_err());

    let mut config = SimConfig::default();
    config.ped_arrival_mean = f64::NAN;
    assert!(SimWorld::new(config).is_err());
}

#[test]
fn test_rejects_invalid_dwell_parameters() {
    let mut config = SimConfig::default();
    config.car_dwell = DwellTime::new(1.0, -0.5);
    assert!(SimWorld::new(config).is_err());

    let mut config = SimConfig::default();
    config.ped_dwell = DwellTime::new(f64::INFINITY, 1.0);
    assert!(SimWorld::new(config).is_err());
}

#[test]
fn test_default_config_matches_reference_timings() {
    let config = SimConfig::default();
    assert_eq!(config.cars_per_direction, 4);
    assert_eq!(config.pedestrians, 2);
    assert_eq!(config.car_arrival_mean, 0.5);
    assert_eq!(config.ped_arrival_mean, 5.0);
    assert_eq!(config.car_dwell, DwellTime::new(1.0, 0.5));
    assert_eq!(config.ped_dwell, DwellTime::new(2.0, 3.0));
    assert!(config.seed.is_none());
    assert!(config.validate().is_ok());
}
