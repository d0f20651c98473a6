use clap::Parser;

use bridge_sim::simulation::{DwellTime, SimConfig, SimWorld};

#[derive(Parser)]
#[command(name = "bridge_sim")]
#[command(about = "Single-lane bridge crossing simulation")]
struct Cli {
    /// Number of cars spawned in each direction
    #[arg(long, default_value = "4")]
    cars: u32,

    /// Number of pedestrians spawned
    #[arg(long, default_value = "2")]
    pedestrians: u32,

    /// Mean seconds between car arrivals, per direction
    #[arg(long, default_value = "0.5")]
    car_interval: f64,

    /// Mean seconds between pedestrian arrivals
    #[arg(long, default_value = "5.0")]
    ped_interval: f64,

    /// Mean seconds a car spends on the bridge
    #[arg(long, default_value = "1.0")]
    car_dwell: f64,

    /// Standard deviation of car time on the bridge
    #[arg(long, default_value = "0.5")]
    car_dwell_std: f64,

    /// Mean seconds a pedestrian spends on the bridge
    #[arg(long, default_value = "2.0")]
    ped_dwell: f64,

    /// Standard deviation of pedestrian time on the bridge
    #[arg(long, default_value = "3.0")]
    ped_dwell_std: f64,

    /// Seed for reproducible runs
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = SimConfig {
        cars_per_direction: cli.cars,
        pedestrians: cli.pedestrians,
        car_arrival_mean: cli.car_interval,
        ped_arrival_mean: cli.ped_interval,
        car_dwell: DwellTime::new(cli.car_dwell, cli.car_dwell_std),
        ped_dwell: DwellTime::new(cli.ped_dwell, cli.ped_dwell_std),
        seed: cli.seed,
    };

    println!("Running bridge crossing simulation...");
    println!(
        "Cars per direction: {}, pedestrians: {}",
        config.cars_per_direction, config.pedestrians
    );
    println!(
        "Car arrivals every {:.2}s on average, pedestrians every {:.2}s",
        config.car_arrival_mean, config.ped_arrival_mean
    );
    println!();

    let world = SimWorld::new(config)?;
    let report = world.run()?;

    println!();
    report.print_summary();
    Ok(())
}
