use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use salesmen::config::{Config, LoadAccounting};
use salesmen::problem::Problem;
use salesmen::simulation::generate_events;
use salesmen::utils::{
    format_duration, print_solution_visualization, save_solution_json, SearchStatistics,
};
use salesmen::SearchEngine;

/// Search a short route for a delivery van serving deliveries and one pickup.
#[derive(Parser, Debug)]
#[command(about, version, author)]
struct Args {
    /// Load the events from a JSON problem file instead of simulating them
    #[arg(long)]
    problem: Option<PathBuf>,

    /// Number of delivery points to generate
    #[arg(long, default_value_t = 200, help_heading = "Simulation")]
    number_deliveries: usize,

    /// Number of pickup points to generate
    #[arg(long, default_value_t = 50, help_heading = "Simulation")]
    number_pickups: usize,

    /// Maximum distance from the depot in x direction to generate an event
    #[arg(long, default_value_t = 100.0, help_heading = "Simulation")]
    region_extent_x: f64,

    /// Maximum distance from the depot in y direction to generate an event
    #[arg(long, default_value_t = 100.0, help_heading = "Simulation")]
    region_extent_y: f64,

    /// Seed for the simulation of delivery and pickup events
    #[arg(long, help_heading = "Simulation")]
    simulation_seed: Option<u64>,

    /// Capacity of the van; a higher capacity serves more delivery points
    #[arg(long, default_value_t = 200.0, help_heading = "Routing")]
    van_capacity: f64,

    /// Seed for the randomness in the routing
    #[arg(long, help_heading = "Routing")]
    routing_seed: Option<u64>,

    /// Number of generations to evolve
    #[arg(long, default_value_t = 100, help_heading = "Routing")]
    generations: usize,

    /// Children spawned per survivor and generation
    #[arg(long, default_value_t = 5, help_heading = "Routing")]
    spawn_rate: usize,

    /// Routes surviving each generation
    #[arg(long, default_value_t = 10, help_heading = "Routing")]
    survival_rate: usize,

    /// Charge the pickup demand against the van capacity as well
    #[arg(long, help_heading = "Routing")]
    shared_load: bool,

    /// Build children in parallel
    #[arg(long, help_heading = "Routing")]
    parallel: bool,

    /// Write the best route as JSON
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print the route on a character grid
    #[arg(long)]
    plot: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let problem = match &args.problem {
        Some(path) => Problem::from_file(path)
            .with_context(|| format!("failed to load problem from {}", path.display()))?,
        None => {
            let (deliveries, pickups) = generate_events(
                args.number_deliveries,
                args.number_pickups,
                args.region_extent_x,
                args.region_extent_y,
                args.simulation_seed,
            )
            .context("failed to simulate events")?;
            Problem::new("simulated".to_string(), deliveries, pickups, args.van_capacity)
        }
    };
    info!(
        "problem {}: {} deliveries, {} pickups, van capacity {}",
        problem.name,
        problem.deliveries.len(),
        problem.pickups.len(),
        problem.van_capacity
    );

    let accounting = if args.shared_load {
        LoadAccounting::Shared
    } else {
        LoadAccounting::DeliveriesOnly
    };
    let mut config = Config::new()
        .with_generations(args.generations)
        .with_spawn_rate(args.spawn_rate)
        .with_survival_rate(args.survival_rate)
        .with_load_accounting(accounting)
        .with_parallel(args.parallel);
    if let Some(seed) = args.routing_seed {
        config = config.with_routing_seed(seed);
    }

    let mut engine = SearchEngine::new(problem.clone(), config.clone())?;
    let solution = engine.run()?;

    println!("Search completed in {}", format_duration(solution.run_time));
    println!("{:?}", solution);
    println!("{}", SearchStatistics::new(solution, &config).format());

    if args.plot {
        print_solution_visualization(solution, &problem);
    }

    if let Some(path) = &args.output {
        save_solution_json(solution, path)
            .with_context(|| format!("failed to write solution to {}", path.display()))?;
        info!("solution written to {}", path.display());
    }

    Ok(())
}
