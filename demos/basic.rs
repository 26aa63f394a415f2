//! Basic example of using the salesmen library.

use salesmen::config::Config;
use salesmen::problem::Problem;
use salesmen::simulation::generate_events;
use salesmen::utils::{format_duration, print_solution_visualization, save_solution};
use std::env;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load a problem file if given, otherwise simulate one
    let args: Vec<String> = env::args().collect();
    let problem = if args.len() > 1 {
        println!("Loading problem from: {}", args[1]);
        Problem::from_file(&args[1])?
    } else {
        let (deliveries, pickups) = generate_events(200, 50, 100.0, 100.0, Some(42))?;
        Problem::new("demo".to_string(), deliveries, pickups, 200.0)
    };
    println!(
        "Loaded problem: {} with {} deliveries and {} pickups",
        problem.name,
        problem.deliveries.len(),
        problem.pickups.len()
    );

    // Configure algorithm
    let config = Config::new()
        .with_generations(200)
        .with_spawn_rate(5)
        .with_survival_rate(10)
        .with_routing_seed(7);

    // Create and run algorithm
    println!("Starting search ({} generations)", config.generations);
    let mut engine = salesmen::SearchEngine::new(problem.clone(), config.clone())?;
    let best_solution = engine.run()?;

    // Print results
    println!("Search completed in {}", format_duration(best_solution.run_time));
    println!("Best route length: {:.2}", best_solution.length);
    println!("Is valid: {}", best_solution.is_valid);
    println!("Number of stops: {}", best_solution.route.len());

    // Save solution
    let output_path = format!("{}.route", problem.name);
    println!("Saving route to: {}", output_path);
    save_solution(best_solution, &problem, config.load_accounting, &output_path)?;

    // Visualize solution
    print_solution_visualization(best_solution, &problem);

    Ok(())
}
