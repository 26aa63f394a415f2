//! Formatting, saving and console output of search results.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::Duration;

use crate::config::{Config, LoadAccounting};
use crate::error::RouteError;
use crate::problem::{EventKind, Problem, DEPOT};
use crate::solution::Solution;
use crate::validator::simulate_load;

/// Format a duration as hours, minutes, and seconds.
pub fn format_duration(duration: Duration) -> String {
    let total_seconds = duration.as_secs();
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    format!("{}h {:02}m {:02}s", hours, minutes, seconds)
}

/// Save a human readable report of a solution.
pub fn save_solution<P: AsRef<Path>>(
    solution: &Solution,
    problem: &Problem,
    accounting: LoadAccounting,
    path: P,
) -> Result<(), RouteError> {
    let mut file = BufWriter::new(File::create(path)?);
    let peak_load = simulate_load(&solution.route, problem, accounting)?;

    writeln!(file, "Route for instance: {}", problem.name)?;
    writeln!(file, "Length: {:.2}", solution.length)?;
    writeln!(file, "Valid: {}", solution.is_valid)?;
    writeln!(file, "Peak Load: {:.2} / {:.2}", peak_load, problem.van_capacity)?;
    writeln!(file, "Stops: {}", solution.route.len())?;
    writeln!(file)?;

    for (position, stop) in solution.route.stops.iter().enumerate() {
        match problem.event(stop) {
            Some(event) => writeln!(
                file,
                "{:>4}  {}{:<5} ({:>8.2}, {:>8.2})  demand {:.0}",
                position + 1,
                stop.kind.tag(),
                stop.index,
                event.x,
                event.y,
                event.demand
            )?,
            None => writeln!(
                file,
                "{:>4}  {}{:<5} unknown",
                position + 1,
                stop.kind.tag(),
                stop.index
            )?,
        }
    }

    file.flush()?;
    Ok(())
}

/// Save a solution as JSON.
pub fn save_solution_json<P: AsRef<Path>>(solution: &Solution, path: P) -> Result<(), RouteError> {
    let writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(writer, solution)?;
    Ok(())
}

/// Statistics about a finished search.
pub struct SearchStatistics {
    pub generations: usize,
    pub runtime: Duration,
    pub best_length: f64,
    pub best_is_valid: bool,
    pub best_stops: usize,
    pub survival_rate: usize,
    pub spawn_rate: usize,
}

impl SearchStatistics {
    pub fn new(solution: &Solution, config: &Config) -> Self {
        SearchStatistics {
            generations: solution.generations,
            runtime: solution.run_time,
            best_length: solution.length,
            best_is_valid: solution.is_valid,
            best_stops: solution.route.len(),
            survival_rate: config.survival_rate,
            spawn_rate: config.spawn_rate,
        }
    }

    /// Format the statistics as a string.
    pub fn format(&self) -> String {
        format!(
            "Search Statistics:
- Generations: {}
- Runtime: {}
- Best Route Length: {:.2}
- Best Route Valid: {}
- Best Route Stops: {}
- Candidates per Generation: {}",
            self.generations,
            format_duration(self.runtime),
            self.best_length,
            self.best_is_valid,
            self.best_stops,
            self.survival_rate * (self.spawn_rate + 1)
        )
    }
}

/// Print the route on a coarse character grid.
pub fn print_solution_visualization(solution: &Solution, problem: &Problem) {
    println!("Route Visualization for {}", problem.name);
    println!("Length: {:.2}", solution.length);
    println!("Stops: {}", solution.route.len());
    println!();

    // Bounding box over every event and the depot
    let mut min_x = DEPOT.0;
    let mut min_y = DEPOT.1;
    let mut max_x = DEPOT.0;
    let mut max_y = DEPOT.1;

    for event in problem.deliveries.iter().chain(problem.pickups.iter()) {
        min_x = min_x.min(event.x);
        min_y = min_y.min(event.y);
        max_x = max_x.max(event.x);
        max_y = max_y.max(event.y);
    }

    let width: usize = 80;
    let height: usize = 25;
    let span_x = (max_x - min_x).max(f64::EPSILON);
    let span_y = (max_y - min_y).max(f64::EPSILON);
    let cell = |x: f64, y: f64| {
        let col = ((x - min_x) / span_x * (width as f64 - 1.0)) as usize;
        let row = ((max_y - y) / span_y * (height as f64 - 1.0)) as usize;
        (row.min(height - 1), col.min(width - 1))
    };

    let mut grid = vec![vec![' '; width]; height];

    // Unvisited events
    for event in &problem.deliveries {
        let (row, col) = cell(event.x, event.y);
        grid[row][col] = '.';
    }
    for event in &problem.pickups {
        let (row, col) = cell(event.x, event.y);
        grid[row][col] = 'o';
    }

    // Visited events
    for stop in &solution.route.stops {
        if let Some(event) = problem.event(stop) {
            let (row, col) = cell(event.x, event.y);
            grid[row][col] = match stop.kind {
                EventKind::Delivery => '*',
                EventKind::Pickup => 'P',
            };
        }
    }

    let (row, col) = cell(DEPOT.0, DEPOT.1);
    grid[row][col] = 'D';

    for row in &grid {
        println!("{}", row.iter().collect::<String>());
    }
    println!();

    println!("Legend:");
    println!("D - Depot");
    println!("* - Delivery on route");
    println!("P - Pickup on route");
    println!(". - Delivery not served");
    println!("o - Pickup not served");
    println!();
}
