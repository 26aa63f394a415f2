//! Unit tests for reporting utilities and problem files.

use salesmen::config::{Config, LoadAccounting};
use salesmen::error::RouteError;
use salesmen::problem::{Event, Problem};
use salesmen::solution::{Route, Solution, Stop};
use salesmen::utils::{format_duration, save_solution, save_solution_json, SearchStatistics};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Creates a simple test problem with two deliveries and one pickup.
fn create_test_problem() -> Problem {
    let deliveries = vec![Event::new(10.0, 0.0, 20.0), Event::new(10.0, 10.0, 30.0)];
    let pickups = vec![Event::new(0.0, 10.0, 10.0)];

    Problem::new("TestProblem".to_string(), deliveries, pickups, 100.0)
}

fn create_test_solution() -> Solution {
    Solution {
        route: Route::from_stops(vec![Stop::delivery(0), Stop::delivery(1), Stop::pickup(0)]),
        length: 40.0,
        is_valid: true,
        generations: 12,
        run_time: Duration::from_secs(65),
    }
}

/// A path in the temp directory unique to this test binary.
fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("salesmen_{}_{}", std::process::id(), name))
}

#[test]
fn test_format_duration() {
    // Test some sample durations
    let duration1 = Duration::from_secs(65);
    assert_eq!(format_duration(duration1), "0h 01m 05s");

    let duration2 = Duration::from_secs(3600 + 120 + 5);
    assert_eq!(format_duration(duration2), "1h 02m 05s");

    let duration3 = Duration::from_secs(7200 + 3600 + 900 + 30);
    assert_eq!(format_duration(duration3), "3h 15m 30s");
}

#[test]
fn test_route_display() {
    let solution = create_test_solution();

    assert_eq!(
        solution.route.to_string(),
        "depot -> d0 -> d1 -> p0 -> depot"
    );
}

#[test]
fn test_search_statistics() {
    let solution = create_test_solution();
    let config = Config::new().with_survival_rate(10).with_spawn_rate(5);

    let stats = SearchStatistics::new(&solution, &config).format();

    assert!(stats.contains("Generations: 12"));
    assert!(stats.contains("Runtime: 0h 01m 05s"));
    assert!(stats.contains("Best Route Length: 40.00"));
    assert!(stats.contains("Candidates per Generation: 60"));
}

#[test]
fn test_save_solution() {
    let problem = create_test_problem();
    let solution = create_test_solution();
    let path = temp_path("report.txt");

    save_solution(&solution, &problem, LoadAccounting::Shared, &path).unwrap();
    let content = fs::read_to_string(&path).unwrap();
    fs::remove_file(&path).unwrap();

    assert!(content.contains("Route for instance: TestProblem"));
    assert!(content.contains("Length: 40.00"));
    assert!(content.contains("Peak Load: 50.00 / 100.00"));
    assert_eq!(content.lines().filter(|l| l.contains("demand")).count(), 3);
}

#[test]
fn test_save_solution_json() {
    let solution = create_test_solution();
    let path = temp_path("solution.json");

    save_solution_json(&solution, &path).unwrap();
    let content = fs::read_to_string(&path).unwrap();
    fs::remove_file(&path).unwrap();

    let restored: Solution = serde_json::from_str(&content).unwrap();
    assert_eq!(restored.route, solution.route);
    assert!(content.contains("\"pickup\""));
}

#[test]
fn test_problem_file() {
    let problem = create_test_problem();
    let path = temp_path("problem.json");

    problem.save(&path).unwrap();
    let loaded = Problem::from_file(&path).unwrap();
    fs::remove_file(&path).unwrap();

    assert_eq!(loaded.name, problem.name);
    assert_eq!(loaded.deliveries, problem.deliveries);
    assert_eq!(loaded.pickups, problem.pickups);
    assert_eq!(loaded.van_capacity, problem.van_capacity);
}

#[test]
fn test_problem_file_rejects_zero_demand() {
    let mut problem = create_test_problem();
    problem.pickups.push(Event::new(1.0, 1.0, 0.0));
    let path = temp_path("zero_demand.json");

    problem.save(&path).unwrap();
    let result = Problem::from_file(&path);
    fs::remove_file(&path).unwrap();

    assert!(matches!(result, Err(RouteError::InvalidConfig(_))));
}

#[test]
fn test_problem_file_missing() {
    let result = Problem::from_file(temp_path("does_not_exist.json"));

    assert!(matches!(result, Err(RouteError::Io(_))));
}
