//! Integration tests for the full route search.

use salesmen::config::{Config, LoadAccounting};
use salesmen::error::RouteError;
use salesmen::problem::{Event, EventKind, Problem};
use salesmen::validator::{simulate_load, validate_length_one_pickup};
use salesmen::{single_best, SearchEngine};
use std::collections::HashSet;

/// Creates a moderate size test problem with 20 deliveries and 5 pickups.
fn create_moderate_problem() -> Problem {
    let mut deliveries = Vec::new();

    // 20 deliveries in a grid pattern around the depot
    for i in 0..4 {
        for j in 0..5 {
            let x = i as f64 * 20.0 - 30.0;
            let y = j as f64 * 20.0 - 40.0;
            deliveries.push(Event::new(x, y, 10.0));
        }
    }

    let pickups = vec![
        Event::new(15.0, 25.0, 10.0),
        Event::new(-25.0, 5.0, 10.0),
        Event::new(45.0, -45.0, 20.0),
        Event::new(-5.0, -35.0, 10.0),
        Event::new(30.0, 30.0, 10.0),
    ];

    Problem::new("ModerateTestProblem".to_string(), deliveries, pickups, 100.0)
}

fn create_test_config() -> Config {
    Config::new()
        .with_generations(30)
        .with_spawn_rate(4)
        .with_survival_rate(8)
        .with_routing_seed(2024)
}

#[test]
fn test_engine_initialization() {
    let problem = create_moderate_problem();
    let config = create_test_config();

    let mut engine = SearchEngine::new(problem, config).unwrap();
    engine.initialize();

    // Population should be initialized
    assert_eq!(engine.population.get_pop_size(), 8);
    assert_eq!(engine.generation, 0);
    assert!(engine.best_solution.is_none());
}

#[test]
fn test_engine_short_run() {
    let problem = create_moderate_problem();
    let config = create_test_config();

    let mut engine = SearchEngine::new(problem.clone(), config).unwrap();
    let solution = engine.run().unwrap().clone();

    // Solution should be valid and respect the van capacity
    assert!(solution.is_valid);
    assert!(solution.length > 0.0);
    assert_eq!(solution.generations, 30);
    assert!(simulate_load(&solution.route, &problem, LoadAccounting::DeliveriesOnly).is_ok());

    // The reported length matches the validator
    let (length, one_pickup) =
        validate_length_one_pickup(&solution.route, &problem.deliveries, &problem.pickups);
    assert!((length - solution.length).abs() < 1e-9);
    assert!(one_pickup);

    // No event visited twice
    let stops: HashSet<_> = solution.route.stops.iter().collect();
    assert_eq!(stops.len(), solution.route.len());

    assert!(engine.best_solution.is_some());
}

#[test]
fn test_single_best_deterministic() {
    let problem = create_moderate_problem();
    let config = create_test_config();

    let solution1 = single_best(&problem, &config).unwrap();
    let solution2 = single_best(&problem, &config).unwrap();

    assert_eq!(solution1.route, solution2.route);
    assert_eq!(solution1.length, solution2.length);
}

#[test]
fn test_parallel_matches_sequential() {
    let problem = create_moderate_problem();
    let config = create_test_config();

    let sequential = single_best(&problem, &config).unwrap();
    let parallel = single_best(&problem, &config.clone().with_parallel(true)).unwrap();

    assert_eq!(sequential.route, parallel.route);
    assert_eq!(sequential.length, parallel.length);
}

#[test]
fn test_search_never_gets_worse() {
    let problem = create_moderate_problem();
    let config = create_test_config();

    // With the same seed both runs start from the same population
    let initial = single_best(&problem, &config.clone().with_generations(0)).unwrap();
    let evolved = single_best(&problem, &config.clone().with_generations(60)).unwrap();

    assert!(initial.is_valid);
    assert!(evolved.is_valid);
    assert!(evolved.length <= initial.length + 1e-9);
}

#[test]
fn test_shared_load_accounting() {
    let problem = create_moderate_problem();
    let config = create_test_config().with_load_accounting(LoadAccounting::Shared);

    let solution = single_best(&problem, &config).unwrap();

    assert!(solution.is_valid);
    assert!(simulate_load(&solution.route, &problem, LoadAccounting::Shared).is_ok());

    // Deliveries and the pickup share the 100 units of capacity
    let total: f64 = solution
        .route
        .stops
        .iter()
        .map(|stop| problem.event(stop).unwrap().demand)
        .sum();
    assert!(total <= problem.van_capacity + 1e-9);
}

#[test]
fn test_invalid_survival_rate() {
    let problem = create_moderate_problem();
    let config = create_test_config().with_survival_rate(0);

    match SearchEngine::new(problem, config) {
        Err(RouteError::InvalidConfig(_)) => {}
        Err(other) => panic!("unexpected error {}", other),
        Ok(_) => panic!("a survival rate of 0 must be rejected"),
    }
}

#[test]
fn test_zero_spawn_rate_keeps_initial_population() {
    let problem = create_moderate_problem();
    let config = create_test_config().with_spawn_rate(0);

    let initial = single_best(&problem, &config.clone().with_generations(0)).unwrap();
    let evolved = single_best(&problem, &config).unwrap();

    assert_eq!(initial.route, evolved.route);
}

#[test]
fn test_without_pickups() {
    let mut problem = create_moderate_problem();
    problem.pickups.clear();
    let config = create_test_config().with_generations(5);

    // No valid route exists, but the search still answers
    let solution = single_best(&problem, &config).unwrap();

    assert!(!solution.is_valid);
    assert!(solution
        .route
        .stops
        .iter()
        .all(|stop| stop.kind == EventKind::Delivery));
}

#[test]
fn test_without_deliveries() {
    let mut problem = create_moderate_problem();
    problem.deliveries.clear();
    let config = create_test_config().with_generations(5);

    let solution = single_best(&problem, &config).unwrap();

    assert!(solution.route.is_empty());
    assert_eq!(solution.length, 0.0);
    assert!(!solution.is_valid);
}

#[test]
fn test_zero_capacity() {
    let mut problem = create_moderate_problem();
    problem.van_capacity = 0.0;
    let config = create_test_config().with_generations(5);

    let solution = single_best(&problem, &config).unwrap();

    assert!(solution.route.is_empty());
    assert_eq!(solution.length, 0.0);
}
