mod common;

use common::{single_tower, small_city, ScenarioBuilder};
use coverforge::api;
use coverforge::config::{SearchParams, SeedingStrategy};
use coverforge::core_types::FitnessScore;
use coverforge::error::CoverForgeError;
use coverforge::geometry::Position;
use coverforge::optimizer::runner::{breed, truncate_survivors};
use coverforge::optimizer::{FeasibleSet, OptimizationOptions, Optimizer, ProgressCallback, Silent};
use coverforge::scorer::Scorer;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

fn params(generations: usize, seed: u64) -> SearchParams {
    SearchParams {
        max_generations: generations,
        seed: Some(seed),
        ..Default::default()
    }
}

#[test]
fn test_single_tower_finds_optimum() {
    let result = api::solve(&single_tower(), &params(5, 1), Silent).expect("solve failed");
    assert_eq!(result.best, vec![Position::new(2, 2)]);
    assert_eq!(result.score, 150);
    assert_eq!(result.history.len(), 5);
}

#[test]
fn test_history_has_one_entry_per_generation() {
    let result = api::solve(&small_city(), &params(37, 9), Silent).unwrap();
    let gens: Vec<usize> = result.history.entries().iter().map(|e| e.generation).collect();
    assert_eq!(gens, (0..37).collect::<Vec<_>>());
}

#[test]
fn test_elitism_never_loses_the_leader() {
    let result = api::solve(&small_city(), &params(60, 4), Silent).unwrap();
    let bests: Vec<FitnessScore> = result.history.entries().iter().map(|e| e.best).collect();

    assert!(bests.windows(2).all(|w| w[0] <= w[1]), "history: {:?}", bests);
    assert!(result.score >= *bests.last().unwrap());
    assert_eq!(result.history.running_max(), bests);
}

#[test]
fn test_result_score_matches_evaluate() {
    let scenario = small_city();
    let result = api::solve(&scenario, &params(20, 11), Silent).unwrap();
    let scorer = Scorer::from_scenario(&scenario);
    assert_eq!(scorer.evaluate(&result.best), result.score);
}

#[test]
fn test_zero_antennas_refused() {
    let scenario = ScenarioBuilder::new(5, 5).building(1, 1, 1, 1).reward(5).build();
    let err = api::solve(&scenario, &params(3, 0), Silent).unwrap_err();
    assert!(matches!(err, CoverForgeError::Precondition(_)));
}

#[test]
fn test_empty_feasible_set_refused() {
    let scenario = ScenarioBuilder::new(5, 5).antenna(3, 3).reward(5).build();
    let err = api::solve(&scenario, &params(3, 0), Silent).unwrap_err();
    assert!(matches!(err, CoverForgeError::Precondition(_)));
}

#[test]
fn test_invalid_cap_refused() {
    let mut p = params(3, 0);
    p.population_cap = 1;
    let err = api::solve(&single_tower(), &p, Silent).unwrap_err();
    assert!(matches!(err, CoverForgeError::Config(_)));
}

struct StopAfter {
    limit: usize,
    calls: Arc<AtomicUsize>,
}

impl ProgressCallback for StopAfter {
    fn on_generation(&self, generation: usize, _: FitnessScore, _: &[Position]) -> bool {
        self.calls.fetch_add(1, Ordering::SeqCst);
        generation + 1 < self.limit
    }
}

#[test]
fn test_callback_can_stop_the_run() {
    let scenario = small_city();
    let scorer = Arc::new(Scorer::from_scenario(&scenario));
    let feasible = FeasibleSet::for_scorer(&scorer, &scenario.grid);
    let options = OptimizationOptions {
        max_generations: 100,
        seed: Some(5),
        ..Default::default()
    };

    let optimizer = Optimizer::new(scorer, feasible, options).unwrap();
    let calls = Arc::new(AtomicUsize::new(0));
    let result = optimizer.run(StopAfter {
        limit: 7,
        calls: calls.clone(),
    });

    assert_eq!(calls.load(Ordering::SeqCst), 7);
    assert_eq!(result.history.len(), 7);
    assert_eq!(result.score, result.history.last().unwrap().best);
}

#[test]
fn test_random_seeding_runs() {
    let mut p = params(15, 2);
    p.seeding = SeedingStrategy::Random;
    let scenario = small_city();
    let result = api::solve(&scenario, &p, Silent).unwrap();
    assert_eq!(result.best.len(), scenario.antennas.len());
}

#[test]
fn test_truncation_restores_even_size() {
    let mut ranked: Vec<(FitnessScore, Vec<Position>)> =
        (0..10).map(|i| (100 - i, vec![Position::new(i, 0)])).collect();

    truncate_survivors(&mut ranked, 8);

    // 10 -> 5 -> leader duplicated
    assert_eq!(ranked.len(), 6);
    assert_eq!(ranked[5], ranked[0]);
    assert_eq!(ranked[4].0, 96);
}

#[test]
fn test_truncation_respects_cap() {
    let mut ranked: Vec<(FitnessScore, Vec<Position>)> =
        (0..8).map(|i| (i, vec![Position::new(i, 0)])).collect();
    truncate_survivors(&mut ranked, 8);
    assert_eq!(ranked.len(), 8);
}

#[test]
fn test_breed_never_mutates_parents() {
    let scenario = small_city();
    let scorer = Scorer::from_scenario(&scenario);
    let feasible = FeasibleSet::for_scorer(&scorer, &scenario.grid);
    let mut rng = fastrand::Rng::with_seed(77);

    let p1: Vec<Position> = feasible.as_slice()[..4].to_vec();
    let p2: Vec<Position> = feasible.as_slice()[10..14].to_vec();

    for _ in 0..50 {
        let [a, b, c1, c2] = breed(p1.clone(), p2.clone(), &feasible, 1.0, &mut rng);
        assert_eq!(a, p1);
        assert_eq!(b, p2);
        assert_eq!(c1.len(), 4);
        assert_eq!(c2.len(), 4);
        assert!(c1.iter().chain(&c2).all(|p| feasible.contains(p)));
    }
}
