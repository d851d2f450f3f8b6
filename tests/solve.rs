//! End-to-end solves through the public API.

use std::time::Duration;

use u_flowshop::batch::{best_outcome, experiment_grid, BatchRunner};
use u_flowshop::init::InitKind;
use u_flowshop::instance::{parse_instance, Instance};
use u_flowshop::neighborhood::NeighborhoodKind;
use u_flowshop::search::{LocalSearchRunner, MemoryMode, PivotRule, SolverConfig, TimeBudget};
use u_flowshop::{FlowshopError, Sequence};

const TEN_JOBS: &str = "\
10 3
1 12 2 7 3 19
1 4 2 15 3 6
1 9 2 9 3 11
1 17 2 3 3 8
1 6 2 12 3 14
1 14 2 5 3 3
1 2 2 18 3 10
1 11 2 8 3 7
1 8 2 13 3 16
1 15 2 6 3 4
Reldue
-1 40 -1 3
-1 55 -1 1
-1 30 -1 2
-1 90 -1 5
-1 60 -1 1
-1 75 -1 4
-1 45 -1 2
-1 100 -1 3
-1 85 -1 1
-1 70 -1 2
";

fn instance() -> Instance {
    parse_instance(TEN_JOBS).unwrap()
}

fn config() -> SolverConfig {
    SolverConfig::default().with_time_budget(TimeBudget::uniform(Duration::from_secs(60)))
}

#[test]
fn test_fixed_seed_is_deterministic() {
    let inst = instance();
    for pivot in [PivotRule::FirstImprovement, PivotRule::BestImprovement] {
        for init in InitKind::ALL {
            let config = config()
                .with_init(init)
                .with_pivot(pivot)
                .with_neighborhoods(NeighborhoodKind::TEI)
                .with_random_ties(true)
                .with_seed(1234);
            let a = LocalSearchRunner::run(&inst, &config).unwrap();
            let b = LocalSearchRunner::run(&inst, &config).unwrap();
            assert_eq!(a.sequence, b.sequence);
            assert_eq!(a.objective, b.objective);
            assert_eq!(a.neighbors_evaluated, b.neighbors_evaluated);
        }
    }
}

#[test]
fn test_memoization_is_transparent() {
    let inst = instance();
    let pivots = [
        (PivotRule::FirstImprovement, 0),
        (PivotRule::BestImprovement, 0),
        (PivotRule::SimulatedAnnealing, 40),
    ];
    for (pivot, limit) in pivots {
        let base = config()
            .with_pivot(pivot)
            .with_annealing_limit(limit)
            .with_neighborhoods(NeighborhoodKind::TIE)
            .with_random_ties(true)
            .with_seed(77);
        let plain = LocalSearchRunner::run(&inst, &base.clone().with_memory(MemoryMode::None))
            .unwrap();
        for memory in [MemoryMode::HashMap, MemoryMode::OrderedMap] {
            let cached = LocalSearchRunner::run(&inst, &base.clone().with_memory(memory)).unwrap();
            assert_eq!(cached.sequence, plain.sequence, "{pivot} / {memory}");
            assert_eq!(cached.objective, plain.objective, "{pivot} / {memory}");
            assert_eq!(cached.neighbors_evaluated, plain.neighbors_evaluated);
            assert_eq!(
                cached.cache_size as u64 + cached.cache_hits,
                cached.neighbors_evaluated
            );
        }
        assert_eq!(plain.cache_size, 0);
        assert_eq!(plain.cache_hits, 0);
    }
}

#[test]
fn test_two_jobs_converge_in_first_round() {
    let inst = Instance::new(vec![vec![1, 1], vec![1, 1]], vec![10, 10], vec![1, 1]).unwrap();
    let config = SolverConfig::default()
        .with_neighborhoods(NeighborhoodKind::TEI)
        .with_time_budget(TimeBudget::default().with_entry(2, Duration::from_secs(5)));
    let result = LocalSearchRunner::run(&inst, &config).unwrap();
    assert_eq!(result.objective, 0);
    assert_eq!(result.rounds, 1);
    assert!(!result.timed_out);
}

#[test]
fn test_greedy_start_never_worse_after_search() {
    let inst = instance();
    let greedy = config().with_init(InitKind::GreedyHeuristic);
    for order in [NeighborhoodKind::TEI, NeighborhoodKind::TIE] {
        let result = LocalSearchRunner::run(&inst, &greedy.clone().with_neighborhoods(order))
            .unwrap();
        assert!(result.objective <= result.initial_objective);
        assert_eq!(inst.tardiness(&result.sequence), result.objective);
    }
}

#[test]
fn test_evaluate_reports_consistent_metrics() {
    let inst = instance();
    let result = LocalSearchRunner::run(&inst, &config().with_seed(5)).unwrap();
    let metrics = inst.evaluate(&result.sequence).unwrap();
    assert_eq!(metrics.tardiness, result.objective);
    assert_eq!(metrics.completion_times.len(), 11);
    assert_eq!(metrics.makespan, *metrics.completion_times.last().unwrap());
}

#[test]
fn test_config_errors_surface_before_search() {
    let inst = instance();

    let too_strong = config().with_perturbation_strength(11);
    assert!(matches!(
        LocalSearchRunner::run(&inst, &too_strong),
        Err(FlowshopError::Config(_))
    ));

    let no_budget = SolverConfig::default();
    let err = LocalSearchRunner::run(&inst, &no_budget).unwrap_err();
    assert!(err.to_string().contains("10 jobs"));
}

#[test]
fn test_run_from_given_sequence() {
    let inst = instance();
    let start = Sequence::from_jobs([10, 9, 8, 7, 6, 5, 4, 3, 2, 1]).unwrap();
    let config = config().with_neighborhoods(NeighborhoodKind::TIE);
    let result = LocalSearchRunner::run_from(&inst, &config, start.clone()).unwrap();
    assert_eq!(result.initial_objective, inst.tardiness(&start));
    assert!(result.objective <= result.initial_objective);
}

#[test]
fn test_batch_over_grid() {
    let inst = instance();
    let grid = experiment_grid(&config());
    let outcomes = BatchRunner::new().run_grid(&inst, &grid, 3);
    assert_eq!(outcomes.len(), 12);
    let best = best_outcome(&outcomes).unwrap();
    for o in &outcomes {
        assert!(best.objective() <= o.objective());
    }
}
