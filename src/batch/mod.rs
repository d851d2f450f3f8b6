//! Multi-solve harness.
//!
//! Runs one independent solve per seed against a shared, read-only
//! [`Instance`]. Each solve owns its configuration copy, generator,
//! sequence and cache, so a failing or slow solve never touches another.
//! With the `parallel` feature the solves run on the rayon worker pool;
//! outcomes always come back in seed order.
//!
//! Also exposes the presets of the classic experiment runs: the
//! exhaustive init × operator × pivot grid, the two VND orders and the
//! ILS strength by instance size.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::error::FlowshopError;
use crate::init::InitKind;
use crate::instance::Instance;
use crate::neighborhood::NeighborhoodKind;
use crate::search::{LocalSearchRunner, PivotRule, SolverConfig, SolverResult};

/// Outcome of one solve in a batch.
#[derive(Debug, Clone)]
pub struct BatchOutcome {
    /// Seed the solve ran with.
    pub seed: u64,
    pub result: Result<SolverResult, FlowshopError>,
}

impl BatchOutcome {
    /// Objective of a successful solve.
    pub fn objective(&self) -> Option<i64> {
        self.result.as_ref().ok().map(|r| r.objective)
    }
}

/// Runs a configuration once per seed.
#[derive(Debug, Clone)]
pub struct BatchRunner {
    /// Whether to run solves on the rayon pool. Ignored without the
    /// `parallel` feature.
    pub parallel: bool,
}

impl Default for BatchRunner {
    fn default() -> Self {
        Self { parallel: true }
    }
}

impl BatchRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Solves `instance` with `template`, once per seed in `seeds`.
    pub fn run(
        &self,
        instance: &Instance,
        template: &SolverConfig,
        seeds: &[u64],
    ) -> Vec<BatchOutcome> {
        tracing::debug!(
            solves = seeds.len(),
            jobs = instance.job_count(),
            parallel = self.parallel,
            "batch started"
        );

        let solve = |&seed: &u64| {
            let config = template.clone().with_seed(seed);
            let result = LocalSearchRunner::run(instance, &config);
            if let Err(err) = &result {
                tracing::warn!(seed, error = %err, "solve failed");
            }
            BatchOutcome { seed, result }
        };

        map_in_order(seeds, self.parallel, solve)
    }

    /// Solves `instance` once for each configuration, all with one seed.
    pub fn run_grid(
        &self,
        instance: &Instance,
        configs: &[SolverConfig],
        seed: u64,
    ) -> Vec<BatchOutcome> {
        tracing::debug!(
            solves = configs.len(),
            jobs = instance.job_count(),
            parallel = self.parallel,
            "grid started"
        );

        let solve = |config: &SolverConfig| {
            let config = config.clone().with_seed(seed);
            let result = LocalSearchRunner::run(instance, &config);
            if let Err(err) = &result {
                tracing::warn!(
                    seed,
                    init = %config.init,
                    pivot = %config.pivot,
                    error = %err,
                    "solve failed"
                );
            }
            BatchOutcome { seed, result }
        };

        map_in_order(configs, self.parallel, solve)
    }
}

#[cfg(feature = "parallel")]
fn map_in_order<T, F>(items: &[T], parallel: bool, solve: F) -> Vec<BatchOutcome>
where
    T: Sync,
    F: Fn(&T) -> BatchOutcome + Sync + Send,
{
    if parallel {
        items.par_iter().map(solve).collect()
    } else {
        items.iter().map(solve).collect()
    }
}

#[cfg(not(feature = "parallel"))]
fn map_in_order<T, F>(items: &[T], _parallel: bool, solve: F) -> Vec<BatchOutcome>
where
    F: Fn(&T) -> BatchOutcome,
{
    items.iter().map(solve).collect()
}

/// The successful outcome with the lowest objective (first one on ties).
pub fn best_outcome(outcomes: &[BatchOutcome]) -> Option<&BatchOutcome> {
    outcomes
        .iter()
        .filter(|o| o.result.is_ok())
        .min_by_key(|o| o.objective())
}

/// ILS strength used for the benchmark instance sizes.
pub fn perturbation_preset(jobs: usize) -> Option<usize> {
    match jobs {
        5 => Some(3),
        50 => Some(5),
        100 => Some(10),
        _ => None,
    }
}

/// Every initial constructor × single operator × improvement pivot,
/// derived from `base`.
pub fn experiment_grid(base: &SolverConfig) -> Vec<SolverConfig> {
    let mut grid = Vec::with_capacity(InitKind::ALL.len() * NeighborhoodKind::ALL.len() * 2);
    for init in InitKind::ALL {
        for kind in NeighborhoodKind::ALL {
            for pivot in [PivotRule::FirstImprovement, PivotRule::BestImprovement] {
                grid.push(
                    base.clone()
                        .with_init(init)
                        .with_neighborhood(kind)
                        .with_pivot(pivot),
                );
            }
        }
    }
    grid
}

/// The two VND orders (TEI, TIE) from the greedy constructor.
pub fn vnd_grid(base: &SolverConfig) -> Vec<SolverConfig> {
    [NeighborhoodKind::TEI, NeighborhoodKind::TIE]
        .into_iter()
        .map(|order| {
            base.clone()
                .with_init(InitKind::GreedyHeuristic)
                .with_neighborhoods(order)
        })
        .collect()
}
