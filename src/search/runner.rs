//! Local-search execution engine.
//!
//! # Algorithm
//!
//! 1. Build the initial sequence and take its tardiness as the incumbent.
//! 2. While the time budget lasts and the previous round made progress:
//!    a. For each operator in VND order, generate the neighborhood of the
//!       current search position and scan it (in random order under
//!       simulated annealing), accepting strictly better candidates and,
//!       with random ties enabled, equal ones on a coin flip.
//!       First improvement stops at the first accepted candidate; best
//!       improvement scans everything.
//!    b. Under simulated annealing, if nothing improved and the annealing
//!       budget allows, move the search position by Metropolis draw.
//!    c. With ILS enabled, rotate a random subset of positions of the best
//!       sequence; keep it if strictly better, otherwise restart from the
//!       best. Either way the round counts as progress.
//!    d. As soon as any of the above made progress, start a new round from
//!       the first operator.
//! 3. Return the best sequence and the search telemetry.
//!
//! # References
//!
//! - Hansen, P. & Mladenović, N. (2001), "Variable neighborhood search:
//!   Principles and applications"
//! - Lourenço, Martin & Stützle (2003), "Iterated Local Search"
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"

use std::fmt;
use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use super::anneal::Annealing;
use super::cache::EvaluationCache;
use super::config::{PivotRule, SolverConfig};
use super::perturb::rotate_random_positions;
use crate::error::{BoundsError, FlowshopError};
use crate::instance::Instance;
use crate::sequence::Sequence;

/// Result of one local-search solve.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolverResult {
    /// Best sequence found.
    pub sequence: Sequence,

    /// Total weighted tardiness of `sequence`.
    pub objective: i64,

    /// Tardiness of the initial sequence.
    pub initial_objective: i64,

    /// Wall-clock time spent.
    pub elapsed: Duration,

    /// Time budget the solve ran under.
    pub time_limit: Duration,

    /// Whether the solve stopped because the budget ran out.
    pub timed_out: bool,

    /// Outer rounds started.
    pub rounds: u64,

    /// Neighborhoods generated.
    pub neighborhoods_explored: u64,

    /// Candidates evaluated (cached or not).
    pub neighbors_evaluated: u64,

    /// Temperature at the start of the solve.
    pub initial_temperature: f64,

    /// Temperature when the solve stopped.
    pub final_temperature: f64,

    /// Annealing fallback moves taken.
    pub annealing_steps: usize,

    /// Perturbations that improved the best sequence.
    pub perturbations_accepted: usize,

    /// Sequences held by the evaluation cache.
    pub cache_size: usize,

    /// Evaluations answered from the cache.
    pub cache_hits: u64,
}

impl fmt::Display for SolverResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "best solution: {}", self.sequence)?;
        writeln!(f, "objective function score: {}", self.objective)?;
        writeln!(f, "duration (ms): {}", self.elapsed.as_millis())?;
        writeln!(f, "max duration (ms): {}", self.time_limit.as_millis())?;
        writeln!(f, "initial annealing temp: {}", self.initial_temperature)?;
        writeln!(f, "final annealing temp: {}", self.final_temperature)?;
        writeln!(f, "annealing steps: {}", self.annealing_steps)?;
        writeln!(f, "neighbours tested: {}", self.neighbors_evaluated)?;
        writeln!(f, "neighbourhoods tested: {}", self.neighborhoods_explored)?;
        writeln!(f, "neighbours stored in memory: {}", self.cache_size)?;
        write!(f, "neighbours retrieved from memory: {}", self.cache_hits)
    }
}

/// Runs the VND / simulated-annealing / ILS search.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use u_flowshop::instance::Instance;
/// use u_flowshop::search::{LocalSearchRunner, SolverConfig, TimeBudget};
///
/// let instance = Instance::new(
///     vec![vec![3, 2], vec![1, 4], vec![2, 1]],
///     vec![6, 4, 10],
///     vec![1, 2, 3],
/// )
/// .unwrap();
/// let config = SolverConfig::default()
///     .with_time_budget(TimeBudget::uniform(Duration::from_secs(1)))
///     .with_seed(42);
///
/// let result = LocalSearchRunner::run(&instance, &config).unwrap();
/// assert!(result.objective <= result.initial_objective);
/// ```
pub struct LocalSearchRunner;

impl LocalSearchRunner {
    /// Solves `instance` from the configured initial constructor.
    ///
    /// Configuration problems (including a job count without a time
    /// budget) are reported before any search work starts.
    #[tracing::instrument(
        level = "debug",
        name = "local search",
        skip_all,
        fields(jobs = instance.job_count(), seed = config.seed)
    )]
    pub fn run(instance: &Instance, config: &SolverConfig) -> Result<SolverResult, FlowshopError> {
        let time_limit = config.validate_for(instance.job_count())?;
        let start = Instant::now();
        let mut rng = StdRng::seed_from_u64(config.seed);

        let initial = config.init.build(instance, config.random_ties, &mut rng);
        Ok(search(instance, config, initial, time_limit, start, &mut rng))
    }

    /// Solves `instance` starting from a caller-supplied sequence.
    pub fn run_from(
        instance: &Instance,
        config: &SolverConfig,
        initial: Sequence,
    ) -> Result<SolverResult, FlowshopError> {
        let time_limit = config.validate_for(instance.job_count())?;
        if initial.job_count() != instance.job_count() {
            return Err(BoundsError::Sequence(format!(
                "initial sequence has {} jobs, instance has {}",
                initial.job_count(),
                instance.job_count()
            ))
            .into());
        }
        initial.check()?;

        let start = Instant::now();
        let mut rng = StdRng::seed_from_u64(config.seed);
        Ok(search(instance, config, initial, time_limit, start, &mut rng))
    }
}

fn search<R: Rng>(
    instance: &Instance,
    config: &SolverConfig,
    initial: Sequence,
    time_limit: Duration,
    start: Instant,
    rng: &mut R,
) -> SolverResult {
    let annealing_enabled = config.pivot == PivotRule::SimulatedAnnealing;

    let mut best_cost = instance.tardiness(&initial);
    let initial_objective = best_cost;
    let mut best = initial;
    let mut current = best.clone();

    let mut cache = EvaluationCache::new(config.memory);
    let mut annealing = Annealing::new(best_cost, config);

    let mut rounds = 0u64;
    let mut neighborhoods_explored = 0u64;
    let mut neighbors_evaluated = 0u64;
    let mut perturbations_accepted = 0usize;
    let mut timed_out = false;

    tracing::debug!(
        objective = best_cost,
        memory = %cache.mode(),
        time_limit_ms = time_limit.as_millis() as u64,
        temperature = annealing.temperature(),
        "search started"
    );

    let mut progress = true;
    while progress {
        if start.elapsed() >= time_limit {
            timed_out = true;
            break;
        }
        progress = false;
        rounds += 1;

        for &kind in &config.neighborhoods {
            let candidates = kind.generate(&current);
            neighborhoods_explored += 1;

            let mut order: Vec<usize> = (0..candidates.len()).collect();
            if annealing_enabled {
                order.shuffle(rng);
            }
            let mut scores = vec![0i64; candidates.len()];

            for &idx in &order {
                neighbors_evaluated += 1;
                let cost = cache.tardiness(instance, &candidates[idx]);
                scores[idx] = cost;

                let accept = cost < best_cost
                    || (config.random_ties && cost == best_cost && rng.random_bool(0.5));
                if accept {
                    best_cost = cost;
                    best = candidates[idx].clone();
                    current = best.clone();
                    annealing.reset();
                    progress = true;
                    tracing::trace!(neighborhood = %kind, objective = cost, "accepted");
                    if config.pivot == PivotRule::FirstImprovement {
                        break;
                    }
                }
            }

            if annealing_enabled && !progress && annealing.has_budget() {
                if let Some(idx) = annealing.step(&scores, best_cost, rng) {
                    current = candidates[idx].clone();
                    progress = true;
                    tracing::trace!(
                        objective = scores[idx],
                        temperature = annealing.temperature(),
                        "annealing move"
                    );
                }
            }

            if config.perturbation_enabled() {
                let perturbed = rotate_random_positions(&best, config.perturbation_strength, rng);
                let cost = instance.tardiness(&perturbed);
                if cost < best_cost {
                    best = perturbed;
                    best_cost = cost;
                    perturbations_accepted += 1;
                    tracing::trace!(objective = cost, "perturbation accepted");
                }
                current = best.clone();
                progress = true;
            }

            if progress {
                break;
            }
        }
    }

    let elapsed = start.elapsed();
    tracing::debug!(
        objective = best_cost,
        rounds,
        neighbors_evaluated,
        elapsed_ms = elapsed.as_millis() as u64,
        timed_out,
        "search finished"
    );

    SolverResult {
        sequence: best,
        objective: best_cost,
        initial_objective,
        elapsed,
        time_limit,
        timed_out,
        rounds,
        neighborhoods_explored,
        neighbors_evaluated,
        initial_temperature: annealing.initial_temperature(),
        final_temperature: annealing.temperature(),
        annealing_steps: annealing.total_steps(),
        perturbations_accepted,
        cache_size: cache.len(),
        cache_hits: cache.hits(),
    }
}
