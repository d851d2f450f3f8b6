//! Local search: VND with first/best improvement, simulated-annealing
//! acceptance and iterated-local-search perturbation.
//!
//! Neighborhoods are explored in a fixed priority order; every
//! improvement restarts from the first operator. Optional memoization
//! caches the tardiness of already seen sequences, and every solve is
//! bounded by a wall-clock [`TimeBudget`] chosen by job count.
//!
//! # References
//!
//! - Mladenović, N. & Hansen, P. (1997), "Variable neighborhood search"
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Lourenço, Martin & Stützle (2003), "Iterated Local Search"

mod anneal;
mod budget;
mod cache;
mod config;
mod perturb;
mod runner;

pub use anneal::{metropolis_weight, Annealing};
pub use budget::TimeBudget;
pub use cache::EvaluationCache;
pub use config::{
    MemoryMode, PivotRule, SolverConfig, DEFAULT_ANNEALING_DECAY, EXPERIMENT_ANNEALING_DECAY,
    INITIAL_TEMPERATURE_MULTIPLIER, MIN_ANNEALING_TEMPERATURE, MIN_PERTURBATION_STRENGTH,
};
pub use perturb::rotate_random_positions;
pub use runner::{LocalSearchRunner, SolverResult};
