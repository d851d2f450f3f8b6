//! Local-search engine for the permutation flow-shop scheduling problem
//! with total weighted tardiness.
//!
//! Every job visits machines `1..=M` in the same order; a solution is a
//! single job permutation shared by all machines. The engine provides:
//!
//! - **Instance model**: processing times, due dates and priorities, with
//!   completion-time, weighted-completion and tardiness evaluation.
//! - **Initial solutions**: a uniform random permutation, or a weighted
//!   shortest-processing-time insertion heuristic.
//! - **Neighborhoods**: transpose (adjacent swap), exchange (any swap) and
//!   insert (remove and reinsert one job).
//! - **Search driver**: variable neighborhood descent with first or best
//!   improvement, an optional simulated-annealing fallback, iterated local
//!   search perturbation, tardiness memoization and a wall-clock budget.
//! - **Batch harness**: independent solves over many seeds or
//!   configurations, optionally on the rayon pool (`parallel` feature).
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use u_flowshop::instance::Instance;
//! use u_flowshop::neighborhood::NeighborhoodKind;
//! use u_flowshop::search::{LocalSearchRunner, SolverConfig, TimeBudget};
//!
//! let instance = Instance::new(
//!     vec![vec![3, 2], vec![1, 4], vec![2, 1]],
//!     vec![6, 4, 10],
//!     vec![1, 2, 3],
//! )
//! .unwrap();
//!
//! let config = SolverConfig::default()
//!     .with_neighborhoods(NeighborhoodKind::TEI)
//!     .with_time_budget(TimeBudget::uniform(Duration::from_secs(1)));
//!
//! let result = LocalSearchRunner::run(&instance, &config).unwrap();
//! assert_eq!(result.objective, instance.tardiness(&result.sequence));
//! ```

pub mod batch;
pub mod error;
pub mod init;
pub mod instance;
pub mod neighborhood;
pub mod search;
pub mod sequence;

pub use error::FlowshopError;
pub use instance::Instance;
pub use search::{LocalSearchRunner, SolverConfig, SolverResult};
pub use sequence::Sequence;
