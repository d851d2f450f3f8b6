//! Initial-solution constructors.
//!
//! Two constructors are provided:
//!
//! - [`RandomPermutation`]: a uniform shuffle of all jobs.
//! - [`WeightedInsertion`]: jobs ranked by weighted shortest processing
//!   time and placed one by one at their best insertion position.
//!
//! # References
//!
//! - Smith, W. E. (1956), "Various optimizers for single-stage production"
//! - Nawaz, Enscore & Ham (1983), "A heuristic algorithm for the m-machine,
//!   n-job flow-shop sequencing problem"

mod random;
mod srz;
mod types;

pub use random::RandomPermutation;
pub use srz::WeightedInsertion;
pub use types::{InitKind, InitialSolution};
