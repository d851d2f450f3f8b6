//! Neighborhood generators for permutation sequences.
//!
//! Each operator maps a sequence to the ordered set of sequences reachable
//! by exactly one structural move. The order of the returned set is fixed
//! for a given input so that first-improvement descent is reproducible;
//! only the search driver may randomize the order in which it scans them.
//!
//! # References
//!
//! - Taillard, E. (1990), "Some efficient heuristic methods for the flow
//!   shop sequencing problem"

mod operators;
mod types;

pub use operators::{exchange, insert, transpose};
pub use types::{order_label, NeighborhoodKind};
