//! Flow-shop instance model.
//!
//! Holds processing times, due dates and priorities, and evaluates any
//! candidate [`Sequence`](crate::sequence::Sequence): completion times,
//! weighted completion, makespan and total weighted tardiness.
//!
//! # References
//!
//! - Johnson, S. M. (1954), "Optimal two- and three-stage production
//!   schedules with setup times included"
//! - Taillard, E. (1993), "Benchmarks for basic scheduling problems"

mod parse;
mod types;

pub use parse::parse_instance;
pub use types::{CompletionTimes, Instance, Metrics};
