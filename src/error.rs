//! Error taxonomy.
//!
//! Three families of failure can surface from the engine:
//!
//! - [`ConfigError`]: an option combination the solver cannot run with.
//!   Always reported before any search work starts.
//! - [`DataError`]: a malformed or inconsistent instance. Reported while
//!   the [`Instance`](crate::instance::Instance) is being built.
//! - [`BoundsError`]: a job/machine index outside the declared range, or a
//!   sequence that is not a permutation. These are contract violations.
//!
//! All three convert into [`FlowshopError`] so that callers running many
//! solves can log and drop a single failing solve.

use thiserror::Error;

/// Unsupported or inconsistent solver configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// A textual option did not name a known variant.
    #[error("unsupported {option} '{value}', expected one of {expected}")]
    Unsupported {
        option: &'static str,
        value: String,
        expected: &'static str,
    },

    /// No time budget is registered for this job count.
    #[error("no time budget registered for {jobs} jobs (registered: {registered:?})")]
    MissingTimeBudget { jobs: usize, registered: Vec<usize> },

    /// The neighborhood order is empty.
    #[error("neighborhood order must contain at least one operator")]
    EmptyNeighborhoodOrder,

    /// Annealing decay outside `(0, 1]`.
    #[error("annealing decay must be in (0, 1], got {0}")]
    InvalidAnnealingDecay(f64),

    /// Initial temperature multiplier must be positive and finite.
    #[error("initial temperature multiplier must be positive, got {0}")]
    InvalidTemperatureMultiplier(f64),

    /// Minimal temperature must be positive and finite.
    #[error("minimal annealing temperature must be positive, got {0}")]
    InvalidMinTemperature(f64),

    /// Perturbation strength is non-zero but below the minimum rotation size.
    #[error("perturbation strength {strength} is too small, minimum is {min} (0 disables)")]
    PerturbationTooSmall { strength: usize, min: usize },

    /// Perturbation strength exceeds the number of positions available.
    #[error("perturbation strength {strength} exceeds the job count {jobs}")]
    PerturbationTooLarge { strength: usize, jobs: usize },
}

/// Malformed or incomplete instance data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DataError {
    #[error("instance must contain at least one job")]
    NoJobs,

    #[error("instance must contain at least one machine")]
    NoMachines,

    #[error("processing-time table has {found} rows, expected {expected} jobs")]
    JobCountMismatch { expected: usize, found: usize },

    #[error("job {job} has {found} processing times, expected {expected} machines")]
    MachineCountMismatch {
        job: usize,
        expected: usize,
        found: usize,
    },

    #[error("{field} has {found} entries, expected {expected}")]
    VectorLengthMismatch {
        field: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("{field} of job {job} is negative ({value})")]
    NegativeValue {
        field: &'static str,
        job: usize,
        value: i64,
    },

    #[error("cannot parse instance: {reason} (at token {token:?})")]
    Parse { token: String, reason: String },
}

/// Contract violation: index out of range or invalid sequence.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoundsError {
    #[error("job {job} out of range 1..={jobs}")]
    Job { job: usize, jobs: usize },

    #[error("machine {machine} out of range 1..={machines}")]
    Machine { machine: usize, machines: usize },

    #[error("invalid sequence: {0}")]
    Sequence(String),
}

/// Any failure surfaced by the engine.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FlowshopError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("data error: {0}")]
    Data(#[from] DataError),

    #[error("bounds error: {0}")]
    Bounds(#[from] BoundsError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_carry_context() {
        let err = ConfigError::MissingTimeBudget {
            jobs: 7,
            registered: vec![5, 50, 100],
        };
        let msg = err.to_string();
        assert!(msg.contains('7'));
        assert!(msg.contains("50"));

        let err = BoundsError::Machine {
            machine: 9,
            machines: 4,
        };
        assert_eq!(err.to_string(), "machine 9 out of range 1..=4");
    }

    #[test]
    fn test_from_conversions() {
        let err: FlowshopError = DataError::NoJobs.into();
        assert!(matches!(err, FlowshopError::Data(DataError::NoJobs)));

        let err: FlowshopError = ConfigError::EmptyNeighborhoodOrder.into();
        assert!(err.to_string().starts_with("configuration error"));
    }
}
