//! Initial-solution capability and the configurable kind.

use std::fmt;
use std::str::FromStr;

use rand::Rng;

use super::random::RandomPermutation;
use super::srz::WeightedInsertion;
use crate::error::ConfigError;
use crate::instance::Instance;
use crate::sequence::Sequence;

/// Produces a starting sequence for an instance.
///
/// Implementations draw every random decision from the supplied
/// generator, so a fixed seed reproduces the same sequence.
pub trait InitialSolution {
    /// Short label used in logs, matching the [`InitKind`] label.
    fn name(&self) -> &str;

    /// Builds a complete, valid sequence for `instance`.
    fn build<R: Rng>(&self, instance: &Instance, rng: &mut R) -> Sequence;
}

/// Which constructor a solve starts from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InitKind {
    /// Uniform random permutation.
    #[default]
    Random,
    /// Weighted shortest-processing-time order refined by best insertion.
    GreedyHeuristic,
}

impl InitKind {
    pub const ALL: [InitKind; 2] = [Self::Random, Self::GreedyHeuristic];

    /// Builds the initial sequence.
    ///
    /// `random_ties` only affects [`InitKind::GreedyHeuristic`].
    pub fn build<R: Rng>(
        self,
        instance: &Instance,
        random_ties: bool,
        rng: &mut R,
    ) -> Sequence {
        match self {
            Self::Random => construct(&RandomPermutation, instance, rng),
            Self::GreedyHeuristic => {
                construct(&WeightedInsertion::new(random_ties), instance, rng)
            }
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Random => "RANDOM",
            Self::GreedyHeuristic => "SRZH",
        }
    }
}

fn construct<C: InitialSolution, R: Rng>(
    constructor: &C,
    instance: &Instance,
    rng: &mut R,
) -> Sequence {
    let sequence = constructor.build(instance, rng);
    tracing::debug!(
        constructor = constructor.name(),
        jobs = sequence.job_count(),
        "initial sequence built"
    );
    sequence
}

impl fmt::Display for InitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InitKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "RANDOM" => Ok(Self::Random),
            "SRZH" | "SRZ" | "GREEDY" => Ok(Self::GreedyHeuristic),
            _ => Err(ConfigError::Unsupported {
                option: "initial solution",
                value: s.to_string(),
                expected: "RANDOM, SRZH",
            }),
        }
    }
}
