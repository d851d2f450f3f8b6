//! Solver configuration.

use std::fmt;
use std::str::FromStr;

use super::budget::TimeBudget;
use crate::error::ConfigError;
use crate::init::InitKind;
use crate::neighborhood::{order_label, NeighborhoodKind};

/// Annealing decay used when none is configured.
pub const DEFAULT_ANNEALING_DECAY: f64 = 0.992;

/// Slower decay used by the annealing experiment runs.
pub const EXPERIMENT_ANNEALING_DECAY: f64 = 0.99995;

/// Initial temperature is the initial objective times this factor.
pub const INITIAL_TEMPERATURE_MULTIPLIER: f64 = 2.0;

/// Temperature never decays below this value.
pub const MIN_ANNEALING_TEMPERATURE: f64 = 5000.0;

/// Smallest non-zero perturbation strength. A two-position rotation is a
/// plain exchange move, which the neighborhoods already cover.
pub const MIN_PERTURBATION_STRENGTH: usize = 3;

/// How candidates in a neighborhood are scanned and accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PivotRule {
    /// Take the first improving candidate.
    #[default]
    FirstImprovement,
    /// Scan the whole neighborhood and take the best candidate.
    BestImprovement,
    /// Scan in random order; when nothing improves, move by Metropolis draw.
    SimulatedAnnealing,
}

impl PivotRule {
    pub const ALL: [PivotRule; 3] = [
        Self::FirstImprovement,
        Self::BestImprovement,
        Self::SimulatedAnnealing,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::FirstImprovement => "FIRST",
            Self::BestImprovement => "BEST",
            Self::SimulatedAnnealing => "ANNEAL",
        }
    }
}

impl fmt::Display for PivotRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PivotRule {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "FIRST" => Ok(Self::FirstImprovement),
            "BEST" => Ok(Self::BestImprovement),
            "ANNEAL" | "SA" => Ok(Self::SimulatedAnnealing),
            _ => Err(ConfigError::Unsupported {
                option: "pivoting rule",
                value: s.to_string(),
                expected: "FIRST, BEST, ANNEAL",
            }),
        }
    }
}

/// Memoization of tardiness evaluations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MemoryMode {
    /// Evaluate every candidate.
    #[default]
    None,
    /// Hash-based cache.
    HashMap,
    /// Ordered (tree) cache.
    OrderedMap,
}

impl MemoryMode {
    pub const ALL: [MemoryMode; 3] = [Self::None, Self::HashMap, Self::OrderedMap];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "NONE",
            Self::HashMap => "HASH",
            Self::OrderedMap => "MAP",
        }
    }
}

impl fmt::Display for MemoryMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MemoryMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "NONE" => Ok(Self::None),
            "HASH" => Ok(Self::HashMap),
            "MAP" => Ok(Self::OrderedMap),
            _ => Err(ConfigError::Unsupported {
                option: "solver memory",
                value: s.to_string(),
                expected: "NONE, HASH, MAP",
            }),
        }
    }
}

/// Configuration of one local-search solve.
///
/// # Examples
///
/// ```
/// use u_flowshop::init::InitKind;
/// use u_flowshop::neighborhood::NeighborhoodKind;
/// use u_flowshop::search::{MemoryMode, PivotRule, SolverConfig};
///
/// let config = SolverConfig::default()
///     .with_init(InitKind::GreedyHeuristic)
///     .with_neighborhoods(NeighborhoodKind::TIE)
///     .with_pivot(PivotRule::BestImprovement)
///     .with_memory(MemoryMode::HashMap)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolverConfig {
    /// Constructor for the starting sequence.
    pub init: InitKind,

    /// Neighborhood operators in VND priority order.
    pub neighborhoods: Vec<NeighborhoodKind>,

    /// Candidate scanning and acceptance rule.
    pub pivot: PivotRule,

    /// Tardiness memoization backend.
    pub memory: MemoryMode,

    /// Multiplicative temperature decay per annealing step, in `(0, 1]`.
    pub annealing_decay: f64,

    /// Annealing steps allowed between two accepted improvements.
    /// 0 = no limit.
    pub annealing_limit: usize,

    /// Initial temperature = initial objective times this factor.
    pub initial_temperature_multiplier: f64,

    /// Floor for the temperature.
    pub min_temperature: f64,

    /// Number of positions rotated by an ILS perturbation. 0 = no ILS,
    /// otherwise at least [`MIN_PERTURBATION_STRENGTH`].
    pub perturbation_strength: usize,

    /// Accept equal-objective candidates on a fair coin flip, and break
    /// insertion ties randomly in the greedy constructor.
    pub random_ties: bool,

    /// Seed of the solve's private generator.
    pub seed: u64,

    /// Wall-clock limit per job count.
    pub time_budget: TimeBudget,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            init: InitKind::Random,
            neighborhoods: vec![NeighborhoodKind::Transpose],
            pivot: PivotRule::FirstImprovement,
            memory: MemoryMode::None,
            annealing_decay: DEFAULT_ANNEALING_DECAY,
            annealing_limit: 0,
            initial_temperature_multiplier: INITIAL_TEMPERATURE_MULTIPLIER,
            min_temperature: MIN_ANNEALING_TEMPERATURE,
            perturbation_strength: 0,
            random_ties: false,
            seed: 0,
            time_budget: TimeBudget::default(),
        }
    }
}

impl SolverConfig {
    pub fn with_init(mut self, init: InitKind) -> Self {
        self.init = init;
        self
    }

    /// Sets the VND operator order.
    pub fn with_neighborhoods(mut self, order: impl Into<Vec<NeighborhoodKind>>) -> Self {
        self.neighborhoods = order.into();
        self
    }

    /// Uses a single neighborhood operator.
    pub fn with_neighborhood(mut self, kind: NeighborhoodKind) -> Self {
        self.neighborhoods = vec![kind];
        self
    }

    pub fn with_pivot(mut self, pivot: PivotRule) -> Self {
        self.pivot = pivot;
        self
    }

    pub fn with_memory(mut self, memory: MemoryMode) -> Self {
        self.memory = memory;
        self
    }

    pub fn with_annealing_decay(mut self, decay: f64) -> Self {
        self.annealing_decay = decay;
        self
    }

    pub fn with_annealing_limit(mut self, limit: usize) -> Self {
        self.annealing_limit = limit;
        self
    }

    pub fn with_initial_temperature_multiplier(mut self, factor: f64) -> Self {
        self.initial_temperature_multiplier = factor;
        self
    }

    pub fn with_min_temperature(mut self, t: f64) -> Self {
        self.min_temperature = t;
        self
    }

    pub fn with_perturbation_strength(mut self, strength: usize) -> Self {
        self.perturbation_strength = strength;
        self
    }

    pub fn with_random_ties(mut self, random_ties: bool) -> Self {
        self.random_ties = random_ties;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_time_budget(mut self, budget: TimeBudget) -> Self {
        self.time_budget = budget;
        self
    }

    /// Whether the ILS perturbation step runs.
    pub fn perturbation_enabled(&self) -> bool {
        self.perturbation_strength >= MIN_PERTURBATION_STRENGTH
    }

    /// Validates the instance-independent options.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.neighborhoods.is_empty() {
            return Err(ConfigError::EmptyNeighborhoodOrder);
        }
        if !(self.annealing_decay > 0.0 && self.annealing_decay <= 1.0) {
            return Err(ConfigError::InvalidAnnealingDecay(self.annealing_decay));
        }
        if !(self.initial_temperature_multiplier.is_finite()
            && self.initial_temperature_multiplier > 0.0)
        {
            return Err(ConfigError::InvalidTemperatureMultiplier(
                self.initial_temperature_multiplier,
            ));
        }
        if !(self.min_temperature.is_finite() && self.min_temperature > 0.0) {
            return Err(ConfigError::InvalidMinTemperature(self.min_temperature));
        }
        if self.perturbation_strength != 0
            && self.perturbation_strength < MIN_PERTURBATION_STRENGTH
        {
            return Err(ConfigError::PerturbationTooSmall {
                strength: self.perturbation_strength,
                min: MIN_PERTURBATION_STRENGTH,
            });
        }
        Ok(())
    }

    /// Validates against a concrete instance size and returns its time limit.
    pub fn validate_for(&self, jobs: usize) -> Result<std::time::Duration, ConfigError> {
        self.validate()?;
        if self.perturbation_enabled() && self.perturbation_strength > jobs {
            return Err(ConfigError::PerturbationTooLarge {
                strength: self.perturbation_strength,
                jobs,
            });
        }
        self.time_budget.lookup(jobs)
    }

    /// Human-readable multi-line summary.
    pub fn summary(&self) -> String {
        let yes_no = if self.random_ties { "TRUE" } else { "FALSE" };
        format!(
            "initial solution: {}\n\
             neighbourhood: {}\n\
             pivoting rule: {}\n\
             solver memory: {}\n\
             annealing decay (if applicable): {}\n\
             annealing limit (if applicable): {}\n\
             perturbation strength: {}\n\
             select randomly when results are equal: {}\n\
             seed: {}",
            self.init,
            order_label(&self.neighborhoods),
            self.pivot,
            self.memory,
            self.annealing_decay,
            self.annealing_limit,
            self.perturbation_strength,
            yes_no,
            self.seed,
        )
    }
}
