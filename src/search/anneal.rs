//! Simulated-annealing fallback.
//!
//! When a neighborhood holds no improving candidate, the search position
//! moves to a candidate drawn with probability proportional to its
//! Metropolis weight, and the temperature decays geometrically down to a
//! floor.

use rand::Rng;

use super::config::SolverConfig;

/// Metropolis acceptance weight of `candidate` against `best`.
///
/// `1` for an improving candidate, `exp((best - candidate) / T)` otherwise.
pub fn metropolis_weight(candidate: i64, best: i64, temperature: f64) -> f64 {
    if candidate < best {
        1.0
    } else {
        ((best - candidate) as f64 / temperature).exp()
    }
}

/// Temperature schedule and step counters of one solve.
#[derive(Debug, Clone)]
pub struct Annealing {
    temperature: f64,
    initial_temperature: f64,
    min_temperature: f64,
    decay: f64,
    limit: usize,
    /// Fallback steps since the last accepted improvement.
    steps_since_accept: usize,
    total_steps: usize,
}

impl Annealing {
    /// Starts at `initial_objective` times the configured multiplier.
    ///
    /// The minimal temperature applies from the first decay on; only a zero
    /// start (a tardiness-free initial sequence) begins at the floor.
    pub fn new(initial_objective: i64, config: &SolverConfig) -> Self {
        let scaled = initial_objective as f64 * config.initial_temperature_multiplier;
        let initial = if scaled > 0.0 {
            scaled
        } else {
            config.min_temperature
        };
        Self {
            temperature: initial,
            initial_temperature: initial,
            min_temperature: config.min_temperature,
            decay: config.annealing_decay,
            limit: config.annealing_limit,
            steps_since_accept: 0,
            total_steps: 0,
        }
    }

    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    pub fn initial_temperature(&self) -> f64 {
        self.initial_temperature
    }

    pub fn total_steps(&self) -> usize {
        self.total_steps
    }

    /// Whether another fallback step is allowed before the next improvement.
    pub fn has_budget(&self) -> bool {
        self.limit == 0 || self.steps_since_accept < self.limit
    }

    /// An improving move was accepted.
    pub fn reset(&mut self) {
        self.steps_since_accept = 0;
    }

    /// Draws the index of the next search position from `scores`.
    ///
    /// Returns `None` for an empty neighborhood. Counts the step and cools.
    pub fn step<R: Rng>(&mut self, scores: &[i64], best: i64, rng: &mut R) -> Option<usize> {
        if scores.is_empty() {
            return None;
        }
        let weights: Vec<f64> = scores
            .iter()
            .map(|&s| metropolis_weight(s, best, self.temperature))
            .collect();
        let chosen = roulette_select(&weights, rng);

        self.steps_since_accept += 1;
        self.total_steps += 1;
        self.temperature = (self.temperature * self.decay).max(self.min_temperature);
        Some(chosen)
    }
}

/// Roulette-wheel draw over non-negative weights.
///
/// Falls back to a uniform draw when every weight has underflowed to zero.
fn roulette_select<R: Rng>(weights: &[f64], rng: &mut R) -> usize {
    let total: f64 = weights.iter().sum();
    if !(total > 0.0 && total.is_finite()) {
        tracing::warn!(
            candidates = weights.len(),
            "annealing: degenerate Metropolis weights, drawing uniformly"
        );
        return rng.random_range(0..weights.len());
    }

    let mut roll = rng.random_range(0.0..total);
    for (i, &w) in weights.iter().enumerate() {
        roll -= w;
        if roll < 0.0 {
            return i;
        }
    }
    weights.len() - 1
}
