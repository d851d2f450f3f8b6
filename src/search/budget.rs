//! Wall-clock budgets keyed by job count.

use std::collections::BTreeMap;
use std::time::Duration;

use crate::error::ConfigError;

/// Maximum solve duration per instance size.
///
/// The default table covers the 5-, 50- and 100-job benchmark families.
/// Any other job count must be registered explicitly, or the solve is
/// rejected before it starts.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use u_flowshop::search::TimeBudget;
///
/// let budget = TimeBudget::default().with_entry(20, Duration::from_secs(30));
/// assert_eq!(budget.lookup(20).unwrap(), Duration::from_secs(30));
/// assert!(budget.lookup(21).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimeBudget {
    entries: BTreeMap<usize, Duration>,
    fallback: Option<Duration>,
}

impl Default for TimeBudget {
    fn default() -> Self {
        let mut entries = BTreeMap::new();
        entries.insert(5, Duration::from_millis(5_000));
        entries.insert(50, Duration::from_millis(160_000));
        entries.insert(100, Duration::from_millis(2_100_000));
        Self {
            entries,
            fallback: None,
        }
    }
}

impl TimeBudget {
    /// A table with no entries.
    pub fn empty() -> Self {
        Self {
            entries: BTreeMap::new(),
            fallback: None,
        }
    }

    /// The same limit for every job count.
    pub fn uniform(limit: Duration) -> Self {
        Self {
            entries: BTreeMap::new(),
            fallback: Some(limit),
        }
    }

    /// Registers (or replaces) the limit for `jobs`.
    pub fn with_entry(mut self, jobs: usize, limit: Duration) -> Self {
        self.entries.insert(jobs, limit);
        self
    }

    /// Limit for an instance with `jobs` jobs.
    pub fn lookup(&self, jobs: usize) -> Result<Duration, ConfigError> {
        self.entries
            .get(&jobs)
            .copied()
            .or(self.fallback)
            .ok_or_else(|| ConfigError::MissingTimeBudget {
                jobs,
                registered: self.entries.keys().copied().collect(),
            })
    }
}
