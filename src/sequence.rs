//! Job sequences.
//!
//! A [`Sequence`] of `N` jobs has length `N + 1`. Position 0 always holds
//! the sentinel job `0`; positions `1..=N` hold a permutation of `1..=N`.
//! Keeping the sentinel in the vector lets the completion-time recurrence
//! start from a zero baseline without special cases.

use std::fmt;
use std::ops::Index;

use crate::error::BoundsError;

/// The sentinel job occupying position 0 of every sequence.
pub const SENTINEL: usize = 0;

/// An ordering of jobs, prefixed by the sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sequence(Vec<usize>);

impl Sequence {
    /// The identity order `[0, 1, 2, ..., n]`.
    pub fn identity(n: usize) -> Self {
        Self((0..=n).collect())
    }

    /// Builds a sequence from the real jobs in processing order.
    ///
    /// The sentinel is prepended. Fails unless `jobs` is a permutation of
    /// `1..=jobs.len()`.
    pub fn from_jobs(jobs: impl IntoIterator<Item = usize>) -> Result<Self, BoundsError> {
        let mut raw = vec![SENTINEL];
        raw.extend(jobs);
        Self::from_raw(raw)
    }

    /// Wraps a raw vector that already includes the sentinel at index 0.
    pub fn from_raw(raw: Vec<usize>) -> Result<Self, BoundsError> {
        let seq = Self(raw);
        seq.check()?;
        Ok(seq)
    }

    /// Wraps a raw vector without validation.
    ///
    /// Used by the neighborhood operators and constructors, which only
    /// ever permute an already valid sequence.
    pub(crate) fn from_raw_unchecked(raw: Vec<usize>) -> Self {
        debug_assert!(!raw.is_empty() && raw[0] == SENTINEL);
        Self(raw)
    }

    /// Number of real jobs `N`.
    pub fn job_count(&self) -> usize {
        self.0.len().saturating_sub(1)
    }

    /// Full length `N + 1`, sentinel included.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.job_count() == 0
    }

    /// The raw slice, sentinel included.
    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    /// The real jobs in processing order (positions `1..=N`).
    pub fn jobs(&self) -> &[usize] {
        self.0.get(1..).unwrap_or(&[])
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [usize] {
        &mut self.0
    }

    pub fn into_inner(self) -> Vec<usize> {
        self.0
    }

    /// Checks the sentinel and permutation invariants.
    pub fn check(&self) -> Result<(), BoundsError> {
        match self.0.first() {
            None => return Err(BoundsError::Sequence("sequence is empty".into())),
            Some(&first) if first != SENTINEL => {
                return Err(BoundsError::Sequence(format!(
                    "position 0 holds job {first}, expected the sentinel"
                )))
            }
            _ => {}
        }

        let n = self.job_count();
        let mut seen = vec![false; n + 1];
        for (pos, &job) in self.0.iter().enumerate().skip(1) {
            if job == SENTINEL || job > n {
                return Err(BoundsError::Job { job, jobs: n });
            }
            if seen[job] {
                return Err(BoundsError::Sequence(format!(
                    "job {job} appears twice (again at position {pos})"
                )));
            }
            seen[job] = true;
        }
        Ok(())
    }

    pub fn is_valid(&self) -> bool {
        self.check().is_ok()
    }
}

impl Index<usize> for Sequence {
    type Output = usize;

    fn index(&self, position: usize) -> &usize {
        &self.0[position]
    }
}

impl AsRef<[usize]> for Sequence {
    fn as_ref(&self) -> &[usize] {
        &self.0
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for job in &self.0 {
            if !first {
                f.write_str(" ")?;
            }
            write!(f, "{job}")?;
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity() {
        let seq = Sequence::identity(4);
        assert_eq!(seq.as_slice(), &[0, 1, 2, 3, 4]);
        assert_eq!(seq.job_count(), 4);
        assert_eq!(seq.jobs(), &[1, 2, 3, 4]);
        assert!(seq.is_valid());
    }

    #[test]
    fn test_from_jobs_prepends_sentinel() {
        let seq = Sequence::from_jobs([3, 1, 2]).unwrap();
        assert_eq!(seq.as_slice(), &[0, 3, 1, 2]);
        assert_eq!(seq[1], 3);
    }

    #[test]
    fn test_rejects_duplicates() {
        let err = Sequence::from_jobs([1, 1, 2]).unwrap_err();
        assert!(matches!(err, BoundsError::Sequence(_)));
    }

    #[test]
    fn test_rejects_out_of_range_job() {
        let err = Sequence::from_jobs([1, 4, 2]).unwrap_err();
        assert_eq!(err, BoundsError::Job { job: 4, jobs: 3 });
    }

    #[test]
    fn test_rejects_missing_sentinel() {
        assert!(Sequence::from_raw(vec![1, 0, 2]).is_err());
        assert!(Sequence::from_raw(vec![]).is_err());
    }

    #[test]
    fn test_display() {
        let seq = Sequence::from_jobs([2, 1]).unwrap();
        assert_eq!(seq.to_string(), "0 2 1");
    }
}
