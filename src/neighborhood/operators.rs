//! Neighborhood generators.
//!
//! Every generator keeps the sentinel at position 0 and enumerates moves
//! in a fixed order: by first position, then by second position.

use crate::sequence::Sequence;

/// Swaps every adjacent pair `(i, i + 1)` for `i` in `1..N`.
///
/// Yields `N - 1` candidates (none for `N <= 1`).
pub fn transpose(sequence: &Sequence) -> Vec<Sequence> {
    let n = sequence.job_count();
    let mut out = Vec::with_capacity(n.saturating_sub(1));
    for i in 1..n {
        let mut candidate = sequence.clone();
        candidate.as_mut_slice().swap(i, i + 1);
        out.push(candidate);
    }
    out
}

/// Swaps every pair of positions `i < j` within `1..=N`.
///
/// Yields `N (N - 1) / 2` candidates.
pub fn exchange(sequence: &Sequence) -> Vec<Sequence> {
    let n = sequence.job_count();
    let mut out = Vec::with_capacity(pair_count(n));
    for i in 1..n {
        for j in (i + 1)..=n {
            let mut candidate = sequence.clone();
            candidate.as_mut_slice().swap(i, j);
            out.push(candidate);
        }
    }
    out
}

/// Removes the job at `i` and reinserts it at `j`, for every `i < j`.
///
/// Jobs between the two positions shift one place left. The move is a
/// left rotation of the slice `i..=j`, so the vector never grows.
/// Yields `N (N - 1) / 2` candidates.
pub fn insert(sequence: &Sequence) -> Vec<Sequence> {
    let n = sequence.job_count();
    let mut out = Vec::with_capacity(pair_count(n));
    for i in 1..n {
        for j in (i + 1)..=n {
            let mut candidate = sequence.clone();
            candidate.as_mut_slice()[i..=j].rotate_left(1);
            out.push(candidate);
        }
    }
    out
}

/// Number of unordered position pairs among `n` jobs.
pub(crate) fn pair_count(n: usize) -> usize {
    n * n.saturating_sub(1) / 2
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn six() -> Sequence {
        Sequence::identity(6)
    }

    #[test]
    fn test_transpose_example() {
        let hood = transpose(&six());
        assert_eq!(hood.len(), 5);
        assert_eq!(hood[0].as_slice(), &[0, 2, 1, 3, 4, 5, 6]);
        assert_eq!(hood[4].as_slice(), &[0, 1, 2, 3, 4, 6, 5]);
    }

    #[test]
    fn test_exchange_example() {
        let hood = exchange(&six());
        assert_eq!(hood.len(), 15);
        assert_eq!(hood[0].as_slice(), &[0, 2, 1, 3, 4, 5, 6]);
        assert_eq!(hood[1].as_slice(), &[0, 3, 2, 1, 4, 5, 6]);
        assert_eq!(hood[14].as_slice(), &[0, 1, 2, 3, 4, 6, 5]);
    }

    #[test]
    fn test_insert_example() {
        let hood = insert(&six());
        assert_eq!(hood.len(), 15);
        assert_eq!(hood[0].as_slice(), &[0, 2, 1, 3, 4, 5, 6]);
        // job 1 relocated from position 1 to position 3
        assert_eq!(hood[1].as_slice(), &[0, 2, 3, 1, 4, 5, 6]);
        // job 1 relocated to the end
        assert_eq!(hood[4].as_slice(), &[0, 2, 3, 4, 5, 6, 1]);
        // job 2 relocated from position 2 to position 3
        assert_eq!(hood[5].as_slice(), &[0, 1, 3, 2, 4, 5, 6]);
    }

    #[test]
    fn test_small_sequences_give_empty_sets() {
        let one = Sequence::identity(1);
        assert!(transpose(&one).is_empty());
        assert!(exchange(&one).is_empty());
        assert!(insert(&one).is_empty());

        let two = Sequence::identity(2);
        assert_eq!(transpose(&two).len(), 1);
        assert_eq!(exchange(&two).len(), 1);
        assert_eq!(insert(&two).len(), 1);
    }

    #[test]
    fn test_deterministic_order() {
        let seq = Sequence::from_jobs([4, 2, 5, 1, 3]).unwrap();
        assert_eq!(exchange(&seq), exchange(&seq));
        assert_eq!(insert(&seq), insert(&seq));
    }

    fn arb_sequence() -> impl Strategy<Value = Sequence> {
        (0usize..10).prop_flat_map(|n| {
            Just((1..=n).collect::<Vec<usize>>())
                .prop_shuffle()
                .prop_map(|jobs| Sequence::from_jobs(jobs).unwrap())
        })
    }

    proptest! {
        #[test]
        fn prop_size_laws(seq in arb_sequence()) {
            let n = seq.job_count();
            prop_assert_eq!(transpose(&seq).len(), n.saturating_sub(1));
            prop_assert_eq!(exchange(&seq).len(), n * n.saturating_sub(1) / 2);
            prop_assert_eq!(insert(&seq).len(), n * n.saturating_sub(1) / 2);
        }

        #[test]
        fn prop_candidates_are_permutations(seq in arb_sequence()) {
            for candidate in transpose(&seq)
                .into_iter()
                .chain(exchange(&seq))
                .chain(insert(&seq))
            {
                prop_assert_eq!(candidate.len(), seq.len());
                prop_assert!(candidate.is_valid());
                prop_assert_ne!(&candidate, &seq);
            }
        }
    }
}
