//! Iterated-local-search perturbation.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::sequence::Sequence;

/// Rotates the jobs at `strength` randomly drawn positions.
///
/// Distinct positions `p0, p1, ..., pk-1` are drawn from `1..=N`. The job
/// at `p0` moves to `p1`, the job at `p1` to `p2`, and so on; the job at
/// the last drawn position wraps around to `p0`. Callers guarantee
/// `2 <= strength <= N`.
pub fn rotate_random_positions<R: Rng>(
    sequence: &Sequence,
    strength: usize,
    rng: &mut R,
) -> Sequence {
    let n = sequence.job_count();
    debug_assert!(strength >= 2 && strength <= n);

    let mut positions: Vec<usize> = (1..=n).collect();
    positions.shuffle(rng);
    positions.truncate(strength);

    let mut out = sequence.clone();
    let slots = out.as_mut_slice();
    let last = sequence[positions[strength - 1]];
    for w in (1..strength).rev() {
        slots[positions[w]] = sequence[positions[w - 1]];
    }
    slots[positions[0]] = last;
    out
}
