use rand::seq::SliceRandom;
use rand::Rng;

use super::types::InitialSolution;
use crate::instance::Instance;
use crate::sequence::Sequence;

/// Uniform random permutation of `1..=N` (Fisher-Yates).
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomPermutation;

impl InitialSolution for RandomPermutation {
    fn name(&self) -> &str {
        "RANDOM"
    }

    fn build<R: Rng>(&self, instance: &Instance, rng: &mut R) -> Sequence {
        let mut order: Vec<usize> = (0..=instance.job_count()).collect();
        order[1..].shuffle(rng);
        Sequence::from_raw_unchecked(order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn uniform(n: usize) -> Instance {
        Instance::new(vec![vec![1, 1]; n], vec![0; n], vec![1; n]).unwrap()
    }

    #[test]
    fn test_random_is_permutation() {
        let inst = uniform(20);
        let mut rng = StdRng::seed_from_u64(7);
        let seq = RandomPermutation.build(&inst, &mut rng);
        assert_eq!(seq.job_count(), 20);
        assert!(seq.is_valid());
    }

    #[test]
    fn test_random_reproducible() {
        let inst = uniform(30);
        let a = RandomPermutation.build(&inst, &mut StdRng::seed_from_u64(11));
        let b = RandomPermutation.build(&inst, &mut StdRng::seed_from_u64(11));
        let c = RandomPermutation.build(&inst, &mut StdRng::seed_from_u64(12));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
