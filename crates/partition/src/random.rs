use crate::kary::slice_along;
use crate::{PartitionTree, Split};
use ndarray::Array2;
use ndarray_rand::rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256Plus;

#[cfg(feature = "serializable")]
use serde::{Deserialize, Serialize};

/// The Random binary split cuts a region in two at a random point of a random component.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serializable", derive(Serialize, Deserialize))]
pub struct RandomBinarySplit<R: Rng> {
    /// Random generator used for reproducibility
    rng: R,
}

impl RandomBinarySplit<Xoshiro256Plus> {
    /// Constructor
    ///
    /// ```
    /// use xabox_partition::RandomBinarySplit;
    /// use ndarray_rand::rand::SeedableRng;
    /// use rand_xoshiro::Xoshiro256Plus;
    ///
    /// let split = RandomBinarySplit::new().with_rng(Xoshiro256Plus::seed_from_u64(42));
    /// ```
    pub fn new() -> Self {
        Self::new_with_rng(Xoshiro256Plus::from_entropy())
    }
}

impl Default for RandomBinarySplit<Xoshiro256Plus> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> RandomBinarySplit<R> {
    /// Constructor given a random generator for reproducibility
    pub fn new_with_rng(rng: R) -> Self {
        RandomBinarySplit { rng }
    }

    /// Set random generator
    pub fn with_rng<R2: Rng>(self, rng: R2) -> RandomBinarySplit<R2> {
        RandomBinarySplit { rng }
    }
}

impl<R: Rng> Split for RandomBinarySplit<R> {
    fn split(&mut self, xlimits: &Array2<f64>, _depth: usize) -> Vec<Array2<f64>> {
        let dim = self.rng.gen_range(0..xlimits.nrows());
        let (lo, hi) = (xlimits[[dim, 0]], xlimits[[dim, 1]]);
        let cut = lo + self.rng.gen::<f64>() * (hi - lo);
        slice_along(xlimits, dim, &[cut])
    }
}

/// The Random k-ary split cuts a random component of a region at `k - 1` random points.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serializable", derive(Serialize, Deserialize))]
pub struct RandomKarySplit<R: Rng> {
    k: usize,
    /// Random generator used for reproducibility
    rng: R,
}

impl RandomKarySplit<Xoshiro256Plus> {
    /// Constructor given the number `k` of children per node
    ///
    /// **Panics** if `k` is less than 2.
    pub fn new(k: usize) -> Self {
        Self::new_with_rng(k, Xoshiro256Plus::from_entropy())
    }
}

impl<R: Rng> RandomKarySplit<R> {
    /// Constructor given the number `k` of children per node and a random generator
    ///
    /// **Panics** if `k` is less than 2.
    pub fn new_with_rng(k: usize, rng: R) -> Self {
        if k < 2 {
            panic!("k-ary split requires k >= 2, got {k}");
        }
        RandomKarySplit { k, rng }
    }

    /// Set random generator
    pub fn with_rng<R2: Rng>(self, rng: R2) -> RandomKarySplit<R2> {
        RandomKarySplit { k: self.k, rng }
    }

    /// Number of children per node
    pub fn k(&self) -> usize {
        self.k
    }
}

impl<R: Rng> Split for RandomKarySplit<R> {
    fn split(&mut self, xlimits: &Array2<f64>, _depth: usize) -> Vec<Array2<f64>> {
        let dim = self.rng.gen_range(0..xlimits.nrows());
        let (lo, hi) = (xlimits[[dim, 0]], xlimits[[dim, 1]]);
        let mut cuts: Vec<f64> = (1..self.k)
            .map(|_| lo + self.rng.gen::<f64>() * (hi - lo))
            .collect();
        cuts.sort_by(|a, b| a.total_cmp(b));
        slice_along(xlimits, dim, &cuts)
    }
}

/// A partition where each node is cut in two at random
pub type RandomBinaryPartition<S, R = Xoshiro256Plus> = PartitionTree<S, RandomBinarySplit<R>>;

/// A partition where each node is cut in `k` at random
pub type RandomKaryPartition<S, R = Xoshiro256Plus> = PartitionTree<S, RandomKarySplit<R>>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Partition;
    use approx::assert_abs_diff_eq;
    use ndarray::arr2;

    fn volume(xlimits: &Array2<f64>) -> f64 {
        (&xlimits.column(1) - &xlimits.column(0)).product()
    }

    #[test]
    fn test_random_binary_partition() {
        let xlimits = arr2(&[[0., 1.], [10., 50.], [-10., -5.]]);
        let split = RandomBinarySplit::new().with_rng(Xoshiro256Plus::seed_from_u64(42));
        let mut part: RandomBinaryPartition<()> = PartitionTree::new(&xlimits, split);
        for _ in 0..4 {
            part.deepen();
        }
        assert_eq!(part.node_list()[4].len(), 16);
        let total: f64 = part.node_list()[4]
            .iter()
            .map(|node| volume(node.xlimits()))
            .sum();
        assert_abs_diff_eq!(total, volume(&xlimits), epsilon = 1e-9);
        for node in part.node_list()[4].iter() {
            let xl = node.xlimits();
            for i in 0..3 {
                assert!(xl[[i, 0]] <= xl[[i, 1]]);
                assert!(xl[[i, 0]] >= xlimits[[i, 0]] && xl[[i, 1]] <= xlimits[[i, 1]]);
            }
        }
    }

    #[test]
    fn test_random_binary_reproducible() {
        let xlimits = arr2(&[[0., 1.], [0., 1.]]);
        let mut s1 = RandomBinarySplit::new_with_rng(Xoshiro256Plus::seed_from_u64(7));
        let mut s2 = RandomBinarySplit::new_with_rng(Xoshiro256Plus::seed_from_u64(7));
        for depth in 0..5 {
            assert_eq!(s1.split(&xlimits, depth), s2.split(&xlimits, depth));
        }
    }

    #[test]
    fn test_random_kary() {
        let xlimits = arr2(&[[0., 1.], [10., 50.]]);
        let mut split = RandomKarySplit::new(4).with_rng(Xoshiro256Plus::seed_from_u64(0));
        let regions = split.split(&xlimits, 0);
        assert_eq!(regions.len(), 4);
        let total: f64 = regions.iter().map(volume).sum();
        assert_abs_diff_eq!(total, volume(&xlimits), epsilon = 1e-9);
        // slices are adjacent along the cut component
        let dim = (0..2)
            .find(|&i| regions[0][[i, 1]] != xlimits[[i, 1]])
            .unwrap();
        for w in regions.windows(2) {
            assert_eq!(w[0][[dim, 1]], w[1][[dim, 0]]);
        }
    }

    #[test]
    fn test_random_kary_partition() {
        let xlimits = arr2(&[[0., 1.]]);
        let split = RandomKarySplit::new_with_rng(3, Xoshiro256Plus::seed_from_u64(42));
        let mut part: RandomKaryPartition<()> = PartitionTree::new(&xlimits, split);
        part.deepen();
        part.deepen();
        assert_eq!(part.depth(), 2);
        assert_eq!(part.node_list()[2].len(), 9);
        assert_eq!(part.split_strategy().k(), 3);
    }
}
