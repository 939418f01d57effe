use crate::{PartitionTree, Split};
use ndarray::Array2;

#[cfg(feature = "serializable")]
use serde::{Deserialize, Serialize};

/// The K-ary split cuts a region into `k` slices of equal width.
///
/// The component being cut cycles with the depth of the split node:
/// component `depth % nx` is cut.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serializable", derive(Serialize, Deserialize))]
pub struct KarySplit {
    k: usize,
}

impl KarySplit {
    /// Constructor given the number `k` of children per node
    ///
    /// **Panics** if `k` is less than 2.
    pub fn new(k: usize) -> Self {
        if k < 2 {
            panic!("k-ary split requires k >= 2, got {k}");
        }
        KarySplit { k }
    }

    /// Number of children per node
    pub fn k(&self) -> usize {
        self.k
    }
}

impl Split for KarySplit {
    fn split(&mut self, xlimits: &Array2<f64>, depth: usize) -> Vec<Array2<f64>> {
        let dim = depth % xlimits.nrows();
        let (lo, hi) = (xlimits[[dim, 0]], xlimits[[dim, 1]]);
        let width = (hi - lo) / self.k as f64;
        let cuts: Vec<f64> = (1..self.k).map(|i| lo + i as f64 * width).collect();
        slice_along(xlimits, dim, &cuts)
    }
}

/// A partition where each node has `k` children of equal size
pub type KaryPartition<S> = PartitionTree<S, KarySplit>;

/// Cuts `xlimits` along component `dim` at the given increasing interior `cuts`
pub(crate) fn slice_along(xlimits: &Array2<f64>, dim: usize, cuts: &[f64]) -> Vec<Array2<f64>> {
    let (lo, hi) = (xlimits[[dim, 0]], xlimits[[dim, 1]]);
    let bounds: Vec<f64> = std::iter::once(lo)
        .chain(cuts.iter().copied())
        .chain(std::iter::once(hi))
        .collect();
    bounds
        .windows(2)
        .map(|w| {
            let mut region = xlimits.to_owned();
            region[[dim, 0]] = w[0];
            region[[dim, 1]] = w[1];
            region
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{NodeId, Partition};
    use approx::assert_abs_diff_eq;
    use ndarray::arr2;

    #[test]
    fn test_kary() {
        let xlimits = arr2(&[[0., 3.], [10., 50.]]);
        let mut split = KarySplit::new(3);
        let regions = split.split(&xlimits, 0);
        assert_eq!(regions.len(), 3);
        assert_abs_diff_eq!(regions[0], arr2(&[[0., 1.], [10., 50.]]));
        assert_abs_diff_eq!(regions[1], arr2(&[[1., 2.], [10., 50.]]));
        assert_abs_diff_eq!(regions[2], arr2(&[[2., 3.], [10., 50.]]));

        let regions = split.split(&xlimits, 1);
        let third = 40. / 3.;
        assert_abs_diff_eq!(
            regions[0],
            arr2(&[[0., 3.], [10., 10. + third]]),
            epsilon = 1e-12
        );
        assert_abs_diff_eq!(
            regions[2],
            arr2(&[[0., 3.], [10. + 2. * third, 50.]]),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_kary_partition() {
        let mut part: KaryPartition<()> =
            PartitionTree::new(&arr2(&[[0., 3.]]), KarySplit::new(3));
        part.deepen();
        part.deepen();
        assert_eq!(part.depth(), 2);
        assert_eq!(part.node_list()[2].len(), 9);
        // middle child of the middle child
        assert_abs_diff_eq!(
            part.node(NodeId::new(2, 4)).xlimits(),
            &arr2(&[[4. / 3., 5. / 3.]]),
            epsilon = 1e-12
        );
    }

    #[test]
    #[should_panic]
    fn test_kary_one() {
        KarySplit::new(1);
    }

    #[cfg(feature = "serializable")]
    #[test]
    fn test_kary_serde() {
        let split = KarySplit::new(4);
        let json = serde_json::to_string(&split).unwrap();
        let back: KarySplit = serde_json::from_str(&json).unwrap();
        assert_eq!(split, back);
    }
}
