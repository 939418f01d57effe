use crate::kary::slice_along;
use crate::{PartitionTree, Split};
use ndarray::Array2;

#[cfg(feature = "serializable")]
use serde::{Deserialize, Serialize};

/// The Binary split halves a region.
///
/// The component being cut cycles with the depth of the split node:
/// component `depth % nx` is cut at its middle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serializable", derive(Serialize, Deserialize))]
pub struct BinarySplit;

impl Split for BinarySplit {
    fn split(&mut self, xlimits: &Array2<f64>, depth: usize) -> Vec<Array2<f64>> {
        let dim = depth % xlimits.nrows();
        let middle = (xlimits[[dim, 0]] + xlimits[[dim, 1]]) / 2.;
        slice_along(xlimits, dim, &[middle])
    }
}

/// A partition where each node has two children of equal size
pub type BinaryPartition<S> = PartitionTree<S, BinarySplit>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{NodeId, Partition};
    use approx::assert_abs_diff_eq;
    use ndarray::{arr2, array};

    #[test]
    fn test_binary() {
        let xlimits = arr2(&[[0., 1.], [10., 50.]]);
        let regions = BinarySplit.split(&xlimits, 3);
        assert_eq!(regions.len(), 2);
        assert_abs_diff_eq!(regions[0], arr2(&[[0., 1.], [10., 30.]]));
        assert_abs_diff_eq!(regions[1], arr2(&[[0., 1.], [30., 50.]]));
    }

    #[test]
    fn test_binary_partition_cpoints() {
        let mut part: BinaryPartition<()> = PartitionTree::new(&arr2(&[[0., 1.]]), BinarySplit);
        part.make_children(NodeId::ROOT, true);
        part.deepen();
        let cpoints: Vec<f64> = part.node_list()[2]
            .iter()
            .map(|node| node.cpoint()[0])
            .collect();
        assert_abs_diff_eq!(
            ndarray::Array1::from(cpoints),
            array![0.125, 0.375, 0.625, 0.875]
        );
    }
}
