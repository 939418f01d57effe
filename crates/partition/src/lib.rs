/*!
This library implements hierarchical partitions of a continuous search space as used by
tree-based X-armed bandit algorithms (HOO, T-HOO, ...).

The search space is defined as a 2D ndarray `(nx, 2)`, specifying lower bound and upper bound
of each `nx` components of the points `x`, the same `xlimits` convention used by sampling methods.

A partition is a tree of regions organized in depth-indexed layers: the root covers the whole
space and each expanded node owns a contiguous range of children in the next layer.
How a region is cut into children is given by a [`Split`] strategy.

Example:
```
use xabox_partition::{BinaryPartition, BinarySplit, NodeId, Partition, PartitionTree};
use ndarray::arr2;

// Search space is [0., 1.] x [5., 10.]
let xlimits = arr2(&[[0., 1.], [5., 10.]]);
let mut part: BinaryPartition<()> = PartitionTree::new(&xlimits, BinarySplit);
part.make_children(NodeId::ROOT, true);

assert_eq!(part.depth(), 1);
assert_eq!(part.node_list()[1].len(), 2);
```

This library contains four kinds of splitting strategies:
* [Binary split](crate::BinarySplit),
* [K-ary split](crate::KarySplit),
* [Random binary split](crate::RandomBinarySplit),
* [Random k-ary split](crate::RandomKarySplit)

*/
#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]
mod binary;
mod kary;
mod node;
mod random;
mod traits;
mod tree;

pub use binary::*;
pub use kary::*;
pub use node::*;
pub use random::*;
pub use traits::*;
pub use tree::*;
