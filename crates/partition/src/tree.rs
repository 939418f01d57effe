use ndarray::{Array2, ArrayBase, Data, Ix2};

use crate::{Node, NodeId, Partition, Split};

/// A partition stored as an arena of layers
///
/// Layer `d` is a vector of every node at depth `d`. Children of a given parent are
/// allocated together so they form a contiguous range of their layer.
#[derive(Clone, Debug)]
pub struct PartitionTree<S, Sp: Split> {
    layers: Vec<Vec<Node<S>>>,
    split: Sp,
}

impl<S: Default, Sp: Split> PartitionTree<S, Sp> {
    /// Constructor given a search space as a (nx, 2) matrix \[\[lower bound, upper bound\], ...\]
    /// and a split strategy. Only the root node is created.
    ///
    /// **Panics** if xlimits number of columns is different from 2.
    ///
    /// ```
    /// use xabox_partition::{KarySplit, Partition, PartitionTree};
    /// use ndarray::arr2;
    ///
    /// let part: PartitionTree<(), _> = PartitionTree::new(&arr2(&[[0.0, 1.0]]), KarySplit::new(3));
    /// assert_eq!(part.depth(), 0);
    /// ```
    pub fn new(xlimits: &ArrayBase<impl Data<Elem = f64>, Ix2>, split: Sp) -> Self {
        if xlimits.ncols() != 2 {
            panic!("xlimits must have 2 columns (lower, upper)");
        }
        PartitionTree {
            layers: vec![vec![Node::new(0, 0, None, xlimits.to_owned())]],
            split,
        }
    }

    /// The split strategy used to create children
    pub fn split_strategy(&self) -> &Sp {
        &self.split
    }

    /// Total number of nodes over all layers
    pub fn len(&self) -> usize {
        self.layers.iter().map(|layer| layer.len()).sum()
    }

    /// A partition always holds its root
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Creates the children of every node of the deepest layer at once
    pub fn deepen(&mut self) {
        let depth = self.depth();
        for index in 0..self.layers[depth].len() {
            self.make_children(NodeId::new(depth, index), index == 0);
        }
    }
}

impl<S: Default, Sp: Split> Partition<S> for PartitionTree<S, Sp> {
    fn node(&self, id: NodeId) -> &Node<S> {
        &self.layers[id.depth][id.index]
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node<S> {
        &mut self.layers[id.depth][id.index]
    }

    fn node_list(&self) -> &[Vec<Node<S>>] {
        &self.layers
    }

    fn depth(&self) -> usize {
        self.layers.len() - 1
    }

    /// **Panics** if `parent` is already expanded, if the split strategy returns less than two
    /// regions, if a new layer is requested for a parent which is not in the deepest layer,
    /// or if the next layer does not exist yet.
    fn make_children(&mut self, parent: NodeId, new_layer: bool) {
        let regions: Vec<Array2<f64>> = {
            let node = &self.layers[parent.depth][parent.index];
            if !node.is_leaf() {
                panic!("node {parent:?} is already expanded");
            }
            self.split.split(node.xlimits(), parent.depth)
        };
        if regions.len() < 2 {
            panic!(
                "split of node {parent:?} should give at least 2 regions, got {}",
                regions.len()
            );
        }

        let depth = parent.depth + 1;
        if new_layer {
            if depth != self.layers.len() {
                panic!(
                    "new layer requested at depth {depth} while partition depth is {}",
                    self.depth()
                );
            }
            self.layers.push(Vec::with_capacity(regions.len()));
        }
        let layer = &mut self.layers[depth];
        let start = layer.len();
        layer.extend(
            regions
                .into_iter()
                .enumerate()
                .map(|(i, xlimits)| Node::new(depth, start + i, Some(parent), xlimits)),
        );
        let end = layer.len();
        self.node_mut(parent).set_children(start..end);
    }
}
