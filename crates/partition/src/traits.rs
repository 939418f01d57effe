use ndarray::Array2;

use crate::{Node, NodeId};

/// Splitting strategy of a partition
///
/// A split strategy cuts a region of the search space into an ordered list of sub-regions.
/// The region is given as a (nx, 2) matrix where the ith row is the interval of the ith
/// component, and the returned sub-regions follow the same convention.
pub trait Split {
    /// Cuts the region `xlimits` of a node at `depth` into sub-regions
    ///
    /// # Parameters
    ///
    /// * `xlimits`: the (nx, 2) region to split
    /// * `depth`: depth of the node being split
    ///
    /// # Returns
    ///
    /// * The list of children regions, in the order they are stored in the next layer.
    ///   At least 2 regions are expected, a partition panics otherwise.
    fn split(&mut self, xlimits: &Array2<f64>, depth: usize) -> Vec<Array2<f64>>;
}

/// Hierarchical partition of a search space whose nodes carry statistics `S`
///
/// Nodes are grouped by depth: layer 0 holds the root, layer `d` holds every node at depth `d`
/// in insertion order.
pub trait Partition<S> {
    /// Returns the root node
    fn root(&self) -> &Node<S> {
        self.node(NodeId::ROOT)
    }

    /// Returns the node at the given address
    ///
    /// **Panics** if the address does not exist
    fn node(&self, id: NodeId) -> &Node<S>;

    /// Returns the mutable node at the given address
    ///
    /// **Panics** if the address does not exist
    fn node_mut(&mut self, id: NodeId) -> &mut Node<S>;

    /// Returns all nodes grouped by layer, depth 0 first
    fn node_list(&self) -> &[Vec<Node<S>>];

    /// Returns the current maximum allocated depth
    fn depth(&self) -> usize;

    /// Creates the children of `parent`
    ///
    /// When `new_layer` is true children start a new deepest layer,
    /// otherwise they are appended to the already existing next layer.
    fn make_children(&mut self, parent: NodeId, new_layer: bool);

    /// Returns the addresses of every node, layer by layer
    fn node_ids(&self) -> Vec<NodeId> {
        self.node_list()
            .iter()
            .flat_map(|layer| layer.iter().map(|node| node.id()))
            .collect()
    }
}
