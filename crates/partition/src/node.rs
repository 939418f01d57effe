use std::ops::Range;

use ndarray::{Array1, Array2};

#[cfg(feature = "serializable")]
use serde::{Deserialize, Serialize};

/// Address of a node within the layered storage of a partition
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serializable", derive(Serialize, Deserialize))]
pub struct NodeId {
    /// Distance from the root
    pub depth: usize,
    /// Position within the layer at `depth`
    pub index: usize,
}

impl NodeId {
    /// The root node address
    pub const ROOT: NodeId = NodeId { depth: 0, index: 0 };

    /// Constructor
    pub fn new(depth: usize, index: usize) -> Self {
        NodeId { depth, index }
    }
}

/// A region of the search space and the statistics `S` attached to it.
///
/// Nodes are owned by their partition. The parent link is a plain address used for
/// bookkeeping and children are a contiguous index range into the next layer.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serializable", derive(Serialize, Deserialize))]
pub struct Node<S> {
    depth: usize,
    index: usize,
    /// Region as a (nx, 2) matrix \[\[lower bound, upper bound\], ...\]
    xlimits: Array2<f64>,
    parent: Option<NodeId>,
    children: Option<Range<usize>>,
    stats: S,
}

impl<S: Default> Node<S> {
    pub(crate) fn new(
        depth: usize,
        index: usize,
        parent: Option<NodeId>,
        xlimits: Array2<f64>,
    ) -> Self {
        Node {
            depth,
            index,
            xlimits,
            parent,
            children: None,
            stats: S::default(),
        }
    }
}

impl<S> Node<S> {
    /// Depth of the node, the root being at depth 0
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Position of the node within its layer
    pub fn index(&self) -> usize {
        self.index
    }

    /// Address of the node
    pub fn id(&self) -> NodeId {
        NodeId::new(self.depth, self.index)
    }

    /// Region covered by the node as a (nx, 2) matrix
    pub fn xlimits(&self) -> &Array2<f64> {
        &self.xlimits
    }

    /// Address of the parent node, `None` for the root
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Index range of the children within the next layer, `None` while not expanded
    pub fn children(&self) -> Option<Range<usize>> {
        self.children.clone()
    }

    /// Addresses of the children, empty while not expanded
    pub fn children_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        let depth = self.depth + 1;
        self.children
            .clone()
            .into_iter()
            .flatten()
            .map(move |index| NodeId::new(depth, index))
    }

    /// Whether the node has not been expanded yet
    pub fn is_leaf(&self) -> bool {
        self.children.is_none()
    }

    /// Representative point of the region: its center
    pub fn cpoint(&self) -> Array1<f64> {
        (&self.xlimits.column(0) + &self.xlimits.column(1)) / 2.
    }

    /// Statistics attached to the node
    pub fn stats(&self) -> &S {
        &self.stats
    }

    /// Mutable statistics attached to the node
    pub fn stats_mut(&mut self) -> &mut S {
        &mut self.stats
    }

    pub(crate) fn set_children(&mut self, children: Range<usize>) {
        self.children = Some(children);
    }
}
