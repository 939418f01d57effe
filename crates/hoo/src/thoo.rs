//! Truncated hierarchical optimistic optimization (T-HOO).
//!
//! T-HOO grows a partition of the search space one node per round and selects the next
//! region to sample by following the highest propagated bound from the root. Compared to HOO,
//! nodes deeper than a truncation depth computed from the horizon are never expanded, which
//! bounds the size of the tree.
//!
//! Reference: Bubeck, Munos, Stoltz, Szepesvári (2011), *X-Armed Bandits*, JMLR.
use crate::errors::{HooError, Result};
use crate::node::HooStats;
use crate::params::{ThooParams, ThooValidParams, MISSING_DOMAIN, MISSING_PARTITION};
use crate::Algorithm;

use env_logger::{Builder, Env};
use linfa::ParamGuard;
use log::{debug, info};
use ndarray::Array1;
use xabox_partition::{NodeId, Partition, PartitionTree, Split};

/// T-HOO optimizer over a partition `P` whose nodes carry [`HooStats`]
#[derive(Clone, Debug)]
pub struct Thoo<P: Partition<HooStats>> {
    nu: f64,
    rho: f64,
    rounds: usize,
    /// Nodes at a depth greater than this are never expanded
    max_depth: i64,
    partition: P,
    iteration: usize,
    /// Path selected by the last pull, pending until its reward is received
    path: Option<Vec<NodeId>>,
}

impl<Sp: Split> Thoo<PartitionTree<HooStats, Sp>> {
    /// Constructor of T-HOO given its parameters, the root of the partition is expanded.
    ///
    /// Fails with [`HooError::InvalidConfigError`] when the search space or the partition
    /// strategy is missing, or when a hyperparameter is out of range.
    ///
    /// ```
    /// use xabox_hoo::{Algorithm, Thoo, ThooParams};
    /// use xabox_partition::BinarySplit;
    /// use ndarray::arr2;
    ///
    /// let mut thoo = Thoo::new(
    ///     ThooParams::new()
    ///         .rounds(10)
    ///         .domain(&arr2(&[[0., 1.]]))
    ///         .partition(BinarySplit),
    /// )
    /// .expect("T-HOO configured");
    /// let x = thoo.pull(1).unwrap();
    /// thoo.receive_reward(1, 1. - x[0]).unwrap();
    /// assert_eq!(thoo.iteration(), 1);
    /// ```
    pub fn new(params: ThooParams<Sp>) -> Result<Self> {
        let env = Env::new().filter_or("XABOX_LOG", "info");
        let mut builder = Builder::from_env(env);
        let builder = builder.target(env_logger::Target::Stdout);
        builder.try_init().ok();

        let ThooValidParams {
            nu,
            rho,
            rounds,
            xlimits,
            split,
        } = params.check()?;
        // both present once checked
        let xlimits =
            xlimits.ok_or_else(|| HooError::InvalidConfigError(MISSING_DOMAIN.to_string()))?;
        let split =
            split.ok_or_else(|| HooError::InvalidConfigError(MISSING_PARTITION.to_string()))?;

        let thoo = Thoo::from_partition(nu, rho, rounds, PartitionTree::new(&xlimits, split));
        info!(
            "T-HOO nu={nu}, rho={rho}, rounds={rounds}, dim={}, truncation depth={}",
            xlimits.nrows(),
            thoo.max_depth
        );
        Ok(thoo)
    }
}

impl<P: Partition<HooStats>> Thoo<P> {
    /// Builds the optimizer over an unexpanded partition, hyperparameters are expected valid.
    fn from_partition(nu: f64, rho: f64, rounds: usize, partition: P) -> Self {
        let mut thoo = Thoo {
            nu,
            rho,
            rounds,
            max_depth: truncation_depth(nu, rho, rounds),
            partition,
            iteration: 0,
            path: None,
        };
        thoo.expand(NodeId::ROOT);
        thoo
    }

    /// Number of rewards received so far
    pub fn iteration(&self) -> usize {
        self.iteration
    }

    /// Smoothness scale
    pub fn nu(&self) -> f64 {
        self.nu
    }

    /// Smoothness decay
    pub fn rho(&self) -> f64 {
        self.rho
    }

    /// Horizon
    pub fn rounds(&self) -> usize {
        self.rounds
    }

    /// Truncation depth `D* = ceil((ln(rounds) / 2 - ln(1 / nu)) / ln(1 / rho))`:
    /// leaves deeper than `D*` are not expanded
    pub fn truncation_depth(&self) -> i64 {
        self.max_depth
    }

    /// The partition built so far
    pub fn partition(&self) -> &P {
        &self.partition
    }

    /// Path selected by the pending round if any
    pub fn current_path(&self) -> Option<&[NodeId]> {
        self.path.as_deref()
    }

    /// Walks down from the root, moving at each level to the child with the highest b-value.
    ///
    /// Children are scanned in order and a later child with an equal b-value replaces the
    /// current best, so the last of tied children wins.
    /// Returns the reached leaf and the path from the root to it.
    pub fn select(&self) -> (NodeId, Vec<NodeId>) {
        let mut curr = NodeId::ROOT;
        let mut path = vec![curr];
        let mut node = self.partition.node(curr);
        while let Some(children) = node.children() {
            let depth = node.depth() + 1;
            let mut best = NodeId::new(depth, children.start);
            let mut best_b = self.partition.node(best).stats().b_value();
            for index in children.skip(1) {
                let id = NodeId::new(depth, index);
                let b = self.partition.node(id).stats().b_value();
                if b >= best_b {
                    best = id;
                    best_b = b;
                }
            }
            curr = best;
            path.push(curr);
            node = self.partition.node(curr);
        }
        (curr, path)
    }

    /// Credits the reward to every node of the path
    fn update_reward_tree(&mut self, path: &[NodeId], reward: f64) {
        for &id in path {
            self.partition.node_mut(id).stats_mut().update_reward(reward);
        }
        self.iteration += 1;
    }

    /// Recomputes the u-value of every node of the tree
    fn update_u_value_tree(&mut self) {
        let (nu, rho, rounds) = (self.nu, self.rho, self.rounds);
        for id in self.partition.node_ids() {
            self.partition
                .node_mut(id)
                .stats_mut()
                .compute_u_value(id.depth, nu, rho, rounds);
        }
    }

    /// Recomputes the b-value of every node from the deepest layer up to the root:
    /// a leaf takes its u-value, an inner node `min(u, max of children b)`.
    fn update_backward_tree(&mut self) {
        for depth in (0..=self.partition.depth()).rev() {
            for index in 0..self.partition.node_list()[depth].len() {
                let id = NodeId::new(depth, index);
                let node = self.partition.node(id);
                let u = node.stats().u_value();
                let b = if node.is_leaf() {
                    u
                } else {
                    let max_child = node
                        .children_ids()
                        .map(|child| self.partition.node(child).stats().b_value())
                        .fold(f64::NEG_INFINITY, f64::max);
                    u.min(max_child)
                };
                self.partition.node_mut(id).stats_mut().update_b_value(b);
            }
        }
    }

    /// Creates the children of `parent`, opening a new layer when it lies in the deepest one
    fn expand(&mut self, parent: NodeId) {
        let new_layer = parent.depth >= self.partition.depth();
        self.partition.make_children(parent, new_layer);
    }

    fn update_all_tree(&mut self, path: &[NodeId], reward: f64) {
        self.update_reward_tree(path, reward);
        self.update_u_value_tree();
        if let Some(&leaf) = path.last() {
            if leaf.depth as i64 <= self.max_depth {
                debug!("Expand node {leaf:?}");
                self.expand(leaf);
            } else {
                debug!(
                    "Node {leaf:?} not expanded (truncation depth {})",
                    self.max_depth
                );
            }
        }
        self.update_backward_tree();
    }
}

impl<P: Partition<HooStats>> Algorithm for Thoo<P> {
    fn pull(&mut self, time: usize) -> Result<Array1<f64>> {
        if self.path.is_some() {
            return Err(HooError::ProtocolError(format!(
                "pull at time {time} while previous round is waiting for its reward"
            )));
        }
        let (leaf, path) = self.select();
        debug!("Round {time}: select node {leaf:?}");
        self.path = Some(path);
        Ok(self.partition.node(leaf).cpoint())
    }

    fn receive_reward(&mut self, time: usize, reward: f64) -> Result<()> {
        if !reward.is_finite() {
            return Err(HooError::InvalidValueError(format!(
                "reward at time {time} should be finite, got {reward}"
            )));
        }
        let path = self.path.take().ok_or_else(|| {
            HooError::ProtocolError(format!("reward received at time {time} without a pull"))
        })?;
        self.update_all_tree(&path, reward);
        Ok(())
    }

    fn last_point(&self) -> Array1<f64> {
        let (leaf, _) = self.select();
        self.partition.node(leaf).cpoint()
    }

    fn iteration(&self) -> usize {
        self.iteration
    }
}

fn truncation_depth(nu: f64, rho: f64, rounds: usize) -> i64 {
    (((rounds as f64).ln() / 2. - (1. / nu).ln()) / (1. / rho).ln()).ceil() as i64
}
