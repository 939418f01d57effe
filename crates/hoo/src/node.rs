use xabox_partition::Node;

#[cfg(feature = "serializable")]
use serde::{Deserialize, Serialize};

/// Statistics of a region for the HOO family of algorithms
///
/// Rewards are accumulated as a running sum and count, the mean is derived on demand.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serializable", derive(Serialize, Deserialize))]
pub struct HooStats {
    visited_times: usize,
    reward_sum: f64,
    /// Optimistic upper bound of the best reward within the region
    u_value: f64,
    /// Bound propagated from the subtree, used for path selection
    b_value: f64,
}

/// A partition node carrying HOO statistics
pub type HooNode = Node<HooStats>;

impl Default for HooStats {
    fn default() -> Self {
        HooStats {
            visited_times: 0,
            reward_sum: 0.,
            u_value: f64::INFINITY,
            b_value: f64::INFINITY,
        }
    }
}

impl HooStats {
    /// Records a reward obtained within the region
    pub fn update_reward(&mut self, reward: f64) {
        self.visited_times += 1;
        self.reward_sum += reward;
    }

    /// Computes the optimistic bound of a region at `depth`
    ///
    /// `u = mean + sqrt(2 ln(rounds) / visits) + nu * rho^depth`, infinite while unvisited.
    /// `rounds` is expected to be at least 1.
    pub fn compute_u_value(&mut self, depth: usize, nu: f64, rho: f64, rounds: usize) {
        self.u_value = match self.mean_reward() {
            None => f64::INFINITY,
            Some(mean) => {
                let ucb = (2. * (rounds as f64).ln() / self.visited_times as f64).sqrt();
                mean + ucb + nu * rho.powi(depth as i32)
            }
        };
    }

    /// Sets the propagated bound
    pub fn update_b_value(&mut self, b_value: f64) {
        self.b_value = b_value;
    }

    /// Number of rewards received
    pub fn visited_times(&self) -> usize {
        self.visited_times
    }

    /// Sum of the received rewards
    pub fn reward_sum(&self) -> f64 {
        self.reward_sum
    }

    /// Mean of the received rewards, `None` while unvisited
    pub fn mean_reward(&self) -> Option<f64> {
        if self.visited_times == 0 {
            None
        } else {
            Some(self.reward_sum / self.visited_times as f64)
        }
    }

    /// Optimistic upper bound, infinite while unvisited
    pub fn u_value(&self) -> f64 {
        self.u_value
    }

    /// Propagated bound used for path selection
    pub fn b_value(&self) -> f64 {
        self.b_value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_unvisited() {
        let mut stats = HooStats::default();
        stats.compute_u_value(3, 1., 0.5, 100);
        assert_eq!(stats.visited_times(), 0);
        assert_eq!(stats.mean_reward(), None);
        assert_eq!(stats.u_value(), f64::INFINITY);
        assert_eq!(stats.b_value(), f64::INFINITY);
    }

    #[test]
    fn test_update_reward() {
        let mut stats = HooStats::default();
        for r in [1., 2., 6.] {
            stats.update_reward(r);
        }
        assert_eq!(stats.visited_times(), 3);
        assert_abs_diff_eq!(stats.reward_sum(), 9.);
        assert_abs_diff_eq!(stats.mean_reward().unwrap(), 3.);
    }

    #[test]
    fn test_u_value() {
        let mut stats = HooStats::default();
        stats.update_reward(0.5);
        stats.update_reward(1.5);
        stats.compute_u_value(2, 2., 0.5, 100);
        let expected = 1. + (2. * 100f64.ln() / 2.).sqrt() + 2. * 0.25;
        assert_abs_diff_eq!(stats.u_value(), expected, epsilon = 1e-12);

        // a single round horizon has no confidence width
        stats.compute_u_value(0, 1., 0.5, 1);
        assert_abs_diff_eq!(stats.u_value(), 2., epsilon = 1e-12);
    }

    #[test]
    fn test_b_value_setter() {
        let mut stats = HooStats::default();
        stats.update_b_value(0.25);
        assert_eq!(stats.b_value(), 0.25);
        assert_eq!(stats.u_value(), f64::INFINITY);
    }

    #[cfg(feature = "serializable")]
    #[test]
    fn test_serde() {
        let mut stats = HooStats::default();
        stats.update_reward(0.5);
        stats.compute_u_value(1, 1., 0.5, 10);
        stats.update_b_value(stats.u_value());
        let json = serde_json::to_string(&stats).unwrap();
        let back: HooStats = serde_json::from_str(&json).unwrap();
        assert_eq!(back.visited_times(), 1);
        assert_abs_diff_eq!(back.u_value(), stats.u_value(), epsilon = 1e-12);
        assert_abs_diff_eq!(back.b_value(), stats.b_value(), epsilon = 1e-12);
    }
}
