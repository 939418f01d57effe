use crate::errors::Result;
use ndarray::Array1;

/// Interface of a sequential X-armed bandit algorithm
///
/// A round consists in a [`pull`](Algorithm::pull) returning the point to evaluate,
/// followed by a [`receive_reward`](Algorithm::receive_reward) with the value observed
/// at that point. The evaluation of the objective is left to the caller.
pub trait Algorithm {
    /// Returns the next point to evaluate
    ///
    /// `time` is the round index given by the caller.
    fn pull(&mut self, time: usize) -> Result<Array1<f64>>;

    /// Updates the algorithm with the reward observed at the last pulled point
    fn receive_reward(&mut self, time: usize, reward: f64) -> Result<()>;

    /// Returns the point the algorithm would currently select, without starting a round
    fn last_point(&self) -> Array1<f64>;

    /// Number of rewards received so far
    fn iteration(&self) -> usize;
}
