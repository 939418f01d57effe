/*!
This library implements the Truncated Hierarchical Optimistic Optimization algorithm (T-HOO),
a bandit-style black-box optimizer over a continuous search space.

The search space is defined as a 2D ndarray `(nx, 2)`, specifying lower bound and upper bound
of each `nx` components of `x`. It is adaptively partitioned into a tree of shrinking regions
(see [`xabox_partition`]) and per-region confidence statistics decide, round by round, which
region is sampled next.

The optimizer follows an ask-and-tell protocol: the caller pulls a point, evaluates its
objective there and sends back the reward. Rewards are maximized.

Example:
```
use xabox_hoo::{Algorithm, Thoo, ThooParams};
use xabox_partition::BinarySplit;
use ndarray::arr2;

let rounds = 100;
let mut thoo = Thoo::new(
    ThooParams::new()
        .nu(1.)
        .rho(0.5)
        .rounds(rounds)
        .domain(&arr2(&[[0., 1.]]))
        .partition(BinarySplit),
)
.expect("T-HOO configured");

for t in 1..=rounds {
    let x = thoo.pull(t).expect("pull");
    let reward = -(x[0] - 0.3).abs();
    thoo.receive_reward(t, reward).expect("reward");
}
println!("Best point = {}", thoo.last_point());
```

Logging is done through the [`log`] facade and can be enabled with the `XABOX_LOG`
environment variable (ex: `XABOX_LOG=debug`).
*/
#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]
mod algorithm;
mod errors;
mod node;
mod params;
mod thoo;

pub use algorithm::*;
pub use errors::*;
pub use node::*;
pub use params::*;
pub use thoo::*;
