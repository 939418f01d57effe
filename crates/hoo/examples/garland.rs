use ndarray::{Array1, array};
use xabox_hoo::{Algorithm, Result, Thoo, ThooParams};
use xabox_partition::BinarySplit;

/// Garland function: max f(x) = 0.997 at x = 0.523
fn garland(x: &Array1<f64>) -> f64 {
    let x = x[0];
    x * (1. - x) * (4. - (60. * x).sin().abs().sqrt())
}

fn main() -> Result<()> {
    let rounds = 1000;
    let fmax = 0.997;

    let mut thoo = Thoo::new(
        ThooParams::new()
            .nu(1.)
            .rho(0.5)
            .rounds(rounds)
            .domain(&array![[0., 1.]])
            .partition(BinarySplit),
    )?;

    let mut regret = 0.;
    for t in 1..=rounds {
        let x = thoo.pull(t)?;
        let reward = garland(&x);
        regret += fmax - reward;
        thoo.receive_reward(t, reward)?;
    }

    let x_best = thoo.last_point();
    println!(
        "T-HOO after {} rounds: x = {}, f(x) = {:.4}, cumulative regret = {:.2}",
        thoo.iteration(),
        x_best,
        garland(&x_best),
        regret
    );
    Ok(())
}
