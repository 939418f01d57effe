use criterion::{Criterion, criterion_group, criterion_main};
use ndarray::{Array1, arr2};
use xabox_hoo::{Algorithm, Thoo, ThooParams};
use xabox_partition::{BinarySplit, KarySplit};

fn himmelblau(x: &Array1<f64>) -> f64 {
    -((x[0] * x[0] + x[1] - 11.).powi(2) + (x[0] + x[1] * x[1] - 7.).powi(2))
}

fn criterion_thoo(c: &mut Criterion) {
    let rounds = [100, 500];
    let xlimits = arr2(&[[-5., 5.], [-5., 5.]]);

    let mut group = c.benchmark_group("thoo");
    group.sample_size(10);
    for n in rounds {
        group.bench_function(format!("thoo-binary-{n}-rounds"), |b| {
            b.iter(|| {
                let mut thoo = Thoo::new(
                    ThooParams::new()
                        .rounds(n)
                        .domain(&xlimits)
                        .partition(BinarySplit),
                )
                .expect("T-HOO configured");
                for t in 1..=n {
                    let x = thoo.pull(t).expect("pull");
                    thoo.receive_reward(t, himmelblau(&x)).expect("reward");
                }
                std::hint::black_box(thoo.last_point())
            });
        });
        group.bench_function(format!("thoo-ternary-{n}-rounds"), |b| {
            b.iter(|| {
                let mut thoo = Thoo::new(
                    ThooParams::new()
                        .rounds(n)
                        .domain(&xlimits)
                        .partition(KarySplit::new(3)),
                )
                .expect("T-HOO configured");
                for t in 1..=n {
                    let x = thoo.pull(t).expect("pull");
                    thoo.receive_reward(t, himmelblau(&x)).expect("reward");
                }
                std::hint::black_box(thoo.last_point())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, criterion_thoo);
criterion_main!(benches);
