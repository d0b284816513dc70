//! Benchmarks reconstruction of a secret from n shares over primes of increasing size.
use criterion::*;
use lagrange::{Interpolator, Modulus, Points};
use num_bigint::{BigUint, RandBigInt};
use rand::{SeedableRng, rngs::StdRng};

fn benchmarks_interpolate(c: &mut Criterion) {
  let mut group = c.benchmark_group("interpolate");
  let mut rng = StdRng::seed_from_u64(42);
  let primes: [(&str, u128); 3] = [
    ("p24", 15485867),
    ("p61", (1 << 61) - 1),
    ("p127", (1 << 127) - 1),
  ];

  for (label, p) in primes {
    let prime = Modulus::new(p).unwrap();
    for n in [4usize, 16, 64] {
      let shares: Vec<BigUint> = (0..n).map(|_| rng.gen_biguint_below(prime.value())).collect();
      let points = Points::from(shares).normalize().unwrap();
      group.bench_with_input(format!("{label}/n={n}"), &n, |b, &_n| {
        b.iter(|| {
          Interpolator::new()
            .interpolate_map(black_box(&points), &prime)
            .unwrap()
        });
      });
    }
  }
  group.finish();
}

criterion_group!(benches, benchmarks_interpolate);
criterion_main!(benches);
