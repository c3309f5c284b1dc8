//! 양자화 성질 테스트: 왕복 오차, 경계, 포화, 바이트 전단사, 단조성, 공유

use discretizer::{bucket_to_bytes, bytes_to_bucket, Discretizer};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

const MIN: f64 = -10.0;
const MAX: f64 = 20.0;

fn all_mappings(width: usize) -> Vec<Discretizer> {
    vec![
        Discretizer::linear(width, MIN, MAX).unwrap(),
        Discretizer::cube_root(width, MIN, MAX).unwrap(),
        Discretizer::sigmoid(width, MIN, MAX, 20.0).unwrap(),
        Discretizer::sigmoid(width, MIN, MAX, 2.0).unwrap(),
    ]
}

/// 버킷 n이 담당하는 값 구간 [lo, hi]
fn cell(d: &Discretizer, n: u64) -> (f64, f64) {
    let max = d.max_bucket_float();
    let edge = |b: f64| {
        if b <= 0.0 {
            d.value_min()
        } else if b >= 1.0 {
            d.value_max()
        } else {
            d.value_min() + d.map_decoder(b).clamp(0.0, 1.0) * d.value_range()
        }
    };
    (edge((n as f64 - 0.5) / max), edge((n as f64 + 0.5) / max))
}

#[test]
fn test_linear_round_trip_within_half_step() {
    let mut rng = StdRng::seed_from_u64(0x5eed_d15c);
    for width in 1..=4 {
        let d = Discretizer::linear(width, MIN, MAX).unwrap();
        let half_step = 0.5 * d.value_range() / d.max_bucket_float();
        for _ in 0..2_000 {
            let x = rng.gen_range(MIN..=MAX);
            let back = d.decode(&d.encode(x).unwrap()).unwrap();
            assert!(
                (back - x).abs() <= half_step + 1e-12,
                "width={} x={} back={}",
                width, x, back
            );
            // 한 양자화 단위 이내
            assert!((back - x).abs() <= d.value_range() / d.bucket_count() as f64 + 1e-12);
        }
    }
}

#[test]
fn test_round_trip_stays_in_bucket_cell() {
    let mut rng = StdRng::seed_from_u64(42);
    for width in 1..=3 {
        for d in all_mappings(width) {
            for _ in 0..1_000 {
                let x = rng.gen_range(MIN..=MAX);
                let n = d.value_to_bucket(x).unwrap();
                let back = d.bucket_to_value(n).unwrap();
                let (lo, hi) = cell(&d, n);
                let tol = 1e-9 * d.value_range();
                assert!(
                    x >= lo - tol && x <= hi + tol,
                    "{} width={} x={} bucket={} cell=[{}, {}]",
                    d.mapping(), width, x, n, lo, hi
                );
                assert!(back >= lo - tol && back <= hi + tol);
                assert!((back - x).abs() <= hi - lo + tol);
            }
        }
    }
}

#[test]
fn test_boundaries_are_exact() {
    for width in 1..=7 {
        for d in all_mappings(width) {
            assert_eq!(d.decode(&d.encode(MIN).unwrap()), Ok(MIN));
            assert_eq!(d.decode(&d.encode(MAX).unwrap()), Ok(MAX));
            assert_eq!(d.value_to_bucket(MIN), Ok(0));
            assert_eq!(d.value_to_bucket(MAX), Ok(d.max_bucket()));
        }
    }
}

#[test]
fn test_out_of_range_values_saturate() {
    for width in 1..=7 {
        for d in all_mappings(width) {
            let lo = d.encode(MIN).unwrap();
            let hi = d.encode(MAX).unwrap();
            for eps in [1e-9, 0.5, 1e3, 1e300] {
                assert_eq!(d.encode(MIN - eps).unwrap(), lo);
                assert_eq!(d.encode(MAX + eps).unwrap(), hi);
            }
        }
    }
}

#[test]
fn test_bucket_bytes_bijection() {
    let mut rng = StdRng::seed_from_u64(7);
    for width in 1..=7usize {
        let max = (1u64 << (8 * width)) - 1;
        let samples = (0..500)
            .map(|_| rng.gen_range(0..=max))
            .chain([0, max, max >> 8, 1u64 << (8 * width - 1)]);
        for n in samples {
            let bytes = bucket_to_bytes(n, width);
            assert_eq!(bytes.len(), width);
            assert_eq!(bytes_to_bucket(&bytes), Ok(n));
        }
    }

    // 1바이트는 전수 검사
    for n in 0..=255u64 {
        assert_eq!(bytes_to_bucket(&bucket_to_bytes(n, 1)), Ok(n));
    }
}

#[test]
fn test_encode_output_width_is_fixed() {
    let mut rng = StdRng::seed_from_u64(99);
    for width in 1..=7 {
        for d in all_mappings(width) {
            for _ in 0..100 {
                let x = rng.gen_range(MIN - 5.0..=MAX + 5.0);
                assert_eq!(d.encode(x).unwrap().len(), width);
            }
        }
    }
}

#[test]
fn test_linear_monotonic() {
    let mut rng = StdRng::seed_from_u64(1234);
    let d = Discretizer::linear(3, MIN, MAX).unwrap();
    let mut xs: Vec<f64> = (0..5_000).map(|_| rng.gen_range(MIN - 1.0..=MAX + 1.0)).collect();
    xs.sort_by(|a, b| a.partial_cmp(b).unwrap());
    let buckets: Vec<u64> = xs.iter().map(|&x| d.value_to_bucket(x).unwrap()).collect();
    assert!(buckets.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn test_shared_across_threads() {
    let d = Discretizer::sigmoid(2, MIN, MAX, 8.0).unwrap();
    let expected: Vec<Vec<u8>> = (0..10_000)
        .map(|i| d.encode(MIN + i as f64 * 0.003).unwrap())
        .collect();

    let parallel: Vec<Vec<u8>> = (0..10_000)
        .into_par_iter()
        .map(|i| d.encode(MIN + i as f64 * 0.003).unwrap())
        .collect();

    assert_eq!(parallel, expected);
}
