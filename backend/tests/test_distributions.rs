//! Tests for real-valued distributions
//!
//! Bounds are checked on every sample; moments use large samples with
//! tolerances well beyond sampling error.

use chi_rng::{Distribution, Engine};

const SAMPLE_N: usize = 256;
const LARGE_N: usize = 200_000;

struct Moments {
    mean: f64,
    std_dev: f64,
}

fn moments(samples: &[f64]) -> Moments {
    let n = samples.len() as f64;
    let mean = samples.iter().sum::<f64>() / n;
    let var = samples.iter().map(|x| (x - mean) * (x - mean)).sum::<f64>() / (n - 1.0);
    Moments {
        mean,
        std_dev: var.sqrt(),
    }
}

fn correlation(pairs: &[(f64, f64)]) -> f64 {
    let xs: Vec<f64> = pairs.iter().map(|p| p.0).collect();
    let ys: Vec<f64> = pairs.iter().map(|p| p.1).collect();
    let (mx, my) = (moments(&xs), moments(&ys));
    let n = pairs.len() as f64;
    let cov = pairs
        .iter()
        .map(|(x, y)| (x - mx.mean) * (y - my.mean))
        .sum::<f64>()
        / (n - 1.0);
    cov / (mx.std_dev * my.std_dev)
}

fn draw(engine: &mut Engine, n: usize, f: impl Fn(&mut Engine) -> f64) -> Vec<f64> {
    (0..n).map(|_| f(engine)).collect()
}

fn assert_close(actual: f64, expected: f64, tolerance: f64, what: &str) {
    assert!(
        (actual - expected).abs() < tolerance,
        "{}: expected {} ± {}, got {}",
        what,
        expected,
        tolerance,
        actual
    );
}

#[test]
fn test_one_bounds_and_moments() {
    let mut engine = Engine::with_seed(101);
    let xs = draw(&mut engine, LARGE_N, Engine::one);
    assert!(xs.iter().all(|&x| (0.0..1.0).contains(&x)));

    let m = moments(&xs);
    assert_close(m.mean, 0.5, 0.01, "one() mean");
    assert_close(m.std_dev, 0.288675, 0.01, "one() stdev");
}

#[test]
fn test_one_r_bounds() {
    let mut engine = Engine::with_seed(102);
    let xs = draw(&mut engine, LARGE_N, Engine::one_r);
    assert!(xs.iter().all(|&x| x > 0.0 && x <= 1.0));
}

#[test]
fn test_two_bounds_and_moments() {
    let mut engine = Engine::with_seed(103);
    let xs = draw(&mut engine, LARGE_N, Engine::two);
    assert!(xs.iter().all(|&x| (-1.0..1.0).contains(&x)));

    let m = moments(&xs);
    assert_close(m.mean, 0.0, 0.01, "two() mean");
    assert_close(m.std_dev, 0.57735, 0.01, "two() stdev");
}

#[test]
fn test_two_r_bounds() {
    let mut engine = Engine::with_seed(104);
    let xs = draw(&mut engine, LARGE_N, Engine::two_r);
    assert!(xs.iter().all(|&x| x > -1.0 && x <= 1.0));
}

#[test]
fn test_tri_bounds_and_moments() {
    let mut engine = Engine::with_seed(105);
    let xs = draw(&mut engine, LARGE_N, Engine::tri);
    assert!(xs.iter().all(|&x| x > -1.0 && x < 1.0));

    let m = moments(&xs);
    assert_close(m.mean, 0.0, 0.01, "tri() mean");
    assert_close(m.std_dev, 1.0 / 6f64.sqrt(), 0.03, "tri() stdev");
}

#[test]
fn test_exp_bounds_and_moments() {
    let mut engine = Engine::with_seed(106);
    let xs = draw(&mut engine, LARGE_N, Engine::exp);
    assert!(xs.iter().all(|&x| x >= 0.0 && x.is_finite()));

    let m = moments(&xs);
    assert_close(m.mean, 1.0, 0.02, "exp() mean");
    assert_close(m.std_dev, 1.0, 0.03, "exp() stdev");
}

#[test]
fn test_normal_moments() {
    let mut engine = Engine::with_seed(107);
    let mut xs = Vec::with_capacity(LARGE_N);
    for _ in 0..LARGE_N / 2 {
        let (x, y) = engine.normal();
        xs.push(x);
        xs.push(y);
    }

    let m = moments(&xs);
    assert_close(m.mean, 0.0, 0.02, "normal() mean");
    assert_close(m.std_dev, 1.0, 0.02, "normal() stdev");
    assert!(xs.iter().all(|x| x.abs() < 10.0));
}

#[test]
fn test_normal_pair_uncorrelated() {
    let mut engine = Engine::with_seed(108);
    let pairs: Vec<(f64, f64)> = (0..SAMPLE_N).map(|_| engine.normal()).collect();
    let corr = correlation(&pairs);
    assert!(corr.abs() < 0.5, "unexpected correlation: {}", corr);
}

#[test]
fn test_tri2_pair_uncorrelated() {
    let mut engine = Engine::with_seed(109);
    let pairs: Vec<(f64, f64)> = (0..SAMPLE_N).map(|_| engine.tri2()).collect();
    let corr = correlation(&pairs);
    assert!(corr.abs() < 0.5, "unexpected correlation: {}", corr);
}

#[test]
fn test_consecutive_one_uncorrelated() {
    let mut engine = Engine::with_seed(110);
    let pairs: Vec<(f64, f64)> = (0..SAMPLE_N).map(|_| (engine.one(), engine.one())).collect();
    let corr = correlation(&pairs);
    assert!(corr.abs() < 0.5, "unexpected correlation: {}", corr);
}

#[test]
fn test_sampler_means() {
    let cases = [
        Distribution::Uniform { low: 10.0, high: 20.0 },
        Distribution::Triangular { low: 0.0, mode: 1.0, high: 5.0 },
        Distribution::Exponential { rate: 4.0 },
        Distribution::Normal { mean: -3.0, std_dev: 2.0 },
        Distribution::LogNormal { mean: 0.0, std_dev: 0.25 },
    ];

    let mut engine = Engine::with_seed(111);
    for dist in cases {
        dist.validate().unwrap();
        let xs = draw(&mut engine, LARGE_N, |e| dist.sample(e));
        let m = moments(&xs);
        let tolerance = 0.02 * dist.mean().abs().max(1.0);
        assert_close(m.mean, dist.mean(), tolerance, &format!("{:?} mean", dist));
    }
}

#[test]
fn test_sampler_from_json_config() {
    let json = r#"[
        {"type": "Uniform", "low": -1.0, "high": 1.0},
        {"type": "Normal", "mean": 5.0, "std_dev": 0.5}
    ]"#;
    let dists: Vec<Distribution> = serde_json::from_str(json).unwrap();
    assert_eq!(dists.len(), 2);
    assert_eq!(dists[0], Distribution::Uniform { low: -1.0, high: 1.0 });
    assert!(dists.iter().all(|d| d.validate().is_ok()));
}
