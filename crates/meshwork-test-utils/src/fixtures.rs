//! Reusable mesh fixtures.
//!
//! - [`ramp_mesh`]: cell `i` (row-major) holds `i`, so a value names its
//!   own storage offset.
//! - [`random_f64_mesh`] / [`random_i32_mesh`]: seeded ChaCha8 fills,
//!   identical across runs and platforms for a given seed.
//! - [`gaussian_kernel`]: an isotropic Gaussian for patch accumulation.

use meshwork_core::{cell_count, Numeric};
use meshwork_mesh::Mesh;
use rand_chacha::rand_core::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Mesh whose cells count up from zero in row-major order.
///
/// Panics if `shape` is not a valid mesh shape.
pub fn ramp_mesh<T: Numeric>(shape: &[usize]) -> Mesh<T> {
    let count = cell_count(shape).expect("ramp shape overflows usize");
    let cells = (0..count).map(|i| T::from_f64(i as f64)).collect();
    Mesh::from_vec(shape, cells).expect("ramp shape must be a valid mesh shape")
}

/// Uniform sample in `[0, 1)` with 53 bits of precision.
fn unit_f64(rng: &mut ChaCha8Rng) -> f64 {
    (rng.next_u64() >> 11) as f64 / (1u64 << 53) as f64
}

/// Mesh of uniform samples in `[-1, 1)`.
pub fn random_f64_mesh(shape: &[usize], seed: u64) -> Mesh<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let count = cell_count(shape).expect("random shape overflows usize");
    let cells = (0..count).map(|_| unit_f64(&mut rng) * 2.0 - 1.0).collect();
    Mesh::from_vec(shape, cells).expect("random shape must be a valid mesh shape")
}

/// Mesh of integers uniform in `[-bound, bound]`.
pub fn random_i32_mesh(shape: &[usize], seed: u64, bound: i32) -> Mesh<i32> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let span = u64::from(bound.unsigned_abs()) * 2 + 1;
    let count = cell_count(shape).expect("random shape overflows usize");
    let cells = (0..count)
        .map(|_| (rng.next_u64() % span) as i64 - i64::from(bound.unsigned_abs()))
        .map(|v| v as i32)
        .collect();
    Mesh::from_vec(shape, cells).expect("random shape must be a valid mesh shape")
}

/// `amplitude * exp(-|offset|^2 / (2 sigma^2))`.
pub fn gaussian_kernel(amplitude: f64, sigma: f64) -> impl Fn(&[f64]) -> f64 {
    let denom = 2.0 * sigma * sigma;
    move |offset: &[f64]| {
        let r2: f64 = offset.iter().map(|o| o * o).sum();
        amplitude * (-r2 / denom).exp()
    }
}
