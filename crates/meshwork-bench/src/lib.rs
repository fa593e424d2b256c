//! Benchmark profiles for the Meshwork mesh engine.
//!
//! - [`REFERENCE_SHAPE`]: 256x256 plane (64K cells)
//! - [`VOLUME_SHAPE`]: 32x32x32 volume, same order of magnitude at rank 3
//! - [`reference_mesh`]: deterministic `f64` fill for a shape and seed

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use meshwork_core::{cell_count, MeshError};
use meshwork_mesh::Mesh;

/// Rank-2 reference shape.
pub const REFERENCE_SHAPE: [usize; 2] = [256, 256];

/// Rank-3 reference shape.
pub const VOLUME_SHAPE: [usize; 3] = [32, 32, 32];

/// Build a mesh of `shape` whose cells are a deterministic hash of
/// `seed` and the cell offset, mapped into `[0, 1)`.
pub fn reference_mesh(shape: &[usize], seed: u64) -> Result<Mesh<f64>, MeshError> {
    let count = cell_count(shape).ok_or_else(|| MeshError::Allocation {
        reason: format!("shape {shape:?} overflows usize"),
    })?;
    let cells = (0..count as u64)
        .map(|i| {
            let h = seed
                .wrapping_mul(6364136223846793005)
                .wrapping_add(i.wrapping_mul(1442695040888963407));
            (h >> 11) as f64 / (1u64 << 53) as f64
        })
        .collect();
    Mesh::from_vec(shape, cells)
}
