//! Patch accumulation: adding a sampled kernel into a box of cells.
//!
//! A patch is a real-valued box `[center, center + size)` laid over the
//! integer cell grid. [`PatchBounds::compute`] clamps it to the mesh and
//! [`accumulate`] crawls the clamped range, evaluating the kernel at each
//! cell's offset from `center` and folding the result into the cell.

use meshwork_core::{Index, MeshError};
use smallvec::SmallVec;
use tracing::trace;

use crate::cursor::Crawl;
use crate::data::MeshDataMut;

/// Integer cell range covered by a patch, clamped to the mesh.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PatchBounds {
    /// First covered index per dimension (inclusive).
    pub from: Index,
    /// One past the last covered index per dimension.
    pub to: Index,
}

impl PatchBounds {
    /// Clamp the patch at `center` with extents `size` to `shape`.
    ///
    /// Per dimension, `from = max(0, floor(center))` and
    /// `to = min(shape, ceil(center + size))`. Returns `Ok(None)` when the
    /// patch covers no cell: it lies beyond some extent, has an empty
    /// range, or has a non-finite coordinate.
    ///
    /// Returns `Err(MeshError::InvalidShape)` if `center` or `size` does
    /// not have one component per dimension.
    pub fn compute(
        shape: &[usize],
        center: &[f64],
        size: &[f64],
    ) -> Result<Option<Self>, MeshError> {
        if center.len() != shape.len() || size.len() != shape.len() {
            return Err(MeshError::InvalidShape {
                reason: format!(
                    "patch of rank {}/{} on a mesh of rank {}",
                    center.len(),
                    size.len(),
                    shape.len()
                ),
            });
        }
        let mut from = Index::with_capacity(shape.len());
        let mut to = Index::with_capacity(shape.len());
        for ((&c, &s), &extent) in center.iter().zip(size).zip(shape) {
            let end = c + s;
            if !c.is_finite() || !end.is_finite() {
                return Ok(None);
            }
            // `as` saturates, so far-off coordinates clamp instead of wrapping.
            let lo = c.floor().max(0.0) as usize;
            let hi = (end.ceil().max(0.0) as usize).min(extent);
            if lo >= hi {
                return Ok(None);
            }
            from.push(lo);
            to.push(hi);
        }
        Ok(Some(Self { from, to }))
    }

    /// Number of cells the patch covers.
    pub fn cell_count(&self) -> usize {
        self.from
            .iter()
            .zip(&self.to)
            .map(|(&lo, &hi)| hi - lo)
            .product()
    }
}

/// Fold `kernel(position - center)` into every cell the patch covers.
///
/// `combine` receives the cell and the kernel value. A patch covering no
/// cell leaves the mesh untouched.
pub fn accumulate<M, K, C>(
    mesh: &mut M,
    center: &[f64],
    mut kernel: K,
    size: &[f64],
    mut combine: C,
) -> Result<(), MeshError>
where
    M: MeshDataMut + ?Sized,
    K: FnMut(&[f64]) -> M::Elem,
    C: FnMut(&mut M::Elem, M::Elem),
{
    let Some(bounds) = PatchBounds::compute(mesh.shape(), center, size)? else {
        trace!(?center, ?size, "patch outside mesh, skipped");
        return Ok(());
    };
    trace!(from = ?bounds.from, to = ?bounds.to, cells = bounds.cell_count(), "accumulating patch");

    let rank = center.len();
    let mut position = Index::from_elem(0, rank);
    let mut offset: SmallVec<[f64; 4]> = SmallVec::from_elem(0.0, rank);
    let mut crawler = mesh.crawler_range_mut(&bounds.from, &bounds.to)?;
    while crawler.has_next() {
        crawler.advance()?;
        crawler.position(&mut position)?;
        for ((o, &p), &c) in offset.iter_mut().zip(&position).zip(center) {
            *o = p as f64 - c;
        }
        let value = kernel(&offset);
        combine(crawler.current_mut()?, value);
    }
    Ok(())
}
