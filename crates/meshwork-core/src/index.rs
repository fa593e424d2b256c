//! The [`Index`] and [`Shape`] aliases and row-major layout helpers.

use smallvec::SmallVec;

/// A multi-dimensional cell index, most significant dimension first.
///
/// Uses `SmallVec<[usize; 4]>` so meshes up to rank 4 never allocate
/// for an index. Higher ranks spill to the heap transparently.
pub type Index = SmallVec<[usize; 4]>;

/// Per-dimension extents of a mesh, outermost dimension first.
pub type Shape = SmallVec<[usize; 4]>;

/// Total number of cells for `shape`, or `None` on `usize` overflow.
///
/// The empty shape is not a valid mesh shape, but its product is 1.
pub fn cell_count(shape: &[usize]) -> Option<usize> {
    shape
        .iter()
        .try_fold(1usize, |acc, &extent| acc.checked_mul(extent))
}

/// Row-major strides for `shape`: the last dimension varies fastest.
///
/// `strides[k]` is the distance in cells between neighbours along
/// dimension `k`. Callers must have validated the cell count first.
pub fn row_major_strides(shape: &[usize]) -> Shape {
    let mut strides: Shape = SmallVec::from_elem(1, shape.len());
    for k in (0..shape.len().saturating_sub(1)).rev() {
        strides[k] = strides[k + 1] * shape[k + 1];
    }
    strides
}
