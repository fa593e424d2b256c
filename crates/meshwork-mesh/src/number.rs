//! [`NumberMesh`]: elementwise arithmetic over scalar meshes.
//!
//! Every operation is a lock-step crawl plus one of the [`Numeric`]
//! primitives, so one implementation serves all six scalar types.
//! Integer meshes wrap on overflow.

use meshwork_core::{MeshError, Numeric};

use crate::cursor::Crawl;
use crate::data::{MeshData, MeshDataMut};
use crate::lockstep::{for_each_mut, zip3_with, zip_with};
use crate::patch::accumulate;

/// Arithmetic on meshes of [`Numeric`] elements.
///
/// Implemented for every [`MeshDataMut`] whose element type is numeric:
/// owning meshes and mutable views alike. Binary and ternary operations
/// return `Err(MeshError::ShapeMismatch)` before touching any cell when
/// an operand does not conform.
pub trait NumberMesh: MeshDataMut {
    /// `self[i] = self[i] + other[i]`.
    fn add<O>(&mut self, other: &O) -> Result<(), MeshError>
    where
        O: MeshData<Elem = Self::Elem> + ?Sized;

    /// `self[i] = self[i] - other[i]`.
    fn subtract<O>(&mut self, other: &O) -> Result<(), MeshError>
    where
        O: MeshData<Elem = Self::Elem> + ?Sized;

    /// `self[i] = self[i] + other[i] * factor`.
    ///
    /// The addend is promoted to `f64`, scaled, and summed in `f64`; the
    /// result is cast back to the element type. Integer meshes truncate,
    /// and `i64` values above 2^53 lose precision.
    fn add_scaled<O>(&mut self, other: &O, factor: f64) -> Result<(), MeshError>
    where
        O: MeshData<Elem = Self::Elem> + ?Sized;

    /// `self[i] = a[i] + b[i]`.
    fn set_sum<A, B>(&mut self, a: &A, b: &B) -> Result<(), MeshError>
    where
        A: MeshData<Elem = Self::Elem> + ?Sized,
        B: MeshData<Elem = Self::Elem> + ?Sized;

    /// `self[i] = a[i] - b[i]`.
    fn set_difference<A, B>(&mut self, a: &A, b: &B) -> Result<(), MeshError>
    where
        A: MeshData<Elem = Self::Elem> + ?Sized,
        B: MeshData<Elem = Self::Elem> + ?Sized;

    /// `self[i] = cast(self[i] as f64 * factor)`.
    fn scale(&mut self, factor: f64);

    /// Whether every element promotes to exactly `0.0`.
    fn is_null(&self) -> bool;

    /// Set every element to `value`.
    fn fill(&mut self, value: Self::Elem);

    /// Set every element of the rectangular range `[from, to)` to `value`.
    ///
    /// Returns `Err(MeshError::IndexOutOfRange)` for bounds the mesh
    /// cannot hold.
    fn fill_range(&mut self, from: &[usize], to: &[usize], value: Self::Elem)
        -> Result<(), MeshError>;

    /// Set every element to zero.
    fn zero(&mut self);

    /// Add `kernel(position - center)` into every cell of the box
    /// `[center, center + size)`, clamped to the mesh.
    ///
    /// A box entirely outside the mesh is a no-op. Returns
    /// `Err(MeshError::InvalidShape)` if `center` or `size` does not have
    /// one component per dimension.
    fn add_patch_at<K>(&mut self, center: &[f64], kernel: K, size: &[f64]) -> Result<(), MeshError>
    where
        K: FnMut(&[f64]) -> Self::Elem;

    /// Smallest element, or `None` for an empty mesh. `NaN`s are skipped.
    fn min(&self) -> Option<Self::Elem>;

    /// Largest element, or `None` for an empty mesh. `NaN`s are skipped.
    fn max(&self) -> Option<Self::Elem>;

    /// Sum of all elements, wrapping for integers.
    fn total(&self) -> Self::Elem;

    /// Arithmetic mean in `f64`, or `None` for an empty mesh.
    fn mean(&self) -> Option<f64>;
}

/// Fold the cells, replacing the running best when `better(candidate, best)`.
fn extremum<M, F>(mesh: &M, mut better: F) -> Option<M::Elem>
where
    M: MeshData + ?Sized,
    M::Elem: Numeric,
    F: FnMut(M::Elem, M::Elem) -> bool,
{
    let mut crawler = mesh.crawler();
    let mut best: Option<M::Elem> = None;
    while crawler.has_next() {
        crawler.advance().ok()?;
        let value = *crawler.current().ok()?;
        // Only NaN is unordered against itself.
        if value.partial_cmp(&value).is_none() {
            continue;
        }
        best = match best {
            Some(b) if !better(value, b) => Some(b),
            _ => Some(value),
        };
    }
    best
}

impl<M> NumberMesh for M
where
    M: MeshDataMut + ?Sized,
    M::Elem: Numeric,
{
    fn add<O>(&mut self, other: &O) -> Result<(), MeshError>
    where
        O: MeshData<Elem = Self::Elem> + ?Sized,
    {
        zip_with(self, other, |t, &o| *t = t.sum(o))
    }

    fn subtract<O>(&mut self, other: &O) -> Result<(), MeshError>
    where
        O: MeshData<Elem = Self::Elem> + ?Sized,
    {
        zip_with(self, other, |t, &o| *t = t.difference(o))
    }

    fn add_scaled<O>(&mut self, other: &O, factor: f64) -> Result<(), MeshError>
    where
        O: MeshData<Elem = Self::Elem> + ?Sized,
    {
        zip_with(self, other, |t, &o| {
            *t = M::Elem::from_f64(t.to_f64() + o.to_f64() * factor);
        })
    }

    fn set_sum<A, B>(&mut self, a: &A, b: &B) -> Result<(), MeshError>
    where
        A: MeshData<Elem = Self::Elem> + ?Sized,
        B: MeshData<Elem = Self::Elem> + ?Sized,
    {
        zip3_with(self, a, b, |t, &x, &y| *t = x.sum(y))
    }

    fn set_difference<A, B>(&mut self, a: &A, b: &B) -> Result<(), MeshError>
    where
        A: MeshData<Elem = Self::Elem> + ?Sized,
        B: MeshData<Elem = Self::Elem> + ?Sized,
    {
        zip3_with(self, a, b, |t, &x, &y| *t = x.difference(y))
    }

    fn scale(&mut self, factor: f64) {
        for_each_mut(self, |t| *t = M::Elem::from_f64(t.to_f64() * factor));
    }

    fn is_null(&self) -> bool {
        self.iter().all(|v| v.to_f64() == 0.0)
    }

    fn fill(&mut self, value: Self::Elem) {
        for_each_mut(self, |t| *t = value);
    }

    fn fill_range(
        &mut self,
        from: &[usize],
        to: &[usize],
        value: Self::Elem,
    ) -> Result<(), MeshError> {
        let mut crawler = self.crawler_range_mut(from, to)?;
        while crawler.has_next() {
            crawler.advance()?;
            crawler.set_current(value)?;
        }
        Ok(())
    }

    fn zero(&mut self) {
        self.fill(M::Elem::zero());
    }

    fn add_patch_at<K>(&mut self, center: &[f64], kernel: K, size: &[f64]) -> Result<(), MeshError>
    where
        K: FnMut(&[f64]) -> Self::Elem,
    {
        accumulate(self, center, kernel, size, |cell, value| *cell = cell.sum(value))
    }

    fn min(&self) -> Option<Self::Elem> {
        extremum(self, |candidate, best| candidate < best)
    }

    fn max(&self) -> Option<Self::Elem> {
        extremum(self, |candidate, best| candidate > best)
    }

    fn total(&self) -> Self::Elem {
        self.iter().fold(M::Elem::zero(), |acc, &v| acc.sum(v))
    }

    fn mean(&self) -> Option<f64> {
        if self.is_empty() {
            return None;
        }
        let sum: f64 = self.iter().map(|v| v.to_f64()).sum();
        Some(sum / self.len() as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::Mesh;
    use proptest::prelude::*;

    fn grid(values: &[f64]) -> Mesh<f64> {
        Mesh::from_vec(&[2, 2], values.to_vec()).unwrap()
    }

    // ── Binary operations ───────────────────────────────────────

    #[test]
    fn scale_then_add() {
        let mut a = grid(&[1.0, 2.0, 3.0, 4.0]);
        a.scale(2.0);
        assert_eq!(a.cells(), &[2.0, 4.0, 6.0, 8.0]);
        let b = a.copy();
        a.add(&b).unwrap();
        assert_eq!(a.cells(), &[4.0, 8.0, 12.0, 16.0]);
    }

    #[test]
    fn non_conforming_add_leaves_both_untouched() {
        let mut a = grid(&[1.0, 2.0, 3.0, 4.0]);
        let b: Mesh<f64> = Mesh::filled(&[2, 3], 1.0).unwrap();
        let err = a.add(&b).unwrap_err();
        assert!(matches!(err, MeshError::ShapeMismatch { .. }));
        assert_eq!(a.cells(), &[1.0, 2.0, 3.0, 4.0]);
        assert!(b.cells().iter().all(|&v| v == 1.0));
    }

    #[test]
    fn add_scaled_truncates_integers() {
        let mut a = Mesh::from_vec(&[3], vec![1i32, 1, -1]).unwrap();
        let b = Mesh::from_vec(&[3], vec![1i32, 3, 1]).unwrap();
        a.add_scaled(&b, 0.5).unwrap();
        // 1 + 0.5 = 1.5 -> 1; 1 + 1.5 = 2.5 -> 2; -1 + 0.5 = -0.5 -> 0
        assert_eq!(a.cells(), &[1, 2, 0]);
    }

    #[test]
    fn integer_add_wraps() {
        let mut a = Mesh::from_vec(&[1], vec![i8::MAX]).unwrap();
        let b = Mesh::from_vec(&[1], vec![1i8]).unwrap();
        a.add(&b).unwrap();
        assert_eq!(a.cells(), &[i8::MIN]);
    }

    #[test]
    fn set_sum_and_difference() {
        let a = grid(&[1.0, 2.0, 3.0, 4.0]);
        let b = grid(&[10.0, 20.0, 30.0, 40.0]);
        let mut c: Mesh<f64> = Mesh::create(&[2, 2]).unwrap();
        c.set_sum(&a, &b).unwrap();
        assert_eq!(c.cells(), &[11.0, 22.0, 33.0, 44.0]);
        c.set_difference(&b, &a).unwrap();
        assert_eq!(c.cells(), &[9.0, 18.0, 27.0, 36.0]);
    }

    #[test]
    fn add_through_sub_mesh_view() {
        let mut a = Mesh::from_vec(&[2, 2], vec![1, 2, 3, 4]).unwrap();
        let row = Mesh::from_vec(&[2], vec![10, 10]).unwrap();
        a.sub_mesh_at_mut(&[0]).unwrap().add(&row).unwrap();
        assert_eq!(a.cells(), &[11, 12, 3, 4]);
    }

    // ── Fill and null ───────────────────────────────────────────

    #[test]
    fn fill_range_touches_only_the_box() {
        let mut a: Mesh<i16> = Mesh::create(&[3, 3]).unwrap();
        a.fill_range(&[1, 1], &[3, 2], 5).unwrap();
        assert_eq!(a.cells(), &[0, 0, 0, 0, 5, 0, 0, 5, 0]);
    }

    #[test]
    fn fill_range_rejects_bad_bounds() {
        let mut a: Mesh<i16> = Mesh::create(&[3, 3]).unwrap();
        assert!(matches!(
            a.fill_range(&[0, 0], &[4, 1], 5),
            Err(MeshError::IndexOutOfRange { .. })
        ));
    }

    #[test]
    fn zero_then_is_null() {
        let mut a = grid(&[1.0, -2.0, 0.0, 4.0]);
        assert!(!a.is_null());
        a.zero();
        assert!(a.is_null());
    }

    #[test]
    fn negative_zero_is_null() {
        let a = grid(&[-0.0, 0.0, 0.0, 0.0]);
        assert!(a.is_null());
    }

    // ── Patches ─────────────────────────────────────────────────

    #[test]
    fn patch_accumulates_kernel() {
        let mut a: Mesh<f64> = Mesh::filled(&[4, 4], 1.0).unwrap();
        a.add_patch_at(&[1.0, 1.0], |_| 2.0, &[2.0, 2.0]).unwrap();
        assert_eq!(a.element_at(&[1, 1]), Ok(&3.0));
        assert_eq!(a.element_at(&[2, 2]), Ok(&3.0));
        assert_eq!(a.element_at(&[0, 0]), Ok(&1.0));
        assert_eq!(a.element_at(&[3, 3]), Ok(&1.0));
        assert_eq!(a.total(), 16.0 + 8.0);
    }

    #[test]
    fn patch_outside_is_bit_identical_no_op() {
        let mut a = grid(&[0.1, 0.2, 0.3, 0.4]);
        let before = a.copy();
        a.add_patch_at(&[5.0, 5.0], |_| 1.0, &[1.0, 1.0]).unwrap();
        assert_eq!(a, before);
    }

    #[test]
    fn patch_rank_mismatch() {
        let mut a = grid(&[0.0; 4]);
        assert!(matches!(
            a.add_patch_at(&[0.0], |_| 1.0, &[1.0]),
            Err(MeshError::InvalidShape { .. })
        ));
    }

    // ── Reductions ──────────────────────────────────────────────

    #[test]
    fn min_max_skip_nan() {
        let a = grid(&[3.0, f64::NAN, -1.0, 2.0]);
        assert_eq!(a.min(), Some(-1.0));
        assert_eq!(a.max(), Some(3.0));
    }

    #[test]
    fn reductions_of_empty_mesh() {
        let a: Mesh<i32> = Mesh::create(&[0, 4]).unwrap();
        assert_eq!(a.min(), None);
        assert_eq!(a.max(), None);
        assert_eq!(a.total(), 0);
        assert_eq!(a.mean(), None);
    }

    #[test]
    fn mean_in_f64() {
        let a = Mesh::from_vec(&[4], vec![1i64, 2, 3, 4]).unwrap();
        assert_eq!(a.mean(), Some(2.5));
    }

    // ── Properties ──────────────────────────────────────────────

    proptest! {
        #[test]
        fn add_then_subtract_restores_integers(
            a in proptest::collection::vec(any::<i32>(), 6),
            b in proptest::collection::vec(any::<i32>(), 6),
        ) {
            let mut left = Mesh::from_vec(&[2, 3], a.clone()).unwrap();
            let right = Mesh::from_vec(&[2, 3], b).unwrap();
            left.add(&right).unwrap();
            left.subtract(&right).unwrap();
            prop_assert_eq!(left.cells(), a.as_slice());
        }

        #[test]
        fn set_difference_inverts_set_sum(
            a in proptest::collection::vec(-1e6f64..1e6, 4),
            b in proptest::collection::vec(-1e6f64..1e6, 4),
        ) {
            let a = Mesh::from_vec(&[2, 2], a).unwrap();
            let b = Mesh::from_vec(&[2, 2], b).unwrap();
            let mut c: Mesh<f64> = Mesh::create(&[2, 2]).unwrap();
            c.set_sum(&a, &b).unwrap();
            let sum = c.copy();
            c.set_difference(&sum, &b).unwrap();
            for (x, y) in c.iter().zip(a.iter()) {
                prop_assert!((x - y).abs() <= 1e-6);
            }
        }
    }
}
