//! Lock-step crawls over conforming meshes.
//!
//! Every elementwise operation in the arithmetic mixins is one of these
//! helpers plus a per-cell combinator. Operand shapes are checked before
//! any crawler advances, so a shape failure leaves the target untouched.

use meshwork_core::MeshError;

use crate::cursor::Crawl;
use crate::data::{MeshData, MeshDataMut};

/// Fail with [`MeshError::ShapeMismatch`] unless `operand` conforms to
/// `target`.
pub fn ensure_conforms<M, O>(target: &M, operand: &O) -> Result<(), MeshError>
where
    M: MeshData + ?Sized,
    O: MeshData + ?Sized,
{
    if target.conforms_to(operand) {
        Ok(())
    } else {
        Err(MeshError::shape_mismatch(target.shape(), operand.shape()))
    }
}

/// Visit every cell of `target` mutably, in row-major order.
///
/// A full crawl visits cells in storage order, so this walks the cell
/// slice directly and cannot fail.
pub fn for_each_mut<M, F>(target: &mut M, f: F)
where
    M: MeshDataMut + ?Sized,
    F: FnMut(&mut M::Elem),
{
    target.cells_mut().iter_mut().for_each(f);
}

/// Crawl `target` and `operand` together, calling `f` on each pair of
/// cells at the same position.
pub fn zip_with<M, O, F>(target: &mut M, operand: &O, mut f: F) -> Result<(), MeshError>
where
    M: MeshDataMut + ?Sized,
    O: MeshData + ?Sized,
    F: FnMut(&mut M::Elem, &O::Elem),
{
    ensure_conforms(target, operand)?;
    let mut out = target.crawler_mut();
    let mut input = operand.crawler();
    while out.has_next() {
        out.advance()?;
        input.advance()?;
        f(out.current_mut()?, input.current()?);
    }
    Ok(())
}

/// Three-way form of [`zip_with`]: `f(target, a, b)` per position.
pub fn zip3_with<M, A, B, F>(target: &mut M, a: &A, b: &B, mut f: F) -> Result<(), MeshError>
where
    M: MeshDataMut + ?Sized,
    A: MeshData + ?Sized,
    B: MeshData + ?Sized,
    F: FnMut(&mut M::Elem, &A::Elem, &B::Elem),
{
    ensure_conforms(target, a)?;
    ensure_conforms(target, b)?;
    let mut out = target.crawler_mut();
    let mut left = a.crawler();
    let mut right = b.crawler();
    while out.has_next() {
        out.advance()?;
        left.advance()?;
        right.advance()?;
        f(out.current_mut()?, left.current()?, right.current()?);
    }
    Ok(())
}

/// Whether `pred` holds for every cell of `operand` when paired with the
/// cell at the same position in `mesh`.
pub fn all_pairs<M, O, F>(mesh: &M, operand: &O, mut pred: F) -> Result<bool, MeshError>
where
    M: MeshData + ?Sized,
    O: MeshData + ?Sized,
    F: FnMut(&M::Elem, &O::Elem) -> bool,
{
    ensure_conforms(mesh, operand)?;
    let mut left = mesh.crawler();
    let mut right = operand.crawler();
    while left.has_next() {
        left.advance()?;
        right.advance()?;
        if !pred(left.current()?, right.current()?) {
            return Ok(false);
        }
    }
    Ok(true)
}
