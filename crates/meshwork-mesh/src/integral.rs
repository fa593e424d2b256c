//! [`IntegralMesh`]: products, quotients, and bitwise logic over integer
//! meshes.

use meshwork_core::{Integral, MeshError, Numeric};

use crate::data::{MeshData, MeshDataMut};
use crate::lockstep::{ensure_conforms, for_each_mut, zip_with};

/// Integer-only elementwise operations.
///
/// Implemented for every [`MeshDataMut`] over `i64`, `i32`, `i16`, or
/// `i8`. Products wrap on overflow.
pub trait IntegralMesh: MeshDataMut {
    /// `self[i] = self[i] * other[i]`.
    fn multiply_by<O>(&mut self, other: &O) -> Result<(), MeshError>
    where
        O: MeshData<Elem = Self::Elem> + ?Sized;

    /// `self[i] = self[i] / other[i]`, truncated toward zero.
    ///
    /// Returns `Err(MeshError::DivisionByZero)` if any divisor is zero;
    /// divisors are checked before any cell changes.
    fn divide_by<O>(&mut self, other: &O) -> Result<(), MeshError>
    where
        O: MeshData<Elem = Self::Elem> + ?Sized;

    /// `self[i] = self[i] & other[i]`.
    fn bit_and_with<O>(&mut self, other: &O) -> Result<(), MeshError>
    where
        O: MeshData<Elem = Self::Elem> + ?Sized;

    /// `self[i] = self[i] | other[i]`.
    fn bit_or_with<O>(&mut self, other: &O) -> Result<(), MeshError>
    where
        O: MeshData<Elem = Self::Elem> + ?Sized;

    /// `self[i] = self[i] ^ other[i]`.
    fn bit_xor_with<O>(&mut self, other: &O) -> Result<(), MeshError>
    where
        O: MeshData<Elem = Self::Elem> + ?Sized;

    /// `self[i] = !(self[i] & other[i])`.
    fn bit_nand_with<O>(&mut self, other: &O) -> Result<(), MeshError>
    where
        O: MeshData<Elem = Self::Elem> + ?Sized;

    /// `self[i] = !self[i]`.
    fn bit_not(&mut self);
}

impl<M> IntegralMesh for M
where
    M: MeshDataMut + ?Sized,
    M::Elem: Integral,
{
    fn multiply_by<O>(&mut self, other: &O) -> Result<(), MeshError>
    where
        O: MeshData<Elem = Self::Elem> + ?Sized,
    {
        zip_with(self, other, |t, &o| *t = t.product(o))
    }

    fn divide_by<O>(&mut self, other: &O) -> Result<(), MeshError>
    where
        O: MeshData<Elem = Self::Elem> + ?Sized,
    {
        ensure_conforms(self, other)?;
        let zero = <M::Elem as Numeric>::zero();
        if other.iter().any(|&d| d == zero) {
            return Err(MeshError::DivisionByZero);
        }
        zip_with(self, other, |t, &o| {
            if let Some(q) = t.ratio(o) {
                *t = q;
            }
        })
    }

    fn bit_and_with<O>(&mut self, other: &O) -> Result<(), MeshError>
    where
        O: MeshData<Elem = Self::Elem> + ?Sized,
    {
        zip_with(self, other, |t, &o| *t = t.bit_and(o))
    }

    fn bit_or_with<O>(&mut self, other: &O) -> Result<(), MeshError>
    where
        O: MeshData<Elem = Self::Elem> + ?Sized,
    {
        zip_with(self, other, |t, &o| *t = t.bit_or(o))
    }

    fn bit_xor_with<O>(&mut self, other: &O) -> Result<(), MeshError>
    where
        O: MeshData<Elem = Self::Elem> + ?Sized,
    {
        zip_with(self, other, |t, &o| *t = t.bit_xor(o))
    }

    fn bit_nand_with<O>(&mut self, other: &O) -> Result<(), MeshError>
    where
        O: MeshData<Elem = Self::Elem> + ?Sized,
    {
        zip_with(self, other, |t, &o| *t = t.bit_nand(o))
    }

    fn bit_not(&mut self) {
        for_each_mut(self, |t| *t = t.bit_not());
    }
}
