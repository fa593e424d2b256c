//! [`BooleanMesh`]: logical combinators over `bool` meshes.

use meshwork_core::MeshError;

use crate::data::{MeshData, MeshDataMut};
use crate::lockstep::{for_each_mut, zip_with};

/// Elementwise logic for meshes of `bool`.
pub trait BooleanMesh: MeshDataMut<Elem = bool> {
    /// `self[i] = self[i] && other[i]`.
    fn and<O>(&mut self, other: &O) -> Result<(), MeshError>
    where
        O: MeshData<Elem = bool> + ?Sized;

    /// `self[i] = self[i] || other[i]`.
    fn or<O>(&mut self, other: &O) -> Result<(), MeshError>
    where
        O: MeshData<Elem = bool> + ?Sized;

    /// `self[i] = !self[i]`.
    fn not(&mut self);

    /// Whether any element is `true`.
    fn contains_true(&self) -> bool;

    /// Whether any element is `false`.
    fn contains_false(&self) -> bool;

    /// Set every element to `value`.
    fn fill(&mut self, value: bool);
}

impl<M> BooleanMesh for M
where
    M: MeshDataMut<Elem = bool> + ?Sized,
{
    fn and<O>(&mut self, other: &O) -> Result<(), MeshError>
    where
        O: MeshData<Elem = bool> + ?Sized,
    {
        zip_with(self, other, |t, &o| *t = *t && o)
    }

    fn or<O>(&mut self, other: &O) -> Result<(), MeshError>
    where
        O: MeshData<Elem = bool> + ?Sized,
    {
        zip_with(self, other, |t, &o| *t = *t || o)
    }

    fn not(&mut self) {
        for_each_mut(self, |t| *t = !*t);
    }

    fn contains_true(&self) -> bool {
        self.iter().any(|&v| v)
    }

    fn contains_false(&self) -> bool {
        self.iter().any(|&v| !v)
    }

    fn fill(&mut self, value: bool) {
        for_each_mut(self, |t| *t = value);
    }
}
