//! [`AdditiveMesh`] and [`LinearMesh`]: arithmetic over meshes whose
//! elements are themselves vector-space values.
//!
//! The traversal is the same lock-step crawl [`NumberMesh`](crate::NumberMesh)
//! uses; only the per-cell combinator differs, delegating to the element's
//! own in-place [`Additive`] and [`Scalable`] methods.

use meshwork_core::{Additive, Linear, MeshError, Scalable};

use crate::data::{MeshData, MeshDataMut};
use crate::lockstep::{for_each_mut, zip3_with, zip_with};
use crate::patch::accumulate;

/// Elementwise addition for meshes of [`Additive`] elements.
pub trait AdditiveMesh: MeshDataMut {
    /// `self[i].add(other[i])`.
    fn add<O>(&mut self, other: &O) -> Result<(), MeshError>
    where
        O: MeshData<Elem = Self::Elem> + ?Sized;

    /// `self[i].subtract(other[i])`.
    fn subtract<O>(&mut self, other: &O) -> Result<(), MeshError>
    where
        O: MeshData<Elem = Self::Elem> + ?Sized;

    /// `self[i].set_sum(a[i], b[i])`.
    fn set_sum<A, B>(&mut self, a: &A, b: &B) -> Result<(), MeshError>
    where
        A: MeshData<Elem = Self::Elem> + ?Sized,
        B: MeshData<Elem = Self::Elem> + ?Sized;

    /// `self[i].set_difference(a[i], b[i])`.
    fn set_difference<A, B>(&mut self, a: &A, b: &B) -> Result<(), MeshError>
    where
        A: MeshData<Elem = Self::Elem> + ?Sized,
        B: MeshData<Elem = Self::Elem> + ?Sized;

    /// Whether every element is its additive identity.
    fn is_null(&self) -> bool;

    /// Reset every element to its additive identity.
    fn zero(&mut self);
}

impl<M> AdditiveMesh for M
where
    M: MeshDataMut + ?Sized,
    M::Elem: Additive,
{
    fn add<O>(&mut self, other: &O) -> Result<(), MeshError>
    where
        O: MeshData<Elem = Self::Elem> + ?Sized,
    {
        zip_with(self, other, |t, o| Additive::add(t, o))
    }

    fn subtract<O>(&mut self, other: &O) -> Result<(), MeshError>
    where
        O: MeshData<Elem = Self::Elem> + ?Sized,
    {
        zip_with(self, other, |t, o| Additive::subtract(t, o))
    }

    fn set_sum<A, B>(&mut self, a: &A, b: &B) -> Result<(), MeshError>
    where
        A: MeshData<Elem = Self::Elem> + ?Sized,
        B: MeshData<Elem = Self::Elem> + ?Sized,
    {
        zip3_with(self, a, b, |t, x, y| Additive::set_sum(t, x, y))
    }

    fn set_difference<A, B>(&mut self, a: &A, b: &B) -> Result<(), MeshError>
    where
        A: MeshData<Elem = Self::Elem> + ?Sized,
        B: MeshData<Elem = Self::Elem> + ?Sized,
    {
        zip3_with(self, a, b, |t, x, y| Additive::set_difference(t, x, y))
    }

    fn is_null(&self) -> bool {
        self.iter().all(Additive::is_null)
    }

    fn zero(&mut self) {
        for_each_mut(self, Additive::zero);
    }
}

/// Scaling for meshes of [`Linear`] elements.
pub trait LinearMesh: AdditiveMesh {
    /// `self[i].add_scaled(other[i], factor)`.
    fn add_scaled<O>(&mut self, other: &O, factor: f64) -> Result<(), MeshError>
    where
        O: MeshData<Elem = Self::Elem> + ?Sized;

    /// `self[i].scale(factor)`.
    fn scale(&mut self, factor: f64);

    /// Add `kernel(position - center)` into every cell of the box
    /// `[center, center + size)`, clamped to the mesh.
    ///
    /// Same bounds and errors as
    /// [`NumberMesh::add_patch_at`](crate::NumberMesh::add_patch_at).
    fn add_patch_at<K>(&mut self, center: &[f64], kernel: K, size: &[f64]) -> Result<(), MeshError>
    where
        K: FnMut(&[f64]) -> Self::Elem;
}

impl<M> LinearMesh for M
where
    M: MeshDataMut + ?Sized,
    M::Elem: Linear,
{
    fn add_scaled<O>(&mut self, other: &O, factor: f64) -> Result<(), MeshError>
    where
        O: MeshData<Elem = Self::Elem> + ?Sized,
    {
        zip_with(self, other, |t, o| Linear::add_scaled(t, o, factor))
    }

    fn scale(&mut self, factor: f64) {
        for_each_mut(self, |t| Scalable::scale(t, factor));
    }

    fn add_patch_at<K>(&mut self, center: &[f64], kernel: K, size: &[f64]) -> Result<(), MeshError>
    where
        K: FnMut(&[f64]) -> Self::Elem,
    {
        accumulate(self, center, kernel, size, |cell, value| Additive::add(cell, &value))
    }
}
