//! Borrowed sub-array views: [`MeshView`] and [`MeshViewMut`].
//!
//! A view aliases a contiguous run of its parent's cells. The parent
//! stays borrowed for as long as the view lives, so a mutable view is
//! the only path to those cells while it exists, and its writes are
//! visible in the parent once it is dropped.

use std::fmt;

use meshwork_core::Shape;

use crate::data::{MeshData, MeshDataMut};
use crate::format::{write_text, TextFormat};
use crate::mesh::Mesh;

/// Shared view of a mesh or sub-mesh.
#[derive(Clone, Debug, PartialEq)]
pub struct MeshView<'a, T> {
    shape: Shape,
    cells: &'a [T],
}

impl<'a, T> MeshView<'a, T> {
    pub(crate) fn from_parts(shape: Shape, cells: &'a [T]) -> Self {
        debug_assert_eq!(shape.iter().product::<usize>(), cells.len());
        Self { shape, cells }
    }

    /// Deep copy into an owning mesh.
    pub fn to_mesh(&self) -> Mesh<T>
    where
        T: Clone,
    {
        Mesh::from_parts(self.shape.clone(), self.cells.to_vec())
    }
}

impl<T> MeshData for MeshView<'_, T> {
    type Elem = T;

    fn shape(&self) -> &[usize] {
        &self.shape
    }

    fn cells(&self) -> &[T] {
        self.cells
    }
}

impl<T: fmt::Display> fmt::Display for MeshView<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_text(f, &self.shape, self.cells, &TextFormat::default())
    }
}

/// Exclusive view of a mesh or sub-mesh.
#[derive(Debug, PartialEq)]
pub struct MeshViewMut<'a, T> {
    shape: Shape,
    cells: &'a mut [T],
}

impl<'a, T> MeshViewMut<'a, T> {
    pub(crate) fn from_parts(shape: Shape, cells: &'a mut [T]) -> Self {
        debug_assert_eq!(shape.iter().product::<usize>(), cells.len());
        Self { shape, cells }
    }

    /// Reborrow as a shared view.
    pub fn as_view(&self) -> MeshView<'_, T> {
        MeshView::from_parts(self.shape.clone(), &*self.cells)
    }

    /// Deep copy into an owning mesh.
    pub fn to_mesh(&self) -> Mesh<T>
    where
        T: Clone,
    {
        self.as_view().to_mesh()
    }
}

impl<T> MeshData for MeshViewMut<'_, T> {
    type Elem = T;

    fn shape(&self) -> &[usize] {
        &self.shape
    }

    fn cells(&self) -> &[T] {
        &*self.cells
    }
}

impl<T> MeshDataMut for MeshViewMut<'_, T> {
    fn cells_mut(&mut self) -> &mut [T] {
        &mut *self.cells
    }
}

impl<T: fmt::Display> fmt::Display for MeshViewMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_text(f, &self.shape, &*self.cells, &TextFormat::default())
    }
}
