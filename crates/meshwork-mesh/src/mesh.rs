//! The owning [`Mesh`] container.

use std::fmt;
use std::str::FromStr;

use meshwork_core::{cell_count, MeshError, ParseError, Shape};

use crate::data::{MeshData, MeshDataMut};
use crate::format::{write_text, TextFormat};
use crate::nested::Nested;
use crate::parse::{parse_literal, Literal};
use crate::view::MeshView;

/// A rectangular N-dimensional array of `T`, stored row-major.
///
/// # Invariants
///
/// - `rank() >= 1`.
/// - The product of `shape()` equals `len()`.
///
/// Storage is exclusively owned. Sub-arrays are reached through
/// [`sub_mesh_at`](MeshData::sub_mesh_at) and
/// [`sub_mesh_at_mut`](MeshDataMut::sub_mesh_at_mut), whose views borrow
/// this mesh for their lifetime.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Mesh<T> {
    shape: Shape,
    cells: Vec<T>,
}

/// Validated cell count for a new mesh of `shape`.
fn checked_cell_count(shape: &[usize]) -> Result<usize, MeshError> {
    if shape.is_empty() {
        return Err(MeshError::InvalidShape {
            reason: "a mesh needs at least one dimension".to_string(),
        });
    }
    cell_count(shape).ok_or_else(|| MeshError::Allocation {
        reason: format!("cell count of shape {shape:?} overflows usize"),
    })
}

impl<T> Mesh<T> {
    /// Internal constructor; the caller guarantees the invariants.
    pub(crate) fn from_parts(shape: Shape, cells: Vec<T>) -> Self {
        debug_assert!(!shape.is_empty());
        debug_assert_eq!(cell_count(&shape), Some(cells.len()));
        Self { shape, cells }
    }

    /// Mesh of the given shape with every cell set to `T::default()`
    /// (zero for numeric types, `false` for `bool`).
    ///
    /// Returns `Err(MeshError::InvalidShape)` for an empty shape and
    /// `Err(MeshError::Allocation)` if the cell count overflows or the
    /// storage cannot be reserved.
    pub fn create(shape: &[usize]) -> Result<Self, MeshError>
    where
        T: Default + Clone,
    {
        Self::filled(shape, T::default())
    }

    /// Mesh of the given shape with every cell set to `value`.
    pub fn filled(shape: &[usize], value: T) -> Result<Self, MeshError>
    where
        T: Clone,
    {
        let count = checked_cell_count(shape)?;
        let mut cells = Vec::new();
        cells
            .try_reserve_exact(count)
            .map_err(|err| MeshError::Allocation {
                reason: format!("cannot reserve {count} cells: {err}"),
            })?;
        cells.resize(count, value);
        Ok(Self::from_parts(Shape::from_slice(shape), cells))
    }

    /// Mesh over existing row-major cells.
    ///
    /// Returns `Err(MeshError::InvalidShape)` if `cells.len()` is not the
    /// product of `shape`.
    pub fn from_vec(shape: &[usize], cells: Vec<T>) -> Result<Self, MeshError> {
        let count = checked_cell_count(shape)?;
        if count != cells.len() {
            return Err(MeshError::InvalidShape {
                reason: format!(
                    "shape {shape:?} holds {count} cells, got {}",
                    cells.len()
                ),
            });
        }
        Ok(Self::from_parts(Shape::from_slice(shape), cells))
    }

    /// Wrap a nested array, deriving the shape by inspection.
    ///
    /// Returns `Err(MeshError::InvalidShape)` if the nesting is ragged.
    pub fn wrap(nested: Nested<T>) -> Result<Self, MeshError> {
        let (shape, cells) = nested.into_shape_and_cells()?;
        Ok(Self::from_parts(shape, cells))
    }

    /// Wrap a vector of equally long rows as a rank-2 mesh.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, MeshError> {
        Self::wrap(Nested::from_rows(rows))
    }

    /// Deep copy: new cells with the same values, shape, and kind.
    pub fn copy(&self) -> Self
    where
        T: Clone,
    {
        self.clone()
    }

    /// Shared view of the whole mesh.
    pub fn view(&self) -> MeshView<'_, T> {
        MeshView::from_parts(self.shape.clone(), &self.cells)
    }

    /// The nested-array form of this mesh; the inverse of [`wrap`](Self::wrap).
    pub fn to_nested(&self) -> Nested<T>
    where
        T: Clone,
    {
        Nested::from_shape_and_cells(&self.shape, &self.cells)
    }

    /// Apply `f` to every cell, producing a mesh of the same shape.
    pub fn map<U, F: FnMut(&T) -> U>(&self, f: F) -> Mesh<U> {
        Mesh::from_parts(self.shape.clone(), self.cells.iter().map(f).collect())
    }

    /// Consume the mesh, returning its shape and row-major cells.
    pub fn into_parts(self) -> (Shape, Vec<T>) {
        (self.shape, self.cells)
    }

    /// Parse brace-literal text whose every leaf parses as `T`.
    ///
    /// Returns `Err(MeshError::Parse)` for malformed text or a leaf that
    /// does not parse, and `Err(MeshError::InvalidShape)` for a ragged
    /// literal.
    pub fn parse(text: &str) -> Result<Self, MeshError>
    where
        T: FromStr,
    {
        Self::parse_with(text, &TextFormat::default())
    }

    /// [`parse`](Self::parse) with custom delimiters.
    pub fn parse_with(text: &str, format: &TextFormat) -> Result<Self, MeshError>
    where
        T: FromStr,
    {
        let literal = parse_literal(text, format)?;
        Self::from_literal(&literal)
    }

    pub(crate) fn from_literal(literal: &Literal) -> Result<Self, MeshError>
    where
        T: FromStr,
    {
        let cells = literal
            .leaves()
            .iter()
            .map(|token| {
                token.parse::<T>().map_err(|_| ParseError::InvalidElement {
                    token: token.clone(),
                    expected: std::any::type_name::<T>(),
                })
            })
            .collect::<Result<Vec<T>, _>>()?;
        Self::from_vec(literal.shape(), cells)
    }

    /// Write as brace-literal text with the given delimiters.
    pub fn write_text<W: fmt::Write + ?Sized>(
        &self,
        out: &mut W,
        format: &TextFormat,
    ) -> fmt::Result
    where
        T: fmt::Display,
    {
        write_text(out, &self.shape, &self.cells, format)
    }
}

impl<T> MeshData for Mesh<T> {
    type Elem = T;

    fn shape(&self) -> &[usize] {
        &self.shape
    }

    fn cells(&self) -> &[T] {
        &self.cells
    }
}

impl<T> MeshDataMut for Mesh<T> {
    fn cells_mut(&mut self) -> &mut [T] {
        &mut self.cells
    }
}

impl<T: fmt::Display> fmt::Display for Mesh<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_text(f, &TextFormat::default())
    }
}
