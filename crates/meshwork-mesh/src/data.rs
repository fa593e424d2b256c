//! The [`MeshData`] and [`MeshDataMut`] access traits.
//!
//! Owning meshes and borrowed views implement these; everything else
//! (crawlers, indexed access, the arithmetic mixins) is written once
//! against them.

use meshwork_core::{ElementKind, MeshError, Shape};

use crate::crawler::{Crawler, CrawlerMut};
use crate::cursor::Cursor;
use crate::view::{MeshView, MeshViewMut};

/// Storage offset of a full-rank `index` within row-major `shape`.
pub(crate) fn offset_of(shape: &[usize], index: &[usize]) -> Result<usize, MeshError> {
    if index.len() != shape.len() {
        return Err(MeshError::index_out_of_range(index, shape));
    }
    prefix_offset(shape, index)
}

/// Offset of the first cell of the sub-array addressed by `prefix`,
/// together with that sub-array's cell count.
///
/// `prefix` must address at least one dimension and leave at least one.
pub(crate) fn sub_array_span(shape: &[usize], prefix: &[usize]) -> Result<(usize, usize), MeshError> {
    if prefix.is_empty() || prefix.len() >= shape.len() {
        return Err(MeshError::index_out_of_range(prefix, shape));
    }
    let inner: usize = shape[prefix.len()..].iter().product();
    let start = prefix_offset(shape, prefix)? * inner;
    Ok((start, inner))
}

fn prefix_offset(shape: &[usize], index: &[usize]) -> Result<usize, MeshError> {
    let mut offset = 0;
    for (&i, &extent) in index.iter().zip(shape) {
        if i >= extent {
            return Err(MeshError::index_out_of_range(index, shape));
        }
        offset = offset * extent + i;
    }
    Ok(offset)
}

/// Read access to a rectangular mesh stored in row-major order.
pub trait MeshData {
    /// Element type.
    type Elem;

    /// Per-dimension extents, outermost first.
    fn shape(&self) -> &[usize];

    /// All cells in row-major order.
    fn cells(&self) -> &[Self::Elem];

    /// Number of dimensions.
    fn rank(&self) -> usize {
        self.shape().len()
    }

    /// Total number of cells.
    fn len(&self) -> usize {
        self.cells().len()
    }

    /// Whether some extent is zero.
    fn is_empty(&self) -> bool {
        self.cells().is_empty()
    }

    /// Storage kind of the elements.
    fn element_kind(&self) -> ElementKind
    where
        Self::Elem: 'static,
    {
        ElementKind::of::<Self::Elem>()
    }

    /// Whether `other` has exactly the same shape. Symmetric.
    fn conforms_to<O: MeshData + ?Sized>(&self, other: &O) -> bool {
        self.shape() == other.shape()
    }

    /// Owned copy of the shape.
    fn shape_vec(&self) -> Shape {
        Shape::from_slice(self.shape())
    }

    /// The element at a full-rank `index`.
    ///
    /// Returns `Err(MeshError::IndexOutOfRange)` if `index` has the wrong
    /// rank or any component is outside its extent.
    fn element_at(&self, index: &[usize]) -> Result<&Self::Elem, MeshError> {
        let offset = offset_of(self.shape(), index)?;
        Ok(&self.cells()[offset])
    }

    /// Read-only view of the sub-array addressed by the index prefix.
    ///
    /// The view has rank `rank() - index.len()` and aliases this mesh's
    /// cells. `index` must be non-empty and strictly shorter than the
    /// rank; anything else is `Err(MeshError::IndexOutOfRange)`.
    fn sub_mesh_at(&self, index: &[usize]) -> Result<MeshView<'_, Self::Elem>, MeshError> {
        let (start, len) = sub_array_span(self.shape(), index)?;
        let shape = Shape::from_slice(&self.shape()[index.len()..]);
        Ok(MeshView::from_parts(shape, &self.cells()[start..start + len]))
    }

    /// Crawler over every cell.
    fn crawler(&self) -> Crawler<'_, Self::Elem> {
        Crawler::new(Cursor::full(self.shape()), self.cells())
    }

    /// Crawler over the rectangular range `[from, to)`.
    fn crawler_range(
        &self,
        from: &[usize],
        to: &[usize],
    ) -> Result<Crawler<'_, Self::Elem>, MeshError> {
        let cursor = Cursor::range(self.shape(), from, to)?;
        Ok(Crawler::new(cursor, self.cells()))
    }

    /// Iterate the cells in row-major order.
    fn iter(&self) -> std::slice::Iter<'_, Self::Elem> {
        self.cells().iter()
    }
}

/// Write access to a rectangular mesh stored in row-major order.
pub trait MeshDataMut: MeshData {
    /// All cells in row-major order, mutably.
    fn cells_mut(&mut self) -> &mut [Self::Elem];

    /// The element at a full-rank `index`, mutably.
    fn element_at_mut(&mut self, index: &[usize]) -> Result<&mut Self::Elem, MeshError> {
        let offset = offset_of(self.shape(), index)?;
        Ok(&mut self.cells_mut()[offset])
    }

    /// Overwrite the element at a full-rank `index`.
    fn set_element_at(&mut self, index: &[usize], value: Self::Elem) -> Result<(), MeshError> {
        *self.element_at_mut(index)? = value;
        Ok(())
    }

    /// Mutable view of the sub-array addressed by the index prefix.
    ///
    /// Writes through the view land in this mesh's cells. `index` follows
    /// the same rules as [`MeshData::sub_mesh_at`].
    fn sub_mesh_at_mut(
        &mut self,
        index: &[usize],
    ) -> Result<MeshViewMut<'_, Self::Elem>, MeshError> {
        let (start, len) = sub_array_span(self.shape(), index)?;
        let shape = Shape::from_slice(&self.shape()[index.len()..]);
        Ok(MeshViewMut::from_parts(
            shape,
            &mut self.cells_mut()[start..start + len],
        ))
    }

    /// Mutable crawler over every cell.
    fn crawler_mut(&mut self) -> CrawlerMut<'_, Self::Elem> {
        let cursor = Cursor::full(self.shape());
        CrawlerMut::new(cursor, self.cells_mut())
    }

    /// Mutable crawler over the rectangular range `[from, to)`.
    fn crawler_range_mut(
        &mut self,
        from: &[usize],
        to: &[usize],
    ) -> Result<CrawlerMut<'_, Self::Elem>, MeshError> {
        let cursor = Cursor::range(self.shape(), from, to)?;
        Ok(CrawlerMut::new(cursor, self.cells_mut()))
    }

    /// Mutable view of the whole mesh.
    fn view_mut(&mut self) -> MeshViewMut<'_, Self::Elem> {
        let shape = self.shape_vec();
        MeshViewMut::from_parts(shape, self.cells_mut())
    }
}
