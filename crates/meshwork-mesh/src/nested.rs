//! [`Nested`]: nested vectors as input to [`Mesh::wrap`](crate::Mesh::wrap).

use meshwork_core::{MeshError, Shape};

/// A nested array of `T`, one level per dimension.
///
/// `Cells` holds the innermost dimension; `Rows` holds one `Nested` per
/// index of an outer dimension. A value is rectangular when every
/// sibling at each level has the same shape.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Nested<T> {
    /// Innermost dimension.
    Cells(Vec<T>),
    /// An outer dimension.
    Rows(Vec<Nested<T>>),
}

impl<T> Nested<T> {
    /// Rank-2 nesting from rows of cells.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Self {
        Self::Rows(rows.into_iter().map(Self::Cells).collect())
    }

    /// Rank-3 nesting from planes of rows.
    pub fn from_planes(planes: Vec<Vec<Vec<T>>>) -> Self {
        Self::Rows(planes.into_iter().map(Self::from_rows).collect())
    }

    /// Shape read off the first element at every level.
    ///
    /// Says nothing about rectangularity; see
    /// [`into_shape_and_cells`](Self::into_shape_and_cells).
    pub fn leading_shape(&self) -> Shape {
        let mut shape = Shape::new();
        let mut level = self;
        loop {
            match level {
                Self::Cells(cells) => {
                    shape.push(cells.len());
                    return shape;
                }
                Self::Rows(rows) => {
                    shape.push(rows.len());
                    match rows.first() {
                        Some(first) => level = first,
                        None => return shape,
                    }
                }
            }
        }
    }

    /// Validate rectangularity and flatten to row-major cells.
    ///
    /// Returns `Err(MeshError::InvalidShape)` if siblings differ in
    /// length or depth.
    pub fn into_shape_and_cells(self) -> Result<(Shape, Vec<T>), MeshError> {
        let shape = self.leading_shape();
        let mut cells = Vec::new();
        self.flatten_into(&shape, &mut cells)?;
        Ok((shape, cells))
    }

    fn flatten_into(self, expected: &[usize], out: &mut Vec<T>) -> Result<(), MeshError> {
        match (self, expected) {
            (Self::Cells(cells), [extent]) if cells.len() == *extent => {
                out.extend(cells);
                Ok(())
            }
            // An empty level matches a zero extent at any depth.
            (Self::Rows(rows), [0, ..]) if rows.is_empty() => Ok(()),
            (Self::Cells(cells), [0, ..]) if cells.is_empty() => Ok(()),
            (Self::Rows(rows), [extent, inner @ ..]) if rows.len() == *extent && !inner.is_empty() => {
                for row in rows {
                    row.flatten_into(inner, out)?;
                }
                Ok(())
            }
            (nested, _) => Err(MeshError::InvalidShape {
                reason: format!(
                    "ragged nesting: expected extents {expected:?}, found a level of shape {:?}",
                    nested.leading_shape().as_slice()
                ),
            }),
        }
    }

    /// Rebuild the nesting for row-major `cells` of the given shape.
    pub(crate) fn from_shape_and_cells(shape: &[usize], cells: &[T]) -> Self
    where
        T: Clone,
    {
        match shape {
            [] | [_] => Self::Cells(cells.to_vec()),
            [extent, inner @ ..] => {
                let chunk: usize = inner.iter().product();
                Self::Rows(
                    (0..*extent)
                        .map(|i| Self::from_shape_and_cells(inner, &cells[i * chunk..(i + 1) * chunk]))
                        .collect(),
                )
            }
        }
    }
}

impl<T> From<Vec<T>> for Nested<T> {
    fn from(cells: Vec<T>) -> Self {
        Self::Cells(cells)
    }
}

impl<T> Default for Nested<T> {
    fn default() -> Self {
        Self::Cells(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_flatten_row_major() {
        let nested = Nested::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]);
        let (shape, cells) = nested.into_shape_and_cells().unwrap();
        assert_eq!(shape.as_slice(), &[2, 3]);
        assert_eq!(cells, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn planes_flatten_row_major() {
        let nested = Nested::from_planes(vec![
            vec![vec![1, 2], vec![3, 4]],
            vec![vec![5, 6], vec![7, 8]],
        ]);
        let (shape, cells) = nested.into_shape_and_cells().unwrap();
        assert_eq!(shape.as_slice(), &[2, 2, 2]);
        assert_eq!(cells, (1..=8).collect::<Vec<_>>());
    }

    #[test]
    fn ragged_rows_rejected() {
        let nested = Nested::from_rows(vec![vec![1, 2], vec![3]]);
        assert!(matches!(
            nested.into_shape_and_cells(),
            Err(MeshError::InvalidShape { .. })
        ));
    }

    #[test]
    fn mixed_depth_rejected() {
        let nested = Nested::Rows(vec![
            Nested::Cells(vec![1]),
            Nested::Rows(vec![Nested::Cells(vec![1])]),
        ]);
        assert!(nested.into_shape_and_cells().is_err());
    }

    #[test]
    fn empty_rows_give_zero_extent() {
        let nested: Nested<i32> = Nested::from_rows(vec![vec![], vec![]]);
        let (shape, cells) = nested.into_shape_and_cells().unwrap();
        assert_eq!(shape.as_slice(), &[2, 0]);
        assert!(cells.is_empty());
    }

    #[test]
    fn empty_outer_level() {
        let nested: Nested<i32> = Nested::Rows(Vec::new());
        let (shape, _) = nested.into_shape_and_cells().unwrap();
        assert_eq!(shape.as_slice(), &[0]);
    }

    #[test]
    fn rebuild_matches_original() {
        let nested = Nested::from_rows(vec![vec![1, 2], vec![3, 4], vec![5, 6]]);
        let (shape, cells) = nested.clone().into_shape_and_cells().unwrap();
        assert_eq!(Nested::from_shape_and_cells(&shape, &cells), nested);
    }
}
