//! Storage-independent traversal state: [`Cursor`] and the [`Crawl`] trait.
//!
//! A crawler over rank-`R` storage is a chain of `R` levels, level `k`
//! walking dimension `k` and level `k + 1` walking the sub-array level `k`
//! currently points at. The chain is stored as a contiguous array indexed
//! by depth, so walking it for `position()` or re-seeding it in
//! `set_position()` is a plain loop with no back-references.
//!
//! # Visitation order
//!
//! `advance()` first tries to move the innermost level. Only when that
//! level is exhausted does the next outer level move, after which every
//! level below it is re-seeded to its own `from` over the new sub-array.
//! This is row-major order (last dimension fastest). Worst case O(rank),
//! amortized O(1).

use meshwork_core::{row_major_strides, Index, MeshError, Shape};
use smallvec::SmallVec;

/// One dimension of a crawler chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Level {
    /// First visited position along this dimension.
    from: usize,
    /// One past the last visited position.
    to: usize,
    /// Current position; meaningless until the cursor is started.
    current: usize,
    /// Cells between neighbours along this dimension.
    stride: usize,
    /// Storage offset of the cell (or sub-array) at `current`.
    offset: usize,
}

/// Position-tracking traversal state over a row-major rectangular range.
///
/// A fresh or [`reset`](Self::reset) cursor sits on the sentinel one
/// before `from`: the first [`advance`](Self::advance) lands on `from`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cursor {
    levels: SmallVec<[Level; 4]>,
    started: bool,
    empty: bool,
}

impl Cursor {
    /// Cursor over every cell of `shape`.
    pub fn full(shape: &[usize]) -> Self {
        let from: Index = SmallVec::from_elem(0, shape.len());
        Self::build(shape, &from, shape)
    }

    /// Cursor over the rectangular range `[from, to)` of `shape`.
    ///
    /// Returns `Err(MeshError::IndexOutOfRange)` if either bound has the
    /// wrong rank or any component exceeds its extent. A range with
    /// `from[k] >= to[k]` on some dimension is valid and visits nothing.
    pub fn range(shape: &[usize], from: &[usize], to: &[usize]) -> Result<Self, MeshError> {
        for bound in [from, to] {
            if bound.len() != shape.len() || bound.iter().zip(shape).any(|(&b, &s)| b > s) {
                return Err(MeshError::index_out_of_range(bound, shape));
            }
        }
        Ok(Self::build(shape, from, to))
    }

    fn build(shape: &[usize], from: &[usize], to: &[usize]) -> Self {
        let strides = row_major_strides(shape);
        let levels: SmallVec<[Level; 4]> = (0..shape.len())
            .map(|k| Level {
                from: from[k],
                to: to[k],
                current: from[k],
                stride: strides[k],
                offset: 0,
            })
            .collect();
        let empty = levels.is_empty() || levels.iter().any(|l| l.from >= l.to);
        Self {
            levels,
            started: false,
            empty,
        }
    }

    /// Number of dimensions walked.
    pub fn rank(&self) -> usize {
        self.levels.len()
    }

    /// Inclusive lower and exclusive upper bounds, one pair per dimension.
    pub fn bounds(&self) -> (Index, Index) {
        (
            self.levels.iter().map(|l| l.from).collect(),
            self.levels.iter().map(|l| l.to).collect(),
        )
    }

    /// Number of cells a full traversal visits.
    pub fn cell_count(&self) -> usize {
        if self.empty {
            return 0;
        }
        self.levels.iter().map(|l| l.to - l.from).product()
    }

    /// Whether the cursor currently points at a cell.
    pub fn is_positioned(&self) -> bool {
        self.started
    }

    /// Rewind to the sentinel before `from`. O(rank).
    pub fn reset(&mut self) {
        self.started = false;
        for level in &mut self.levels {
            level.current = level.from;
            level.offset = 0;
        }
    }

    /// Whether an unvisited cell remains.
    pub fn has_next(&self) -> bool {
        if self.empty {
            return false;
        }
        !self.started || self.levels.iter().any(|l| l.current + 1 < l.to)
    }

    /// Move to the next cell in row-major order.
    ///
    /// Returns `Err(MeshError::IteratorExhausted)` if no cell remains.
    pub fn advance(&mut self) -> Result<(), MeshError> {
        if self.empty {
            return Err(MeshError::IteratorExhausted);
        }
        if !self.started {
            self.started = true;
            self.seed(0);
            return Ok(());
        }
        let Some(depth) = (0..self.levels.len())
            .rev()
            .find(|&k| self.levels[k].current + 1 < self.levels[k].to)
        else {
            return Err(MeshError::IteratorExhausted);
        };
        let level = &mut self.levels[depth];
        level.current += 1;
        level.offset += level.stride;
        self.seed(depth + 1);
        Ok(())
    }

    /// Re-seed every level from `depth` inward to its own `from`, over
    /// the sub-array its parent currently points at.
    fn seed(&mut self, depth: usize) {
        for k in depth..self.levels.len() {
            let parent = if k == 0 { 0 } else { self.levels[k - 1].offset };
            let level = &mut self.levels[k];
            level.current = level.from;
            level.offset = parent + level.from * level.stride;
        }
    }

    /// Storage offset of the current cell.
    pub fn offset(&self) -> Result<usize, MeshError> {
        if !self.started {
            return Err(MeshError::NotPositioned);
        }
        self.levels
            .last()
            .map(|l| l.offset)
            .ok_or(MeshError::NotPositioned)
    }

    /// Write the current index into `out`, most significant dimension first.
    ///
    /// `out` must hold exactly `rank()` slots; any other length is
    /// `Err(MeshError::InvalidShape)`.
    pub fn position(&self, out: &mut [usize]) -> Result<(), MeshError> {
        if !self.started {
            return Err(MeshError::NotPositioned);
        }
        if out.len() != self.levels.len() {
            return Err(MeshError::InvalidShape {
                reason: format!(
                    "position buffer holds {} components, crawler rank is {}",
                    out.len(),
                    self.levels.len()
                ),
            });
        }
        for (slot, level) in out.iter_mut().zip(&self.levels) {
            *slot = level.current;
        }
        Ok(())
    }

    /// Jump to `index`, re-seeding each inner level over the sub-array
    /// addressed by the outer components.
    ///
    /// Returns `Err(MeshError::IndexOutOfRange)` if `index` has the wrong
    /// rank or lies outside the cursor's bounds. The cursor is unchanged
    /// on error.
    pub fn set_position(&mut self, index: &[usize]) -> Result<(), MeshError> {
        let inside = index.len() == self.levels.len()
            && index
                .iter()
                .zip(&self.levels)
                .all(|(&i, l)| l.from <= i && i < l.to);
        if !inside {
            let to: Shape = self.levels.iter().map(|l| l.to).collect();
            return Err(MeshError::index_out_of_range(index, &to));
        }
        let mut parent = 0;
        for (level, &i) in self.levels.iter_mut().zip(index) {
            level.current = i;
            level.offset = parent + i * level.stride;
            parent = level.offset;
        }
        self.started = true;
        Ok(())
    }
}

/// The crawler protocol shared by read-only and mutable crawlers.
///
/// Implementors expose their [`Cursor`]; navigation is provided.
pub trait Crawl {
    /// The traversal state.
    fn cursor(&self) -> &Cursor;

    /// The traversal state, mutably.
    fn cursor_mut(&mut self) -> &mut Cursor;

    /// Rewind to the sentinel before the first cell.
    fn reset(&mut self) {
        self.cursor_mut().reset();
    }

    /// Whether an unvisited cell remains.
    fn has_next(&self) -> bool {
        self.cursor().has_next()
    }

    /// Move to the next cell in row-major order.
    fn advance(&mut self) -> Result<(), MeshError> {
        self.cursor_mut().advance()
    }

    /// Write the current index into `out`, most significant first.
    fn position(&self, out: &mut [usize]) -> Result<(), MeshError> {
        self.cursor().position(out)
    }

    /// The current index as an owned [`Index`].
    fn index(&self) -> Result<Index, MeshError> {
        let mut out: Index = SmallVec::from_elem(0, self.cursor().rank());
        self.cursor().position(&mut out)?;
        Ok(out)
    }

    /// Jump directly to `index`.
    fn set_position(&mut self, index: &[usize]) -> Result<(), MeshError> {
        self.cursor_mut().set_position(index)
    }

    /// Number of dimensions walked.
    fn rank(&self) -> usize {
        self.cursor().rank()
    }

    /// The `[from, to)` box this crawler walks.
    fn bounds(&self) -> (Index, Index) {
        self.cursor().bounds()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn visit_all(cursor: &mut Cursor) -> Vec<(Index, usize)> {
        let mut out = Vec::new();
        let mut index: Index = SmallVec::from_elem(0, cursor.rank());
        while cursor.has_next() {
            cursor.advance().unwrap();
            cursor.position(&mut index).unwrap();
            out.push((index.clone(), cursor.offset().unwrap()));
        }
        out
    }

    // ── Ordering ────────────────────────────────────────────────

    #[test]
    fn full_3x4_is_row_major() {
        let mut cursor = Cursor::full(&[3, 4]);
        let visited = visit_all(&mut cursor);
        assert_eq!(visited.len(), 12);
        for (n, (index, offset)) in visited.iter().enumerate() {
            assert_eq!(index.as_slice(), &[n / 4, n % 4]);
            assert_eq!(*offset, n);
        }
    }

    #[test]
    fn has_next_turns_false_after_twelfth_advance() {
        let mut cursor = Cursor::full(&[3, 4]);
        for _ in 0..11 {
            cursor.advance().unwrap();
        }
        assert!(cursor.has_next());
        cursor.advance().unwrap();
        assert!(!cursor.has_next());
        assert_eq!(cursor.advance(), Err(MeshError::IteratorExhausted));
    }

    #[test]
    fn range_visits_only_the_box() {
        let mut cursor = Cursor::range(&[4, 5], &[1, 2], &[3, 4]).unwrap();
        let visited: Vec<Index> = visit_all(&mut cursor).into_iter().map(|(i, _)| i).collect();
        let expected = vec![vec![1, 2], vec![1, 3], vec![2, 2], vec![2, 3]];
        assert_eq!(
            visited.iter().map(|i| i.to_vec()).collect::<Vec<_>>(),
            expected
        );
    }

    #[test]
    fn range_offsets_follow_parent_strides() {
        let mut cursor = Cursor::range(&[2, 3, 4], &[1, 1, 2], &[2, 2, 4]).unwrap();
        let offsets: Vec<usize> = visit_all(&mut cursor).into_iter().map(|(_, o)| o).collect();
        // 1*12 + 1*4 + {2, 3}
        assert_eq!(offsets, vec![18, 19]);
    }

    // ── Edge cases ──────────────────────────────────────────────

    #[test]
    fn empty_range_has_no_cells() {
        let cursor = Cursor::range(&[4, 4], &[2, 0], &[2, 4]).unwrap();
        assert!(!cursor.has_next());
        assert_eq!(cursor.cell_count(), 0);
    }

    #[test]
    fn zero_extent_shape_has_no_cells() {
        let mut cursor = Cursor::full(&[3, 0]);
        assert!(!cursor.has_next());
        assert_eq!(cursor.advance(), Err(MeshError::IteratorExhausted));
    }

    #[test]
    fn range_beyond_extent_rejected() {
        let err = Cursor::range(&[4, 4], &[0, 0], &[5, 4]).unwrap_err();
        assert!(matches!(err, MeshError::IndexOutOfRange { .. }));
    }

    #[test]
    fn range_rank_mismatch_rejected() {
        let err = Cursor::range(&[4, 4], &[0], &[4, 4]).unwrap_err();
        assert!(matches!(err, MeshError::IndexOutOfRange { .. }));
    }

    #[test]
    fn unpositioned_cursor_reports_error() {
        let cursor = Cursor::full(&[2]);
        assert_eq!(cursor.offset(), Err(MeshError::NotPositioned));
        let mut buf = [0usize; 1];
        assert_eq!(cursor.position(&mut buf), Err(MeshError::NotPositioned));
    }

    #[test]
    fn short_position_buffer_rejected() {
        let mut cursor = Cursor::full(&[2, 2]);
        cursor.advance().unwrap();
        let mut buf = [0usize; 1];
        assert!(matches!(
            cursor.position(&mut buf),
            Err(MeshError::InvalidShape { .. })
        ));
    }

    #[test]
    fn long_position_buffer_rejected() {
        let mut cursor = Cursor::full(&[2, 2]);
        cursor.advance().unwrap();
        let mut buf = [7usize; 3];
        assert!(matches!(
            cursor.position(&mut buf),
            Err(MeshError::InvalidShape { .. })
        ));
        assert_eq!(buf, [7, 7, 7]);
    }

    // ── Jumps and resets ────────────────────────────────────────

    #[test]
    fn set_position_then_advance_continues_row_major() {
        let mut cursor = Cursor::full(&[3, 4]);
        cursor.set_position(&[1, 3]).unwrap();
        assert_eq!(cursor.offset(), Ok(7));
        cursor.advance().unwrap();
        let mut buf = [0usize; 2];
        cursor.position(&mut buf).unwrap();
        assert_eq!(buf, [2, 0]);
        assert_eq!(cursor.offset(), Ok(8));
    }

    #[test]
    fn set_position_outside_bounds_leaves_cursor_alone() {
        let mut cursor = Cursor::range(&[4, 4], &[1, 1], &[3, 3]).unwrap();
        cursor.advance().unwrap();
        let before = cursor.clone();
        assert!(cursor.set_position(&[0, 1]).is_err());
        assert!(cursor.set_position(&[1, 3]).is_err());
        assert_eq!(cursor, before);
    }

    #[test]
    fn reset_restarts_traversal() {
        let mut cursor = Cursor::full(&[2, 2]);
        let first = visit_all(&mut cursor);
        cursor.reset();
        assert!(!cursor.is_positioned());
        let second = visit_all(&mut cursor);
        assert_eq!(first, second);
    }

    // ── Property tests ──────────────────────────────────────────

    proptest! {
        #[test]
        fn full_traversal_visits_every_offset_once(
            shape in proptest::collection::vec(1usize..5, 1..5),
        ) {
            let mut cursor = Cursor::full(&shape);
            let offsets: Vec<usize> = visit_all(&mut cursor).into_iter().map(|(_, o)| o).collect();
            let total: usize = shape.iter().product();
            prop_assert_eq!(offsets, (0..total).collect::<Vec<_>>());
        }

        #[test]
        fn range_count_matches_box_volume(
            dims in proptest::collection::vec((1usize..6, 0usize..6, 0usize..6), 1..4),
        ) {
            let shape: Vec<usize> = dims.iter().map(|d| d.0).collect();
            let from: Vec<usize> = dims.iter().map(|d| d.1.min(d.0)).collect();
            let to: Vec<usize> = dims.iter().map(|d| d.2.min(d.0)).collect();
            let mut cursor = Cursor::range(&shape, &from, &to).unwrap();
            let expected = cursor.cell_count();
            prop_assert_eq!(visit_all(&mut cursor).len(), expected);
        }
    }
}
