//! Crawlers: a [`Cursor`] bound to one mesh's storage.
//!
//! [`Crawler`] reads; [`CrawlerMut`] reads and writes. Both are
//! short-lived borrows of the mesh they walk, so the borrow checker
//! guarantees no crawler outlives a structural change of its mesh.

use meshwork_core::MeshError;

use crate::cursor::{Crawl, Cursor};

/// Read-only crawler over a mesh's cells.
#[derive(Clone, Debug)]
pub struct Crawler<'a, T> {
    cursor: Cursor,
    cells: &'a [T],
}

impl<'a, T> Crawler<'a, T> {
    pub(crate) fn new(cursor: Cursor, cells: &'a [T]) -> Self {
        Self { cursor, cells }
    }

    /// The element under the cursor.
    pub fn current(&self) -> Result<&'a T, MeshError> {
        let offset = self.cursor.offset()?;
        Ok(&self.cells[offset])
    }
}

impl<T> Crawl for Crawler<'_, T> {
    fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    fn cursor_mut(&mut self) -> &mut Cursor {
        &mut self.cursor
    }
}

/// Crawler with write access to a mesh's cells.
#[derive(Debug)]
pub struct CrawlerMut<'a, T> {
    cursor: Cursor,
    cells: &'a mut [T],
}

impl<'a, T> CrawlerMut<'a, T> {
    pub(crate) fn new(cursor: Cursor, cells: &'a mut [T]) -> Self {
        Self { cursor, cells }
    }

    /// The element under the cursor.
    pub fn current(&self) -> Result<&T, MeshError> {
        let offset = self.cursor.offset()?;
        Ok(&self.cells[offset])
    }

    /// The element under the cursor, mutably.
    pub fn current_mut(&mut self) -> Result<&mut T, MeshError> {
        let offset = self.cursor.offset()?;
        Ok(&mut self.cells[offset])
    }

    /// Overwrite the element under the cursor.
    pub fn set_current(&mut self, value: T) -> Result<(), MeshError> {
        *self.current_mut()? = value;
        Ok(())
    }
}

impl<T> Crawl for CrawlerMut<'_, T> {
    fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    fn cursor_mut(&mut self) -> &mut Cursor {
        &mut self.cursor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_before_advance_is_rejected() {
        let cells = [1, 2, 3];
        let crawler = Crawler::new(Cursor::full(&[3]), &cells);
        assert_eq!(crawler.current(), Err(MeshError::NotPositioned));
    }

    #[test]
    fn write_through_crawler() {
        let mut cells = [0i32; 6];
        let mut crawler = CrawlerMut::new(Cursor::full(&[2, 3]), &mut cells);
        let mut n = 0;
        while crawler.has_next() {
            crawler.advance().unwrap();
            crawler.set_current(n).unwrap();
            n += 1;
        }
        assert_eq!(cells, [0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn set_position_addresses_cell() {
        let cells = [10, 11, 12, 13, 14, 15];
        let mut crawler = Crawler::new(Cursor::full(&[2, 3]), &cells);
        crawler.set_position(&[1, 1]).unwrap();
        assert_eq!(crawler.current(), Ok(&14));
        assert_eq!(crawler.index().unwrap().as_slice(), &[1, 1]);
    }

    #[test]
    fn last_cell_readable_after_has_next_turns_false() {
        let cells = [7, 8];
        let mut crawler = Crawler::new(Cursor::full(&[2]), &cells);
        crawler.advance().unwrap();
        crawler.advance().unwrap();
        assert!(!crawler.has_next());
        assert_eq!(crawler.current(), Ok(&8));
    }

    #[test]
    fn range_crawler_reports_its_box() {
        let cells = [0u8; 12];
        let crawler = Crawler::new(Cursor::range(&[3, 4], &[1, 0], &[3, 2]).unwrap(), &cells);
        let (from, to) = crawler.bounds();
        assert_eq!(from.as_slice(), &[1, 0]);
        assert_eq!(to.as_slice(), &[3, 2]);
        assert_eq!(crawler.rank(), 2);
    }
}
