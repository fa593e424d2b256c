//! Crawler protocol compliance checks.
//!
//! Each function asserts one invariant of the crawler contract over a
//! ramp mesh of the given shape, where every cell holds its own storage
//! offset. Reused by the mesh crate's integration tests across ranks and
//! degenerate shapes.

use indexmap::IndexSet;
use meshwork_core::{cell_count, Index, MeshError};
use meshwork_mesh::{Crawl, Mesh, MeshData, MeshDataMut};

fn offset_mesh(shape: &[usize]) -> Mesh<usize> {
    let count = cell_count(shape).expect("compliance shape overflows usize");
    Mesh::from_vec(shape, (0..count).collect()).expect("compliance shape must be valid")
}

fn collect_positions(mesh: &Mesh<usize>) -> Vec<Index> {
    let mut crawler = mesh.crawler();
    let mut visited = Vec::new();
    while crawler.has_next() {
        crawler.advance().expect("advance while has_next");
        visited.push(crawler.index().expect("positioned after advance"));
    }
    visited
}

/// Assert that a full crawl visits exactly `product(shape)` unique cells.
pub fn assert_full_traversal_complete(shape: &[usize]) {
    let mesh = offset_mesh(shape);
    let visited = collect_positions(&mesh);
    assert_eq!(
        visited.len(),
        mesh.len(),
        "full crawl of {shape:?} visited {} cells, expected {}",
        visited.len(),
        mesh.len()
    );
    let unique: IndexSet<_> = visited.iter().collect();
    assert_eq!(unique.len(), visited.len(), "full crawl of {shape:?} repeated a cell");
}

/// Assert that positions arrive in strictly increasing row-major order.
pub fn assert_row_major_order(shape: &[usize]) {
    let visited = collect_positions(&offset_mesh(shape));
    for pair in visited.windows(2) {
        assert!(
            pair[0] < pair[1],
            "crawl of {shape:?} went from {:?} to {:?}",
            pair[0].as_slice(),
            pair[1].as_slice()
        );
    }
}

/// Assert that the crawler's current element is the one `element_at`
/// returns for its position.
pub fn assert_current_matches_element_at(shape: &[usize]) {
    let mesh = offset_mesh(shape);
    let mut crawler = mesh.crawler();
    let mut expected_offset = 0;
    while crawler.has_next() {
        crawler.advance().expect("advance while has_next");
        let index = crawler.index().expect("positioned after advance");
        let current = crawler.current().expect("positioned after advance");
        assert_eq!(
            Ok(current),
            mesh.element_at(&index),
            "crawler and element_at disagree at {:?}",
            index.as_slice()
        );
        assert_eq!(*current, expected_offset, "row-major offset mismatch");
        expected_offset += 1;
    }
}

/// Assert that advancing past the last cell fails with
/// `IteratorExhausted` and leaves the last cell readable.
pub fn assert_exhaustion(shape: &[usize]) {
    let mesh = offset_mesh(shape);
    let mut crawler = mesh.crawler();
    for _ in 0..mesh.len() {
        assert!(crawler.has_next());
        crawler.advance().expect("advance while has_next");
    }
    assert!(!crawler.has_next(), "crawl of {shape:?} did not end");
    assert_eq!(crawler.advance(), Err(MeshError::IteratorExhausted));
    if let Some(last) = mesh.cells().last() {
        assert_eq!(crawler.current(), Ok(last));
    }
}

/// Assert that `reset` replays the same sequence.
pub fn assert_reset_replays(shape: &[usize]) {
    let mesh = offset_mesh(shape);
    let mut crawler = mesh.crawler();
    let mut first = Vec::new();
    while crawler.has_next() {
        crawler.advance().expect("advance while has_next");
        first.push(*crawler.current().expect("positioned"));
    }
    crawler.reset();
    let mut second = Vec::new();
    while crawler.has_next() {
        crawler.advance().expect("advance while has_next");
        second.push(*crawler.current().expect("positioned"));
    }
    assert_eq!(first, second, "reset did not replay the crawl of {shape:?}");
}

/// Assert that `set_position` reaches every cell and reports it back.
pub fn assert_set_position_round_trip(shape: &[usize]) {
    let mesh = offset_mesh(shape);
    for index in collect_positions(&mesh) {
        let mut crawler = mesh.crawler();
        crawler.set_position(&index).expect("index from a full crawl");
        assert_eq!(crawler.index().expect("positioned"), index);
        assert_eq!(crawler.current(), mesh.element_at(&index));
    }
}

/// Assert that a mutable crawl writes every cell exactly once.
pub fn assert_mutable_crawl_covers_mesh(shape: &[usize]) {
    let mut mesh = offset_mesh(shape);
    {
        let mut crawler = mesh.crawler_mut();
        while crawler.has_next() {
            crawler.advance().expect("advance while has_next");
            *crawler.current_mut().expect("positioned") += 1;
        }
    }
    for (offset, &value) in mesh.iter().enumerate() {
        assert_eq!(value, offset + 1, "cell {offset} of {shape:?} written {value}");
    }
}

/// Run all crawler compliance checks on a shape.
pub fn run_full_compliance(shape: &[usize]) {
    assert_full_traversal_complete(shape);
    assert_row_major_order(shape);
    assert_current_matches_element_at(shape);
    assert_exhaustion(shape);
    assert_reset_replays(shape);
    assert_set_position_round_trip(shape);
    assert_mutable_crawl_covers_mesh(shape);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compliance_rank_one() {
        run_full_compliance(&[5]);
    }

    #[test]
    fn compliance_rank_three() {
        run_full_compliance(&[2, 3, 4]);
    }

    #[test]
    fn compliance_zero_extent() {
        run_full_compliance(&[3, 0, 2]);
    }
}
