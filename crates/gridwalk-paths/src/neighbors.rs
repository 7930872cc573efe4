use gridwalk_core::Point;

use crate::grid::Grid;

/// Cached neighbour enumeration.
///
/// Yields the cardinal neighbours of a cell that lie inside the grid and were
/// not finalized by the current search. Walls are kept: they may be relaxed
/// and are only dropped when popped.
pub struct Neighbors {
    buf: Vec<Point>,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new()
    }
}

impl Neighbors {
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(4),
        }
    }

    /// In-bounds, unvisited neighbours of `p` in the order up, down, left,
    /// right.
    pub fn unvisited(&mut self, grid: &Grid, p: Point) -> &[Point] {
        self.buf.clear();
        for n in p.neighbors_4() {
            if grid.node(n).is_some_and(|node| !node.is_visited()) {
                self.buf.push(n);
            }
        }
        &self.buf
    }
}
