use gridwalk_core::Point;

use crate::grid::{Cost, Grid};

impl Grid {
    /// Walk back-pointers from `goal` to the node that has none.
    ///
    /// After a search that found `goal`, this is the route from the start to
    /// `goal`, both included. For any other goal the result is whatever chain
    /// the last search left behind; a goal outside the grid gives an empty
    /// path.
    pub fn path_to(&self, goal: Point) -> Vec<Point> {
        let Some(mut ci) = self.idx(goal) else {
            return Vec::new();
        };

        let mut path = Vec::new();
        loop {
            path.push(self.point(ci));
            match self.nodes[ci].previous {
                // Back-pointers always lead to earlier finalized nodes, so the
                // length bound never trips on a chain built by a search.
                Some(pi) if path.len() < self.nodes.len() => ci = pi,
                _ => break,
            }
        }
        path.reverse();
        path
    }

    /// Cost of walking `path`: each step pays the entered cell's weight plus
    /// one. Returns `None` if a point is outside the grid.
    pub fn path_cost(&self, path: &[Point]) -> Option<Cost> {
        path.iter().skip(1).try_fold(0 as Cost, |acc, &p| {
            let n = self.node(p)?;
            Some(acc.saturating_add(n.weight()).saturating_add(1))
        })
    }
}
