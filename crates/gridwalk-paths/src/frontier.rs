use gridwalk_core::Point;

use crate::distance::priority;
use crate::grid::Grid;

/// The set of nodes not popped yet, kept in the order left by the last
/// selection.
///
/// Every selection re-keys all members from their current distances and
/// stable-sorts them, so members with equal keys keep the relative order they
/// had after the previous selection. There is no decrease-key: a relaxed node
/// simply sorts differently on the next call.
#[derive(Debug, Clone)]
pub struct Frontier {
    members: Vec<usize>,
    keyed: Vec<(f64, usize)>,
}

impl Frontier {
    /// A frontier holding every node of `grid` in row-major order.
    pub fn new(grid: &Grid) -> Self {
        Self {
            members: (0..grid.len()).collect(),
            keyed: Vec::with_capacity(grid.len()),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Remove and return the arena index with the smallest
    /// `distance + euclidean(node, goal)`.
    pub fn select_next(&mut self, grid: &Grid, goal: Point) -> Option<usize> {
        if self.members.is_empty() {
            return None;
        }

        self.keyed.clear();
        self.keyed.extend(
            self.members
                .iter()
                .map(|&i| (priority(&grid.nodes[i], goal), i)),
        );
        // `sort_by` is stable; `total_cmp` treats two infinities as equal.
        self.keyed.sort_by(|a, b| a.0.total_cmp(&b.0));

        let best = self.keyed[0].1;
        self.members.clear();
        self.members.extend(self.keyed[1..].iter().map(|&(_, i)| i));
        Some(best)
    }
}
