use gridwalk_core::Point;

use crate::error::SearchError;
use crate::frontier::Frontier;
use crate::grid::{Cost, Grid};
use crate::neighbors::Neighbors;

/// Where a [`Search`] is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchState {
    Running,
    Found,
    Trapped,
    Exhausted,
}

impl SearchState {
    #[inline]
    pub fn is_done(self) -> bool {
        self != Self::Running
    }
}

/// What a single [`Search::step`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// A wall was popped and dropped.
    Skipped(Point),
    /// A node was finalized and its neighbours relaxed.
    Expanded(Point),
    /// The search is over. Repeated calls keep returning this.
    Done(SearchState),
}

/// Final result of a search.
///
/// `visited` is the order in which non-wall nodes were popped, for callers
/// that replay the search.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    /// The goal was finalized; it is the last element of `visited`.
    Found { visited: Vec<Point> },
    /// The last element of `visited` had no finite distance: nothing left in
    /// the frontier is reachable from the start.
    Trapped { visited: Vec<Point> },
    /// Every node was popped without finalizing the goal. Always the case
    /// when the goal is a wall and everything else is reachable.
    Exhausted,
}

impl Outcome {
    #[inline]
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found { .. })
    }

    pub fn state(&self) -> SearchState {
        match self {
            Self::Found { .. } => SearchState::Found,
            Self::Trapped { .. } => SearchState::Trapped,
            Self::Exhausted => SearchState::Exhausted,
        }
    }

    /// The finalization trace. Empty for [`Outcome::Exhausted`].
    pub fn visited(&self) -> &[Point] {
        match self {
            Self::Found { visited } | Self::Trapped { visited } => visited,
            Self::Exhausted => &[],
        }
    }

    /// The route from start to goal, if the goal was found.
    ///
    /// `grid` must be the grid this outcome was computed on, untouched since.
    pub fn path(&self, grid: &Grid) -> Option<Vec<Point>> {
        match self {
            Self::Found { visited } => visited.last().map(|&goal| grid.path_to(goal)),
            _ => None,
        }
    }
}

/// Weighted best-first search over a borrowed [`Grid`].
///
/// Create it with [`Search::new`], then either call [`Search::run`] or drive
/// it one node at a time with [`Search::step`]. Dropping a running search
/// leaves the grid in a consistent partial state.
pub struct Search<'g> {
    grid: &'g mut Grid,
    goal: usize,
    goal_pos: Point,
    frontier: Frontier,
    neighbors: Neighbors,
    visited: Vec<Point>,
    state: SearchState,
    pops: usize,
}

impl<'g> Search<'g> {
    /// Reset `grid` and prepare a search from `start` to `end`.
    pub fn new(grid: &'g mut Grid, start: Point, end: Point) -> Result<Self, SearchError> {
        let start_idx = grid.idx(start).ok_or(SearchError::StartOutOfRange(start))?;
        let goal = grid.idx(end).ok_or(SearchError::EndOutOfRange(end))?;

        grid.reset();
        grid.nodes[start_idx].distance = Some(0);
        let frontier = Frontier::new(grid);

        log::debug!(
            "search {start} -> {end} over {} ({} nodes)",
            grid.range(),
            grid.len()
        );

        Ok(Self {
            grid,
            goal,
            goal_pos: end,
            frontier,
            neighbors: Neighbors::new(),
            visited: Vec::new(),
            state: SearchState::Running,
            pops: 0,
        })
    }

    #[inline]
    pub fn state(&self) -> SearchState {
        self.state
    }

    /// Nodes finalized so far, in order.
    #[inline]
    pub fn visited(&self) -> &[Point] {
        &self.visited
    }

    /// Number of frontier pops so far, walls included.
    #[inline]
    pub fn pops(&self) -> usize {
        self.pops
    }

    /// Nodes still waiting in the frontier. Once this is zero, the next
    /// [`Search::step`] ends the search without popping anything.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.frontier.len()
    }

    /// Read access to the grid being searched.
    #[inline]
    pub fn grid(&self) -> &Grid {
        self.grid
    }

    /// Pop one node and act on it.
    pub fn step(&mut self) -> Step {
        if self.state.is_done() {
            return Step::Done(self.state);
        }

        let Some(ci) = self.frontier.select_next(self.grid, self.goal_pos) else {
            return self.finish(SearchState::Exhausted);
        };
        self.pops += 1;

        let node = &self.grid.nodes[ci];
        let cp = node.pos();
        if node.is_wall() {
            log::trace!("pop {}: wall {cp} dropped", self.pops);
            return Step::Skipped(cp);
        }

        self.visited.push(cp);
        let Some(dist) = node.distance() else {
            return self.finish(SearchState::Trapped);
        };

        self.grid.nodes[ci].visited = true;
        if ci == self.goal {
            return self.finish(SearchState::Found);
        }

        log::trace!("pop {}: {cp} finalized at distance {dist}", self.pops);
        self.relax(ci, cp, dist);
        Step::Expanded(cp)
    }

    /// Drive the search to a terminal state.
    pub fn run(mut self) -> Outcome {
        while !matches!(self.step(), Step::Done(_)) {}
        self.into_outcome()
    }

    /// The outcome, once the search is done.
    pub fn outcome(&self) -> Option<Outcome> {
        match self.state {
            SearchState::Running => None,
            SearchState::Found => Some(Outcome::Found {
                visited: self.visited.clone(),
            }),
            SearchState::Trapped => Some(Outcome::Trapped {
                visited: self.visited.clone(),
            }),
            SearchState::Exhausted => Some(Outcome::Exhausted),
        }
    }

    fn into_outcome(self) -> Outcome {
        let visited = self.visited;
        match self.state {
            SearchState::Found => Outcome::Found { visited },
            SearchState::Trapped => Outcome::Trapped { visited },
            SearchState::Running | SearchState::Exhausted => Outcome::Exhausted,
        }
    }

    fn finish(&mut self, state: SearchState) -> Step {
        self.state = state;
        log::debug!(
            "search {:?} after {} pops, {} nodes finalized",
            state,
            self.pops,
            self.visited.len()
        );
        Step::Done(state)
    }

    // Overwrite, never compare: the latest relaxation wins.
    fn relax(&mut self, ci: usize, cp: Point, base: Cost) {
        for &np in self.neighbors.unvisited(self.grid, cp) {
            let Some(ni) = self.grid.idx(np) else {
                continue;
            };
            let n = &mut self.grid.nodes[ni];
            n.distance = Some(base.saturating_add(n.weight()).saturating_add(1));
            n.previous = Some(ci);
        }
    }
}

/// Run a complete search from `start` to `end` on `grid`.
///
/// The grid keeps the search state afterwards, so [`Grid::path_to`] or
/// [`Outcome::path`] can reconstruct the route.
pub fn astar(grid: &mut Grid, start: Point, end: Point) -> Result<Outcome, SearchError> {
    Ok(Search::new(grid, start, end)?.run())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(row: i32, col: i32) -> Point {
        Point::at(row, col)
    }

    #[test]
    fn open_3x3_visit_order() {
        let mut g = Grid::with_size(3, 3);
        let outcome = astar(&mut g, at(0, 0), at(2, 2)).unwrap();

        let expected = vec![
            at(0, 0),
            at(0, 1),
            at(1, 0),
            at(1, 1),
            at(0, 2),
            at(2, 0),
            at(1, 2),
            at(2, 1),
            at(2, 2),
        ];
        assert_eq!(outcome, Outcome::Found { visited: expected });
        assert_eq!(
            outcome.path(&g).unwrap(),
            vec![at(0, 0), at(1, 0), at(2, 0), at(2, 1), at(2, 2)]
        );
    }

    #[test]
    fn wall_between_start_and_end_traps() {
        let mut g = Grid::with_size(3, 1);
        g.set_wall(at(0, 1), true);
        let outcome = astar(&mut g, at(0, 0), at(0, 2)).unwrap();

        assert_eq!(outcome.state(), SearchState::Trapped);
        let visited = outcome.visited();
        assert_eq!(visited, &[at(0, 0), at(0, 2)]);
        assert!(!visited.contains(&at(0, 1)));
        // The trace ends on the goal, yet it was never reached.
        let last = g.node(at(0, 2)).unwrap();
        assert_eq!(last.distance(), None);
        assert!(!last.is_visited());
        assert_eq!(outcome.path(&g), None);
    }

    #[test]
    fn wall_goal_exhausts() {
        let mut g = Grid::with_size(3, 1);
        g.set_wall(at(0, 2), true);
        let mut s = Search::new(&mut g, at(0, 0), at(0, 2)).unwrap();

        assert_eq!(s.step(), Step::Expanded(at(0, 0)));
        assert_eq!(s.step(), Step::Expanded(at(0, 1)));
        assert_eq!(s.step(), Step::Skipped(at(0, 2)));
        assert_eq!(s.remaining(), 0);
        assert_eq!(s.state(), SearchState::Running);
        assert_eq!(s.step(), Step::Done(SearchState::Exhausted));
        assert_eq!(s.pops(), 3);
        assert_eq!(s.outcome(), Some(Outcome::Exhausted));
        assert_eq!(s.run(), Outcome::Exhausted);
    }

    #[test]
    fn done_is_sticky() {
        let mut g = Grid::with_size(1, 1);
        let p = at(0, 0);
        let mut s = Search::new(&mut g, p, p).unwrap();
        assert_eq!(s.step(), Step::Done(SearchState::Found));
        assert_eq!(s.step(), Step::Done(SearchState::Found));
        assert_eq!(s.pops(), 1);
        assert_eq!(s.visited(), &[p]);
    }

    #[test]
    fn start_equals_goal_path_is_single_cell() {
        let mut g = Grid::with_size(4, 4);
        let p = at(2, 1);
        let outcome = astar(&mut g, p, p).unwrap();
        assert_eq!(outcome.visited(), &[p]);
        assert_eq!(outcome.path(&g), Some(vec![p]));
    }

    #[test]
    fn wall_start_traps_on_first_reachable_pop() {
        let mut g = Grid::with_size(2, 1);
        g.set_wall(at(0, 0), true);
        let outcome = astar(&mut g, at(0, 0), at(0, 1)).unwrap();
        // Start dropped as a wall; (0,1) popped with infinite distance.
        assert_eq!(outcome, Outcome::Trapped { visited: vec![at(0, 1)] });
    }

    #[test]
    fn out_of_range_endpoints_are_errors() {
        let mut g = Grid::with_size(2, 2);
        assert_eq!(
            astar(&mut g, at(5, 0), at(0, 0)).err(),
            Some(SearchError::StartOutOfRange(at(5, 0)))
        );
        assert_eq!(
            astar(&mut g, at(0, 0), at(0, -1)).err(),
            Some(SearchError::EndOutOfRange(at(0, -1)))
        );
    }

    #[test]
    fn relaxation_overwrites_without_comparing() {
        // Row 0: S . .
        // Row 1: 9 . E
        let mut g = Grid::with_size(3, 2);
        g.set_weight(at(1, 0), 9);
        let mut s = Search::new(&mut g, at(0, 0), at(1, 2)).unwrap();

        assert_eq!(s.step(), Step::Expanded(at(0, 0)));
        let n = s.grid().node(at(1, 0)).unwrap();
        assert_eq!((n.distance(), n.previous()), (Some(10), Some(0)));

        assert_eq!(s.step(), Step::Expanded(at(0, 1)));
        assert_eq!(s.step(), Step::Expanded(at(0, 2)));
        assert_eq!(s.step(), Step::Expanded(at(1, 1)));

        // (1,1) relaxed (1,0) again with 2 + 9 + 1, replacing the cheaper 10.
        let n = s.grid().node(at(1, 0)).unwrap();
        assert_eq!((n.distance(), n.previous()), (Some(12), Some(4)));

        assert_eq!(s.step(), Step::Done(SearchState::Found));
        assert_eq!(
            s.run().path(&g).unwrap(),
            vec![at(0, 0), at(0, 1), at(1, 1), at(1, 2)]
        );
    }

    #[test]
    fn weighted_corridor_accumulates_cost() {
        let mut g = Grid::with_size(4, 1);
        let weights: [Cost; 4] = [7, 2, 0, 5];
        for (col, w) in weights.iter().enumerate() {
            g.set_weight(at(0, col as i32), *w);
        }
        let outcome = astar(&mut g, at(0, 0), at(0, 3)).unwrap();
        assert!(outcome.is_found());
        // Start weight is never paid.
        assert_eq!(
            g.node(at(0, 3)).unwrap().distance(),
            Some((2 + 1) + (0 + 1) + (5 + 1))
        );
    }

    #[test]
    fn huge_weights_stay_reachable() {
        let mut g = Grid::with_size(2, 1);
        g.set_weight(at(0, 1), Cost::MAX - 1);
        let outcome = astar(&mut g, at(0, 0), at(0, 1)).unwrap();
        assert_eq!(outcome, Outcome::Found { visited: vec![at(0, 0), at(0, 1)] });
        assert_eq!(g.node(at(0, 1)).unwrap().distance(), Some(Cost::MAX));

        // Saturated costs keep propagating instead of reading as unreached.
        let mut g = Grid::with_size(3, 1);
        g.set_weight(at(0, 1), Cost::MAX);
        let outcome = astar(&mut g, at(0, 0), at(0, 2)).unwrap();
        assert!(outcome.is_found());
        assert_eq!(g.node(at(0, 2)).unwrap().distance(), Some(Cost::MAX));
        let path = outcome.path(&g).unwrap();
        assert_eq!(path, vec![at(0, 0), at(0, 1), at(0, 2)]);
        assert_eq!(g.path_cost(&path), Some(Cost::MAX));
    }

    #[test]
    fn rerun_resets_previous_state() {
        let mut g = Grid::with_size(3, 3);
        let first = astar(&mut g, at(0, 0), at(2, 2)).unwrap();
        g.set_wall(at(1, 1), true);
        let second = astar(&mut g, at(2, 2), at(0, 0)).unwrap();
        assert!(first.is_found() && second.is_found());
        assert!(!g.node(at(1, 1)).unwrap().is_visited());
        let again = astar(&mut g, at(2, 2), at(0, 0)).unwrap();
        assert_eq!(second, again);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn outcome_serde_round_trip() {
        let outcome = Outcome::Trapped {
            visited: vec![at(0, 0), at(3, 4)],
        };
        let json = serde_json::to_string(&outcome).unwrap();
        let back: Outcome = serde_json::from_str(&json).unwrap();
        assert_eq!(back, outcome);
    }
}
