//! Weighted best-first search on 2D grids.
//!
//! A [`Grid`] is an arena of [`Node`]s addressed by [`Point`]. A [`Search`]
//! borrows the grid mutably for the length of a run, finalizes one node per
//! [`Search::step`], and ends in one of three terminal states:
//!
//! | State | Meaning |
//! |---|---|
//! | [`Outcome::Found`] | the goal was finalized |
//! | [`Outcome::Trapped`] | the next node to finalize had no finite distance |
//! | [`Outcome::Exhausted`] | every node was popped without reaching the goal |
//!
//! Nodes are ordered by `distance + euclidean(node, goal)`. Relaxation
//! overwrites a neighbour's distance and back-pointer unconditionally, so the
//! last relaxation before a node is popped decides its predecessor.
//!
//! ```
//! use gridwalk_core::Point;
//! use gridwalk_paths::{Grid, astar};
//!
//! let mut grid = Grid::with_size(3, 3);
//! let outcome = astar(&mut grid, Point::at(0, 0), Point::at(2, 2)).unwrap();
//! let path = outcome.path(&grid).unwrap();
//! assert_eq!(path.len(), 5);
//! ```

mod distance;
mod error;
mod frontier;
mod grid;
mod neighbors;
mod path;
mod search;

pub use distance::{euclidean, priority};
pub use error::SearchError;
pub use frontier::Frontier;
pub use grid::{Cost, Grid, Node};
pub use gridwalk_core::{Point, Range};
pub use neighbors::Neighbors;
pub use search::{Outcome, Search, SearchState, Step, astar};
