//! Search summaries for the terminal and for JSON consumers.

use std::fmt;

use gridwalk_core::Point;
use gridwalk_paths::{Cost, Grid, Outcome, SearchState};
use serde::Serialize;

/// Everything the CLI prints about one search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub state: SearchState,
    pub start: Point,
    pub end: Point,
    /// Frontier pops, walls included.
    pub pops: usize,
    /// Finalization order.
    pub visited: Vec<Point>,
    pub path: Option<Vec<Point>>,
    pub cost: Option<Cost>,
}

impl Report {
    /// Summarize a finished search. `grid` must still hold its state.
    pub fn finished(grid: &Grid, start: Point, end: Point, pops: usize, outcome: &Outcome) -> Self {
        let path = outcome.path(grid);
        let cost = path.as_deref().and_then(|p| grid.path_cost(p));
        Self {
            state: outcome.state(),
            start,
            end,
            pops,
            visited: outcome.visited().to_vec(),
            path,
            cost,
        }
    }

    /// Summarize a search that was stopped before reaching a terminal state.
    pub fn interrupted(start: Point, end: Point, pops: usize, visited: &[Point]) -> Self {
        Self {
            state: SearchState::Running,
            start,
            end,
            pops,
            visited: visited.to_vec(),
            path: None,
            cost: None,
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = match self.state {
            SearchState::Running => "interrupted",
            SearchState::Found => "found",
            SearchState::Trapped => "trapped",
            SearchState::Exhausted => "exhausted",
        };
        writeln!(f, "{} -> {}: {state}", self.start, self.end)?;
        writeln!(f, "visited: {} ({} pops)", self.visited.len(), self.pops)?;
        match (&self.path, self.cost) {
            (Some(path), Some(cost)) => {
                writeln!(f, "path: {} cells, cost {cost}", path.len())?;
                let cells: Vec<String> = path.iter().map(Point::to_string).collect();
                write!(f, "{}", cells.join(" "))
            }
            _ => write!(f, "path: none"),
        }
    }
}
