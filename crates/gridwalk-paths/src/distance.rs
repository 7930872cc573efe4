use gridwalk_core::Point;

use crate::grid::Node;

/// Euclidean (L2) distance between two points.
#[inline]
pub fn euclidean(a: Point, b: Point) -> f64 {
    let dx = f64::from(a.x - b.x);
    let dy = f64::from(a.y - b.y);
    (dx * dx + dy * dy).sqrt()
}

/// Frontier key of `node` relative to `goal`: tentative distance plus the
/// straight-line estimate. Unreached nodes rank at `+inf`.
#[inline]
pub fn priority(node: &Node, goal: Point) -> f64 {
    match node.distance() {
        Some(d) => f64::from(d) + euclidean(node.pos(), goal),
        None => f64::INFINITY,
    }
}
