//! **gridwalk-core** — geometry primitives for grid search.
//!
//! Cells are addressed by [`Point`] (`x` = column, `y` = row) inside a
//! half-open [`Range`]. Both types are small `Copy` values; the search
//! crate builds its node arena on top of them.

pub mod geom;

pub use geom::{Point, Range, RangeIter};
