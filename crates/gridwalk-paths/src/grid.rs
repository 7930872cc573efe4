use gridwalk_core::{Point, Range};

/// Traversal cost unit. Weights are unsigned, so negative costs cannot occur.
pub type Cost = u32;

/// One grid cell: fixed terrain data plus per-run search state.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node {
    pos: Point,
    weight: Cost,
    wall: bool,
    pub(crate) visited: bool,
    pub(crate) distance: Option<Cost>,
    pub(crate) previous: Option<usize>,
}

impl Node {
    fn new(pos: Point) -> Self {
        Self {
            pos,
            weight: 0,
            wall: false,
            visited: false,
            distance: None,
            previous: None,
        }
    }

    #[inline]
    pub fn pos(&self) -> Point {
        self.pos
    }

    #[inline]
    pub fn row(&self) -> i32 {
        self.pos.row()
    }

    #[inline]
    pub fn col(&self) -> i32 {
        self.pos.col()
    }

    /// Extra cost paid when stepping onto this cell.
    #[inline]
    pub fn weight(&self) -> Cost {
        self.weight
    }

    #[inline]
    pub fn is_wall(&self) -> bool {
        self.wall
    }

    /// Whether the last search finalized this node.
    #[inline]
    pub fn is_visited(&self) -> bool {
        self.visited
    }

    /// Tentative cost from the start; `None` until the node is reached.
    ///
    /// A reached node whose cost saturates at `Cost::MAX` is still `Some`.
    #[inline]
    pub fn distance(&self) -> Option<Cost> {
        self.distance
    }

    /// Arena index of the node this one was last relaxed from.
    #[inline]
    pub fn previous(&self) -> Option<usize> {
        self.previous
    }

    fn clear_search_state(&mut self) {
        self.visited = false;
        self.distance = None;
        self.previous = None;
    }
}

/// A fixed-size rectangular arena of [`Node`]s, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    rng: Range,
    width: usize,
    pub(crate) nodes: Vec<Node>,
}

impl Grid {
    /// Create an open grid (no walls, zero weights) covering `rng`.
    pub fn new(rng: Range) -> Self {
        Self {
            rng,
            width: rng.width().max(0) as usize,
            nodes: rng.iter().map(Node::new).collect(),
        }
    }

    /// Create an open `width` × `height` grid anchored at the origin.
    pub fn with_size(width: i32, height: i32) -> Self {
        Self::new(Range::with_size(width, height))
    }

    #[inline]
    pub fn range(&self) -> Range {
        self.rng
    }

    /// Number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.rng.contains(p)
    }

    /// The node at `p`, or `None` if `p` is outside the grid.
    pub fn node(&self, p: Point) -> Option<&Node> {
        self.idx(p).map(|i| &self.nodes[i])
    }

    /// The node at an arena index, as stored in [`Node::previous`].
    pub fn node_at(&self, idx: usize) -> Option<&Node> {
        self.nodes.get(idx)
    }

    /// All nodes in row-major order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    /// Mark or clear a wall. Returns `false` if `p` is outside the grid.
    pub fn set_wall(&mut self, p: Point, wall: bool) -> bool {
        match self.idx(p) {
            Some(i) => {
                self.nodes[i].wall = wall;
                true
            }
            None => false,
        }
    }

    /// Set the entry weight of a cell. Returns `false` if `p` is outside the
    /// grid.
    pub fn set_weight(&mut self, p: Point, weight: Cost) -> bool {
        match self.idx(p) {
            Some(i) => {
                self.nodes[i].weight = weight;
                true
            }
            None => false,
        }
    }

    /// Clear the search state of every node, keeping walls and weights.
    pub fn reset(&mut self) {
        for n in self.nodes.iter_mut() {
            n.clear_search_state();
        }
    }

    // -----------------------------------------------------------------------
    // Coordinate helpers
    // -----------------------------------------------------------------------

    /// Convert a `Point` to a flat index. Returns `None` if out of range.
    #[inline]
    pub(crate) fn idx(&self, p: Point) -> Option<usize> {
        if !self.rng.contains(p) {
            return None;
        }
        let x = (p.x - self.rng.min.x) as usize;
        let y = (p.y - self.rng.min.y) as usize;
        Some(y * self.width + x)
    }

    /// Convert a flat index back to a `Point`.
    #[inline]
    pub(crate) fn point(&self, idx: usize) -> Point {
        let x = (idx % self.width) as i32 + self.rng.min.x;
        let y = (idx / self.width) as i32 + self.rng.min.y;
        Point::new(x, y)
    }
}
