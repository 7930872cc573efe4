//! Text maps.
//!
//! One character per cell, one line per row, all lines the same width:
//!
//! | Rune | Cell |
//! |---|---|
//! | `.` | floor, weight 0 |
//! | `#` | wall |
//! | `1`-`9` | floor with that weight |
//! | `S` | start (floor, weight 0) |
//! | `E` | end (floor, weight 0) |
//!
//! Whitespace around the whole map is trimmed; lines are taken as written.

use std::fmt;

use gridwalk_core::Point;
use gridwalk_paths::Grid;

/// A parsed map: the grid plus the endpoint markers it contained.
#[derive(Debug, Clone)]
pub struct TextMap {
    pub grid: Grid,
    pub start: Option<Point>,
    pub end: Option<Point>,
}

impl TextMap {
    /// Parse a map from its textual form.
    pub fn parse(s: &str) -> Result<Self, MapError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(MapError::Empty);
        }

        let rows: Vec<&str> = s.lines().collect();
        let width = rows[0].chars().count();
        for (y, line) in rows.iter().enumerate() {
            let found = line.chars().count();
            if found != width {
                return Err(MapError::InconsistentWidth {
                    row: y,
                    expected: width,
                    found,
                });
            }
        }

        let mut map = Self {
            grid: Grid::with_size(width as i32, rows.len() as i32),
            start: None,
            end: None,
        };

        for (y, line) in rows.iter().enumerate() {
            for (x, ch) in line.chars().enumerate() {
                let p = Point::new(x as i32, y as i32);
                match ch {
                    '.' => {}
                    '#' => {
                        map.grid.set_wall(p, true);
                    }
                    '1'..='9' => {
                        map.grid.set_weight(p, ch.to_digit(10).unwrap_or(0));
                    }
                    'S' => set_marker(&mut map.start, p, MapError::DuplicateStart)?,
                    'E' => set_marker(&mut map.end, p, MapError::DuplicateEnd)?,
                    _ => return Err(MapError::InvalidRune { ch, pos: p }),
                }
            }
        }

        Ok(map)
    }

    /// Pick the endpoints, preferring explicit overrides to map markers.
    pub fn endpoints(
        &self,
        start: Option<Point>,
        end: Option<Point>,
    ) -> Result<(Point, Point), MapError> {
        let start = start.or(self.start).ok_or(MapError::MissingStart)?;
        let end = end.or(self.end).ok_or(MapError::MissingEnd)?;
        Ok((start, end))
    }
}

fn set_marker(
    slot: &mut Option<Point>,
    p: Point,
    dup: fn(Point, Point) -> MapError,
) -> Result<(), MapError> {
    match *slot {
        Some(first) => Err(dup(first, p)),
        None => {
            *slot = Some(p);
            Ok(())
        }
    }
}

/// Errors that can occur when loading a map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapError {
    /// Nothing but whitespace.
    Empty,
    /// A row's width differs from the first row's.
    InconsistentWidth {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A character outside the map alphabet.
    InvalidRune { ch: char, pos: Point },
    DuplicateStart(Point, Point),
    DuplicateEnd(Point, Point),
    /// No `S` in the map and no start given.
    MissingStart,
    /// No `E` in the map and no end given.
    MissingEnd,
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "map is empty"),
            Self::InconsistentWidth {
                row,
                expected,
                found,
            } => write!(
                f,
                "map row {row} is {found} cells wide, expected {expected}"
            ),
            Self::InvalidRune { ch, pos } => {
                write!(f, "map contains invalid rune \u{201c}{ch}\u{201d} at {pos}")
            }
            Self::DuplicateStart(a, b) => write!(f, "map has two starts, at {a} and {b}"),
            Self::DuplicateEnd(a, b) => write!(f, "map has two ends, at {a} and {b}"),
            Self::MissingStart => write!(f, "no start: add an S to the map or pass --start"),
            Self::MissingEnd => write!(f, "no end: add an E to the map or pass --end"),
        }
    }
}

impl std::error::Error for MapError {}
