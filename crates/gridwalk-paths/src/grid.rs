//! The immutable search scenario.
//!
//! [`Grid`] is validated once, in [`Grid::new`], and offers no way to change
//! its blocked set or endpoints afterwards. A different scenario means a new
//! `Grid`.

use std::collections::HashSet;
use std::fmt;

use gridwalk_core::{Cell, DIRECTIONS, Range};

use crate::error::{Endpoint, GeometryError};
use crate::traits::Pather;

/// A `width × height` grid with blocked cells and a start/goal pair.
///
/// Invariants, established by [`Grid::new`]: both dimensions are positive,
/// both endpoints lie inside the grid, and neither endpoint is blocked.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "GridLayout", into = "GridLayout")
)]
pub struct Grid {
    bounds: Range,
    start: Cell,
    goal: Cell,
    blocked: HashSet<Cell>,
}

/// Unvalidated description of a [`Grid`], as read from a scenario file or
/// assembled from command-line input.
///
/// Convert with `Grid::try_from(layout)`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridLayout {
    pub width: i32,
    pub height: i32,
    pub start: Cell,
    pub goal: Cell,
    #[cfg_attr(feature = "serde", serde(default))]
    pub blocked: Vec<Cell>,
}

impl Grid {
    /// Build a grid, failing with a [`GeometryError`] if the dimensions are
    /// not positive or either endpoint is out of bounds or blocked.
    ///
    /// Blocked cells outside the grid are accepted; they never affect a query.
    /// Duplicates are collapsed.
    pub fn new(
        width: i32,
        height: i32,
        start: Cell,
        goal: Cell,
        blocked: impl IntoIterator<Item = Cell>,
    ) -> Result<Self, GeometryError> {
        let blocked: HashSet<Cell> = blocked.into_iter().collect();
        Self::validate(width, height, start, goal, &blocked)
            .inspect_err(|e| log::debug!("rejected grid: {e}"))?;
        Ok(Self {
            bounds: Range::new(0, 0, width, height),
            start,
            goal,
            blocked,
        })
    }

    fn validate(
        width: i32,
        height: i32,
        start: Cell,
        goal: Cell,
        blocked: &HashSet<Cell>,
    ) -> Result<(), GeometryError> {
        if width <= 0 || height <= 0 {
            return Err(GeometryError::InvalidDimensions { width, height });
        }
        let bounds = Range::new(0, 0, width, height);
        for (endpoint, cell) in [(Endpoint::Start, start), (Endpoint::Goal, goal)] {
            if !bounds.contains(cell) {
                return Err(GeometryError::OutOfBounds {
                    endpoint,
                    cell,
                    width,
                    height,
                });
            }
        }
        for (endpoint, cell) in [(Endpoint::Start, start), (Endpoint::Goal, goal)] {
            if blocked.contains(&cell) {
                return Err(GeometryError::BlockedEndpoint { endpoint, cell });
            }
        }
        Ok(())
    }

    /// Number of columns.
    #[inline]
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    /// Number of rows.
    #[inline]
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// The grid rectangle `[0, width) × [0, height)`.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    #[inline]
    pub fn start(&self) -> Cell {
        self.start
    }

    #[inline]
    pub fn goal(&self) -> Cell {
        self.goal
    }

    /// Iterate over the blocked cells, in no particular order.
    pub fn blocked(&self) -> impl Iterator<Item = Cell> + '_ {
        self.blocked.iter().copied()
    }

    #[inline]
    pub fn contains(&self, c: Cell) -> bool {
        self.bounds.contains(c)
    }

    #[inline]
    pub fn is_blocked(&self, c: Cell) -> bool {
        self.blocked.contains(&c)
    }

    /// Whether the grid's own goal can be reached from its own start.
    pub fn is_goal_reachable(&self) -> bool {
        crate::bfs::reachable(self, self.start, self.goal)
    }

    /// A shortest path from the grid's start to its goal, if one exists.
    pub fn shortest_path(&self) -> Option<Vec<Cell>> {
        crate::bfs::shortest_path(self, self.start, self.goal)
    }

    /// Debug rendering: one line per row, cells separated by a space.
    ///
    /// `S` marks the start, `G` the goal, `#` a blocked cell and `.` anything
    /// else. When start and goal coincide the cell shows `S`.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.bounds.len() * 2);
        for c in self.bounds.iter() {
            out.push(if c == self.start {
                'S'
            } else if c == self.goal {
                'G'
            } else if self.is_blocked(c) {
                '#'
            } else {
                '.'
            });
            if c.x + 1 < self.bounds.max.x {
                out.push(' ');
            } else if c.y + 1 < self.bounds.max.y {
                out.push('\n');
            }
        }
        out
    }

    /// The unvalidated description this grid was built from, with blocked
    /// cells sorted row-major.
    pub fn layout(&self) -> GridLayout {
        let mut blocked: Vec<Cell> = self.blocked().collect();
        blocked.sort();
        GridLayout {
            width: self.width(),
            height: self.height(),
            start: self.start,
            goal: self.goal,
            blocked,
        }
    }
}

impl Pather for Grid {
    fn neighbors(&self, c: Cell, buf: &mut Vec<Cell>) {
        for d in DIRECTIONS {
            let Some(n) = c.checked_offset(d) else {
                continue;
            };
            if !self.bounds.contains(n) {
                continue;
            }
            if self.blocked.contains(&n) {
                continue;
            }
            buf.push(n);
        }
    }

    #[inline]
    fn passable(&self, c: Cell) -> bool {
        self.bounds.contains(c) && !self.blocked.contains(&c)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl TryFrom<GridLayout> for Grid {
    type Error = GeometryError;

    fn try_from(l: GridLayout) -> Result<Self, Self::Error> {
        Grid::new(l.width, l.height, l.start, l.goal, l.blocked)
    }
}

impl From<Grid> for GridLayout {
    fn from(g: Grid) -> Self {
        g.layout()
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn grid_round_trip() {
        let g = Grid::new(3, 3, Cell::new(0, 0), Cell::new(2, 0), [Cell::new(1, 0)]).unwrap();
        let json = serde_json::to_string(&g).unwrap();
        let back: Grid = serde_json::from_str(&json).unwrap();
        assert_eq!(back, g);
    }

    #[test]
    fn deserialize_validates() {
        let json = r#"{"width":3,"height":3,"start":{"x":5,"y":5},"goal":{"x":0,"y":0}}"#;
        let err = serde_json::from_str::<Grid>(json).unwrap_err();
        assert!(err.to_string().contains("out of bounds"));
    }

    #[test]
    fn blocked_defaults_to_empty() {
        let json = r#"{"width":2,"height":1,"start":{"x":0,"y":0},"goal":{"x":1,"y":0}}"#;
        let g: Grid = serde_json::from_str(json).unwrap();
        assert_eq!(g.blocked().count(), 0);
    }
}
