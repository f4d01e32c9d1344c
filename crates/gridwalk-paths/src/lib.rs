//! Breadth-first search on rectangular grids with blocked cells.
//!
//! A [`Grid`] is an immutable scenario: dimensions, a set of blocked cells and
//! a start/goal pair, validated once at construction. Queries never mutate it:
//!
//! - **Neighbors** of a cell in fixed up/down/left/right order ([`neighbors`])
//! - **Reachability** of one cell from another ([`reachable`])
//! - **Shortest path** reconstruction ([`shortest_path`])
//! - **Depth maps** of BFS layer distances from a source ([`depth_map`])
//!
//! Every query allocates its own frontier and visited map, so any number of
//! queries may run concurrently against a shared `&Grid`.
//!
//! ```
//! use gridwalk_core::Cell;
//! use gridwalk_paths::{Grid, shortest_path};
//!
//! let wall = [Cell::new(1, 0), Cell::new(1, 1)];
//! let grid = Grid::new(3, 3, Cell::new(0, 0), Cell::new(2, 0), wall).unwrap();
//! let path = shortest_path(&grid, grid.start(), grid.goal()).unwrap();
//! assert_eq!(path.len(), 7);
//! ```

mod bfs;
mod distance;
mod error;
mod grid;
mod neighbors;
mod traits;

pub use bfs::{DepthMap, depth_map, reachable, shortest_path};
pub use distance::manhattan;
pub use error::{Endpoint, GeometryError};
pub use grid::{Grid, GridLayout};
pub use neighbors::neighbors;
pub use traits::Pather;
