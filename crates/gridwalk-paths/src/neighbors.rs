use gridwalk_core::Cell;

use crate::grid::Grid;
use crate::traits::Pather;

/// Legal moves from `c`: the in-bounds, unblocked cardinal neighbours in
/// up, down, left, right order. Empty when all four are discarded.
pub fn neighbors(grid: &Grid, c: Cell) -> Vec<Cell> {
    let mut buf = Vec::with_capacity(4);
    Pather::neighbors(grid, c, &mut buf);
    buf
}
