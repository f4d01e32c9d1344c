use gridwalk_core::Cell;

/// Minimal search interface: passability and neighbor enumeration.
pub trait Pather {
    /// Append the neighbors of `c` into `buf`, in expansion order. The caller
    /// clears `buf` before calling.
    fn neighbors(&self, c: Cell, buf: &mut Vec<Cell>);

    /// Whether `c` may be occupied at all (in bounds and not blocked).
    fn passable(&self, c: Cell) -> bool;
}
