//! Breadth-first reachability, shortest-path and depth-map queries.
//!
//! All three share one traversal: a FIFO frontier seeded with the source, and
//! neighbors enqueued in the order the [`Pather`] yields them. With the fixed
//! up/down/left/right order of [`Grid`](crate::Grid) this makes every result
//! deterministic, including which of several equally short paths is returned.
//!
//! Frontier and visited state live only for the duration of one call.

use std::collections::{HashMap, HashSet, VecDeque};

use gridwalk_core::Cell;

use crate::traits::Pather;

/// BFS layer depth (number of steps) of every cell reached from a source.
pub type DepthMap = HashMap<Cell, usize>;

/// Whether `goal` can be reached from `start`.
///
/// Stops as soon as `goal` is dequeued, so `start == goal` is always
/// reachable. Endpoints are not checked against the pather: the search only
/// ever moves onto cells that [`Pather::neighbors`] yields.
pub fn reachable<P: Pather>(pather: &P, start: Cell, goal: Cell) -> bool {
    let mut frontier = VecDeque::from([start]);
    let mut visited = HashSet::from([start]);
    let mut nbuf = Vec::with_capacity(4);

    while let Some(current) = frontier.pop_front() {
        if current == goal {
            log::trace!("{goal} reachable from {start}");
            return true;
        }

        nbuf.clear();
        pather.neighbors(current, &mut nbuf);

        for &n in nbuf.iter() {
            if visited.insert(n) {
                frontier.push_back(n);
            }
        }
    }

    log::trace!("{goal} unreachable from {start} ({} cells visited)", visited.len());
    false
}

/// Compute a shortest path from `start` to `goal`.
///
/// Returns the full path (including both endpoints) or `None` if no path
/// exists. `start == goal` yields `[start]`.
pub fn shortest_path<P: Pather>(pather: &P, start: Cell, goal: Cell) -> Option<Vec<Cell>> {
    // Doubles as the visited set: a cell is visited iff it has an entry.
    // `None` marks the start, which has no parent.
    let mut parents: HashMap<Cell, Option<Cell>> = HashMap::from([(start, None)]);
    let mut frontier = VecDeque::from([start]);
    let mut nbuf = Vec::with_capacity(4);

    let found = 'search: loop {
        let Some(current) = frontier.pop_front() else {
            break 'search false;
        };

        if current == goal {
            break 'search true;
        }

        nbuf.clear();
        pather.neighbors(current, &mut nbuf);

        for &n in nbuf.iter() {
            if parents.contains_key(&n) {
                continue;
            }
            parents.insert(n, Some(current));
            frontier.push_back(n);
        }
    };

    if !found {
        log::trace!("no path from {start} to {goal}");
        return None;
    }

    // Reconstruct path.
    let mut path = Vec::new();
    let mut cur = Some(goal);
    while let Some(c) = cur {
        path.push(c);
        cur = parents.get(&c).copied().flatten();
    }
    path.reverse();
    log::trace!("path from {start} to {goal}: {} steps", path.len() - 1);
    Some(path)
}

/// Run a full breadth-first search from `source` and record the depth of
/// every reached cell.
///
/// The map is empty if `source` is not passable.
pub fn depth_map<P: Pather>(pather: &P, source: Cell) -> DepthMap {
    let mut depths = DepthMap::new();
    if !pather.passable(source) {
        return depths;
    }

    depths.insert(source, 0);
    let mut frontier = VecDeque::from([source]);
    let mut nbuf = Vec::with_capacity(4);

    while let Some(current) = frontier.pop_front() {
        let d = depths[&current];

        nbuf.clear();
        pather.neighbors(current, &mut nbuf);

        for &n in nbuf.iter() {
            if depths.contains_key(&n) {
                continue;
            }
            depths.insert(n, d + 1);
            frontier.push_back(n);
        }
    }

    depths
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::Grid;
    use crate::distance::manhattan;
    use gridwalk_core::DIRECTIONS;
    use proptest::prelude::*;

    /// Random grids up to 6×6 with ~30% blocked cells and unblocked endpoints.
    fn arb_grid() -> impl Strategy<Value = Grid> {
        (1i32..=6, 1i32..=6)
            .prop_flat_map(|(w, h)| {
                let n = (w * h) as usize;
                (
                    Just(w),
                    Just(h),
                    prop::collection::vec(prop::bool::weighted(0.3), n),
                    0..n,
                    0..n,
                )
            })
            .prop_map(|(w, h, walls, s, g)| {
                let cell = |i: usize| Cell::new(i as i32 % w, i as i32 / w);
                let blocked = walls
                    .iter()
                    .enumerate()
                    .filter(|&(i, &b)| b && i != s && i != g)
                    .map(|(i, _)| cell(i))
                    .collect::<Vec<_>>();
                Grid::new(w, h, cell(s), cell(g), blocked).unwrap()
            })
    }

    /// Shortest distances by repeated edge relaxation, independent of BFS.
    fn relaxed_distances(g: &Grid, source: Cell) -> HashMap<Cell, usize> {
        let mut dist = HashMap::from([(source, 0usize)]);
        loop {
            let mut changed = false;
            for cell in g.bounds().iter().filter(|&c| g.passable(c)) {
                let Some(&d) = dist.get(&cell) else {
                    continue;
                };
                for dir in DIRECTIONS {
                    let n = Cell::new(cell.x + dir.x, cell.y + dir.y);
                    if !g.passable(n) {
                        continue;
                    }
                    if dist.get(&n).is_none_or(|&old| d + 1 < old) {
                        dist.insert(n, d + 1);
                        changed = true;
                    }
                }
            }
            if !changed {
                return dist;
            }
        }
    }

    proptest! {
        #[test]
        fn reachable_agrees_with_path(g in arb_grid()) {
            let cells: Vec<Cell> = g.bounds().iter().filter(|&c| g.passable(c)).collect();
            for &s in &cells {
                for &t in &cells {
                    prop_assert_eq!(reachable(&g, s, t), shortest_path(&g, s, t).is_some());
                }
            }
        }

        #[test]
        fn paths_are_valid_and_optimal(g in arb_grid()) {
            let cells: Vec<Cell> = g.bounds().iter().filter(|&c| g.passable(c)).collect();
            for &s in &cells {
                let dist = relaxed_distances(&g, s);
                prop_assert_eq!(&depth_map(&g, s), &dist);
                for &t in &cells {
                    match shortest_path(&g, s, t) {
                        Some(p) => {
                            prop_assert_eq!(p[0], s);
                            prop_assert_eq!(p[p.len() - 1], t);
                            prop_assert!(p.iter().all(|&c| !g.is_blocked(c) && g.contains(c)));
                            for w in p.windows(2) {
                                prop_assert_eq!(manhattan(w[0], w[1]), 1);
                            }
                            prop_assert_eq!(Some(&(p.len() - 1)), dist.get(&t));
                        }
                        None => {
                            prop_assert!(!dist.contains_key(&t));
                        }
                    }
                }
            }
        }

        #[test]
        fn paths_are_deterministic(g in arb_grid()) {
            prop_assert_eq!(g.shortest_path(), g.shortest_path());
            prop_assert_eq!(g.is_goal_reachable(), g.shortest_path().is_some());
        }
    }
}
