//! **gridwalk-core** — coordinate types shared across the *gridwalk* crates.
//!
//! This crate provides the geometry primitives used by the search engine in
//! `gridwalk-paths`: the [`Cell`] coordinate value type, the half-open
//! rectangle [`Range`], and the fixed cardinal [`DIRECTIONS`].

pub mod geom;

pub use geom::{Cell, DIRECTIONS, ParseCellError, Range, RangeIter};
