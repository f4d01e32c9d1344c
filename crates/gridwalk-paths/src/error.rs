use std::fmt;

use gridwalk_core::Cell;

/// Which of the two grid endpoints an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Start,
    Goal,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => f.write_str("start"),
            Self::Goal => f.write_str("goal"),
        }
    }
}

/// Errors that can occur when constructing a [`Grid`](crate::Grid).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeometryError {
    /// Width or height is not positive.
    InvalidDimensions { width: i32, height: i32 },
    /// An endpoint lies outside `[0, width) × [0, height)`.
    OutOfBounds {
        endpoint: Endpoint,
        cell: Cell,
        width: i32,
        height: i32,
    },
    /// An endpoint coincides with a blocked cell.
    BlockedEndpoint { endpoint: Endpoint, cell: Cell },
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { width, height } => {
                write!(f, "grid dimensions must be positive, got {width}x{height}")
            }
            Self::OutOfBounds {
                endpoint,
                cell,
                width,
                height,
            } => write!(
                f,
                "{endpoint} {cell} is out of bounds for a {width}x{height} grid"
            ),
            Self::BlockedEndpoint { endpoint, cell } => {
                write!(f, "{endpoint} {cell} cannot be on a blocked cell")
            }
        }
    }
}

impl std::error::Error for GeometryError {}
