//! Axis identifiers.

use std::fmt;

/// One of the two axes of the plane.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Axis {
    /// Horizontal axis; indexes grid columns.
    X,
    /// Vertical axis; indexes grid rows.
    Y,
}

impl Axis {
    /// Both axes in `x`, `y` order.
    pub const ALL: [Axis; 2] = [Axis::X, Axis::Y];

    /// Lowercase axis name, as used in error messages.
    pub fn name(self) -> &'static str {
        match self {
            Self::X => "x",
            Self::Y => "y",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
