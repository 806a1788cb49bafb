//! The two competing disc colors.

use std::fmt;
use std::ops::Not;

/// A player color: Dark moves first, Light second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Side {
    Dark = 0,
    Light = 1,
}

impl Side {
    /// Both sides, Dark first.
    pub const ALL: [Side; 2] = [Side::Dark, Side::Light];

    /// Return the other side.
    #[inline]
    pub const fn opponent(self) -> Side {
        match self {
            Side::Dark => Side::Light,
            Side::Light => Side::Dark,
        }
    }

    /// Parse a side name (`dark`/`light`, or the disc letters `x`/`o`/`b`/`w`).
    pub fn from_name(s: &str) -> Option<Side> {
        match s.to_ascii_lowercase().as_str() {
            "dark" | "black" | "x" | "b" => Some(Side::Dark),
            "light" | "white" | "o" | "w" => Some(Side::Light),
            _ => None,
        }
    }
}

impl Not for Side {
    type Output = Side;

    #[inline]
    fn not(self) -> Side {
        self.opponent()
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Dark => write!(f, "dark"),
            Side::Light => write!(f, "light"),
        }
    }
}
