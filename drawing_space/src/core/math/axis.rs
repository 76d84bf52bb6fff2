use std::{fmt, str::FromStr};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::core::error::GeometryError;

/// Principal coordinate axis.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum Axis {
    #[default]
    X,
    Y,
    Z,
}

impl Axis {
    /// All three axes in coordinate order.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Coordinate index of the axis (X = 0, Y = 1, Z = 2).
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    /// Map a numeric axis code to an axis, codes other than 0, 1, and 2 fall back to Z.
    ///
    /// Lenient counterpart of `Axis::try_from(usize)`, used when resolving rotation axes where Z is
    /// the documented default.
    ///
    /// # Examples
    ///
    /// ```
    /// # use drawing_space::core::math::Axis;
    /// assert_eq!(Axis::from_code(0), Axis::X);
    /// assert_eq!(Axis::from_code(1), Axis::Y);
    /// assert_eq!(Axis::from_code(2), Axis::Z);
    /// assert_eq!(Axis::from_code(-4), Axis::Z);
    /// ```
    pub fn from_code(code: i32) -> Self {
        match code {
            0 => Axis::X,
            1 => Axis::Y,
            2 => Axis::Z,
            other => {
                tracing::warn!(code = other, "unrecognized axis code, using Z");
                Axis::Z
            }
        }
    }
}

impl TryFrom<usize> for Axis {
    type Error = GeometryError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        match index {
            0 => Ok(Axis::X),
            1 => Ok(Axis::Y),
            2 => Ok(Axis::Z),
            _ => Err(GeometryError::invalid_argument(format!(
                "axis index {index} out of range 0..=2"
            ))),
        }
    }
}

impl FromStr for Axis {
    type Err = GeometryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "x" | "X" => Ok(Axis::X),
            "y" | "Y" => Ok(Axis::Y),
            "z" | "Z" => Ok(Axis::Z),
            other => Err(GeometryError::invalid_argument(format!(
                "unknown axis '{other}'"
            ))),
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Axis::X => "X",
            Axis::Y => "Y",
            Axis::Z => "Z",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_and_display() {
        for axis in Axis::ALL {
            assert_eq!(axis.to_string().parse::<Axis>(), Ok(axis));
            assert_eq!(Axis::try_from(axis.index()), Ok(axis));
        }
        assert_eq!(" y ".parse::<Axis>(), Ok(Axis::Y));
        assert!(matches!(
            "w".parse::<Axis>(),
            Err(GeometryError::InvalidArgument(_))
        ));
        assert!(Axis::try_from(3).is_err());
    }
}
