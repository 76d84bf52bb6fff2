use crate::core::traits::Real;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::ops;

use super::{Axis, Vector3};

/// A 3D position.
///
/// Positions and displacements are kept as distinct types: subtracting two points yields a
/// [Vector3], and a point can only be offset by a vector.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Point3<T = f64> {
    pub x: T,
    pub y: T,
    pub z: T,
}

impl<T> Point3<T>
where
    T: Real,
{
    #[inline]
    pub fn new(x: T, y: T, z: T) -> Self {
        Point3 { x, y, z }
    }

    /// The origin (0, 0, 0).
    #[inline]
    pub fn origin() -> Self {
        Point3::new(T::zero(), T::zero(), T::zero())
    }

    /// Construct a point from a `[x, y, z]` slice, `None` if the slice length is not 3.
    #[inline]
    pub fn from_slice(slice: &[T]) -> Option<Self> {
        if let [x, y, z] = *slice {
            Some(Point3::new(x, y, z))
        } else {
            None
        }
    }

    /// Coordinate selected by `axis`.
    #[inline]
    pub fn coord(&self, axis: Axis) -> T {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    /// Position vector from the origin to this point.
    #[inline]
    pub fn to_vector(&self) -> Vector3<T> {
        Vector3::new(self.x, self.y, self.z)
    }

    /// Point halfway between `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use drawing_space::core::math::*;
    /// let mid = point3(0.0, 2.0, -4.0).midpoint(point3(2.0, 4.0, 4.0));
    /// assert_eq!(mid, point3(1.0, 3.0, 0.0));
    /// ```
    #[inline]
    pub fn midpoint(&self, other: Self) -> Self {
        Point3::new(
            (self.x + other.x) / T::two(),
            (self.y + other.y) / T::two(),
            (self.z + other.z) / T::two(),
        )
    }

    #[inline]
    pub fn distance_squared(&self, other: Self) -> T {
        (other - *self).length_squared()
    }

    #[inline]
    pub fn distance(&self, other: Self) -> T {
        (other - *self).length()
    }

    /// Fuzzy equal comparison with another point using `fuzzy_epsilon` given.
    #[inline]
    pub fn fuzzy_eq_eps(&self, other: Self, fuzzy_epsilon: T) -> bool {
        self.x.fuzzy_eq_eps(other.x, fuzzy_epsilon)
            && self.y.fuzzy_eq_eps(other.y, fuzzy_epsilon)
            && self.z.fuzzy_eq_eps(other.z, fuzzy_epsilon)
    }

    /// Fuzzy equal comparison with another point using T::fuzzy_epsilon().
    #[inline]
    pub fn fuzzy_eq(&self, other: Self) -> bool {
        self.fuzzy_eq_eps(other, T::fuzzy_epsilon())
    }
}

#[inline(always)]
pub fn point3<T>(x: T, y: T, z: T) -> Point3<T>
where
    T: Real,
{
    Point3::new(x, y, z)
}

impl<T: Real> ops::Sub<Point3<T>> for Point3<T> {
    type Output = Vector3<T>;
    fn sub(self, rhs: Point3<T>) -> Self::Output {
        Vector3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl<T: Real> ops::Sub<&Point3<T>> for &Point3<T> {
    type Output = Vector3<T>;
    fn sub(self, rhs: &Point3<T>) -> Self::Output {
        Vector3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

macro_rules! ImplOffsetOp {
    ($op_trait:ident, $op_func:ident, $op:tt) => {
        impl<T: Real> ops::$op_trait<Vector3<T>> for Point3<T> {
            type Output = Point3<T>;
            fn $op_func(self, rhs: Vector3<T>) -> Self::Output {
                Point3::new(self.x $op rhs.x, self.y $op rhs.y, self.z $op rhs.z)
            }
        }

        impl<T: Real> ops::$op_trait<&Vector3<T>> for &Point3<T> {
            type Output = Point3<T>;
            fn $op_func(self, rhs: &Vector3<T>) -> Self::Output {
                Point3::new(self.x $op rhs.x, self.y $op rhs.y, self.z $op rhs.z)
            }
        }
    };
}

ImplOffsetOp!(Add, add, +);
ImplOffsetOp!(Sub, sub, -);
