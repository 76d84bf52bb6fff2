use crate::core::traits::Real;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::ops;

use super::Axis;

/// A 3D direction or displacement.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Vector3<T = f64> {
    pub x: T,
    pub y: T,
    pub z: T,
}

impl<T> Vector3<T>
where
    T: Real,
{
    /// Create a new vector with x, y, and z components.
    #[inline]
    pub fn new(x: T, y: T, z: T) -> Self {
        Vector3 { x, y, z }
    }

    /// Create a zero vector.
    #[inline]
    pub fn zero() -> Self {
        Vector3::new(T::zero(), T::zero(), T::zero())
    }

    #[inline]
    pub fn unit_x() -> Self {
        Vector3::new(T::one(), T::zero(), T::zero())
    }

    #[inline]
    pub fn unit_y() -> Self {
        Vector3::new(T::zero(), T::one(), T::zero())
    }

    #[inline]
    pub fn unit_z() -> Self {
        Vector3::new(T::zero(), T::zero(), T::one())
    }

    /// Unit vector pointing along the principal `axis`.
    #[inline]
    pub fn unit_along(axis: Axis) -> Self {
        match axis {
            Axis::X => Self::unit_x(),
            Axis::Y => Self::unit_y(),
            Axis::Z => Self::unit_z(),
        }
    }

    /// Component selected by `axis`.
    #[inline]
    pub fn coord(&self, axis: Axis) -> T {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    /// Uniformly scale the vector by `scale_factor`.
    #[inline]
    pub fn scale(&self, scale_factor: T) -> Self {
        vec3(
            scale_factor * self.x,
            scale_factor * self.y,
            scale_factor * self.z,
        )
    }

    /// Dot product.
    #[inline]
    pub fn dot(&self, other: Self) -> T {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Right handed cross product.
    #[inline]
    pub fn cross(&self, other: Self) -> Self {
        vec3(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    #[inline]
    pub fn length_squared(&self) -> T {
        self.dot(*self)
    }

    #[inline]
    pub fn length(&self) -> T {
        self.length_squared().sqrt()
    }

    /// Normalize the vector (length = 1).
    ///
    /// A zero vector yields NaN components, see [Vector3::try_normalize].
    #[inline]
    pub fn normalize(&self) -> Self {
        self.scale(T::one() / self.length())
    }

    /// Normalize the vector or return `None` if it is exactly zero.
    ///
    /// Any non zero vector normalizes, however short. Components are rescaled by the largest one
    /// first so lengths below the square root of the smallest float do not underflow.
    ///
    /// # Examples
    ///
    /// ```
    /// # use drawing_space::core::math::*;
    /// let n = vec3(0.0, 3.0, 4.0).try_normalize().unwrap();
    /// assert!(n.fuzzy_eq(vec3(0.0, 0.6, 0.8)));
    /// assert!(vec3(0.0, 0.0, 1e-200).try_normalize().unwrap().fuzzy_eq(vec3(0.0, 0.0, 1.0)));
    /// assert_eq!(Vector3::<f64>::zero().try_normalize(), None);
    /// ```
    pub fn try_normalize(&self) -> Option<Self> {
        let largest = num_traits::real::Real::max(
            num_traits::real::Real::max(self.x.abs(), self.y.abs()),
            self.z.abs(),
        );
        if largest == T::zero() {
            return None;
        }

        let rescaled = self.scale(T::one() / largest);
        Some(rescaled.scale(T::one() / rescaled.length()))
    }

    /// Returns true if every component is fuzzy zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.x.fuzzy_eq_zero() && self.y.fuzzy_eq_zero() && self.z.fuzzy_eq_zero()
    }

    /// Fuzzy equal comparison with another vector using `fuzzy_epsilon` given.
    #[inline]
    pub fn fuzzy_eq_eps(&self, other: Self, fuzzy_epsilon: T) -> bool {
        self.x.fuzzy_eq_eps(other.x, fuzzy_epsilon)
            && self.y.fuzzy_eq_eps(other.y, fuzzy_epsilon)
            && self.z.fuzzy_eq_eps(other.z, fuzzy_epsilon)
    }

    /// Fuzzy equal comparison with another vector using T::fuzzy_epsilon().
    #[inline]
    pub fn fuzzy_eq(&self, other: Self) -> bool {
        self.fuzzy_eq_eps(other, T::fuzzy_epsilon())
    }
}

#[inline(always)]
pub fn vec3<T>(x: T, y: T, z: T) -> Vector3<T>
where
    T: Real,
{
    Vector3::new(x, y, z)
}

macro_rules! ImplBinaryOp {
    ($op_trait:ident, $op_func:ident, $op:tt) => {
        impl<T: Real> ops::$op_trait<Vector3<T>> for Vector3<T> {
            type Output = Vector3<T>;
            fn $op_func(self, rhs: Vector3<T>) -> Self::Output {
                Vector3::new(self.x $op rhs.x, self.y $op rhs.y, self.z $op rhs.z)
            }
        }

        impl<T: Real> ops::$op_trait<&Vector3<T>> for Vector3<T> {
            type Output = Vector3<T>;
            fn $op_func(self, rhs: &Vector3<T>) -> Self::Output {
                Vector3::new(self.x $op rhs.x, self.y $op rhs.y, self.z $op rhs.z)
            }
        }

        impl<'a, 'b, T: Real> ops::$op_trait<&'b Vector3<T>> for &'a Vector3<T> {
            type Output = Vector3<T>;
            fn $op_func(self, rhs: &'b Vector3<T>) -> Self::Output {
                Vector3::new(self.x $op rhs.x, self.y $op rhs.y, self.z $op rhs.z)
            }
        }

        impl<T: Real> ops::$op_trait<Vector3<T>> for &Vector3<T> {
            type Output = Vector3<T>;
            fn $op_func(self, rhs: Vector3<T>) -> Self::Output {
                Vector3::new(self.x $op rhs.x, self.y $op rhs.y, self.z $op rhs.z)
            }
        }
    };
}

ImplBinaryOp!(Add, add, +);
ImplBinaryOp!(Sub, sub, -);

impl<T: Real> ops::Neg for Vector3<T> {
    type Output = Vector3<T>;
    fn neg(self) -> Self::Output {
        Vector3::new(-self.x, -self.y, -self.z)
    }
}

impl<T: Real> ops::Neg for &Vector3<T> {
    type Output = Vector3<T>;
    fn neg(self) -> Self::Output {
        Vector3::new(-self.x, -self.y, -self.z)
    }
}

impl<T: Real> ops::Mul<T> for Vector3<T> {
    type Output = Vector3<T>;
    fn mul(self, rhs: T) -> Self::Output {
        self.scale(rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! test_binary_op {
        ($v1:ident, $v2:ident, $op:tt, $expected:expr) => {
            assert!(($v1 $op $v2).fuzzy_eq($expected));
            assert!((&$v1 $op $v2).fuzzy_eq($expected));
            assert!(($v1 $op &$v2).fuzzy_eq($expected));
            assert!((&$v1 $op &$v2).fuzzy_eq($expected));
        };
    }

    #[test]
    fn ops() {
        let v1 = vec3(4.0, 5.0, 6.0);
        let v2 = vec3(1.0, 2.0, 3.0);
        test_binary_op!(v1, v2, +, vec3(5.0, 7.0, 9.0));
        test_binary_op!(v1, v2, -, vec3(3.0, 3.0, 3.0));
        assert!((-v2).fuzzy_eq(vec3(-1.0, -2.0, -3.0)));
        assert!((v2 * 2.0).fuzzy_eq(vec3(2.0, 4.0, 6.0)));
    }

    #[test]
    fn cross_follows_right_hand_rule() {
        let x = Vector3::<f64>::unit_x();
        let y = Vector3::<f64>::unit_y();
        assert!(x.cross(y).fuzzy_eq(Vector3::unit_z()));
        assert!(y.cross(x).fuzzy_eq(-Vector3::unit_z()));
    }

    #[test]
    fn try_normalize_accepts_tiny_vectors() {
        let tiny = vec3(0.0, 0.0, 1e-9).try_normalize().unwrap();
        assert!(tiny.fuzzy_eq(vec3(0.0, 0.0, 1.0)));
        let tiny = vec3(3e-12, -4e-12, 0.0).try_normalize().unwrap();
        assert!(tiny.fuzzy_eq(vec3(0.6, -0.8, 0.0)));
        assert_eq!(vec3(0.0, -0.0, 0.0).try_normalize(), None);
    }

    #[test]
    fn unit_along_axis() {
        assert_eq!(Vector3::<f64>::unit_along(Axis::X), vec3(1.0, 0.0, 0.0));
        assert_eq!(Vector3::<f64>::unit_along(Axis::Y), vec3(0.0, 1.0, 0.0));
        assert_eq!(Vector3::<f64>::unit_along(Axis::Z), vec3(0.0, 0.0, 1.0));
    }
}
