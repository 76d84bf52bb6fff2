use super::Point3;
use crate::core::traits::Real;

/// Convert an angle in degrees to radians (`angle * PI / 180`).
///
/// # Examples
///
/// ```
/// # use drawing_space::core::math::*;
/// # use drawing_space::core::traits::*;
/// use std::f64::consts::PI;
/// assert!(deg_to_rad(180.0).fuzzy_eq(PI));
/// assert!(deg_to_rad(-90.0).fuzzy_eq(-PI / 2.0));
/// ```
#[inline]
pub fn deg_to_rad<T>(angle: T) -> T
where
    T: Real,
{
    angle * T::pi() / T::half_turn_degrees()
}

/// Convert an angle in radians to degrees (`angle * 180 / PI`).
///
/// # Examples
///
/// ```
/// # use drawing_space::core::math::*;
/// # use drawing_space::core::traits::*;
/// use std::f64::consts::PI;
/// assert!(rad_to_deg(PI / 4.0).fuzzy_eq(45.0));
/// ```
#[inline]
pub fn rad_to_deg<T>(angle: T) -> T
where
    T: Real,
{
    angle * T::half_turn_degrees() / T::pi()
}

/// Point halfway between `p1` and `p2`, see [Point3::midpoint].
#[inline]
pub fn midpoint<T>(p1: Point3<T>, p2: Point3<T>) -> Point3<T>
where
    T: Real,
{
    p1.midpoint(p2)
}

/// Returns the (min, max) values from `v1` and `v2`.
///
/// # Examples
///
/// ```
/// # use drawing_space::core::math::*;
/// assert_eq!(min_max(8.0, -4.0), (-4.0, 8.0));
/// ```
#[inline]
pub fn min_max<T>(v1: T, v2: T) -> (T, T)
where
    T: PartialOrd,
{
    if v1 < v2 {
        (v1, v2)
    } else {
        (v2, v1)
    }
}
