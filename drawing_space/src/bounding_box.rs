//! Axis aligned 3D extents of entities.

use crate::core::{
    math::{min_max, Axis, Point3},
    traits::Real,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Axis aligned bounding box given by its min and max corners.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct BoundingBox<T = f64> {
    pub min: Point3<T>,
    pub max: Point3<T>,
}

impl<T> BoundingBox<T>
where
    T: Real,
{
    /// Create a box from any two opposite corners, coordinates are reordered so that `min` holds
    /// the smaller value on every axis.
    ///
    /// # Examples
    ///
    /// ```
    /// # use drawing_space::bounding_box::BoundingBox;
    /// # use drawing_space::core::math::*;
    /// let bb = BoundingBox::new(point3(2.0, 0.0, 5.0), point3(0.0, 3.0, 1.0));
    /// assert_eq!(bb.min, point3(0.0, 0.0, 1.0));
    /// assert_eq!(bb.max, point3(2.0, 3.0, 5.0));
    /// ```
    pub fn new(corner1: Point3<T>, corner2: Point3<T>) -> Self {
        let (min_x, max_x) = min_max(corner1.x, corner2.x);
        let (min_y, max_y) = min_max(corner1.y, corner2.y);
        let (min_z, max_z) = min_max(corner1.z, corner2.z);
        BoundingBox {
            min: Point3::new(min_x, min_y, min_z),
            max: Point3::new(max_x, max_y, max_z),
        }
    }

    /// Degenerate box holding a single point.
    #[inline]
    pub fn from_point(point: Point3<T>) -> Self {
        BoundingBox {
            min: point,
            max: point,
        }
    }

    /// Smallest box holding all `points`, `None` if there are no points.
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Point3<T>>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        Some(iter.fold(Self::from_point(first), |bb, p| bb.expanded_to(p)))
    }

    #[inline]
    pub fn min_point(&self) -> Point3<T> {
        self.min
    }

    #[inline]
    pub fn max_point(&self) -> Point3<T> {
        self.max
    }

    #[inline]
    pub fn center_point(&self) -> Point3<T> {
        self.min.midpoint(self.max)
    }

    /// Size of the box along `axis`.
    #[inline]
    pub fn extent(&self, axis: Axis) -> T {
        self.max.coord(axis) - self.min.coord(axis)
    }

    /// The 8 corners of the box.
    pub fn corners(&self) -> [Point3<T>; 8] {
        let (a, b) = (self.min, self.max);
        [
            Point3::new(a.x, a.y, a.z),
            Point3::new(b.x, a.y, a.z),
            Point3::new(a.x, b.y, a.z),
            Point3::new(b.x, b.y, a.z),
            Point3::new(a.x, a.y, b.z),
            Point3::new(b.x, a.y, b.z),
            Point3::new(a.x, b.y, b.z),
            Point3::new(b.x, b.y, b.z),
        ]
    }

    /// Copy of the box grown to hold `point`.
    pub fn expanded_to(&self, point: Point3<T>) -> Self {
        BoundingBox {
            min: Point3::new(
                num_traits::real::Real::min(self.min.x, point.x),
                num_traits::real::Real::min(self.min.y, point.y),
                num_traits::real::Real::min(self.min.z, point.z),
            ),
            max: Point3::new(
                num_traits::real::Real::max(self.max.x, point.x),
                num_traits::real::Real::max(self.max.y, point.y),
                num_traits::real::Real::max(self.max.z, point.z),
            ),
        }
    }

    /// Smallest box holding both `self` and `other`.
    #[inline]
    pub fn union(&self, other: &Self) -> Self {
        self.expanded_to(other.min).expanded_to(other.max)
    }

    /// Inclusive containment test using `fuzzy_epsilon`.
    pub fn contains_point_eps(&self, point: Point3<T>, fuzzy_epsilon: T) -> bool {
        Axis::ALL.iter().all(|&axis| {
            point
                .coord(axis)
                .fuzzy_in_range_eps(self.min.coord(axis), self.max.coord(axis), fuzzy_epsilon)
        })
    }

    #[inline]
    pub fn contains_point(&self, point: Point3<T>) -> bool {
        self.contains_point_eps(point, T::fuzzy_epsilon())
    }

    pub fn fuzzy_eq_eps(&self, other: &Self, fuzzy_epsilon: T) -> bool {
        self.min.fuzzy_eq_eps(other.min, fuzzy_epsilon)
            && self.max.fuzzy_eq_eps(other.max, fuzzy_epsilon)
    }

    #[inline]
    pub fn fuzzy_eq(&self, other: &Self) -> bool {
        self.fuzzy_eq_eps(other, T::fuzzy_epsilon())
    }
}

/// Anything that reports axis aligned extents, used by entity sorting.
pub trait HasExtents {
    type Num: Real;

    fn extents(&self) -> BoundingBox<Self::Num>;
}

impl<T> HasExtents for BoundingBox<T>
where
    T: Real,
{
    type Num = T;

    #[inline]
    fn extents(&self) -> BoundingBox<T> {
        *self
    }
}

/// Geometry paired with its host supplied extents.
impl<G, T> HasExtents for (G, BoundingBox<T>)
where
    T: Real,
{
    type Num = T;

    #[inline]
    fn extents(&self) -> BoundingBox<T> {
        self.1
    }
}

impl<E> HasExtents for &E
where
    E: HasExtents + ?Sized,
{
    type Num = E::Num;

    #[inline]
    fn extents(&self) -> BoundingBox<E::Num> {
        (**self).extents()
    }
}
