//! Ordering points and entities along a principal axis.
//!
//! Every sort here is a stable ascending sort on one scalar per item: the chosen coordinate of a
//! point, or the chosen coordinate of a reference point ([SortParameter]) of an entity's extents.
//! Items with equal scalars keep their input order. Inputs are never mutated, a new `Vec` is
//! returned.
//!
//! Coordinates are expected to be finite. A NaN scalar compares equal to everything, which keeps
//! the sort from panicking but leaves the position of that item unspecified.

use std::{cmp::Ordering, fmt, str::FromStr};

use crate::{
    bounding_box::{BoundingBox, HasExtents},
    core::{
        error::GeometryError,
        math::{Axis, Point3},
        traits::Real,
    },
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Which point of an entity's extents is used as its position when sorting.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum SortParameter {
    #[default]
    MinPoint,
    CenterPoint,
    MaxPoint,
}

impl SortParameter {
    /// Reference point of `extents` selected by this parameter.
    #[inline]
    pub fn reference_point<T>(self, extents: &BoundingBox<T>) -> Point3<T>
    where
        T: Real,
    {
        match self {
            SortParameter::MinPoint => extents.min_point(),
            SortParameter::CenterPoint => extents.center_point(),
            SortParameter::MaxPoint => extents.max_point(),
        }
    }
}

impl FromStr for SortParameter {
    type Err = GeometryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "min" | "minpoint" | "min_point" | "min-point" => Ok(SortParameter::MinPoint),
            "center" | "centerpoint" | "center_point" | "center-point" | "mid" => {
                Ok(SortParameter::CenterPoint)
            }
            "max" | "maxpoint" | "max_point" | "max-point" => Ok(SortParameter::MaxPoint),
            other => Err(GeometryError::invalid_argument(format!(
                "unknown sort parameter '{other}'"
            ))),
        }
    }
}

impl fmt::Display for SortParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SortParameter::MinPoint => "min",
            SortParameter::CenterPoint => "center",
            SortParameter::MaxPoint => "max",
        };
        f.write_str(name)
    }
}

/// Axis and reference point used to reduce an entity's extents to one sort scalar.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct SortKey {
    pub axis: Axis,
    pub parameter: SortParameter,
}

impl SortKey {
    #[inline]
    pub fn new(axis: Axis, parameter: SortParameter) -> Self {
        SortKey { axis, parameter }
    }

    /// Sort scalar of a bare point, the parameter does not apply.
    #[inline]
    pub fn point_value<T>(&self, point: &Point3<T>) -> T
    where
        T: Real,
    {
        point.coord(self.axis)
    }

    /// Sort scalar of `extents`.
    #[inline]
    pub fn extents_value<T>(&self, extents: &BoundingBox<T>) -> T
    where
        T: Real,
    {
        self.parameter.reference_point(extents).coord(self.axis)
    }
}

impl From<Axis> for SortKey {
    #[inline]
    fn from(axis: Axis) -> Self {
        SortKey::new(axis, SortParameter::MinPoint)
    }
}

/// Parses `"<axis>"` or `"<parameter>-<axis>"` (`-`, `_`, `:` or a space as separator), e.g.
/// `"x"`, `"center-y"`, `"max_z"`.
///
/// # Examples
///
/// ```
/// # use drawing_space::core::math::Axis;
/// # use drawing_space::sort::*;
/// assert_eq!("y".parse::<SortKey>(), Ok(SortKey::new(Axis::Y, SortParameter::MinPoint)));
/// let center_z = SortKey::new(Axis::Z, SortParameter::CenterPoint);
/// assert_eq!("center-z".parse::<SortKey>(), Ok(center_z));
/// assert!("diag".parse::<SortKey>().is_err());
/// ```
impl FromStr for SortKey {
    type Err = GeometryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s.rsplit_once(['-', '_', ':', ' ']) {
            None => Ok(SortKey::from(s.parse::<Axis>()?)),
            Some((param, axis)) => Ok(SortKey::new(axis.parse()?, param.parse()?)),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.parameter, self.axis)
    }
}

#[inline]
fn cmp_scalar<T>(a: &T, b: &T) -> Ordering
where
    T: Real,
{
    a.partial_cmp(b).unwrap_or(Ordering::Equal)
}

/// Stable sort of indexes `0..values.len()` by `values`.
fn stable_order<T>(values: &[T]) -> Vec<usize>
where
    T: Real,
{
    debug_assert!(
        values.iter().all(|v| v.partial_cmp(v).is_some()),
        "sort scalars must not be NaN"
    );
    let mut order: Vec<usize> = (0..values.len()).collect();
    order.sort_by(|&i, &j| cmp_scalar(&values[i], &values[j]));
    order
}

/// Return `points` ordered by their coordinate along `axis`.
///
/// # Examples
///
/// ```
/// # use drawing_space::core::math::*;
/// # use drawing_space::sort::*;
/// let points = [point3(3.0, 0.0, 0.0), point3(1.0, 0.0, 0.0), point3(2.0, 0.0, 0.0)];
/// let sorted = sort_points(&points, Axis::X);
/// assert_eq!(sorted, vec![point3(1.0, 0.0, 0.0), point3(2.0, 0.0, 0.0), point3(3.0, 0.0, 0.0)]);
/// ```
pub fn sort_points<T>(points: &[Point3<T>], axis: Axis) -> Vec<Point3<T>>
where
    T: Real,
{
    let values: Vec<T> = points.iter().map(|p| p.coord(axis)).collect();
    let sorted: Vec<Point3<T>> = stable_order(&values)
        .into_iter()
        .map(|i| points[i])
        .collect();

    tracing::debug!(count = sorted.len(), %axis, "sorted points");
    sorted
}

/// Positions of `entities` in sorted order by `key`, `entities[result[0]]` comes first.
pub fn sorted_indexes<E>(entities: &[E], key: SortKey) -> Vec<usize>
where
    E: HasExtents,
{
    let values: Vec<E::Num> = entities
        .iter()
        .map(|e| key.extents_value(&e.extents()))
        .collect();
    stable_order(&values)
}

/// Return `entities` ordered by the scalar `key` picks from their extents.
///
/// # Examples
///
/// ```
/// # use drawing_space::bounding_box::BoundingBox;
/// # use drawing_space::core::math::*;
/// # use drawing_space::sort::*;
/// let entities = [
///     ("wide", BoundingBox::new(point3(0.0, 0.0, 0.0), point3(10.0, 1.0, 0.0))),
///     ("narrow", BoundingBox::new(point3(2.0, 0.0, 0.0), point3(3.0, 1.0, 0.0))),
/// ];
/// let by_min: Vec<_> = sort_entities(&entities, SortKey::new(Axis::X, SortParameter::MinPoint))
///     .into_iter()
///     .map(|(name, _)| name)
///     .collect();
/// assert_eq!(by_min, ["wide", "narrow"]);
///
/// let by_max: Vec<_> = sort_entities(&entities, SortKey::new(Axis::X, SortParameter::MaxPoint))
///     .into_iter()
///     .map(|(name, _)| name)
///     .collect();
/// assert_eq!(by_max, ["narrow", "wide"]);
/// ```
pub fn sort_entities<E>(entities: &[E], key: SortKey) -> Vec<E>
where
    E: HasExtents + Clone,
{
    let sorted: Vec<E> = sorted_indexes(entities, key)
        .into_iter()
        .map(|i| entities[i].clone())
        .collect();

    tracing::debug!(count = sorted.len(), %key, "sorted entities");
    sorted
}

/// Same as [sort_entities] using the min point of the extents.
#[inline]
pub fn sort_entities_by_axis<E>(entities: &[E], axis: Axis) -> Vec<E>
where
    E: HasExtents + Clone,
{
    sort_entities(entities, SortKey::from(axis))
}
