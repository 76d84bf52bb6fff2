use crate::core::{math::Point3, traits::Real};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A polyline vertex is represented by an `x`, `y`, `bulge`, and a start and end width.
///
/// `x` and `y` describe the position of the vertex in the polyline's plane, the plane's height is
/// the polyline elevation. `bulge` describes the arc sweep of the segment that starts with this
/// vertex (`tan(arc_sweep_angle / 4)`, zero for a straight segment). `start_width` and `end_width`
/// are the drawn segment widths.
///
/// Vertex extraction only reports positions, bulge and widths are carried for the host but do not
/// take part in any computation here.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct PlineVertex<T = f64> {
    /// X coordinate position for the vertex.
    pub x: T,
    /// Y coordinate position for the vertex.
    pub y: T,
    /// Bulge for the polyline segment that starts with this vertex.
    pub bulge: T,
    /// Width at the start of the segment that starts with this vertex.
    #[cfg_attr(feature = "serde", serde(default))]
    pub start_width: T,
    /// Width at the end of the segment that starts with this vertex.
    #[cfg_attr(feature = "serde", serde(default))]
    pub end_width: T,
}

impl<T> PlineVertex<T>
where
    T: Real,
{
    /// Vertex with zero widths.
    #[inline]
    pub fn new(x: T, y: T, bulge: T) -> Self {
        PlineVertex {
            x,
            y,
            bulge,
            start_width: T::zero(),
            end_width: T::zero(),
        }
    }

    #[inline]
    pub fn with_widths(x: T, y: T, bulge: T, start_width: T, end_width: T) -> Self {
        PlineVertex {
            x,
            y,
            bulge,
            start_width,
            end_width,
        }
    }

    /// Construct a vertex from a [x, y, bulge] slice.
    ///
    /// If the slice does not contain exactly 3 elements then `None` is returned.
    #[inline]
    pub fn from_slice(slice: &[T]) -> Option<Self> {
        if let [x, y, bulge] = *slice {
            Some(PlineVertex::new(x, y, bulge))
        } else {
            None
        }
    }

    /// Construct a straight segment vertex from the X and Y of `point`, Z is discarded.
    #[inline]
    pub fn from_point(point: Point3<T>) -> Self {
        PlineVertex::new(point.x, point.y, T::zero())
    }

    /// 3D position of the vertex for a polyline at `elevation`.
    #[inline]
    pub fn pos3(&self, elevation: T) -> Point3<T> {
        Point3::new(self.x, self.y, elevation)
    }

    /// Returns true if `self.bulge.fuzzy_eq_zero()` (represents the start of a line segment).
    #[inline]
    pub fn bulge_is_zero(&self) -> bool {
        self.bulge.fuzzy_eq_zero()
    }

    /// Fuzzy equal comparison of position and bulge with another vertex using `fuzzy_epsilon`.
    /// Widths are not compared.
    #[inline]
    pub fn fuzzy_eq_eps(&self, other: Self, fuzzy_epsilon: T) -> bool {
        self.x.fuzzy_eq_eps(other.x, fuzzy_epsilon)
            && self.y.fuzzy_eq_eps(other.y, fuzzy_epsilon)
            && self.bulge.fuzzy_eq_eps(other.bulge, fuzzy_epsilon)
    }

    /// Fuzzy equal comparison with another vertex using T::fuzzy_epsilon().
    #[inline]
    pub fn fuzzy_eq(&self, other: Self) -> bool {
        self.fuzzy_eq_eps(other, T::fuzzy_epsilon())
    }
}
