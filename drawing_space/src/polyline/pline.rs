use super::PlineVertex;
use crate::core::{
    error::{GeometryError, Result},
    math::{Matrix4, Point3, Vector3},
    traits::Real,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Planar polyline holding its vertexes inline.
///
/// All vertexes lie in the plane `z = elevation`. This is the inline representation accepted by
/// [Curve::Inline](crate::curve::Curve::Inline).
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
#[derive(Debug, Clone, Default)]
pub struct Polyline<T = f64> {
    #[cfg_attr(feature = "serde", serde(rename = "vertexes"))]
    /// Contiguous sequence of vertexes.
    pub vertex_data: Vec<PlineVertex<T>>,
    /// Bool to indicate whether the polyline is closed or open.
    pub is_closed: bool,
    /// Height of the polyline plane.
    #[cfg_attr(feature = "serde", serde(default))]
    pub elevation: T,
}

impl<T> Polyline<T>
where
    T: Real,
{
    /// Create a new empty open [Polyline] at zero elevation.
    #[inline]
    pub fn new() -> Self {
        Self::with_capacity(0, false)
    }

    /// Create a new empty closed [Polyline] at zero elevation.
    #[inline]
    pub fn new_closed() -> Self {
        Self::with_capacity(0, true)
    }

    #[inline]
    pub fn with_capacity(capacity: usize, is_closed: bool) -> Self {
        Polyline {
            vertex_data: Vec::with_capacity(capacity),
            is_closed,
            elevation: T::zero(),
        }
    }

    /// Build a polyline through `points` keeping only their X and Y, every vertex gets zero bulge
    /// and zero width. Z is discarded and the polyline sits at zero elevation, set
    /// [Polyline::elevation] afterwards to place it.
    ///
    /// # Examples
    ///
    /// ```
    /// # use drawing_space::core::math::*;
    /// # use drawing_space::polyline::*;
    /// let points = [point3(0.0, 0.0, 2.0), point3(3.0, 0.0, 9.0), point3(3.0, 4.0, 2.0)];
    /// let pline = Polyline::from_points(points, false);
    /// assert_eq!(pline.vertex_count(), 3);
    /// assert_eq!(pline.elevation, 0.0);
    /// assert_eq!(pline[1], PlineVertex::new(3.0, 0.0, 0.0));
    /// ```
    pub fn from_points<I>(points: I, is_closed: bool) -> Self
    where
        I: IntoIterator<Item = Point3<T>>,
    {
        Polyline {
            vertex_data: points.into_iter().map(PlineVertex::from_point).collect(),
            is_closed,
            elevation: T::zero(),
        }
    }

    /// Append a vertex with zero widths.
    #[inline]
    pub fn add(&mut self, x: T, y: T, bulge: T) {
        self.vertex_data.push(PlineVertex::new(x, y, bulge));
    }

    #[inline]
    pub fn add_vertex(&mut self, vertex: PlineVertex<T>) {
        self.vertex_data.push(vertex);
    }

    /// Insert `vertex` at `index`, shifting later vertexes.
    ///
    /// # Panics
    ///
    /// Panics if `index > self.vertex_count()`.
    #[inline]
    pub fn insert_vertex(&mut self, index: usize, vertex: PlineVertex<T>) {
        self.vertex_data.insert(index, vertex);
    }

    #[inline]
    pub fn remove(&mut self, index: usize) -> PlineVertex<T> {
        self.vertex_data.remove(index)
    }

    #[inline]
    pub fn clear(&mut self) {
        self.vertex_data.clear();
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertex_data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertex_data.is_empty()
    }

    #[inline]
    pub fn is_closed(&self) -> bool {
        self.is_closed
    }

    #[inline]
    pub fn set_is_closed(&mut self, is_closed: bool) {
        self.is_closed = is_closed;
    }

    /// Get the vertex at `index`, `None` if out of bounds.
    #[inline]
    pub fn get(&self, index: usize) -> Option<PlineVertex<T>> {
        self.vertex_data.get(index).copied()
    }

    /// Same as [Polyline::get] but panics if `index` is out of bounds.
    #[inline]
    pub fn at(&self, index: usize) -> PlineVertex<T> {
        self[index]
    }

    /// 3D position of the vertex at `index`, `None` if out of bounds.
    #[inline]
    pub fn point3_at(&self, index: usize) -> Option<Point3<T>> {
        self.get(index).map(|v| v.pos3(self.elevation))
    }

    #[inline]
    pub fn iter_vertexes(
        &self,
    ) -> impl DoubleEndedIterator<Item = PlineVertex<T>> + ExactSizeIterator + '_ {
        self.vertex_data.iter().copied()
    }

    /// Iterate over the 3D vertex positions in order.
    #[inline]
    pub fn iter_points3(
        &self,
    ) -> impl DoubleEndedIterator<Item = Point3<T>> + ExactSizeIterator + '_ {
        let elevation = self.elevation;
        self.vertex_data.iter().map(move |v| v.pos3(elevation))
    }

    /// Transform the polyline in place by `matrix`.
    ///
    /// The polyline plane must stay parallel to XY, so the transform may move, scale, or rotate
    /// about an axis parallel to Z, or flip the plane over (half turn about a horizontal axis).
    /// When the in plane mapping is a reflection the bulges change sign. Widths scale with the
    /// in plane scale factor.
    ///
    /// Fails with `InvalidArgument` (leaving the polyline untouched) if the transform would tilt
    /// the plane (output Z depends on input X or Y) or does not map it by a similarity.
    pub fn try_transform_by(&mut self, matrix: &Matrix4<T>) -> Result<()> {
        if !matrix.keeps_xy_planes() {
            return Err(GeometryError::invalid_argument(
                "transform tilts the polyline plane out of XY",
            ));
        }

        // in plane part of the images of the X and Y directions
        let ex = matrix.transform_vector(Vector3::unit_x());
        let ey = matrix.transform_vector(Vector3::unit_y());
        let ex = Vector3::new(ex.x, ex.y, T::zero());
        let ey = Vector3::new(ey.x, ey.y, T::zero());
        // must be a similarity: orthogonal columns of equal length, compared relative to the
        // larger column so tiny scale factors are still checked
        let det2 = ex.x * ey.y - ex.y * ey.x;
        let lx = ex.length_squared();
        let ly = ey.length_squared();
        let largest = num_traits::real::Real::max(lx, ly);
        if largest > T::zero()
            && (!(ex.dot(ey) / largest).fuzzy_eq_zero() || !(lx / largest).fuzzy_eq(ly / largest))
        {
            return Err(GeometryError::invalid_argument(
                "transform does not scale the polyline plane uniformly",
            ));
        }

        let width_scale = det2.abs().sqrt();
        let mirrored = det2 < T::zero();
        let elevation = self.elevation;
        let new_elevation = matrix
            .transform_point(Point3::new(T::zero(), T::zero(), elevation))
            .z;

        for v in self.vertex_data.iter_mut() {
            let p = matrix.transform_point(v.pos3(elevation));
            v.x = p.x;
            v.y = p.y;
            v.start_width = v.start_width * width_scale;
            v.end_width = v.end_width * width_scale;
            if mirrored {
                v.bulge = -v.bulge;
            }
        }
        self.elevation = new_elevation;

        Ok(())
    }

    /// Fuzzy compare vertexes, closed state, and elevation with another polyline.
    pub fn fuzzy_eq_eps(&self, other: &Self, eps: T) -> bool {
        self.is_closed == other.is_closed
            && self.elevation.fuzzy_eq_eps(other.elevation, eps)
            && self.vertex_count() == other.vertex_count()
            && self
                .iter_vertexes()
                .zip(other.iter_vertexes())
                .all(|(v1, v2)| v1.fuzzy_eq_eps(v2, eps))
    }

    #[inline]
    pub fn fuzzy_eq(&self, other: &Self) -> bool {
        self.fuzzy_eq_eps(other, T::fuzzy_epsilon())
    }
}

impl<T> Index<usize> for Polyline<T> {
    type Output = PlineVertex<T>;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.vertex_data[index]
    }
}

impl<T> IndexMut<usize> for Polyline<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.vertex_data[index]
    }
}
