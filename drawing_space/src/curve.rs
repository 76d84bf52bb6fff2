//! Polyline curves in their three representations and ordered vertex extraction.
//!
//! [Curve] unifies the inline polyline ([Polyline]) with the two indexed representations whose
//! vertexes are resolved through a [VertexStore]. [extract_vertices] turns any of them into the
//! same ordered list of 3D points. [transform_curve] applies a matrix to any of them in place,
//! writing indexed positions back through a [VertexStoreMut].

use crate::{
    core::{
        error::{GeometryError, Result},
        math::{Matrix4, Point3},
        traits::Real,
    },
    polyline::Polyline,
    vertex_store::{ReadGuard, StoredVertex, VertexKind, VertexRef, VertexStore, VertexStoreMut},
};
use rustc_hash::FxHashSet;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Polyline whose vertexes are held by a [VertexStore] and referenced in order.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndexedPolyline {
    /// Vertex handles in traversal order.
    pub vertex_refs: Vec<VertexRef>,
    /// Bool to indicate whether the polyline is closed or open.
    pub is_closed: bool,
}

impl IndexedPolyline {
    #[inline]
    pub fn new(vertex_refs: Vec<VertexRef>, is_closed: bool) -> Self {
        IndexedPolyline {
            vertex_refs,
            is_closed,
        }
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertex_refs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertex_refs.is_empty()
    }
}

/// A polyline curve in one of the three supported representations.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(tag = "type", content = "data", rename_all = "camelCase")
)]
#[derive(Debug, Clone)]
pub enum Curve<T = f64> {
    /// Planar polyline with its vertexes held inline.
    Inline(Polyline<T>),
    /// 2D polyline, every reference must resolve to a [VertexKind::Vertex2d].
    Indexed2d(IndexedPolyline),
    /// 3D polyline, every reference must resolve to a [VertexKind::Vertex3d].
    Indexed3d(IndexedPolyline),
}

impl<T> Curve<T>
where
    T: Real,
{
    #[inline]
    pub fn vertex_count(&self) -> usize {
        match self {
            Curve::Inline(pline) => pline.vertex_count(),
            Curve::Indexed2d(pline) | Curve::Indexed3d(pline) => pline.vertex_count(),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertex_count() == 0
    }

    #[inline]
    pub fn is_closed(&self) -> bool {
        match self {
            Curve::Inline(pline) => pline.is_closed(),
            Curve::Indexed2d(pline) | Curve::Indexed3d(pline) => pline.is_closed,
        }
    }

    /// Ordered 3D vertex positions of the curve, see [extract_vertices].
    #[inline]
    pub fn vertexes<S>(&self, store: &S) -> Result<Vec<Point3<T>>>
    where
        S: VertexStore<Num = T> + ?Sized,
    {
        extract_vertices(self, store)
    }

    /// Pair the curve with the store holding its indexed vertexes so the pair can be passed to
    /// [Transform::try_apply](crate::transform::Transform::try_apply) and the entity helpers.
    #[inline]
    pub fn in_store<'a, S>(&'a mut self, store: &'a mut S) -> CurveInStore<'a, S>
    where
        S: VertexStoreMut<Num = T> + ?Sized,
    {
        CurveInStore { curve: self, store }
    }
}

/// A [Curve] borrowed together with the store its indexed vertexes live in, see
/// [Curve::in_store].
pub struct CurveInStore<'a, S>
where
    S: VertexStore + ?Sized,
{
    pub curve: &'a mut Curve<S::Num>,
    pub store: &'a mut S,
}

impl<T> From<Polyline<T>> for Curve<T> {
    #[inline]
    fn from(pline: Polyline<T>) -> Self {
        Curve::Inline(pline)
    }
}

/// Extract the ordered 3D vertex positions of `curve`.
///
/// Inline polylines report `(x, y, elevation)` for each vertex, bulge and widths are dropped and
/// `store` is not touched. Indexed polylines resolve every reference through `store` inside a
/// single read scope that is released before returning, on success or failure.
///
/// # Errors
///
/// * [GeometryError::NotFound] if a reference is not in the store.
/// * [GeometryError::InvalidArgument] if a reference resolves to a vertex of the other indexed
///   kind (a 3D vertex in a 2D polyline or the reverse).
///
/// No partial result is returned on failure.
///
/// # Examples
///
/// ```
/// # use drawing_space::core::math::*;
/// # use drawing_space::curve::*;
/// # use drawing_space::vertex_store::*;
/// let mut store = MemoryVertexStore::new();
/// let pline3d = store.add_polyline_3d([point3(0.0, 0.0, 0.0), point3(1.0, 2.0, 3.0)], false);
/// let points = extract_vertices(&Curve::Indexed3d(pline3d), &store).unwrap();
/// assert_eq!(points, vec![point3(0.0, 0.0, 0.0), point3(1.0, 2.0, 3.0)]);
/// assert_eq!(store.active_readers(), 0);
/// ```
pub fn extract_vertices<S>(curve: &Curve<S::Num>, store: &S) -> Result<Vec<Point3<S::Num>>>
where
    S: VertexStore + ?Sized,
{
    let points = match curve {
        Curve::Inline(pline) => pline.iter_points3().collect(),
        Curve::Indexed2d(pline) => resolve_indexed(pline, VertexKind::Vertex2d, store)?,
        Curve::Indexed3d(pline) => resolve_indexed(pline, VertexKind::Vertex3d, store)?,
    };

    tracing::debug!(vertex_count = points.len(), "extracted curve vertexes");
    Ok(points)
}

fn resolve_indexed<S>(
    pline: &IndexedPolyline,
    expected_kind: VertexKind,
    store: &S,
) -> Result<Vec<Point3<S::Num>>>
where
    S: VertexStore + ?Sized,
{
    if pline.is_empty() {
        return Ok(Vec::new());
    }

    let reader = ReadGuard::open(store);
    let mut points = Vec::with_capacity(pline.vertex_count());
    for &vertex_ref in &pline.vertex_refs {
        let vertex = reader.resolve(vertex_ref)?;
        check_kind(vertex_ref, &vertex, expected_kind)?;
        points.push(vertex.position);
    }

    Ok(points)
}

fn check_kind<T>(
    vertex_ref: VertexRef,
    vertex: &StoredVertex<T>,
    expected: VertexKind,
) -> Result<()> {
    if vertex.kind != expected {
        return Err(GeometryError::invalid_argument(format!(
            "vertex {vertex_ref} is a {:?}, expected {:?}",
            vertex.kind, expected
        )));
    }
    Ok(())
}

/// Transform `curve` in place by `matrix`.
///
/// Inline polylines go through [Polyline::try_transform_by]. Indexed polylines have every
/// referenced position transformed and written back to `store`. A vertex referenced more than
/// once is transformed once. All references are resolved inside one read scope before anything
/// is written, so on failure neither the curve nor the store is modified.
///
/// # Errors
///
/// * [GeometryError::NotFound] if a reference is not in the store.
/// * [GeometryError::InvalidArgument] if a reference resolves to a vertex of the other indexed
///   kind, if `matrix` would tilt a planar curve (inline or indexed 2D) out of the XY plane, or
///   if it does not scale an inline polyline uniformly.
///
/// # Examples
///
/// ```
/// # use drawing_space::core::math::*;
/// # use drawing_space::curve::*;
/// # use drawing_space::vertex_store::*;
/// let mut store = MemoryVertexStore::new();
/// let pline = store.add_polyline_3d([point3(0.0, 0.0, 0.0), point3(1.0, 2.0, 3.0)], false);
/// let mut curve = Curve::Indexed3d(pline);
/// let shift = Matrix4::translation(vec3(1.0, 1.0, 1.0));
/// transform_curve(&mut curve, &shift, &mut store).unwrap();
/// assert_eq!(
///     curve.vertexes(&store).unwrap(),
///     vec![point3(1.0, 1.0, 1.0), point3(2.0, 3.0, 4.0)]
/// );
/// ```
pub fn transform_curve<S>(
    curve: &mut Curve<S::Num>,
    matrix: &Matrix4<S::Num>,
    store: &mut S,
) -> Result<()>
where
    S: VertexStoreMut + ?Sized,
{
    match curve {
        Curve::Inline(pline) => pline.try_transform_by(matrix),
        Curve::Indexed2d(pline) => {
            if !matrix.keeps_xy_planes() {
                return Err(GeometryError::invalid_argument(
                    "transform tilts the 2D polyline out of the XY plane",
                ));
            }
            transform_indexed(pline, VertexKind::Vertex2d, matrix, store)
        }
        Curve::Indexed3d(pline) => transform_indexed(pline, VertexKind::Vertex3d, matrix, store),
    }
}

fn transform_indexed<S>(
    pline: &IndexedPolyline,
    expected_kind: VertexKind,
    matrix: &Matrix4<S::Num>,
    store: &mut S,
) -> Result<()>
where
    S: VertexStoreMut + ?Sized,
{
    if pline.is_empty() {
        return Ok(());
    }

    let mut seen = FxHashSet::default();
    let mut updates = Vec::with_capacity(pline.vertex_count());
    {
        let reader = ReadGuard::open(&*store);
        for &vertex_ref in &pline.vertex_refs {
            if !seen.insert(vertex_ref) {
                continue;
            }
            let vertex = reader.resolve(vertex_ref)?;
            check_kind(vertex_ref, &vertex, expected_kind)?;
            updates.push((vertex_ref, matrix.transform_point(vertex.position)));
        }
    }

    for &(vertex_ref, position) in &updates {
        store.set_position(vertex_ref, position)?;
    }

    tracing::debug!(vertex_count = updates.len(), "transformed indexed curve vertexes");
    Ok(())
}
