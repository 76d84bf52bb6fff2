use super::{AngleMode, RotationAxis, Transform};
use crate::{
    bounding_box::BoundingBox,
    core::{
        error::Result,
        math::{Matrix4, Point3, Vector3},
        traits::Real,
    },
    curve::{transform_curve, CurveInStore},
    polyline::Polyline,
    vertex_store::VertexStoreMut,
};

/// Geometry that can be mutated in place by any affine matrix.
pub trait Transformable<T>
where
    T: Real,
{
    fn transform_by(&mut self, matrix: &Matrix4<T>);
}

/// Geometry that can be mutated in place by an affine matrix but may refuse some of them.
///
/// On error the target must be left unmodified.
pub trait TryTransformable<T>
where
    T: Real,
{
    fn try_transform_by(&mut self, matrix: &Matrix4<T>) -> Result<()>;
}

macro_rules! impl_try_transformable_infallible {
    ($($ty:ty),* $(,)?) => {
        $(
            impl<T> TryTransformable<T> for $ty
            where
                T: Real,
            {
                #[inline]
                fn try_transform_by(&mut self, matrix: &Matrix4<T>) -> Result<()> {
                    self.transform_by(matrix);
                    Ok(())
                }
            }
        )*
    };
}

impl_try_transformable_infallible!(
    Point3<T>,
    Vector3<T>,
    [Point3<T>],
    Vec<Point3<T>>,
    BoundingBox<T>,
);

/// See [Polyline::try_transform_by].
impl<T> TryTransformable<T> for Polyline<T>
where
    T: Real,
{
    #[inline]
    fn try_transform_by(&mut self, matrix: &Matrix4<T>) -> Result<()> {
        Polyline::try_transform_by(self, matrix)
    }
}

/// See [transform_curve].
impl<'a, S> TryTransformable<S::Num> for CurveInStore<'a, S>
where
    S: VertexStoreMut + ?Sized,
{
    #[inline]
    fn try_transform_by(&mut self, matrix: &Matrix4<S::Num>) -> Result<()> {
        transform_curve(&mut *self.curve, matrix, &mut *self.store)
    }
}

impl<T> Transformable<T> for Point3<T>
where
    T: Real,
{
    #[inline]
    fn transform_by(&mut self, matrix: &Matrix4<T>) {
        *self = matrix.transform_point(*self);
    }
}

/// Directions only see the linear part of the matrix, translation is ignored.
impl<T> Transformable<T> for Vector3<T>
where
    T: Real,
{
    #[inline]
    fn transform_by(&mut self, matrix: &Matrix4<T>) {
        *self = matrix.transform_vector(*self);
    }
}

impl<T> Transformable<T> for [Point3<T>]
where
    T: Real,
{
    fn transform_by(&mut self, matrix: &Matrix4<T>) {
        for p in self.iter_mut() {
            p.transform_by(matrix);
        }
    }
}

impl<T> Transformable<T> for Vec<Point3<T>>
where
    T: Real,
{
    #[inline]
    fn transform_by(&mut self, matrix: &Matrix4<T>) {
        self.as_mut_slice().transform_by(matrix);
    }
}

/// The box is replaced by the axis aligned box of its 8 transformed corners, so a rotated box
/// grows to stay axis aligned.
impl<T> Transformable<T> for BoundingBox<T>
where
    T: Real,
{
    fn transform_by(&mut self, matrix: &Matrix4<T>) {
        let corners = self.corners().map(|c| matrix.transform_point(c));
        if let Some(bb) = BoundingBox::from_points(corners) {
            *self = bb;
        }
    }
}

/// Move `target` by the displacement from `from` to `to`.
#[inline]
pub fn move_entity<T, G>(target: &mut G, from: Point3<T>, to: Point3<T>) -> Result<()>
where
    T: Real,
    G: TryTransformable<T> + ?Sized,
{
    Transform::displacement(from, to).try_apply(target)
}

/// Rotate `target` by `angle` about the axis through `base_point`, see [Transform::rotation].
#[inline]
pub fn rotate_entity<T, G>(
    target: &mut G,
    base_point: Point3<T>,
    angle: T,
    axis: impl Into<RotationAxis<T>>,
    mode: AngleMode,
) -> Result<()>
where
    T: Real,
    G: TryTransformable<T> + ?Sized,
{
    Transform::rotation(base_point, angle, axis, mode)?.try_apply(target)
}

/// Uniformly scale `target` by `factor` about `base_point`.
#[inline]
pub fn scale_entity<T, G>(target: &mut G, base_point: Point3<T>, factor: T) -> Result<()>
where
    T: Real,
    G: TryTransformable<T> + ?Sized,
{
    Transform::scaling(base_point, factor).try_apply(target)
}
