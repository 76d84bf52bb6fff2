//! Displacement, rotation, and uniform scaling transforms and their application to geometry.
//!
//! A [Transform] is built from high level parameters (two points, an angle and an axis, a factor
//! and a center) and lowered to a [Matrix4] when applied to a [Transformable] target.
mod transformable;

pub use transformable::*;

use crate::core::{
    error::{GeometryError, Result},
    math::{deg_to_rad, Axis, Matrix4, Point3, Vector3},
    traits::Real,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Unit of a rotation angle supplied by the caller.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum AngleMode {
    /// Angle is in degrees and converted with `angle * PI / 180`.
    #[default]
    Degrees,
    /// Angle is already in radians.
    Radians,
}

impl AngleMode {
    /// Convert `angle` given in this unit to radians.
    #[inline]
    pub fn to_radians<T>(self, angle: T) -> T
    where
        T: Real,
    {
        match self {
            AngleMode::Degrees => deg_to_rad(angle),
            AngleMode::Radians => angle,
        }
    }
}

/// Direction of a rotation axis, either a principal axis or an arbitrary vector.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum RotationAxis<T = f64> {
    Principal(Axis),
    Custom(Vector3<T>),
}

impl<T> RotationAxis<T>
where
    T: Real,
{
    /// Unit direction of the axis, fails with `InvalidArgument` for a zero length custom vector.
    pub fn unit_vector(&self) -> Result<Vector3<T>> {
        match *self {
            RotationAxis::Principal(axis) => Ok(Vector3::unit_along(axis)),
            RotationAxis::Custom(v) => v.try_normalize().ok_or_else(|| {
                GeometryError::invalid_argument(format!(
                    "rotation axis {v:?} has zero length"
                ))
            }),
        }
    }
}

impl<T> From<Axis> for RotationAxis<T> {
    #[inline]
    fn from(axis: Axis) -> Self {
        RotationAxis::Principal(axis)
    }
}

impl<T> From<Vector3<T>> for RotationAxis<T> {
    #[inline]
    fn from(v: Vector3<T>) -> Self {
        RotationAxis::Custom(v)
    }
}

/// Affine transform built from high level parameters.
///
/// Rotation angles are always held in radians and rotation axes are always held normalized,
/// whatever unit and length the caller supplied.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(tag = "kind", rename_all = "camelCase")
)]
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Transform<T = f64> {
    /// Translation by `vector`.
    Displacement { vector: Vector3<T> },
    /// Right handed rotation by `angle` radians about the line through `base_point` along the
    /// unit vector `axis`.
    Rotation {
        angle: T,
        axis: Vector3<T>,
        base_point: Point3<T>,
    },
    /// Uniform scale by `factor` about `center`. Zero collapses to `center`, negative mirrors
    /// through it.
    Scaling { factor: T, center: Point3<T> },
}

impl<T> Default for Transform<T>
where
    T: Real,
{
    #[inline]
    fn default() -> Self {
        Self::identity()
    }
}

impl<T> Transform<T>
where
    T: Real,
{
    /// Zero displacement.
    #[inline]
    pub fn identity() -> Self {
        Transform::Displacement {
            vector: Vector3::zero(),
        }
    }

    /// Translation carrying `from` onto `to` (by `to - from`).
    ///
    /// # Examples
    ///
    /// ```
    /// # use drawing_space::core::math::*;
    /// # use drawing_space::transform::*;
    /// let t = Transform::displacement(point3(1.0, 1.0, 0.0), point3(4.0, -1.0, 2.0));
    /// assert!(t.transform_point(point3(0.0, 0.0, 0.0)).fuzzy_eq(point3(3.0, -2.0, 2.0)));
    /// ```
    #[inline]
    pub fn displacement(from: Point3<T>, to: Point3<T>) -> Self {
        Self::translation(to - from)
    }

    #[inline]
    pub fn translation(vector: Vector3<T>) -> Self {
        Transform::Displacement { vector }
    }

    /// Rotation by `angle` (interpreted according to `mode`) about the line through `base_point`
    /// in the direction of `axis`.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `axis` is a custom vector of zero length.
    ///
    /// # Examples
    ///
    /// ```
    /// # use drawing_space::core::math::*;
    /// # use drawing_space::transform::*;
    /// let t = Transform::rotation(point3(1.0, 1.0, 0.0), 90.0, Axis::Z, AngleMode::Degrees).unwrap();
    /// assert!(t.transform_point(point3(2.0, 1.0, 0.0)).fuzzy_eq(point3(1.0, 2.0, 0.0)));
    ///
    /// let degenerate = Transform::rotation(point3(0.0, 0.0, 0.0), 1.0, Vector3::<f64>::zero(), AngleMode::Radians);
    /// assert!(degenerate.is_err());
    /// ```
    pub fn rotation(
        base_point: Point3<T>,
        angle: T,
        axis: impl Into<RotationAxis<T>>,
        mode: AngleMode,
    ) -> Result<Self> {
        let axis = axis.into().unit_vector()?;
        let angle = mode.to_radians(angle);
        tracing::trace!(?base_point, ?axis, ?angle, "built rotation");
        Ok(Transform::Rotation {
            angle,
            axis,
            base_point,
        })
    }

    /// Uniform scale by `factor` about `center`.
    #[inline]
    pub fn scaling(center: Point3<T>, factor: T) -> Self {
        Transform::Scaling { factor, center }
    }

    /// Transform undoing `self`.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` for a scale factor of exactly zero (collapsed geometry cannot be
    /// restored). Any other factor, however small, inverts.
    pub fn inverse(&self) -> Result<Self> {
        match *self {
            Transform::Displacement { vector } => Ok(Transform::Displacement { vector: -vector }),
            Transform::Rotation {
                angle,
                axis,
                base_point,
            } => Ok(Transform::Rotation {
                angle: -angle,
                axis,
                base_point,
            }),
            Transform::Scaling { factor, center } => {
                if factor == T::zero() {
                    return Err(GeometryError::invalid_argument(
                        "scaling by zero has no inverse",
                    ));
                }
                Ok(Transform::Scaling {
                    factor: T::one() / factor,
                    center,
                })
            }
        }
    }

    /// Lower to a 4x4 affine matrix.
    pub fn to_matrix(&self) -> Matrix4<T> {
        match *self {
            Transform::Displacement { vector } => Matrix4::translation(vector),
            Transform::Rotation {
                angle,
                axis,
                base_point,
            } => Matrix4::rotation_about(base_point, axis, angle),
            Transform::Scaling { factor, center } => Matrix4::scaling_about(center, factor),
        }
    }

    /// Matrix applying `self` first and then `next`.
    #[inline]
    pub fn then(&self, next: &Self) -> Matrix4<T> {
        self.to_matrix().then(&next.to_matrix())
    }

    #[inline]
    pub fn transform_point(&self, point: Point3<T>) -> Point3<T> {
        self.to_matrix().transform_point(point)
    }

    /// Mutate `target` in place by this transform.
    #[inline]
    pub fn apply<G>(&self, target: &mut G)
    where
        G: Transformable<T> + ?Sized,
    {
        target.transform_by(&self.to_matrix());
    }

    /// Mutate `target` in place by this transform, for geometry that can refuse a transform
    /// (polylines that must stay planar, curves whose vertexes may not resolve).
    ///
    /// # Examples
    ///
    /// ```
    /// # use drawing_space::core::math::*;
    /// # use drawing_space::transform::*;
    /// # use drawing_space::pline_open;
    /// let mut pline = pline_open![(0.0, 0.0, 0.0), (2.0, 0.0, 1.0)];
    /// Transform::scaling(point3(0.0, 0.0, 0.0), 2.0).try_apply(&mut pline).unwrap();
    /// assert_eq!(pline[1].x, 4.0);
    ///
    /// let tilt = Transform::rotation(Point3::origin(), 90.0, Axis::X, AngleMode::Degrees).unwrap();
    /// assert!(tilt.try_apply(&mut pline).is_err());
    /// ```
    #[inline]
    pub fn try_apply<G>(&self, target: &mut G) -> Result<()>
    where
        G: TryTransformable<T> + ?Sized,
    {
        target.try_transform_by(&self.to_matrix())
    }
}
