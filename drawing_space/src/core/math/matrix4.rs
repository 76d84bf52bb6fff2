use crate::core::traits::Real;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::ops;

use super::{Axis, Point3, Vector3};

/// Row-major 4x4 affine matrix.
///
/// Points are treated as column vectors with `w = 1` and vectors with `w = 0`, so the translation
/// lives in the last column and `a * b` applies `b` first.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Matrix4<T = f64> {
    pub rows: [[T; 4]; 4],
}

impl<T> Default for Matrix4<T>
where
    T: Real,
{
    #[inline]
    fn default() -> Self {
        Self::identity()
    }
}

impl<T> Matrix4<T>
where
    T: Real,
{
    #[inline]
    pub fn from_rows(rows: [[T; 4]; 4]) -> Self {
        Matrix4 { rows }
    }

    pub fn identity() -> Self {
        let o = T::one();
        let z = T::zero();
        Matrix4::from_rows([[o, z, z, z], [z, o, z, z], [z, z, o, z], [z, z, z, o]])
    }

    /// Translation by `offset`.
    pub fn translation(offset: Vector3<T>) -> Self {
        let mut m = Self::identity();
        m.rows[0][3] = offset.x;
        m.rows[1][3] = offset.y;
        m.rows[2][3] = offset.z;
        m
    }

    /// Uniform scale by `factor` keeping `center` fixed.
    pub fn scaling_about(center: Point3<T>, factor: T) -> Self {
        let z = T::zero();
        // p' = factor * p + (1 - factor) * center
        let k = T::one() - factor;
        Matrix4::from_rows([
            [factor, z, z, k * center.x],
            [z, factor, z, k * center.y],
            [z, z, factor, k * center.z],
            [z, z, z, T::one()],
        ])
    }

    /// Right handed rotation by `angle` radians about the line through `base_point` in direction
    /// `unit_axis`. `unit_axis` must already be normalized.
    pub fn rotation_about(base_point: Point3<T>, unit_axis: Vector3<T>, angle: T) -> Self {
        let (s, c) = angle.sin_cos();
        let t = T::one() - c;
        let Vector3 { x, y, z } = unit_axis;

        let r = [
            [t * x * x + c, t * x * y - s * z, t * x * z + s * y],
            [t * x * y + s * z, t * y * y + c, t * y * z - s * x],
            [t * x * z - s * y, t * y * z + s * x, t * z * z + c],
        ];

        // p' = R * (p - b) + b, so the translation column is b - R * b
        let b = base_point;
        let mut rows = [[T::zero(); 4]; 4];
        for i in 0..3 {
            rows[i][0] = r[i][0];
            rows[i][1] = r[i][1];
            rows[i][2] = r[i][2];
            rows[i][3] = b.coord(Axis::ALL[i]) - (r[i][0] * b.x + r[i][1] * b.y + r[i][2] * b.z);
        }
        rows[3][3] = T::one();

        Matrix4::from_rows(rows)
    }

    /// Matrix applying `self` first then `next`.
    #[inline]
    pub fn then(&self, next: &Self) -> Self {
        next * self
    }

    /// Transform a position (translation applies).
    pub fn transform_point(&self, p: Point3<T>) -> Point3<T> {
        let m = &self.rows;
        Point3::new(
            m[0][0] * p.x + m[0][1] * p.y + m[0][2] * p.z + m[0][3],
            m[1][0] * p.x + m[1][1] * p.y + m[1][2] * p.z + m[1][3],
            m[2][0] * p.x + m[2][1] * p.y + m[2][2] * p.z + m[2][3],
        )
    }

    /// Transform a direction (translation ignored).
    pub fn transform_vector(&self, v: Vector3<T>) -> Vector3<T> {
        let m = &self.rows;
        Vector3::new(
            m[0][0] * v.x + m[0][1] * v.y + m[0][2] * v.z,
            m[1][0] * v.x + m[1][1] * v.y + m[1][2] * v.z,
            m[2][0] * v.x + m[2][1] * v.y + m[2][2] * v.z,
        )
    }

    /// Translation column of the matrix.
    #[inline]
    pub fn translation_part(&self) -> Vector3<T> {
        Vector3::new(self.rows[0][3], self.rows[1][3], self.rows[2][3])
    }

    /// Determinant of the upper left 3x3 linear part. Negative for mirroring transforms, zero for
    /// collapsing ones.
    pub fn linear_determinant(&self) -> T {
        let m = &self.rows;
        m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
            - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
            + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
    }

    /// Returns true if the output Z does not depend on the input X and Y (`m[2][0]` and `m[2][1]`
    /// fuzzy zero), so every plane `z = c` maps onto a plane parallel to XY.
    #[inline]
    pub fn keeps_xy_planes(&self) -> bool {
        self.rows[2][0].fuzzy_eq_zero() && self.rows[2][1].fuzzy_eq_zero()
    }

    pub fn fuzzy_eq_eps(&self, other: &Self, fuzzy_epsilon: T) -> bool {
        self.rows
            .iter()
            .flatten()
            .zip(other.rows.iter().flatten())
            .all(|(a, b)| a.fuzzy_eq_eps(*b, fuzzy_epsilon))
    }

    #[inline]
    pub fn fuzzy_eq(&self, other: &Self) -> bool {
        self.fuzzy_eq_eps(other, T::fuzzy_epsilon())
    }

    #[inline]
    pub fn is_identity(&self) -> bool {
        self.fuzzy_eq(&Self::identity())
    }
}

impl<T: Real> ops::Mul<&Matrix4<T>> for &Matrix4<T> {
    type Output = Matrix4<T>;
    fn mul(self, rhs: &Matrix4<T>) -> Self::Output {
        let mut rows = [[T::zero(); 4]; 4];
        for (i, row) in rows.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = (0..4).fold(T::zero(), |acc, k| {
                    acc + self.rows[i][k] * rhs.rows[k][j]
                });
            }
        }
        Matrix4 { rows }
    }
}

impl<T: Real> ops::Mul<Matrix4<T>> for Matrix4<T> {
    type Output = Matrix4<T>;
    fn mul(self, rhs: Matrix4<T>) -> Self::Output {
        &self * &rhs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{
        math::{point3, vec3},
        traits::FuzzyEq,
    };
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn translation_moves_points_not_vectors() {
        let m = Matrix4::translation(vec3(1.0, -2.0, 3.0));
        assert!(m
            .transform_point(point3(1.0, 1.0, 1.0))
            .fuzzy_eq(point3(2.0, -1.0, 4.0)));
        assert!(m
            .transform_vector(vec3(1.0, 1.0, 1.0))
            .fuzzy_eq(vec3(1.0, 1.0, 1.0)));
    }

    #[test]
    fn rotation_quarter_turn_about_z() {
        let m = Matrix4::rotation_about(Point3::origin(), Vector3::unit_z(), FRAC_PI_2);
        assert!(m
            .transform_point(point3(1.0, 0.0, 5.0))
            .fuzzy_eq(point3(0.0, 1.0, 5.0)));
        assert!(m.linear_determinant().fuzzy_eq(1.0));
    }

    #[test]
    fn composition_order() {
        let t = Matrix4::translation(vec3(1.0, 0.0, 0.0));
        let s = Matrix4::scaling_about(Point3::origin(), 2.0);
        // translate then scale
        let ts = t.then(&s);
        assert!(ts
            .transform_point(point3(1.0, 0.0, 0.0))
            .fuzzy_eq(point3(4.0, 0.0, 0.0)));
        // scale then translate
        let st = s.then(&t);
        assert!(st
            .transform_point(point3(1.0, 0.0, 0.0))
            .fuzzy_eq(point3(3.0, 0.0, 0.0)));
    }

    #[test]
    fn identity_is_default() {
        let m: Matrix4 = Default::default();
        assert!(m.is_identity());
        assert!((m * Matrix4::identity()).is_identity());
    }
}
