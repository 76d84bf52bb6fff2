//! Core/common math types and functions for working with 3D points, vectors, affine matrixes, and
//! angles.
mod axis;
mod base_math;
mod matrix4;
mod point3;
mod vector3;

pub use axis::Axis;
pub use base_math::*;
pub use matrix4::Matrix4;
pub use point3::{point3, Point3};
pub use vector3::{vec3, Vector3};
