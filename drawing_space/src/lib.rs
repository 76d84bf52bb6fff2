//! Geometry utilities for CAD drawing entities: displacement/rotation/scaling transforms, ordered
//! vertex extraction from inline and indexed polylines, and sorting of points and entities along
//! a principal axis.
//!
//! The host drawing database stays the system of record. Everything here works on plain values
//! handed over by the caller, with indexed vertex lookups going through the [vertex_store]
//! abstraction.
#[macro_use]
mod macros;

pub mod bounding_box;
pub mod core;
pub mod curve;
pub mod polyline;
pub mod sort;
pub mod transform;
pub mod vertex_store;

pub use crate::core::error::{GeometryError, Result};
pub use crate::core::math::{Axis, Point3, Vector3};
