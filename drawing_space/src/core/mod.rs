//! Core module has the shared numeric traits, math types, and error type.
pub mod error;
pub mod math;
pub mod traits;
