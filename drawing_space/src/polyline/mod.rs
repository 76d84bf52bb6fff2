//! Inline vertex polylines: planar polylines that carry their vertexes directly, as opposed to the
//! indexed polylines in [crate::curve] whose vertexes live in a [crate::vertex_store::VertexStore].
mod pline;
mod pline_vertex;

pub use pline::*;
pub use pline_vertex::*;
