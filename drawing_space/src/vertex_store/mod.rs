//! Backing store for indexed polyline vertexes.
//!
//! Indexed polylines do not hold their vertex positions, they hold [VertexRef] handles that must
//! be resolved against a [VertexStore]. Lookups happen inside a read scope represented by a
//! [ReadGuard], the scope is closed when the guard drops so it is released on every exit path.
mod memory;

pub use memory::MemoryVertexStore;

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::core::{error::Result, math::Point3, traits::Real};

/// Opaque handle to a vertex held by a [VertexStore].
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexRef(pub u64);

impl fmt::Display for VertexRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:X}", self.0)
    }
}

/// Which indexed polyline flavor a stored vertex belongs to.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum VertexKind {
    /// Vertex of a 2D polyline, its position is planar but still reported in 3D.
    Vertex2d,
    /// Vertex of a 3D polyline.
    Vertex3d,
}

/// Vertex record returned by [VertexStore::resolve].
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct StoredVertex<T = f64> {
    pub kind: VertexKind,
    pub position: Point3<T>,
}

impl<T> StoredVertex<T>
where
    T: Real,
{
    #[inline]
    pub fn new(kind: VertexKind, position: Point3<T>) -> Self {
        StoredVertex { kind, position }
    }
}

/// Read access to vertex records by reference.
///
/// Implementors track read scopes through [VertexStore::acquire_read] and
/// [VertexStore::release_read]. Callers should not invoke those directly but open a
/// [ReadGuard] which pairs them. The trait is object safe, so extraction also works through
/// `&dyn VertexStore<Num = f64>`.
pub trait VertexStore {
    /// Numeric type of the stored positions.
    type Num: Real;

    /// Open a read scope.
    fn acquire_read(&self);

    /// Close a read scope opened by [VertexStore::acquire_read].
    fn release_read(&self);

    /// Look up a vertex, fails with [GeometryError::NotFound](crate::core::error::GeometryError)
    /// if `vertex_ref` is not in the store.
    fn resolve(&self, vertex_ref: VertexRef) -> Result<StoredVertex<Self::Num>>;
}

/// Write access to vertex positions, needed to transform indexed polylines in place.
pub trait VertexStoreMut: VertexStore {
    /// Overwrite the position of an existing vertex, its kind is kept. Fails with
    /// [GeometryError::NotFound](crate::core::error::GeometryError) if `vertex_ref` is not in the
    /// store.
    fn set_position(&mut self, vertex_ref: VertexRef, position: Point3<Self::Num>) -> Result<()>;
}

/// Scoped read access to a [VertexStore], releases the scope on drop.
#[must_use = "the read scope is released as soon as the guard is dropped"]
pub struct ReadGuard<'a, S>
where
    S: VertexStore + ?Sized,
{
    store: &'a S,
}

impl<'a, S> ReadGuard<'a, S>
where
    S: VertexStore + ?Sized,
{
    /// Open a read scope on `store` that is closed when the returned guard drops.
    #[inline]
    pub fn open(store: &'a S) -> Self {
        store.acquire_read();
        ReadGuard { store }
    }

    /// Resolve `vertex_ref` within this read scope.
    #[inline]
    pub fn resolve(&self, vertex_ref: VertexRef) -> Result<StoredVertex<S::Num>> {
        self.store.resolve(vertex_ref)
    }
}

impl<'a, S> Drop for ReadGuard<'a, S>
where
    S: VertexStore + ?Sized,
{
    fn drop(&mut self) {
        self.store.release_read();
    }
}

impl<'a, S> fmt::Debug for ReadGuard<'a, S>
where
    S: VertexStore + ?Sized,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReadGuard").finish_non_exhaustive()
    }
}
