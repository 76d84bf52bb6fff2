use std::cell::Cell;

use rustc_hash::FxHashMap;

use super::{StoredVertex, VertexKind, VertexRef, VertexStore, VertexStoreMut};
use crate::{
    core::{
        error::{GeometryError, Result},
        math::Point3,
        traits::Real,
    },
    curve::IndexedPolyline,
};

/// In memory [VertexStore] keyed by sequentially issued [VertexRef] handles.
///
/// Keeps a count of open read scopes, see [MemoryVertexStore::active_readers].
#[derive(Debug, Clone)]
pub struct MemoryVertexStore<T = f64> {
    vertexes: FxHashMap<VertexRef, StoredVertex<T>>,
    next_handle: u64,
    readers: Cell<usize>,
}

impl<T> Default for MemoryVertexStore<T>
where
    T: Real,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> MemoryVertexStore<T>
where
    T: Real,
{
    pub fn new() -> Self {
        MemoryVertexStore {
            vertexes: FxHashMap::default(),
            next_handle: 1,
            readers: Cell::new(0),
        }
    }

    /// Store a vertex record and return its new handle.
    pub fn insert(&mut self, vertex: StoredVertex<T>) -> VertexRef {
        let handle = VertexRef(self.next_handle);
        self.next_handle += 1;
        self.vertexes.insert(handle, vertex);
        handle
    }

    #[inline]
    pub fn insert_2d(&mut self, position: Point3<T>) -> VertexRef {
        self.insert(StoredVertex::new(VertexKind::Vertex2d, position))
    }

    #[inline]
    pub fn insert_3d(&mut self, position: Point3<T>) -> VertexRef {
        self.insert(StoredVertex::new(VertexKind::Vertex3d, position))
    }

    /// Remove a vertex record, later lookups of `vertex_ref` fail with `NotFound`.
    #[inline]
    pub fn remove(&mut self, vertex_ref: VertexRef) -> Option<StoredVertex<T>> {
        self.vertexes.remove(&vertex_ref)
    }

    #[inline]
    pub fn contains(&self, vertex_ref: VertexRef) -> bool {
        self.vertexes.contains_key(&vertex_ref)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vertexes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertexes.is_empty()
    }

    /// Number of read scopes currently open on this store.
    #[inline]
    pub fn active_readers(&self) -> usize {
        self.readers.get()
    }

    /// Store `points` as 2D vertexes and return the indexed polyline referencing them in order.
    pub fn add_polyline_2d<I>(&mut self, points: I, is_closed: bool) -> IndexedPolyline
    where
        I: IntoIterator<Item = Point3<T>>,
    {
        let refs = points.into_iter().map(|p| self.insert_2d(p)).collect();
        IndexedPolyline::new(refs, is_closed)
    }

    /// Store `points` as 3D vertexes and return the indexed polyline referencing them in order.
    pub fn add_polyline_3d<I>(&mut self, points: I, is_closed: bool) -> IndexedPolyline
    where
        I: IntoIterator<Item = Point3<T>>,
    {
        let refs = points.into_iter().map(|p| self.insert_3d(p)).collect();
        IndexedPolyline::new(refs, is_closed)
    }
}

impl<T> VertexStore for MemoryVertexStore<T>
where
    T: Real,
{
    type Num = T;

    #[inline]
    fn acquire_read(&self) {
        self.readers.set(self.readers.get() + 1);
    }

    #[inline]
    fn release_read(&self) {
        debug_assert!(self.readers.get() > 0, "read scope released twice");
        self.readers.set(self.readers.get().saturating_sub(1));
    }

    fn resolve(&self, vertex_ref: VertexRef) -> Result<StoredVertex<T>> {
        self.vertexes
            .get(&vertex_ref)
            .copied()
            .ok_or(GeometryError::NotFound(vertex_ref))
    }
}

impl<T> VertexStoreMut for MemoryVertexStore<T>
where
    T: Real,
{
    fn set_position(&mut self, vertex_ref: VertexRef, position: Point3<T>) -> Result<()> {
        let v = self
            .vertexes
            .get_mut(&vertex_ref)
            .ok_or(GeometryError::NotFound(vertex_ref))?;
        v.position = position;
        Ok(())
    }
}
