//! Kinematic state of the vertices.

use crate::graph::VertexId;
use glam::Vec2;
use indexmap::IndexMap;

/// Whether physics moves a vertex.
///
/// `Free --freeze--> Frozen --unfreeze--> Free`. Positions may be overwritten in
/// either mode, but only free vertices are integrated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VertexMode {
    Free,
    Frozen,
}

/// Position, velocity and frozen flag of one vertex.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct VertexState {
    pub position: Vec2,
    pub velocity: Vec2,
    pub frozen: bool,
}

impl VertexState {
    /// A free vertex resting at `position`.
    pub fn at(position: Vec2) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    pub fn mode(&self) -> VertexMode {
        if self.frozen {
            VertexMode::Frozen
        } else {
            VertexMode::Free
        }
    }
}

/// Kinematic state of every vertex, keyed by vertex id in graph order.
///
/// The simulator hands out stores behind an `Arc` and replaces them wholesale,
/// so a store a reader holds never changes underneath it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StateStore(IndexMap<VertexId, VertexState>);

impl StateStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self(IndexMap::with_capacity(capacity))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.0.contains_key(id)
    }

    pub fn get(&self, id: &str) -> Option<&VertexState> {
        self.0.get(id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut VertexState> {
        self.0.get_mut(id)
    }

    /// Position of `id` in iteration order.
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.0.get_index_of(id)
    }

    /// State of `id` together with its position in iteration order.
    pub fn get_full(&self, id: &str) -> Option<(usize, &VertexState)> {
        self.0.get_full(id).map(|(i, _, state)| (i, state))
    }

    pub fn insert(&mut self, id: VertexId, state: VertexState) -> Option<VertexState> {
        self.0.insert(id, state)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&VertexId, &VertexState)> {
        self.0.iter()
    }

    /// Positions only, as consumed by the rendering surface.
    pub fn positions(&self) -> IndexMap<VertexId, Vec2> {
        self.0
            .iter()
            .map(|(id, state)| (id.clone(), state.position))
            .collect()
    }
}

impl FromIterator<(VertexId, VertexState)> for StateStore {
    fn from_iter<I: IntoIterator<Item = (VertexId, VertexState)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for StateStore {
    type Item = (VertexId, VertexState);
    type IntoIter = indexmap::map::IntoIter<VertexId, VertexState>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a StateStore {
    type Item = (&'a VertexId, &'a VertexState);
    type IntoIter = indexmap::map::Iter<'a, VertexId, VertexState>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
