//! Net force acting on each vertex during one tick.

use crate::graph::VertexId;
use glam::Vec2;
use indexmap::IndexMap;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Forces(IndexMap<VertexId, Vec2>);

impl Forces {
    /// Force on `id`, zero for vertices no force was computed for.
    pub fn get(&self, id: &str) -> Vec2 {
        self.0.get(id).copied().unwrap_or(Vec2::ZERO)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&VertexId, &Vec2)> {
        self.0.iter()
    }
}

impl FromIterator<(VertexId, Vec2)> for Forces {
    fn from_iter<I: IntoIterator<Item = (VertexId, Vec2)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
