//! Pointer dragging on top of the freeze/move/unfreeze commands.
//!
//! Pressing on a vertex freezes it and remembers where on the vertex it was
//! grabbed. Moving the pointer moves the vertex so the grab point stays under
//! the pointer. Releasing unfreezes it and physics takes over again.

use crate::graph::VertexId;
use crate::simulator::systems::position_compute::{pick_vertex, VERTEX_RADIUS};
use crate::simulator::Simulator;
use glam::Vec2;
use log::debug;

#[derive(Debug, Clone, PartialEq)]
struct Grab {
    id: VertexId,
    /// Pointer position relative to the vertex at the time of the grab.
    offset: Vec2,
}

#[derive(Debug, Clone)]
pub struct DragController {
    radius: f32,
    grab: Option<Grab>,
}

impl DragController {
    pub fn new() -> Self {
        Self {
            radius: VERTEX_RADIUS,
            grab: None,
        }
    }

    /// Hit radius used by [`pointer_down`](Self::pointer_down).
    pub fn with_radius(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }

    /// The vertex currently being dragged.
    pub fn dragged(&self) -> Option<&VertexId> {
        self.grab.as_ref().map(|grab| &grab.id)
    }

    /// Start dragging the vertex under `pointer`, if any.
    pub fn pointer_down<R>(
        &mut self,
        simulator: &mut Simulator<R>,
        pointer: Vec2,
    ) -> Option<VertexId> {
        let id = pick_vertex(&simulator.snapshot(), pointer, self.radius)?.clone();
        self.grab(simulator, id.as_str(), pointer).then_some(id)
    }

    /// Start dragging `id`, grabbed at `pointer`.
    ///
    /// Any drag in progress is released first. Returns `false` if `id` is not
    /// in the store.
    pub fn grab<R>(&mut self, simulator: &mut Simulator<R>, id: &str, pointer: Vec2) -> bool {
        self.pointer_up(simulator);

        let Some(vertex) = simulator.vertex(id) else {
            return false;
        };
        simulator.freeze_vertex(id);
        self.grab = Some(Grab {
            id: VertexId::from(id),
            offset: pointer - vertex.position,
        });
        debug!("[{0}] Drag start", id);
        true
    }

    /// Follow the pointer with the dragged vertex.
    pub fn pointer_move<R>(&mut self, simulator: &mut Simulator<R>, pointer: Vec2) -> bool {
        match &self.grab {
            Some(grab) => simulator.move_vertex(grab.id.as_str(), pointer - grab.offset),
            None => false,
        }
    }

    /// Release the dragged vertex, returning it.
    pub fn pointer_up<R>(&mut self, simulator: &mut Simulator<R>) -> Option<VertexId> {
        let grab = self.grab.take()?;
        simulator.unfreeze_vertex(grab.id.as_str());
        debug!("[{0}] Drag end", grab.id);
        Some(grab.id)
    }
}

impl Default for DragController {
    fn default() -> Self {
        Self::new()
    }
}
