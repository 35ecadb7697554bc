//! Events sent to the simulator from the outside.

use crate::graph::VertexId;
use crate::simulator::ressources::simulator_vars::WorldSize;
use glam::Vec2;

/// Describes an event received by a [`Simulator`](crate::simulator::Simulator).
#[derive(Debug, Clone, PartialEq)]
pub enum SimulatorEvent {
    /// Overwrite a vertex's position.
    MoveVertex(VertexId, Vec2),

    /// Stop integrating a vertex.
    FreezeVertex(VertexId),

    /// Resume integrating a vertex.
    UnfreezeVertex(VertexId),

    FrictionUpdated(f32),

    SpringStiffnessUpdated(f32),

    DeltaTimeUpdated(f32),

    WorldSizeUpdated(WorldSize),
}
