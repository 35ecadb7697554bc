use crate::graph::VertexId;
use crate::simulator::ressources::events::SimulatorEvent;
use glam::Vec2;
use shrev::{EventChannel, ReaderId};
use std::sync::{Arc, PoisonError, RwLock};

/// Queues [`SimulatorEvent`]s for a simulator.
///
/// Cloning is cheap and every clone feeds the same channel, so pointer handlers
/// and other threads can hold their own copy. Queued events are applied between
/// ticks, never during one.
#[derive(Clone)]
pub struct EventDispatcher {
    pub sim_chan: Arc<RwLock<EventChannel<SimulatorEvent>>>,
}

impl EventDispatcher {
    pub fn new() -> Self {
        let chan = EventChannel::<SimulatorEvent>::new();
        Self {
            sim_chan: Arc::new(RwLock::new(chan)),
        }
    }

    pub fn send(&self, event: SimulatorEvent) {
        self.sim_chan
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .single_write(event);
    }

    pub fn move_vertex(&self, id: impl Into<VertexId>, position: Vec2) {
        self.send(SimulatorEvent::MoveVertex(id.into(), position));
    }

    pub fn freeze_vertex(&self, id: impl Into<VertexId>) {
        self.send(SimulatorEvent::FreezeVertex(id.into()));
    }

    pub fn unfreeze_vertex(&self, id: impl Into<VertexId>) {
        self.send(SimulatorEvent::UnfreezeVertex(id.into()));
    }

    pub(crate) fn register_reader(&self) -> ReaderId<SimulatorEvent> {
        self.sim_chan
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .register_reader()
    }

    /// Take every event `reader` has not seen yet, oldest first.
    pub(crate) fn drain(&self, reader: &mut ReaderId<SimulatorEvent>) -> Vec<SimulatorEvent> {
        self.sim_chan
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .read(reader)
            .cloned()
            .collect()
    }
}

impl Default for EventDispatcher {
    fn default() -> Self {
        Self::new()
    }
}
