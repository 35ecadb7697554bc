pub mod components;
pub mod ressources;
pub mod systems;

use crate::error::{Result, SimulatorError};
use crate::event_dispatcher::EventDispatcher;
use crate::graph::{Graph, VertexId};
use crate::simulator::components::nodes::{StateStore, VertexState};
use crate::simulator::ressources::events::SimulatorEvent;
use crate::simulator::ressources::simulator_vars::{
    DeltaTime, Friction, SimulationParams, SpringStiffness, WorldSize,
};
use glam::Vec2;
use indexmap::IndexMap;
use log::{debug, info, trace, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use shrev::ReaderId;
use std::sync::Arc;

/// Owns the kinematic state of a graph and advances it one tick at a time.
///
/// The state is held as an immutable snapshot that every tick and every command
/// replaces wholesale. Readers holding a [`snapshot`](Self::snapshot) never
/// observe a half-updated store.
pub struct Simulator<R = StdRng> {
    graph: Graph,
    world_size: WorldSize,
    params: SimulationParams,
    state: Arc<StateStore>,
    rng: R,
    dispatcher: EventDispatcher,
    reader: ReaderId<SimulatorEvent>,
    ticks: u64,
}

impl Simulator {
    pub fn builder() -> SimulatorBuilder {
        SimulatorBuilder::default()
    }
}

impl<R: Rng> Simulator<R> {
    /// Run one simulation step.
    ///
    /// Events queued on the [`EventDispatcher`] are applied first, then the
    /// store is reconciled with the graph, forces are computed and vertices
    /// are integrated. Returns the new snapshot.
    pub fn tick(&mut self) -> Arc<StateStore> {
        self.apply_events();

        let next = systems::tick(
            &self.state,
            &self.graph,
            self.world_size,
            &self.params,
            &mut self.rng,
        );
        self.state = Arc::new(next);
        self.ticks += 1;
        trace!("Tick {0}: {1} vertices", self.ticks, self.state.len());

        Arc::clone(&self.state)
    }

    /// Apply the queued events now instead of at the next tick.
    ///
    /// Returns how many events were applied.
    pub fn apply_events(&mut self) -> usize {
        let events = self.dispatcher.drain(&mut self.reader);
        let count = events.len();
        for event in events {
            self.handle_event(event);
        }
        count
    }

    fn handle_event(&mut self, event: SimulatorEvent) {
        match event {
            SimulatorEvent::MoveVertex(id, position) => {
                self.move_vertex(id.as_str(), position);
            }
            SimulatorEvent::FreezeVertex(id) => {
                self.freeze_vertex(id.as_str());
            }
            SimulatorEvent::UnfreezeVertex(id) => {
                self.unfreeze_vertex(id.as_str());
            }
            SimulatorEvent::FrictionUpdated(friction) => {
                if let Err(e) = self.set_friction(friction) {
                    warn!("Ignoring event: {e}");
                }
            }
            SimulatorEvent::SpringStiffnessUpdated(stiffness) => {
                if let Err(e) = self.set_spring_stiffness(stiffness) {
                    warn!("Ignoring event: {e}");
                }
            }
            SimulatorEvent::DeltaTimeUpdated(delta_time) => {
                if let Err(e) = self.set_delta_time(delta_time) {
                    warn!("Ignoring event: {e}");
                }
            }
            SimulatorEvent::WorldSizeUpdated(world_size) => {
                if let Err(e) = self.set_world_size(world_size.width, world_size.height) {
                    warn!("Ignoring event: {e}");
                }
            }
        }
    }
}

impl<R> Simulator<R> {
    /// Overwrite the position of a vertex.
    ///
    /// Velocity and the frozen flag are left alone. Unknown ids and non-finite
    /// positions are ignored; returns whether the store changed.
    pub fn move_vertex(&mut self, id: &str, position: Vec2) -> bool {
        if !position.is_finite() {
            warn!("[{0}] Ignoring move to {1}", id, position);
            return false;
        }
        debug!("[{0}] Moved to {1}", id, position);
        self.update_vertex(id, |vertex| vertex.position = position)
    }

    /// Stop integrating a vertex, starting with the next tick.
    pub fn freeze_vertex(&mut self, id: &str) -> bool {
        debug!("[{0}] Freeze", id);
        self.update_vertex(id, |vertex| vertex.frozen = true)
    }

    /// Resume integrating a vertex, starting with the next tick.
    pub fn unfreeze_vertex(&mut self, id: &str) -> bool {
        debug!("[{0}] Unfreeze", id);
        self.update_vertex(id, |vertex| vertex.frozen = false)
    }

    fn update_vertex(&mut self, id: &str, update: impl FnOnce(&mut VertexState)) -> bool {
        if !self.state.contains(id) {
            debug!("[{0}] Not in the store, ignoring", id);
            return false;
        }
        // Clones the store if a reader still holds the current snapshot.
        let state = Arc::make_mut(&mut self.state);
        match state.get_mut(id) {
            Some(vertex) => {
                update(vertex);
                true
            }
            None => false,
        }
    }

    /// The current state of every vertex.
    pub fn snapshot(&self) -> Arc<StateStore> {
        Arc::clone(&self.state)
    }

    /// Current vertex positions, in graph order.
    pub fn positions(&self) -> IndexMap<VertexId, Vec2> {
        self.state.positions()
    }

    pub fn vertex(&self, id: &str) -> Option<VertexState> {
        self.state.get(id).copied()
    }

    /// A handle for queuing commands from outside the owner of the simulator.
    pub fn dispatcher(&self) -> EventDispatcher {
        self.dispatcher.clone()
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Replace the graph. The store catches up at the next tick.
    pub fn set_graph(&mut self, graph: Graph) {
        info!(
            "Graph updated: {0} vertices, {1} edges",
            graph.vertices.len(),
            graph.edges.len()
        );
        self.graph = graph;
    }

    pub fn world_size(&self) -> WorldSize {
        self.world_size
    }

    pub fn set_world_size(&mut self, width: f32, height: f32) -> Result<()> {
        self.world_size = WorldSize::new(width, height)?;
        Ok(())
    }

    pub fn params(&self) -> SimulationParams {
        self.params
    }

    pub fn set_friction(&mut self, friction: f32) -> Result<()> {
        self.params.friction = Friction::new(friction)?;
        Ok(())
    }

    pub fn set_spring_stiffness(&mut self, stiffness: f32) -> Result<()> {
        self.params.spring_stiffness = SpringStiffness::new(stiffness)?;
        Ok(())
    }

    pub fn set_delta_time(&mut self, delta_time: f32) -> Result<()> {
        self.params.delta_time = DeltaTime::new(delta_time)?;
        Ok(())
    }

    /// Number of ticks run so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}

/// Builder for `Simulator`
pub struct SimulatorBuilder {
    friction: f32,
    spring_stiffness: f32,
    delta_time: f32,
    width: f32,
    height: f32,
    seed: Option<u64>,
    state: StateStore,
}

impl SimulatorBuilder {
    /// Get a Instance of `SimulatorBuilder` with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// How strongly vertex movement is damped.
    ///
    /// Each vertex feels `-friction * velocity`.
    ///
    /// Default: `10.0`
    pub fn friction(mut self, friction: f32) -> Self {
        self.friction = friction;
        self
    }

    /// How strong the spring force of the edges should be.
    ///
    /// Default: `10.0`
    pub fn spring_stiffness(mut self, spring_stiffness: f32) -> Self {
        self.spring_stiffness = spring_stiffness;
        self
    }

    /// How much time a simulation step should simulate. (semi-implicit euler method)
    ///
    /// Bigger time steps result in faster simulations, but less accurate or even wrong simulations.
    ///
    /// Must be greater than `0`.
    ///
    /// Default: `0.005`
    pub fn delta_time(mut self, delta_time: f32) -> Self {
        self.delta_time = delta_time;
        self
    }

    /// Size of the rectangle vertices are kept in.
    ///
    /// Default: `400.0 x 400.0`
    pub fn world_size(mut self, width: f32, height: f32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Seed the generator that places new vertices, for reproducible layouts.
    ///
    /// Default: seeded from the operating system
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Start from a known state instead of an empty store.
    ///
    /// Vertices not in the graph are dropped on the first tick. Positions and
    /// velocities must be finite, and frozen vertices start at rest.
    pub fn initial_state(mut self, state: StateStore) -> Self {
        self.state = state;
        self
    }

    /// Constructs a instance of `Simulator`
    pub fn build(self, graph: Graph) -> Result<Simulator> {
        let rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        self.build_with_rng(graph, rng)
    }

    /// Constructs a instance of `Simulator` drawing new vertex positions from `rng`.
    pub fn build_with_rng<R: Rng>(self, graph: Graph, rng: R) -> Result<Simulator<R>> {
        let params = SimulationParams {
            friction: Friction::new(self.friction)?,
            spring_stiffness: SpringStiffness::new(self.spring_stiffness)?,
            delta_time: DeltaTime::new(self.delta_time)?,
        };
        let world_size = WorldSize::new(self.width, self.height)?;
        let state = checked_state(self.state)?;

        let dispatcher = EventDispatcher::new();
        let reader = dispatcher.register_reader();

        info!(
            "Simulator built: {0} vertices, {1} edges, world {2}x{3}",
            graph.vertices.len(),
            graph.edges.len(),
            world_size.width,
            world_size.height
        );

        Ok(Simulator {
            graph,
            world_size,
            params,
            state: Arc::new(state),
            rng,
            dispatcher,
            reader,
            ticks: 0,
        })
    }
}

fn checked_state(state: StateStore) -> Result<StateStore> {
    state
        .into_iter()
        .map(|(id, mut vertex)| {
            if !vertex.position.is_finite() || !vertex.velocity.is_finite() {
                return Err(SimulatorError::NonFiniteState(id));
            }
            if vertex.frozen {
                vertex.velocity = Vec2::ZERO;
            }
            Ok((id, vertex))
        })
        .collect()
}

impl Default for SimulatorBuilder {
    /// Get a Instance of `SimulatorBuilder` with default values
    fn default() -> Self {
        let params = SimulationParams::default();
        let world_size = WorldSize::default();
        Self {
            friction: params.friction.0,
            spring_stiffness: params.spring_stiffness.0,
            delta_time: params.delta_time.0,
            width: world_size.width,
            height: world_size.height,
            seed: None,
            state: StateStore::new(),
        }
    }
}
