//! The steps of one simulation tick.
//!
//! Each step is a pure function from the previous [`StateStore`] to a new one:
//! [`reconcile`] syncs the store with the graph, [`compute_forces`] sums friction
//! and spring forces, and [`integrate`] moves the vertices. [`tick`] runs all
//! three in order.

pub mod force_compute;
pub mod position_compute;
pub mod position_update;
pub mod reconcile;

pub use force_compute::compute_forces;
pub use position_compute::pick_vertex;
pub use position_update::integrate;
pub use reconcile::reconcile;

use crate::graph::Graph;
use crate::simulator::components::nodes::StateStore;
use crate::simulator::ressources::simulator_vars::{SimulationParams, WorldSize};
use rand::Rng;

/// Advance `previous` by one step for `graph`.
///
/// The only side effect is drawing from `rng` for vertices that appear for the
/// first time.
pub fn tick<R: Rng + ?Sized>(
    previous: &StateStore,
    graph: &Graph,
    world_size: WorldSize,
    params: &SimulationParams,
    rng: &mut R,
) -> StateStore {
    let state = reconcile(&graph.vertices, previous, world_size, rng);
    let forces = compute_forces(
        &state,
        &graph.edges,
        params.friction,
        params.spring_stiffness,
    );
    integrate(&state, &forces, world_size, params.delta_time)
}
