use crate::graph::GraphVertex;
use crate::simulator::components::nodes::{StateStore, VertexState};
use crate::simulator::ressources::simulator_vars::WorldSize;
use glam::Vec2;
use log::{debug, trace};
use rand::Rng;

/// Build the state store for `vertices` from the `previous` one.
///
/// Known vertices keep their state untouched, new ones are dropped at a uniformly
/// random spot in `[0, width) × [0, height)` at rest, and vertices that left the
/// graph are forgotten. `rng` is only drawn from for new vertices.
pub fn reconcile<R: Rng + ?Sized>(
    vertices: &[GraphVertex],
    previous: &StateStore,
    world_size: WorldSize,
    rng: &mut R,
) -> StateStore {
    let mut store = StateStore::with_capacity(vertices.len());

    for vertex in vertices {
        if store.contains(vertex.id.as_str()) {
            debug!("[{0}] Listed twice, keeping first", vertex.id);
            continue;
        }

        let state = match previous.get(vertex.id.as_str()) {
            Some(state) => *state,
            None => {
                let position = Vec2::new(
                    rng.gen::<f32>() * world_size.width,
                    rng.gen::<f32>() * world_size.height,
                );
                trace!("[{0}] Spawned at {1}", vertex.id, position);
                VertexState::at(position)
            }
        };
        store.insert(vertex.id.clone(), state);
    }

    store
}
