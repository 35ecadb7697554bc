use crate::simulator::components::forces::Forces;
use crate::simulator::components::nodes::{StateStore, VertexState};
use crate::simulator::ressources::simulator_vars::{DeltaTime, WorldSize};
use glam::Vec2;
use log::warn;

/// Advance every vertex by one step of semi-implicit Euler.
///
/// The velocity is updated from the force first and the position from the new
/// velocity, then clamped into `world_size`. Frozen vertices keep their position
/// and have their velocity zeroed.
pub fn integrate(
    state: &StateStore,
    forces: &Forces,
    world_size: WorldSize,
    delta_time: DeltaTime,
) -> StateStore {
    state
        .iter()
        .map(|(id, vertex)| {
            if vertex.frozen {
                return (
                    id.clone(),
                    VertexState {
                        velocity: Vec2::ZERO,
                        ..*vertex
                    },
                );
            }

            let velocity = vertex.velocity + delta_time.0 * forces.get(id.as_str());
            let position = world_size.clamp(vertex.position + delta_time.0 * velocity);

            if !velocity.is_finite() || !position.is_finite() {
                warn!(
                    "[{0}] Non-finite step (p: {1} | v: {2}), holding position",
                    id, position, velocity
                );
                return (
                    id.clone(),
                    VertexState {
                        velocity: Vec2::ZERO,
                        ..*vertex
                    },
                );
            }

            (
                id.clone(),
                VertexState {
                    position,
                    velocity,
                    frozen: false,
                },
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::VertexId;

    fn world() -> WorldSize {
        WorldSize::new(100.0, 100.0).unwrap()
    }

    fn single(state: VertexState, force: Vec2) -> (StateStore, Forces) {
        let store: StateStore = [(VertexId::from("A"), state)].into_iter().collect();
        let forces: Forces = [(VertexId::from("A"), force)].into_iter().collect();
        (store, forces)
    }

    #[test]
    fn semi_implicit_euler_step() {
        let (store, forces) = single(
            VertexState {
                position: Vec2::new(10.0, 10.0),
                velocity: Vec2::new(1.0, 0.0),
                frozen: false,
            },
            Vec2::new(2.0, 4.0),
        );

        let next = integrate(&store, &forces, world(), DeltaTime(0.5));
        let a = next.get("A").unwrap();

        assert_eq!(a.velocity, Vec2::new(2.0, 2.0));
        assert_eq!(a.position, Vec2::new(11.0, 11.0));
    }

    #[test]
    fn frozen_vertex_does_not_move() {
        let frozen = VertexState {
            position: Vec2::new(42.0, 7.0),
            velocity: Vec2::ZERO,
            frozen: true,
        };
        let (store, forces) = single(frozen, Vec2::new(1000.0, -1000.0));

        let next = integrate(&store, &forces, world(), DeltaTime(1.0));

        assert_eq!(next.get("A"), Some(&frozen));
    }

    #[test]
    fn frozen_vertex_loses_velocity() {
        let (store, forces) = single(
            VertexState {
                position: Vec2::new(5.0, 5.0),
                velocity: Vec2::new(3.0, 3.0),
                frozen: true,
            },
            Vec2::ZERO,
        );

        let next = integrate(&store, &forces, world(), DeltaTime(1.0));
        let a = next.get("A").unwrap();

        assert_eq!(a.velocity, Vec2::ZERO);
        assert_eq!(a.position, Vec2::new(5.0, 5.0));
    }

    #[test]
    fn positions_are_clamped_not_wrapped() {
        let (store, forces) = single(
            VertexState {
                position: Vec2::new(90.0, 5.0),
                velocity: Vec2::new(1.0e6, -1.0e6),
                frozen: false,
            },
            Vec2::ZERO,
        );

        let next = integrate(&store, &forces, world(), DeltaTime(1.0));
        let a = next.get("A").unwrap();

        assert_eq!(a.position, Vec2::new(100.0, 0.0));
        assert_eq!(a.velocity, Vec2::new(1.0e6, -1.0e6));
    }

    #[test]
    fn missing_force_counts_as_zero() {
        let store: StateStore = [(
            VertexId::from("A"),
            VertexState {
                position: Vec2::new(1.0, 1.0),
                velocity: Vec2::new(1.0, 1.0),
                frozen: false,
            },
        )]
        .into_iter()
        .collect();

        let next = integrate(&store, &Forces::default(), world(), DeltaTime(1.0));

        assert_eq!(next.get("A").unwrap().position, Vec2::new(2.0, 2.0));
    }

    #[test]
    fn non_finite_step_is_rejected() {
        let start = Vec2::new(20.0, 30.0);
        let (store, forces) = single(
            VertexState {
                position: start,
                velocity: Vec2::ZERO,
                frozen: false,
            },
            Vec2::new(f32::NAN, 0.0),
        );

        let next = integrate(&store, &forces, world(), DeltaTime(1.0));
        let a = next.get("A").unwrap();

        assert_eq!(a.position, start);
        assert_eq!(a.velocity, Vec2::ZERO);
    }

    #[test]
    fn leaves_input_untouched() {
        let (store, forces) = single(VertexState::at(Vec2::new(1.0, 1.0)), Vec2::new(1.0, 0.0));
        let before = store.clone();

        let _ = integrate(&store, &forces, world(), DeltaTime(1.0));

        assert_eq!(store, before);
    }
}
