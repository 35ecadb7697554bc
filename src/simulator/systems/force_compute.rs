use crate::graph::GraphEdge;
use crate::simulator::components::forces::Forces;
use crate::simulator::components::nodes::StateStore;
use crate::simulator::ressources::simulator_vars::{Friction, SpringStiffness};
use glam::Vec2;
use log::warn;

/// Computes the spring force an edge exerts on its source vertex.
///
/// A stretched spring pulls the source towards the target, a compressed one
/// pushes it away. The target receives the negation. Coincident endpoints have
/// no direction and yield no force.
pub fn spring_force(source: Vec2, target: Vec2, length: f32, spring_stiffness: f32) -> Vec2 {
    let direction_vec = target - source;
    let force_magnitude = spring_stiffness * (direction_vec.length() - length);
    direction_vec.normalize_or(Vec2::ZERO) * force_magnitude
}

/// Net force on every vertex of `state`: viscous friction plus one Hookean
/// spring per edge.
///
/// Edges with an endpoint missing from `state` are skipped.
pub fn compute_forces(
    state: &StateStore,
    edges: &[GraphEdge],
    friction: Friction,
    spring_stiffness: SpringStiffness,
) -> Forces {
    let mut forces: Vec<Vec2> = state
        .iter()
        .map(|(_, vertex)| -friction.0 * vertex.velocity)
        .collect();

    for edge in edges {
        let (Some((src, src_state)), Some((target, target_state))) = (
            state.get_full(edge.source.as_str()),
            state.get_full(edge.target.as_str()),
        ) else {
            continue;
        };
        if !edge.length.is_finite() {
            warn!("[{0}] Skipping edge with length {1}", edge.id, edge.length);
            continue;
        }

        let force = spring_force(
            src_state.position,
            target_state.position,
            edge.length,
            spring_stiffness.0,
        );

        forces[src] += force;
        forces[target] -= force;
    }

    state
        .iter()
        .zip(forces)
        .map(|((id, _), force)| (id.clone(), force))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::VertexId;
    use crate::simulator::components::nodes::VertexState;

    fn store(vertices: &[(&str, Vec2, Vec2)]) -> StateStore {
        vertices
            .iter()
            .map(|(id, position, velocity)| {
                (
                    VertexId::from(*id),
                    VertexState {
                        position: *position,
                        velocity: *velocity,
                        frozen: false,
                    },
                )
            })
            .collect()
    }

    #[test]
    fn spring_at_rest_length_exerts_nothing() {
        let state = store(&[
            ("A", Vec2::new(0.0, 0.0), Vec2::ZERO),
            ("B", Vec2::new(3.0, 4.0), Vec2::ZERO),
        ]);
        let edges = [GraphEdge::new("AB", "A", "B", 5.0)];

        let forces = compute_forces(&state, &edges, Friction(0.0), SpringStiffness(7.0));

        assert_eq!(forces.get("A"), Vec2::ZERO);
        assert_eq!(forces.get("B"), Vec2::ZERO);
    }

    #[test]
    fn stretched_spring_pulls_endpoints_together() {
        let state = store(&[
            ("A", Vec2::new(0.0, 0.0), Vec2::ZERO),
            ("B", Vec2::new(10.0, 0.0), Vec2::ZERO),
            ("C", Vec2::new(0.0, 10.0), Vec2::ZERO),
        ]);
        let edges = [GraphEdge::new("AB", "A", "B", 5.0)];

        let forces = compute_forces(&state, &edges, Friction(0.0), SpringStiffness(1.0));

        assert_eq!(forces.get("A"), Vec2::new(5.0, 0.0));
        assert_eq!(forces.get("B"), Vec2::new(-5.0, 0.0));
        assert_eq!(forces.get("C"), Vec2::ZERO);
    }

    #[test]
    fn compressed_spring_pushes_endpoints_apart() {
        let state = store(&[
            ("A", Vec2::new(0.0, 0.0), Vec2::ZERO),
            ("B", Vec2::new(0.0, 2.0), Vec2::ZERO),
        ]);
        let edges = [GraphEdge::new("AB", "A", "B", 4.0)];

        let forces = compute_forces(&state, &edges, Friction(0.0), SpringStiffness(1.0));

        assert_eq!(forces.get("A"), Vec2::new(0.0, -2.0));
        assert_eq!(forces.get("B"), Vec2::new(0.0, 2.0));
    }

    #[test]
    fn friction_opposes_velocity() {
        let state = store(&[("A", Vec2::ZERO, Vec2::new(2.0, -1.0))]);

        let forces = compute_forces(&state, &[], Friction(10.0), SpringStiffness(1.0));

        assert_eq!(forces.get("A"), Vec2::new(-20.0, 10.0));
    }

    #[test]
    fn parallel_edges_accumulate() {
        let state = store(&[
            ("A", Vec2::new(0.0, 0.0), Vec2::ZERO),
            ("B", Vec2::new(10.0, 0.0), Vec2::ZERO),
        ]);
        let edges = [
            GraphEdge::new("AB1", "A", "B", 5.0),
            GraphEdge::new("AB2", "B", "A", 5.0),
        ];

        let forces = compute_forces(&state, &edges, Friction(0.0), SpringStiffness(1.0));

        assert_eq!(forces.get("A"), Vec2::new(10.0, 0.0));
        assert_eq!(forces.get("B"), Vec2::new(-10.0, 0.0));
    }

    #[test]
    fn missing_endpoint_is_ignored() {
        let state = store(&[
            ("A", Vec2::new(0.0, 0.0), Vec2::ZERO),
            ("B", Vec2::new(10.0, 0.0), Vec2::ZERO),
        ]);
        let edges = [
            GraphEdge::new("AB", "A", "B", 5.0),
            GraphEdge::new("AX", "A", "X", 5.0),
        ];

        let forces = compute_forces(&state, &edges, Friction(0.0), SpringStiffness(1.0));

        assert_eq!(forces.len(), 2);
        assert_eq!(forces.get("A"), Vec2::new(5.0, 0.0));
        assert_eq!(forces.get("B"), Vec2::new(-5.0, 0.0));
    }

    #[test]
    fn coincident_endpoints_yield_finite_zero_force() {
        let state = store(&[
            ("A", Vec2::new(4.0, 4.0), Vec2::ZERO),
            ("B", Vec2::new(4.0, 4.0), Vec2::ZERO),
        ]);
        let edges = [GraphEdge::new("AB", "A", "B", 5.0)];

        let forces = compute_forces(&state, &edges, Friction(0.0), SpringStiffness(1.0));

        assert_eq!(forces.get("A"), Vec2::ZERO);
        assert_eq!(forces.get("B"), Vec2::ZERO);
    }

    #[test]
    fn self_loop_cancels_out() {
        let state = store(&[("A", Vec2::new(1.0, 1.0), Vec2::ZERO)]);
        let edges = [GraphEdge::new("AA", "A", "A", 5.0)];

        let forces = compute_forces(&state, &edges, Friction(0.0), SpringStiffness(1.0));

        assert!(forces.get("A").is_finite());
        assert_eq!(forces.get("A"), Vec2::ZERO);
    }
}
