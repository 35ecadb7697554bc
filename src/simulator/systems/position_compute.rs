use crate::graph::VertexId;
use crate::simulator::components::nodes::StateStore;
use glam::Vec2;
use log::trace;

/// Radius of the circle the default vertex shape is drawn with.
pub const VERTEX_RADIUS: f32 = 5.0;

/// Find the vertex whose circle of `radius` contains `point`.
///
/// When circles overlap the vertex closest to `point` wins.
// TODO: Replace the linear scan with a spatial index once graphs get large.
pub fn pick_vertex<'a>(state: &'a StateStore, point: Vec2, radius: f32) -> Option<&'a VertexId> {
    let radius_sqr = radius * radius;
    let (id, d) = state
        .iter()
        .map(|(id, vertex)| (id, vertex.position.distance_squared(point)))
        .filter(|(_, d)| *d <= radius_sqr)
        .min_by(|(_, a), (_, b)| a.total_cmp(b))?;

    trace!("Point {0} intersect [{1}] (d^2 = {2})", point, id, d);
    Some(id)
}
