//! The graph description consumed by the simulator.
//!
//! A [`Graph`] is plain data. The simulator reads it every tick, so vertices and
//! edges may be added or removed between ticks without any bookkeeping on the
//! caller's side.

use petgraph::graph::IndexType;
use petgraph::visit::EdgeRef;
use petgraph::EdgeType;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Natural length given to edges converted from a petgraph graph.
pub const DEFAULT_EDGE_LENGTH: f32 = 200.0;

/// Stable identifier of a vertex.
///
/// Equality is the only relation used to join edges and kinematic state.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VertexId(String);

impl VertexId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for VertexId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl From<&str> for VertexId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for VertexId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A vertex of the graph.
///
/// `fill` and `label` are carried for the rendering surface only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphVertex {
    pub id: VertexId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl GraphVertex {
    pub fn new(id: impl Into<VertexId>) -> Self {
        Self {
            id: id.into(),
            fill: None,
            label: None,
        }
    }

    pub fn with_fill(mut self, fill: impl Into<String>) -> Self {
        self.fill = Some(fill.into());
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

/// A spring between two vertices.
///
/// Edge identity does not depend on its endpoints: parallel edges between the
/// same pair each pull with their own spring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphEdge {
    pub id: String,
    pub source: VertexId,
    pub target: VertexId,
    /// Natural (rest) length of the spring.
    pub length: f32,
}

impl GraphEdge {
    pub fn new(
        id: impl Into<String>,
        source: impl Into<VertexId>,
        target: impl Into<VertexId>,
        length: f32,
    ) -> Self {
        Self {
            id: id.into(),
            source: source.into(),
            target: target.into(),
            length,
        }
    }
}

/// Vertices and edges handed to the simulator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Graph {
    #[serde(default)]
    pub vertices: Vec<GraphVertex>,
    #[serde(default)]
    pub edges: Vec<GraphEdge>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_vertex(mut self, vertex: GraphVertex) -> Self {
        self.vertices.push(vertex);
        self
    }

    pub fn with_edge(mut self, edge: GraphEdge) -> Self {
        self.edges.push(edge);
        self
    }

    pub fn vertex(&self, id: &str) -> Option<&GraphVertex> {
        self.vertices.iter().find(|v| v.id.as_str() == id)
    }

    /// Convert a petgraph graph.
    ///
    /// Vertex ids are the node indices, edge ids are `e<edge index>`, and every
    /// edge gets the same natural `length`.
    pub fn from_petgraph<N, E, Ty, Ix>(graph: &petgraph::Graph<N, E, Ty, Ix>, length: f32) -> Self
    where
        Ty: EdgeType,
        Ix: IndexType,
    {
        let vertices = graph
            .node_indices()
            .map(|n| GraphVertex::new(n.index().to_string()))
            .collect();
        let edges = graph
            .edge_references()
            .map(|e| {
                GraphEdge::new(
                    format!("e{}", e.id().index()),
                    e.source().index().to_string(),
                    e.target().index().to_string(),
                    length,
                )
            })
            .collect();
        Self { vertices, edges }
    }

    /// The graph shown by the demo harness: a five vertex clique with long
    /// springs and a small triangle next to it.
    pub fn demo() -> Self {
        let vertices = [
            ("One", "red", "Foo"),
            ("Two", "orange", "Bar"),
            ("Three", "yellow", "Three"),
            ("Four", "green", "Four"),
            ("Five", "blue", "Five"),
            ("A", "indigo", "A"),
            ("B", "violet", "B"),
            ("C", "black", "C"),
        ]
        .into_iter()
        .map(|(id, fill, label)| GraphVertex::new(id).with_fill(fill).with_label(label))
        .collect();

        let clique = ["One", "Two", "Three", "Four", "Five"];
        let mut edges = Vec::new();
        for (i, source) in clique.iter().enumerate() {
            for target in &clique[i + 1..] {
                edges.push(GraphEdge::new(
                    format!("{source}{target}"),
                    *source,
                    *target,
                    200.0,
                ));
            }
        }
        edges.push(GraphEdge::new("AB", "A", "B", 100.0));
        edges.push(GraphEdge::new("AC", "A", "C", 100.0));
        edges.push(GraphEdge::new("BC", "B", "C", 100.0));

        Self { vertices, edges }
    }
}

impl<N, E, Ty, Ix> From<&petgraph::Graph<N, E, Ty, Ix>> for Graph
where
    Ty: EdgeType,
    Ix: IndexType,
{
    fn from(graph: &petgraph::Graph<N, E, Ty, Ix>) -> Self {
        Self::from_petgraph(graph, DEFAULT_EDGE_LENGTH)
    }
}
