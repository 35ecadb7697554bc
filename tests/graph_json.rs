use springgraph::prelude::*;

const SMALL: &str = r#"{
    "vertices": [
        { "id": "A", "fill": "indigo", "label": "A" },
        { "id": "B", "fill": "violet", "label": "B" },
        { "id": "C" }
    ],
    "edges": [
        { "id": "AB", "source": "A", "target": "B", "length": 30 },
        { "id": "AC", "source": "A", "target": "C", "length": 30 },
        { "id": "BC", "source": "B", "target": "C", "length": 30 }
    ]
}"#;

#[test]
fn parses_graph_description() {
    let graph: Graph = serde_json::from_str(SMALL).unwrap();

    assert_eq!(graph.vertices.len(), 3);
    assert_eq!(graph.vertices[0].fill.as_deref(), Some("indigo"));
    assert_eq!(graph.vertices[2].label, None);
    assert_eq!(graph.edges[2], GraphEdge::new("BC", "B", "C", 30.0));
}

#[test]
fn demo_graph_survives_json() {
    let json = serde_json::to_string(&Graph::demo()).unwrap();
    let graph: Graph = serde_json::from_str(&json).unwrap();
    assert_eq!(graph, Graph::demo());
}

#[test]
fn parsed_graph_runs() {
    let graph: Graph = serde_json::from_str(SMALL).unwrap();
    let mut sim = Simulator::builder()
        .world_size(100.0, 100.0)
        .seed(8)
        .build(graph)
        .unwrap();

    for _ in 0..100 {
        sim.tick();
    }

    let positions = sim.positions();
    let ids: Vec<&str> = positions.keys().map(VertexId::as_str).collect();
    assert_eq!(ids, ["A", "B", "C"]);
    assert!(positions.values().all(|p| p.is_finite()));
}

#[test]
fn world_size_parses() {
    let world: WorldSize = serde_json::from_str(r#"{ "width": 400, "height": 300 }"#).unwrap();
    assert_eq!(world, WorldSize::new(400.0, 300.0).unwrap());
}
