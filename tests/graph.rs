use std::path::PathBuf;

use primer::graph::{Graph, GraphError, GraphSnapshot};

fn load_fixture() -> GraphSnapshot {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join("course_graph.json");
    let data = std::fs::read(path).expect("fixture");
    serde_json::from_slice(&data).expect("graph snapshot")
}

#[test]
fn fixture_builds_and_counts_edges_once() {
    let graph = Graph::from_snapshot(&load_fixture()).expect("valid fixture");
    assert_eq!(graph.vertex_count(), 6);
    assert_eq!(graph.edge_count(), 5);
    assert_eq!(graph.has_edge(0, 1), Ok(true));
    assert_eq!(graph.has_edge(1, 0), Ok(true));
    assert_eq!(graph.has_edge(3, 5), Ok(false));
}

#[test]
fn traversal_orders_follow_insertion_order_of_edges() {
    let graph = Graph::from_snapshot(&load_fixture()).expect("valid fixture");
    assert_eq!(graph.bfs(0).unwrap(), vec![0, 1, 2, 3, 4, 5]);
    assert_eq!(graph.dfs(0).unwrap(), vec![0, 1, 3, 4, 2, 5]);
}

#[test]
fn traversal_skips_unreachable_vertices() {
    let mut graph = Graph::new(4);
    graph.add_edge(0, 1).unwrap();
    // 2 and 3 are isolated
    assert_eq!(graph.bfs(0).unwrap(), vec![0, 1]);
    assert_eq!(graph.dfs(2).unwrap(), vec![2]);
}

#[test]
fn remove_edge_drops_both_directions() {
    let mut graph = Graph::from_snapshot(&load_fixture()).expect("valid fixture");
    graph.remove_edge(1, 3).unwrap();
    assert_eq!(graph.has_edge(1, 3), Ok(false));
    assert_eq!(graph.has_edge(3, 1), Ok(false));
    assert_eq!(graph.edge_count(), 4);
}

#[test]
fn out_of_range_vertices_are_rejected() {
    let mut graph = Graph::new(3);
    assert_eq!(
        graph.add_edge(0, 7),
        Err(GraphError::VertexOutOfRange { vertex: 7, vertices: 3 })
    );
    assert_eq!(
        graph.bfs(3),
        Err(GraphError::VertexOutOfRange { vertex: 3, vertices: 3 })
    );
    assert!(graph.neighbours(5).is_err());
}

#[test]
fn snapshot_round_trips_through_a_file() {
    let graph = Graph::from_snapshot(&load_fixture()).expect("valid fixture");
    let dir = tempfile::TempDir::new().expect("tempdir");
    let path = dir.path().join("snapshot.json");
    let json = serde_json::to_vec_pretty(&graph.snapshot()).expect("serialize");
    std::fs::write(&path, json).expect("write");

    let data = std::fs::read(&path).expect("read back");
    let restored: GraphSnapshot = serde_json::from_slice(&data).expect("deserialize");
    assert_eq!(restored, graph.snapshot());
    let rebuilt = Graph::from_snapshot(&restored).expect("rebuild");
    assert_eq!(rebuilt.bfs(0).unwrap(), graph.bfs(0).unwrap());
}
