//! Serializable edge-list form of a graph.

use serde::{Deserialize, Serialize};

use super::adj_list::{Graph, GraphError};

/// Edge-list snapshot; each undirected edge appears once with u <= v.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphSnapshot {
    pub vertices: usize,
    pub edges: Vec<(usize, usize)>,
}

impl Graph {
    pub fn snapshot(&self) -> GraphSnapshot {
        let mut edges = Vec::with_capacity(self.edge_count());
        for (u, neighbours) in self.as_slice().iter().enumerate() {
            for &v in neighbours {
                if u <= v {
                    edges.push((u, v));
                }
            }
        }
        GraphSnapshot { vertices: self.vertex_count(), edges }
    }

    pub fn from_snapshot(snapshot: &GraphSnapshot) -> Result<Self, GraphError> {
        let mut graph = Graph::new(snapshot.vertices);
        for &(u, v) in &snapshot.edges {
            graph.add_edge(u, v)?;
        }
        Ok(graph)
    }
}
