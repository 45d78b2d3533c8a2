//! Undirected graph over an adjacency list.
//!
//! Variables:
//!   V       = number of vertices, fixed at construction
//!   E       = number of undirected edges
//!   adj[u]  = Vec<usize> of neighbours of vertex u
//!
//! Equations:
//!   add_edge(u, v):    adj[u].push(v), adj[v].push(u),  E += 1
//!   remove_edge(u, v): drop v from adj[u] and u from adj[v]
//!   degree(u)        = |adj[u]|
//!   edge_count       = sum_u degree(u) / 2
//!
//! Every vertex argument is validated against V; an out-of-range vertex
//! is a GraphError, never a silent no-op.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("vertex {vertex} out of range (graph has {vertices} vertices)")]
    VertexOutOfRange { vertex: usize, vertices: usize },
}

pub struct Graph {
    adj: Vec<Vec<usize>>,
}

impl Graph {
    /// Create a graph with `vertices` vertices and no edges.
    pub fn new(vertices: usize) -> Self {
        Self { adj: vec![Vec::new(); vertices] }
    }

    pub fn vertex_count(&self) -> usize {
        self.adj.len()
    }

    /// Undirected edges counted once each.
    pub fn edge_count(&self) -> usize {
        self.adj.iter().map(|n| n.len()).sum::<usize>() / 2
    }

    fn check(&self, vertex: usize) -> Result<(), GraphError> {
        if vertex < self.adj.len() {
            Ok(())
        } else {
            Err(GraphError::VertexOutOfRange { vertex, vertices: self.adj.len() })
        }
    }

    /// Add the undirected edge u—v.
    pub fn add_edge(&mut self, u: usize, v: usize) -> Result<(), GraphError> {
        self.check(u)?;
        self.check(v)?;
        self.adj[u].push(v);
        self.adj[v].push(u);
        Ok(())
    }

    /// Remove one occurrence of the edge u—v from both endpoint lists.
    pub fn remove_edge(&mut self, u: usize, v: usize) -> Result<(), GraphError> {
        self.check(u)?;
        self.check(v)?;
        let had = remove_first(&mut self.adj[u], v);
        remove_first(&mut self.adj[v], u);
        if !had {
            log::debug!("remove_edge({u}, {v}): edge not present");
        }
        Ok(())
    }

    pub fn has_edge(&self, u: usize, v: usize) -> Result<bool, GraphError> {
        self.check(u)?;
        self.check(v)?;
        Ok(self.adj[u].contains(&v))
    }

    pub fn neighbours(&self, u: usize) -> Result<&[usize], GraphError> {
        self.check(u)?;
        Ok(&self.adj[u])
    }

    pub fn degree(&self, u: usize) -> Result<usize, GraphError> {
        self.check(u)?;
        Ok(self.adj[u].len())
    }

    /// Borrow the raw adjacency rows.
    pub fn as_slice(&self) -> &[Vec<usize>] {
        &self.adj
    }
}

fn remove_first(list: &mut Vec<usize>, value: usize) -> bool {
    match list.iter().position(|&x| x == value) {
        Some(pos) => {
            list.remove(pos);
            true
        }
        None => false,
    }
}
