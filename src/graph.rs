//! Directed graph over a fixed vertex set, stored as adjacency lists.
//!
//! The vertices are the integers `0..n` where `n` is given at construction
//! time. The vertex set never changes afterwards, only the edges do.
//!
//! # Examples
//!
//! ```
//! use digraph::DirectedGraph;
//!
//! let mut graph = DirectedGraph::new(4);
//!
//! graph.add_edge(0, 1)?;
//! graph.add_edge(1, 2)?;
//! graph.add_edge(0, 3)?;
//!
//! assert!(graph.has_edge(0, 1)?);
//! assert!(!graph.has_edge(1, 0)?);
//!
//! let bfs = graph.bfs(0)?;
//! assert_eq!(bfs[2].distance, Some(2));
//! # Ok::<(), digraph::core::Error>(())
//! ```

use std::{collections::TryReserveError, iter::FusedIterator, slice};

use crate::{
    core::Error,
    visit::{bfs, dfs, BfsRecords, DfsRecords},
};

/// Directed graph with vertices `0..n` and no duplicate edges.
///
/// Outgoing neighbors of each vertex are kept in the order in which the edges
/// were added. This order is observable in the traversals.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct DirectedGraph {
    adjacency: Vec<Vec<usize>>,
}

impl DirectedGraph {
    /// Creates a graph with `vertex_count` vertices and no edges.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); vertex_count],
        }
    }

    /// Creates a graph with `vertex_count` vertices and no edges, failing
    /// instead of panicking if the vertex storage cannot be allocated.
    pub fn try_new(vertex_count: usize) -> Result<Self, TryReserveError> {
        let mut adjacency = Vec::new();
        adjacency.try_reserve_exact(vertex_count)?;
        adjacency.resize_with(vertex_count, Vec::new);

        Ok(Self { adjacency })
    }

    /// Creates a graph with `vertex_count` vertices and adds given edges in
    /// order.
    ///
    /// Returns the first error encountered, in which case no graph is built.
    pub fn from_edges<I>(vertex_count: usize, edges: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut graph = Self::new(vertex_count);
        graph.extend_with_edges(edges)?;
        Ok(graph)
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    /// Returns `true` if `u` is a vertex of the graph.
    pub fn has_vertex(&self, u: usize) -> bool {
        u < self.adjacency.len()
    }

    /// Returns `true` if there is an edge from `u` to `v`.
    ///
    /// Fails if any of the endpoints is not a vertex of the graph.
    pub fn has_edge(&self, u: usize, v: usize) -> Result<bool, Error> {
        self.check_endpoints(u, v)?;
        Ok(self.adjacency[u].contains(&v))
    }

    /// Adds an edge from `u` to `v`.
    ///
    /// Adding an edge that is already present does nothing. Returns `true` if
    /// the edge was actually inserted.
    ///
    /// Fails with [`Error::VertexOutOfRange`] if any of the endpoints is not a
    /// vertex of the graph.
    pub fn add_edge(&mut self, u: usize, v: usize) -> Result<bool, Error> {
        if self.has_edge(u, v)? {
            return Ok(false);
        }

        self.adjacency[u].push(v);
        Ok(true)
    }

    /// Removes the edge from `u` to `v`.
    ///
    /// The relative order of the remaining neighbors of `u` is preserved.
    ///
    /// Fails with [`Error::VertexOutOfRange`] if any of the endpoints is not a
    /// vertex of the graph, or with [`Error::EdgeNotFound`] if there is no such
    /// edge. Endpoints are checked first.
    pub fn remove_edge(&mut self, u: usize, v: usize) -> Result<(), Error> {
        self.check_endpoints(u, v)?;

        let neighbors = &mut self.adjacency[u];
        match neighbors.iter().position(|&w| w == v) {
            Some(pos) => {
                // Not `swap_remove`, the neighbor order must stay intact.
                neighbors.remove(pos);
                Ok(())
            }
            None => Err(Error::EdgeNotFound { src: u, dst: v }),
        }
    }

    /// Adds all edges from the iterator in order, stopping at the first
    /// error. Edges added before the error stay in the graph.
    pub fn extend_with_edges<I>(&mut self, edges: I) -> Result<(), Error>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        for (u, v) in edges {
            self.add_edge(u, v)?;
        }

        Ok(())
    }

    /// Removes all edges. The vertices are kept.
    pub fn clear_edges(&mut self) {
        for neighbors in self.adjacency.iter_mut() {
            neighbors.clear();
        }
    }

    /// Outgoing neighbors of `u` in the order of edge insertion.
    pub fn neighbors(&self, u: usize) -> Result<&[usize], Error> {
        self.check_vertex(u)?;
        Ok(&self.adjacency[u])
    }

    pub fn out_degree(&self, u: usize) -> Result<usize, Error> {
        self.neighbors(u).map(<[usize]>::len)
    }

    /// Iterator over all edges as `(src, dst)` pairs, grouped by the source
    /// vertex in increasing order.
    pub fn edges(&self) -> EdgesIter<'_> {
        EdgesIter {
            src: 0,
            current: [].iter(),
            rest: self.adjacency.iter(),
        }
    }

    /// Runs [breadth-first search](crate::visit::bfs) from `source`.
    pub fn bfs(&self, source: usize) -> Result<BfsRecords, Error> {
        bfs::bfs(self, source)
    }

    /// Runs [depth-first search](crate::visit::dfs) over the whole graph.
    pub fn dfs(&self) -> DfsRecords {
        dfs::dfs(self)
    }

    pub(crate) fn check_vertex(&self, u: usize) -> Result<(), Error> {
        if self.has_vertex(u) {
            Ok(())
        } else {
            Err(Error::VertexOutOfRange {
                vertex: u,
                vertex_count: self.vertex_count(),
            })
        }
    }

    fn check_endpoints(&self, u: usize, v: usize) -> Result<(), Error> {
        self.check_vertex(u)?;
        self.check_vertex(v)
    }

    // Infallible access for the traversals which validate their input up
    // front.
    pub(crate) fn adjacent(&self, u: usize) -> &[usize] {
        &self.adjacency[u]
    }
}

impl Clone for DirectedGraph {
    fn clone(&self) -> Self {
        Self {
            adjacency: self.adjacency.clone(),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.adjacency.clone_from(&source.adjacency);
    }
}

pub struct EdgesIter<'a> {
    src: usize,
    current: slice::Iter<'a, usize>,
    rest: slice::Iter<'a, Vec<usize>>,
}

impl Iterator for EdgesIter<'_> {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(&dst) = self.current.next() {
                // `src` is incremented when `current` is replaced, hence -1.
                return Some((self.src - 1, dst));
            }

            self.current = self.rest.next()?.iter();
            self.src += 1;
        }
    }
}

impl FusedIterator for EdgesIter<'_> {}
