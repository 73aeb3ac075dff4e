//! [Breadth-first search](https://en.wikipedia.org/wiki/Breadth-first_search)
//! with distance labeling.
//!
//! # Examples
//!
//! ```
//! use digraph::DirectedGraph;
//!
//! let graph = DirectedGraph::from_edges(6, [(0, 1), (0, 2), (1, 3), (2, 4), (4, 5)])?;
//! let bfs = graph.bfs(0)?;
//!
//! let distances = bfs.iter().map(|record| record.distance).collect::<Vec<_>>();
//! assert_eq!(distances, [Some(0), Some(1), Some(1), Some(2), Some(2), Some(3)]);
//!
//! let path = bfs.reconstruct(5).collect::<Vec<_>>();
//! assert_eq!(path, [4, 2, 0]);
//! # Ok::<(), digraph::core::Error>(())
//! ```

use std::{collections::VecDeque, ops::Index, slice};

use fixedbitset::FixedBitSet;

use crate::{core::Error, graph::DirectedGraph};

/// Result of breadth-first search for a single vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BfsRecord {
    /// Whether the vertex was reached from the source.
    pub visited: bool,
    /// The vertex from which this vertex was discovered. `None` for the source
    /// and for unreached vertices.
    pub parent: Option<usize>,
    /// Number of edges on a shortest path from the source. `None` (infinity)
    /// for unreached vertices.
    pub distance: Option<usize>,
}

/// Records of a breadth-first search, one for each vertex of the graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BfsRecords {
    source: usize,
    records: Vec<BfsRecord>,
}

impl BfsRecords {
    /// Source vertex where the search was started.
    pub fn source(&self) -> usize {
        self.source
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, vertex: usize) -> Option<&BfsRecord> {
        self.records.get(vertex)
    }

    /// Returns the distance from the source to the given vertex, or `None` if
    /// the vertex is unreachable or does not exist.
    pub fn distance(&self, vertex: usize) -> Option<usize> {
        self.get(vertex).and_then(|record| record.distance)
    }

    pub fn is_reachable(&self, vertex: usize) -> bool {
        self.get(vertex).is_some_and(|record| record.visited)
    }

    /// Returns an iterator over vertices on the shortest path between the
    /// given vertex and the source, in this order.
    ///
    /// The given vertex itself is not included, the source is (unless it is
    /// the given vertex). The iterator is empty if the vertex was not reached.
    pub fn reconstruct(&self, to: usize) -> PathReconstruction<'_> {
        PathReconstruction {
            curr: to,
            records: &self.records,
        }
    }

    pub fn iter(&self) -> slice::Iter<'_, BfsRecord> {
        self.records.iter()
    }

    pub fn as_slice(&self) -> &[BfsRecord] {
        &self.records
    }

    pub fn into_vec(self) -> Vec<BfsRecord> {
        self.records
    }
}

impl Index<usize> for BfsRecords {
    type Output = BfsRecord;

    fn index(&self, index: usize) -> &Self::Output {
        &self.records[index]
    }
}

impl<'a> IntoIterator for &'a BfsRecords {
    type Item = &'a BfsRecord;
    type IntoIter = slice::Iter<'a, BfsRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

pub struct PathReconstruction<'a> {
    curr: usize,
    records: &'a [BfsRecord],
}

impl Iterator for PathReconstruction<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        self.curr = self.records.get(self.curr)?.parent?;
        Some(self.curr)
    }
}

/// Runs breadth-first search from `source` in given graph.
///
/// Fails if `source` is not a vertex of the graph.
pub fn bfs(graph: &DirectedGraph, source: usize) -> Result<BfsRecords, Error> {
    graph.check_vertex(source)?;

    let vertex_count = graph.vertex_count();

    let mut visited = FixedBitSet::with_capacity(vertex_count);
    let mut records = vec![BfsRecord::default(); vertex_count];
    let mut queue = VecDeque::new();

    visited.insert(source);
    records[source].distance = Some(0);
    queue.push_back((source, 0));

    while let Some((vertex, dist)) = queue.pop_front() {
        for &next in graph.adjacent(vertex) {
            // `put` returns the previous value.
            if visited.put(next) {
                continue;
            }

            let record = &mut records[next];
            record.parent = Some(vertex);
            record.distance = Some(dist + 1);

            queue.push_back((next, dist + 1));
        }
    }

    for vertex in visited.ones() {
        records[vertex].visited = true;
    }

    tracing::trace!(
        source,
        reached = visited.count_ones(..),
        vertex_count,
        "breadth-first search finished"
    );

    Ok(BfsRecords { source, records })
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use proptest::prelude::*;

    use super::*;
    use crate::infra::{
        proptest::graph,
        testing::{check_bfs, create_complete},
    };

    fn create_basic_graph() -> DirectedGraph {
        DirectedGraph::from_edges(6, [(0, 1), (0, 2), (1, 3), (2, 4), (4, 5)]).unwrap()
    }

    #[test]
    fn basic() {
        let graph = create_basic_graph();
        let bfs = graph.bfs(0).unwrap();

        assert_eq!(bfs.source(), 0);
        assert_eq!(bfs.len(), 6);

        let distances = bfs.iter().map(|r| r.distance.unwrap()).collect::<Vec<_>>();
        assert_eq!(distances, vec![0, 1, 1, 2, 2, 3]);

        let parents = bfs.iter().map(|r| r.parent).collect::<Vec<_>>();
        assert_eq!(
            parents,
            vec![None, Some(0), Some(0), Some(1), Some(2), Some(4)]
        );

        assert!(bfs.iter().all(|r| r.visited));
        check_bfs(&graph, &bfs).unwrap();
    }

    #[test]
    fn unreachable() {
        let graph = create_basic_graph();
        let bfs = graph.bfs(2).unwrap();

        for vertex in [0, 1, 3] {
            assert_eq!(
                bfs[vertex],
                BfsRecord {
                    visited: false,
                    parent: None,
                    distance: None,
                }
            );
            assert!(!bfs.is_reachable(vertex));
            assert_eq!(bfs.reconstruct(vertex).next(), None);
        }

        assert_eq!(bfs.distance(2), Some(0));
        assert_eq!(bfs.distance(4), Some(1));
        assert_eq!(bfs.distance(5), Some(2));
    }

    #[test]
    fn parent_follows_insertion_order() {
        // Both 1 and 2 lead to 3, but 2 is scanned first.
        let graph = DirectedGraph::from_edges(4, [(0, 2), (0, 1), (1, 3), (2, 3)]).unwrap();
        let bfs = graph.bfs(0).unwrap();

        assert_eq!(bfs[3].parent, Some(2));
        assert_eq!(bfs[3].distance, Some(2));
    }

    #[test]
    fn cycle() {
        let graph = DirectedGraph::from_edges(3, [(0, 1), (1, 2), (2, 0), (1, 1)]).unwrap();
        let bfs = graph.bfs(1).unwrap();

        assert_eq!(bfs.distance(1), Some(0));
        assert_eq!(bfs[1].parent, None);
        assert_eq!(bfs.distance(2), Some(1));
        assert_eq!(bfs.distance(0), Some(2));
        assert_eq!(bfs.reconstruct(0).collect::<Vec<_>>(), vec![2, 1]);
    }

    #[test]
    fn complete() {
        let graph = create_complete(5);
        let bfs = graph.bfs(3).unwrap();

        for vertex in 0..5 {
            let expected = if vertex == 3 { 0 } else { 1 };
            assert_eq!(bfs.distance(vertex), Some(expected));
        }

        assert_eq!(bfs.reconstruct(0).collect::<Vec<_>>(), vec![3]);
        check_bfs(&graph, &bfs).unwrap();
    }

    #[test]
    fn single_vertex() {
        let graph = DirectedGraph::new(1);
        let bfs = graph.bfs(0).unwrap();

        assert_eq!(
            bfs.into_vec(),
            vec![BfsRecord {
                visited: true,
                parent: None,
                distance: Some(0),
            }]
        );
    }

    #[test]
    fn invalid_source() {
        let graph = create_basic_graph();

        assert_matches!(
            graph.bfs(6),
            Err(Error::VertexOutOfRange {
                vertex: 6,
                vertex_count: 6
            })
        );
        assert_matches!(DirectedGraph::new(0).bfs(0), Err(Error::VertexOutOfRange { .. }));
    }

    #[test]
    fn independent_calls() {
        let mut graph = create_basic_graph();
        let before = graph.bfs(0).unwrap();

        graph.remove_edge(4, 5).unwrap();
        let after = graph.bfs(0).unwrap();

        assert_eq!(before.distance(5), Some(3));
        assert_eq!(after.distance(5), None);
    }

    proptest! {
        #[test]
        fn proptest_bfs_valid(graph in graph().max_size(48), source in any::<prop::sample::Index>()) {
            prop_assume!(graph.vertex_count() > 0);

            let bfs = graph.bfs(source.index(graph.vertex_count())).unwrap();
            check_bfs(&graph, &bfs).unwrap();
        }
    }
}
