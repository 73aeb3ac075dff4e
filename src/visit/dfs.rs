//! [Depth-first search](https://en.wikipedia.org/wiki/Depth-first_search) with
//! discovery/finish timestamps and topological order labeling.
//!
//! The search covers the entire graph. Whenever a DFS tree is finished, it is
//! restarted from the unvisited vertex with the smallest index.
//!
//! The timestamps come from a single counter shared by the whole search which
//! is incremented on every discovery and every finish. The first timestamp is
//! 1, the last one is `2 * n`.
//!
//! Topological order labels are assigned in `n..=1` as the vertices finish. If
//! the graph is acyclic, sorting the vertices by their label gives a
//! [topological order](https://en.wikipedia.org/wiki/Topological_sorting). If
//! the graph contains a cycle, the labels still form a permutation of `1..=n`,
//! but some edge goes against the order.
//!
//! # Examples
//!
//! ```
//! use digraph::DirectedGraph;
//!
//! let graph = DirectedGraph::from_edges(
//!     6,
//!     [(5, 2), (5, 0), (4, 0), (4, 1), (2, 3), (3, 1)],
//! )?;
//!
//! let dfs = graph.dfs();
//! let sorted = dfs.topological_sort();
//!
//! for (u, v) in graph.edges() {
//!     assert!(dfs[u].topological_order < dfs[v].topological_order);
//! }
//!
//! assert_eq!(sorted.len(), 6);
//! # Ok::<(), digraph::core::Error>(())
//! ```

use std::{ops::Index, slice};

use fixedbitset::FixedBitSet;

use crate::graph::DirectedGraph;

/// Result of depth-first search for a single vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DfsRecord {
    pub visited: bool,
    /// The vertex from which this vertex was discovered. `None` for roots of
    /// the DFS trees.
    pub parent: Option<usize>,
    pub discovery: usize,
    pub finish: usize,
    /// Position in `1..=n`. Smaller label means later finish.
    pub topological_order: usize,
}

/// Records of a depth-first search, one for each vertex of the graph.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DfsRecords {
    records: Vec<DfsRecord>,
}

impl DfsRecords {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, vertex: usize) -> Option<&DfsRecord> {
        self.records.get(vertex)
    }

    /// Returns the vertices sorted by their topological order label, that is,
    /// in decreasing finish time.
    ///
    /// This is a valid topological order only if the graph is acyclic.
    pub fn topological_sort(&self) -> Vec<usize> {
        let mut sorted = vec![0; self.records.len()];

        for (vertex, record) in self.records.iter().enumerate() {
            sorted[record.topological_order - 1] = vertex;
        }

        sorted
    }

    /// Returns `true` if `descendant` lies in the DFS subtree rooted at
    /// `ancestor`. Every vertex is its own descendant.
    ///
    /// Returns `false` if any of the vertices does not exist.
    pub fn is_descendant(&self, descendant: usize, ancestor: usize) -> bool {
        match (self.get(descendant), self.get(ancestor)) {
            (Some(d), Some(a)) => a.discovery <= d.discovery && d.finish <= a.finish,
            _ => false,
        }
    }

    pub fn iter(&self) -> slice::Iter<'_, DfsRecord> {
        self.records.iter()
    }

    pub fn as_slice(&self) -> &[DfsRecord] {
        &self.records
    }

    pub fn into_vec(self) -> Vec<DfsRecord> {
        self.records
    }
}

impl Index<usize> for DfsRecords {
    type Output = DfsRecord;

    fn index(&self, index: usize) -> &Self::Output {
        &self.records[index]
    }
}

impl<'a> IntoIterator for &'a DfsRecords {
    type Item = &'a DfsRecord;
    type IntoIter = slice::Iter<'a, DfsRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// A vertex on the stack together with the position of its next neighbor to be
// scanned. This is exactly the state a recursive implementation keeps in its
// call frames.
struct Frame {
    vertex: usize,
    next: usize,
}

/// Runs depth-first search over the entire graph.
pub fn dfs(graph: &DirectedGraph) -> DfsRecords {
    let vertex_count = graph.vertex_count();

    let mut visited = FixedBitSet::with_capacity(vertex_count);
    let mut records = vec![DfsRecord::default(); vertex_count];
    let mut stack: Vec<Frame> = Vec::new();

    let mut time = 0;
    let mut order = vertex_count;

    for root in 0..vertex_count {
        if visited.contains(root) {
            continue;
        }

        visited.insert(root);
        time += 1;
        records[root].discovery = time;
        stack.push(Frame {
            vertex: root,
            next: 0,
        });

        while let Some(frame) = stack.last_mut() {
            let vertex = frame.vertex;
            let neighbors = graph.adjacent(vertex);

            // Skip already visited neighbors and descend into the first
            // unvisited one, if any.
            let mut descend = None;
            while let Some(&next) = neighbors.get(frame.next) {
                frame.next += 1;

                if !visited.put(next) {
                    descend = Some(next);
                    break;
                }
            }

            match descend {
                Some(next) => {
                    time += 1;
                    let record = &mut records[next];
                    record.parent = Some(vertex);
                    record.discovery = time;

                    stack.push(Frame {
                        vertex: next,
                        next: 0,
                    });
                }
                None => {
                    time += 1;
                    let record = &mut records[vertex];
                    record.finish = time;
                    record.topological_order = order;
                    order -= 1;

                    stack.pop();
                }
            }
        }
    }

    debug_assert_eq!(order, 0);

    for record in records.iter_mut() {
        record.visited = true;
    }

    tracing::trace!(vertex_count, "depth-first search finished");

    DfsRecords { records }
}
