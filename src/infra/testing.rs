use std::{collections::HashSet, fmt, hash::BuildHasherDefault};

use rustc_hash::FxHashSet;
use thiserror::Error;

use crate::{
    graph::DirectedGraph,
    visit::{BfsRecords, DfsRecords},
};

use super::export::Dot;

/// Creates a graph with an edge between every ordered pair of distinct
/// vertices.
pub fn create_complete(vertex_count: usize) -> DirectedGraph {
    let mut graph = DirectedGraph::new(vertex_count);

    for u in 0..vertex_count {
        for v in 0..vertex_count {
            if u != v {
                graph.add_edge(u, v).expect("vertices exist");
            }
        }
    }

    graph
}

/// Creates a graph `0 -> 1 -> ... -> n - 1`.
pub fn create_path(vertex_count: usize) -> DirectedGraph {
    DirectedGraph::from_edges(vertex_count, (1..vertex_count).map(|v| (v - 1, v)))
        .expect("vertices exist")
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConsistencyCheckError {
    #[error("neighbor {1} of vertex {0} is not a vertex")]
    NeighborOutOfRange(usize, usize),
    #[error("edge {0} -> {1} is present multiple times")]
    DuplicateEdge(usize, usize),
    #[error("edges iterator count ({0}) is not equal to edge count ({1})")]
    EdgesEdgeCountMismatch(usize, usize),
    #[error("sum of out degrees ({0}) is not equal to edge count ({1})")]
    DegreeSumMismatch(usize, usize),
    #[error("edge {0} -> {1} is listed but not found")]
    EdgeNotFound(usize, usize),
}

pub fn check_consistency(graph: &DirectedGraph) -> Result<(), ConsistencyCheckError> {
    let vertex_count = graph.vertex_count();
    let edge_count = graph.edge_count();

    let mut seen: FxHashSet<(usize, usize)> =
        HashSet::with_capacity_and_hasher(edge_count, BuildHasherDefault::default());

    for (u, v) in graph.edges() {
        if v >= vertex_count {
            return Err(ConsistencyCheckError::NeighborOutOfRange(u, v));
        }

        if !seen.insert((u, v)) {
            return Err(ConsistencyCheckError::DuplicateEdge(u, v));
        }

        if graph.has_edge(u, v) != Ok(true) {
            return Err(ConsistencyCheckError::EdgeNotFound(u, v));
        }
    }

    if seen.len() != edge_count {
        return Err(ConsistencyCheckError::EdgesEdgeCountMismatch(
            seen.len(),
            edge_count,
        ));
    }

    let degree_sum = (0..vertex_count)
        .map(|u| graph.out_degree(u).unwrap_or_default())
        .sum::<usize>();

    if degree_sum != edge_count {
        return Err(ConsistencyCheckError::DegreeSumMismatch(
            degree_sum, edge_count,
        ));
    }

    Ok(())
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum TraversalCheckError {
    #[error("record count ({0}) is not equal to vertex count ({1})")]
    RecordCountMismatch(usize, usize),
    #[error("source {0} has invalid record")]
    InvalidSource(usize),
    #[error("vertex {0} is visited but its distance is unknown, or vice versa")]
    VisitedDistanceMismatch(usize),
    #[error("unvisited vertex {0} has a parent")]
    UnvisitedWithParent(usize),
    #[error("vertex {0} has parent {1}, but there is no such edge or the parent is not visited")]
    InvalidParent(usize, usize),
    #[error("visited vertex {0} has no parent")]
    MissingParent(usize),
    #[error("distance of vertex {0} is not one more than distance of its parent")]
    ParentDistance(usize),
    #[error("edge {0} -> {1} leads to unvisited vertex or shortens the distance")]
    NotShortest(usize, usize),
    #[error("vertex {0} was not visited")]
    NotVisited(usize),
    #[error("discovery time of vertex {0} is not less than its finish time")]
    DiscoveryAfterFinish(usize),
    #[error("timestamp {0} is used more than once or is out of range")]
    InvalidTimestamp(usize),
    #[error("intervals of vertices {0} and {1} partially overlap")]
    PartialOverlap(usize, usize),
    #[error("topological order label {0} is used more than once or is out of range")]
    InvalidOrderLabel(usize),
    #[error("order labels of vertices {0} and {1} are inconsistent with finish times")]
    OrderFinishMismatch(usize, usize),
    #[error("vertex {1} was not discovered before vertex {0} finished")]
    UnexploredNeighbor(usize, usize),
}

/// Checks that given records are a valid outcome of breadth-first search,
/// that is, the distances are shortest path lengths and the parents form a
/// shortest path tree.
pub fn check_bfs(graph: &DirectedGraph, bfs: &BfsRecords) -> Result<(), TraversalCheckError> {
    use TraversalCheckError::*;

    let vertex_count = graph.vertex_count();

    if bfs.len() != vertex_count {
        return Err(RecordCountMismatch(bfs.len(), vertex_count));
    }

    let source = bfs.source();
    let record = &bfs[source];
    if !record.visited || record.parent.is_some() || record.distance != Some(0) {
        return Err(InvalidSource(source));
    }

    for (v, record) in bfs.iter().enumerate() {
        if record.visited != record.distance.is_some() {
            return Err(VisitedDistanceMismatch(v));
        }

        if !record.visited {
            if record.parent.is_some() {
                return Err(UnvisitedWithParent(v));
            }
            continue;
        }

        if v == source {
            continue;
        }

        let parent = record.parent.ok_or(MissingParent(v))?;

        if !bfs.is_reachable(parent) || graph.has_edge(parent, v) != Ok(true) {
            return Err(InvalidParent(v, parent));
        }

        if bfs.distance(parent).map(|d| d + 1) != record.distance {
            return Err(ParentDistance(v));
        }
    }

    for (u, v) in graph.edges() {
        if let Some(dist) = bfs.distance(u) {
            match bfs.distance(v) {
                Some(next) if next <= dist + 1 => {}
                _ => return Err(NotShortest(u, v)),
            }
        }
    }

    Ok(())
}

/// Checks that given records are a valid outcome of depth-first search over
/// the entire graph.
pub fn check_dfs(graph: &DirectedGraph, dfs: &DfsRecords) -> Result<(), TraversalCheckError> {
    use TraversalCheckError::*;

    let vertex_count = graph.vertex_count();

    if dfs.len() != vertex_count {
        return Err(RecordCountMismatch(dfs.len(), vertex_count));
    }

    let mut timestamps = vec![false; 2 * vertex_count + 1];
    let mut labels = vec![false; vertex_count + 1];

    for (v, record) in dfs.iter().enumerate() {
        if !record.visited {
            return Err(NotVisited(v));
        }

        if record.discovery >= record.finish {
            return Err(DiscoveryAfterFinish(v));
        }

        for time in [record.discovery, record.finish] {
            match timestamps.get_mut(time) {
                Some(used) if time > 0 && !*used => *used = true,
                _ => return Err(InvalidTimestamp(time)),
            }
        }

        match labels.get_mut(record.topological_order) {
            Some(used) if record.topological_order > 0 && !*used => *used = true,
            _ => return Err(InvalidOrderLabel(record.topological_order)),
        }

        if let Some(parent) = record.parent {
            if graph.has_edge(parent, v) != Ok(true) || !dfs.is_descendant(v, parent) {
                return Err(InvalidParent(v, parent));
            }
        }
    }

    for (u, a) in dfs.iter().enumerate() {
        for (v, b) in dfs.iter().enumerate().skip(u + 1) {
            let disjoint = a.finish < b.discovery || b.finish < a.discovery;
            let nested = dfs.is_descendant(u, v) || dfs.is_descendant(v, u);

            if !disjoint && !nested {
                return Err(PartialOverlap(u, v));
            }

            if (a.finish > b.finish) != (a.topological_order < b.topological_order) {
                return Err(OrderFinishMismatch(u, v));
            }
        }
    }

    for (u, v) in graph.edges() {
        if dfs[v].discovery > dfs[u].finish {
            return Err(UnexploredNeighbor(u, v));
        }
    }

    Ok(())
}

/// Formats the graph in DOT language when debug printed.
pub struct AsDot<'a>(pub &'a DirectedGraph);

impl fmt::Debug for AsDot<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&Dot::default().to_string(self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_helpers() {
        let complete = create_complete(4);
        assert_eq!(complete.edge_count(), 12);
        check_consistency(&complete).unwrap();

        let path = create_path(4);
        assert_eq!(path.edges().collect::<Vec<_>>(), vec![(0, 1), (1, 2), (2, 3)]);
        assert_eq!(create_path(0).vertex_count(), 0);
    }

    #[test]
    fn check_bfs_detects_wrong_records() {
        let graph = create_path(3);
        let bfs = graph.bfs(0).unwrap();
        check_bfs(&graph, &bfs).unwrap();

        // Records from a different graph.
        let other = DirectedGraph::from_edges(3, [(0, 2), (2, 1)]).unwrap();
        assert!(check_bfs(&graph, &other.bfs(0).unwrap()).is_err());
    }

    #[test]
    fn check_dfs_detects_wrong_records() {
        let graph = create_path(3);
        check_dfs(&graph, &graph.dfs()).unwrap();

        let other = DirectedGraph::from_edges(3, [(0, 2), (2, 1)]).unwrap();
        assert!(check_dfs(&graph, &other.dfs()).is_err());
    }

    #[test]
    fn as_dot() {
        let graph = create_path(2);
        let formatted = format!("{:?}", AsDot(&graph));

        assert!(formatted.contains("v0 -> v1;"));
    }
}
