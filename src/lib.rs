//! Directed graph over a fixed vertex set `0..n` with breadth-first search
//! (distance labeling) and depth-first search (discovery/finish timestamps and
//! topological order labeling).
//!
//! ```
//! use digraph::DirectedGraph;
//!
//! let graph: DirectedGraph = "4 3\n0 1\n1 2\n0 3\n".parse()?;
//!
//! let bfs = graph.bfs(0)?;
//! assert_eq!(bfs.distance(2), Some(2));
//!
//! let dfs = graph.dfs();
//! assert_eq!(dfs.topological_sort(), [0, 3, 1, 2]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod core;
pub mod graph;
pub mod infra;
pub mod visit;

pub use crate::{core::Error, graph::DirectedGraph};

pub mod prelude {
    #[doc(hidden)]
    pub use crate::{
        core::Error,
        graph::DirectedGraph,
        visit::{BfsRecord, BfsRecords, DfsRecord, DfsRecords},
    };
}
