//! Implementations of graph traversals.
//!
//! Both traversals are **iterative**, that is, they don't use recursion. The
//! depth of the traversal is therefore not limited by the size of the program
//! stack.
//!
//! Each call allocates a fresh collection of per-vertex records which is
//! returned to the caller. No traversal state survives between calls.
//!
//! Neighbors of a vertex are discovered in the order in which the
//! corresponding edges were added to the graph.

pub mod bfs;
pub mod dfs;

#[doc(inline)]
pub use self::{
    bfs::{BfsRecord, BfsRecords},
    dfs::{DfsRecord, DfsRecords},
};
