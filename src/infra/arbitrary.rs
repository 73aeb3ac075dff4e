use std::fmt;

use arbitrary::{Arbitrary, Unstructured};

use crate::{core::Error, graph::DirectedGraph};

/// Index reduced modulo the vertex count of the graph when applied, so that
/// most of the generated operations hit existing vertices.
#[derive(Debug, Arbitrary, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Index(pub usize);

impl Index {
    pub fn get(&self, m: usize) -> Option<usize> {
        if m > 0 {
            Some(self.0 % m)
        } else {
            None
        }
    }
}

#[derive(Debug, Arbitrary, Clone, PartialEq, Eq)]
pub enum MutOp {
    AddEdge(Index, Index),
    RemoveEdge(Index, Index),
    /// Endpoint taken as is, without the modulo reduction.
    AddEdgeRaw(usize, usize),
    ClearEdges,
}

#[derive(Debug, PartialEq, Eq)]
pub enum MutOpResult {
    AddEdge(Result<bool, Error>),
    RemoveEdge(Result<(), Error>),
    ClearEdges,
}

impl MutOp {
    pub fn apply(self, graph: &mut DirectedGraph) -> MutOpResult {
        let n = graph.vertex_count();

        match self {
            MutOp::AddEdge(src, dst) => {
                let src = src.get(n).unwrap_or_default();
                let dst = dst.get(n).unwrap_or_default();
                MutOpResult::AddEdge(graph.add_edge(src, dst))
            }
            MutOp::RemoveEdge(src, dst) => {
                let src = src.get(n).unwrap_or_default();
                let dst = dst.get(n).unwrap_or_default();
                MutOpResult::RemoveEdge(graph.remove_edge(src, dst))
            }
            MutOp::AddEdgeRaw(src, dst) => MutOpResult::AddEdge(graph.add_edge(src, dst)),
            MutOp::ClearEdges => {
                graph.clear_edges();
                MutOpResult::ClearEdges
            }
        }
    }
}

/// Vertex count of a graph and a sequence of mutations to apply on it.
pub struct MutOpsSeq {
    pub vertex_count: usize,
    pub ops: Vec<MutOp>,
}

impl IntoIterator for MutOpsSeq {
    type Item = MutOp;
    type IntoIter = std::vec::IntoIter<MutOp>;

    fn into_iter(self) -> Self::IntoIter {
        self.ops.into_iter()
    }
}

impl MutOpsSeq {
    pub fn graph(&self) -> DirectedGraph {
        DirectedGraph::new(self.vertex_count)
    }

    /// Applies the operations while printing them as Rust code, which can then
    /// be pasted into a test.
    pub fn replay(self, graph: &mut DirectedGraph) {
        println!("let mut graph = DirectedGraph::new({});", graph.vertex_count());
        println!();

        for op in self {
            let n = graph.vertex_count();

            match &op {
                MutOp::AddEdge(src, dst) => println!(
                    "graph.add_edge({}, {});",
                    src.get(n).unwrap_or_default(),
                    dst.get(n).unwrap_or_default()
                ),
                MutOp::RemoveEdge(src, dst) => println!(
                    "graph.remove_edge({}, {});",
                    src.get(n).unwrap_or_default(),
                    dst.get(n).unwrap_or_default()
                ),
                MutOp::AddEdgeRaw(src, dst) => println!("graph.add_edge({src}, {dst});"),
                MutOp::ClearEdges => println!("graph.clear_edges();"),
            }

            op.apply(graph);
        }

        println!();
        println!("check_consistency(&graph).unwrap();");
    }
}

impl<'a> Arbitrary<'a> for MutOpsSeq {
    fn arbitrary(u: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
        let vertex_count: usize = u.int_in_range(0..=64)?;
        let ops: Vec<MutOp> = u.arbitrary_iter()?.collect::<arbitrary::Result<_>>()?;

        Ok(Self { vertex_count, ops })
    }
}

impl fmt::Debug for MutOpsSeq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "MutOpsSeq {{")?;
        writeln!(f, "    vertex_count: {},", self.vertex_count)?;
        writeln!(f, "    ops: vec![")?;

        for op in self.ops.iter() {
            writeln!(f, "        MutOp::{:?},", op)?;
        }

        writeln!(f, "    ],")?;
        writeln!(f, "}}")?;
        writeln!(f, ".replay(&mut graph);")?;
        writeln!(f)?;
        writeln!(f, "// use `cargo test fuzz_replay_mut_ops_seq`")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::testing::{check_bfs, check_consistency, check_dfs};

    #[test]
    fn index_get() {
        assert_eq!(Index(7).get(3), Some(1));
        assert_eq!(Index(7).get(0), None);
    }

    #[test]
    fn apply_results() {
        let mut graph = DirectedGraph::new(2);

        assert_eq!(
            MutOp::AddEdge(Index(0), Index(3)).apply(&mut graph),
            MutOpResult::AddEdge(Ok(true))
        );
        assert_eq!(
            MutOp::AddEdge(Index(2), Index(1)).apply(&mut graph),
            MutOpResult::AddEdge(Ok(false))
        );
        assert_eq!(
            MutOp::RemoveEdge(Index(1), Index(0)).apply(&mut graph),
            MutOpResult::RemoveEdge(Err(Error::EdgeNotFound { src: 1, dst: 0 }))
        );
        assert_eq!(
            MutOp::AddEdgeRaw(0, 2).apply(&mut graph),
            MutOpResult::AddEdge(Err(Error::VertexOutOfRange {
                vertex: 2,
                vertex_count: 2
            }))
        );
        assert_eq!(
            MutOp::RemoveEdge(Index(0), Index(1)).apply(&mut graph),
            MutOpResult::RemoveEdge(Ok(()))
        );
    }

    #[test]
    fn arbitrary_seq() {
        let data = (0..=255u8).cycle().take(4096).collect::<Vec<_>>();
        let mut u = Unstructured::new(&data);

        let seq = MutOpsSeq::arbitrary(&mut u).unwrap();
        let mut graph = seq.graph();

        for op in seq {
            op.apply(&mut graph);
            check_consistency(&graph).unwrap();
        }

        check_dfs(&graph, &graph.dfs()).unwrap();
        if graph.vertex_count() > 0 {
            check_bfs(&graph, &graph.bfs(0).unwrap()).unwrap();
        }
    }

    #[test]
    fn fuzz_replay_mut_ops_seq() {
        let mut graph = DirectedGraph::new(3);

        MutOpsSeq {
            vertex_count: 3,
            ops: vec![
                MutOp::AddEdge(Index(0), Index(1)),
                MutOp::AddEdge(Index(4), Index(2)),
                MutOp::RemoveEdge(Index(3), Index(1)),
                MutOp::AddEdge(Index(2), Index(2)),
            ],
        }
        .replay(&mut graph);

        check_consistency(&graph).unwrap();
        assert_eq!(graph.edges().collect::<Vec<_>>(), vec![(1, 2), (2, 2)]);
    }
}
