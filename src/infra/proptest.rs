use proptest::{
    collection::vec,
    prelude::*,
    strategy::{NewTree, ValueTree},
    test_runner::TestRunner,
};

use crate::graph::DirectedGraph;

/// Strategy generating random directed graphs.
///
/// Configured in builder style, as in `graph().max_size(100).acyclic()`.
pub fn graph() -> GraphStrategy {
    GraphStrategy::new()
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrategyParams {
    max_size: usize,
    acyclic: bool,
    allow_loops: bool,
    density: f32,
}

impl Default for StrategyParams {
    fn default() -> Self {
        Self {
            max_size: 32,
            acyclic: false,
            allow_loops: false,
            density: 0.25,
        }
    }
}

impl StrategyParams {
    /// Maximum number of vertices.
    pub fn max_size(self, max_size: usize) -> Self {
        Self { max_size, ..self }
    }

    /// Generate only graphs without cycles. Implies no self-loops.
    pub fn acyclic(self) -> Self {
        Self {
            acyclic: true,
            allow_loops: false,
            ..self
        }
    }

    pub fn allow_loops(self) -> Self {
        Self {
            allow_loops: !self.acyclic,
            ..self
        }
    }

    /// Maximum ratio of generated edges to `n * n`. The actual ratio is lower
    /// as duplicate edges are discarded.
    pub fn density(self, density: f32) -> Self {
        Self {
            density: density.clamp(0.0, 1.0),
            ..self
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct GraphStrategy {
    params: StrategyParams,
}

macro_rules! delegate_builder_fn {
    ($name:ident$(, $param:ident: $param_type:ty)*) => {
        #[doc = concat!("See [StrategyParams::", stringify!($name), "](StrategyParams::", stringify!($name), ") for details.")]
        pub fn $name(self, $($param: $param_type),*) -> Self {
            Self {
                params: self.params.$name($($param,)*),
            }
        }
    }
}

impl GraphStrategy {
    pub fn new() -> Self {
        Self::with_params(StrategyParams::default())
    }

    pub fn with_params(params: StrategyParams) -> Self {
        Self { params }
    }

    delegate_builder_fn!(max_size, max_size: usize);
    delegate_builder_fn!(acyclic);
    delegate_builder_fn!(allow_loops);
    delegate_builder_fn!(density, density: f32);

    fn build(&self) -> BoxedStrategy<DirectedGraph> {
        let params = self.params;

        (0..=params.max_size)
            .prop_flat_map(move |n| {
                let max_edges = if n == 0 {
                    0
                } else {
                    ((n * n) as f32 * params.density).ceil() as usize
                };

                // With no vertices, the ranges would be empty. No edges are
                // generated in that case anyway.
                let endpoint = 0..n.max(1);
                let edges = vec((endpoint.clone(), endpoint), 0..=max_edges);
                let labels = Just((0..n).collect::<Vec<_>>()).prop_shuffle();

                (Just(n), edges, labels)
            })
            .prop_map(move |(n, edges, labels)| {
                let mut graph = DirectedGraph::new(n);

                for (u, v) in edges {
                    if u == v && !params.allow_loops {
                        continue;
                    }

                    // Orienting edges along increasing index gives a DAG, the
                    // shuffled labels then hide the order.
                    let (u, v) = if params.acyclic {
                        (u.min(v), u.max(v))
                    } else {
                        (u, v)
                    };

                    graph
                        .add_edge(labels[u], labels[v])
                        .expect("endpoints are generated in range");
                }

                graph
            })
            .boxed()
    }
}

impl Strategy for GraphStrategy {
    type Tree = Box<dyn ValueTree<Value = DirectedGraph>>;
    type Value = DirectedGraph;

    fn new_tree(&self, runner: &mut TestRunner) -> NewTree<Self> {
        self.build().new_tree(runner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::testing::{check_consistency, AsDot};

    proptest! {
        #[test]
        fn graph_max_size(graph in graph().max_size(10)) {
            prop_assert!(graph.vertex_count() <= 10);
            check_consistency(&graph).unwrap();
        }

        #[test]
        fn graph_no_loops(graph in graph().density(0.8)) {
            for (u, v) in graph.edges() {
                prop_assert_ne!(u, v, "{:?}", AsDot(&graph));
            }
        }

        #[test]
        fn graph_acyclic(graph in graph().acyclic().density(0.5)) {
            // The DFS labels form a topological order if and only if the graph
            // is acyclic.
            let dfs = graph.dfs();

            for (u, v) in graph.edges() {
                prop_assert!(
                    dfs[u].topological_order < dfs[v].topological_order,
                    "{:?}",
                    AsDot(&graph)
                );
            }
        }
    }
}
