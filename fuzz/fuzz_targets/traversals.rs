#![no_main]

use libfuzzer_sys::fuzz_target;

use digraph::infra::{
    arbitrary::MutOpsSeq,
    testing::{check_bfs, check_dfs},
};

fuzz_target!(|ops: MutOpsSeq| {
    let mut graph = ops.graph();

    for op in ops {
        op.apply(&mut graph);
    }

    check_dfs(&graph, &graph.dfs())
        .as_ref()
        .map_err(ToString::to_string)
        .unwrap();

    for source in 0..graph.vertex_count() {
        let bfs = graph.bfs(source).unwrap();
        check_bfs(&graph, &bfs)
            .as_ref()
            .map_err(ToString::to_string)
            .unwrap();
    }
});
