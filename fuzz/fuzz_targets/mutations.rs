#![no_main]

use libfuzzer_sys::fuzz_target;

use digraph::infra::{arbitrary::MutOpsSeq, testing::check_consistency};

fuzz_target!(|ops: MutOpsSeq| {
    let mut graph = ops.graph();

    for op in ops {
        op.apply(&mut graph);
        check_consistency(&graph)
            .as_ref()
            .map_err(ToString::to_string)
            .unwrap();
    }
});
