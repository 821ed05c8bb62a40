//! Property-based invariant tests for the graph store.
//!
//! Random operation sequences drive the public mutation surface, then each
//! property checks what must hold for every reachable state: serialization
//! round-trips losslessly, cleanup is idempotent, toggling is an involution,
//! and the edge/state collections stay consistent with the node set.

use proptest::prelude::{prop_assert, prop_assert_eq, prop_oneof, Just, Strategy};
use proptest::proptest;
use proptest::test_runner::Config as ProptestConfig;

use lumigraph_core::{GraphStore, NodeId};

const PROP_CASES: u32 = 128;

/// One randomized mutation. Node references are indexes into the current
/// insertion order, resolved modulo the node count at application time so
/// every generated op stays meaningful as the graph shrinks and grows.
#[derive(Debug, Clone)]
enum Op {
    Add(i64, i64),
    Move(usize, i64, i64),
    Remove(usize),
    Connect(usize, usize),
    Disconnect(usize, usize),
    Toggle(usize),
    ResetAll,
    Cleanup,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    let coord = 0..500_i64;
    let idx = 0..16_usize;
    prop_oneof![
        (coord.clone(), coord.clone()).prop_map(|(x, y)| Op::Add(x, y)),
        (idx.clone(), coord.clone(), coord).prop_map(|(i, x, y)| Op::Move(i, x, y)),
        idx.clone().prop_map(Op::Remove),
        (idx.clone(), idx.clone()).prop_map(|(i, j)| Op::Connect(i, j)),
        (idx.clone(), idx.clone()).prop_map(|(i, j)| Op::Disconnect(i, j)),
        idx.prop_map(Op::Toggle),
        Just(Op::ResetAll),
        Just(Op::Cleanup),
    ]
}

fn node_at(store: &GraphStore, idx: usize) -> Option<NodeId> {
    let count = store.node_count();
    if count == 0 {
        return None;
    }
    store.nodes().nth(idx % count).map(|(id, _)| id)
}

fn apply(store: &mut GraphStore, ops: &[Op]) {
    for op in ops {
        match *op {
            Op::Add(x, y) => {
                store.add_node(x, y);
            }
            Op::Move(i, x, y) => {
                if let Some(id) = node_at(store, i) {
                    store.move_node(id, x, y);
                }
            }
            Op::Remove(i) => {
                if let Some(id) = node_at(store, i) {
                    store.remove_node(id);
                }
            }
            Op::Connect(i, j) => {
                if let (Some(a), Some(b)) = (node_at(store, i), node_at(store, j)) {
                    store.add_edge(a, b);
                }
            }
            Op::Disconnect(i, j) => {
                if let (Some(a), Some(b)) = (node_at(store, i), node_at(store, j)) {
                    store.remove_edge(a, b);
                }
            }
            Op::Toggle(i) => {
                if let Some(id) = node_at(store, i) {
                    store.toggle(id);
                }
            }
            Op::ResetAll => store.reset_all(),
            Op::Cleanup => store.cleanup_edges(),
        }
    }
}

fn ops_strategy() -> impl Strategy<Value = Vec<Op>> {
    proptest::collection::vec(op_strategy(), 0..48)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(PROP_CASES))]

    #[test]
    fn serialize_round_trip_is_lossless(ops in ops_strategy()) {
        let mut store = GraphStore::new();
        apply(&mut store, &ops);

        let json = store.serialize().unwrap();
        let mut restored = GraphStore::new();
        restored.deserialize(&json).unwrap();
        prop_assert_eq!(store.snapshot(), restored.snapshot());
    }

    #[test]
    fn cleanup_is_idempotent(ops in ops_strategy()) {
        let mut store = GraphStore::new();
        apply(&mut store, &ops);

        store.cleanup_edges();
        let first = store.snapshot();
        store.cleanup_edges();
        prop_assert_eq!(first, store.snapshot());
    }

    #[test]
    fn toggle_twice_is_identity(ops in ops_strategy(), pick in 0..16_usize) {
        let mut store = GraphStore::new();
        apply(&mut store, &ops);

        let before = store.snapshot();
        if let Some(id) = node_at(&store, pick) {
            store.toggle(id);
            store.toggle(id);
        }
        prop_assert_eq!(before, store.snapshot());
    }

    #[test]
    fn collections_stay_consistent(ops in ops_strategy()) {
        let mut store = GraphStore::new();
        apply(&mut store, &ops);

        // Every edge endpoint is a live node and every node has a state.
        for edge in store.edges() {
            prop_assert!(store.position(edge.a()).is_some());
            prop_assert!(store.position(edge.b()).is_some());
        }
        for (id, _) in store.nodes() {
            prop_assert!(store.state(id).is_some());
        }
    }

    #[test]
    fn cleanup_leaves_no_symmetric_duplicates(ops in ops_strategy()) {
        let mut store = GraphStore::new();
        apply(&mut store, &ops);
        store.cleanup_edges();

        let edges = store.edges();
        for (i, e1) in edges.iter().enumerate() {
            for e2 in &edges[i + 1..] {
                prop_assert!(!e1.connects(e2.a(), e2.b()));
            }
        }
    }
}
