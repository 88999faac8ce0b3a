use hermes_simplify::{
    Coordinate, contraction::merge_degree_two, meters, pruning::{PruneStats, remove_stubs},
};

use crate::setup::{self, assert_pairing};

#[test]
fn test_chain_merges_into_one_edge_then_disappears() {
    //  A ---- B ---- C ---- D ---- E
    let mut network = setup::create_chain_network(&[10, 10, 10, 10]);

    let merges = merge_degree_two(&mut network);

    assert_eq!(merges, 3);
    assert_eq!(network.edge_count(), 1);
    let (edge_id, edge) = network.main_edges().next().unwrap();
    assert_eq!(edge.length(), meters!(4));
    assert_eq!(edge.visits(), 10);
    assert!(network.is_stub(edge_id));
    assert_pairing(&network);

    let stats = remove_stubs(&mut network);

    assert_eq!(stats.removed, 1);
    assert_eq!(network.edge_count(), 0);

    network.compact();
    assert_eq!(network.node_count(), 0);
}

#[test]
fn test_triangle_ring_is_left_intact() {
    let mut network = setup::create_network(&[
        (&[(0.0, 0.0), (1.0, 0.0)], 1.0, 1),
        (&[(1.0, 0.0), (0.5, 1.0)], 1.0, 1),
        (&[(0.5, 1.0), (0.0, 0.0)], 1.0, 1),
    ]);

    assert!(network.main_edges().all(|(edge, _)| !network.is_stub(edge)));

    let stats = remove_stubs(&mut network);

    assert_eq!(stats, PruneStats::default());
    assert_eq!(network.edge_count(), 3);
    assert_pairing(&network);
}

#[test]
fn test_self_loop_with_tail() {
    //  X has a loop through (0, 1) and (1, 1) plus an edge to Y
    let mut network = setup::create_network(&[
        (&[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (0.0, 0.0)], 3.0, 1),
        (&[(0.0, 0.0), (-1.0, 0.0)], 1.0, 1),
    ]);
    let x = network.node_id(&Coordinate::new(0.0, 0.0)).unwrap();

    let (loop_edge, edge) = network
        .main_edges()
        .find(|(_, edge)| edge.is_loop())
        .unwrap();
    assert!(edge.is_loop());
    assert!(network.is_stub(loop_edge));
    assert_eq!(network.degree(x), 2);

    let stats = remove_stubs(&mut network);

    // The tail goes first, the loop is queued twice
    assert_eq!(stats.removed, 2);
    assert_eq!(stats.merged, 0);
    assert_eq!(stats.stale, 1);
    assert_eq!(network.edge_count(), 0);
    assert_eq!(network.degree(x), 0);
}

#[test]
fn test_removal_is_idempotent() {
    let mut network = setup::create_chain_network(&[1, 2]);
    let (edge, _) = network.main_edges().next().unwrap();
    let reversed = network.edge(edge).reversed();

    assert!(network.remove_edge(edge));
    assert!(!network.remove_edge(edge));
    assert!(!network.remove_edge(reversed));

    assert!(!setup::is_attached(&network, edge));
    assert!(!setup::is_attached(&network, reversed));
    assert_eq!(network.edge_count(), 1);
    assert_pairing(&network);
}

#[test]
fn test_stub_removal_leaves_no_stub_on_a_grid() {
    // 3x3 grid with branches hanging off two corners
    let mut edges: Vec<(Vec<(f64, f64)>, f64, u64)> = Vec::new();
    for row in 0..3 {
        for column in 0..3 {
            let (x, y) = (column as f64, row as f64);
            if column < 2 {
                edges.push((vec![(x, y), (x + 1.0, y)], 1.0, 1));
            }
            if row < 2 {
                edges.push((vec![(x, y), (x, y + 1.0)], 1.0, 1));
            }
        }
    }
    edges.push((vec![(0.0, 0.0), (-1.0, -1.0)], 1.5, 1));
    edges.push((vec![(-1.0, -1.0), (-2.0, -1.0)], 1.0, 1));
    edges.push((vec![(-1.0, -1.0), (-1.0, -2.0)], 1.0, 1));
    edges.push((vec![(2.0, 2.0), (3.0, 3.0)], 1.5, 1));

    let borrowed: Vec<_> = edges
        .iter()
        .map(|(polyline, length, visits)| (polyline.as_slice(), *length, *visits))
        .collect();
    let mut network = setup::create_network(&borrowed);

    let stats = remove_stubs(&mut network);

    // The fork collapses into one branch once its first leaf is gone, the
    // corners it hung off are merged after it
    assert_eq!(stats.removed, 3);
    assert_eq!(stats.merged, 3);
    assert_eq!(stats.stale, 1);
    assert!(network.main_edges().all(|(edge, _)| !network.is_stub(edge)));
    assert_eq!(network.total_length(), meters!(12));
    assert_pairing(&network);
}
