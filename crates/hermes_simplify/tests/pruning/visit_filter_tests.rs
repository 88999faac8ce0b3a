use hermes_simplify::{Coordinate, pruning::filter_by_visits};

use crate::setup::{self, assert_pairing, surviving_polylines};

#[test]
fn test_filtering_is_monotonic_on_a_star() {
    let original = setup::create_star_network(&[1, 5, 8, 12]);

    let mut stepwise = original.clone();
    filter_by_visits(&mut stepwise, 3.0);
    filter_by_visits(&mut stepwise, 6.0);

    let mut direct = original.clone();
    let stats = filter_by_visits(&mut direct, 6.0);

    assert_eq!(stats.removed, 2);
    assert_eq!(stats.merged, 1);
    assert!(surviving_polylines(&stepwise).is_subset(&surviving_polylines(&direct)));

    // The spokes with 8 and 12 visits are joined through the centre
    assert_eq!(direct.edge_count(), 1);
    let (_, edge) = direct.main_edges().next().unwrap();
    assert_eq!(edge.visits(), 10);
    assert_eq!(edge.coordinates().len(), 3);
    assert_eq!(edge.coordinates()[1], Coordinate::new(0.0, 0.0));
    assert_pairing(&direct);
    assert_pairing(&stepwise);
}

#[test]
fn test_filtering_is_monotonic_on_a_chain() {
    let original = setup::create_chain_network(&[9, 2, 7, 4, 1, 6]);

    for (low, high) in [(2.0, 5.0), (1.5, 8.0), (4.0, 6.5)] {
        let mut stepwise = original.clone();
        filter_by_visits(&mut stepwise, low);
        filter_by_visits(&mut stepwise, high);

        let mut direct = original.clone();
        filter_by_visits(&mut direct, high);

        assert!(
            surviving_polylines(&stepwise).is_subset(&surviving_polylines(&direct)),
            "{low} then {high}"
        );
        assert_pairing(&stepwise);
    }
}

#[test]
fn test_low_visit_loop_does_not_merge_its_node() {
    //  Loop at X, one edge to Y
    let mut network = setup::create_network(&[
        (&[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (0.0, 0.0)], 3.0, 1),
        (&[(0.0, 0.0), (-1.0, 0.0)], 1.0, 9),
    ]);
    let x = network.node_id(&Coordinate::new(0.0, 0.0)).unwrap();

    let stats = filter_by_visits(&mut network, 2.0);

    assert_eq!(stats.removed, 1);
    assert_eq!(stats.merged, 0);
    assert_eq!(network.degree(x), 1);
    assert_eq!(network.edge_count(), 1);
    assert_pairing(&network);
}

#[test]
fn test_threshold_zero_keeps_everything() {
    let mut network = setup::create_chain_network(&[0, 1, 2]);

    let stats = filter_by_visits(&mut network, 0.0);

    assert_eq!(stats.removed, 0);
    assert_eq!(network.edge_count(), 3);
}
