mod graph_loader;

use crate::graph_loader::{brute_force_distance, convert_to_petgraph, path_weight, random_network};
use net_spath::{PathError, distances_from, shortest_path};
use petgraph::algo::dijkstra;

#[test]
fn matches_brute_force_on_small_networks() {
    for seed in 0..40 {
        let network = random_network(7, 14, 9, seed);

        for source in 0..7 {
            for goal in 0..7 {
                let expected = brute_force_distance(&network, source, goal);
                let result = shortest_path(&network, &source, &goal);

                match (expected, result) {
                    (Some(best), Ok(route)) => {
                        assert_eq!(
                            route.distance, best,
                            "seed {seed}: {source}->{goal} distance mismatch"
                        );
                        assert_eq!(route.path.first(), Some(&source));
                        assert_eq!(route.path.last(), Some(&goal));
                        assert_eq!(path_weight(&network, &route.path), Some(route.distance));
                    }
                    (None, Err(PathError::NoPathExists { .. })) => {}
                    (expected, result) => panic!(
                        "seed {seed}: {source}->{goal} brute force {expected:?}, search {result:?}"
                    ),
                }
            }
        }
    }
}

#[test]
fn sanity_with_petgraph() {
    let network = random_network(300, 1500, 20, 7);
    let (petgraph, node_map) = convert_to_petgraph(&network);

    let source = 0;
    let petgraph_distances = dijkstra(&petgraph, node_map[&source], None, |e| *e.weight());
    let distances = distances_from(&network, &source).unwrap();

    assert_eq!(distances.len(), petgraph_distances.len());
    for (name, idx) in &node_map {
        match (petgraph_distances.get(idx), distances.get(name)) {
            (Some(expected), Some(actual)) => {
                assert!(
                    (expected - actual).abs() < 1e-9,
                    "node {name}: petgraph={expected}, net_spath={actual}"
                );
            }
            (None, None) => {}
            (expected, actual) => {
                panic!("node {name}: petgraph={expected:?}, net_spath={actual:?}")
            }
        }
    }
}

#[test]
fn repeated_searches_identical() {
    let network = random_network(200, 800, 15, 99);

    for goal in [10, 50, 150, 199] {
        let first = shortest_path(&network, &3, &goal);
        let second = shortest_path(&network, &3, &goal);
        assert_eq!(first, second);
    }
}

#[test]
fn zero_weight_arcs() {
    let network = random_network(50, 200, 0, 5);
    let distances = distances_from(&network, &0).unwrap();
    assert!(distances.values().all(|&d| d == 0.0));
}
