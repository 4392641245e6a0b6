#![allow(dead_code)]

use net_spath::{Network, NodeId};
use petgraph::graph::{DiGraph, NodeIndex};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashMap;

/// Random network over names `0..n` with integral weights, so path sums
/// are exact in `f64`.
pub fn random_network(n: usize, arcs: usize, max_weight: u32, seed: u64) -> Network<usize> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut network = Network::with_capacity(n, arcs);

    for i in 0..n {
        network.add_node(i).unwrap();
    }

    for _ in 0..arcs {
        let from = rng.gen_range(0..n);
        let to = rng.gen_range(0..n);
        let weight = rng.gen_range(0..=max_weight) as f64;
        network.add_arc(&from, &to, weight).unwrap();
    }

    network
}

/// Minimum total weight over every simple path from `source` to `goal`.
pub fn brute_force_distance(network: &Network<usize>, source: usize, goal: usize) -> Option<f64> {
    fn walk(
        network: &Network<usize>,
        current: NodeId,
        goal: NodeId,
        so_far: f64,
        on_path: &mut Vec<bool>,
        best: &mut Option<f64>,
    ) {
        if current == goal {
            *best = Some(best.map_or(so_far, |b: f64| b.min(so_far)));
            return;
        }
        for arc in network.arcs_out(current) {
            if on_path[arc.to.index()] {
                continue;
            }
            on_path[arc.to.index()] = true;
            walk(network, arc.to, goal, so_far + arc.weight, on_path, best);
            on_path[arc.to.index()] = false;
        }
    }

    let source = network.node_id(&source)?;
    let goal = network.node_id(&goal)?;
    let mut on_path = vec![false; network.node_count()];
    on_path[source.index()] = true;

    let mut best = None;
    walk(network, source, goal, 0.0, &mut on_path, &mut best);
    best
}

/// Sum of the cheapest arc between each consecutive pair of the path.
pub fn path_weight(network: &Network<usize>, path: &[usize]) -> Option<f64> {
    let mut total = 0.0;
    for pair in path.windows(2) {
        let from = network.node_id(&pair[0])?;
        let to = network.node_id(&pair[1])?;
        let cheapest = network
            .arcs_out(from)
            .filter(|arc| arc.to == to)
            .map(|arc| arc.weight)
            .fold(None, |acc: Option<f64>, w| Some(acc.map_or(w, |a| a.min(w))))?;
        total += cheapest;
    }
    Some(total)
}

pub fn convert_to_petgraph(network: &Network<usize>) -> (DiGraph<(), f64>, HashMap<usize, NodeIndex>) {
    let mut petgraph_graph = DiGraph::new();
    let mut node_map = HashMap::new();

    for node in network.nodes() {
        let idx = petgraph_graph.add_node(());
        node_map.insert(node.name, idx);
    }

    for arc in network.arcs() {
        let from_node = node_map[network.name(arc.from)];
        let to_node = node_map[network.name(arc.to)];
        petgraph_graph.add_edge(from_node, to_node, arc.weight);
    }

    (petgraph_graph, node_map)
}
