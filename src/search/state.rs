use crate::graph::{Network, NodeId, NodeName};
use crate::utils::{INFINITY, VertexDistance};
use log::trace;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Per-search side table, indexed by [`NodeId`].
///
/// The network itself is never written to, so one network can back any
/// number of searches. A state is only meaningful together with the network
/// it was created from.
#[derive(Debug, Clone)]
pub struct SearchState {
    source: NodeId,
    /// Tentative distance from the source; final once the node is solved.
    distances: Vec<f64>,
    /// Node the current best path arrives from.
    predecessors: Vec<Option<NodeId>>,
    /// Nodes removed from the unvisited set.
    solved: Vec<bool>,
    unvisited: usize,
    frontier: BinaryHeap<Reverse<VertexDistance>>,
    steps: usize,
}

impl SearchState {
    /// Fresh state: every node unvisited at infinite distance, the source at 0.
    pub fn new<N: NodeName, V>(network: &Network<N, V>, source: NodeId) -> Self {
        let n = network.node_count();
        let mut state = SearchState {
            source,
            distances: vec![INFINITY; n],
            predecessors: vec![None; n],
            solved: vec![false; n],
            unvisited: n,
            frontier: BinaryHeap::new(),
            steps: 0,
        };

        if source.0 < n {
            state.distances[source.0] = 0.0;
            state.frontier.push(Reverse(VertexDistance::new(source, 0.0)));
        }
        state
    }

    /// Solves one node: the unvisited node with the smallest finite tentative
    /// distance, lowest handle first on ties. Its outgoing arcs are relaxed
    /// with a strict `<`, so an equal-length alternative never replaces the
    /// predecessor found first.
    ///
    /// Returns `None` once every remaining unvisited node is unreachable.
    pub fn relax_next<N: NodeName, V>(&mut self, network: &Network<N, V>) -> Option<NodeId> {
        while let Some(Reverse(VertexDistance { vertex, distance })) = self.frontier.pop() {
            let u = vertex.0;
            if self.solved[u] || distance > self.distances[u] {
                continue;
            }

            self.solved[u] = true;
            self.unvisited -= 1;
            self.steps += 1;

            for arc in network.arcs_out(vertex) {
                let v = arc.to.0;
                // solved nodes are final
                if self.solved[v] {
                    continue;
                }

                let candidate = distance + arc.weight;
                if candidate < self.distances[v] {
                    self.distances[v] = candidate;
                    self.predecessors[v] = Some(vertex);
                    self.frontier
                        .push(Reverse(VertexDistance::new(arc.to, candidate)));
                }
            }

            trace!(
                "solved {:?} at distance {} ({} unvisited)",
                network.name(vertex),
                distance,
                self.unvisited
            );
            return Some(vertex);
        }

        None
    }

    pub fn source(&self) -> NodeId {
        self.source
    }

    /// Tentative distance of `id`; infinite when unreached or unknown.
    pub fn distance(&self, id: NodeId) -> f64 {
        self.distances.get(id.0).copied().unwrap_or(INFINITY)
    }

    pub fn predecessor(&self, id: NodeId) -> Option<NodeId> {
        self.predecessors.get(id.0).copied().flatten()
    }

    pub fn is_solved(&self, id: NodeId) -> bool {
        self.solved.get(id.0).copied().unwrap_or(false)
    }

    /// Number of nodes not yet solved.
    pub fn unvisited_len(&self) -> usize {
        self.unvisited
    }

    /// Relaxation steps taken so far.
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Solved nodes with their final distances, in handle order.
    pub fn solved_distances(&self) -> impl Iterator<Item = (NodeId, f64)> + '_ {
        self.solved
            .iter()
            .enumerate()
            .filter(|&(_, &done)| done)
            .map(|(idx, _)| (NodeId(idx), self.distances[idx]))
    }
}
