//! Dijkstra search over a [`Network`].
//!
//! A search runs in two phases. Initialization builds a fresh
//! [`SearchState`] with the source at distance 0 and every node unvisited.
//! Iteration then calls [`SearchState::relax_next`] until the destination is
//! solved (found) or no reachable node is left (unreachable). The network is
//! only read, so repeated searches cannot leak state into each other.

mod path;
mod state;

pub use path::path_names;
pub use state::SearchState;

use crate::error::{PathError, describe};
use crate::graph::{Network, NodeId, NodeName};
use log::debug;

#[cfg(not(feature = "hashbrown"))]
use std::collections::HashMap;

#[cfg(feature = "hashbrown")]
use hashbrown::HashMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Knobs for a [`Dijkstra`] search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SearchOptions {
    /// Reject negative or NaN arc weights before searching.
    pub validate_weights: bool,
    /// Give up after this many relaxation steps.
    pub max_steps: Option<usize>,
}

impl SearchOptions {
    pub fn validate_weights(mut self, validate: bool) -> Self {
        self.validate_weights = validate;
        self
    }

    pub fn max_steps(mut self, steps: usize) -> Self {
        self.max_steps = Some(steps);
        self
    }
}

/// Minimum-weight route between two nodes.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ShortestPath<N> {
    pub distance: f64,
    /// Node names from source to destination, both included.
    pub path: Vec<N>,
}

impl<N> ShortestPath<N> {
    /// Number of arcs on the route.
    pub fn hops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// Dijkstra solver bound to one network.
pub struct Dijkstra<'a, N, V = ()> {
    network: &'a Network<N, V>,
    options: SearchOptions,
}

impl<'a, N: NodeName, V> Dijkstra<'a, N, V> {
    pub fn new(network: &'a Network<N, V>) -> Self {
        Self::with_options(network, SearchOptions::default())
    }

    pub fn with_options(network: &'a Network<N, V>, options: SearchOptions) -> Self {
        Dijkstra { network, options }
    }

    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    /// Shortest route from `source` to `destination`.
    pub fn solve(&self, source: &N, destination: &N) -> Result<ShortestPath<N>, PathError> {
        let source_id = self.lookup(source)?;
        let destination_id = self.lookup(destination)?;

        debug!(
            "searching {:?} -> {:?} over {} nodes",
            source,
            destination,
            self.network.node_count()
        );

        let state = self.search(source_id, Some(destination_id))?;

        if !state.is_solved(destination_id) {
            debug!(
                "{:?} unreachable from {:?} after {} steps",
                destination,
                source,
                state.steps()
            );
            return Err(PathError::NoPathExists {
                from: describe(source),
                to: describe(destination),
            });
        }

        let route = state.extract_path(self.network, destination_id)?;
        let distance = state.distance(destination_id);
        debug!(
            "found {:?} -> {:?} at distance {} in {} steps",
            source,
            destination,
            distance,
            state.steps()
        );

        Ok(ShortestPath {
            distance,
            path: path_names(self.network, &route),
        })
    }

    /// Final distance to every node reachable from `source`.
    pub fn solve_all(&self, source: &N) -> Result<HashMap<N, f64>, PathError> {
        let source_id = self.lookup(source)?;
        let state = self.search(source_id, None)?;

        Ok(state
            .solved_distances()
            .map(|(id, distance)| (self.network.name(id).clone(), distance))
            .collect())
    }

    /// Runs the search until `destination` is solved, or to exhaustion.
    pub fn search(
        &self,
        source: NodeId,
        destination: Option<NodeId>,
    ) -> Result<SearchState, PathError> {
        if self.options.validate_weights {
            self.network.validate_weights()?;
        }

        let mut state = SearchState::new(self.network, source);
        loop {
            if let Some(limit) = self.options.max_steps
                && state.steps() >= limit
            {
                return Err(PathError::StepLimit(limit));
            }

            match state.relax_next(self.network) {
                Some(solved) if Some(solved) == destination => break,
                Some(_) => continue,
                None => break,
            }
        }

        Ok(state)
    }

    fn lookup(&self, name: &N) -> Result<NodeId, PathError> {
        self.network
            .node_id(name)
            .ok_or_else(|| PathError::UnknownNode(describe(name)))
    }
}

/// Shortest route from `source` to `destination` with default options.
pub fn shortest_path<N: NodeName, V>(
    network: &Network<N, V>,
    source: &N,
    destination: &N,
) -> Result<ShortestPath<N>, PathError> {
    Dijkstra::new(network).solve(source, destination)
}

/// Distances from `source` to every node it can reach.
pub fn distances_from<N: NodeName, V>(
    network: &Network<N, V>,
    source: &N,
) -> Result<HashMap<N, f64>, PathError> {
    Dijkstra::new(network).solve_all(source)
}
