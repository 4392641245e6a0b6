use crate::error::PathError;
use crate::graph::{Network, NodeName};
use crate::search::{ShortestPath, shortest_path as network_shortest_path};
use petgraph::visit::{EdgeRef, IntoEdgeReferences, IntoNodeIdentifiers};

/// Copies any petgraph graph into a [`Network`] keyed by the graph's own
/// node ids, so routes come back in petgraph terms.
pub fn to_network<G>(graph: G) -> Network<G::NodeId>
where
    G: IntoEdgeReferences + IntoNodeIdentifiers,
    G::NodeId: NodeName,
    G::EdgeWeight: Into<f64> + Copy,
{
    let mut network = Network::new();
    for node in graph.node_identifiers() {
        network.get_or_add_node(node);
    }

    for edge in graph.edge_references() {
        let weight: f64 = (*edge.weight()).into();
        // both endpoints were added above
        if let Err(err) = network.add_arc(&edge.source(), &edge.target(), weight) {
            log::warn!("skipping edge: {err}");
        }
    }

    network
}

/// Shortest route between two nodes of a petgraph graph.
///
/// Returns `Ok(None)` when `goal` cannot be reached from `start`.
pub fn shortest_path<G>(
    graph: G,
    start: G::NodeId,
    goal: G::NodeId,
) -> Result<Option<ShortestPath<G::NodeId>>, PathError>
where
    G: IntoEdgeReferences + IntoNodeIdentifiers,
    G::NodeId: NodeName,
    G::EdgeWeight: Into<f64> + Copy,
{
    let network = to_network(graph);
    match network_shortest_path(&network, &start, &goal) {
        Ok(route) => Ok(Some(route)),
        Err(PathError::NoPathExists { .. }) => Ok(None),
        Err(err) => Err(err),
    }
}
