use crate::error::{PathError, describe};
use crate::graph::{Network, NodeId, NodeName};
use crate::search::state::SearchState;

impl SearchState {
    /// Walks predecessors back from `destination` to the source and returns
    /// the route in source-to-destination order.
    ///
    /// Only a solved node has a final predecessor chain, so anything else is
    /// rejected with [`PathError::NotSolved`].
    pub fn extract_path<N: NodeName, V>(
        &self,
        network: &Network<N, V>,
        destination: NodeId,
    ) -> Result<Vec<NodeId>, PathError> {
        if !self.is_solved(destination) {
            let name = network
                .node(destination)
                .map(|node| describe(&node.name))
                .unwrap_or_else(|| format!("#{}", destination.0));
            return Err(PathError::NotSolved(name));
        }

        let mut path = vec![destination];
        let mut current = destination;
        while let Some(pred) = self.predecessor(current) {
            path.push(pred);
            current = pred;
        }

        path.reverse();
        Ok(path)
    }
}

/// Maps a handle path onto node names.
pub fn path_names<N: NodeName, V>(network: &Network<N, V>, path: &[NodeId]) -> Vec<N> {
    path.iter().map(|&id| network.name(id).clone()).collect()
}
