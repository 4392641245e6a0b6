#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::hash::Hash;

#[cfg(not(feature = "hashbrown"))]
use std::collections::HashMap;

#[cfg(feature = "hashbrown")]
use hashbrown::HashMap;

use crate::error::{GraphError, describe};

/// Bounds a type needs to act as a node name.
pub trait NodeName: Clone + Eq + Hash + fmt::Debug {}

impl<T: Clone + Eq + Hash + fmt::Debug> NodeName for T {}

/// Handle of a node: its insertion index in the owning network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NodeId(pub usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Handle of an arc: its insertion index in the owning network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ArcId(pub usize);

impl ArcId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// A named location in the network.
///
/// Incident arcs are kept as handles into the network's arc arena, never as
/// references, so nodes and arcs can point at each other without owning
/// each other.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Node<N, V = ()> {
    pub name: N,
    pub value: V,
    #[cfg_attr(feature = "serde", serde(skip))]
    arcs_in: Vec<ArcId>,
    #[cfg_attr(feature = "serde", serde(skip))]
    arcs_out: Vec<ArcId>,
}

impl<N, V> Node<N, V> {
    fn new(name: N, value: V) -> Self {
        Node {
            name,
            value,
            arcs_in: Vec::new(),
            arcs_out: Vec::new(),
        }
    }

    /// Arcs that end at this node.
    pub fn arcs_in(&self) -> &[ArcId] {
        &self.arcs_in
    }

    /// Arcs that begin at this node.
    pub fn arcs_out(&self) -> &[ArcId] {
        &self.arcs_out
    }
}

/// Directed, weighted connection between two nodes.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Arc {
    pub from: NodeId,
    pub to: NodeId,
    pub weight: f64,
}

/// Owns every node and arc of a directed network.
///
/// Node names are unique; insertion order is preserved and doubles as the
/// tie-break order of the search. Weights are not checked on insertion,
/// call [`Network::validate_weights`] when negative weights must be ruled out.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Network<N, V = ()> {
    nodes: Vec<Node<N, V>>,
    arcs: Vec<Arc>,
    #[cfg_attr(feature = "serde", serde(skip))]
    index: HashMap<N, NodeId>,
}

impl<N: NodeName, V> Default for Network<N, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: NodeName, V> Network<N, V> {
    pub fn new() -> Self {
        Network {
            nodes: Vec::new(),
            arcs: Vec::new(),
            index: HashMap::new(),
        }
    }

    pub fn with_capacity(nodes: usize, arcs: usize) -> Self {
        Network {
            nodes: Vec::with_capacity(nodes),
            arcs: Vec::with_capacity(arcs),
            index: HashMap::with_capacity(nodes),
        }
    }

    /// Adds a node carrying the default payload.
    pub fn add_node(&mut self, name: N) -> Result<NodeId, GraphError>
    where
        V: Default,
    {
        self.add_node_with_value(name, V::default())
    }

    /// Adds a node carrying `value`. Names must be unique.
    pub fn add_node_with_value(&mut self, name: N, value: V) -> Result<NodeId, GraphError> {
        if self.index.contains_key(&name) {
            return Err(GraphError::DuplicateNode(describe(&name)));
        }

        let id = NodeId(self.nodes.len());
        self.index.insert(name.clone(), id);
        self.nodes.push(Node::new(name, value));
        Ok(id)
    }

    /// Returns the handle of `name`, adding the node first if it is missing.
    pub fn get_or_add_node(&mut self, name: N) -> NodeId
    where
        V: Default,
    {
        match self.index.get(&name) {
            Some(&id) => id,
            None => {
                let id = NodeId(self.nodes.len());
                self.index.insert(name.clone(), id);
                self.nodes.push(Node::new(name, V::default()));
                id
            }
        }
    }

    /// Adds an arc between two existing nodes and registers it on both ends.
    pub fn add_arc(&mut self, from: &N, to: &N, weight: f64) -> Result<ArcId, GraphError> {
        let from_id = self
            .node_id(from)
            .ok_or_else(|| GraphError::UnknownNode(describe(from)))?;
        let to_id = self
            .node_id(to)
            .ok_or_else(|| GraphError::UnknownNode(describe(to)))?;

        Ok(self.link(from_id, to_id, weight))
    }

    fn link(&mut self, from: NodeId, to: NodeId, weight: f64) -> ArcId {
        let id = ArcId(self.arcs.len());
        self.arcs.push(Arc { from, to, weight });
        self.nodes[from.0].arcs_out.push(id);
        self.nodes[to.0].arcs_in.push(id);
        id
    }

    /// Looks a node up by name. A miss is an ordinary outcome, not an error.
    pub fn get_node(&self, name: &N) -> Option<&Node<N, V>> {
        self.node_id(name).map(|id| &self.nodes[id.0])
    }

    pub fn node_id(&self, name: &N) -> Option<NodeId> {
        self.index.get(name).copied()
    }

    pub fn contains_node(&self, name: &N) -> bool {
        self.index.contains_key(name)
    }

    pub fn node(&self, id: NodeId) -> Option<&Node<N, V>> {
        self.nodes.get(id.0)
    }

    pub fn arc(&self, id: ArcId) -> Option<&Arc> {
        self.arcs.get(id.0)
    }

    /// Name of a node handed out by this network.
    ///
    /// # Panics
    /// If `id` did not come from this network.
    pub fn name(&self, id: NodeId) -> &N {
        &self.nodes[id.0].name
    }

    pub fn nodes(&self) -> &[Node<N, V>] {
        &self.nodes
    }

    pub fn arcs(&self) -> &[Arc] {
        &self.arcs
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn arc_count(&self) -> usize {
        self.arcs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn arcs_out(&self, id: NodeId) -> impl Iterator<Item = &Arc> + '_ {
        self.nodes
            .get(id.0)
            .into_iter()
            .flat_map(|node| node.arcs_out.iter().map(|arc| &self.arcs[arc.0]))
    }

    pub fn arcs_in(&self, id: NodeId) -> impl Iterator<Item = &Arc> + '_ {
        self.nodes
            .get(id.0)
            .into_iter()
            .flat_map(|node| node.arcs_in.iter().map(|arc| &self.arcs[arc.0]))
    }

    /// Fails on the first arc whose weight is negative or NaN.
    pub fn validate_weights(&self) -> Result<(), GraphError> {
        match self.arcs.iter().find(|arc| arc.weight.is_nan() || arc.weight < 0.0) {
            Some(arc) => Err(GraphError::InvalidWeight {
                from: describe(self.name(arc.from)),
                to: describe(self.name(arc.to)),
                weight: arc.weight,
            }),
            None => Ok(()),
        }
    }

    /// Rebuilds a network from raw parts, checking name uniqueness and that
    /// every arc points at an existing node.
    pub fn from_parts(nodes: Vec<Node<N, V>>, arcs: Vec<Arc>) -> Result<Self, GraphError> {
        let mut network = Network::with_capacity(nodes.len(), arcs.len());
        for node in nodes {
            network.add_node_with_value(node.name, node.value)?;
        }

        let count = network.node_count();
        for (idx, arc) in arcs.into_iter().enumerate() {
            if arc.from.0 >= count || arc.to.0 >= count {
                return Err(GraphError::DanglingArc(idx));
            }
            network.link(arc.from, arc.to, arc.weight);
        }

        Ok(network)
    }

    #[cfg(feature = "petgraph")]
    pub fn to_petgraph(&self) -> petgraph::Graph<N, f64> {
        let mut pg_graph = petgraph::Graph::with_capacity(self.nodes.len(), self.arcs.len());
        let nodes: Vec<_> = self
            .nodes
            .iter()
            .map(|node| pg_graph.add_node(node.name.clone()))
            .collect();

        for arc in &self.arcs {
            pg_graph.add_edge(nodes[arc.from.0], nodes[arc.to.0], arc.weight);
        }
        pg_graph
    }
}

#[cfg(feature = "bincode")]
impl<N, V> Network<N, V>
where
    N: NodeName + Serialize + serde::de::DeserializeOwned,
    V: Serialize + serde::de::DeserializeOwned,
{
    pub fn from_file(path: &std::path::Path) -> Result<Self, Box<dyn std::error::Error>> {
        let file = std::fs::File::open(path)?;
        let config = bincode::config::legacy();
        let mut reader = std::io::BufReader::new(file);
        let network: Self = bincode::serde::decode_from_std_read(&mut reader, config)?;
        Ok(network)
    }

    pub fn to_file(&self, path: &std::path::Path) -> Result<(), Box<dyn std::error::Error>> {
        let file = std::fs::File::create(path)?;
        let config = bincode::config::legacy();
        let mut writer = std::io::BufWriter::new(file);

        bincode::serde::encode_into_std_write(self, &mut writer, config)?;

        Ok(())
    }
}

#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct NetworkParts<N, V> {
    nodes: Vec<Node<N, V>>,
    arcs: Vec<Arc>,
}

#[cfg(feature = "serde")]
impl<'de, N, V> Deserialize<'de> for Network<N, V>
where
    N: NodeName + Deserialize<'de>,
    V: Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let parts = NetworkParts::<N, V>::deserialize(deserializer)?;
        Network::from_parts(parts.nodes, parts.arcs).map_err(serde::de::Error::custom)
    }
}

impl<N: NodeName + fmt::Display, V> fmt::Display for Network<N, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for node in &self.nodes {
            writeln!(f, "node:{}", node.name)?;
        }
        for arc in &self.arcs {
            writeln!(
                f,
                "arc:({})--{}-->({})",
                self.name(arc.from),
                arc.weight,
                self.name(arc.to)
            )?;
        }
        Ok(())
    }
}
