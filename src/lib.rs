//! Single-source shortest paths over named, weighted directed networks.
//!
//! ```
//! use net_spath::{Network, shortest_path};
//!
//! let mut network: Network<&str> = Network::new();
//! for name in ["A", "B", "C"] {
//!     network.add_node(name).unwrap();
//! }
//! network.add_arc(&"A", &"B", 1.0).unwrap();
//! network.add_arc(&"B", &"C", 2.0).unwrap();
//!
//! let route = shortest_path(&network, &"A", &"C").unwrap();
//! assert_eq!(route.distance, 3.0);
//! assert_eq!(route.path, vec!["A", "B", "C"]);
//! ```

pub mod error;
pub mod graph;
pub mod loader;
#[cfg(feature = "petgraph")]
pub mod petgraph_utils;
pub mod search;
pub mod utils;

pub use error::{GraphError, LoadError, PathError};
pub use graph::{Arc, ArcId, Network, Node, NodeId, NodeName};
pub use loader::{parse_network, read_network};
pub use search::{
    Dijkstra, SearchOptions, SearchState, ShortestPath, distances_from, shortest_path,
};
