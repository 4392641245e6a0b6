//! Error types for network construction, search and loading.
//!
//! Node names are generic, so errors carry their `Debug` rendering rather
//! than the name itself. That keeps every error `'static` and printable
//! regardless of the name type.

use thiserror::Error;

/// Failure while building or validating a [`Network`](crate::Network).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    /// A node with this name is already part of the network.
    #[error("duplicate node {0}")]
    DuplicateNode(String),

    /// An arc endpoint does not name a node in the network.
    #[error("unknown node {0}")]
    UnknownNode(String),

    /// An arc weight is negative or NaN.
    #[error("invalid weight {weight} on arc {from} -> {to}")]
    InvalidWeight {
        from: String,
        to: String,
        weight: f64,
    },

    /// A deserialized arc points at a node handle outside the network.
    #[error("arc {0} references a node handle outside the network")]
    DanglingArc(usize),
}

/// Failure of a shortest-path search.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PathError {
    /// Source or destination is not part of the network.
    #[error("unknown node {0}")]
    UnknownNode(String),

    /// The destination cannot be reached from the source.
    #[error("no path exists from {from} to {to}")]
    NoPathExists { from: String, to: String },

    /// Path extraction was asked for a node the search never finalized.
    #[error("node {0} has not been solved")]
    NotSolved(String),

    /// Weight validation was requested and an arc failed it.
    #[error(transparent)]
    InvalidWeight(#[from] GraphError),

    /// The configured step budget ran out before the destination was solved.
    #[error("search stopped after {0} relaxation steps")]
    StepLimit(usize),
}

/// Failure while reading a network from its line-oriented text format.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("line {line}: {source}")]
    Graph { line: usize, source: GraphError },
}

/// Renders a node name for inclusion in an error.
pub(crate) fn describe<N: std::fmt::Debug>(name: &N) -> String {
    format!("{name:?}")
}
