use crate::graph::NodeId;
use std::cmp::Ordering;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub const INFINITY: f64 = f64::INFINITY;

/// Frontier entry: a node together with the tentative distance it was
/// queued at. Orders by distance, then by handle, so equal distances pop
/// in insertion order of the nodes.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VertexDistance {
    pub vertex: NodeId,
    pub distance: f64,
}

impl VertexDistance {
    pub fn new(vertex: NodeId, distance: f64) -> Self {
        VertexDistance { vertex, distance }
    }
}

impl Eq for VertexDistance {}
#[allow(clippy::non_canonical_partial_ord_impl)]
impl PartialOrd for VertexDistance {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.distance.partial_cmp(&other.distance) {
            Some(Ordering::Equal) => Some(self.vertex.cmp(&other.vertex)),
            other => other,
        }
    }
}

impl Ord for VertexDistance {
    fn cmp(&self, other: &Self) -> Ordering {
        self.partial_cmp(other).unwrap_or(Ordering::Equal)
    }
}
