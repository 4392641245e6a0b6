//! Reader for the line-oriented network format.
//!
//! Each line names a source node followed by comma-separated
//! `destination;weight` items:
//!
//! ```text
//! A,B;1,C;4
//! B,C;2,D;5
//! C,D;1
//! ```
//!
//! Nodes are created the first time they are mentioned, in order of
//! appearance, so handle order follows the file.

use crate::error::LoadError;
use crate::graph::Network;
use log::{debug, warn};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

#[cfg(feature = "flate2")]
use flate2::read::GzDecoder;

pub fn read_network(path: &Path) -> Result<Network<String>, LoadError> {
    let file = File::open(path)?;
    let network = parse_network(BufReader::new(file))?;
    debug!(
        "loaded {} nodes and {} arcs from {}",
        network.node_count(),
        network.arc_count(),
        path.display()
    );
    Ok(network)
}

#[cfg(feature = "flate2")]
pub fn read_network_gz(path: &Path) -> Result<Network<String>, LoadError> {
    let file = File::open(path)?;
    let gz = GzDecoder::new(file);
    parse_network(BufReader::new(gz))
}

pub fn parse_network<R: BufRead>(reader: R) -> Result<Network<String>, LoadError> {
    let mut network = Network::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = idx + 1;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let mut items = line.split(',');
        let source_name = match items.next().map(str::trim) {
            Some(name) if !name.is_empty() => name,
            _ => {
                warn!("line {line_no}: missing source node");
                return Err(parse_error(line_no, "missing source node"));
            }
        };
        let source = source_name.to_string();
        network.get_or_add_node(source.clone());

        for item in items {
            let item = item.trim();
            if item.is_empty() {
                continue;
            }

            let (destination, weight) = item.split_once(';').ok_or_else(|| {
                parse_error(line_no, format!("expected destination;weight, got {item:?}"))
            })?;
            let weight: f64 = weight.trim().parse().map_err(|_| {
                warn!("line {line_no}: bad weight in {item:?}");
                parse_error(line_no, format!("invalid weight {:?}", weight.trim()))
            })?;

            let destination = destination.trim().to_string();
            network.get_or_add_node(destination.clone());
            network
                .add_arc(&source, &destination, weight)
                .map_err(|err| LoadError::Graph {
                    line: line_no,
                    source: err,
                })?;
        }
    }

    Ok(network)
}

fn parse_error(line: usize, message: impl Into<String>) -> LoadError {
    LoadError::Parse {
        line,
        message: message.into(),
    }
}
