use std::env;
use std::path::Path;

use net_spath::{Network, read_network, shortest_path};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // cargo run --example simple -- <network file> <source> <destination>
    let args: Vec<String> = env::args().skip(1).collect();
    let (network, source, destination) = match args.as_slice() {
        [path, source, destination] => (
            read_network(Path::new(path))?,
            source.clone(),
            destination.clone(),
        ),
        _ => (grid_network(5)?, "0:0".to_string(), "4:4".to_string()),
    };

    println!(
        "Network: {} nodes, {} arcs",
        network.node_count(),
        network.arc_count()
    );

    match shortest_path(&network, &source, &destination) {
        Ok(route) => {
            println!("{} -> {}: {:.1}", source, destination, route.distance);
            println!("  {}", route.path.join(" -> "));
        }
        Err(err) => println!("{} -> {}: {}", source, destination, err),
    }

    Ok(())
}

/// Square grid where moving right costs the column index and moving down
/// costs the row index, plus a few expensive shortcuts.
fn grid_network(size: usize) -> Result<Network<String>, net_spath::GraphError> {
    let mut network = Network::new();
    let name = |row: usize, col: usize| format!("{row}:{col}");

    for row in 0..size {
        for col in 0..size {
            network.add_node(name(row, col))?;
        }
    }

    for row in 0..size {
        for col in 0..size {
            if col + 1 < size {
                network.add_arc(&name(row, col), &name(row, col + 1), (col + 1) as f64)?;
            }
            if row + 1 < size {
                network.add_arc(&name(row, col), &name(row + 1, col), (row + 1) as f64)?;
            }
        }
    }

    network.add_arc(&name(0, 0), &name(size - 1, 0), 12.0)?;
    network.add_arc(&name(0, size - 1), &name(size - 1, size - 1), 9.0)?;

    Ok(network)
}
