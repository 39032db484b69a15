use clap::Parser;
use flight_routes::{
    graphs::{graph_functions::sample_flight_network, VertexId},
    search::dijkstra::shortest_path,
};

/// Finds the cheapest route between two cities of the demo flight network.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// City to depart from
    #[arg(short, long, default_value_t = 1)]
    source: VertexId,

    /// City to arrive at
    #[arg(short, long, default_value_t = 4)]
    target: VertexId,
}

fn main() {
    let args = Args::parse();

    let graph = sample_flight_network();

    match shortest_path(&graph, args.source, args.target) {
        Some(path) => {
            let route = path
                .vertices
                .iter()
                .map(|vertex| vertex.to_string())
                .collect::<Vec<_>>()
                .join(" ");
            println!(
                "Shortest route from {} to {}: {} (total weight {})",
                args.source, args.target, route, path.weight
            );
        }
        None => println!("No route from {} to {}", args.source, args.target),
    }
}
