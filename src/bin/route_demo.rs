use lazy_dijkstra::graph::MutableGraph;
use lazy_dijkstra::{compute, find_path, AdjacencyGraph};

fn main() {
    env_logger::init();

    // Undirected network with one isolated router
    let mut graph: AdjacencyGraph<&str, u64> = AdjacencyGraph::new();
    graph.add_undirected_edge("A", "B", 1);
    graph.add_undirected_edge("A", "C", 4);
    graph.add_undirected_edge("B", "C", 2);
    graph.add_undirected_edge("B", "D", 5);
    graph.add_undirected_edge("C", "D", 1);
    graph.add_undirected_edge("D", "E", 3);
    graph.add_vertex("F");

    let start = "A";
    let result = compute(&graph, &start);

    println!("Shortest distances from {}:", start);
    let mut nodes: Vec<_> = result.distances.iter().collect();
    nodes.sort();
    for (node, distance) in nodes {
        match distance {
            Some(d) => println!("  to {}: {}", node, d),
            None => println!("  to {}: unreachable", node),
        }
    }

    println!("\nShortest paths:");
    for target in ["E", "F", "A"] {
        let (path, found) = find_path(&result.predecessors, &start, &target);
        if found {
            println!("  {} -> {}: {:?}", start, target, path);
        } else {
            println!("  {} -> {}: no path", start, target);
        }
    }
}
