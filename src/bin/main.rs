use std::env;
use std::process;

use stopwatch::Stopwatch;

use par_paths::{calc_distances, InputGraph};

fn main() {
    // e.g. run like this:
    // cargo run --release main meta/test_graphs/square.gr
    let args: Vec<String> = env::args().collect();
    if args.len() < 3 {
        panic!("You need to pass a file name");
    }
    let filename = &args[2];
    println!("Computing all-pairs shortest distances for file {}", filename);

    let input_graph = match InputGraph::from_file(filename) {
        Ok(g) => g,
        Err(e) => {
            eprintln!("Could not read input graph: {}", e);
            process::exit(1);
        }
    };
    println!(
        "number of nodes (input graph) ..... {}",
        input_graph.get_num_nodes()
    );
    println!(
        "number of edges (input graph) ..... {}",
        input_graph.get_num_edges()
    );

    let mut time = Stopwatch::new();
    time.start();
    let matrix = calc_distances(&input_graph);
    time.stop();
    println!(
        "calculation time .................. {} ms",
        time.elapsed_ms()
    );
    println!("Final matrix of shortest distances:");
    print!("{}", matrix);
}
