/*
 * Licensed to the Apache Software Foundation (ASF) under one
 * or more contributor license agreements.  See the NOTICE file
 * distributed with this work for additional information
 * regarding copyright ownership.  The ASF licenses this file
 * to you under the Apache License, Version 2.0 (the
 * "License"); you may not use this file except in compliance
 * with the License.  You may obtain a copy of the License at
 *
 *   http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing,
 * software distributed under the License is distributed on an
 * "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
 * KIND, either express or implied.  See the License for the
 * specific language governing permissions and limitations
 * under the License.
 */

#[macro_use]
extern crate log;

pub use crate::constants::*;
pub use crate::dist_matrix::DistMatrix;
pub use crate::error::Error;
pub use crate::input_graph::Edge;
pub use crate::input_graph::InputGraph;
pub use crate::runner::PhaseRunner;

mod constants;
mod dist_matrix;
mod error;
#[cfg(test)]
mod floyd_warshall;
mod input_graph;
mod relaxation;
mod runner;

/// Computes the shortest distances between all pairs of nodes of the given
/// `InputGraph` using the multi-threaded Floyd-Warshall runner.
pub fn calc_distances(input_graph: &InputGraph) -> DistMatrix {
    PhaseRunner::run(DistMatrix::from_graph(input_graph))
}

#[cfg(test)]
mod tests {
    use std::fs::{remove_file, File};
    use std::time::SystemTime;

    use rand::rngs::StdRng;

    use crate::floyd_warshall::FloydWarshall;

    use super::*;

    #[test]
    fn distances_on_random_graph() {
        const REPEATS: usize = 100;
        for _i in 0..REPEATS {
            run_test_on_random_graph();
        }
    }

    fn run_test_on_random_graph() {
        const NUM_NODES: usize = 30;
        const MEAN_DEGREE: f32 = 2.0;

        let mut rng = create_rng();
        let input_graph = InputGraph::random(&mut rng, NUM_NODES, MEAN_DEGREE);
        debug!("random graph: \n {:?}", input_graph);
        let matrix = calc_distances(&input_graph);
        let fw = FloydWarshall::prepare(&input_graph);
        for source in 1..=NUM_NODES {
            for target in 1..=NUM_NODES {
                assert_eq!(
                    fw.calc_weight(source, target),
                    matrix.get(source, target),
                    "\nNo agreement for distance from: {} to: {}\
                     \nFailing graph:\n{:?}",
                    source,
                    target,
                    input_graph
                );
            }
        }
    }

    #[test]
    fn second_run_leaves_converged_matrix_unchanged() {
        const NUM_NODES: usize = 20;
        const MEAN_DEGREE: f32 = 2.0;

        let mut rng = create_rng();
        let input_graph = InputGraph::random(&mut rng, NUM_NODES, MEAN_DEGREE);
        let first = calc_distances(&input_graph);
        let second = PhaseRunner::run(first.clone());
        assert_eq!(
            first, second,
            "\nRe-running on a converged matrix changed it.\nFailing graph:\n{:?}",
            input_graph
        );
    }

    #[test]
    fn final_matrix_is_symmetric() {
        const NUM_NODES: usize = 25;
        const MEAN_DEGREE: f32 = 2.0;

        let mut rng = create_rng();
        let input_graph = InputGraph::random(&mut rng, NUM_NODES, MEAN_DEGREE);
        let matrix = calc_distances(&input_graph);
        for i in 1..=NUM_NODES {
            for j in 1..=NUM_NODES {
                assert_eq!(
                    matrix.get(i, j),
                    matrix.get(j, i),
                    "\nAsymmetric result for undirected input.\nFailing graph:\n{:?}",
                    input_graph
                );
            }
        }
    }

    #[test]
    fn square_with_one_diagonal() {
        // 1 -1- 2
        // |     |
        // 5     2
        // |     |
        // 4 -1- 3
        let mut g = InputGraph::new(4);
        g.add_edge(1, 2, 1).unwrap();
        g.add_edge(2, 3, 2).unwrap();
        g.add_edge(3, 4, 1).unwrap();
        g.add_edge(4, 1, 5).unwrap();
        g.freeze();
        let matrix = calc_distances(&g);
        assert_eq!(3, matrix.get(1, 3));
        assert_eq!(4, matrix.get(1, 4));
        assert_eq!(3, matrix.get(2, 4));
        for v in 1..=4 {
            assert_eq!(WEIGHT_ZERO, matrix.get(v, v));
        }
    }

    #[test]
    fn unreachable_node_keeps_sentinel_distance() {
        let mut g = InputGraph::new(3);
        g.add_edge(1, 2, 1).unwrap();
        g.freeze();
        let matrix = calc_distances(&g);
        assert_eq!(WEIGHT_MAX, matrix.get(1, 3));
        assert_eq!(WEIGHT_MAX, matrix.get(2, 3));
    }

    #[test]
    fn single_node_without_edges() {
        let g = {
            let mut g = InputGraph::new(1);
            g.freeze();
            g
        };
        let matrix = calc_distances(&g);
        assert_eq!(1, matrix.get_num_nodes());
        assert_eq!(WEIGHT_ZERO, matrix.get(1, 1));
    }

    #[test]
    fn save_matrix_to_and_load_from_disk() {
        let mut g = InputGraph::new(6);
        g.add_edge(1, 6, 6).unwrap();
        g.add_edge(6, 3, 1).unwrap();
        g.add_edge(3, 4, 4).unwrap();
        g.freeze();
        let matrix = calc_distances(&g);
        let file = File::create("example.dm").expect("creating file failed");
        bincode::serialize_into(file, &matrix).expect("writing to disk failed");
        let file = File::open("example.dm").expect("opening file failed");
        let loaded: DistMatrix = bincode::deserialize_from(file).expect("reading failed");
        remove_file("example.dm").expect("deleting file failed");
        assert_eq!(matrix, loaded);
    }

    fn create_rng() -> StdRng {
        let seed = create_seed();
        debug!("creating random number generator with seed: {}", seed);
        rand::SeedableRng::seed_from_u64(seed)
    }

    fn create_seed() -> u64 {
        SystemTime::UNIX_EPOCH.elapsed().unwrap().as_nanos() as u64
    }
}
