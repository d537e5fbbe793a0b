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

use std::cmp;

use crate::constants::{NodeId, Weight, WEIGHT_MAX};
use crate::dist_matrix::DistMatrix;
use crate::input_graph::InputGraph;

/// Sequential single-threaded Floyd-Warshall, used as the ground truth the
/// parallel runner is compared against.
pub struct FloydWarshall {
    matrix: DistMatrix,
}

impl FloydWarshall {
    pub fn prepare(input_graph: &InputGraph) -> Self {
        let mut matrix = DistMatrix::from_graph(input_graph);
        let n = input_graph.get_num_nodes();
        for k in 1..=n {
            for i in 1..=n {
                for j in 1..=n {
                    let weight_ik = matrix.get(i, k);
                    let weight_kj = matrix.get(k, j);
                    if weight_ik == WEIGHT_MAX || weight_kj == WEIGHT_MAX {
                        continue;
                    }
                    let improved = cmp::min(matrix.get(i, j), weight_ik + weight_kj);
                    matrix.set(i, j, improved);
                }
            }
        }
        FloydWarshall { matrix }
    }

    pub fn calc_weight(&self, source: NodeId, target: NodeId) -> Weight {
        self.matrix.get(source, target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn calc_weights() {
        // 1 -- 2    4
        // |    |
        // 5 -- 6 -- 7
        //      |    |
        //      8 -- 9
        let mut g = InputGraph::new(9);
        g.add_edge(1, 2, 6).unwrap();
        g.add_edge(1, 5, 1).unwrap();
        g.add_edge(5, 6, 1).unwrap();
        g.add_edge(6, 8, 1).unwrap();
        g.add_edge(8, 9, 1).unwrap();
        g.add_edge(9, 7, 1).unwrap();
        g.add_edge(7, 6, 4).unwrap();
        g.add_edge(6, 2, 1).unwrap();
        g.freeze();
        let fw = FloydWarshall::prepare(&g);
        assert_eq!(3, fw.calc_weight(1, 2));
        assert_eq!(3, fw.calc_weight(5, 9));
        assert_eq!(0, fw.calc_weight(2, 2));
        assert_eq!(0, fw.calc_weight(6, 6));
        assert_eq!(WEIGHT_MAX, fw.calc_weight(1, 4));
        assert_eq!(WEIGHT_MAX, fw.calc_weight(4, 9));
    }
}
