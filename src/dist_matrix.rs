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

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{NodeId, Weight, WEIGHT_MAX, WEIGHT_ZERO};
use crate::input_graph::InputGraph;

/// Square matrix of the best known distances between every pair of nodes.
/// Uses 1-based node ids like the input graph, so the storage is
/// (num_nodes+1) x (num_nodes+1) with row and column 0 unused. Distances
/// only ever decrease after initialization, `WEIGHT_MAX` means 'no known
/// path' and the diagonal stays at zero for the entire lifetime of the
/// matrix.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DistMatrix {
    num_nodes: usize,
    matrix: Vec<Weight>,
}

impl DistMatrix {
    pub fn new(num_nodes: usize) -> Self {
        assert!(num_nodes >= 1, "matrix must have at least one node");
        let dim = num_nodes + 1;
        let mut matrix = vec![WEIGHT_MAX; dim * dim];
        for v in 1..=num_nodes {
            matrix[v * dim + v] = WEIGHT_ZERO;
        }
        DistMatrix { num_nodes, matrix }
    }

    /// Seeds a matrix from the given frozen input graph: zero diagonal, the
    /// edge weight in both directions for every edge and `WEIGHT_MAX` for
    /// all remaining pairs. The graph has already been validated and
    /// deduplicated, so no edge can touch the diagonal or appear twice.
    pub fn from_graph(input_graph: &InputGraph) -> Self {
        let mut matrix = DistMatrix::new(input_graph.get_num_nodes());
        for e in input_graph.get_edges() {
            matrix.set(e.from, e.to, e.weight);
            matrix.set(e.to, e.from, e.weight);
        }
        matrix
    }

    pub fn get_num_nodes(&self) -> usize {
        self.num_nodes
    }

    pub fn get(&self, from: NodeId, to: NodeId) -> Weight {
        self.matrix[from * (self.num_nodes + 1) + to]
    }

    pub fn set(&mut self, from: NodeId, to: NodeId, weight: Weight) {
        self.matrix[from * (self.num_nodes + 1) + to] = weight;
    }
}

impl fmt::Display for DistMatrix {
    /// Prints the distances row-major, one row per line, space-separated,
    /// with unreachable pairs shown as the raw sentinel integer.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for i in 1..=self.num_nodes {
            for j in 1..=self.num_nodes {
                if j > 1 {
                    write!(f, " ")?;
                }
                write!(f, "{}", self.get(i, j))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
