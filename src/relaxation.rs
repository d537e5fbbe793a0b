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

use std::sync::{Arc, RwLock};

use crate::constants::{NodeId, WEIGHT_MAX};
use crate::dist_matrix::DistMatrix;

/// The unit of work handed to one worker thread: relax `dist[source][j]` for
/// every destination j through the current pivot. Each task is owned by
/// exactly one worker and dropped when the worker finishes.
pub(crate) struct RelaxTask {
    pub pivot: NodeId,
    pub source: NodeId,
    pub num_nodes: usize,
    pub matrix: Arc<RwLock<DistMatrix>>,
}

impl RelaxTask {
    /// Scans all destinations and applies every improvement found. The
    /// improvement test runs under a shared acquisition of the lock; a hit
    /// re-acquires it exclusively and stores the candidate recomputed from
    /// the then-current operands, so a write can never raise a cell.
    pub(crate) fn run(self) {
        for j in 1..=self.num_nodes {
            if self.improves(j) {
                self.relax(j);
            }
        }
    }

    fn improves(&self, j: NodeId) -> bool {
        let (i, k) = (self.source, self.pivot);
        let matrix = self.matrix.read().expect("distance matrix lock poisoned");
        let weight_ik = matrix.get(i, k);
        let weight_kj = matrix.get(k, j);
        // skipping sentinel operands keeps unreachable cells exactly at
        // WEIGHT_MAX and keeps sentinel sums out of the matrix
        if weight_ik == WEIGHT_MAX || weight_kj == WEIGHT_MAX {
            return false;
        }
        weight_ik + weight_kj < matrix.get(i, j)
    }

    fn relax(&self, j: NodeId) {
        let (i, k) = (self.source, self.pivot);
        let mut matrix = self.matrix.write().expect("distance matrix lock poisoned");
        let candidate = matrix.get(i, k) + matrix.get(k, j);
        if candidate < matrix.get(i, j) {
            debug!(
                "worker i={} in phase k={} relaxed dist[{}][{}] to {}",
                i, k, i, j, candidate
            );
            matrix.set(i, j, candidate);
        }
    }
}
