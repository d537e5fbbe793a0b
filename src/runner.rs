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
use std::thread;

use crate::constants::NodeId;
use crate::dist_matrix::DistMatrix;
use crate::relaxation::RelaxTask;

/// Drives the outer pivot loop of the parallel Floyd-Warshall run. For each
/// pivot k one worker thread per source node is launched and the runner
/// blocks until all of them have finished before moving on to k+1, so no
/// worker of phase k+1 can ever observe a partially relaxed phase-k matrix.
///
/// The runner is the sole owner of the matrix lifecycle: it takes the seeded
/// matrix by value, shares it with the workers of each phase behind a single
/// reader/writer lock and hands it back once the last phase has completed.
pub struct PhaseRunner {
    num_nodes: usize,
    matrix: Arc<RwLock<DistMatrix>>,
}

impl PhaseRunner {
    /// Runs all phases and returns the fully relaxed matrix. Given a graph
    /// without negative cycles (weights are positive here, so always) the
    /// result holds the all-pairs shortest distances.
    pub fn run(matrix: DistMatrix) -> DistMatrix {
        let runner = PhaseRunner::new(matrix);
        for k in 1..=runner.num_nodes {
            runner.run_phase(k);
        }
        runner.into_matrix()
    }

    pub fn new(matrix: DistMatrix) -> Self {
        PhaseRunner {
            num_nodes: matrix.get_num_nodes(),
            matrix: Arc::new(RwLock::new(matrix)),
        }
    }

    /// Runs a single phase: fan out one worker per source node, then join
    /// them all. When this returns, `dist[i][j] <= dist[i][k] + dist[k][j]`
    /// holds for every pair (i, j).
    pub fn run_phase(&self, k: NodeId) {
        let mut workers = Vec::with_capacity(self.num_nodes);
        for i in 1..=self.num_nodes {
            let task = RelaxTask {
                pivot: k,
                source: i,
                num_nodes: self.num_nodes,
                matrix: Arc::clone(&self.matrix),
            };
            let handle = thread::Builder::new()
                .name(format!("relax-k{}-i{}", k, i))
                .spawn(move || task.run())
                .unwrap_or_else(|e| panic!("failed to launch relaxation worker: {}", e));
            workers.push(handle);
            // let the freshly launched worker reach the lock before the next
            // one is spawned, purely a scheduling hint
            thread::yield_now();
        }
        for handle in workers {
            if let Err(e) = handle.join() {
                panic!("relaxation worker panicked: {:?}", e);
            }
        }
        debug!("phase k={} complete", k);
    }

    /// Consumes the runner and returns the matrix. Must only be called after
    /// the last phase, when no worker holds a reference anymore.
    pub fn into_matrix(self) -> DistMatrix {
        let lock = Arc::try_unwrap(self.matrix)
            .unwrap_or_else(|_| panic!("matrix still shared after the last phase"));
        lock.into_inner().expect("distance matrix lock poisoned")
    }
}
