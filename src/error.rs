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

use thiserror::Error;

use crate::constants::{NodeId, Weight, WEIGHT_MAX};

/// Errors reported when invalid input reaches the graph boundary. All
/// validation happens here, before the distance matrix is built; the
/// relaxation itself cannot fail.
#[derive(Error, Debug)]
pub enum Error {
    #[error("node id {node} is out of range [1, {num_nodes}]")]
    NodeOutOfRange { node: NodeId, num_nodes: usize },
    #[error("edge weight {weight} for edge {from} {to} must be in [1, {max})", max = WEIGHT_MAX)]
    WeightOutOfRange {
        from: NodeId,
        to: NodeId,
        weight: Weight,
    },
    #[error("self-loop edge at node {0} is not allowed")]
    SelfLoop(NodeId),
    #[error("invalid graph file, line {line}: {msg}")]
    InvalidFormat { line: usize, msg: String },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
