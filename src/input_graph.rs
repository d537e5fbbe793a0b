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
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};

#[cfg(test)]
use rand::rngs::StdRng;
#[cfg(test)]
use rand::Rng;

use serde::{Deserialize, Serialize};

use crate::constants::NodeId;
use crate::constants::Weight;
use crate::constants::WEIGHT_MAX;
use crate::error::Error;

/// An undirected, weighted edge list over a fixed set of nodes. Node ids are
/// 1-based, i.e. valid ids are 1..=num_nodes. The node count is fixed at
/// construction and never changes.
#[derive(Serialize, Deserialize, Clone)]
pub struct InputGraph {
    edges: Vec<Edge>,
    num_nodes: usize,
    frozen: bool,
}

impl InputGraph {
    pub fn new(num_nodes: usize) -> Self {
        assert!(num_nodes >= 1, "graph must have at least one node");
        InputGraph {
            edges: Vec::new(),
            num_nodes,
            frozen: false,
        }
    }

    /// Builds a random input graph, mostly used for testing purposes
    #[cfg(test)]
    pub fn random(rng: &mut StdRng, num_nodes: usize, mean_degree: f32) -> Self {
        InputGraph::build_random_graph(rng, num_nodes, mean_degree)
    }

    /// Reads an input graph from a text file, using the following format:
    /// * empty lines and lines starting with 'c' are ignored:
    ///   c <comment>
    /// * the 'problem line' states the number of nodes, it must come before
    ///   any edge line:
    ///   p <num_nodes>
    /// * one line per undirected edge:
    ///   a <from> <to> <weight>
    ///   where <from> and <to> must be in [1, num_nodes] and <weight> must
    ///   be >= 1 and below the 'no known path' sentinel
    pub fn from_file(filename: &str) -> Result<Self, Error> {
        InputGraph::read_from_file(filename)
    }

    /// Writes the input graph to a text file, using the format described in
    /// `from_file`.
    pub fn to_file(&self, filename: &str) -> Result<(), Error> {
        let mut f = BufWriter::new(File::create(filename)?);
        writeln!(f, "p {}", self.get_num_nodes())?;
        for edge in self.get_edges() {
            writeln!(f, "a {} {} {}", edge.from, edge.to, edge.weight)?;
        }
        Ok(())
    }

    /// Adds an undirected edge. The endpoints are stored normalized (smaller
    /// id first), so later duplicate detection treats (a, b) and (b, a) as
    /// the same edge.
    pub fn add_edge(&mut self, from: NodeId, to: NodeId, weight: Weight) -> Result<(), Error> {
        if self.frozen {
            panic!("Graph is frozen already, for further changes first use thaw()");
        }
        self.check_node_id(from)?;
        self.check_node_id(to)?;
        if from == to {
            return Err(Error::SelfLoop(from));
        }
        // weights at or above the sentinel would either alias a real edge to
        // 'unreachable' or overflow the relaxation sum
        if weight < 1 || weight >= WEIGHT_MAX {
            return Err(Error::WeightOutOfRange { from, to, weight });
        }
        self.edges.push(Edge::new(from.min(to), from.max(to), weight));
        Ok(())
    }

    pub fn get_edges(&self) -> &Vec<Edge> {
        self.check_frozen();
        &self.edges
    }

    pub fn get_num_nodes(&self) -> usize {
        self.num_nodes
    }

    pub fn get_num_edges(&self) -> usize {
        self.check_frozen();
        self.edges.len()
    }

    pub fn freeze(&mut self) {
        if self.frozen {
            panic!("Input graph is already frozen");
        }
        self.sort();
        self.remove_duplicate_edges();
        self.frozen = true;
    }

    pub fn thaw(&mut self) {
        self.frozen = false;
    }

    fn sort(&mut self) {
        self.edges.sort_unstable_by(|a, b| {
            a.from
                .cmp(&b.from)
                .then(a.to.cmp(&b.to))
                .then(a.weight.cmp(&b.weight))
        });
    }

    fn remove_duplicate_edges(&mut self) {
        // we go through (already sorted!) list of edges and remove duplicates
        let len_before = self.edges.len();
        self.edges.dedup_by(|a, b| a.from == b.from && a.to == b.to);
        if len_before != self.edges.len() {
            warn!(
                "There were {} duplicate edges, only the ones with lowest weight were kept",
                len_before - self.edges.len()
            );
        }
    }

    fn check_node_id(&self, node: NodeId) -> Result<(), Error> {
        if node < 1 || node > self.num_nodes {
            return Err(Error::NodeOutOfRange {
                node,
                num_nodes: self.num_nodes,
            });
        }
        Ok(())
    }

    fn check_frozen(&self) {
        if !self.frozen {
            panic!("You need to call freeze() before using the input graph")
        }
    }

    #[cfg(test)]
    fn build_random_graph(rng: &mut StdRng, num_nodes: usize, mean_degree: f32) -> InputGraph {
        let num_edges = (mean_degree * num_nodes as f32) as usize;
        let mut result = InputGraph::new(num_nodes);
        let mut edge_count = 0;
        loop {
            let from = rng.gen_range(1, num_nodes + 1);
            let to = rng.gen_range(1, num_nodes + 1);
            let weight = rng.gen_range(1, 100);
            // loops are rejected here, duplicates are allowed and collapsed
            // by freeze()
            if result.add_edge(from, to, weight).is_ok() {
                edge_count += 1;
            }
            if edge_count == num_edges {
                break;
            }
        }
        result.freeze();
        result
    }

    fn read_from_file(filename: &str) -> Result<Self, Error> {
        let file = File::open(filename)?;
        let reader = BufReader::new(file);
        let mut g: Option<InputGraph> = None;
        for (index, line) in reader.lines().enumerate() {
            let s: String = line?;
            if s.is_empty() || s.starts_with('c') {
                continue;
            } else if s.starts_with("p ") {
                if g.is_some() {
                    return Err(Error::InvalidFormat {
                        line: index + 1,
                        msg: format!("there should be only one problem line, but found: {}", s),
                    });
                }
                let num_nodes =
                    s[2..]
                        .trim()
                        .parse::<usize>()
                        .map_err(|_| Error::InvalidFormat {
                            line: index + 1,
                            msg: format!("invalid problem line: {}", s),
                        })?;
                if num_nodes < 1 {
                    return Err(Error::InvalidFormat {
                        line: index + 1,
                        msg: "there must be at least one node".to_string(),
                    });
                }
                g = Some(InputGraph::new(num_nodes));
            } else if s.starts_with("a ") {
                let g = g.as_mut().ok_or_else(|| Error::InvalidFormat {
                    line: index + 1,
                    msg: "the problem line must come before the edge lines".to_string(),
                })?;
                let (from, to, weight) = InputGraph::read_edge_line(index, &s)?;
                g.add_edge(from, to, weight)?;
            } else {
                return Err(Error::InvalidFormat {
                    line: index + 1,
                    msg: format!(
                        "invalid line: {}, all non-empty lines must start with 'c', 'p' or 'a'",
                        s
                    ),
                });
            }
        }
        let mut g = g.ok_or_else(|| Error::InvalidFormat {
            line: 0,
            msg: "missing problem line".to_string(),
        })?;
        g.freeze();
        Ok(g)
    }

    fn read_edge_line(index: usize, line: &str) -> Result<(NodeId, NodeId, Weight), Error> {
        let invalid = || Error::InvalidFormat {
            line: index + 1,
            msg: format!("invalid edge line: {}", line),
        };
        let mut split = line[2..].split_whitespace();
        let from = split
            .next()
            .ok_or_else(invalid)?
            .parse()
            .map_err(|_| invalid())?;
        let to = split
            .next()
            .ok_or_else(invalid)?
            .parse()
            .map_err(|_| invalid())?;
        let weight = split
            .next()
            .ok_or_else(invalid)?
            .parse()
            .map_err(|_| invalid())?;
        if split.next().is_some() {
            return Err(invalid());
        }
        Ok((from, to, weight))
    }
}

impl fmt::Debug for InputGraph {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "p {}", self.num_nodes)?;
        for e in &self.edges {
            writeln!(f, "a {} {} {}", e.from, e.to, e.weight)?;
        }
        Ok(())
    }
}

#[derive(Serialize, Deserialize, Debug, Copy, Clone)]
pub struct Edge {
    pub from: NodeId,
    pub to: NodeId,
    pub weight: Weight,
}

impl Edge {
    pub fn new(from: NodeId, to: NodeId, weight: Weight) -> Edge {
        Edge { from, to, weight }
    }
}
