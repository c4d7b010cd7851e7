/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
use std::collections::BTreeSet;

use itertools::Itertools;
use log::debug;

use crate::multinet::community::clique::Clique;

/// Undirected adjacency between cliques. Cliques are addressed by their position in
/// `cliques`, which follows the order of the input set.
pub struct CliqueAdjacency {
    cliques: Vec<Clique>,
    adjacency: Vec<BTreeSet<usize>>,
}

impl CliqueAdjacency {
    pub fn cliques(&self) -> &Vec<Clique> {
        &self.cliques
    }
    pub fn get_clique(&self, idx: usize) -> Option<&Clique> {
        self.cliques.get(idx)
    }
    pub fn get_neighbors(&self, idx: usize) -> Option<&BTreeSet<usize>> {
        self.adjacency.get(idx)
    }
    pub fn position(&self, clique: &Clique) -> Option<usize> {
        self.cliques.iter().position(|c| c == clique)
    }
    pub fn are_adjacent(&self, c1: &Clique, c2: &Clique) -> bool {
        match (self.position(c1), self.position(c2)) {
            (Some(i), Some(j)) => self.adjacency[i].contains(&j),
            _ => false,
        }
    }
    pub fn len(&self) -> usize {
        self.cliques.len()
    }
    pub fn is_empty(&self) -> bool {
        self.cliques.is_empty()
    }
    pub fn count_edges(&self) -> usize {
        self.adjacency.iter().map(|n| n.len()).sum::<usize>() / 2
    }
}

/// Two cliques are adjacent when they share at least `k - 1` actors and `m` layers.
/// Every clique is present, including those without neighbors.
pub fn build_max_adjacency_graph(cliques: &BTreeSet<Clique>, k: usize, m: usize) -> CliqueAdjacency {
    let cliques: Vec<Clique> = cliques.iter().cloned().collect();
    let mut adjacency: Vec<BTreeSet<usize>> = vec![BTreeSet::new(); cliques.len()];
    for (i, j) in (0..cliques.len()).tuple_combinations() {
        let common_actors = cliques[i].actors.intersection(&cliques[j].actors).count();
        let common_layers = cliques[i].layers.intersection(&cliques[j].layers).count();
        if common_actors + 1 >= k && common_layers >= m {
            adjacency[i].insert(j);
            adjacency[j].insert(i);
        }
    }
    let result = CliqueAdjacency { cliques, adjacency };
    debug!(
        "clique adjacency graph: {} cliques, {} edges",
        result.len(),
        result.count_edges()
    );
    result
}
