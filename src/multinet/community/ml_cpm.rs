/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
use std::collections::BTreeSet;

use log::{debug, info};

use crate::multinet::community::clique::{Clique, MaxCliques};
use crate::multinet::community::clique_adjacency::{build_max_adjacency_graph, CliqueAdjacency};
use crate::multinet::community::community::{Community, CommunityStructure};
use crate::multinet::error::{MNError, MNResult};
use crate::multinet::graph_base::MultilayerGraphBase;
use crate::multinet::id_types::{ActorId, LayerId, NodeId};
use crate::multinet::search_problem::{BudgetTracker, CpmSearchProblem, SearchBudget};

/// A union of adjacent cliques that all contain a common set of layers.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct AdjCliqueCommunity {
    pub cliques: BTreeSet<Clique>,
    pub layers: BTreeSet<LayerId>,
}
impl AdjCliqueCommunity {
    pub fn actors(&self) -> BTreeSet<ActorId> {
        self.cliques
            .iter()
            .flat_map(|c| c.actors.iter().cloned())
            .collect()
    }
    pub fn size(&self) -> usize {
        self.actors().len()
    }
    /// The nodes of the member actors on the community's layers.
    pub fn to_community<G: MultilayerGraphBase>(&self, graph: &G) -> Community {
        let mut community = Community::new();
        for actor_id in self.actors() {
            for layer_id in &self.layers {
                let node_id = NodeId::new(actor_id, *layer_id);
                if graph.has_node(node_id) {
                    community.add_node(node_id);
                }
            }
        }
        community
    }
}

type LayerSet = BTreeSet<LayerId>;

/// Expansion state shared by all the recursive calls started from one seed clique.
struct Expansion<'a> {
    adjacency: &'a CliqueAdjacency,
    m: usize,
    processed_cliques: &'a BTreeSet<usize>,
    processed_layer_sets: BTreeSet<LayerSet>,
    tracker: &'a mut BudgetTracker,
    result: &'a mut BTreeSet<AdjCliqueCommunity>,
}

impl<'a> Expansion<'a> {
    fn layers_of(&self, idx: usize) -> MNResult<&LayerSet> {
        self.adjacency
            .get_clique(idx)
            .map(|c| &c.layers)
            .ok_or_else(|| MNError::not_found(format!("clique {}", idx)))
    }

    fn emit(&mut self, cliques: &BTreeSet<usize>, layers: &LayerSet) -> MNResult<()> {
        let mut members: BTreeSet<Clique> = BTreeSet::new();
        for idx in cliques {
            let clique = self
                .adjacency
                .get_clique(*idx)
                .ok_or_else(|| MNError::not_found(format!("clique {}", idx)))?;
            members.insert(clique.clone());
        }
        self.result.insert(AdjCliqueCommunity {
            cliques: members,
            layers: layers.clone(),
        });
        Ok(())
    }

    /// Grows the community with every reachable clique containing all of its layers.
    /// Candidates that share only some (at least m) of the layers are set aside; each
    /// distinct reduced layer set they induce is explored by a recursive call. Every
    /// call strictly shrinks the layer set, which bounds the recursion depth by the
    /// number of layers.
    fn expand(
        &mut self,
        mut cliques: BTreeSet<usize>,
        layers: LayerSet,
        mut candidates: Vec<usize>,
    ) -> MNResult<()> {
        let mut deferred: Vec<usize> = Vec::new();
        while let Some(c) = candidates.pop() {
            self.tracker.tick()?;
            let c_layers = self.layers_of(c)?;
            let shared = c_layers.intersection(&layers).count();
            if shared == layers.len() {
                if self.processed_cliques.contains(&c) {
                    // this community was already grown from an earlier seed
                    return Ok(());
                }
                if !cliques.insert(c) {
                    continue;
                }
                if let Some(neighbors) = self.adjacency.get_neighbors(c) {
                    candidates.extend(neighbors.iter().filter(|j| !cliques.contains(*j)));
                }
            } else if shared >= self.m && !self.processed_layer_sets.contains(c_layers) {
                deferred.push(c);
            }
        }
        self.emit(&cliques, &layers)?;
        self.processed_layer_sets.insert(layers.clone());

        let mut reduced_layer_sets: BTreeSet<LayerSet> = BTreeSet::new();
        for c in &deferred {
            reduced_layer_sets.insert(self.layers_of(*c)?.intersection(&layers).cloned().collect());
        }
        for reduced in reduced_layer_sets {
            if self.processed_layer_sets.contains(&reduced) {
                continue;
            }
            self.expand(cliques.clone(), reduced, deferred.clone())?;
        }
        Ok(())
    }
}

/// Communities of adjacent cliques, merged as long as they keep a common layer set
/// of at least `m` layers.
pub fn find_max_communities(
    adjacency: &CliqueAdjacency,
    m: usize,
) -> MNResult<BTreeSet<AdjCliqueCommunity>> {
    find_max_communities_with_budget(adjacency, m, SearchBudget::unlimited())
}

pub fn find_max_communities_with_budget(
    adjacency: &CliqueAdjacency,
    m: usize,
    budget: SearchBudget,
) -> MNResult<BTreeSet<AdjCliqueCommunity>> {
    let mut result: BTreeSet<AdjCliqueCommunity> = BTreeSet::new();
    let mut processed_cliques: BTreeSet<usize> = BTreeSet::new();
    let mut tracker = budget.tracker();
    for (seed, clique) in adjacency.cliques().iter().enumerate() {
        let candidates: Vec<usize> = adjacency
            .get_neighbors(seed)
            .map(|n| n.iter().cloned().collect())
            .unwrap_or_default();
        let mut expansion = Expansion {
            adjacency,
            m,
            processed_cliques: &processed_cliques,
            processed_layer_sets: BTreeSet::new(),
            tracker: &mut tracker,
            result: &mut result,
        };
        let mut cliques = BTreeSet::new();
        cliques.insert(seed);
        expansion.expand(cliques, clique.layers.clone(), candidates)?;
        processed_cliques.insert(seed);
    }
    debug!("{} clique communities found", result.len());
    Ok(result)
}

pub trait MultilayerCliquePercolation: MaxCliques {
    /// Multilayer clique percolation: maximal cliques with at least `k` actors on `m1`
    /// layers, merged through cliques sharing `k - 1` actors and `m2` layers.
    fn mlcpm(&self, k: usize, m1: usize, m2: usize) -> MNResult<CommunityStructure> {
        self.mlcpm_with_problem(&CpmSearchProblem::new(k, m1, m2))
    }

    fn mlcpm_with_problem(&self, problem: &CpmSearchProblem) -> MNResult<CommunityStructure> {
        problem.validate(self.count_layers())?;
        let cliques = self.find_max_cliques_with_budget(problem.k, problem.m1, problem.budget)?;
        let adjacency = build_max_adjacency_graph(&cliques, problem.k, problem.m2);
        let communities = find_max_communities_with_budget(&adjacency, problem.m2, problem.budget)?;
        let nodes: BTreeSet<Community> = communities
            .iter()
            .map(|c| c.to_community(self))
            .filter(|c| !c.is_empty())
            .collect();
        info!(
            "mlcpm(k={}, m1={}, m2={}): {} cliques, {} communities",
            problem.k,
            problem.m1,
            problem.m2,
            cliques.len(),
            nodes.len()
        );
        Ok(nodes.into_iter().collect())
    }
}
