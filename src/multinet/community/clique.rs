/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
use std::collections::BTreeSet;
use std::fmt;

use fxhash::FxHashMap;
use log::{debug, info};

use crate::multinet::error::MNResult;
use crate::multinet::graph_base::MultilayerGraphBase;
use crate::multinet::id_types::{ActorId, LayerId, NodeId};
use crate::multinet::search_problem::{validate_clique_thresholds, BudgetTracker, SearchBudget};

/// A multilayer clique: every pair of `actors` is adjacent on every layer in `layers`,
/// and `layers` is exactly the set of layers on which that holds.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Clique {
    pub actors: BTreeSet<ActorId>,
    pub layers: BTreeSet<LayerId>,
}
impl Clique {
    pub fn new(actors: BTreeSet<ActorId>, layers: BTreeSet<LayerId>) -> Self {
        Self { actors, layers }
    }
    pub fn size(&self) -> usize {
        self.actors.len()
    }
    /// true if `other` has all of our actors on all of our layers
    pub fn is_dominated_by(&self, other: &Clique) -> bool {
        self.actors.is_subset(&other.actors) && self.layers.is_subset(&other.layers)
    }
}
impl fmt::Display for Clique {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let actors: Vec<String> = self.actors.iter().map(|a| a.value().to_string()).collect();
        let layers: Vec<String> = self.layers.iter().map(|l| l.value().to_string()).collect();
        write!(f, "{{{}}}::{{{}}}", actors.join(" "), layers.join(" "))
    }
}

/// A candidate actor together with the layers on which it is adjacent to every actor of
/// the clique under construction.
type Candidate = (ActorId, BTreeSet<LayerId>);

struct Frame {
    clique: Clique,
    extensions: Vec<Candidate>,
    tried: Vec<Candidate>,
    visited: bool,
}

fn intersect(a: &BTreeSet<LayerId>, b: &BTreeSet<LayerId>) -> BTreeSet<LayerId> {
    a.intersection(b).cloned().collect()
}

/// Lazy enumeration of the maximal multilayer cliques with at least `k` actors and `m`
/// layers, as a depth-first search over an explicit stack of frames. Each frame holds
/// the clique under construction, the actors that may still extend it and the actors
/// already tried at this branch. Stack depth never exceeds the number of actors plus one.
///
/// Yields `Err(BudgetExhausted)` once if the search budget runs out, and stops.
pub struct CliqueSearch<'a, G: MultilayerGraphBase> {
    graph: &'a G,
    k: usize,
    m: usize,
    stack: Vec<Frame>,
    tracker: BudgetTracker,
    neighboring_layers_cache: FxHashMap<(ActorId, ActorId), BTreeSet<LayerId>>,
    num_found: usize,
    done: bool,
}

impl<'a, G: MultilayerGraphBase> CliqueSearch<'a, G> {
    pub fn new(graph: &'a G, k: usize, m: usize, budget: SearchBudget) -> MNResult<Self> {
        validate_clique_thresholds(k, m, graph.count_layers())?;
        let mut extensions: Vec<Candidate> = Vec::new();
        for actor_id in graph.get_actor_ids() {
            let layers: BTreeSet<LayerId> = graph
                .get_nodes_of_actor(actor_id)
                .into_iter()
                .map(|n| n.layer)
                .collect();
            if layers.len() >= m {
                extensions.push((actor_id, layers));
            }
        }
        debug!(
            "clique search (k={}, m={}) over {} candidate actors",
            k,
            m,
            extensions.len()
        );
        let root = Frame {
            clique: Clique::new(BTreeSet::new(), graph.get_layer_ids().into_iter().collect()),
            extensions,
            tried: Vec::new(),
            visited: false,
        };
        Ok(Self {
            graph,
            k,
            m,
            stack: vec![root],
            tracker: budget.tracker(),
            neighboring_layers_cache: FxHashMap::default(),
            num_found: 0,
            done: false,
        })
    }

    fn neighboring_layers(&mut self, a1: ActorId, a2: ActorId) -> BTreeSet<LayerId> {
        let key = if a1 <= a2 { (a1, a2) } else { (a2, a1) };
        if let Some(layers) = self.neighboring_layers_cache.get(&key) {
            return layers.clone();
        }
        let layers = neighboring_layers(self.graph, a1, a2);
        self.neighboring_layers_cache.insert(key, layers.clone());
        layers
    }

    /// Candidates that stay connected to `b` on at least m layers, re-annotated with
    /// the layers they share with the extended clique.
    fn filter_candidates(&mut self, b: &Candidate, candidates: &[Candidate]) -> Vec<Candidate> {
        let mut filtered: Vec<Candidate> = Vec::new();
        for (actor_id, layers) in candidates {
            let shared = intersect(&intersect(&b.1, layers), &self.neighboring_layers(b.0, *actor_id));
            if shared.len() >= self.m {
                filtered.push((*actor_id, shared));
            }
        }
        filtered
    }

    /// Advances the search until the next maximal clique is found.
    fn advance(&mut self) -> MNResult<Option<Clique>> {
        loop {
            let top = match self.stack.len() {
                0 => return Ok(None),
                n => n - 1,
            };
            self.tracker.tick()?;
            let mut emitted: Option<Clique> = None;
            {
                let frame = &mut self.stack[top];
                if !frame.visited {
                    if frame.clique.size() + frame.extensions.len() < self.k
                        || frame.clique.layers.len() < self.m
                    {
                        self.stack.pop();
                        continue;
                    }
                    let layers = &frame.clique.layers;
                    let can_extend = frame
                        .extensions
                        .iter()
                        .chain(frame.tried.iter())
                        .any(|(_, l)| l == layers);
                    if frame.clique.size() >= self.k && !can_extend {
                        emitted = Some(frame.clique.clone());
                    }
                    frame.visited = true;
                } else if !frame.extensions.is_empty() {
                    let tried = frame.extensions.remove(0);
                    frame.tried.push(tried);
                }
            }
            let (b, rest, tried, clique) = {
                let frame = &self.stack[top];
                match frame.extensions.first() {
                    Some(b) => (
                        b.clone(),
                        frame.extensions[1..].to_vec(),
                        frame.tried.clone(),
                        frame.clique.clone(),
                    ),
                    None => {
                        self.stack.pop();
                        if emitted.is_some() {
                            return Ok(emitted);
                        }
                        continue;
                    }
                }
            };
            let extensions = self.filter_candidates(&b, &rest);
            let tried = self.filter_candidates(&b, &tried);
            let mut actors = clique.actors;
            actors.insert(b.0);
            let layers = intersect(&clique.layers, &b.1);
            self.stack.push(Frame {
                clique: Clique::new(actors, layers),
                extensions,
                tried,
                visited: false,
            });
            if emitted.is_some() {
                return Ok(emitted);
            }
        }
    }
}

impl<'a, G: MultilayerGraphBase> Iterator for CliqueSearch<'a, G> {
    type Item = MNResult<Clique>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.advance() {
            Ok(Some(clique)) => {
                self.num_found += 1;
                Some(Ok(clique))
            }
            Ok(None) => {
                self.done = true;
                info!(
                    "clique search finished: {} cliques in {} steps",
                    self.num_found,
                    self.tracker.steps()
                );
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

/// Layers on which both actors have a node and the two nodes are joined by an edge
/// in either direction.
pub fn neighboring_layers<G: MultilayerGraphBase>(
    graph: &G,
    a1: ActorId,
    a2: ActorId,
) -> BTreeSet<LayerId> {
    let mut layers: BTreeSet<LayerId> = BTreeSet::new();
    for node_id in graph.get_nodes_of_actor(a1) {
        let other = NodeId::new(a2, node_id.layer);
        if !graph.has_node(other) {
            continue;
        }
        if graph.get_edge(node_id, other).is_some() || graph.get_edge(other, node_id).is_some() {
            layers.insert(node_id.layer);
        }
    }
    layers
}

pub trait MaxCliques: MultilayerGraphBase {
    fn clique_search(&self, k: usize, m: usize, budget: SearchBudget) -> MNResult<CliqueSearch<'_, Self>> {
        CliqueSearch::new(self, k, m, budget)
    }

    /// All maximal cliques with at least `k` actors on at least `m` common layers.
    fn find_max_cliques(&self, k: usize, m: usize) -> MNResult<BTreeSet<Clique>> {
        self.find_max_cliques_with_budget(k, m, SearchBudget::unlimited())
    }

    fn find_max_cliques_with_budget(
        &self,
        k: usize,
        m: usize,
        budget: SearchBudget,
    ) -> MNResult<BTreeSet<Clique>> {
        self.clique_search(k, m, budget)?.collect()
    }
}
