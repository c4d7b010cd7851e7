/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
use std::collections::{BTreeMap, BTreeSet, VecDeque};

use log::debug;

use crate::multinet::components::{EdgeMode, NodeBase};
use crate::multinet::error::{MNError, MNResult};
use crate::multinet::graph_base::MultilayerGraphBase;
use crate::multinet::id_types::{ActorId, LayerId};

/// Number of steps taken on each layer, indexed like `ParetoDistances::layers`.
pub type LayerSteps = Vec<usize>;

pub struct ParetoDistances {
    pub layers: Vec<LayerId>,
    pub distances: BTreeMap<ActorId, BTreeSet<LayerSteps>>,
}
impl ParetoDistances {
    pub fn get(&self, actor_id: ActorId) -> Option<&BTreeSet<LayerSteps>> {
        self.distances.get(&actor_id)
    }
}

/// `a` is no worse than `b` on every layer.
fn dominates_or_equals(a: &[usize], b: &[usize]) -> bool {
    a.iter().zip(b.iter()).all(|(x, y)| x <= y)
}

pub trait ParetoDistance: MultilayerGraphBase {
    /// Multilayer distances from `source` to every actor. A path is summarized by its
    /// per-layer step counts, and only the non-dominated summaries are kept. The source
    /// is at the zero vector; unreachable actors map to an empty set. Only intralayer
    /// edges are walked.
    fn pareto_distances(&self, source: ActorId) -> MNResult<ParetoDistances> {
        if !self.has_actor(source) {
            return Err(MNError::not_found(format!("{}", source)));
        }
        let layers = self.get_layer_ids();
        let layer_index: BTreeMap<LayerId, usize> =
            layers.iter().enumerate().map(|(i, l)| (*l, i)).collect();
        let mut distances: BTreeMap<ActorId, BTreeSet<LayerSteps>> = self
            .get_actor_ids()
            .into_iter()
            .map(|a| (a, BTreeSet::new()))
            .collect();

        let zero: LayerSteps = vec![0; layers.len()];
        if let Some(d) = distances.get_mut(&source) {
            d.insert(zero.clone());
        }
        let mut worklist: VecDeque<(ActorId, LayerSteps)> = VecDeque::new();
        worklist.push_back((source, zero));
        let mut num_relaxations: usize = 0;

        while let Some((actor_id, steps)) = worklist.pop_front() {
            // superseded since it was queued
            if !distances.get(&actor_id).map_or(false, |d| d.contains(&steps)) {
                continue;
            }
            for node_id in self.get_nodes_of_actor(actor_id) {
                let node = match self.get_node(node_id) {
                    Some(node) => node,
                    None => continue,
                };
                let li = match layer_index.get(&node_id.layer) {
                    Some(li) => *li,
                    None => continue,
                };
                for neighbor in node.get_neighbors(EdgeMode::Out) {
                    if neighbor.layer != node_id.layer {
                        continue;
                    }
                    num_relaxations += 1;
                    let mut extended = steps.clone();
                    extended[li] += 1;
                    let known = distances
                        .entry(neighbor.actor)
                        .or_insert_with(BTreeSet::new);
                    if known.iter().any(|d| dominates_or_equals(d, &extended)) {
                        continue;
                    }
                    let dominated: Vec<LayerSteps> = known
                        .iter()
                        .filter(|d| dominates_or_equals(&extended, d))
                        .cloned()
                        .collect();
                    for d in dominated {
                        known.remove(&d);
                    }
                    known.insert(extended.clone());
                    worklist.push_back((neighbor.actor, extended));
                }
            }
        }
        debug!(
            "pareto distances from {} computed with {} relaxations",
            source, num_relaxations
        );
        Ok(ParetoDistances { layers, distances })
    }
}
