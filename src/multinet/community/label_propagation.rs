/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
use std::collections::BTreeMap;

use log::{debug, warn};
use rand::prelude::*;

use crate::multinet::community::community::{Community, CommunityStructure};
use crate::multinet::components::{EdgeMode, NodeBase};
use crate::multinet::counter::Counter;
use crate::multinet::error::{MNError, MNResult};
use crate::multinet::graph_base::MultilayerGraphBase;
use crate::multinet::id_types::{LayerId, NodeId};
use crate::multinet::search_problem::LabelPropagationParams;

/// Groups nodes by label; communities come out in label order.
pub fn to_community_structure(labels: &BTreeMap<NodeId, usize>) -> CommunityStructure {
    let mut groups: BTreeMap<usize, Community> = BTreeMap::new();
    for (node_id, label) in labels {
        groups
            .entry(*label)
            .or_insert_with(Community::new)
            .add_node(*node_id);
    }
    groups.into_iter().map(|(_, c)| c).collect()
}

pub trait LabelPropagation: MultilayerGraphBase {
    /// Counts the labels of the same-layer neighbors of `node_id`.
    fn neighbor_labels(&self, node_id: NodeId, labels: &BTreeMap<NodeId, usize>) -> Counter<usize> {
        let mut counter = Counter::new();
        if let Some(node) = self.get_node(node_id) {
            for neighbor in node.get_neighbors(EdgeMode::InOut) {
                if neighbor.layer != node_id.layer {
                    continue;
                }
                if let Some(label) = labels.get(neighbor) {
                    counter.inc(*label);
                }
            }
        }
        counter
    }

    /// Asynchronous label propagation on a single layer. Every node starts with its own
    /// label; each sweep visits the nodes in a fresh random order and moves each one to
    /// a most frequent label among its neighbors, keeping the current label when it is
    /// one of them and otherwise choosing uniformly among the ties. Stops as soon as
    /// every node holds a majority label of its neighborhood, or after
    /// `max_iterations` sweeps.
    fn label_propagation_labels<R: Rng>(
        &self,
        layer_id: LayerId,
        rng: &mut R,
        params: &LabelPropagationParams,
    ) -> MNResult<BTreeMap<NodeId, usize>> {
        if !self.has_layer(layer_id) {
            return Err(MNError::not_found(format!("{}", layer_id)));
        }
        let mut order: Vec<NodeId> = self.get_nodes_in_layer(layer_id);
        let mut labels: BTreeMap<NodeId, usize> =
            order.iter().enumerate().map(|(i, n)| (*n, i)).collect();

        for iteration in 0..params.max_iterations {
            order.shuffle(rng);
            for node_id in &order {
                let counter = self.neighbor_labels(*node_id, &labels);
                let top = counter.argmax();
                let current = labels.get(node_id).copied();
                if top.is_empty() || current.map_or(false, |l| top.contains(&l)) {
                    continue;
                }
                if let Some(label) = top.choose(rng) {
                    labels.insert(*node_id, *label);
                }
            }
            let converged = order.iter().all(|node_id| {
                let counter = self.neighbor_labels(*node_id, &labels);
                counter.is_empty()
                    || labels
                        .get(node_id)
                        .map_or(false, |l| counter.count(l) == counter.max_count())
            });
            if converged {
                debug!(
                    "label propagation on {} converged after {} sweeps",
                    layer_id,
                    iteration + 1
                );
                return Ok(labels);
            }
        }
        warn!(
            "label propagation on {} did not converge within {} sweeps",
            layer_id, params.max_iterations
        );
        Ok(labels)
    }

    fn label_propagation_single<R: Rng>(
        &self,
        layer_id: LayerId,
        rng: &mut R,
        params: &LabelPropagationParams,
    ) -> MNResult<CommunityStructure> {
        let labels = self.label_propagation_labels(layer_id, rng, params)?;
        Ok(to_community_structure(&labels))
    }
}
